mod algorithm;
