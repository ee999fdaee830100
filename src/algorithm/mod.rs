/// Seeded random carrier texture
pub mod carrier;
/// Depth-driven repetition of the carrier
pub mod synthesis;
