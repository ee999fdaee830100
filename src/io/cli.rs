//! Command-line interface for batch converting depth map PNGs into stereograms

use crate::algorithm::synthesis::{EyeSeparation, SynthesisConfig, Synthesizer};
use crate::io::configuration::{DEFAULT_EYE_SEPARATION, INPUT_EXTENSION, OUTPUT_SUFFIX};
use crate::io::error::{Result, StereogramError, unsupported_target};
use crate::io::image::{DepthEncoding, export_stereogram_png, load_depth_map};
use crate::io::progress::{ProgressManager, Stage};
use clap::Parser;
use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "autostereogram")]
#[command(
    author,
    version,
    about = "Generate single-image autostereograms from grayscale depth maps"
)]
/// Command-line arguments for the stereogram tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Depth map PNG file or directory of depth maps to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Maximum horizontal shift in pixels, reached at the nearest depth
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_EYE_SEPARATION,
        allow_negative_numbers = true
    )]
    pub eye_separation: i64,

    /// Carrier seed for reproducible output (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output path when TARGET is a single file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Stretch the depth map's value range to the full 0-255 scale
    #[arg(short, long)]
    pub normalize: bool,

    /// Process rows on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Suppress progress output and advisories
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log seeds and timings
    #[arg(short, long)]
    pub verbose: bool,

    /// Process files even if output exists
    #[arg(long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level implied by the verbosity flags
    pub const fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Error
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }

    /// Depth decoding selected by the flags
    pub const fn depth_encoding(&self) -> DepthEncoding {
        if self.normalize {
            DepthEncoding::Stretch
        } else {
            DepthEncoding::Luma8
        }
    }

    /// Validated synthesis configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the eye separation is zero or negative
    pub fn synthesis_config(&self) -> Result<SynthesisConfig> {
        let mut config = SynthesisConfig::new(EyeSeparation::new(self.eye_separation)?);
        config.seed = self.seed;
        config.parallel = !self.sequential;
        Ok(config)
    }
}

/// Orchestrates batch processing of depth maps with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// Parameters are validated before any file is touched.
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        let synthesizer = Synthesizer::new(self.cli.synthesis_config()?);
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, (input, output)) in files.iter().enumerate() {
            self.process_file(&synthesizer, input, output, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Resolve (input, output) pairs for the target
    fn collect_files(&self) -> Result<Vec<(PathBuf, PathBuf)>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !has_input_extension(target) {
                return Err(unsupported_target(
                    target,
                    &"target file must be a PNG image",
                ));
            }
            let output = self
                .cli
                .output
                .clone()
                .unwrap_or_else(|| output_path_for(target));
            if self.should_process_file(target, &output) {
                Ok(vec![(target.clone(), output)])
            } else {
                Ok(vec![])
            }
        } else if target.is_dir() {
            if self.cli.output.is_some() {
                return Err(unsupported_target(
                    target,
                    &"--output can only be used with a single file target",
                ));
            }
            let entries = std::fs::read_dir(target).map_err(|e| StereogramError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;
            let mut files = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if !has_input_extension(&path) || is_own_output(&path) {
                    continue;
                }
                let output = output_path_for(&path);
                if self.should_process_file(&path, &output) {
                    files.push((path, output));
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(unsupported_target(
                target,
                &"target must be a PNG file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path, output_path: &Path) -> bool {
        if !self.cli.skip_existing() || !output_path.exists() {
            return true;
        }
        log::info!("Skipping: {} (output exists)", input_path.display());
        false
    }

    fn process_file(
        &mut self,
        synthesizer: &Synthesizer,
        input_path: &Path,
        output_path: &Path,
        index: usize,
    ) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let depth = load_depth_map(input_path, self.cli.depth_encoding())?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.advance(index, Stage::Synthesizing);
        }

        let stereogram = synthesizer.synthesize(&depth)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.advance(index, Stage::Writing);
        }

        export_stereogram_png(&stereogram, output_path)?;

        log::debug!(
            "{} -> {} ({}x{}, seed {:?}) in {:?}",
            input_path.display(),
            output_path.display(),
            stereogram.cols(),
            stereogram.rows(),
            stereogram.seed(),
            start_time.elapsed()
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, start_time.elapsed());
        }

        Ok(())
    }
}

fn has_input_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(INPUT_EXTENSION))
}

// Keeps re-runs over a directory from turning stereograms into new inputs
fn is_own_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}

/// Output path written next to the input, e.g. `scene.png` -> `scene_stereogram.png`
pub fn output_path_for(input_path: &Path) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = format!(
        "{}{OUTPUT_SUFFIX}.{INPUT_EXTENSION}",
        stem.to_string_lossy()
    );

    if let Some(parent) = input_path.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}
