//! Conversion job setup and the file-level run.

use crate::errors::AppError;
use crate::paths::wrl_path_for;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use stl2wrl::{ConversionSummary, ScalingFactor, VrmlGenerator};
use tracing::{debug, info};

/// Logging configuration.
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Install the global subscriber. `RUST_LOG` takes precedence over `level`.
    pub fn init(&self) {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&self.level)),
            )
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

/// One STL file to convert.
pub struct ConvertJob {
    pub stl_path: PathBuf,
    pub scaling: ScalingFactor,
    /// Explicit output location; derived from `stl_path` when absent.
    pub output_path: Option<PathBuf>,
    pub generator: VrmlGenerator,
}

impl ConvertJob {
    pub fn new(stl_path: impl Into<PathBuf>, scaling: ScalingFactor) -> Self {
        Self {
            stl_path: stl_path.into(),
            scaling,
            output_path: None,
            generator: VrmlGenerator::default(),
        }
    }

    pub fn with_output(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(output_path.into());
        self
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| wrl_path_for(&self.stl_path))
    }

    /// Convert the file. The output file is only created once the whole input
    /// parsed successfully.
    #[tracing::instrument(skip_all, fields(stl = %self.stl_path.display()))]
    pub fn run(&self) -> Result<ConversionSummary, AppError> {
        let output_path = self.output_path();
        info!(
            "Converting {} -> {}",
            self.stl_path.display(),
            output_path.display()
        );

        let input = File::open(&self.stl_path).map_err(|source| AppError::Open {
            path: self.stl_path.clone(),
            source,
        })?;

        let mut scene = Vec::new();
        let summary = stl2wrl::convert_with(
            BufReader::new(input),
            &mut scene,
            self.scaling,
            &self.generator,
        )?;

        write_file(&output_path, &scene)?;
        debug!("Wrote {} bytes", scene.len());
        Ok(summary)
    }
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), AppError> {
    let to_error = |source| AppError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(File::create(path).map_err(to_error)?);
    writer.write_all(contents).map_err(to_error)?;
    writer.flush().map_err(to_error)
}
