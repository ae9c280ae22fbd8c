use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors raised while turning LabelMe annotations into a YOLO dataset.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON ({path}): {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Annotation has no {field}")]
    MissingDimension { field: &'static str },

    #[error("Annotation has an invalid {field}: {value}")]
    InvalidDimension { field: &'static str, value: f64 },

    #[error("Input folder is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Invalid JSON search pattern: {0}")]
    GlobPattern(#[from] glob::PatternError),
}

/// Errors raised while handing the dataset over to the training framework.
#[derive(Debug, Error)]
pub enum TrainingError {
    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Training exited with {status}")]
    Failed { status: ExitStatus },
}
