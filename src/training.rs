//! Hands the converted dataset to the Ultralytics `yolo` command line.

use log::info;
use std::process::Command;

use crate::error::TrainingError;
use crate::types::DATA_YAML_FILE;

/// Program launched when no other is given
pub const DEFAULT_YOLO_PROGRAM: &str = "yolo";

/// The fixed training run: pretrained segmentation checkpoint and hyperparameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingConfig {
    pub model: String,
    pub data: String,
    pub epochs: u32,
    pub image_size: u32,
    pub patience: u32,
    pub batch: u32,
    pub device: String,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            model: "yolov8m-seg.pt".to_string(),
            data: DATA_YAML_FILE.to_string(),
            epochs: 500,
            image_size: 1024,
            patience: 10,
            batch: 4,
            device: "0".to_string(),
        }
    }
}

impl TrainingConfig {
    /// Arguments for `yolo segment train`, in `key=value` form.
    pub fn to_cli_args(&self) -> Vec<String> {
        vec![
            "segment".to_string(),
            "train".to_string(),
            format!("model={}", self.model),
            format!("data={}", self.data),
            format!("epochs={}", self.epochs),
            format!("imgsz={}", self.image_size),
            format!("patience={}", self.patience),
            format!("batch={}", self.batch),
            format!("device={}", self.device),
        ]
    }
}

/// Run `program` with the training arguments and wait for it to finish.
///
/// Output of the framework goes straight to this process's terminal.
pub fn run_training(program: &str, config: &TrainingConfig) -> Result<(), TrainingError> {
    let args = config.to_cli_args();
    info!("Launching: {} {}", program, args.join(" "));

    let status = Command::new(program)
        .args(&args)
        .status()
        .map_err(|source| TrainingError::Launch {
            program: program.to_string(),
            source,
        })?;

    if !status.success() {
        return Err(TrainingError::Failed { status });
    }
    info!("Training finished.");
    Ok(())
}
