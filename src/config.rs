use clap::Parser;
use std::path::PathBuf;

use crate::training::DEFAULT_YOLO_PROGRAM;

/// Convert LabelMe JSON polygon annotations to a YOLO segmentation dataset.
///
/// Writes dataset/labels/train, dataset/images/train, classes.txt and data.yaml
/// in the current directory.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct Args {
    /// Folder with the LabelMe JSON files and their JPG images
    #[arg(short = 'i', long = "input-folder")]
    pub input_folder: PathBuf,
}

/// Train a YOLO segmentation model on the dataset described by data.yaml.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct TrainArgs {
    /// The Ultralytics command-line program to run
    #[arg(long = "yolo-bin", default_value = DEFAULT_YOLO_PROGRAM)]
    pub yolo_bin: String,
}
