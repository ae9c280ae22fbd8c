//! LabelMe to YOLO segmentation dataset converter
//!
//! This library turns a folder of LabelMe JSON polygon annotations into YOLO
//! segmentation label files, a `classes.txt` list and a `data.yaml` manifest,
//! and can launch an Ultralytics training run on the result.

pub mod config;
pub mod conversion;
pub mod error;
pub mod io;
pub mod training;
pub mod types;
pub mod utils;
pub mod vocabulary;
pub mod yolo_dataset;

// Re-export commonly used types and functions
pub use config::{Args, TrainArgs};
pub use conversion::{convert_annotation, convert_directory, process_annotation_file};
pub use error::{ConversionError, TrainingError};
pub use io::{create_data_yaml, setup_output_directories};
pub use training::{run_training, TrainingConfig};
pub use types::{FileOutcome, FileReport, ImageAnnotation, OutputDirs, ProcessingStats, Shape};
pub use vocabulary::{scan_labels, write_classes_file, ClassVocabulary};
pub use yolo_dataset::{process_dataset, DatasetSummary};
