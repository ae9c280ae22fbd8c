use log::info;
use std::path::Path;

use crate::conversion::convert_directory;
use crate::error::ConversionError;
use crate::io::create_data_yaml;
use crate::types::{OutputDirs, ProcessingStats};
use crate::utils::list_json_files;
use crate::vocabulary::{scan_labels, write_classes_file, ClassVocabulary};

/// Result of a full conversion run.
#[derive(Debug, Clone)]
pub struct DatasetSummary {
    pub vocabulary: ClassVocabulary,
    pub stats: ProcessingStats,
}

/// Main dataset processing pipeline.
///
/// The input folder is listed once and both passes walk that same list: pass 1
/// builds the class vocabulary and writes `classes.txt`, pass 2 converts every
/// annotation against that fixed vocabulary, and `data.yaml` is written last
/// from the same vocabulary.
pub fn process_dataset(
    dirname: &Path,
    output_dirs: &OutputDirs,
) -> Result<DatasetSummary, ConversionError> {
    let json_files = list_json_files(dirname)?;
    info!("Found {} JSON files in {}.", json_files.len(), dirname.display());

    info!("Pass 1: Scanning JSON files to build the class list...");
    let vocabulary = scan_labels(&json_files);
    write_classes_file(&output_dirs.classes_file, &vocabulary)?;

    info!("Pass 2: Converting annotations to YOLO format...");
    let stats = convert_directory(&json_files, dirname, &vocabulary, output_dirs);
    stats.print_summary();

    info!("Creating data.yaml file...");
    create_data_yaml(&output_dirs.data_yaml, &vocabulary)?;
    info!("Conversion process completed successfully.");

    Ok(DatasetSummary { vocabulary, stats })
}
