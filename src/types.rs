use serde::Deserialize;
use std::path::{Path, PathBuf};

// Output locations, relative to the directory the converter runs in
pub const LABELS_DIR: &str = "dataset/labels/train";
pub const IMAGES_DIR: &str = "dataset/images/train";
pub const CLASSES_FILE: &str = "classes.txt";
pub const DATA_YAML_FILE: &str = "data.yaml";

// The only image extension paired with an annotation file
pub const IMAGE_EXTENSION: &str = "jpg";

// The shape type kept in the segmentation output
pub const POLYGON_SHAPE_TYPE: &str = "polygon";

// The Shape struct representing annotated shapes
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Shape {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub points: Vec<(f64, f64)>,
    #[serde(default)]
    pub shape_type: Option<String>,
}

impl Shape {
    pub fn is_polygon(&self) -> bool {
        self.shape_type.as_deref() == Some(POLYGON_SHAPE_TYPE)
    }
}

// The ImageAnnotation struct representing the annotation information of an image.
// Keys this tool has no use for (version, flags, imagePath, imageData, ...) are ignored.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ImageAnnotation {
    #[serde(default)]
    pub shapes: Vec<Shape>,
    pub image_height: Option<f64>,
    pub image_width: Option<f64>,
}

// Label-only view of an annotation file, used by the vocabulary scan so that a
// file with odd geometry still contributes its labels
#[derive(Debug, Deserialize, Default)]
pub struct AnnotationLabels {
    #[serde(default)]
    pub shapes: Vec<ShapeLabel>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ShapeLabel {
    #[serde(default)]
    pub label: Option<String>,
}

// Struct to hold the paths of everything the converter writes
#[derive(Debug, Clone)]
pub struct OutputDirs {
    pub labels_dir: PathBuf,
    pub images_dir: PathBuf,
    pub classes_file: PathBuf,
    pub data_yaml: PathBuf,
}

impl OutputDirs {
    /// Resolve the fixed output layout against `root`.
    pub fn rooted_at(root: &Path) -> Self {
        Self {
            labels_dir: root.join(LABELS_DIR),
            images_dir: root.join(IMAGES_DIR),
            classes_file: root.join(CLASSES_FILE),
            data_yaml: root.join(DATA_YAML_FILE),
        }
    }
}

/// What happened to a single annotation file during conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Label file written and the matching image copied
    Converted,
    /// Label file written but no image was found next to the JSON file
    MissingImage,
    /// No polygon survived filtering, nothing written
    NoPolygons,
}

/// Outcome of one annotation file plus the shapes dropped for an unknown label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileReport {
    pub outcome: FileOutcome,
    pub unknown_label_shapes: usize,
}

// Struct to hold processing statistics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessingStats {
    pub total_files_processed: usize,
    pub label_files_written: usize,
    pub images_copied: usize,
    pub skipped_missing_image: usize,
    pub skipped_no_polygons: usize,
    pub failed_conversions: usize,
    pub unknown_label_shapes: usize,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, report: FileReport) {
        self.total_files_processed += 1;
        self.unknown_label_shapes += report.unknown_label_shapes;
        match report.outcome {
            FileOutcome::Converted => {
                self.label_files_written += 1;
                self.images_copied += 1;
            }
            FileOutcome::MissingImage => {
                self.label_files_written += 1;
                self.skipped_missing_image += 1;
            }
            FileOutcome::NoPolygons => self.skipped_no_polygons += 1,
        }
    }

    pub fn record_failure(&mut self) {
        self.total_files_processed += 1;
        self.failed_conversions += 1;
    }

    pub fn print_summary(&self) {
        log::info!("=== Processing Summary ===");
        log::info!("Total files processed: {}", self.total_files_processed);
        log::info!("Label files written: {}", self.label_files_written);
        log::info!("Images copied: {}", self.images_copied);
        log::info!("Skipped (no polygon shapes): {}", self.skipped_no_polygons);
        log::info!("Failed conversions: {}", self.failed_conversions);

        if self.skipped_missing_image > 0 {
            log::warn!(
                "Label files written without an image: {}",
                self.skipped_missing_image
            );
        }
        if self.unknown_label_shapes > 0 {
            log::warn!(
                "Shapes dropped because their label is not a known class: {}",
                self.unknown_label_shapes
            );
        }
    }
}
