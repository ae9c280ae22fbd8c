use log::{debug, error, info, warn};
use std::fs::{copy, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::ConversionError;
use crate::types::{
    FileOutcome, FileReport, ImageAnnotation, OutputDirs, ProcessingStats, Shape,
    IMAGE_EXTENSION,
};
use crate::utils::{create_progress_bar, read_and_parse_json};
use crate::vocabulary::ClassVocabulary;

// Decimal places kept for normalized coordinates
const COORDINATE_PRECISION: usize = 6;

/// YOLO lines produced for one annotation, plus the labels that had no class id.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct YoloLabels {
    pub lines: Vec<String>,
    pub unknown_labels: Vec<String>,
}

/// Convert the given annotation files of `input_dir`, one at a time, in order.
///
/// The output directories must already exist. A failure inside one file is
/// logged and counted, never returned.
pub fn convert_directory(
    json_files: &[PathBuf],
    input_dir: &Path,
    vocabulary: &ClassVocabulary,
    output_dirs: &OutputDirs,
) -> ProcessingStats {
    let pb = create_progress_bar(json_files.len() as u64, "Converting");

    let mut stats = ProcessingStats::new();
    for json_path in json_files {
        match process_annotation_file(json_path, input_dir, vocabulary, output_dirs) {
            Ok(report) => stats.record(report),
            Err(e) => {
                error!("Error processing {}: {}", json_path.display(), e);
                stats.record_failure();
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("Conversion complete");

    info!("Converted {} JSON files.", json_files.len());
    stats
}

/// Convert a single annotation file, write its label file and copy its image.
pub fn process_annotation_file(
    json_path: &Path,
    input_dir: &Path,
    vocabulary: &ClassVocabulary,
    output_dirs: &OutputDirs,
) -> Result<FileReport, ConversionError> {
    let annotation: ImageAnnotation = read_and_parse_json(json_path)?;
    let yolo_labels = convert_annotation(&annotation, vocabulary)?;

    for label in &yolo_labels.unknown_labels {
        warn!(
            "Label '{}' in {} is not a known class, shape skipped",
            label,
            json_path.display()
        );
    }
    let unknown_label_shapes = yolo_labels.unknown_labels.len();

    if yolo_labels.lines.is_empty() {
        debug!("No polygon shapes in {}", json_path.display());
        return Ok(FileReport {
            outcome: FileOutcome::NoPolygons,
            unknown_label_shapes,
        });
    }

    // Outputs keep the annotation's own base name
    let stem = json_path.file_stem().unwrap_or_default().to_string_lossy();

    // Generate label file
    let label_output_path = output_dirs.labels_dir.join(format!("{}.txt", stem));
    let mut writer = BufWriter::new(File::create(&label_output_path)?);
    writer.write_all(yolo_labels.lines.join("\n").as_bytes())?;
    writer.flush()?;

    // Copy the image that shares the annotation's name
    let image_file = format!("{}.{}", stem, IMAGE_EXTENSION);
    let image_path = input_dir.join(&image_file);
    let outcome = if image_path.is_file() {
        copy(&image_path, output_dirs.images_dir.join(&image_file))?;
        FileOutcome::Converted
    } else {
        warn!("Image not found: {}", image_file);
        FileOutcome::MissingImage
    };

    Ok(FileReport {
        outcome,
        unknown_label_shapes,
    })
}

/// Convert the polygon shapes of an annotation into YOLO segmentation lines.
///
/// Shapes are skipped when their label is empty or unknown or when they are
/// not polygons. Image dimensions are validated before any shape is looked at.
pub fn convert_annotation(
    annotation: &ImageAnnotation,
    vocabulary: &ClassVocabulary,
) -> Result<YoloLabels, ConversionError> {
    let image_width = image_dimension(annotation.image_width, "imageWidth")?;
    let image_height = image_dimension(annotation.image_height, "imageHeight")?;

    let mut yolo_labels = YoloLabels::default();
    for shape in &annotation.shapes {
        let label = match shape.label.as_deref() {
            Some(label) if !label.is_empty() => label,
            _ => continue,
        };
        let class_id = match vocabulary.class_id(label) {
            Some(class_id) => class_id,
            None => {
                yolo_labels.unknown_labels.push(label.to_string());
                continue;
            }
        };
        // Only polygons are kept for YOLO segmentation
        if !shape.is_polygon() {
            continue;
        }

        yolo_labels
            .lines
            .push(polygon_line(class_id, shape, image_width, image_height));
    }

    Ok(yolo_labels)
}

// A polygon without points still yields its class id and separator: "<id> "
fn polygon_line(class_id: usize, shape: &Shape, image_width: f64, image_height: f64) -> String {
    let coordinates: Vec<String> = shape
        .points
        .iter()
        .flat_map(|&(x, y)| {
            [
                format_coordinate(normalize_coordinate(x, image_width)),
                format_coordinate(normalize_coordinate(y, image_height)),
            ]
        })
        .collect();
    format!("{} {}", class_id, coordinates.join(" "))
}

fn image_dimension(value: Option<f64>, field: &'static str) -> Result<f64, ConversionError> {
    match value {
        None => Err(ConversionError::MissingDimension { field }),
        Some(value) if value.is_finite() && value > 0.0 => Ok(value),
        Some(value) => Err(ConversionError::InvalidDimension { field, value }),
    }
}

/// Divide a pixel coordinate by the image dimension and round to 6 decimal places.
pub fn normalize_coordinate(value: f64, dimension: f64) -> f64 {
    let normalized = value / dimension;
    // Decimal formatting rounds the exact binary value, like a decimal round()
    format!("{:.*}", COORDINATE_PRECISION, normalized)
        .parse()
        .unwrap_or(normalized)
}

/// Render a normalized coordinate in its shortest decimal form, keeping at
/// least one fractional digit (`0.5`, `1.0`, `0.000015`).
pub fn format_coordinate(value: f64) -> String {
    let rendered = value.to_string();
    if value.is_finite() && !rendered.contains('.') {
        format!("{}.0", rendered)
    } else {
        rendered
    }
}
