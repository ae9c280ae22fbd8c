//! Class vocabulary: the sorted set of labels found across all annotation files.
//!
//! A label's position in the vocabulary is its YOLO class id, and the same
//! order is written to `classes.txt` and to the `names` list of `data.yaml`.

use log::{error, info};
use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::types::AnnotationLabels;
use crate::utils::{create_progress_bar, read_and_parse_json};

/// Sorted, deduplicated class names with a label to id index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassVocabulary {
    names: Vec<String>,
    ids: HashMap<String, usize>,
}

impl ClassVocabulary {
    /// Build a vocabulary from any collection of labels. Empty labels are dropped.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let unique: BTreeSet<String> = labels
            .into_iter()
            .map(Into::into)
            .filter(|label| !label.is_empty())
            .collect();
        let names: Vec<String> = unique.into_iter().collect();
        let ids = names
            .iter()
            .enumerate()
            .map(|(id, name)| (name.clone(), id))
            .collect();
        Self { names, ids }
    }

    /// Class id of `label`, if it is part of the vocabulary.
    pub fn class_id(&self, label: &str) -> Option<usize> {
        self.ids.get(label).copied()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Gather the labels of the given annotation files.
///
/// Files that cannot be read or parsed are logged and contribute nothing.
pub fn scan_labels(json_files: &[PathBuf]) -> ClassVocabulary {
    let pb = create_progress_bar(json_files.len() as u64, "Scanning");

    let mut labels = BTreeSet::new();
    for json_path in json_files {
        match read_and_parse_json::<AnnotationLabels>(json_path) {
            Ok(annotation) => labels.extend(
                annotation
                    .shapes
                    .into_iter()
                    .filter_map(|shape| shape.label)
                    .filter(|label| !label.is_empty()),
            ),
            Err(e) => error!("Error reading {}: {}", json_path.display(), e),
        }
        pb.inc(1);
    }
    pb.finish_with_message("Scan complete");

    ClassVocabulary::from_labels(labels)
}

/// Write one class name per line, in class id order.
pub fn write_classes_file(path: &Path, vocabulary: &ClassVocabulary) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for name in vocabulary.names() {
        writeln!(writer, "{}", name)?;
    }
    writer.flush()?;
    info!(
        "Generated {} with {} classes.",
        path.display(),
        vocabulary.len()
    );
    Ok(())
}
