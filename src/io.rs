use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::types::{OutputDirs, IMAGES_DIR};
use crate::utils::ensure_output_directory;
use crate::vocabulary::ClassVocabulary;

/// Set up the directory structure for YOLO dataset output under `root`
pub fn setup_output_directories(root: &Path) -> std::io::Result<OutputDirs> {
    let output_dirs = OutputDirs::rooted_at(root);
    ensure_output_directory(&output_dirs.labels_dir)?;
    ensure_output_directory(&output_dirs.images_dir)?;
    Ok(output_dirs)
}

/// Create the data.yaml manifest for YOLO training.
///
/// Validation points at the training images, and `names` follows the
/// vocabulary order so that entry i is class id i in the label files.
pub fn create_data_yaml(path: &Path, vocabulary: &ClassVocabulary) -> std::io::Result<()> {
    let mut data_yaml = BufWriter::new(File::create(path)?);
    data_yaml.write_all(render_data_yaml(vocabulary).as_bytes())?;
    data_yaml.flush()?;
    info!(
        "{} generated with {} classes.",
        path.display(),
        vocabulary.len()
    );
    Ok(())
}

/// Render the manifest text written by [`create_data_yaml`].
pub fn render_data_yaml(vocabulary: &ClassVocabulary) -> String {
    let names: Vec<String> = vocabulary
        .names()
        .iter()
        .map(|name| yaml_single_quoted(name))
        .collect();

    let mut yaml_content = format!(
        "train: {}\nval: {}  # Same as train for now\n\n",
        IMAGES_DIR, IMAGES_DIR
    );
    yaml_content.push_str(&format!("nc: {}\n", vocabulary.len()));
    yaml_content.push_str(&format!("names: [{}]\n", names.join(", ")));
    yaml_content
}

fn yaml_single_quoted(raw: &str) -> String {
    format!("'{}'", raw.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_render_data_yaml() {
        let vocabulary = ClassVocabulary::from_labels(["dog", "cat"]);
        assert_eq!(
            render_data_yaml(&vocabulary),
            "train: dataset/images/train\n\
             val: dataset/images/train  # Same as train for now\n\
             \n\
             nc: 2\n\
             names: ['cat', 'dog']\n"
        );
    }

    #[test]
    fn test_render_data_yaml_empty_and_quoted() {
        assert!(render_data_yaml(&ClassVocabulary::default()).ends_with("nc: 0\nnames: []\n"));

        let vocabulary = ClassVocabulary::from_labels(["o'clock"]);
        assert!(render_data_yaml(&vocabulary).ends_with("names: ['o''clock']\n"));
    }

    #[test]
    fn test_create_data_yaml() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output_dirs = setup_output_directories(temp_dir.path()).unwrap();
        assert!(output_dirs.labels_dir.is_dir());
        assert!(output_dirs.images_dir.is_dir());

        let vocabulary = ClassVocabulary::from_labels(["person"]);
        create_data_yaml(&output_dirs.data_yaml, &vocabulary).unwrap();

        let yaml_content = fs::read_to_string(&output_dirs.data_yaml).unwrap();
        assert!(yaml_content.contains("train: dataset/images/train\n"));
        assert!(yaml_content.contains("nc: 1\n"));
        assert!(yaml_content.contains("names: ['person']"));
    }
}
