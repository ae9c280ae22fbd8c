use glob::{glob, Pattern};
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::ConversionError;

/// Read and parse a single JSON file using streaming.
/// The file is parsed directly from a buffered reader instead of being loaded
/// into memory first.
pub fn read_and_parse_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConversionError> {
    let file = fs::File::open(path)?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| ConversionError::JsonParse {
        path: path.to_path_buf(),
        source,
    })
}

/// List the `*.json` files directly inside `dirname`, sorted by name.
///
/// This is the only place where a problem with the input folder itself surfaces
/// as an error; everything after it works file by file.
pub fn list_json_files(dirname: &Path) -> Result<Vec<PathBuf>, ConversionError> {
    if !fs::metadata(dirname)?.is_dir() {
        return Err(ConversionError::NotADirectory {
            path: dirname.to_path_buf(),
        });
    }
    // glob silently yields nothing for a folder it cannot list
    fs::read_dir(dirname)?;

    let pattern = format!("{}/*.json", Pattern::escape(&dirname.to_string_lossy()));
    let mut json_files = Vec::new();
    for entry in glob(&pattern)? {
        match entry {
            Ok(path) if path.is_file() => json_files.push(path),
            Ok(_) => {}
            Err(e) => warn!("Skipping unreadable entry {}: {}", e.path().display(), e.error()),
        }
    }
    Ok(json_files)
}

/// Create a progress bar with the given length and label
pub fn create_progress_bar(len: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "{{spinner:.green}} [{}] [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} ({{eta}})",
                label
            ))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb
}

/// Create an output directory if it is missing. Existing content is kept.
pub fn ensure_output_directory(path: &Path) -> std::io::Result<PathBuf> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AnnotationLabels;

    #[test]
    fn test_list_json_files_sorted_and_filtered() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path();
        fs::write(dir.join("b.json"), "{}").unwrap();
        fs::write(dir.join("a.json"), "{}").unwrap();
        fs::write(dir.join("a.jpg"), b"\xFF\xD8\xFF").unwrap();
        fs::write(dir.join("notes.JSON"), "{}").unwrap();
        fs::create_dir(dir.join("nested.json")).unwrap();
        fs::create_dir(dir.join("sub")).unwrap();
        fs::write(dir.join("sub/c.json"), "{}").unwrap();

        let files = list_json_files(dir).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
    }

    #[test]
    fn test_list_json_files_handles_glob_metacharacters() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("batch [1]");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("x.json"), "{}").unwrap();

        assert_eq!(list_json_files(&dir).unwrap().len(), 1);
    }

    #[test]
    fn test_list_json_files_missing_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = list_json_files(&temp_dir.path().join("absent"));
        assert!(matches!(result, Err(ConversionError::Io(_))));
    }

    #[test]
    fn test_list_json_files_on_a_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file = temp_dir.path().join("plain.txt");
        fs::write(&file, "x").unwrap();
        let result = list_json_files(&file);
        assert!(matches!(result, Err(ConversionError::NotADirectory { .. })));
    }

    #[test]
    fn test_read_and_parse_json_reports_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = read_and_parse_json::<AnnotationLabels>(&path).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_ensure_output_directory_keeps_content() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("out/labels");
        ensure_output_directory(&dir).unwrap();
        fs::write(dir.join("keep.txt"), "x").unwrap();
        ensure_output_directory(&dir).unwrap();
        assert!(dir.join("keep.txt").exists());
    }
}
