// src/utils.rs
use anyhow::{Context, Result};
use std::path::Path;

/// Title-case words: a letter following a non-letter is upper-cased, the rest lower-cased
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

/// Ensure the parent directory of an output file exists
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Get file extension in lowercase
pub fn get_file_extension(filename: &Path) -> Option<String> {
    filename
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Validate file extension against allowed types
pub fn validate_file_extension(filename: &Path, allowed: &[&str]) -> Result<()> {
    let ext = get_file_extension(filename)
        .ok_or_else(|| anyhow::anyhow!("File has no extension: {}", filename.display()))?;

    if !allowed.contains(&ext.as_str()) {
        anyhow::bail!(
            "Unsupported file extension: {}. Allowed: {:?}",
            ext,
            allowed
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("bangalore, karnataka"), "Bangalore, Karnataka");
        assert_eq!(title_case("NEW DELHI"), "New Delhi");
        assert_eq!(title_case("power bi"), "Power Bi");
        assert_eq!(title_case("o'neil-smith"), "O'Neil-Smith");
        assert_eq!(title_case("3d modelling"), "3D Modelling");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_get_file_extension() {
        assert_eq!(
            get_file_extension(Path::new("jobs.CSV")),
            Some("csv".to_string())
        );
        assert_eq!(get_file_extension(Path::new("noext")), None);
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("report.svg"), &["svg"]).is_ok());
        assert!(validate_file_extension(Path::new("report.png"), &["svg"]).is_err());
        assert!(validate_file_extension(Path::new("report"), &["svg"]).is_err());
    }

    #[test]
    fn test_ensure_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let target: PathBuf = dir.path().join("nested").join("deeper").join("jobs.csv");
        ensure_parent_dir(&target).unwrap();
        assert!(target.parent().unwrap().is_dir());
        // bare file names have no parent to create
        ensure_parent_dir(Path::new("jobs.csv")).unwrap();
    }
}
