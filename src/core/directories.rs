use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Creates each directory (and any missing parents) in order.
///
/// Directories that already exist are left alone. Stops at the first failure.
pub fn create_directories<P: AsRef<Path>>(directory_paths: &[P], verbose: bool) -> Result<()> {
    for path in directory_paths {
        let path = path.as_ref();
        fs::create_dir_all(path)?;
        if verbose {
            tracing::info!("Directory created at: {}", path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::FileError;
    use tempfile::TempDir;

    #[test]
    fn test_creates_nested_directories() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let nested = temp_dir.path().join("artifacts/data_ingestion/raw");

        create_directories(&[&nested], true).expect("Failed to create directories");
        assert!(nested.is_dir());
    }

    #[test]
    fn test_is_idempotent() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let paths = vec![temp_dir.path().join("a"), temp_dir.path().join("b/c")];

        create_directories(&paths, false).expect("first call");
        create_directories(&paths, false).expect("second call");
        assert!(paths.iter().all(|p| p.is_dir()));
    }

    #[test]
    fn test_empty_list_is_noop() {
        let paths: [&str; 0] = [];
        assert!(create_directories(&paths, true).is_ok());
    }

    #[test]
    fn test_fails_when_component_is_a_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file = temp_dir.path().join("occupied");
        std::fs::write(&file, b"x").unwrap();
        let after = temp_dir.path().join("after");

        let err = create_directories(&[file.join("child"), after.clone()], false).unwrap_err();
        assert!(matches!(err, FileError::IoError(_)));
        assert!(!after.exists());
    }
}
