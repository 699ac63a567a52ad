//! Binary object persistence.
//!
//! Values go through `serde` and are stored with `bincode`. The format is an
//! implementation detail and is only meant to be read back by this crate.

use crate::utils::error::Result;
use bincode::Options;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

// Same wire format as `bincode::serialize`: fixed-width integers, trailing bytes allowed.
fn binary_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .allow_trailing_bytes()
}

/// Serializes `binary_data` to `binary_path`, replacing any existing file.
pub fn save_binary_object<T, P>(binary_data: &T, binary_path: P) -> Result<()>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = binary_path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    binary_options().serialize_into(&mut writer, binary_data)?;
    writer.flush()?;

    tracing::info!("Binary file saved at: {}", path.display());
    Ok(())
}

/// Reads back a value written by [`save_binary_object`].
///
/// Decoding is capped at the file length, so a corrupt length prefix fails
/// instead of allocating.
pub fn load_binary_object<T, P>(binary_path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = binary_path.as_ref();
    let file = File::open(path)?;
    let limit = file.metadata()?.len();
    let data = binary_options()
        .with_limit(limit)
        .deserialize_from(BufReader::new(file))?;

    tracing::info!("Binary file loaded from: {}", path.display());
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::FileError;
    use serde::Deserialize;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct LabelEncoder {
        classes: Vec<String>,
        index: BTreeMap<String, u32>,
        threshold: f64,
    }

    #[test]
    fn test_struct_survives_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("encoder.bin");
        let encoder = LabelEncoder {
            classes: vec!["healthy".into(), "rust".into()],
            index: BTreeMap::from([("healthy".into(), 0), ("rust".into(), 1)]),
            threshold: 0.5,
        };

        save_binary_object(&encoder, &path).unwrap();
        let loaded: LabelEncoder = load_binary_object(&path).unwrap();
        assert_eq!(loaded, encoder);
    }

    #[test]
    fn test_truncated_file_is_serialization_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("weights.bin");
        save_binary_object(&vec![1.0f32, 2.0, 3.0], &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        std::fs::write(&path, &bytes[..bytes.len() - 2]).unwrap();

        let err = load_binary_object::<Vec<f32>, _>(&path).unwrap_err();
        assert!(matches!(err, FileError::BinaryError(_)));
    }

    #[test]
    fn test_corrupt_length_prefix_is_serialization_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("corrupt.bin");
        std::fs::write(&path, (1u64 << 40).to_le_bytes()).unwrap();

        let err = load_binary_object::<String, _>(&path).unwrap_err();
        assert!(matches!(err, FileError::BinaryError(_)));

        let err = load_binary_object::<Vec<u8>, _>(&path).unwrap_err();
        assert!(matches!(err, FileError::BinaryError(_)));
    }

    #[test]
    fn test_format_matches_plain_bincode() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("classes.bin");
        let classes = vec!["healthy".to_string(), "rust".to_string()];

        save_binary_object(&classes, &path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), bincode::serialize(&classes).unwrap());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = load_binary_object::<u64, _>(dir.path().join("absent.bin")).unwrap_err();
        assert!(matches!(err, FileError::IoError(_)));
    }
}
