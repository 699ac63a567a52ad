use crate::utils::error::Result;
use std::path::Path;

const BYTES_PER_KB: f64 = 1024.0;

/// File size in kilobytes, rounded to the nearest integer with ties to even.
pub fn file_size_kb<P: AsRef<Path>>(file_path: P) -> Result<u64> {
    let bytes = std::fs::metadata(file_path.as_ref())?.len();
    Ok(bytes_to_kb(bytes))
}

/// Human-readable size label such as `"~ 2 KB"`.
pub fn get_file_size_label<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let path = file_path.as_ref();
    let label = format!("~ {} KB", file_size_kb(path)?);
    tracing::debug!("{} is {}", path.display(), label);
    Ok(label)
}

fn bytes_to_kb(bytes: u64) -> u64 {
    (bytes as f64 / BYTES_PER_KB).round_ties_even() as u64
}
