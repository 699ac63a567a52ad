use crate::utils::error::Result;
use base64::{engine::general_purpose, Engine as _};
use std::path::Path;

/// Decodes standard base64 text and writes the bytes to `file_name`.
///
/// ASCII whitespace in `img_string` is ignored so wrapped payloads decode as-is.
/// Nothing is written when decoding fails.
pub fn decode_image_and_save<P: AsRef<Path>>(img_string: &str, file_name: P) -> Result<()> {
    let path = file_name.as_ref();
    let compact: String = img_string
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let img_data = general_purpose::STANDARD.decode(compact)?;
    std::fs::write(path, &img_data)?;

    tracing::info!(
        "Image decoded and saved at: {} ({} bytes)",
        path.display(),
        img_data.len()
    );
    Ok(())
}

pub fn encode_image_to_base64<P: AsRef<Path>>(image_path: P) -> Result<String> {
    let path = image_path.as_ref();
    let bytes = std::fs::read(path)?;
    let encoded = general_purpose::STANDARD.encode(&bytes);

    tracing::info!("Image encoded to base64 from: {}", path.display());
    Ok(encoded)
}
