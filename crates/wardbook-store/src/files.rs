//! Attachment codecs: file bytes to and from base64 data URIs
//!
//! Attachments are embedded in property records as data URIs rather than
//! stored as separate binary files, so a collection stays one
//! self-contained JSON value.

use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use wardbook_core::{StoreError, StoreResult};

fn mime_for_extension(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        "csv" => "text/csv",
        _ => "application/octet-stream",
    }
}

/// Read a file and encode it as a `data:<mime>;base64,<payload>` URI.
pub fn file_to_data_uri(path: &Path) -> StoreResult<String> {
    let bytes = fs::read(path)?;
    let mime = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or("application/octet-stream", mime_for_extension);
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

/// Decode a data URI back into its MIME type and raw bytes.
pub fn data_uri_to_bytes(uri: &str) -> StoreResult<(String, Vec<u8>)> {
    let (header, payload) = uri
        .split_once(',')
        .ok_or_else(|| StoreError::deserialization("missing data URI payload"))?;
    let mime = header
        .strip_prefix("data:")
        .and_then(|h| h.strip_suffix(";base64"))
        .ok_or_else(|| StoreError::deserialization("not a base64 data URI"))?;
    let bytes = STANDARD
        .decode(payload)
        .map_err(|err| StoreError::deserialization(format!("invalid base64 payload: {err}")))?;
    Ok((mime.to_string(), bytes))
}
