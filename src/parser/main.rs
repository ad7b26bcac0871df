use crate::parser::decoder::decode;
use crate::types::Track;
use crate::Result;
use anyhow::Context;
use std::path::Path;

/// Read a position stream file (e.g. a saved `AllPositions3`) and decode it
pub fn decode_file(file_path: &Path) -> Result<Vec<Track>> {
    let data = std::fs::read(file_path)
        .with_context(|| format!("Failed to read position file: {:?}", file_path))?;

    log::debug!("{}: {} bytes", file_path.display(), data.len());

    decode_bytes(&data).with_context(|| format!("Failed to decode {:?}", file_path))
}

/// Decode a position stream held in memory
pub fn decode_bytes(data: &[u8]) -> Result<Vec<Track>> {
    Ok(decode(data)?)
}
