use crate::error::DecodeResult;
use crate::parser::stream::PositionStream;
use crate::types::{FieldFlags, StreamHeader};

/// Parse the 5-byte stream header: flags byte followed by the base epoch
pub fn parse_header(stream: &mut PositionStream) -> DecodeResult<StreamHeader> {
    let flags = FieldFlags::from_byte(stream.read_u8()?);
    let base_time = stream.read_u32()?;

    log::debug!(
        "stream header: flags {:#04x}, base time {}",
        flags.to_byte(),
        base_time
    );

    Ok(StreamHeader { flags, base_time })
}
