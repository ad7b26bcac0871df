//! Position stream decoder
//!
//! Layout after the header: repeated blocks of
//! `{vessel id: u16, point count: u16, point count × record}` until the
//! buffer is exhausted. Records inside a block are ordered newest first.

use crate::conversion::convert_coordinate;
use crate::error::DecodeResult;
use crate::parser::header::parse_header;
use crate::parser::record::{RawPosition, Record};
use crate::parser::stream::PositionStream;
use crate::types::{Moment, StreamHeader, Track};

/// Decode a complete position stream into one track per vessel
///
/// This is a purely structural transform: no derived fields are computed.
pub fn decode(data: &[u8]) -> DecodeResult<Vec<Track>> {
    let mut stream = PositionStream::new(data);
    let header = parse_header(&mut stream)?;

    let mut tracks = Vec::new();
    while !stream.is_eof() {
        tracks.push(decode_block(&mut stream, &header)?);
    }

    log::debug!(
        "decoded {} track(s) from {} bytes",
        tracks.len(),
        data.len()
    );
    Ok(tracks)
}

/// Decode one vessel block
pub fn decode_block(stream: &mut PositionStream, header: &StreamHeader) -> DecodeResult<Track> {
    let id = stream.read_u16()?;
    let count = stream.read_u16()?;

    let mut positions: Vec<RawPosition> = Vec::with_capacity(usize::from(count));
    for index in 0..count {
        let record = Record::read(stream, header.flags)?;
        if index == 0 && record.is_delta() {
            log::warn!(
                "vessel {}: block starts with a delta record at offset {}, resolving against zero",
                id,
                stream.position()
            );
        }
        let prev = positions.last().copied().unwrap_or_default();
        positions.push(record.resolve(header.base_time, &prev));
    }

    log::debug!("vessel {}: {} position(s)", id, positions.len());

    let moments = positions.into_iter().map(into_moment).collect();
    Ok(Track::new(id, moments))
}

fn into_moment(pos: RawPosition) -> Moment {
    Moment {
        at: pos.at,
        lat: convert_coordinate(pos.lat),
        lon: convert_coordinate(pos.lon),
        alt: pos.alt,
        reported_dtf: pos.dtf,
        lap: pos.lap,
        aux: pos.aux,
        ..Default::default()
    }
}
