//! Position record layouts
//!
//! A record is either absolute or a delta against the record before it in the
//! same block. The high bit of the first byte selects the layout.

use crate::conversion::{convert_aux_absolute, convert_aux_delta};
use crate::error::DecodeResult;
use crate::parser::stream::PositionStream;
use crate::types::FieldFlags;

/// High bit of the leading 16-bit field marks a delta record
pub const DELTA_MARKER: u16 = 0x8000;

/// One position record as laid out on the wire
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Record {
    Absolute {
        /// Seconds after the stream's base epoch
        time_offset: u32,
        lat: i32,
        lon: i32,
        alt: Option<i16>,
        dtf: Option<i32>,
        lap: Option<u8>,
        aux: Option<i32>,
    },
    Delta {
        /// Seconds back in time from the previous record
        time_delta: u16,
        dlat: i16,
        dlon: i16,
        /// Altitude is absolute even in delta records
        alt: Option<i16>,
        dtf_delta: Option<i16>,
        lap: Option<u8>,
        aux_delta: Option<i16>,
    },
}

impl Record {
    /// Read the next record; the layout is chosen by peeking at the marker bit.
    pub fn read(stream: &mut PositionStream, flags: FieldFlags) -> DecodeResult<Self> {
        let marker = stream.peek_u8()?;
        if (u16::from(marker) << 8) & DELTA_MARKER != 0 {
            Self::read_delta(stream, flags)
        } else {
            Self::read_absolute(stream, flags)
        }
    }

    fn read_absolute(stream: &mut PositionStream, flags: FieldFlags) -> DecodeResult<Self> {
        let time_offset = stream.read_u32()?;
        let lat = stream.read_i32()?;
        let lon = stream.read_i32()?;
        let alt = if flags.altitude {
            Some(stream.read_i16()?)
        } else {
            None
        };
        let dtf = if flags.dtf {
            Some(stream.read_i32()?)
        } else {
            None
        };
        let lap = if flags.has_lap() {
            Some(stream.read_u8()?)
        } else {
            None
        };
        let aux = if flags.aux {
            Some(stream.read_i32()?)
        } else {
            None
        };

        Ok(Record::Absolute {
            time_offset,
            lat,
            lon,
            alt,
            dtf,
            lap,
            aux,
        })
    }

    fn read_delta(stream: &mut PositionStream, flags: FieldFlags) -> DecodeResult<Self> {
        let time_delta = stream.read_u16()? & !DELTA_MARKER;
        let dlat = stream.read_i16()?;
        let dlon = stream.read_i16()?;
        let alt = if flags.altitude {
            Some(stream.read_i16()?)
        } else {
            None
        };
        let dtf_delta = if flags.dtf {
            Some(stream.read_i16()?)
        } else {
            None
        };
        let lap = if flags.has_lap() {
            Some(stream.read_u8()?)
        } else {
            None
        };
        let aux_delta = if flags.aux {
            Some(stream.read_i16()?)
        } else {
            None
        };

        Ok(Record::Delta {
            time_delta,
            dlat,
            dlon,
            alt,
            dtf_delta,
            lap,
            aux_delta,
        })
    }

    pub fn is_delta(&self) -> bool {
        matches!(self, Record::Delta { .. })
    }

    /// Resolve this record against the previous one of its block
    ///
    /// Coordinates stay in raw integer units until the block is complete.
    pub fn resolve(&self, base_time: u32, prev: &RawPosition) -> RawPosition {
        match *self {
            Record::Absolute {
                time_offset,
                lat,
                lon,
                alt,
                dtf,
                lap,
                aux,
            } => RawPosition {
                at: i64::from(base_time) + i64::from(time_offset),
                lat: i64::from(lat),
                lon: i64::from(lon),
                alt,
                dtf: dtf.map(i64::from),
                lap,
                aux: aux.map(convert_aux_absolute),
            },
            Record::Delta {
                time_delta,
                dlat,
                dlon,
                alt,
                dtf_delta,
                lap,
                aux_delta,
            } => RawPosition {
                at: prev.at - i64::from(time_delta),
                lat: prev.lat + i64::from(dlat),
                lon: prev.lon + i64::from(dlon),
                alt,
                dtf: dtf_delta.map(|d| prev.dtf.unwrap_or(0) + i64::from(d)),
                lap,
                aux: aux_delta.map(|d| prev.aux.unwrap_or(0.0) + convert_aux_delta(d)),
            },
        }
    }
}

/// Accumulator state of a decoded record before scaling to degrees
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawPosition {
    pub at: i64,
    pub lat: i64,
    pub lon: i64,
    pub alt: Option<i16>,
    pub dtf: Option<i64>,
    pub lap: Option<u8>,
    pub aux: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_flags() -> FieldFlags {
        FieldFlags::from_byte(0x0f)
    }

    #[test]
    fn test_read_absolute_with_all_fields() {
        let mut data = Vec::new();
        data.extend_from_slice(&10u32.to_be_bytes());
        data.extend_from_slice(&(-1_234_567i32).to_be_bytes());
        data.extend_from_slice(&7_654_321i32.to_be_bytes());
        data.extend_from_slice(&(-3i16).to_be_bytes());
        data.extend_from_slice(&2_500i32.to_be_bytes());
        data.push(4);
        data.extend_from_slice(&42_000_000i32.to_be_bytes());

        let mut stream = PositionStream::new(&data);
        let record = Record::read(&mut stream, all_flags()).unwrap();
        assert!(stream.is_eof());
        assert_eq!(
            record,
            Record::Absolute {
                time_offset: 10,
                lat: -1_234_567,
                lon: 7_654_321,
                alt: Some(-3),
                dtf: Some(2_500),
                lap: Some(4),
                aux: Some(42_000_000),
            }
        );
    }

    #[test]
    fn test_read_delta_strips_marker() {
        let mut data = Vec::new();
        data.extend_from_slice(&(DELTA_MARKER | 300).to_be_bytes());
        data.extend_from_slice(&(-10i16).to_be_bytes());
        data.extend_from_slice(&20i16.to_be_bytes());

        let mut stream = PositionStream::new(&data);
        let record = Record::read(&mut stream, FieldFlags::default()).unwrap();
        assert!(record.is_delta());
        assert_eq!(
            record,
            Record::Delta {
                time_delta: 300,
                dlat: -10,
                dlon: 20,
                alt: None,
                dtf_delta: None,
                lap: None,
                aux_delta: None,
            }
        );
    }

    #[test]
    fn test_lap_without_dtf_is_not_read() {
        let mut data = Vec::new();
        data.extend_from_slice(&0u32.to_be_bytes());
        data.extend_from_slice(&0i32.to_be_bytes());
        data.extend_from_slice(&0i32.to_be_bytes());

        let mut stream = PositionStream::new(&data);
        let record = Record::read(&mut stream, FieldFlags::from_byte(FieldFlags::LAP)).unwrap();
        assert!(stream.is_eof());
        assert!(matches!(record, Record::Absolute { lap: None, .. }));
    }

    #[test]
    fn test_resolve_delta_accumulates() {
        let prev = RawPosition {
            at: 1_000,
            lat: 500,
            lon: -500,
            alt: Some(1),
            dtf: Some(100),
            lap: Some(1),
            aux: Some(1.0),
        };
        let record = Record::Delta {
            time_delta: 60,
            dlat: -5,
            dlon: 7,
            alt: Some(9),
            dtf_delta: Some(-20),
            lap: Some(2),
            aux_delta: Some(16_000),
        };
        let pos = record.resolve(0, &prev);
        assert_eq!(pos.at, 940);
        assert_eq!(pos.lat, 495);
        assert_eq!(pos.lon, -493);
        assert_eq!(pos.alt, Some(9));
        assert_eq!(pos.dtf, Some(80));
        assert_eq!(pos.lap, Some(2));
        assert_eq!(pos.aux, Some(1.5));
    }

    #[test]
    fn test_resolve_absolute_adds_base_time() {
        let record = Record::Absolute {
            time_offset: u32::MAX,
            lat: 1,
            lon: 2,
            alt: None,
            dtf: None,
            lap: None,
            aux: Some(-21_000_000),
        };
        let pos = record.resolve(u32::MAX, &RawPosition::default());
        assert_eq!(pos.at, 2 * i64::from(u32::MAX));
        assert_eq!(pos.aux, Some(-1.0));
    }
}
