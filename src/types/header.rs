#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Optional per-record fields announced in the flags byte of a stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldFlags {
    pub altitude: bool,
    pub dtf: bool,
    pub lap: bool,
    pub aux: bool,
}

impl FieldFlags {
    pub const ALTITUDE: u8 = 0x01;
    pub const DTF: u8 = 0x02;
    pub const LAP: u8 = 0x04;
    pub const AUX: u8 = 0x08;

    pub fn from_byte(flags: u8) -> Self {
        Self {
            altitude: flags & Self::ALTITUDE != 0,
            dtf: flags & Self::DTF != 0,
            lap: flags & Self::LAP != 0,
            aux: flags & Self::AUX != 0,
        }
    }

    pub fn to_byte(self) -> u8 {
        let mut flags = 0;
        if self.altitude {
            flags |= Self::ALTITUDE;
        }
        if self.dtf {
            flags |= Self::DTF;
        }
        if self.lap {
            flags |= Self::LAP;
        }
        if self.aux {
            flags |= Self::AUX;
        }
        flags
    }

    /// The lap counter is only transmitted together with the DTF field.
    pub fn has_lap(self) -> bool {
        self.dtf && self.lap
    }
}

/// Stream header: field flags and the base epoch all absolute records refer to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StreamHeader {
    pub flags: FieldFlags,
    /// Unix timestamp in seconds
    pub base_time: u32,
}

impl StreamHeader {
    /// Size of the header on the wire in bytes
    pub const SIZE: usize = 5;
}
