use crate::error::{DecodeError, DecodeResult};

/// Big-endian reader over a position stream buffer
///
/// Every read checks the remaining length first and fails with
/// [`DecodeError::Truncated`] instead of reading past the end.
pub struct PositionStream<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> PositionStream<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.data.len()
    }

    fn take<const N: usize>(&mut self) -> DecodeResult<[u8; N]> {
        if self.remaining() < N {
            return Err(DecodeError::Truncated {
                offset: self.pos,
                wanted: N,
                available: self.remaining(),
            });
        }
        let mut buf = [0u8; N];
        buf.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(buf)
    }

    /// Look at the next byte without consuming it
    pub fn peek_u8(&self) -> DecodeResult<u8> {
        self.data
            .get(self.pos)
            .copied()
            .ok_or(DecodeError::Truncated {
                offset: self.pos,
                wanted: 1,
                available: 0,
            })
    }

    pub fn read_u8(&mut self) -> DecodeResult<u8> {
        Ok(self.take::<1>()?[0])
    }

    pub fn read_u16(&mut self) -> DecodeResult<u16> {
        Ok(u16::from_be_bytes(self.take()?))
    }

    pub fn read_i16(&mut self) -> DecodeResult<i16> {
        Ok(i16::from_be_bytes(self.take()?))
    }

    pub fn read_u32(&mut self) -> DecodeResult<u32> {
        Ok(u32::from_be_bytes(self.take()?))
    }

    pub fn read_i32(&mut self) -> DecodeResult<i32> {
        Ok(i32::from_be_bytes(self.take()?))
    }
}
