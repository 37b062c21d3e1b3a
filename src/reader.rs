//! Byte reader views
//!
//! The walker and the vendor decoders never touch raw slices directly;
//! they read through [`ByteReader`] views. A view is a `Copy` value (the
//! underlying slice, a base offset, and a byte order), so deriving a view
//! with a flipped byte order or a shifted base is free and never mutates
//! the original. This is what lets a makernote switch endianness or
//! re-base its internal pointers without the rest of the walk noticing.
//!
//! [`SequentialReader`] is the cursor form used by decoders that consume
//! a fixed layout front to back.

use byteorder::{BigEndian as BE, ByteOrder as _, LittleEndian as LE};
use serde::Serialize;

use crate::error::{ExifError, Result};

/// Multi-byte integer ordering, from the TIFF header's "II"/"MM" mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ByteOrder {
    /// "II": Intel order, least significant byte first
    LittleEndian,
    /// "MM": Motorola order, most significant byte first
    BigEndian,
}

/// Wire encoding of a fixed-length string field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringEncoding {
    Ascii,
    Utf8,
    Utf16Be,
    Utf16Le,
}

/// Random-access reader view over a byte slice.
#[derive(Debug, Clone, Copy)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    base: usize,
    byte_order: ByteOrder,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8], byte_order: ByteOrder) -> Self {
        ByteReader {
            data,
            base: 0,
            byte_order,
        }
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Bytes addressable from this view's base.
    pub fn len(&self) -> usize {
        self.data.len().saturating_sub(self.base)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Derive a view with the given byte order. Zero-copy.
    pub fn with_byte_order(self, byte_order: ByteOrder) -> Self {
        ByteReader { byte_order, ..self }
    }

    /// Derive a view whose offset 0 sits `delta` bytes further into the
    /// data. Internal pointers of nested scopes (makernotes, embedded
    /// TIFF headers) are relative to such a base.
    pub fn with_shifted_base(self, delta: usize) -> Self {
        ByteReader {
            base: self.base + delta,
            ..self
        }
    }

    /// Translate a view-relative offset back to an absolute position in
    /// the underlying data. Cycle detection keys on this.
    pub fn to_unshifted(&self, offset: usize) -> usize {
        self.base + offset
    }

    fn slice(&self, offset: usize, count: usize) -> Result<&'a [u8]> {
        let start = self.base.checked_add(offset).ok_or(ExifError::InvalidOffset {
            offset,
            length: self.len(),
        })?;
        let end = start.checked_add(count).ok_or(ExifError::InvalidOffset {
            offset,
            length: self.len(),
        })?;
        if end > self.data.len() {
            return Err(ExifError::Truncated { offset, count });
        }
        Ok(&self.data[start..end])
    }

    pub fn get_u8(&self, offset: usize) -> Result<u8> {
        Ok(self.slice(offset, 1)?[0])
    }

    pub fn get_i8(&self, offset: usize) -> Result<i8> {
        Ok(self.get_u8(offset)? as i8)
    }

    pub fn get_u16(&self, offset: usize) -> Result<u16> {
        let b = self.slice(offset, 2)?;
        Ok(match self.byte_order {
            ByteOrder::LittleEndian => LE::read_u16(b),
            ByteOrder::BigEndian => BE::read_u16(b),
        })
    }

    pub fn get_i16(&self, offset: usize) -> Result<i16> {
        Ok(self.get_u16(offset)? as i16)
    }

    pub fn get_u32(&self, offset: usize) -> Result<u32> {
        let b = self.slice(offset, 4)?;
        Ok(match self.byte_order {
            ByteOrder::LittleEndian => LE::read_u32(b),
            ByteOrder::BigEndian => BE::read_u32(b),
        })
    }

    pub fn get_i32(&self, offset: usize) -> Result<i32> {
        Ok(self.get_u32(offset)? as i32)
    }

    pub fn get_u64(&self, offset: usize) -> Result<u64> {
        let b = self.slice(offset, 8)?;
        Ok(match self.byte_order {
            ByteOrder::LittleEndian => LE::read_u64(b),
            ByteOrder::BigEndian => BE::read_u64(b),
        })
    }

    pub fn get_i64(&self, offset: usize) -> Result<i64> {
        Ok(self.get_u64(offset)? as i64)
    }

    pub fn get_f32(&self, offset: usize) -> Result<f32> {
        Ok(f32::from_bits(self.get_u32(offset)?))
    }

    pub fn get_f64(&self, offset: usize) -> Result<f64> {
        Ok(f64::from_bits(self.get_u64(offset)?))
    }

    /// S15.16 fixed point: a signed 16-bit integer part followed by an
    /// unsigned fractional numerator over 65536. Little-endian data
    /// stores the low (fractional) word first.
    pub fn get_s15fixed16(&self, offset: usize) -> Result<f32> {
        let b = self.slice(offset, 4)?;
        let (int_part, frac) = match self.byte_order {
            ByteOrder::BigEndian => (BE::read_i16(&b[0..2]), BE::read_u16(&b[2..4])),
            ByteOrder::LittleEndian => (LE::read_i16(&b[2..4]), LE::read_u16(&b[0..2])),
        };
        Ok(f32::from(int_part) + f32::from(frac) / 65536.0)
    }

    pub fn get_bytes(&self, offset: usize, count: usize) -> Result<&'a [u8]> {
        self.slice(offset, count)
    }

    /// Fixed-length string field with a declared wire encoding.
    pub fn get_string(&self, offset: usize, count: usize, encoding: StringEncoding) -> Result<String> {
        let bytes = self.slice(offset, count)?;
        Ok(decode_string(bytes, encoding))
    }

    /// Bytes up to (but excluding) the first zero byte, capped at `max`.
    pub fn get_null_terminated_bytes(&self, offset: usize, max: usize) -> Result<&'a [u8]> {
        let available = self.len().saturating_sub(offset).min(max);
        let bytes = self.slice(offset, available)?;
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        Ok(&bytes[..end])
    }

    pub fn get_null_terminated_string(
        &self,
        offset: usize,
        max: usize,
        encoding: StringEncoding,
    ) -> Result<String> {
        let bytes = self.get_null_terminated_bytes(offset, max)?;
        Ok(decode_string(bytes, encoding))
    }
}

fn decode_string(bytes: &[u8], encoding: StringEncoding) -> String {
    match encoding {
        StringEncoding::Ascii | StringEncoding::Utf8 => {
            String::from_utf8_lossy(bytes).into_owned()
        }
        StringEncoding::Utf16Be => {
            let units: Vec<u16> = bytes.chunks_exact(2).map(BE::read_u16).collect();
            String::from_utf16_lossy(&units)
        }
        StringEncoding::Utf16Le => {
            let units: Vec<u16> = bytes.chunks_exact(2).map(LE::read_u16).collect();
            String::from_utf16_lossy(&units)
        }
    }
}

/// Cursor form of [`ByteReader`]: the same operations, advancing a
/// position instead of taking offsets.
#[derive(Debug, Clone)]
pub struct SequentialReader<'a> {
    reader: ByteReader<'a>,
    pos: usize,
}

impl<'a> SequentialReader<'a> {
    pub fn new(reader: ByteReader<'a>) -> Self {
        SequentialReader { reader, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.reader.byte_order()
    }

    /// Whether reading `n` more bytes would run past the end.
    pub fn is_closer_to_end(&self, n: usize) -> bool {
        self.pos + n > self.reader.len()
    }

    pub fn skip(&mut self, n: usize) -> Result<()> {
        if self.is_closer_to_end(n) {
            return Err(ExifError::Truncated {
                offset: self.pos,
                count: n,
            });
        }
        self.pos += n;
        Ok(())
    }

    pub fn try_skip(&mut self, n: usize) -> bool {
        self.skip(n).is_ok()
    }

    fn advance<T>(&mut self, n: usize, value: Result<T>) -> Result<T> {
        if value.is_ok() {
            self.pos += n;
        }
        value
    }

    pub fn get_u8(&mut self) -> Result<u8> {
        let v = self.reader.get_u8(self.pos);
        self.advance(1, v)
    }

    pub fn get_i8(&mut self) -> Result<i8> {
        let v = self.reader.get_i8(self.pos);
        self.advance(1, v)
    }

    pub fn get_u16(&mut self) -> Result<u16> {
        let v = self.reader.get_u16(self.pos);
        self.advance(2, v)
    }

    pub fn get_i16(&mut self) -> Result<i16> {
        let v = self.reader.get_i16(self.pos);
        self.advance(2, v)
    }

    pub fn get_u32(&mut self) -> Result<u32> {
        let v = self.reader.get_u32(self.pos);
        self.advance(4, v)
    }

    pub fn get_i32(&mut self) -> Result<i32> {
        let v = self.reader.get_i32(self.pos);
        self.advance(4, v)
    }

    pub fn get_u64(&mut self) -> Result<u64> {
        let v = self.reader.get_u64(self.pos);
        self.advance(8, v)
    }

    pub fn get_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        let v = self.reader.get_bytes(self.pos, count);
        self.advance(count, v)
    }

    pub fn get_string(&mut self, count: usize, encoding: StringEncoding) -> Result<String> {
        let v = self.reader.get_string(self.pos, count, encoding);
        self.advance(count, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_order_respected() {
        let data = [0x12, 0x34, 0x56, 0x78];
        let le = ByteReader::new(&data, ByteOrder::LittleEndian);
        let be = le.with_byte_order(ByteOrder::BigEndian);
        assert_eq!(le.get_u16(0).unwrap(), 0x3412);
        assert_eq!(be.get_u16(0).unwrap(), 0x1234);
        assert_eq!(le.get_u32(0).unwrap(), 0x7856_3412);
        assert_eq!(be.get_u32(0).unwrap(), 0x1234_5678);
    }

    #[test]
    fn shifted_base_rebases_offsets() {
        let data = [0u8, 1, 2, 3, 4, 5];
        let reader = ByteReader::new(&data, ByteOrder::BigEndian).with_shifted_base(2);
        assert_eq!(reader.get_u8(0).unwrap(), 2);
        assert_eq!(reader.to_unshifted(1), 3);
        assert_eq!(reader.len(), 4);
    }

    #[test]
    fn out_of_bounds_reads_fail() {
        let data = [0u8; 4];
        let reader = ByteReader::new(&data, ByteOrder::BigEndian);
        assert_eq!(
            reader.get_u32(2),
            Err(ExifError::Truncated { offset: 2, count: 4 })
        );
    }

    #[test]
    fn null_terminated_stops_at_zero() {
        let data = *b"abc\0def";
        let reader = ByteReader::new(&data, ByteOrder::BigEndian);
        assert_eq!(reader.get_null_terminated_bytes(0, 7).unwrap(), b"abc");
        // no zero before the cap: the whole window comes back
        assert_eq!(reader.get_null_terminated_bytes(4, 2).unwrap(), b"de");
    }

    #[test]
    fn s15fixed16_both_orders() {
        // 1.5 == 0x0001.0x8000
        let be = [0x00, 0x01, 0x80, 0x00];
        let le = [0x00, 0x80, 0x01, 0x00];
        assert_eq!(
            ByteReader::new(&be, ByteOrder::BigEndian)
                .get_s15fixed16(0)
                .unwrap(),
            1.5
        );
        assert_eq!(
            ByteReader::new(&le, ByteOrder::LittleEndian)
                .get_s15fixed16(0)
                .unwrap(),
            1.5
        );
    }

    #[test]
    fn sequential_cursor_advances_and_skips() {
        let data = [1u8, 2, 0, 3, 0, 4];
        let mut seq = SequentialReader::new(ByteReader::new(&data, ByteOrder::BigEndian));
        assert_eq!(seq.get_u8().unwrap(), 1);
        assert_eq!(seq.get_u16().unwrap(), 0x0200);
        assert!(seq.try_skip(2));
        assert!(!seq.is_closer_to_end(1));
        assert_eq!(seq.get_u8().unwrap(), 4);
        assert!(!seq.try_skip(1));
        assert_eq!(seq.position(), 6);
    }

    #[test]
    fn utf16_string_fields() {
        let data = [0x00, 0x41, 0x00, 0x42];
        let reader = ByteReader::new(&data, ByteOrder::BigEndian);
        assert_eq!(
            reader.get_string(0, 4, StringEncoding::Utf16Be).unwrap(),
            "AB"
        );
    }
}
