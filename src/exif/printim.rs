//! PrintIM block decoder.
//!
//! PrintIM blocks carry their own entry table: a "PrintIM" signature, a
//! version string, a 16-bit entry count at +14, then 6-byte entries of
//! (u16 tag, u32 value). Some writers store the entry count in the wrong
//! byte order; when the declared count does not fit the block, the
//! decoder retries with a flipped view before giving up.

use crate::directory::Directory;
use crate::error::ExifError;
use crate::reader::{ByteOrder, ByteReader, StringEncoding};
use crate::value::TagValue;
use crate::Result;

pub const TAG_PRINT_IM_VERSION: u16 = 0x0000;

pub(crate) fn process_print_im(
    directory: &mut Directory,
    reader: ByteReader<'_>,
    value_offset: usize,
    byte_count: usize,
) {
    if let Err(e) = decode(directory, reader, value_offset, byte_count) {
        directory.add_error(e);
    }
}

fn decode(
    directory: &mut Directory,
    reader: ByteReader<'_>,
    value_offset: usize,
    byte_count: usize,
) -> Result<()> {
    if byte_count == 0 {
        directory.add_error(ExifError::VendorBadSize("empty PrintIM data".into()));
        return Ok(());
    }
    if byte_count <= 15 {
        directory.add_error(ExifError::VendorBadSize(format!(
            "PrintIM block of {byte_count} bytes is too short"
        )));
        return Ok(());
    }
    let header = reader.get_string(value_offset, 12, StringEncoding::Utf8)?;
    if !header.starts_with("PrintIM") {
        directory.add_error(ExifError::VendorBadHeader(format!(
            "invalid PrintIM signature {:?}",
            header.chars().take(7).collect::<String>()
        )));
        return Ok(());
    }

    let mut entry_reader = reader;
    let mut entry_count = entry_reader.get_u16(value_offset + 14)?;
    if byte_count < 16 + usize::from(entry_count) * 6 {
        // entry count in the wrong byte order; retry flipped
        let flipped = match reader.byte_order() {
            ByteOrder::LittleEndian => ByteOrder::BigEndian,
            ByteOrder::BigEndian => ByteOrder::LittleEndian,
        };
        entry_reader = reader.with_byte_order(flipped);
        entry_count = entry_reader.get_u16(value_offset + 14)?;
        if byte_count < 16 + usize::from(entry_count) * 6 {
            directory.add_error(ExifError::VendorBadSize(format!(
                "PrintIM entry count {entry_count} does not fit {byte_count} bytes"
            )));
            return Ok(());
        }
    }

    directory.set(TAG_PRINT_IM_VERSION, TagValue::String(header[8..12].to_owned()));
    for entry in 0..usize::from(entry_count) {
        let position = value_offset + 16 + entry * 6;
        let tag = entry_reader.get_u16(position)?;
        let value = entry_reader.get_u32(position + 2)?;
        directory.set(tag, TagValue::U32(value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::DirectoryKind;

    fn print_im_block(entry_count_bytes: [u8; 2], entries: &[(u16, u32)]) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(b"PrintIM\00100");
        data.push(0);
        data.push(0);
        data.extend_from_slice(&entry_count_bytes);
        for &(tag, value) in entries {
            data.extend_from_slice(&tag.to_be_bytes());
            data.extend_from_slice(&value.to_be_bytes());
        }
        data
    }

    #[test]
    fn entries_decode_under_the_declared_order() {
        let data = print_im_block(2u16.to_be_bytes(), &[(0x0001, 0x0016), (0x0100, 0x0200)]);
        let reader = ByteReader::new(&data, ByteOrder::BigEndian);
        let mut dir = Directory::new(DirectoryKind::PrintIm);
        process_print_im(&mut dir, reader, 0, data.len());

        assert!(!dir.has_errors());
        assert_eq!(dir.get_string(TAG_PRINT_IM_VERSION), Some("0100"));
        assert_eq!(dir.get_u32(0x0001), Some(0x0016));
        assert_eq!(dir.get_u32(0x0100), Some(0x0200));
    }

    #[test]
    fn wrong_order_entry_count_triggers_the_flip_retry() {
        // count stored little-endian inside a big-endian document: read
        // big-endian first, 0x0200 entries cannot fit, flipped read of 2
        // can.
        let data = print_im_block(2u16.to_le_bytes(), &[(0x0001, 7), (0x0002, 8)]);
        let reader = ByteReader::new(&data, ByteOrder::BigEndian);
        let mut dir = Directory::new(DirectoryKind::PrintIm);
        process_print_im(&mut dir, reader, 0, data.len());

        assert!(!dir.has_errors());
        assert_eq!(dir.get_string(TAG_PRINT_IM_VERSION), Some("0100"));
        // entries themselves decode under the flipped (little-endian) view
        assert_eq!(dir.get_u32(0x0100), Some(0x0700_0000));
    }

    #[test]
    fn inconsistent_count_in_both_orders_records_an_error() {
        let data = print_im_block(500u16.to_be_bytes(), &[]);
        let reader = ByteReader::new(&data, ByteOrder::BigEndian);
        let mut dir = Directory::new(DirectoryKind::PrintIm);
        process_print_im(&mut dir, reader, 0, data.len());

        assert!(matches!(dir.errors(), [ExifError::VendorBadSize(_)]));
        assert!(dir.get(TAG_PRINT_IM_VERSION).is_none());
    }

    #[test]
    fn short_and_unsigned_blocks_error_out() {
        let reader_data = [0u8; 32];
        let reader = ByteReader::new(&reader_data, ByteOrder::BigEndian);

        let mut dir = Directory::new(DirectoryKind::PrintIm);
        process_print_im(&mut dir, reader, 0, 10);
        assert!(matches!(dir.errors(), [ExifError::VendorBadSize(_)]));

        let mut dir = Directory::new(DirectoryKind::PrintIm);
        process_print_im(&mut dir, reader, 0, 32);
        assert!(matches!(dir.errors(), [ExifError::VendorBadHeader(_)]));
    }
}
