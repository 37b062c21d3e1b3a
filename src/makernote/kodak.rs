//! Kodak makernote decoder.
//!
//! Kodak's makernote is not an IFD; it is a fixed layout starting eight
//! bytes past the signature. The decoder consumes it front to back with
//! a sequential cursor, skipping the gaps the layout leaves unnamed.

use crate::directory::Directory;
use crate::reader::{ByteReader, SequentialReader, StringEncoding};
use crate::value::TagValue;
use crate::Result;

pub const TAG_KODAK_MODEL: u16 = 0;
pub const TAG_QUALITY: u16 = 9;
pub const TAG_BURST_MODE: u16 = 10;
pub const TAG_IMAGE_WIDTH: u16 = 12;
pub const TAG_IMAGE_HEIGHT: u16 = 14;
pub const TAG_YEAR_CREATED: u16 = 16;
pub const TAG_MONTH_DAY_CREATED: u16 = 18;
pub const TAG_TIME_CREATED: u16 = 20;
pub const TAG_BURST_MODE_2: u16 = 24;
pub const TAG_SHUTTER_MODE: u16 = 27;
pub const TAG_METERING_MODE: u16 = 28;
pub const TAG_SEQUENCE_NUMBER: u16 = 29;
pub const TAG_F_NUMBER: u16 = 30;
pub const TAG_EXPOSURE_TIME: u16 = 32;
pub const TAG_EXPOSURE_COMPENSATION: u16 = 36;
pub const TAG_FOCUS_MODE: u16 = 56;
pub const TAG_WHITE_BALANCE: u16 = 64;
pub const TAG_FLASH_MODE: u16 = 92;
pub const TAG_FLASH_FIRED: u16 = 93;
pub const TAG_ISO_SETTING: u16 = 94;
pub const TAG_ISO: u16 = 96;
pub const TAG_TOTAL_ZOOM: u16 = 98;
pub const TAG_DATE_TIME_STAMP: u16 = 100;
pub const TAG_COLOR_MODE: u16 = 102;
pub const TAG_DIGITAL_ZOOM: u16 = 104;
pub const TAG_SHARPNESS: u16 = 107;

/// Decode the fixed layout at `makernote_offset + 8`. A truncated
/// payload records one error and keeps whatever was read before it.
pub(crate) fn process_kodak(
    directory: &mut Directory,
    reader: ByteReader<'_>,
    makernote_offset: usize,
) {
    let mut cursor = SequentialReader::new(reader.with_shifted_base(makernote_offset + 8));
    if let Err(e) = decode(directory, &mut cursor) {
        directory.add_error(e);
    }
}

fn decode(directory: &mut Directory, cursor: &mut SequentialReader<'_>) -> Result<()> {
    directory.set(
        TAG_KODAK_MODEL,
        cursor.get_string(8, StringEncoding::Utf8)?,
    );
    cursor.skip(1)?;
    directory.set(TAG_QUALITY, TagValue::U8(cursor.get_u8()?));
    directory.set(TAG_BURST_MODE, TagValue::U8(cursor.get_u8()?));
    cursor.skip(1)?;
    directory.set(TAG_IMAGE_WIDTH, TagValue::U16(cursor.get_u16()?));
    directory.set(TAG_IMAGE_HEIGHT, TagValue::U16(cursor.get_u16()?));
    directory.set(TAG_YEAR_CREATED, TagValue::U16(cursor.get_u16()?));
    directory.set(
        TAG_MONTH_DAY_CREATED,
        TagValue::Bytes(cursor.get_bytes(2)?.to_vec()),
    );
    directory.set(
        TAG_TIME_CREATED,
        TagValue::Bytes(cursor.get_bytes(4)?.to_vec()),
    );
    directory.set(TAG_BURST_MODE_2, TagValue::U16(cursor.get_u16()?));
    cursor.skip(1)?;
    directory.set(TAG_SHUTTER_MODE, TagValue::U8(cursor.get_u8()?));
    directory.set(TAG_METERING_MODE, TagValue::U8(cursor.get_u8()?));
    directory.set(TAG_SEQUENCE_NUMBER, TagValue::U8(cursor.get_u8()?));
    directory.set(TAG_F_NUMBER, TagValue::U16(cursor.get_u16()?));
    directory.set(TAG_EXPOSURE_TIME, TagValue::U32(cursor.get_u32()?));
    directory.set(TAG_EXPOSURE_COMPENSATION, TagValue::I16(cursor.get_i16()?));
    cursor.skip(18)?;
    directory.set(TAG_FOCUS_MODE, TagValue::U8(cursor.get_u8()?));
    cursor.skip(7)?;
    directory.set(TAG_WHITE_BALANCE, TagValue::U8(cursor.get_u8()?));
    cursor.skip(27)?;
    directory.set(TAG_FLASH_MODE, TagValue::U8(cursor.get_u8()?));
    directory.set(TAG_FLASH_FIRED, TagValue::U8(cursor.get_u8()?));
    directory.set(TAG_ISO_SETTING, TagValue::U16(cursor.get_u16()?));
    directory.set(TAG_ISO, TagValue::U16(cursor.get_u16()?));
    directory.set(TAG_TOTAL_ZOOM, TagValue::U16(cursor.get_u16()?));
    directory.set(TAG_DATE_TIME_STAMP, TagValue::U16(cursor.get_u16()?));
    directory.set(TAG_COLOR_MODE, TagValue::U16(cursor.get_u16()?));
    directory.set(TAG_DIGITAL_ZOOM, TagValue::U16(cursor.get_u16()?));
    cursor.skip(1)?;
    directory.set(TAG_SHARPNESS, TagValue::I8(cursor.get_i8()?));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::DirectoryKind;
    use crate::reader::ByteOrder;

    #[test]
    fn fixed_offsets_round_trip() {
        // signature (8 bytes) + 108-byte layout
        let mut data = vec![0u8; 8 + 108];
        data[8..16].copy_from_slice(b"DC4800\0\0");
        data[8 + 12..8 + 14].copy_from_slice(&2160u16.to_le_bytes());
        data[8 + 14..8 + 16].copy_from_slice(&1440u16.to_le_bytes());
        data[8 + 16..8 + 18].copy_from_slice(&2001u16.to_le_bytes());
        data[8 + 30..8 + 32].copy_from_slice(&280u16.to_le_bytes());
        data[8 + 36..8 + 38].copy_from_slice(&(-5i16).to_le_bytes());
        data[8 + 96..8 + 98].copy_from_slice(&200u16.to_le_bytes());
        data[8 + 107] = (-2i8) as u8;

        let reader = ByteReader::new(&data, ByteOrder::LittleEndian);
        let mut dir = Directory::new(DirectoryKind::Kodak);
        process_kodak(&mut dir, reader, 0);

        assert!(!dir.has_errors());
        assert_eq!(dir.get_string(TAG_KODAK_MODEL), Some("DC4800\0\0"));
        assert_eq!(dir.get_u16(TAG_IMAGE_WIDTH), Some(2160));
        assert_eq!(dir.get_u16(TAG_IMAGE_HEIGHT), Some(1440));
        assert_eq!(dir.get_u16(TAG_YEAR_CREATED), Some(2001));
        assert_eq!(dir.get_u16(TAG_F_NUMBER), Some(280));
        assert_eq!(dir.get(TAG_EXPOSURE_COMPENSATION), Some(&TagValue::I16(-5)));
        assert_eq!(dir.get_u16(TAG_ISO), Some(200));
        assert_eq!(dir.get(TAG_SHARPNESS), Some(&TagValue::I8(-2)));
    }

    #[test]
    fn truncated_payload_records_one_error_and_keeps_prefix() {
        let mut data = vec![0u8; 8 + 20];
        data[8..16].copy_from_slice(b"DC210\0\0\0");
        let reader = ByteReader::new(&data, ByteOrder::LittleEndian);
        let mut dir = Directory::new(DirectoryKind::Kodak);
        process_kodak(&mut dir, reader, 0);

        assert_eq!(dir.errors().len(), 1);
        assert_eq!(dir.get_string(TAG_KODAK_MODEL), Some("DC210\0\0\0"));
        assert!(dir.get(TAG_F_NUMBER).is_none());
    }
}
