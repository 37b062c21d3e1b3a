//! Reconyx trail-camera makernote decoders.
//!
//! Three generations, three fixed layouts. HyperFire is identified by a
//! leading version word rather than a signature; UltraFire and HyperFire2
//! carry ASCII signatures. Tag IDs in these directories are the fields'
//! byte offsets within the makernote.
//!
//! UltraFire integers are big-endian on the wire regardless of the
//! document's order, so that decoder reads through a big-endian view.

use chrono::NaiveDate;

use crate::directory::Directory;
use crate::error::ExifError;
use crate::reader::{ByteOrder, ByteReader, StringEncoding};
use crate::value::TagValue;
use crate::Result;

/// The version word that identifies a HyperFire makernote.
pub const HYPERFIRE_MAKERNOTE_VERSION: u16 = 0xF101;

/// Expected UltraFire makernote ID.
pub const ULTRAFIRE_MAKERNOTE_ID: u32 = 0x0001_0000;
/// Expected UltraFire public ID.
pub const ULTRAFIRE_MAKERNOTE_PUBLIC_ID: u32 = 0x07F1_0001;

// HyperFire field offsets (equal to the tag IDs).
pub const TAG_HF_MAKERNOTE_VERSION: u16 = 0;
pub const TAG_HF_FIRMWARE_VERSION: u16 = 2;
pub const TAG_HF_TRIGGER_MODE: u16 = 12;
pub const TAG_HF_SEQUENCE: u16 = 14;
pub const TAG_HF_EVENT_NUMBER: u16 = 18;
pub const TAG_HF_DATE_TIME_ORIGINAL: u16 = 22;
pub const TAG_HF_MOON_PHASE: u16 = 36;
pub const TAG_HF_AMBIENT_TEMPERATURE_FAHRENHEIT: u16 = 38;
pub const TAG_HF_AMBIENT_TEMPERATURE: u16 = 40;
pub const TAG_HF_SERIAL_NUMBER: u16 = 42;
pub const TAG_HF_CONTRAST: u16 = 72;
pub const TAG_HF_BRIGHTNESS: u16 = 74;
pub const TAG_HF_SHARPNESS: u16 = 76;
pub const TAG_HF_SATURATION: u16 = 78;
pub const TAG_HF_INFRARED_ILLUMINATOR: u16 = 80;
pub const TAG_HF_MOTION_SENSITIVITY: u16 = 82;
pub const TAG_HF_BATTERY_VOLTAGE: u16 = 84;
pub const TAG_HF_USER_LABEL: u16 = 86;

// UltraFire field offsets.
pub const TAG_UF_LABEL: u16 = 0;
pub const TAG_UF_MAKERNOTE_ID: u16 = 9;
pub const TAG_UF_MAKERNOTE_SIZE: u16 = 13;
pub const TAG_UF_MAKERNOTE_PUBLIC_ID: u16 = 17;
pub const TAG_UF_MAKERNOTE_PUBLIC_SIZE: u16 = 21;
pub const TAG_UF_CAMERA_VERSION: u16 = 23;
pub const TAG_UF_UIB_VERSION: u16 = 30;
pub const TAG_UF_BTL_VERSION: u16 = 37;
pub const TAG_UF_PEX_VERSION: u16 = 44;
pub const TAG_UF_EVENT_TYPE: u16 = 51;
pub const TAG_UF_SEQUENCE: u16 = 52;
pub const TAG_UF_EVENT_NUMBER: u16 = 54;
pub const TAG_UF_DATE_TIME_ORIGINAL: u16 = 58;
pub const TAG_UF_DAY_OF_WEEK: u16 = 65;
pub const TAG_UF_MOON_PHASE: u16 = 66;
pub const TAG_UF_AMBIENT_TEMPERATURE_FAHRENHEIT: u16 = 67;
pub const TAG_UF_AMBIENT_TEMPERATURE: u16 = 69;
pub const TAG_UF_FLASH: u16 = 71;
pub const TAG_UF_BATTERY_VOLTAGE: u16 = 72;
pub const TAG_UF_SERIAL_NUMBER: u16 = 74;
pub const TAG_UF_USER_LABEL: u16 = 88;

// HyperFire2 field offsets (the 10-byte "RECONYXH2\0" signature comes
// first).
pub const TAG_H2_MAKERNOTE_VERSION: u16 = 10;
pub const TAG_H2_FIRMWARE_VERSION: u16 = 12;
pub const TAG_H2_TRIGGER_MODE: u16 = 22;
pub const TAG_H2_SEQUENCE: u16 = 24;
pub const TAG_H2_EVENT_NUMBER: u16 = 28;
pub const TAG_H2_DATE_TIME_ORIGINAL: u16 = 32;
pub const TAG_H2_DAY_OF_WEEK: u16 = 44;
pub const TAG_H2_MOON_PHASE: u16 = 46;
pub const TAG_H2_AMBIENT_TEMPERATURE_FAHRENHEIT: u16 = 48;
pub const TAG_H2_AMBIENT_TEMPERATURE: u16 = 50;
pub const TAG_H2_CONTRAST: u16 = 52;
pub const TAG_H2_BRIGHTNESS: u16 = 54;
pub const TAG_H2_SHARPNESS: u16 = 56;
pub const TAG_H2_SATURATION: u16 = 58;
pub const TAG_H2_FLASH: u16 = 60;
pub const TAG_H2_AMBIENT_INFRARED: u16 = 62;
pub const TAG_H2_AMBIENT_LIGHT: u16 = 64;
pub const TAG_H2_MOTION_SENSITIVITY: u16 = 66;
pub const TAG_H2_BATTERY_VOLTAGE: u16 = 68;
pub const TAG_H2_BATTERY_VOLTAGE_AVG: u16 = 70;
pub const TAG_H2_BATTERY_TYPE: u16 = 72;
pub const TAG_H2_USER_LABEL: u16 = 74;
pub const TAG_H2_SERIAL_NUMBER: u16 = 96;

pub(crate) fn process_hyperfire(
    directory: &mut Directory,
    reader: ByteReader<'_>,
    offset: usize,
) {
    if let Err(e) = decode_hyperfire(directory, reader, offset) {
        directory.add_error(e);
    }
}

fn decode_hyperfire(
    directory: &mut Directory,
    reader: ByteReader<'_>,
    offset: usize,
) -> Result<()> {
    directory.set(
        TAG_HF_MAKERNOTE_VERSION,
        TagValue::U16(reader.get_u16(offset)?),
    );

    store_firmware_version(
        directory,
        reader,
        offset + usize::from(TAG_HF_FIRMWARE_VERSION),
        TAG_HF_FIRMWARE_VERSION,
    )?;

    let trigger = reader.get_u16(offset + usize::from(TAG_HF_TRIGGER_MODE))?;
    directory.set(
        TAG_HF_TRIGGER_MODE,
        TagValue::String(String::from_utf16_lossy(&[trigger])),
    );
    directory.set(
        TAG_HF_SEQUENCE,
        TagValue::U16Array(vec![
            reader.get_u16(offset + usize::from(TAG_HF_SEQUENCE))?,
            reader.get_u16(offset + usize::from(TAG_HF_SEQUENCE) + 2)?,
        ]),
    );

    let event_high = u32::from(reader.get_u16(offset + usize::from(TAG_HF_EVENT_NUMBER))?);
    let event_low = u32::from(reader.get_u16(offset + usize::from(TAG_HF_EVENT_NUMBER) + 2)?);
    directory.set(
        TAG_HF_EVENT_NUMBER,
        TagValue::U32((event_high << 16) + event_low),
    );

    let dt = offset + usize::from(TAG_HF_DATE_TIME_ORIGINAL);
    let seconds = reader.get_u16(dt)?;
    let minutes = reader.get_u16(dt + 2)?;
    let hour = reader.get_u16(dt + 4)?;
    let month = reader.get_u16(dt + 6)?;
    let day = reader.get_u16(dt + 8)?;
    let year = reader.get_u16(dt + 10)?;
    store_date_time(
        directory,
        TAG_HF_DATE_TIME_ORIGINAL,
        year,
        month,
        day,
        hour,
        minutes,
        seconds,
    );

    directory.set(
        TAG_HF_MOON_PHASE,
        TagValue::U16(reader.get_u16(offset + usize::from(TAG_HF_MOON_PHASE))?),
    );
    directory.set(
        TAG_HF_AMBIENT_TEMPERATURE_FAHRENHEIT,
        TagValue::I16(
            reader.get_i16(offset + usize::from(TAG_HF_AMBIENT_TEMPERATURE_FAHRENHEIT))?,
        ),
    );
    directory.set(
        TAG_HF_AMBIENT_TEMPERATURE,
        TagValue::I16(reader.get_i16(offset + usize::from(TAG_HF_AMBIENT_TEMPERATURE))?),
    );
    directory.set(
        TAG_HF_SERIAL_NUMBER,
        TagValue::String(reader.get_string(
            offset + usize::from(TAG_HF_SERIAL_NUMBER),
            28,
            StringEncoding::Utf16Le,
        )?),
    );
    // two unread bytes: the serial number's terminating null
    for tag in [
        TAG_HF_CONTRAST,
        TAG_HF_BRIGHTNESS,
        TAG_HF_SHARPNESS,
        TAG_HF_SATURATION,
        TAG_HF_INFRARED_ILLUMINATOR,
        TAG_HF_MOTION_SENSITIVITY,
    ] {
        directory.set(tag, TagValue::U16(reader.get_u16(offset + usize::from(tag))?));
    }
    directory.set(
        TAG_HF_BATTERY_VOLTAGE,
        TagValue::F64(f64::from(
            reader.get_u16(offset + usize::from(TAG_HF_BATTERY_VOLTAGE))?,
        ) / 1000.0),
    );
    directory.set(
        TAG_HF_USER_LABEL,
        TagValue::String(reader.get_null_terminated_string(
            offset + usize::from(TAG_HF_USER_LABEL),
            44,
            StringEncoding::Utf8,
        )?),
    );
    Ok(())
}

pub(crate) fn process_ultrafire(
    directory: &mut Directory,
    reader: ByteReader<'_>,
    offset: usize,
) {
    if let Err(e) = decode_ultrafire(directory, reader, offset) {
        directory.add_error(e);
    }
}

fn decode_ultrafire(
    directory: &mut Directory,
    reader: ByteReader<'_>,
    offset: usize,
) -> Result<()> {
    // UltraFire multi-byte integers are big-endian on the wire.
    let be = reader.with_byte_order(ByteOrder::BigEndian);

    directory.set(
        TAG_UF_LABEL,
        TagValue::String(reader.get_string(offset, 9, StringEncoding::Utf8)?),
    );

    let makernote_id = be.get_u32(offset + usize::from(TAG_UF_MAKERNOTE_ID))?;
    directory.set(TAG_UF_MAKERNOTE_ID, TagValue::U32(makernote_id));
    if makernote_id != ULTRAFIRE_MAKERNOTE_ID {
        directory.add_error(ExifError::VendorBadHeader(format!(
            "unknown UltraFire makernote ID {makernote_id:#010x}"
        )));
        return Ok(());
    }
    directory.set(
        TAG_UF_MAKERNOTE_SIZE,
        TagValue::U32(be.get_u32(offset + usize::from(TAG_UF_MAKERNOTE_SIZE))?),
    );

    let public_id = be.get_u32(offset + usize::from(TAG_UF_MAKERNOTE_PUBLIC_ID))?;
    directory.set(TAG_UF_MAKERNOTE_PUBLIC_ID, TagValue::U32(public_id));
    if public_id != ULTRAFIRE_MAKERNOTE_PUBLIC_ID {
        directory.add_error(ExifError::VendorBadHeader(format!(
            "unknown UltraFire makernote public ID {public_id:#010x}"
        )));
        return Ok(());
    }
    directory.set(
        TAG_UF_MAKERNOTE_PUBLIC_SIZE,
        TagValue::U16(be.get_u16(offset + usize::from(TAG_UF_MAKERNOTE_PUBLIC_SIZE))?),
    );

    for tag in [
        TAG_UF_CAMERA_VERSION,
        TAG_UF_UIB_VERSION,
        TAG_UF_BTL_VERSION,
        TAG_UF_PEX_VERSION,
    ] {
        let version = ultrafire_version(be, offset + usize::from(tag))?;
        directory.set(tag, TagValue::String(version));
    }

    directory.set(
        TAG_UF_EVENT_TYPE,
        TagValue::String(reader.get_string(
            offset + usize::from(TAG_UF_EVENT_TYPE),
            1,
            StringEncoding::Utf8,
        )?),
    );
    directory.set(
        TAG_UF_SEQUENCE,
        TagValue::U8Array(vec![
            reader.get_u8(offset + usize::from(TAG_UF_SEQUENCE))?,
            reader.get_u8(offset + usize::from(TAG_UF_SEQUENCE) + 1)?,
        ]),
    );
    directory.set(
        TAG_UF_EVENT_NUMBER,
        TagValue::U32(be.get_u32(offset + usize::from(TAG_UF_EVENT_NUMBER))?),
    );

    let dt = offset + usize::from(TAG_UF_DATE_TIME_ORIGINAL);
    let seconds = u16::from(reader.get_u8(dt)?);
    let minutes = u16::from(reader.get_u8(dt + 1)?);
    let hour = u16::from(reader.get_u8(dt + 2)?);
    let day = u16::from(reader.get_u8(dt + 3)?);
    let month = u16::from(reader.get_u8(dt + 4)?);
    let year = be.get_u16(dt + 5)?;
    store_date_time(
        directory,
        TAG_UF_DATE_TIME_ORIGINAL,
        year,
        month,
        day,
        hour,
        minutes,
        seconds,
    );

    directory.set(
        TAG_UF_DAY_OF_WEEK,
        TagValue::U8(reader.get_u8(offset + usize::from(TAG_UF_DAY_OF_WEEK))?),
    );
    directory.set(
        TAG_UF_MOON_PHASE,
        TagValue::U8(reader.get_u8(offset + usize::from(TAG_UF_MOON_PHASE))?),
    );
    directory.set(
        TAG_UF_AMBIENT_TEMPERATURE_FAHRENHEIT,
        TagValue::I16(be.get_i16(offset + usize::from(TAG_UF_AMBIENT_TEMPERATURE_FAHRENHEIT))?),
    );
    directory.set(
        TAG_UF_AMBIENT_TEMPERATURE,
        TagValue::I16(be.get_i16(offset + usize::from(TAG_UF_AMBIENT_TEMPERATURE))?),
    );
    directory.set(
        TAG_UF_FLASH,
        TagValue::U8(reader.get_u8(offset + usize::from(TAG_UF_FLASH))?),
    );
    directory.set(
        TAG_UF_BATTERY_VOLTAGE,
        TagValue::F64(
            f64::from(be.get_u16(offset + usize::from(TAG_UF_BATTERY_VOLTAGE))?) / 1000.0,
        ),
    );
    directory.set(
        TAG_UF_SERIAL_NUMBER,
        TagValue::String(reader.get_string(
            offset + usize::from(TAG_UF_SERIAL_NUMBER),
            14,
            StringEncoding::Utf8,
        )?),
    );
    // one unread byte: the serial number's terminating null
    directory.set(
        TAG_UF_USER_LABEL,
        TagValue::String(reader.get_null_terminated_string(
            offset + usize::from(TAG_UF_USER_LABEL),
            20,
            StringEncoding::Utf8,
        )?),
    );
    Ok(())
}

/// Seven bytes: major, minor, a hex-printed year word, hex-printed month
/// and day bytes, and a single-character revision.
fn ultrafire_version(be: ByteReader<'_>, version_offset: usize) -> Result<String> {
    let major = be.get_u8(version_offset)?;
    let minor = be.get_u8(version_offset + 1)?;
    let year = be.get_u16(version_offset + 2)?;
    let month = be.get_u8(version_offset + 4)?;
    let day = be.get_u8(version_offset + 5)?;
    let revision = be.get_string(version_offset + 6, 1, StringEncoding::Utf8)?;
    Ok(format!("{major}.{minor}.{year:04x}.{month:02x}.{day:02x}{revision}"))
}

pub(crate) fn process_hyperfire2(
    directory: &mut Directory,
    reader: ByteReader<'_>,
    offset: usize,
) {
    if let Err(e) = decode_hyperfire2(directory, reader, offset) {
        directory.add_error(e);
    }
}

fn decode_hyperfire2(
    directory: &mut Directory,
    reader: ByteReader<'_>,
    offset: usize,
) -> Result<()> {
    directory.set(
        TAG_H2_MAKERNOTE_VERSION,
        TagValue::U16(reader.get_u16(offset + usize::from(TAG_H2_MAKERNOTE_VERSION))?),
    );

    store_firmware_version(
        directory,
        reader,
        offset + usize::from(TAG_H2_FIRMWARE_VERSION),
        TAG_H2_FIRMWARE_VERSION,
    )?;

    let trigger = reader.get_u16(offset + usize::from(TAG_H2_TRIGGER_MODE))?;
    directory.set(
        TAG_H2_TRIGGER_MODE,
        TagValue::String(String::from_utf16_lossy(&[trigger])),
    );
    directory.set(
        TAG_H2_SEQUENCE,
        TagValue::U16Array(vec![
            reader.get_u16(offset + usize::from(TAG_H2_SEQUENCE))?,
            reader.get_u16(offset + usize::from(TAG_H2_SEQUENCE) + 2)?,
        ]),
    );

    let event_high = u32::from(reader.get_u16(offset + usize::from(TAG_H2_EVENT_NUMBER))?);
    let event_low = u32::from(reader.get_u16(offset + usize::from(TAG_H2_EVENT_NUMBER) + 2)?);
    directory.set(
        TAG_H2_EVENT_NUMBER,
        TagValue::U32((event_high << 16) + event_low),
    );

    let dt = offset + usize::from(TAG_H2_DATE_TIME_ORIGINAL);
    let seconds = reader.get_u16(dt)?;
    let minutes = reader.get_u16(dt + 2)?;
    let hour = reader.get_u16(dt + 4)?;
    let month = reader.get_u16(dt + 6)?;
    let day = reader.get_u16(dt + 8)?;
    let year = reader.get_u16(dt + 10)?;
    store_date_time(
        directory,
        TAG_H2_DATE_TIME_ORIGINAL,
        year,
        month,
        day,
        hour,
        minutes,
        seconds,
    );

    for tag in [
        TAG_H2_DAY_OF_WEEK,
        TAG_H2_MOON_PHASE,
    ] {
        directory.set(tag, TagValue::U16(reader.get_u16(offset + usize::from(tag))?));
    }
    directory.set(
        TAG_H2_AMBIENT_TEMPERATURE_FAHRENHEIT,
        TagValue::I16(
            reader.get_i16(offset + usize::from(TAG_H2_AMBIENT_TEMPERATURE_FAHRENHEIT))?,
        ),
    );
    directory.set(
        TAG_H2_AMBIENT_TEMPERATURE,
        TagValue::I16(reader.get_i16(offset + usize::from(TAG_H2_AMBIENT_TEMPERATURE))?),
    );
    for tag in [
        TAG_H2_CONTRAST,
        TAG_H2_BRIGHTNESS,
        TAG_H2_SHARPNESS,
        TAG_H2_SATURATION,
        TAG_H2_FLASH,
        TAG_H2_AMBIENT_INFRARED,
        TAG_H2_AMBIENT_LIGHT,
        TAG_H2_MOTION_SENSITIVITY,
    ] {
        directory.set(tag, TagValue::U16(reader.get_u16(offset + usize::from(tag))?));
    }
    for tag in [TAG_H2_BATTERY_VOLTAGE, TAG_H2_BATTERY_VOLTAGE_AVG] {
        directory.set(
            tag,
            TagValue::F64(f64::from(reader.get_u16(offset + usize::from(tag))?) / 1000.0),
        );
    }
    directory.set(
        TAG_H2_BATTERY_TYPE,
        TagValue::U16(reader.get_u16(offset + usize::from(TAG_H2_BATTERY_TYPE))?),
    );
    directory.set(
        TAG_H2_USER_LABEL,
        TagValue::String(reader.get_null_terminated_string(
            offset + usize::from(TAG_H2_USER_LABEL),
            22,
            StringEncoding::Utf8,
        )?),
    );
    directory.set(
        TAG_H2_SERIAL_NUMBER,
        TagValue::String(reader.get_string(
            offset + usize::from(TAG_H2_SERIAL_NUMBER),
            28,
            StringEncoding::Utf16Le,
        )?),
    );
    Ok(())
}

/// Firmware versions are three 16-bit components plus a build number
/// assembled from a hex-printed year and date and re-read as decimal. A
/// build that is not decimal is dropped with a recorded error.
fn store_firmware_version(
    directory: &mut Directory,
    reader: ByteReader<'_>,
    field_offset: usize,
    tag: u16,
) -> Result<()> {
    let major = u32::from(reader.get_u16(field_offset)?);
    let minor = u32::from(reader.get_u16(field_offset + 2)?);
    let revision = u32::from(reader.get_u16(field_offset + 4)?);
    let build_year = reader.get_u16(field_offset + 6)?;
    let build_date = reader.get_u16(field_offset + 8)?;
    let build_text = format!("{build_year:04x}{build_date:04x}");
    match build_text.parse::<u32>() {
        Ok(build) => {
            directory.set(tag, TagValue::Version(vec![major, minor, revision, build]));
        }
        Err(_) => {
            directory.set(tag, TagValue::Version(vec![major, minor, revision]));
            directory.add_error(ExifError::VendorBadHeader(format!(
                "firmware build '{build_text}' is not decimal and was omitted"
            )));
        }
    }
    Ok(())
}

/// Validate and store a composite date/time; invalid components record
/// an error and omit the tag.
#[allow(clippy::too_many_arguments)]
fn store_date_time(
    directory: &mut Directory,
    tag: u16,
    year: u16,
    month: u16,
    day: u16,
    hour: u16,
    minutes: u16,
    seconds: u16,
) {
    let in_range = seconds < 60
        && minutes < 60
        && hour < 24
        && (1..=12).contains(&month)
        && (1..=31).contains(&day);
    let date_time = in_range
        .then(|| {
            NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day)).and_then(
                |date| date.and_hms_opt(u32::from(hour), u32::from(minutes), u32::from(seconds)),
            )
        })
        .flatten();
    match date_time {
        Some(dt) => directory.set(tag, TagValue::DateTime(dt)),
        None => directory.add_error(ExifError::VendorBadDateTime(format!(
            "{year}-{month}-{day} {hour}:{minutes}:{seconds} is not a valid date/time"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::DirectoryKind;
    use chrono::NaiveDate;

    fn le16(data: &mut [u8], offset: usize, value: u16) {
        data[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
    }

    #[test]
    fn hyperfire_layout_round_trip() {
        let mut data = vec![0u8; 140];
        le16(&mut data, 0, HYPERFIRE_MAKERNOTE_VERSION);
        // firmware 3.19.0 build 0x2011 0x0125 -> "20110125"
        le16(&mut data, 2, 3);
        le16(&mut data, 4, 19);
        le16(&mut data, 6, 0);
        le16(&mut data, 8, 0x2011);
        le16(&mut data, 10, 0x0125);
        le16(&mut data, 12, u16::from(b'M'));
        le16(&mut data, 14, 1);
        le16(&mut data, 16, 3);
        le16(&mut data, 18, 0x0001);
        le16(&mut data, 20, 0x0002);
        // 2017-10-16 01:59:14
        le16(&mut data, 22, 14);
        le16(&mut data, 24, 59);
        le16(&mut data, 26, 1);
        le16(&mut data, 28, 10);
        le16(&mut data, 30, 16);
        le16(&mut data, 32, 2017);
        le16(&mut data, 36, 4);
        le16(&mut data, 38, 59i16 as u16);
        le16(&mut data, 40, 15i16 as u16);
        // serial "HF2X" in UTF-16LE, padded
        for (i, ch) in "HF2X".encode_utf16().enumerate() {
            le16(&mut data, 42 + i * 2, ch);
        }
        le16(&mut data, 84, 8765);
        data[86..91].copy_from_slice(b"TRAIL");

        let reader = ByteReader::new(&data, ByteOrder::LittleEndian);
        let mut dir = Directory::new(DirectoryKind::ReconyxHyperFire);
        process_hyperfire(&mut dir, reader, 0);

        assert!(!dir.has_errors(), "{:?}", dir.errors());
        assert_eq!(
            dir.get(TAG_HF_FIRMWARE_VERSION),
            Some(&TagValue::Version(vec![3, 19, 0, 20110125]))
        );
        assert_eq!(dir.get_string(TAG_HF_TRIGGER_MODE), Some("M"));
        assert_eq!(dir.get(TAG_HF_SEQUENCE), Some(&TagValue::U16Array(vec![1, 3])));
        assert_eq!(dir.get_u32(TAG_HF_EVENT_NUMBER), Some(0x0001_0002));
        assert_eq!(
            dir.get(TAG_HF_DATE_TIME_ORIGINAL),
            Some(&TagValue::DateTime(
                NaiveDate::from_ymd_opt(2017, 10, 16)
                    .unwrap()
                    .and_hms_opt(1, 59, 14)
                    .unwrap()
            ))
        );
        assert_eq!(dir.get(TAG_HF_AMBIENT_TEMPERATURE), Some(&TagValue::I16(15)));
        assert_eq!(
            dir.get_string(TAG_HF_SERIAL_NUMBER).map(|s| s.trim_end_matches('\0')),
            Some("HF2X")
        );
        assert_eq!(dir.get(TAG_HF_BATTERY_VOLTAGE), Some(&TagValue::F64(8.765)));
        assert_eq!(dir.get_string(TAG_HF_USER_LABEL), Some("TRAIL"));
    }

    #[test]
    fn hyperfire_bad_date_records_error_and_omits_tag() {
        let mut data = vec![0u8; 140];
        le16(&mut data, 0, HYPERFIRE_MAKERNOTE_VERSION);
        le16(&mut data, 8, 0x2011);
        le16(&mut data, 10, 0x0125);
        le16(&mut data, 28, 13); // month 13
        le16(&mut data, 30, 1);
        le16(&mut data, 32, 2017);

        let reader = ByteReader::new(&data, ByteOrder::LittleEndian);
        let mut dir = Directory::new(DirectoryKind::ReconyxHyperFire);
        process_hyperfire(&mut dir, reader, 0);

        assert!(dir.get(TAG_HF_DATE_TIME_ORIGINAL).is_none());
        assert!(matches!(
            dir.errors(),
            [ExifError::VendorBadDateTime(_)]
        ));
    }

    #[test]
    fn hyperfire_non_decimal_build_is_omitted() {
        let mut data = vec![0u8; 140];
        le16(&mut data, 0, HYPERFIRE_MAKERNOTE_VERSION);
        le16(&mut data, 2, 2);
        le16(&mut data, 4, 0);
        le16(&mut data, 6, 1);
        le16(&mut data, 8, 0x20AB); // hex digits: not decimal
        le16(&mut data, 10, 0x0101);
        le16(&mut data, 28, 1);
        le16(&mut data, 30, 1);
        le16(&mut data, 32, 2020);

        let reader = ByteReader::new(&data, ByteOrder::LittleEndian);
        let mut dir = Directory::new(DirectoryKind::ReconyxHyperFire);
        process_hyperfire(&mut dir, reader, 0);

        assert_eq!(
            dir.get(TAG_HF_FIRMWARE_VERSION),
            Some(&TagValue::Version(vec![2, 0, 1]))
        );
        assert!(matches!(dir.errors(), [ExifError::VendorBadHeader(_)]));
    }

    #[test]
    fn ultrafire_wrong_makernote_id_aborts_with_header_error() {
        let mut data = vec![0u8; 128];
        data[0..9].copy_from_slice(b"RECONYXUF");
        data[9..13].copy_from_slice(&0xDEAD_BEEFu32.to_be_bytes());

        let reader = ByteReader::new(&data, ByteOrder::LittleEndian);
        let mut dir = Directory::new(DirectoryKind::ReconyxUltraFire);
        process_ultrafire(&mut dir, reader, 0);

        assert_eq!(dir.get_string(TAG_UF_LABEL), Some("RECONYXUF"));
        assert!(matches!(dir.errors(), [ExifError::VendorBadHeader(_)]));
        assert!(dir.get(TAG_UF_MAKERNOTE_SIZE).is_none());
    }

    #[test]
    fn ultrafire_integers_are_big_endian_on_the_wire() {
        let mut data = vec![0u8; 128];
        data[0..9].copy_from_slice(b"RECONYXUF");
        data[9..13].copy_from_slice(&ULTRAFIRE_MAKERNOTE_ID.to_be_bytes());
        data[13..17].copy_from_slice(&0x6Au32.to_be_bytes());
        data[17..21].copy_from_slice(&ULTRAFIRE_MAKERNOTE_PUBLIC_ID.to_be_bytes());
        data[21..23].copy_from_slice(&0x55u16.to_be_bytes());
        // camera version 1.2.0x2014.0x01.0x16M
        data[23] = 1;
        data[24] = 2;
        data[25..27].copy_from_slice(&0x2014u16.to_be_bytes());
        data[27] = 0x01;
        data[28] = 0x16;
        data[29] = b'M';
        data[51] = b'M';
        data[52] = 1;
        data[53] = 2;
        data[54..58].copy_from_slice(&515u32.to_be_bytes());
        // 2015-02-28 12:34:56
        data[58] = 56;
        data[59] = 34;
        data[60] = 12;
        data[61] = 28;
        data[62] = 2;
        data[63..65].copy_from_slice(&2015u16.to_be_bytes());
        data[67..69].copy_from_slice(&77i16.to_be_bytes());
        data[69..71].copy_from_slice(&25i16.to_be_bytes());
        data[72..74].copy_from_slice(&4321u16.to_be_bytes());
        data[74..81].copy_from_slice(b"UF12345");
        data[88..92].copy_from_slice(b"DEER");

        // the document itself is little-endian; the decoder must not care
        let reader = ByteReader::new(&data, ByteOrder::LittleEndian);
        let mut dir = Directory::new(DirectoryKind::ReconyxUltraFire);
        process_ultrafire(&mut dir, reader, 0);

        assert!(!dir.has_errors(), "{:?}", dir.errors());
        assert_eq!(dir.get_u32(TAG_UF_MAKERNOTE_SIZE), Some(0x6A));
        assert_eq!(
            dir.get_string(TAG_UF_CAMERA_VERSION),
            Some("1.2.2014.01.16M")
        );
        assert_eq!(dir.get_string(TAG_UF_EVENT_TYPE), Some("M"));
        assert_eq!(dir.get(TAG_UF_SEQUENCE), Some(&TagValue::U8Array(vec![1, 2])));
        assert_eq!(dir.get_u32(TAG_UF_EVENT_NUMBER), Some(515));
        assert_eq!(
            dir.get(TAG_UF_DATE_TIME_ORIGINAL),
            Some(&TagValue::DateTime(
                NaiveDate::from_ymd_opt(2015, 2, 28)
                    .unwrap()
                    .and_hms_opt(12, 34, 56)
                    .unwrap()
            ))
        );
        assert_eq!(dir.get(TAG_UF_AMBIENT_TEMPERATURE), Some(&TagValue::I16(25)));
        assert_eq!(dir.get(TAG_UF_BATTERY_VOLTAGE), Some(&TagValue::F64(4.321)));
        assert_eq!(
            dir.get_string(TAG_UF_SERIAL_NUMBER).map(|s| s.trim_end_matches('\0')),
            Some("UF12345")
        );
        assert_eq!(dir.get_string(TAG_UF_USER_LABEL), Some("DEER"));
    }

    #[test]
    fn hyperfire2_layout_round_trip() {
        let mut data = vec![0u8; 140];
        data[0..10].copy_from_slice(b"RECONYXH2\0");
        le16(&mut data, 10, 2);
        le16(&mut data, 12, 1);
        le16(&mut data, 14, 8);
        le16(&mut data, 16, 0);
        le16(&mut data, 18, 0x2019);
        le16(&mut data, 20, 0x0412);
        le16(&mut data, 22, u16::from(b'T'));
        le16(&mut data, 24, 2);
        le16(&mut data, 26, 5);
        le16(&mut data, 28, 0);
        le16(&mut data, 30, 77);
        // 2021-06-01 08:30:00
        le16(&mut data, 32, 0);
        le16(&mut data, 34, 30);
        le16(&mut data, 36, 8);
        le16(&mut data, 38, 6);
        le16(&mut data, 40, 1);
        le16(&mut data, 42, 2021);
        le16(&mut data, 68, 9012);
        data[74..78].copy_from_slice(b"PATH");

        let reader = ByteReader::new(&data, ByteOrder::LittleEndian);
        let mut dir = Directory::new(DirectoryKind::ReconyxHyperFire2);
        process_hyperfire2(&mut dir, reader, 0);

        assert!(!dir.has_errors(), "{:?}", dir.errors());
        assert_eq!(
            dir.get(TAG_H2_FIRMWARE_VERSION),
            Some(&TagValue::Version(vec![1, 8, 0, 20190412]))
        );
        assert_eq!(dir.get_string(TAG_H2_TRIGGER_MODE), Some("T"));
        assert_eq!(dir.get_u32(TAG_H2_EVENT_NUMBER), Some(77));
        assert_eq!(dir.get(TAG_H2_BATTERY_VOLTAGE), Some(&TagValue::F64(9.012)));
        assert_eq!(dir.get_string(TAG_H2_USER_LABEL), Some("PATH"));
    }
}
