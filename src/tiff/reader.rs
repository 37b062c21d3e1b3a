//! The recursive IFD walker.
//!
//! The walker reads the wire shape (order mark, marker, entry tables,
//! value pointers) and hands every interpretation decision to the
//! handler. It guarantees two things to its caller: the walk always
//! terminates (a visited set keyed on absolute offsets breaks pointer
//! cycles), and the walk never aborts on bad data (entry-level failures
//! are recorded on the current directory and the walk continues with the
//! next entry).

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::error::{ExifError, Result};
use crate::reader::{ByteOrder, ByteReader};
use crate::tiff::format::{TiffFormat, TiffStandard};
use crate::tiff::handler::{TagAction, TiffHandler};
use crate::value::TagValue;

/// Walk a complete TIFF document through `handler`.
///
/// `reader` must be positioned at the TIFF header. Only header-level
/// failures (unreadable or invalid order mark, rejected marker) surface
/// as `Err`; everything later is recorded on directories.
pub fn read_tiff<H: TiffHandler>(reader: ByteReader<'_>, handler: &mut H) -> Result<()> {
    let bom = reader.get_bytes(0, 2)?;
    let byte_order = match bom {
        b"II" => ByteOrder::LittleEndian,
        b"MM" => ByteOrder::BigEndian,
        _ => {
            return Err(ExifError::BadTiffByteOrder {
                bytes: [bom[0], bom[1]],
            })
        }
    };
    let reader = reader.with_byte_order(byte_order);

    let marker = reader.get_u16(2)?;
    let standard = handler.process_marker(marker)?;
    debug!(?byte_order, marker, ?standard, "walking TIFF document");

    let first_ifd_offset = match standard {
        TiffStandard::Tiff => reader.get_u32(4)? as usize,
        TiffStandard::BigTiff => {
            // BigTIFF interposes the offset size (always 8) and a zero
            // constant between the marker and the first IFD offset.
            let offset_size = reader.get_u16(4)?;
            let reserved = reader.get_u16(6)?;
            if offset_size != 8 || reserved != 0 {
                handler.error(ExifError::VendorBadHeader(format!(
                    "BigTIFF offset size {offset_size}, reserved {reserved}"
                )));
                return Ok(());
            }
            reader.get_u64(8)? as usize
        }
    };

    if first_ifd_offset >= reader.len() {
        handler.error(ExifError::InvalidOffset {
            offset: first_ifd_offset,
            length: reader.len(),
        });
        return Ok(());
    }

    let mut visited = HashSet::new();
    walk_ifd(handler, reader, standard, first_ifd_offset, &mut visited);
    Ok(())
}

/// Walk one IFD: entries, finish hook, follower chain. Never fails; the
/// matching `end_ifd` (and therefore the handler's pop) runs on every
/// path.
pub(crate) fn walk_ifd<H: TiffHandler>(
    handler: &mut H,
    reader: ByteReader<'_>,
    standard: TiffStandard,
    ifd_offset: usize,
    visited: &mut HashSet<usize>,
) {
    let global_offset = reader.to_unshifted(ifd_offset);
    if !visited.insert(global_offset) {
        handler.error(ExifError::IfdCycle {
            offset: global_offset,
        });
        handler.end_ifd(reader);
        return;
    }

    let next = match walk_entries(handler, reader, standard, ifd_offset, visited) {
        Ok(next) => next,
        Err(e) => {
            handler.error(e);
            None
        }
    };

    handler.end_ifd(reader);

    if let Some(next_offset) = next {
        // A zero offset terminates the chain before the handler is asked.
        if next_offset != 0 && next_offset < reader.len() && handler.follower_ifd() {
            walk_ifd(handler, reader, standard, next_offset, visited);
        }
    }
}

fn walk_entries<H: TiffHandler>(
    handler: &mut H,
    reader: ByteReader<'_>,
    standard: TiffStandard,
    ifd_offset: usize,
    visited: &mut HashSet<usize>,
) -> Result<Option<usize>> {
    let entry_count = match standard {
        TiffStandard::Tiff => u64::from(reader.get_u16(ifd_offset)?),
        TiffStandard::BigTiff => reader.get_u64(ifd_offset)?,
    };
    debug!(ifd_offset, entry_count, "IFD");

    let entries_start = ifd_offset + standard.count_size();
    for index in 0..entry_count {
        let entry_offset = entries_start + index as usize * standard.entry_size();
        let tag = reader.get_u16(entry_offset)?;
        let format_code = reader.get_u16(entry_offset + 2)?;
        let count = match standard {
            TiffStandard::Tiff => u64::from(reader.get_u32(entry_offset + 4)?),
            TiffStandard::BigTiff => reader.get_u64(entry_offset + 4)?,
        };

        // Byte count: the handler prices custom format codes first.
        let byte_count = match handler.custom_format_length(tag, format_code, count) {
            Some(n) => n,
            None => match TiffFormat::from_code(format_code) {
                Some(format) => format.component_size().saturating_mul(count),
                None => {
                    handler.error(ExifError::UnknownTiffFormat {
                        format: format_code,
                    });
                    continue;
                }
            },
        };

        // Inline when the value fits the entry's value field; otherwise
        // the field holds a pointer which must land inside the data.
        let value_field = entry_offset + standard.value_field_offset();
        let value_offset = if byte_count > standard.inline_capacity() {
            let pointer = match standard {
                TiffStandard::Tiff => u64::from(reader.get_u32(value_field)?),
                TiffStandard::BigTiff => reader.get_u64(value_field)?,
            };
            match pointer.checked_add(byte_count) {
                Some(end) if end <= reader.len() as u64 => pointer as usize,
                _ => {
                    handler.error(ExifError::InvalidOffset {
                        offset: pointer.min(usize::MAX as u64) as usize,
                        length: reader.len(),
                    });
                    continue;
                }
            }
        } else {
            value_field
        };

        // Pointer-sized entries may name one or more sub-IFDs.
        if count > 0 && is_pointer_sized(standard, byte_count, count) {
            if let Some(kind) = handler.try_enter_sub_ifd(tag) {
                let pointer_size = (byte_count / count) as usize;
                for component in 0..count {
                    let pointer_offset = value_offset + component as usize * pointer_size;
                    let sub_offset = if pointer_size == 8 {
                        reader.get_u64(pointer_offset).map(|v| v as usize)
                    } else {
                        reader.get_u32(pointer_offset).map(|v| v as usize)
                    };
                    match sub_offset {
                        Ok(sub) if sub < reader.len() => {
                            trace!(tag, sub, ?kind, "entering sub-IFD");
                            handler.push_directory(kind);
                            walk_ifd(handler, reader, standard, sub, visited);
                        }
                        Ok(sub) => handler.error(ExifError::InvalidOffset {
                            offset: sub,
                            length: reader.len(),
                        }),
                        Err(e) => handler.error(e),
                    }
                }
                continue;
            }
        }

        // Handler-specific processing (makernotes, embedded formats, …).
        match handler.custom_tag(reader, tag, value_offset, byte_count as usize) {
            Ok(TagAction::Consumed) => continue,
            Ok(TagAction::EnterIfd {
                kind,
                reader: sub_reader,
                offset,
            }) => {
                trace!(tag, offset, ?kind, "custom sub-IFD walk");
                handler.push_directory(kind);
                walk_ifd(handler, sub_reader, standard, offset, visited);
                continue;
            }
            Ok(TagAction::Store) => {}
            Err(e) => {
                handler.error(e);
                continue;
            }
        }

        match decode_value(reader, format_code, count, byte_count, value_offset) {
            Ok(value) => {
                trace!(tag, %value, "store");
                handler.store(tag, value);
            }
            Err(e) => handler.error(e),
        }
    }

    let next_field = entries_start + entry_count as usize * standard.entry_size();
    let next = match standard {
        TiffStandard::Tiff => reader.get_u32(next_field)? as usize,
        TiffStandard::BigTiff => reader.get_u64(next_field)? as usize,
    };
    Ok(Some(next))
}

fn is_pointer_sized(standard: TiffStandard, byte_count: u64, count: u64) -> bool {
    byte_count == count.saturating_mul(4)
        || (standard == TiffStandard::BigTiff && byte_count == count.saturating_mul(8))
}

/// Decode a value by its format code. Single-element arrays collapse to
/// scalars; ASCII trims trailing NULs; UNDEFINED stays raw. Format codes
/// the table does not know (the custom-priced 0 and 13 among them) are
/// preserved as raw bytes for later inspection.
fn decode_value(
    reader: ByteReader<'_>,
    format_code: u16,
    count: u64,
    byte_count: u64,
    value_offset: usize,
) -> Result<TagValue> {
    let format = match TiffFormat::from_code(format_code) {
        Some(format) => format,
        None => {
            let bytes = reader.get_bytes(value_offset, byte_count as usize)?;
            return Ok(TagValue::Bytes(bytes.to_vec()));
        }
    };
    let n = count as usize;
    Ok(match format {
        TiffFormat::Ascii => {
            let bytes = reader.get_bytes(value_offset, n)?;
            let end = bytes
                .iter()
                .rposition(|&b| b != 0)
                .map_or(0, |last| last + 1);
            TagValue::String(String::from_utf8_lossy(&bytes[..end]).into_owned())
        }
        TiffFormat::Undefined => TagValue::Bytes(reader.get_bytes(value_offset, n)?.to_vec()),
        TiffFormat::Byte => {
            if n == 1 {
                TagValue::U8(reader.get_u8(value_offset)?)
            } else {
                TagValue::U8Array(reader.get_bytes(value_offset, n)?.to_vec())
            }
        }
        TiffFormat::SByte => {
            if n == 1 {
                TagValue::I8(reader.get_i8(value_offset)?)
            } else {
                TagValue::I8Array(
                    reader
                        .get_bytes(value_offset, n)?
                        .iter()
                        .map(|&b| b as i8)
                        .collect(),
                )
            }
        }
        TiffFormat::Short => {
            if n == 1 {
                TagValue::U16(reader.get_u16(value_offset)?)
            } else {
                TagValue::U16Array(read_array(n, 2, |o| reader.get_u16(value_offset + o))?)
            }
        }
        TiffFormat::SShort => {
            if n == 1 {
                TagValue::I16(reader.get_i16(value_offset)?)
            } else {
                TagValue::I16Array(read_array(n, 2, |o| reader.get_i16(value_offset + o))?)
            }
        }
        TiffFormat::Long => {
            if n == 1 {
                TagValue::U32(reader.get_u32(value_offset)?)
            } else {
                TagValue::U32Array(read_array(n, 4, |o| reader.get_u32(value_offset + o))?)
            }
        }
        TiffFormat::SLong => {
            if n == 1 {
                TagValue::I32(reader.get_i32(value_offset)?)
            } else {
                TagValue::I32Array(read_array(n, 4, |o| reader.get_i32(value_offset + o))?)
            }
        }
        TiffFormat::Long8 | TiffFormat::Ifd8 => {
            if n == 1 {
                TagValue::U64(reader.get_u64(value_offset)?)
            } else {
                TagValue::U64Array(read_array(n, 8, |o| reader.get_u64(value_offset + o))?)
            }
        }
        TiffFormat::SLong8 => {
            if n == 1 {
                TagValue::I64(reader.get_i64(value_offset)?)
            } else {
                TagValue::I64Array(read_array(n, 8, |o| reader.get_i64(value_offset + o))?)
            }
        }
        TiffFormat::Float => {
            if n == 1 {
                TagValue::F32(reader.get_f32(value_offset)?)
            } else {
                TagValue::F32Array(read_array(n, 4, |o| reader.get_f32(value_offset + o))?)
            }
        }
        TiffFormat::Double => {
            if n == 1 {
                TagValue::F64(reader.get_f64(value_offset)?)
            } else {
                TagValue::F64Array(read_array(n, 8, |o| reader.get_f64(value_offset + o))?)
            }
        }
        TiffFormat::Rational => {
            if n == 1 {
                TagValue::Rational(reader.get_u32(value_offset)?, reader.get_u32(value_offset + 4)?)
            } else {
                TagValue::RationalArray(read_array(n, 8, |o| {
                    Ok((
                        reader.get_u32(value_offset + o)?,
                        reader.get_u32(value_offset + o + 4)?,
                    ))
                })?)
            }
        }
        TiffFormat::SRational => {
            if n == 1 {
                TagValue::SRational(reader.get_i32(value_offset)?, reader.get_i32(value_offset + 4)?)
            } else {
                TagValue::SRationalArray(read_array(n, 8, |o| {
                    Ok((
                        reader.get_i32(value_offset + o)?,
                        reader.get_i32(value_offset + o + 4)?,
                    ))
                })?)
            }
        }
    })
}

fn read_array<T>(n: usize, stride: usize, mut read: impl FnMut(usize) -> Result<T>) -> Result<Vec<T>> {
    let mut values = Vec::with_capacity(n);
    for i in 0..n {
        values.push(read(i * stride)?);
    }
    Ok(values)
}
