//! Panasonic RAW (RW2) fixed-stride binary blocks.
//!
//! The white-balance and distortion tags of a Panasonic Raw IFD0 hold
//! flat tables of 16-bit values rather than IFDs. The block's own
//! tag-name table doubles as its layout: a named index followed by
//! another named index is a single value; a named index followed by an
//! unnamed one starts an array of the block's configured length.

use crate::directory::Directory;
use crate::reader::ByteReader;
use crate::value::TagValue;
use crate::Result;

pub(crate) fn process_binary_block(
    directory: &mut Directory,
    reader: ByteReader<'_>,
    value_offset: usize,
    byte_count: usize,
    signed: bool,
    array_length: usize,
) {
    if let Err(e) = decode(directory, reader, value_offset, byte_count, signed, array_length) {
        directory.add_error(e);
    }
}

fn decode(
    directory: &mut Directory,
    reader: ByteReader<'_>,
    value_offset: usize,
    byte_count: usize,
    signed: bool,
    array_length: usize,
) -> Result<()> {
    const STRIDE: usize = 2;
    let mut index = 0usize;
    while index < byte_count {
        let tag = index as u16;
        if directory.has_tag_name(tag) {
            if directory.has_tag_name(tag + 1) {
                let position = value_offset + index * STRIDE;
                let value = if signed {
                    TagValue::I16(reader.get_i16(position)?)
                } else {
                    TagValue::U16(reader.get_u16(position)?)
                };
                directory.set(tag, value);
            } else {
                if signed {
                    let mut values = Vec::with_capacity(array_length);
                    for element in 0..array_length {
                        values.push(reader.get_i16(value_offset + (index + element) * STRIDE)?);
                    }
                    directory.set(tag, TagValue::I16Array(values));
                } else {
                    let mut values = Vec::with_capacity(array_length);
                    for element in 0..array_length {
                        values.push(reader.get_u16(value_offset + (index + element) * STRIDE)?);
                    }
                    directory.set(tag, TagValue::U16Array(values));
                }
                index += array_length - 1;
            }
        }
        index += 1;
    }
    Ok(())
}
