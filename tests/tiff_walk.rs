//! Walker-level behaviour: header handling, inline vs. pointer values,
//! cycle prevention, follower IFDs, byte-order independence, BigTIFF.

mod common;

use common::*;
use exif_probe::{read_exif, DirectoryKind, ExifError, TagValue};
use pretty_assertions::assert_eq;

const TAG_IMAGE_WIDTH: u16 = 0x0100;
const TAG_MAKE: u16 = 0x010F;
const TAG_XRES: u16 = 0x011A;

#[test]
fn minimal_little_endian_tiff_yields_one_empty_ifd0() {
    // header `49 49 2A 00 08 00 00 00`, then an empty IFD
    let mut data = header(E::Le, MARKER_TIFF, 8);
    write_ifd(&mut data, E::Le, &[], 0);

    let metadata = read_exif(&data);
    assert_eq!(metadata.len(), 1);
    let ifd0 = &metadata.directories()[0];
    assert_eq!(ifd0.kind(), DirectoryKind::ExifIfd0);
    assert_eq!(ifd0.tag_count(), 0);
    assert!(!ifd0.has_errors());
    assert_eq!(ifd0.parent(), None);
}

#[test]
fn bad_byte_order_mark_yields_a_single_error_directory() {
    let metadata = read_exif(b"XX\x2A\x00\x08\x00\x00\x00");
    assert_eq!(metadata.len(), 1);
    let dir = &metadata.directories()[0];
    assert_eq!(dir.kind(), DirectoryKind::Error);
    assert_eq!(
        dir.errors(),
        &[ExifError::BadTiffByteOrder { bytes: [b'X', b'X'] }]
    );
}

#[test]
fn bad_marker_yields_a_single_error_directory() {
    let metadata = read_exif(&header(E::Le, 0x1234, 8));
    assert_eq!(metadata.len(), 1);
    assert_eq!(
        metadata.directories()[0].errors(),
        &[ExifError::BadTiffMarker { marker: 0x1234 }]
    );
}

#[test]
fn inline_and_pointed_values_decode() {
    // IFD0 at 8 with three entries; the ASCII make lives past the IFD
    let make = b"Acme\0";
    let ifd0 = 8usize;
    let make_offset = ifd0 + ifd_size(3);

    let mut data = header(E::Le, MARKER_TIFF, ifd0 as u32);
    write_ifd(
        &mut data,
        E::Le,
        &[
            Entry::new(TAG_IMAGE_WIDTH, FMT_SHORT, 1, inline_u16(E::Le, 640)),
            Entry::new(TAG_MAKE, FMT_ASCII, make.len() as u32, inline_u32(E::Le, make_offset as u32)),
            Entry::new(TAG_XRES, FMT_RATIONAL, 1, inline_u32(E::Le, (make_offset + make.len()) as u32)),
        ],
        0,
    );
    data.extend_from_slice(make);
    data.extend_from_slice(&E::Le.u32(72));
    data.extend_from_slice(&E::Le.u32(1));

    let metadata = read_exif(&data);
    let ifd0 = &metadata.directories()[0];
    assert!(!ifd0.has_errors(), "{:?}", ifd0.errors());
    assert_eq!(ifd0.get(TAG_IMAGE_WIDTH), Some(&TagValue::U16(640)));
    // trailing NUL is trimmed
    assert_eq!(ifd0.get_string(TAG_MAKE), Some("Acme"));
    assert_eq!(ifd0.get(TAG_XRES), Some(&TagValue::Rational(72, 1)));
}

#[test]
fn byte_order_independence() {
    for e in [E::Le, E::Be] {
        let mut data = header(e, MARKER_TIFF, 8);
        write_ifd(
            &mut data,
            e,
            &[
                Entry::new(TAG_IMAGE_WIDTH, FMT_SHORT, 1, inline_u16(e, 1234)),
                Entry::new(0x0101, FMT_LONG, 1, inline_u32(e, 5678)),
            ],
            0,
        );
        let metadata = read_exif(&data);
        let ifd0 = &metadata.directories()[0];
        assert_eq!(ifd0.get(TAG_IMAGE_WIDTH), Some(&TagValue::U16(1234)));
        assert_eq!(ifd0.get(0x0101), Some(&TagValue::U32(5678)));
        assert!(!ifd0.has_errors());
    }
}

#[test]
fn next_ifd_chain_produces_thumbnail_then_image_directories() {
    let ifd0 = 8usize;
    let ifd1 = ifd0 + ifd_size(1);
    let ifd2 = ifd1 + ifd_size(1);

    let mut data = header(E::Le, MARKER_TIFF, ifd0 as u32);
    write_ifd(
        &mut data,
        E::Le,
        &[Entry::new(TAG_IMAGE_WIDTH, FMT_SHORT, 1, inline_u16(E::Le, 1))],
        ifd1 as u32,
    );
    write_ifd(
        &mut data,
        E::Le,
        &[Entry::new(TAG_IMAGE_WIDTH, FMT_SHORT, 1, inline_u16(E::Le, 2))],
        ifd2 as u32,
    );
    write_ifd(
        &mut data,
        E::Le,
        &[Entry::new(TAG_IMAGE_WIDTH, FMT_SHORT, 1, inline_u16(E::Le, 3))],
        0,
    );

    let metadata = read_exif(&data);
    let kinds: Vec<DirectoryKind> = metadata.iter().map(|d| d.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            DirectoryKind::ExifIfd0,
            DirectoryKind::ExifThumbnail,
            DirectoryKind::ExifImage
        ]
    );
    assert_eq!(metadata.directories()[1].get_u16(TAG_IMAGE_WIDTH), Some(2));
    assert_eq!(metadata.directories()[2].get_u16(TAG_IMAGE_WIDTH), Some(3));
}

#[test]
fn self_referencing_ifd_chain_terminates_with_cycle_error() {
    // IFD0's next-IFD pointer points back at IFD0
    let mut data = header(E::Le, MARKER_TIFF, 8);
    write_ifd(
        &mut data,
        E::Le,
        &[Entry::new(TAG_IMAGE_WIDTH, FMT_SHORT, 1, inline_u16(E::Le, 9))],
        8,
    );

    let metadata = read_exif(&data);
    // the follower directory was pushed, then the cycle was detected
    assert_eq!(metadata.len(), 2);
    let thumbnail = &metadata.directories()[1];
    assert_eq!(thumbnail.kind(), DirectoryKind::ExifThumbnail);
    assert_eq!(thumbnail.errors(), &[ExifError::IfdCycle { offset: 8 }]);
}

#[test]
fn unknown_format_codes_are_skipped_with_an_error() {
    let mut data = header(E::Le, MARKER_TIFF, 8);
    write_ifd(
        &mut data,
        E::Le,
        &[
            Entry::new(0x9999, 99, 1, inline_u16(E::Le, 0)),
            Entry::new(TAG_IMAGE_WIDTH, FMT_SHORT, 1, inline_u16(E::Le, 31)),
        ],
        0,
    );

    let metadata = read_exif(&data);
    let ifd0 = &metadata.directories()[0];
    assert_eq!(ifd0.errors(), &[ExifError::UnknownTiffFormat { format: 99 }]);
    // the bad entry does not abort its siblings
    assert_eq!(ifd0.get_u16(TAG_IMAGE_WIDTH), Some(31));
}

#[test]
fn pointer_outside_the_data_is_recorded_and_skipped() {
    let mut data = header(E::Le, MARKER_TIFF, 8);
    write_ifd(
        &mut data,
        E::Le,
        &[
            Entry::new(TAG_MAKE, FMT_ASCII, 40, inline_u32(E::Le, 0x00FF_0000)),
            Entry::new(TAG_IMAGE_WIDTH, FMT_SHORT, 1, inline_u16(E::Le, 7)),
        ],
        0,
    );

    let metadata = read_exif(&data);
    let ifd0 = &metadata.directories()[0];
    assert_eq!(ifd0.errors().len(), 1);
    assert!(matches!(ifd0.errors()[0], ExifError::InvalidOffset { .. }));
    assert_eq!(ifd0.get_u16(TAG_IMAGE_WIDTH), Some(7));
    assert!(ifd0.get(TAG_MAKE).is_none());
}

#[test]
fn big_tiff_walks_64_bit_ifds() {
    // BigTIFF header: order mark, 0x002B, offset size 8, reserved 0,
    // 64-bit first-IFD offset, then a 64-bit-shaped IFD
    let mut data = Vec::new();
    data.extend_from_slice(b"II");
    data.extend_from_slice(&E::Le.u16(MARKER_BIG_TIFF));
    data.extend_from_slice(&E::Le.u16(8));
    data.extend_from_slice(&E::Le.u16(0));
    data.extend_from_slice(&E::Le.u64(16));
    // IFD at 16: count=1 (u64), one 20-byte entry, next (u64) = 0
    data.extend_from_slice(&E::Le.u64(1));
    data.extend_from_slice(&E::Le.u16(TAG_IMAGE_WIDTH));
    data.extend_from_slice(&E::Le.u16(FMT_SHORT));
    data.extend_from_slice(&E::Le.u64(1));
    let mut value = [0u8; 8];
    value[..2].copy_from_slice(&E::Le.u16(2048));
    data.extend_from_slice(&value);
    data.extend_from_slice(&E::Le.u64(0));

    let metadata = read_exif(&data);
    assert_eq!(metadata.len(), 1);
    let ifd0 = &metadata.directories()[0];
    assert!(!ifd0.has_errors(), "{:?}", ifd0.errors());
    assert_eq!(ifd0.get(TAG_IMAGE_WIDTH), Some(&TagValue::U16(2048)));
}

#[test]
fn truncated_ifd_records_error_but_returns_normally() {
    // header promises an IFD at 8 with 3 entries, but the data ends
    let mut data = header(E::Le, MARKER_TIFF, 8);
    data.extend_from_slice(&E::Le.u16(3));
    data.extend_from_slice(&E::Le.u16(TAG_IMAGE_WIDTH));

    let metadata = read_exif(&data);
    assert_eq!(metadata.len(), 1);
    let ifd0 = &metadata.directories()[0];
    assert_eq!(ifd0.errors().len(), 1);
    assert!(matches!(ifd0.errors()[0], ExifError::Truncated { .. }));
}
