//! GeoTIFF key unpacking.
//!
//! GeoTIFF hides a second directory inside IFD0: the GeoKeyDirectory tag
//! holds a dense table of (key, location, count, offset) shorts, where
//! each entry either carries its value inline or slices it out of
//! another IFD0 tag (the ASCII and double "params" tags). Unpacking
//! lifts the keys into a directory of their own and removes the consumed
//! source tags from IFD0.

use tracing::debug;

use crate::directory::{Directory, DirectoryKind};
use crate::error::ExifError;
use crate::exif::tags::TAG_GEO_TIFF_GEO_KEYS;
use crate::value::TagValue;

/// Unpack the GeoKeyDirectory of `ifd0`, if present and well-typed.
/// Returns the GeoTIFF directory to attach; the caller sets its parent.
pub(crate) fn process_geo_tiff(ifd0: &mut Directory) -> Option<Directory> {
    let geo_keys = ifd0.get_u16_array(TAG_GEO_TIFF_GEO_KEYS)?.to_vec();
    if geo_keys.len() < 4 {
        return None;
    }

    let mut geo_dir = Directory::new(DirectoryKind::GeoTiff);
    let mut source_tags = vec![TAG_GEO_TIFF_GEO_KEYS];

    // Four-short header: directory version, revision, minor revision,
    // number of keys.
    let number_of_keys = geo_keys[3];
    debug!(
        version = geo_keys[0],
        revision = geo_keys[1],
        minor = geo_keys[2],
        number_of_keys,
        "unpacking GeoTIFF keys"
    );

    for index in 0..usize::from(number_of_keys) {
        let entry = 4 + index * 4;
        if entry + 4 > geo_keys.len() {
            geo_dir.add_error(ExifError::VendorBadSize(format!(
                "GeoTIFF key directory declares {number_of_keys} keys but holds {}",
                (geo_keys.len() - 4) / 4
            )));
            break;
        }
        let key_id = geo_keys[entry];
        let tiff_tag_location = geo_keys[entry + 1];
        let value_count = usize::from(geo_keys[entry + 2]);
        let value_offset = usize::from(geo_keys[entry + 3]);

        if tiff_tag_location == 0 {
            // the offset short IS the value
            geo_dir.set(key_id, TagValue::U16(geo_keys[entry + 3]));
            continue;
        }

        source_tags.push(tiff_tag_location);
        match ifd0.get(tiff_tag_location) {
            Some(TagValue::String(text)) => {
                // string extents check with <=; a trailing '|' is the
                // separator convention, not content
                let bytes = text.as_bytes();
                if value_offset + value_count <= bytes.len() {
                    let slice = String::from_utf8_lossy(&bytes[value_offset..value_offset + value_count]);
                    geo_dir.set(key_id, TagValue::String(slice.trim_end_matches('|').to_owned()));
                } else {
                    geo_dir.add_error(extent_error(key_id, tiff_tag_location, value_offset, value_count, bytes.len()));
                }
            }
            Some(source) => match slice_array(source, value_offset, value_count) {
                Ok(Some(value)) => geo_dir.set(key_id, value),
                Ok(None) => geo_dir.add_error(ExifError::VendorUnsupported(format!(
                    "GeoTIFF key {key_id} references tag {tiff_tag_location} of unsupported type"
                ))),
                Err(len) => geo_dir.add_error(extent_error(
                    key_id,
                    tiff_tag_location,
                    value_offset,
                    value_count,
                    len,
                )),
            },
            None => geo_dir.add_error(ExifError::VendorUnsupported(format!(
                "GeoTIFF key {key_id} references missing tag {tiff_tag_location}"
            ))),
        }
    }

    for source_tag in source_tags {
        ifd0.remove(source_tag);
    }
    Some(geo_dir)
}

fn extent_error(
    key_id: u16,
    location: u16,
    offset: usize,
    count: usize,
    source_len: usize,
) -> ExifError {
    ExifError::VendorBadSize(format!(
        "GeoTIFF key {key_id} slices [{offset}, {offset}+{count}) of tag {location}, which holds {source_len}"
    ))
}

/// Slice an array-typed source tag. The extent check is strict `<`,
/// unlike the `<=` used for string sources.
fn slice_array(
    source: &TagValue,
    offset: usize,
    count: usize,
) -> Result<Option<TagValue>, usize> {
    macro_rules! slice {
        ($arr:expr, $variant:ident) => {{
            if offset + count < $arr.len() {
                Ok(Some(TagValue::$variant($arr[offset..offset + count].to_vec())))
            } else {
                Err($arr.len())
            }
        }};
    }
    match source {
        TagValue::U8Array(a) | TagValue::Bytes(a) => slice!(a, U8Array),
        TagValue::U16Array(a) => slice!(a, U16Array),
        TagValue::U32Array(a) => slice!(a, U32Array),
        TagValue::F32Array(a) => slice!(a, F32Array),
        TagValue::F64Array(a) => slice!(a, F64Array),
        TagValue::RationalArray(a) => slice!(a, RationalArray),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ifd0_with_keys(keys: &[u16]) -> Directory {
        let mut ifd0 = Directory::new(DirectoryKind::ExifIfd0);
        ifd0.set(TAG_GEO_TIFF_GEO_KEYS, TagValue::U16Array(keys.to_vec()));
        ifd0
    }

    #[test]
    fn inline_and_string_sliced_keys() {
        let mut ifd0 = ifd0_with_keys(&[1, 1, 0, 2, 1024, 0, 1, 2, 3072, 34737, 5, 4]);
        ifd0.set(34737, TagValue::String("abc|de|fgh|".into()));

        let geo = process_geo_tiff(&mut ifd0).unwrap();
        assert!(!geo.has_errors(), "{:?}", geo.errors());
        assert_eq!(geo.get(1024), Some(&TagValue::U16(2)));
        assert_eq!(geo.get_string(3072), Some("de|fg"));
        // consumed source tags leave IFD0
        assert!(ifd0.get(34737).is_none());
        assert!(ifd0.get(TAG_GEO_TIFF_GEO_KEYS).is_none());
    }

    #[test]
    fn string_extent_uses_inclusive_check_and_arrays_use_strict() {
        // string of 4 chars: offset 2 + count 2 == len 4 is allowed
        let mut ifd0 = ifd0_with_keys(&[1, 1, 0, 2, 2049, 34737, 2, 2, 2057, 34736, 2, 0]);
        ifd0.set(34737, TagValue::String("a|cd".into()));
        // array of 2: offset 0 + count 2 == len 2 fails the strict check
        ifd0.set(34736, TagValue::F64Array(vec![6378137.0, 298.25]));

        let geo = process_geo_tiff(&mut ifd0).unwrap();
        assert_eq!(geo.get_string(2049), Some("cd"));
        assert!(geo.get(2057).is_none());
        assert_eq!(geo.errors().len(), 1);
        assert!(matches!(geo.errors()[0], ExifError::VendorBadSize(_)));
    }

    #[test]
    fn truncated_key_table_records_an_error() {
        let mut ifd0 = ifd0_with_keys(&[1, 1, 0, 3, 1024, 0, 1, 2]);
        let geo = process_geo_tiff(&mut ifd0).unwrap();
        assert_eq!(geo.get(1024), Some(&TagValue::U16(2)));
        assert!(matches!(geo.errors(), [ExifError::VendorBadSize(_)]));
    }

    #[test]
    fn scalar_geo_keys_do_not_unpack() {
        let mut ifd0 = Directory::new(DirectoryKind::ExifIfd0);
        ifd0.set(TAG_GEO_TIFF_GEO_KEYS, TagValue::U16(7));
        assert!(process_geo_tiff(&mut ifd0).is_none());
        assert!(ifd0.get(TAG_GEO_TIFF_GEO_KEYS).is_some());
    }
}
