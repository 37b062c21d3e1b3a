//! GPS coordinate extraction.
//!
//! The GPS directory stores each coordinate as three unsigned rationals
//! (degrees, minutes, seconds) plus a hemisphere reference letter. This
//! module folds the four tags into signed decimal degrees.

use serde::Serialize;

use crate::directory::Directory;
use crate::exif::tags::{
    TAG_GPS_LATITUDE, TAG_GPS_LATITUDE_REF, TAG_GPS_LONGITUDE, TAG_GPS_LONGITUDE_REF,
};

/// A latitude/longitude pair in signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl Directory {
    /// Fold the GPS latitude/longitude tags into decimal degrees.
    /// `None` when either coordinate is missing or malformed (wrong
    /// component count, zero denominators).
    pub fn geo_location(&self) -> Option<GeoLocation> {
        let latitude = dms_to_degrees(
            self.get_rational_array(TAG_GPS_LATITUDE)?,
            self.get_string(TAG_GPS_LATITUDE_REF)?,
            "S",
        )?;
        let longitude = dms_to_degrees(
            self.get_rational_array(TAG_GPS_LONGITUDE)?,
            self.get_string(TAG_GPS_LONGITUDE_REF)?,
            "W",
        )?;
        Some(GeoLocation {
            latitude,
            longitude,
        })
    }
}

fn dms_to_degrees(components: &[(u32, u32)], reference: &str, negative_ref: &str) -> Option<f64> {
    let [degrees, minutes, seconds] = components else {
        return None;
    };
    let degrees = ratio(*degrees)?;
    let minutes = ratio(*minutes)?;
    let seconds = ratio(*seconds)?;
    let magnitude = degrees + minutes / 60.0 + seconds / 3600.0;
    if reference.trim().eq_ignore_ascii_case(negative_ref) {
        Some(-magnitude)
    } else {
        Some(magnitude)
    }
}

fn ratio((numerator, denominator): (u32, u32)) -> Option<f64> {
    (denominator != 0).then(|| f64::from(numerator) / f64::from(denominator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::DirectoryKind;
    use crate::value::TagValue;

    fn gps_directory(
        lat: &[(u32, u32)],
        lat_ref: &str,
        lon: &[(u32, u32)],
        lon_ref: &str,
    ) -> Directory {
        let mut dir = Directory::new(DirectoryKind::Gps);
        dir.set(TAG_GPS_LATITUDE_REF, lat_ref);
        dir.set(TAG_GPS_LATITUDE, TagValue::RationalArray(lat.to_vec()));
        dir.set(TAG_GPS_LONGITUDE_REF, lon_ref);
        dir.set(TAG_GPS_LONGITUDE, TagValue::RationalArray(lon.to_vec()));
        dir
    }

    #[test]
    fn dms_folds_to_decimal_degrees() {
        let dir = gps_directory(
            &[(51, 1), (30, 1), (0, 1)],
            "N",
            &[(0, 1), (7, 1), (30, 1)],
            "W",
        );
        let location = dir.geo_location().unwrap();
        assert!((location.latitude - 51.5).abs() < 1e-9);
        assert!((location.longitude + 0.125).abs() < 1e-9);
    }

    #[test]
    fn southern_and_eastern_hemispheres() {
        let dir = gps_directory(
            &[(33, 1), (52, 1), (0, 1)],
            "S",
            &[(151, 1), (12, 1), (0, 1)],
            "E",
        );
        let location = dir.geo_location().unwrap();
        assert!(location.latitude < 0.0);
        assert!(location.longitude > 0.0);
    }

    #[test]
    fn zero_denominator_yields_none() {
        let dir = gps_directory(&[(51, 0), (30, 1), (0, 1)], "N", &[(0, 1), (7, 1), (30, 1)], "W");
        assert_eq!(dir.geo_location(), None);
    }

    #[test]
    fn wrong_component_count_yields_none() {
        let dir = gps_directory(&[(51, 1), (30, 1)], "N", &[(0, 1), (7, 1), (30, 1)], "W");
        assert_eq!(dir.geo_location(), None);
    }
}
