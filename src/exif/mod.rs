//! EXIF extraction: the handler, its helpers, and the public entry
//! points.

mod geotiff;
mod gps;
mod handler;
mod panasonic_raw;
mod printim;
pub mod tags;

pub use gps::GeoLocation;
pub use handler::ExifTiffHandler;
pub use printim::TAG_PRINT_IM_VERSION;

use crate::directory::Metadata;
use crate::embedded::{EmbeddedReaders, NoEmbeddedReaders};
use crate::reader::{ByteOrder, ByteReader};
use crate::tiff::{self, TiffHandler};

/// Extract EXIF metadata from bytes positioned at a TIFF header.
///
/// For EXIF embedded in a JPEG APP1 segment, pass the bytes following
/// the `Exif\0\0` signature. The walk always yields a directory list;
/// documents that cannot be opened at all come back as a single
/// error-bearing directory.
pub fn read_exif(data: &[u8]) -> Metadata {
    read_exif_with(data, Box::new(NoEmbeddedReaders))
}

/// As [`read_exif`], with readers for the embedded non-TIFF payloads
/// (IPTC, ICC, Photoshop, XMP, nested JPEG).
pub fn read_exif_with(data: &[u8], embedded: Box<dyn EmbeddedReaders>) -> Metadata {
    // The order mark in the header decides the real byte order.
    let reader = ByteReader::new(data, ByteOrder::LittleEndian);
    let mut handler = ExifTiffHandler::new(embedded);
    if let Err(error) = tiff::read_tiff(reader, &mut handler) {
        handler.error(error);
    }
    handler.into_metadata()
}
