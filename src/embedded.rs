//! The seam to the non-TIFF format readers.
//!
//! IPTC, ICC, Photoshop IRB, XMP, and whole embedded JPEGs live inside
//! TIFF tags but are not TIFF; parsing them is someone else's job. The
//! EXIF handler hands the raw payload to this trait and attaches whatever
//! directories come back, with the current directory as their parent.
//!
//! Every method defaults to "no directories", so a unit struct is a
//! complete no-op implementation and the core works stand-alone.

use crate::directory::Directory;

/// Readers for the embedded non-TIFF payloads.
pub trait EmbeddedReaders {
    /// IPTC-NAA record (first payload byte 0x1C).
    fn read_iptc(&self, _data: &[u8]) -> Vec<Directory> {
        Vec::new()
    }

    /// ICC colour profile.
    fn read_icc(&self, _data: &[u8]) -> Vec<Directory> {
        Vec::new()
    }

    /// Photoshop image resource blocks.
    fn read_photoshop(&self, _data: &[u8]) -> Vec<Directory> {
        Vec::new()
    }

    /// XMP packet (already stripped of its trailing NUL padding).
    fn read_xmp(&self, _data: &[u8]) -> Vec<Directory> {
        Vec::new()
    }

    /// A complete embedded JPEG (Panasonic RAW's JpgFromRaw).
    fn read_jpeg(&self, _data: &[u8]) -> Vec<Directory> {
        Vec::new()
    }
}

/// The default: ignore every embedded payload.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoEmbeddedReaders;

impl EmbeddedReaders for NoEmbeddedReaders {}
