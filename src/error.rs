//! Error types for exif-probe
//!
//! Errors here are data as much as they are control flow: most of them end
//! up recorded on the directory that was being populated when the problem
//! was found, so the enum is `Clone + PartialEq` and carries no boxed
//! sources.

use thiserror::Error;

/// Error kinds produced by the readers, the TIFF walker, and the vendor
/// decoders.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExifError {
    #[error("read of {count} bytes at offset {offset:#x} is past the end of the data")]
    Truncated { offset: usize, count: usize },

    #[error("offset {offset:#x} is outside the data (length {length})")]
    InvalidOffset { offset: usize, length: usize },

    #[error("unrecognised TIFF marker {marker:#06x}")]
    BadTiffMarker { marker: u16 },

    #[error("invalid TIFF byte order mark {bytes:02x?}")]
    BadTiffByteOrder { bytes: [u8; 2] },

    #[error("IFD at offset {offset:#x} was already visited")]
    IfdCycle { offset: usize },

    #[error("unknown TIFF data format code {format}")]
    UnknownTiffFormat { format: u16 },

    #[error("bad vendor header: {0}")]
    VendorBadHeader(String),

    #[error("bad vendor block size: {0}")]
    VendorBadSize(String),

    #[error("bad vendor date/time: {0}")]
    VendorBadDateTime(String),

    #[error("unsupported vendor data: {0}")]
    VendorUnsupported(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ExifError>;
