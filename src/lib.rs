//! # exif-probe
//!
//! TIFF/EXIF metadata extraction with vendor makernote support.
//!
//! The crate walks the TIFF/IFD tag tree found in TIFF files, raw camera
//! formats, and JPEG APP1 segments, and yields a flat list of typed,
//! named directories. A single document fans out into many: the EXIF
//! SubIFD, the GPS block, thumbnail IFDs, GeoTIFF keys lifted out of
//! IFD0, and whichever vendor makernote dialect the camera wrote.
//! Dozens of dialects are recognised, each with its own offset
//! conventions and byte order quirks.
//!
//! ```no_run
//! let data = std::fs::read("photo.tif").unwrap();
//! let metadata = exif_probe::read_exif(&data);
//! for directory in metadata.iter() {
//!     for (tag, value) in directory.entries() {
//!         let name = directory.tag_name(tag).unwrap_or("?");
//!         println!("[{}] {name}: {value}", directory.name());
//!     }
//! }
//! ```
//!
//! Robustness contract: the walk always terminates and always returns a
//! directory list. Cycles, truncation, bad pointers, and malformed
//! vendor blocks are recorded as errors on the directory where they were
//! found; only a document whose header cannot be read at all collapses
//! to a single error-bearing directory.
//!
//! Container demultiplexing (JPEG segments, PNG chunks) and the non-TIFF
//! embedded formats (IPTC, ICC, Photoshop, XMP) are out of scope; the
//! latter are reachable through the [`EmbeddedReaders`] seam.

mod directory;
mod embedded;
mod error;
mod reader;
mod value;

pub mod exif;
pub mod makernote;
pub mod tiff;

pub use directory::{Directory, DirectoryKind, Metadata};
pub use embedded::{EmbeddedReaders, NoEmbeddedReaders};
pub use error::{ExifError, Result};
pub use exif::{read_exif, read_exif_with, ExifTiffHandler, GeoLocation};
pub use reader::{ByteOrder, ByteReader, SequentialReader, StringEncoding};
pub use value::TagValue;
