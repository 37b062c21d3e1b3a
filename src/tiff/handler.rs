//! The callback contract between the TIFF walker and its driver.
//!
//! The walker knows the TIFF wire shape and nothing else; everything
//! document-specific (which marker opens which root directory, which
//! tags are sub-IFD pointers, which tags need vendor decoding) lives
//! behind this trait. Handlers are stateful; the walker carries no state
//! of its own beyond the visited-offset set.

use crate::directory::DirectoryKind;
use crate::error::{ExifError, Result};
use crate::reader::ByteReader;
use crate::tiff::format::TiffStandard;
use crate::value::TagValue;

/// What the walker should do with a tag the handler has inspected.
#[derive(Debug)]
pub enum TagAction<'a> {
    /// Nothing special: decode by format code and store.
    Store,
    /// The handler consumed the tag (decoded it itself, attached an
    /// embedded-format directory, or deliberately dropped it).
    Consumed,
    /// Walk an IFD through the given (possibly re-based, possibly
    /// order-flipped) view, inside a freshly pushed directory of `kind`.
    /// Makernotes and in-line vendor sub-directories take this path.
    EnterIfd {
        kind: DirectoryKind,
        reader: ByteReader<'a>,
        offset: usize,
    },
}

/// Stateful driver for one TIFF walk.
pub trait TiffHandler {
    /// Recognise the 16-bit marker that follows the byte order mark.
    /// Pushes the root directory as a side effect and reports which
    /// dialect the document uses.
    fn process_marker(&mut self, marker: u16) -> Result<TiffStandard>;

    /// If `tag` is a sub-IFD pointer in the current directory, answer
    /// the kind of directory its target should be read into. Only asked
    /// for pointer-sized entries.
    fn try_enter_sub_ifd(&mut self, tag: u16) -> Option<DirectoryKind>;

    /// Called when a non-zero next-IFD offset follows the directory that
    /// just finished. Returning `true` means "walk it"; the handler
    /// pushes the follower directory (thumbnail, additional page) before
    /// answering.
    fn follower_ifd(&mut self) -> bool;

    /// Price a format code the standard table cannot. `None` defers to
    /// the standard table.
    fn custom_format_length(&self, tag: u16, format_code: u16, count: u64) -> Option<u64>;

    /// Inspect a tag before standard decoding. Reader failures bubbled
    /// out of this method are recorded on the current directory and the
    /// walk continues with the next entry.
    fn custom_tag<'a>(
        &mut self,
        reader: ByteReader<'a>,
        tag: u16,
        value_offset: usize,
        byte_count: usize,
    ) -> Result<TagAction<'a>>;

    /// Open a directory of the given kind; it becomes current.
    fn push_directory(&mut self, kind: DirectoryKind);

    /// The current directory's entries are exhausted: run any finish
    /// hooks and pop it off the stack.
    fn end_ifd(&mut self, reader: ByteReader<'_>);

    /// Store a decoded value into the current directory.
    fn store(&mut self, tag: u16, value: TagValue);

    /// Record an error on the current directory.
    fn error(&mut self, error: ExifError);
}
