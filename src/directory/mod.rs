//! Directory model
//!
//! A [`Directory`] is an insertion-ordered collection of tag values plus
//! the errors recorded while it was populated. Directories never own each
//! other: the parent link is an index into the [`Metadata`] output list,
//! so the parent/child relation is a tree over the arena with no strong
//! cycles.

mod kind;
mod names;

pub use kind::DirectoryKind;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::error::ExifError;
use crate::value::TagValue;

fn serialize_errors<S: Serializer>(errors: &[ExifError], s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(errors.iter().map(|e| e.to_string()))
}

/// One named, typed tag collection produced by a walk.
#[derive(Debug, Clone, Serialize)]
pub struct Directory {
    kind: DirectoryKind,
    tags: IndexMap<u16, TagValue>,
    #[serde(serialize_with = "serialize_errors")]
    errors: Vec<ExifError>,
    parent: Option<usize>,
}

impl Directory {
    pub fn new(kind: DirectoryKind) -> Self {
        Directory {
            kind,
            tags: IndexMap::new(),
            errors: Vec::new(),
            parent: None,
        }
    }

    pub fn kind(&self) -> DirectoryKind {
        self.kind
    }

    /// Human-readable directory name.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Index of the parent directory in the output list, if any.
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: Option<usize>) {
        self.parent = parent;
    }

    /// Store a tag value. Setting the same tag twice replaces the value
    /// and keeps the original position.
    pub fn set(&mut self, tag: u16, value: impl Into<TagValue>) {
        self.tags.insert(tag, value.into());
    }

    pub fn get(&self, tag: u16) -> Option<&TagValue> {
        self.tags.get(&tag)
    }

    pub fn contains(&self, tag: u16) -> bool {
        self.tags.contains_key(&tag)
    }

    /// Remove a tag, preserving the order of the remaining entries.
    pub fn remove(&mut self, tag: u16) -> Option<TagValue> {
        self.tags.shift_remove(&tag)
    }

    /// Tag entries in the order they were set.
    pub fn entries(&self) -> impl Iterator<Item = (u16, &TagValue)> {
        self.tags.iter().map(|(&tag, value)| (tag, value))
    }

    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Static name for a tag in this directory's dialect.
    pub fn tag_name(&self, tag: u16) -> Option<&'static str> {
        self.kind.tag_name(tag)
    }

    /// Whether this directory's dialect names the given tag. The
    /// Panasonic Raw binary-block decoder keys its layout off this.
    pub fn has_tag_name(&self, tag: u16) -> bool {
        self.kind.tag_name(tag).is_some()
    }

    pub fn add_error(&mut self, error: ExifError) {
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[ExifError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    // Typed accessors. Lenient about integer width, strict about shape.

    pub fn get_string(&self, tag: u16) -> Option<&str> {
        self.get(tag)?.as_str()
    }

    pub fn get_u16(&self, tag: u16) -> Option<u16> {
        self.get(tag)?.as_u16()
    }

    pub fn get_u32(&self, tag: u16) -> Option<u32> {
        self.get(tag)?.as_u32()
    }

    pub fn get_i32(&self, tag: u16) -> Option<i32> {
        self.get(tag)?.as_i32()
    }

    pub fn get_f64(&self, tag: u16) -> Option<f64> {
        self.get(tag)?.as_f64()
    }

    pub fn get_bytes(&self, tag: u16) -> Option<&[u8]> {
        self.get(tag)?.as_bytes()
    }

    pub fn get_u16_array(&self, tag: u16) -> Option<&[u16]> {
        self.get(tag)?.as_u16_array()
    }

    pub fn get_rational_array(&self, tag: u16) -> Option<&[(u32, u32)]> {
        self.get(tag)?.as_rational_array()
    }
}

/// The result of one extraction: directories in push order.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Metadata {
    directories: Vec<Directory>,
}

impl Metadata {
    pub(crate) fn from_directories(directories: Vec<Directory>) -> Self {
        Metadata { directories }
    }

    pub fn directories(&self) -> &[Directory] {
        &self.directories
    }

    pub fn len(&self) -> usize {
        self.directories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Directory> {
        self.directories.iter()
    }

    /// First directory of the given kind, if any.
    pub fn first_of(&self, kind: DirectoryKind) -> Option<&Directory> {
        self.directories.iter().find(|d| d.kind() == kind)
    }

    pub fn all_of(&self, kind: DirectoryKind) -> impl Iterator<Item = &Directory> {
        self.directories.iter().filter(move |d| d.kind() == kind)
    }

    /// Resolve a directory's parent link.
    pub fn parent_of(&self, directory: &Directory) -> Option<&Directory> {
        self.directories.get(directory.parent()?)
    }

    /// Whether any directory recorded an error.
    pub fn has_errors(&self) -> bool {
        self.directories.iter().any(Directory::has_errors)
    }
}
