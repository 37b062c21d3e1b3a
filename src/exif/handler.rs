//! The EXIF handler driving the TIFF walker.
//!
//! This is where TIFF stops being generic: marker dispatch decides which
//! root directory a document opens with, the promotion rules turn
//! pointer tags into named sub-directories, the custom-tag hook routes
//! makernotes and embedded formats, and the finish hook unpacks GeoTIFF
//! keys out of IFD0.
//!
//! The handler owns the output arena. Directories are appended in push
//! order and refer to their parents by index, so the result is a flat
//! list over which the parent links form a tree.

use tracing::debug;

use crate::directory::{Directory, DirectoryKind, Metadata};
use crate::embedded::EmbeddedReaders;
use crate::error::{ExifError, Result};
use crate::exif::{geotiff, panasonic_raw, printim, tags};
use crate::makernote::{self, BinaryMakernote, Makernote};
use crate::reader::{ByteOrder, ByteReader};
use crate::tiff::{TagAction, TiffHandler, TiffStandard};
use crate::value::TagValue;

const MARKER_TIFF: u16 = 0x002A;
const MARKER_BIG_TIFF: u16 = 0x002B;
// Olympus ORF files reuse the TIFF layout under their own markers.
const MARKER_ORF_OR: u16 = 0x4F52;
const MARKER_ORF_SR: u16 = 0x5352;
const MARKER_PANASONIC_RAW: u16 = 0x0055;

/// Vendor directories where tag 0x0E00 is a PrintIM block.
const PRINT_IM_DIRECTORIES: [DirectoryKind; 9] = [
    DirectoryKind::CasioType2,
    DirectoryKind::Kyocera,
    DirectoryKind::NikonType2,
    DirectoryKind::Olympus,
    DirectoryKind::Panasonic,
    DirectoryKind::Pentax,
    DirectoryKind::Ricoh,
    DirectoryKind::Sanyo,
    DirectoryKind::SonyType1,
];

fn olympus_subdirectory(tag: u16) -> Option<DirectoryKind> {
    Some(match tag {
        tags::TAG_OLYMPUS_EQUIPMENT => DirectoryKind::OlympusEquipment,
        tags::TAG_OLYMPUS_CAMERA_SETTINGS => DirectoryKind::OlympusCameraSettings,
        tags::TAG_OLYMPUS_RAW_DEVELOPMENT => DirectoryKind::OlympusRawDevelopment,
        tags::TAG_OLYMPUS_RAW_DEVELOPMENT_2 => DirectoryKind::OlympusRawDevelopment2,
        tags::TAG_OLYMPUS_IMAGE_PROCESSING => DirectoryKind::OlympusImageProcessing,
        tags::TAG_OLYMPUS_FOCUS_INFO => DirectoryKind::OlympusFocusInfo,
        tags::TAG_OLYMPUS_RAW_INFO => DirectoryKind::OlympusRawInfo,
        tags::TAG_OLYMPUS_MAIN_INFO => DirectoryKind::OlympusMainInfo,
        _ => return None,
    })
}

/// The concrete handler for EXIF-bearing TIFF documents.
pub struct ExifTiffHandler {
    directories: Vec<Directory>,
    stack: Vec<usize>,
    last_closed: Option<DirectoryKind>,
    embedded: Box<dyn EmbeddedReaders>,
}

impl ExifTiffHandler {
    pub fn new(embedded: Box<dyn EmbeddedReaders>) -> Self {
        ExifTiffHandler {
            directories: Vec::new(),
            stack: Vec::new(),
            last_closed: None,
            embedded,
        }
    }

    /// Hand the accumulated directories over.
    pub fn into_metadata(self) -> Metadata {
        Metadata::from_directories(self.directories)
    }

    fn current_kind(&self) -> Option<DirectoryKind> {
        let &top = self.stack.last()?;
        Some(self.directories[top].kind())
    }

    fn current_mut(&mut self) -> Option<&mut Directory> {
        let &top = self.stack.last()?;
        self.directories.get_mut(top)
    }

    /// Camera make from the first IFD0, trimmed. Makernote recognition
    /// keys on this.
    fn camera_make(&self) -> Option<String> {
        self.directories
            .iter()
            .find(|d| d.kind() == DirectoryKind::ExifIfd0)?
            .get_string(tags::TAG_MAKE)
            .map(|s| s.trim().to_owned())
    }

    /// Append a directory to the output without putting it on the stack
    /// (embedded formats, binary makernotes, GeoTIFF). The current
    /// directory becomes its parent unless one is already set.
    fn attach(&mut self, mut directory: Directory) {
        if directory.parent().is_none() {
            directory.set_parent(self.stack.last().copied());
        }
        self.directories.push(directory);
    }

    fn attach_all(&mut self, directories: Vec<Directory>) {
        for directory in directories {
            self.attach(directory);
        }
    }

    fn process_makernote<'a>(
        &mut self,
        reader: ByteReader<'a>,
        makernote_offset: usize,
    ) -> Result<TagAction<'a>> {
        let make = self.camera_make().unwrap_or_default();
        match makernote::recognise(reader, makernote_offset, &make)? {
            Makernote::Ifd {
                kind,
                offset,
                byte_order,
                base_shift,
            } => {
                let mut view = reader;
                if let Some(shift) = base_shift {
                    view = view.with_shifted_base(shift);
                }
                if let Some(order) = byte_order {
                    view = view.with_byte_order(order);
                }
                Ok(TagAction::EnterIfd {
                    kind,
                    reader: view,
                    offset,
                })
            }
            Makernote::Binary(decoder) => {
                match decoder {
                    BinaryMakernote::Kodak { big_endian } => {
                        let mut dir = Directory::new(DirectoryKind::Kodak);
                        let view = if big_endian {
                            reader.with_byte_order(ByteOrder::BigEndian)
                        } else {
                            reader
                        };
                        makernote::process_kodak(&mut dir, view, makernote_offset);
                        self.attach(dir);
                    }
                    BinaryMakernote::ReconyxHyperFire => {
                        let mut dir = Directory::new(DirectoryKind::ReconyxHyperFire);
                        makernote::process_hyperfire(&mut dir, reader, makernote_offset);
                        self.attach(dir);
                    }
                    BinaryMakernote::ReconyxHyperFire2 => {
                        let mut dir = Directory::new(DirectoryKind::ReconyxHyperFire2);
                        makernote::process_hyperfire2(&mut dir, reader, makernote_offset);
                        self.attach(dir);
                    }
                    BinaryMakernote::ReconyxUltraFire => {
                        let mut dir = Directory::new(DirectoryKind::ReconyxUltraFire);
                        makernote::process_ultrafire(&mut dir, reader, makernote_offset);
                        self.attach(dir);
                    }
                }
                Ok(TagAction::Consumed)
            }
            // Unknown dialects are not errors: keep the raw bytes.
            Makernote::Unrecognised => Ok(TagAction::Store),
        }
    }

    fn process_panasonic_raw_block<'a>(
        &mut self,
        kind: DirectoryKind,
        reader: ByteReader<'a>,
        value_offset: usize,
        byte_count: usize,
        signed: bool,
        array_length: usize,
    ) -> TagAction<'a> {
        let mut dir = Directory::new(kind);
        panasonic_raw::process_binary_block(
            &mut dir,
            reader,
            value_offset,
            byte_count,
            signed,
            array_length,
        );
        self.attach(dir);
        TagAction::Consumed
    }
}

impl TiffHandler for ExifTiffHandler {
    fn process_marker(&mut self, marker: u16) -> Result<TiffStandard> {
        match marker {
            MARKER_TIFF | MARKER_ORF_OR | MARKER_ORF_SR => {
                self.push_directory(DirectoryKind::ExifIfd0);
                Ok(TiffStandard::Tiff)
            }
            MARKER_BIG_TIFF => {
                self.push_directory(DirectoryKind::ExifIfd0);
                Ok(TiffStandard::BigTiff)
            }
            MARKER_PANASONIC_RAW => {
                self.push_directory(DirectoryKind::PanasonicRawIfd0);
                Ok(TiffStandard::Tiff)
            }
            _ => Err(ExifError::BadTiffMarker { marker }),
        }
    }

    fn try_enter_sub_ifd(&mut self, tag: u16) -> Option<DirectoryKind> {
        if tag == tags::TAG_SUB_IFD_OFFSET {
            return Some(DirectoryKind::ExifSubIfd);
        }
        match self.current_kind()? {
            DirectoryKind::ExifIfd0 | DirectoryKind::PanasonicRawIfd0 => match tag {
                tags::TAG_EXIF_SUB_IFD_OFFSET => Some(DirectoryKind::ExifSubIfd),
                tags::TAG_GPS_INFO_OFFSET => Some(DirectoryKind::Gps),
                _ => None,
            },
            DirectoryKind::ExifSubIfd if tag == tags::TAG_INTEROP_OFFSET => {
                Some(DirectoryKind::ExifInterop)
            }
            DirectoryKind::Olympus => olympus_subdirectory(tag),
            _ => None,
        }
    }

    fn follower_ifd(&mut self) -> bool {
        match self.last_closed {
            // IFD1 holds the thumbnail for JPEG and most TIFF flavours
            Some(DirectoryKind::ExifIfd0 | DirectoryKind::PanasonicRawIfd0) => {
                self.push_directory(DirectoryKind::ExifThumbnail);
                true
            }
            // multi-page TIFFs chain further full images
            Some(DirectoryKind::ExifThumbnail | DirectoryKind::ExifImage) => {
                self.push_directory(DirectoryKind::ExifImage);
                true
            }
            _ => false,
        }
    }

    fn custom_format_length(&self, _tag: u16, format_code: u16, count: u64) -> Option<u64> {
        match format_code {
            // four-byte pointer/undefined hybrid used by makernote tags
            13 => Some(count.saturating_mul(4)),
            // preserved for later custom handling
            0 => Some(0),
            _ => None,
        }
    }

    fn custom_tag<'a>(
        &mut self,
        reader: ByteReader<'a>,
        tag: u16,
        value_offset: usize,
        byte_count: usize,
    ) -> Result<TagAction<'a>> {
        let Some(kind) = self.current_kind() else {
            return Ok(TagAction::Store);
        };

        if tag == tags::TAG_MAKERNOTE && kind == DirectoryKind::ExifSubIfd {
            return self.process_makernote(reader, value_offset);
        }

        if tag == tags::TAG_IPTC_NAA && kind == DirectoryKind::ExifIfd0 {
            // IPTC-NAA records start with an 0x1C marker; anything else
            // in this tag is stored untouched.
            if byte_count > 0 && reader.get_u8(value_offset)? == 0x1C {
                let payload = reader.get_bytes(value_offset, byte_count)?;
                let dirs = self.embedded.read_iptc(payload);
                self.attach_all(dirs);
                return Ok(TagAction::Consumed);
            }
            return Ok(TagAction::Store);
        }

        if tag == tags::TAG_INTER_COLOR_PROFILE {
            let payload = reader.get_bytes(value_offset, byte_count)?;
            let dirs = self.embedded.read_icc(payload);
            self.attach_all(dirs);
            return Ok(TagAction::Consumed);
        }

        if tag == tags::TAG_PHOTOSHOP_SETTINGS && kind == DirectoryKind::ExifIfd0 {
            let payload = reader.get_bytes(value_offset, byte_count)?;
            let dirs = self.embedded.read_photoshop(payload);
            self.attach_all(dirs);
            return Ok(TagAction::Consumed);
        }

        if tag == tags::TAG_APPLICATION_NOTES
            && matches!(kind, DirectoryKind::ExifIfd0 | DirectoryKind::ExifSubIfd)
        {
            let payload = reader.get_null_terminated_bytes(value_offset, byte_count)?;
            let dirs = self.embedded.read_xmp(payload);
            self.attach_all(dirs);
            return Ok(TagAction::Consumed);
        }

        if tag == tags::TAG_PRINT_IMAGE_MATCHING_INFO
            || (tag == tags::TAG_VENDOR_PRINT_IM && PRINT_IM_DIRECTORIES.contains(&kind))
        {
            let mut dir = Directory::new(DirectoryKind::PrintIm);
            printim::process_print_im(&mut dir, reader, value_offset, byte_count);
            self.attach(dir);
            return Ok(TagAction::Consumed);
        }

        if kind == DirectoryKind::Olympus {
            // Blob-stored Olympus sub-directories: the payload at the
            // value offset IS the IFD.
            if let Some(sub_kind) = olympus_subdirectory(tag) {
                return Ok(TagAction::EnterIfd {
                    kind: sub_kind,
                    reader,
                    offset: value_offset,
                });
            }
        }

        if kind == DirectoryKind::PanasonicRawIfd0 {
            match tag {
                tags::TAG_PANASONIC_RAW_WB_INFO => {
                    return Ok(self.process_panasonic_raw_block(
                        DirectoryKind::PanasonicRawWbInfo,
                        reader,
                        value_offset,
                        byte_count,
                        false,
                        2,
                    ));
                }
                tags::TAG_PANASONIC_RAW_WB_INFO_2 => {
                    return Ok(self.process_panasonic_raw_block(
                        DirectoryKind::PanasonicRawWbInfo2,
                        reader,
                        value_offset,
                        byte_count,
                        false,
                        3,
                    ));
                }
                tags::TAG_PANASONIC_RAW_DISTORTION_INFO => {
                    return Ok(self.process_panasonic_raw_block(
                        DirectoryKind::PanasonicRawDistortion,
                        reader,
                        value_offset,
                        byte_count,
                        true,
                        1,
                    ));
                }
                tags::TAG_PANASONIC_RAW_JPG_FROM_RAW => {
                    let payload = reader.get_bytes(value_offset, byte_count)?;
                    let dirs = self.embedded.read_jpeg(payload);
                    self.attach_all(dirs);
                    return Ok(TagAction::Consumed);
                }
                _ => {}
            }
        }

        Ok(TagAction::Store)
    }

    fn push_directory(&mut self, kind: DirectoryKind) {
        debug!(?kind, depth = self.stack.len(), "push directory");
        let mut directory = Directory::new(kind);
        directory.set_parent(self.stack.last().copied());
        let index = self.directories.len();
        self.directories.push(directory);
        self.stack.push(index);
    }

    fn end_ifd(&mut self, _reader: ByteReader<'_>) {
        if let Some(&top) = self.stack.last() {
            if self.directories[top].kind() == DirectoryKind::ExifIfd0 {
                if let Some(mut geo) = geotiff::process_geo_tiff(&mut self.directories[top]) {
                    geo.set_parent(Some(top));
                    self.directories.push(geo);
                }
            }
        }
        self.last_closed = self.stack.pop().map(|index| self.directories[index].kind());
    }

    fn store(&mut self, tag: u16, value: TagValue) {
        if let Some(directory) = self.current_mut() {
            directory.set(tag, value);
        }
    }

    fn error(&mut self, error: ExifError) {
        debug!(%error, "recorded");
        if let Some(directory) = self.current_mut() {
            directory.add_error(error);
        } else if let Some(directory) = self.directories.last_mut() {
            directory.add_error(error);
        } else {
            let mut directory = Directory::new(DirectoryKind::Error);
            directory.add_error(error);
            self.directories.push(directory);
        }
    }
}
