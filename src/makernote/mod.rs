//! Makernote recognition.
//!
//! A makernote is an UNDEFINED tag in the EXIF SubIFD whose payload is
//! whatever the camera vendor felt like writing: usually an IFD behind a
//! signature header, sometimes a bare IFD, sometimes a fixed binary
//! layout. The recogniser probes the first bytes and the camera make and
//! answers a strategy: walk an IFD through a derived view, run a
//! fixed-layout decoder, or decline (in which case the raw bytes are
//! stored and that is not an error).
//!
//! Match order is load-bearing. Sony's header-less branch must come after
//! the `SONY CAM`/`SONY DSC` probes, and Leica's type-5 signatures must
//! be tried before the `LEICA` make fallbacks.

pub mod kodak;
pub mod reconyx;

pub(crate) use kodak::process_kodak;
pub(crate) use reconyx::{
    process_hyperfire, process_hyperfire2, process_ultrafire, HYPERFIRE_MAKERNOTE_VERSION,
};

use tracing::debug;

use crate::directory::DirectoryKind;
use crate::error::{ExifError, Result};
use crate::reader::{ByteOrder, ByteReader};

/// A fixed-layout vendor decoder to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinaryMakernote {
    Kodak { big_endian: bool },
    ReconyxHyperFire,
    ReconyxHyperFire2,
    ReconyxUltraFire,
}

/// The strategy selected for a makernote payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Makernote {
    /// Walk an IFD at `offset`, optionally through a re-based and/or
    /// order-overridden view.
    Ifd {
        kind: DirectoryKind,
        offset: usize,
        byte_order: Option<ByteOrder>,
        base_shift: Option<usize>,
    },
    /// Run a fixed-layout decoder over the payload.
    Binary(BinaryMakernote),
    /// Nobody recognised it; keep the raw bytes.
    Unrecognised,
}

fn ifd(kind: DirectoryKind, offset: usize) -> Makernote {
    Makernote::Ifd {
        kind,
        offset,
        byte_order: None,
        base_shift: None,
    }
}

fn shifted_ifd(kind: DirectoryKind, offset: usize, makernote_offset: usize) -> Makernote {
    Makernote::Ifd {
        kind,
        offset,
        byte_order: None,
        base_shift: Some(makernote_offset),
    }
}

/// Select a strategy for the makernote at `offset`.
///
/// `make` is the camera make from the first EXIF IFD0, already trimmed;
/// it may be empty. Reader failures while probing bubble out and end up
/// recorded on the current directory.
pub(crate) fn recognise(
    reader: ByteReader<'_>,
    offset: usize,
    make: &str,
) -> Result<Makernote> {
    use DirectoryKind::*;

    let probe_len = 12.min(reader.len().saturating_sub(offset));
    let probe = reader.get_bytes(offset, probe_len)?;
    let make_uc = make.to_ascii_uppercase();
    debug!(?probe, make, "makernote probe");

    let selected = if probe.starts_with(b"OLYMP\0")
        || probe.starts_with(b"EPSON")
        || probe.starts_with(b"AGFA")
    {
        ifd(Olympus, offset + 8)
    } else if probe.starts_with(b"OLYMPUS\0II") {
        shifted_ifd(Olympus, 12, offset)
    } else if make_uc.starts_with("MINOLTA") || make_uc.starts_with("KONICA MINOLTA") {
        // Minolta cameras use the Olympus dialect with no header at all.
        ifd(Olympus, offset)
    } else if make_uc.starts_with("NIKON") {
        if probe.starts_with(b"Nikon") {
            match reader.get_u8(offset + 6)? {
                1 => ifd(NikonType1, offset + 8),
                2 => {
                    // An embedded TIFF header sits at +10; its pointers
                    // are relative to itself and its IFD starts at 8.
                    shifted_ifd(NikonType2, 8, offset + 10)
                }
                version => {
                    return Err(ExifError::VendorUnsupported(format!(
                        "Nikon makernote version {version}"
                    )))
                }
            }
        } else {
            ifd(NikonType2, offset)
        }
    } else if probe.starts_with(b"SONY CAM") || probe.starts_with(b"SONY DSC") {
        ifd(SonyType1, offset + 12)
    } else if make_uc.starts_with("SONY") && !probe.starts_with(&[0x01, 0x00]) {
        // Header-less Sony; newer models lead with {0x01,0x00} and are
        // not IFD-shaped.
        ifd(SonyType1, offset)
    } else if probe.starts_with(b"SEMC MS\0\0\0\0\0") {
        Makernote::Ifd {
            kind: SonyType6,
            offset: offset + 20,
            byte_order: Some(ByteOrder::BigEndian),
            base_shift: None,
        }
    } else if probe.starts_with(b"SIGMA\0\0\0") || probe.starts_with(b"FOVEON\0\0") {
        ifd(Sigma, offset + 10)
    } else if probe.starts_with(b"KDK") {
        Makernote::Binary(BinaryMakernote::Kodak {
            big_endian: probe.starts_with(b"KDK INFO"),
        })
    } else if make_uc == "CANON" {
        ifd(Canon, offset)
    } else if make_uc.starts_with("CASIO") {
        if probe.starts_with(b"QVC\0\0\0") {
            ifd(CasioType2, offset + 6)
        } else {
            ifd(CasioType1, offset)
        }
    } else if probe.starts_with(b"FUJIFILM") || make_uc == "FUJIFILM" {
        // Fujifilm re-bases everything on the makernote itself and fixes
        // little-endian order; the IFD start is stored at +8.
        let maker_reader = reader
            .with_shifted_base(offset)
            .with_byte_order(ByteOrder::LittleEndian);
        let ifd_start = maker_reader.get_i32(8)?;
        let ifd_start = usize::try_from(ifd_start).map_err(|_| ExifError::InvalidOffset {
            offset: 8,
            length: maker_reader.len(),
        })?;
        Makernote::Ifd {
            kind: Fujifilm,
            offset: ifd_start,
            byte_order: Some(ByteOrder::LittleEndian),
            base_shift: Some(offset),
        }
    } else if probe.starts_with(b"KYOCERA") {
        ifd(Kyocera, offset + 22)
    } else if probe.starts_with(b"LEICA\0\x01\0")
        || probe.starts_with(b"LEICA\0\x04\0")
        || probe.starts_with(b"LEICA\0\x05\0")
        || probe.starts_with(b"LEICA\0\x06\0")
        || probe.starts_with(b"LEICA\0\x07\0")
    {
        shifted_ifd(LeicaType5, 8, offset)
    } else if probe.starts_with(b"LEICA") {
        if make == "Leica Camera AG" {
            Makernote::Ifd {
                kind: Leica,
                offset: offset + 8,
                byte_order: Some(ByteOrder::LittleEndian),
                base_shift: None,
            }
        } else if make == "LEICA" {
            // Some Leica models are rebadged Panasonic bodies.
            Makernote::Ifd {
                kind: Panasonic,
                offset: offset + 8,
                byte_order: Some(ByteOrder::LittleEndian),
                base_shift: None,
            }
        } else {
            Makernote::Unrecognised
        }
    } else if probe.starts_with(b"Panasonic\0\0\0") {
        ifd(Panasonic, offset + 12)
    } else if probe.starts_with(b"AOC\0") {
        shifted_ifd(CasioType2, 6, offset)
    } else if make_uc.starts_with("PENTAX") || make_uc.starts_with("ASAHI") {
        shifted_ifd(Pentax, 0, offset)
    } else if probe.starts_with(b"SANYO\0\x01\0") {
        shifted_ifd(Sanyo, 8, offset)
    } else if make_uc.starts_with("RICOH") {
        if probe.starts_with(b"Rv") || probe.starts_with(b"Rev") {
            // Textual firmware revision notes; nothing to walk.
            Makernote::Unrecognised
        } else if probe.starts_with(b"RICOH") {
            Makernote::Ifd {
                kind: Ricoh,
                offset: 8,
                byte_order: Some(ByteOrder::BigEndian),
                base_shift: Some(offset),
            }
        } else if probe.starts_with(b"PENTAX \0II") {
            Makernote::Ifd {
                kind: PentaxType2,
                offset: 10,
                byte_order: Some(ByteOrder::LittleEndian),
                base_shift: Some(offset),
            }
        } else {
            Makernote::Unrecognised
        }
    } else if probe.starts_with(b"Apple iOS\0") {
        Makernote::Ifd {
            kind: Apple,
            offset: 14,
            byte_order: Some(ByteOrder::BigEndian),
            base_shift: Some(offset),
        }
    } else if reader.get_u16(offset).ok() == Some(HYPERFIRE_MAKERNOTE_VERSION) {
        Makernote::Binary(BinaryMakernote::ReconyxHyperFire)
    } else if probe.starts_with(b"RECONYXUF") {
        Makernote::Binary(BinaryMakernote::ReconyxUltraFire)
    } else if probe.starts_with(b"RECONYXH2") {
        Makernote::Binary(BinaryMakernote::ReconyxHyperFire2)
    } else if make_uc == "SAMSUNG" {
        ifd(Samsung, offset)
    } else if make_uc == "DJI" {
        ifd(Dji, offset)
    } else if make == "FLIR Systems" {
        ifd(Flir, offset)
    } else {
        Makernote::Unrecognised
    };

    Ok(selected)
}
