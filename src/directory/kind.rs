//! Directory kinds
//!
//! Every directory the extraction produces is tagged with a kind. The
//! kind selects the human-readable directory name and the static
//! tag-name table, and it is what the EXIF handler's promotion and
//! dispatch rules match on. Vendor dialects reuse the same tag IDs for
//! different data, so a tag ID alone identifies nothing.

use serde::Serialize;

use super::names;

/// The flavour of a produced directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DirectoryKind {
    ExifIfd0,
    ExifSubIfd,
    ExifThumbnail,
    ExifImage,
    ExifInterop,
    Gps,
    PanasonicRawIfd0,
    PanasonicRawWbInfo,
    PanasonicRawWbInfo2,
    PanasonicRawDistortion,
    Olympus,
    OlympusEquipment,
    OlympusCameraSettings,
    OlympusRawDevelopment,
    OlympusRawDevelopment2,
    OlympusImageProcessing,
    OlympusFocusInfo,
    OlympusRawInfo,
    OlympusMainInfo,
    NikonType1,
    NikonType2,
    Canon,
    SonyType1,
    SonyType6,
    Sigma,
    CasioType1,
    CasioType2,
    Fujifilm,
    Kyocera,
    Leica,
    LeicaType5,
    Panasonic,
    Pentax,
    PentaxType2,
    Sanyo,
    Ricoh,
    Samsung,
    Dji,
    Flir,
    Apple,
    Kodak,
    ReconyxHyperFire,
    ReconyxHyperFire2,
    ReconyxUltraFire,
    PrintIm,
    GeoTiff,
    Iptc,
    Icc,
    Photoshop,
    Xmp,
    /// Synthetic directory carrying errors when the document could not
    /// be walked at all (bad order mark, bad marker).
    Error,
}

impl DirectoryKind {
    /// Human-readable directory name.
    pub fn name(self) -> &'static str {
        use DirectoryKind::*;
        match self {
            ExifIfd0 => "Exif IFD0",
            ExifSubIfd => "Exif SubIFD",
            ExifThumbnail => "Exif Thumbnail",
            ExifImage => "Exif Image",
            ExifInterop => "Interoperability",
            Gps => "GPS",
            PanasonicRawIfd0 => "PanasonicRaw Exif IFD0",
            PanasonicRawWbInfo => "PanasonicRaw WbInfo",
            PanasonicRawWbInfo2 => "PanasonicRaw WbInfo2",
            PanasonicRawDistortion => "PanasonicRaw DistortionInfo",
            Olympus => "Olympus Makernote",
            OlympusEquipment => "Olympus Equipment",
            OlympusCameraSettings => "Olympus Camera Settings",
            OlympusRawDevelopment => "Olympus Raw Development",
            OlympusRawDevelopment2 => "Olympus Raw Development 2",
            OlympusImageProcessing => "Olympus Image Processing",
            OlympusFocusInfo => "Olympus Focus Info",
            OlympusRawInfo => "Olympus Raw Info",
            OlympusMainInfo => "Olympus Main Info",
            NikonType1 => "Nikon Makernote",
            NikonType2 => "Nikon Makernote",
            Canon => "Canon Makernote",
            SonyType1 => "Sony Makernote",
            SonyType6 => "Sony Makernote",
            Sigma => "Sigma Makernote",
            CasioType1 => "Casio Makernote",
            CasioType2 => "Casio Makernote",
            Fujifilm => "Fujifilm Makernote",
            Kyocera => "Kyocera/Contax Makernote",
            Leica => "Leica Makernote",
            LeicaType5 => "Leica Makernote",
            Panasonic => "Panasonic Makernote",
            Pentax => "Pentax Makernote",
            PentaxType2 => "Pentax Makernote",
            Sanyo => "Sanyo Makernote",
            Ricoh => "Ricoh Makernote",
            Samsung => "Samsung Makernote",
            Dji => "DJI Makernote",
            Flir => "FLIR Makernote",
            Apple => "Apple Makernote",
            Kodak => "Kodak Makernote",
            ReconyxHyperFire => "Reconyx HyperFire Makernote",
            ReconyxHyperFire2 => "Reconyx HyperFire 2 Makernote",
            ReconyxUltraFire => "Reconyx UltraFire Makernote",
            PrintIm => "PrintIM",
            GeoTiff => "GeoTIFF",
            Iptc => "IPTC",
            Icc => "ICC Profile",
            Photoshop => "Photoshop",
            Xmp => "XMP",
            Error => "Error",
        }
    }

    /// Static tag-name lookup for this kind.
    pub fn tag_name(self, tag: u16) -> Option<&'static str> {
        use DirectoryKind::*;
        match self {
            ExifIfd0 | ExifSubIfd | ExifThumbnail | ExifImage => names::exif_tag_name(tag),
            ExifInterop => names::interop_tag_name(tag),
            Gps => names::gps_tag_name(tag),
            PanasonicRawIfd0 => names::panasonic_raw_ifd0_tag_name(tag),
            PanasonicRawWbInfo => names::panasonic_raw_wb_info_tag_name(tag),
            PanasonicRawWbInfo2 => names::panasonic_raw_wb_info2_tag_name(tag),
            PanasonicRawDistortion => names::panasonic_raw_distortion_tag_name(tag),
            Olympus => names::olympus_tag_name(tag),
            OlympusEquipment => names::olympus_equipment_tag_name(tag),
            OlympusCameraSettings => names::olympus_camera_settings_tag_name(tag),
            OlympusFocusInfo => names::olympus_focus_info_tag_name(tag),
            OlympusRawDevelopment
            | OlympusRawDevelopment2
            | OlympusImageProcessing
            | OlympusRawInfo
            | OlympusMainInfo => None,
            NikonType1 => names::nikon_type1_tag_name(tag),
            NikonType2 => names::nikon_type2_tag_name(tag),
            Canon => names::canon_tag_name(tag),
            SonyType1 => names::sony_type1_tag_name(tag),
            SonyType6 => names::sony_type6_tag_name(tag),
            Sigma => names::sigma_tag_name(tag),
            CasioType1 => names::casio_type1_tag_name(tag),
            CasioType2 => names::casio_type2_tag_name(tag),
            Fujifilm => names::fujifilm_tag_name(tag),
            Kyocera => names::kyocera_tag_name(tag),
            Leica | LeicaType5 => names::leica_tag_name(tag),
            Panasonic => names::panasonic_tag_name(tag),
            Pentax | PentaxType2 => names::pentax_tag_name(tag),
            Sanyo => names::sanyo_tag_name(tag),
            Ricoh => names::ricoh_tag_name(tag),
            Samsung => names::samsung_tag_name(tag),
            Dji => names::dji_tag_name(tag),
            Flir => names::flir_tag_name(tag),
            Apple => names::apple_tag_name(tag),
            Kodak => names::kodak_tag_name(tag),
            ReconyxHyperFire => names::reconyx_hyperfire_tag_name(tag),
            ReconyxHyperFire2 => names::reconyx_hyperfire2_tag_name(tag),
            ReconyxUltraFire => names::reconyx_ultrafire_tag_name(tag),
            PrintIm => names::printim_tag_name(tag),
            GeoTiff => names::geotiff_key_name(tag),
            Iptc | Icc | Photoshop | Xmp | Error => None,
        }
    }
}
