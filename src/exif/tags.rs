//! Tag ID constants the EXIF handler dispatches on.

// Pointer tags promoted to sub-IFDs.
pub const TAG_SUB_IFD_OFFSET: u16 = 0x014A;
pub const TAG_EXIF_SUB_IFD_OFFSET: u16 = 0x8769;
pub const TAG_GPS_INFO_OFFSET: u16 = 0x8825;
pub const TAG_INTEROP_OFFSET: u16 = 0xA005;

// Custom-processed tags.
pub const TAG_MAKERNOTE: u16 = 0x927C;
pub const TAG_IPTC_NAA: u16 = 0x83BB;
pub const TAG_INTER_COLOR_PROFILE: u16 = 0x8773;
pub const TAG_PHOTOSHOP_SETTINGS: u16 = 0x8649;
pub const TAG_APPLICATION_NOTES: u16 = 0x02BC;
pub const TAG_PRINT_IMAGE_MATCHING_INFO: u16 = 0xC4A5;
pub const TAG_GEO_TIFF_GEO_KEYS: u16 = 0x87AF;

pub const TAG_MAKE: u16 = 0x010F;

// GPS directory.
pub const TAG_GPS_LATITUDE_REF: u16 = 0x0001;
pub const TAG_GPS_LATITUDE: u16 = 0x0002;
pub const TAG_GPS_LONGITUDE_REF: u16 = 0x0003;
pub const TAG_GPS_LONGITUDE: u16 = 0x0004;

// Olympus makernote sub-directory pointers.
pub const TAG_OLYMPUS_EQUIPMENT: u16 = 0x2010;
pub const TAG_OLYMPUS_CAMERA_SETTINGS: u16 = 0x2020;
pub const TAG_OLYMPUS_RAW_DEVELOPMENT: u16 = 0x2030;
pub const TAG_OLYMPUS_RAW_DEVELOPMENT_2: u16 = 0x2031;
pub const TAG_OLYMPUS_IMAGE_PROCESSING: u16 = 0x2040;
pub const TAG_OLYMPUS_FOCUS_INFO: u16 = 0x2050;
pub const TAG_OLYMPUS_RAW_INFO: u16 = 0x3000;
pub const TAG_OLYMPUS_MAIN_INFO: u16 = 0x4000;

// Panasonic RAW IFD0.
pub const TAG_PANASONIC_RAW_WB_INFO: u16 = 0x0011;
pub const TAG_PANASONIC_RAW_WB_INFO_2: u16 = 0x0012;
pub const TAG_PANASONIC_RAW_DISTORTION_INFO: u16 = 0x0119;
pub const TAG_PANASONIC_RAW_JPG_FROM_RAW: u16 = 0x002E;

// The vendor-shared PrintIM alias tag.
pub const TAG_VENDOR_PRINT_IM: u16 = 0x0E00;
