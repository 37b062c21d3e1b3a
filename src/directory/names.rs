//! Static tag-name tables, one lookup per directory family.
//!
//! Vendor tables name the tags their decoders produce plus the well-known
//! IDs of each dialect; unlisted IDs simply render as hex. The Reconyx
//! tables use the fixed-layout convention where the tag ID is the field's
//! byte offset in the makernote.

pub(crate) fn exif_tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        0x0100 => "Image Width",
        0x0101 => "Image Height",
        0x0102 => "Bits Per Sample",
        0x0103 => "Compression",
        0x0106 => "Photometric Interpretation",
        0x010E => "Image Description",
        0x010F => "Make",
        0x0110 => "Model",
        0x0111 => "Strip Offsets",
        0x0112 => "Orientation",
        0x0115 => "Samples Per Pixel",
        0x0116 => "Rows Per Strip",
        0x0117 => "Strip Byte Counts",
        0x011A => "X Resolution",
        0x011B => "Y Resolution",
        0x0128 => "Resolution Unit",
        0x0131 => "Software",
        0x0132 => "Date/Time",
        0x013B => "Artist",
        0x013E => "White Point",
        0x014A => "Sub IFD Pointer(s)",
        0x0201 => "Thumbnail Offset",
        0x0202 => "Thumbnail Length",
        0x0213 => "YCbCr Positioning",
        0x02BC => "Application Notes",
        0x8298 => "Copyright",
        0x829A => "Exposure Time",
        0x829D => "F-Number",
        0x83BB => "IPTC-NAA",
        0x8649 => "Photoshop Settings",
        0x8769 => "Exif SubIFD Pointer",
        0x8773 => "ICC Profile Bytes",
        0x87AF => "GeoTIFF Geo Keys",
        0x87B0 => "GeoTIFF Geo Double Params",
        0x87B1 => "GeoTIFF Geo ASCII Params",
        0x8822 => "Exposure Program",
        0x8825 => "GPS Info Pointer",
        0x8827 => "ISO Speed Ratings",
        0x9000 => "Exif Version",
        0x9003 => "Date/Time Original",
        0x9004 => "Date/Time Digitized",
        0x9201 => "Shutter Speed Value",
        0x9202 => "Aperture Value",
        0x9203 => "Brightness Value",
        0x9204 => "Exposure Bias Value",
        0x9205 => "Max Aperture Value",
        0x9206 => "Subject Distance",
        0x9207 => "Metering Mode",
        0x9208 => "Light Source",
        0x9209 => "Flash",
        0x920A => "Focal Length",
        0x927C => "Makernote",
        0x9286 => "User Comment",
        0xA001 => "Color Space",
        0xA002 => "Exif Image Width",
        0xA003 => "Exif Image Height",
        0xA005 => "Interoperability Pointer",
        0xA20E => "Focal Plane X Resolution",
        0xA20F => "Focal Plane Y Resolution",
        0xA210 => "Focal Plane Resolution Unit",
        0xA300 => "File Source",
        0xA301 => "Scene Type",
        0xA401 => "Custom Rendered",
        0xA402 => "Exposure Mode",
        0xA403 => "White Balance Mode",
        0xA404 => "Digital Zoom Ratio",
        0xA405 => "Focal Length 35",
        0xA406 => "Scene Capture Type",
        0xA420 => "Unique Image ID",
        0xA433 => "Lens Make",
        0xA434 => "Lens Model",
        0xC4A5 => "Print Image Matching (PIM) Info",
        _ => return None,
    })
}

pub(crate) fn gps_tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        0x0000 => "GPS Version ID",
        0x0001 => "GPS Latitude Ref",
        0x0002 => "GPS Latitude",
        0x0003 => "GPS Longitude Ref",
        0x0004 => "GPS Longitude",
        0x0005 => "GPS Altitude Ref",
        0x0006 => "GPS Altitude",
        0x0007 => "GPS Time-Stamp",
        0x0008 => "GPS Satellites",
        0x0009 => "GPS Status",
        0x000A => "GPS Measure Mode",
        0x000B => "GPS DOP",
        0x000C => "GPS Speed Ref",
        0x000D => "GPS Speed",
        0x000E => "GPS Track Ref",
        0x000F => "GPS Track",
        0x0010 => "GPS Img Direction Ref",
        0x0011 => "GPS Img Direction",
        0x0012 => "GPS Map Datum",
        0x0013 => "GPS Dest Latitude Ref",
        0x0014 => "GPS Dest Latitude",
        0x0015 => "GPS Dest Longitude Ref",
        0x0016 => "GPS Dest Longitude",
        0x0017 => "GPS Dest Bearing Ref",
        0x0018 => "GPS Dest Bearing",
        0x0019 => "GPS Dest Distance Ref",
        0x001A => "GPS Dest Distance",
        0x001B => "GPS Processing Method",
        0x001C => "GPS Area Information",
        0x001D => "GPS Date Stamp",
        0x001E => "GPS Differential",
        _ => return None,
    })
}

pub(crate) fn interop_tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        0x0001 => "Interoperability Index",
        0x0002 => "Interoperability Version",
        0x1001 => "Related Image Width",
        0x1002 => "Related Image Height",
        _ => return None,
    })
}

pub(crate) fn panasonic_raw_ifd0_tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        0x0001 => "Panasonic Raw Version",
        0x0002 => "Sensor Width",
        0x0003 => "Sensor Height",
        0x0004 => "Sensor Top Border",
        0x0005 => "Sensor Left Border",
        0x0006 => "Sensor Bottom Border",
        0x0007 => "Sensor Right Border",
        0x0011 => "WB Info",
        0x0012 => "WB Info 2",
        0x0017 => "ISO",
        0x002E => "JPG From RAW",
        0x010F => "Make",
        0x0110 => "Model",
        0x0112 => "Orientation",
        0x0119 => "Distortion Info",
        _ => return None,
    })
}

pub(crate) fn panasonic_raw_wb_info_tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        0 => "Num WB Entries",
        1 => "WB Type 1",
        2 => "WB RB Levels 1",
        4 => "WB Type 2",
        5 => "WB RB Levels 2",
        7 => "WB Type 3",
        8 => "WB RB Levels 3",
        10 => "WB Type 4",
        11 => "WB RB Levels 4",
        13 => "WB Type 5",
        14 => "WB RB Levels 5",
        16 => "WB Type 6",
        17 => "WB RB Levels 6",
        19 => "WB Type 7",
        20 => "WB RB Levels 7",
        _ => return None,
    })
}

pub(crate) fn panasonic_raw_wb_info2_tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        0 => "Num WB Entries",
        1 => "WB Type 1",
        2 => "WB RGB Levels 1",
        5 => "WB Type 2",
        6 => "WB RGB Levels 2",
        9 => "WB Type 3",
        10 => "WB RGB Levels 3",
        13 => "WB Type 4",
        14 => "WB RGB Levels 4",
        17 => "WB Type 5",
        18 => "WB RGB Levels 5",
        21 => "WB Type 6",
        22 => "WB RGB Levels 6",
        25 => "WB Type 7",
        26 => "WB RGB Levels 7",
        _ => return None,
    })
}

pub(crate) fn panasonic_raw_distortion_tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        2 => "Distortion Param 2",
        4 => "Distortion Param 4",
        5 => "Distortion Scale",
        7 => "Distortion Correction",
        8 => "Distortion Param 8",
        9 => "Distortion Param 9",
        11 => "Distortion Param 11",
        12 => "Distortion N",
        _ => return None,
    })
}

pub(crate) fn olympus_tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        0x0200 => "Special Mode",
        0x0201 => "JPEG Quality",
        0x0202 => "Macro",
        0x0204 => "Digital Zoom",
        0x0207 => "Firmware Version",
        0x0404 => "Serial Number",
        0x0E00 => "Print Image Matching (PIM) Info",
        0x2010 => "Equipment",
        0x2020 => "Camera Settings",
        0x2030 => "Raw Development",
        0x2031 => "Raw Development 2",
        0x2040 => "Image Processing",
        0x2050 => "Focus Info",
        0x3000 => "Raw Info",
        0x4000 => "Main Info",
        _ => return None,
    })
}

pub(crate) fn olympus_equipment_tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        0x0000 => "Equipment Version",
        0x0100 => "Camera Type 2",
        0x0101 => "Serial Number",
        0x0201 => "Lens Type",
        0x0202 => "Lens Serial Number",
        0x0204 => "Lens Firmware Version",
        0x0205 => "Max Aperture At Min Focal",
        0x0206 => "Max Aperture At Max Focal",
        0x0207 => "Min Focal Length",
        0x0208 => "Max Focal Length",
        _ => return None,
    })
}

pub(crate) fn olympus_camera_settings_tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        0x0000 => "Camera Settings Version",
        0x0100 => "Preview Image Valid",
        0x0101 => "Preview Image Start",
        0x0102 => "Preview Image Length",
        0x0200 => "Exposure Mode",
        0x0202 => "Metering Mode",
        0x0300 => "Macro Mode",
        0x0301 => "Focus Mode",
        0x0501 => "White Balance Temperature",
        _ => return None,
    })
}

pub(crate) fn olympus_focus_info_tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        0x0000 => "Focus Info Version",
        0x0209 => "Auto Focus",
        0x0305 => "Focus Distance",
        _ => return None,
    })
}

pub(crate) fn nikon_type1_tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        0x0003 => "Quality",
        0x0004 => "Color Mode",
        0x0005 => "Image Adjustment",
        0x0006 => "CCD Sensitivity",
        0x0007 => "White Balance",
        0x0008 => "Focus",
        0x000A => "Digital Zoom",
        0x000B => "Fisheye Converter",
        _ => return None,
    })
}

pub(crate) fn nikon_type2_tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        0x0001 => "Firmware Version",
        0x0002 => "ISO",
        0x0004 => "Quality & File Format",
        0x0005 => "White Balance",
        0x0006 => "Sharpening",
        0x0007 => "AF Type",
        0x0084 => "Lens",
        0x0088 => "AF Info",
        0x0093 => "NEF Compression",
        0x0E00 => "Print Image Matching (PIM) Info",
        _ => return None,
    })
}

pub(crate) fn canon_tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        0x0001 => "Camera Settings",
        0x0002 => "Focal Length",
        0x0004 => "Shot Info",
        0x0006 => "Image Type",
        0x0007 => "Firmware Version",
        0x0008 => "Image Number",
        0x0009 => "Owner Name",
        0x000C => "Camera Serial Number",
        0x0010 => "Canon Model ID",
        _ => return None,
    })
}

pub(crate) fn sony_type1_tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        0x0102 => "Quality",
        0x0104 => "Flash Exposure Compensation",
        0x0112 => "White Balance",
        0x0E00 => "Print Image Matching (PIM) Info",
        0xB000 => "File Format",
        0xB026 => "Image Stabilisation",
        0xB040 => "Macro",
        0xB047 => "Quality 2",
        _ => return None,
    })
}

pub(crate) fn sony_type6_tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        0x0513 => "Makernote Thumb Offset",
        0x0514 => "Makernote Thumb Length",
        0x2000 => "Makernote Thumb Version",
        _ => return None,
    })
}

pub(crate) fn sigma_tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        0x0002 => "Serial Number",
        0x0003 => "Drive Mode",
        0x0004 => "Resolution Mode",
        0x0005 => "Auto Focus Mode",
        0x0008 => "Exposure Mode",
        0x0009 => "Metering Mode",
        0x000A => "Lens Focal Range",
        _ => return None,
    })
}

pub(crate) fn casio_type1_tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        0x0001 => "Recording Mode",
        0x0002 => "Quality",
        0x0003 => "Focusing Mode",
        0x0004 => "Flash Mode",
        0x0005 => "Flash Intensity",
        0x0006 => "Object Distance",
        0x0007 => "White Balance",
        0x0014 => "CCD Sensitivity",
        _ => return None,
    })
}

pub(crate) fn casio_type2_tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        0x0002 => "Thumbnail Dimensions",
        0x0003 => "Thumbnail Size",
        0x0004 => "Thumbnail Offset",
        0x0008 => "Quality Mode",
        0x0009 => "Image Size",
        0x000D => "Focus Mode",
        0x0014 => "ISO Sensitivity",
        0x0019 => "White Balance",
        0x0E00 => "Print Image Matching (PIM) Info",
        _ => return None,
    })
}

pub(crate) fn fujifilm_tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        0x0000 => "Makernote Version",
        0x1000 => "Quality",
        0x1001 => "Sharpness",
        0x1002 => "White Balance",
        0x1003 => "Color Saturation",
        0x1010 => "Flash Mode",
        0x1021 => "Focus Mode",
        0x1030 => "Slow Sync",
        0x1031 => "Picture Mode",
        _ => return None,
    })
}

pub(crate) fn kyocera_tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        0x0001 => "Proprietary Thumbnail Format Data",
        0x0E00 => "Print Image Matching (PIM) Info",
        _ => return None,
    })
}

pub(crate) fn leica_tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        0x0300 => "Quality",
        0x0302 => "User Profile",
        0x0303 => "Serial Number",
        0x0304 => "White Balance",
        0x0310 => "Lens Type",
        0x0311 => "External Sensor Brightness Value",
        0x0312 => "Measured LV",
        _ => return None,
    })
}

pub(crate) fn panasonic_tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        0x0001 => "Quality Mode",
        0x0002 => "Firmware Version",
        0x0003 => "White Balance",
        0x0007 => "Focus Mode",
        0x001A => "Image Stabilisation",
        0x001C => "Macro Mode",
        0x001F => "Record Mode",
        0x0051 => "Lens Type",
        0x0E00 => "Print Image Matching (PIM) Info",
        _ => return None,
    })
}

pub(crate) fn pentax_tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        0x0001 => "Capture Mode",
        0x0002 => "Quality Level",
        0x0003 => "Focus Mode",
        0x0004 => "Flash Mode",
        0x0007 => "White Balance",
        0x000A => "Digital Zoom",
        0x000B => "Sharpness",
        0x000C => "Contrast",
        0x000D => "Saturation",
        0x0014 => "ISO Speed",
        0x0017 => "Colour",
        0x0E00 => "Print Image Matching (PIM) Info",
        0x1000 => "Time Zone",
        _ => return None,
    })
}

pub(crate) fn sanyo_tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        0x0100 => "Sanyo Thumbnail",
        0x0200 => "Special Mode",
        0x0201 => "Sanyo Quality",
        0x0202 => "Macro",
        0x0204 => "Digital Zoom",
        0x0E00 => "Print Image Matching (PIM) Info",
        _ => return None,
    })
}

pub(crate) fn ricoh_tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        0x0001 => "Makernote Data Type",
        0x0002 => "Version",
        0x0E00 => "Print Image Matching (PIM) Info",
        0x2001 => "Ricoh Camera Info Makernote Sub-IFD",
        _ => return None,
    })
}

pub(crate) fn samsung_tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        0x0001 => "Makernote Version",
        0x0021 => "Picture Wizard",
        0x0030 => "Local Location Name",
        0x0043 => "Camera Temperature",
        0x0100 => "Face Detect",
        0xA010 => "Sensor Areas",
        0xA013 => "Exposure Bias Value",
        _ => return None,
    })
}

pub(crate) fn dji_tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        0x0001 => "Make",
        0x0003 => "Speed X",
        0x0004 => "Speed Y",
        0x0005 => "Speed Z",
        0x0006 => "Aircraft Pitch",
        0x0007 => "Aircraft Yaw",
        0x0008 => "Aircraft Roll",
        0x0009 => "Camera Pitch",
        0x000A => "Camera Yaw",
        0x000B => "Camera Roll",
        _ => return None,
    })
}

pub(crate) fn flir_tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        0x0001 => "Image Temperature Max",
        0x0002 => "Image Temperature Min",
        0x0003 => "Emissivity",
        0x0004 => "Unknown Temperature",
        0x0005 => "Camera Temperature Range Max",
        0x0006 => "Camera Temperature Range Min",
        _ => return None,
    })
}

pub(crate) fn apple_tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        0x0001 => "Makernote Version",
        0x0003 => "Run Time",
        0x0008 => "Acceleration Vector",
        0x000A => "HDR Image Type",
        0x000B => "Burst UUID",
        _ => return None,
    })
}

pub(crate) fn kodak_tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        0 => "Kodak Model",
        9 => "Quality",
        10 => "Burst Mode",
        12 => "Image Width",
        14 => "Image Height",
        16 => "Year Created",
        18 => "Month/Day Created",
        20 => "Time Created",
        24 => "Burst Mode 2",
        27 => "Shutter Speed",
        28 => "Metering Mode",
        29 => "Sequence Number",
        30 => "F Number",
        32 => "Exposure Time",
        36 => "Exposure Compensation",
        56 => "Focus Mode",
        64 => "White Balance",
        92 => "Flash Mode",
        93 => "Flash Fired",
        94 => "ISO Setting",
        96 => "ISO",
        98 => "Total Zoom",
        100 => "Date/Time Stamp",
        102 => "Color Mode",
        104 => "Digital Zoom",
        107 => "Sharpness",
        _ => return None,
    })
}

pub(crate) fn reconyx_hyperfire_tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        0 => "Makernote Version",
        2 => "Firmware Version",
        12 => "Trigger Mode",
        14 => "Sequence",
        18 => "Event Number",
        22 => "Date/Time Original",
        36 => "Moon Phase",
        38 => "Ambient Temperature Fahrenheit",
        40 => "Ambient Temperature",
        42 => "Serial Number",
        72 => "Contrast",
        74 => "Brightness",
        76 => "Sharpness",
        78 => "Saturation",
        80 => "Infrared Illuminator",
        82 => "Motion Sensitivity",
        84 => "Battery Voltage",
        86 => "User Label",
        _ => return None,
    })
}

pub(crate) fn reconyx_hyperfire2_tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        10 => "Makernote Version",
        12 => "Firmware Version",
        22 => "Trigger Mode",
        24 => "Sequence",
        28 => "Event Number",
        32 => "Date/Time Original",
        44 => "Day of Week",
        46 => "Moon Phase",
        48 => "Ambient Temperature Fahrenheit",
        50 => "Ambient Temperature",
        52 => "Contrast",
        54 => "Brightness",
        56 => "Sharpness",
        58 => "Saturation",
        60 => "Flash",
        62 => "Ambient Infrared",
        64 => "Ambient Light",
        66 => "Motion Sensitivity",
        68 => "Battery Voltage",
        70 => "Battery Voltage Avg",
        72 => "Battery Type",
        74 => "User Label",
        96 => "Serial Number",
        _ => return None,
    })
}

pub(crate) fn reconyx_ultrafire_tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        0 => "Label",
        9 => "Makernote ID",
        13 => "Makernote Size",
        17 => "Makernote Public ID",
        21 => "Makernote Public Size",
        23 => "Camera Version",
        30 => "Uib Version",
        37 => "Btl Version",
        44 => "Pex Version",
        51 => "Event Type",
        52 => "Sequence",
        54 => "Event Number",
        58 => "Date/Time Original",
        65 => "Day of Week",
        66 => "Moon Phase",
        67 => "Ambient Temperature Fahrenheit",
        69 => "Ambient Temperature",
        71 => "Flash",
        72 => "Battery Voltage",
        74 => "Serial Number",
        88 => "User Label",
        _ => return None,
    })
}

pub(crate) fn printim_tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        0x0000 => "PrintIM Version",
        _ => return None,
    })
}

pub(crate) fn geotiff_key_name(key: u16) -> Option<&'static str> {
    Some(match key {
        1024 => "Model Type",
        1025 => "Raster Type",
        1026 => "Citation",
        2048 => "Geographic Type",
        2049 => "Geographic Citation",
        2050 => "Geodetic Datum",
        2052 => "Geographic Linear Units",
        2054 => "Geographic Angular Units",
        2056 => "Geographic Ellipsoid",
        2057 => "Semi-Major Axis",
        2058 => "Semi-Minor Axis",
        2059 => "Inverse Flattening",
        3072 => "Projected Coordinate System Type",
        3073 => "Projected Coordinate System Citation",
        3074 => "Projection",
        3075 => "Projected Coordinate Transform",
        3076 => "Projection Linear Units",
        4096 => "Vertical Coordinate System Type",
        4097 => "Vertical Citation",
        4098 => "Vertical Datum",
        4099 => "Vertical Units",
        _ => return None,
    })
}
