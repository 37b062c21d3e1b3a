//! TIFF data formats and dialect constants.

/// The TIFF dialect being walked, as decided by the handler from the
/// header marker. BigTIFF widens entry counts, component counts, and
/// offsets to 64 bits and the inline value field to 8 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiffStandard {
    Tiff,
    BigTiff,
}

impl TiffStandard {
    /// Size of one IFD entry in bytes.
    pub(crate) fn entry_size(self) -> usize {
        match self {
            TiffStandard::Tiff => 12,
            TiffStandard::BigTiff => 20,
        }
    }

    /// Size of the entry-count field that opens an IFD.
    pub(crate) fn count_size(self) -> usize {
        match self {
            TiffStandard::Tiff => 2,
            TiffStandard::BigTiff => 8,
        }
    }

    /// Bytes available in the inline value field of an entry.
    pub(crate) fn inline_capacity(self) -> u64 {
        match self {
            TiffStandard::Tiff => 4,
            TiffStandard::BigTiff => 8,
        }
    }

    /// Offset of the inline value field within an entry.
    pub(crate) fn value_field_offset(self) -> usize {
        match self {
            TiffStandard::Tiff => 8,
            TiffStandard::BigTiff => 12,
        }
    }
}

/// TIFF entry data formats.
///
/// Code 13 (the IFD-pointer/undefined hybrid some makernotes use) and
/// code 0 are deliberately absent: the handler prices those via its
/// custom-format hook and the walker preserves them as raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiffFormat {
    Byte,
    Ascii,
    Short,
    Long,
    Rational,
    SByte,
    Undefined,
    SShort,
    SLong,
    SRational,
    Float,
    Double,
    /// BigTIFF 64-bit unsigned
    Long8,
    /// BigTIFF 64-bit signed
    SLong8,
    /// BigTIFF 64-bit IFD pointer
    Ifd8,
}

impl TiffFormat {
    pub fn from_code(code: u16) -> Option<Self> {
        Some(match code {
            1 => TiffFormat::Byte,
            2 => TiffFormat::Ascii,
            3 => TiffFormat::Short,
            4 => TiffFormat::Long,
            5 => TiffFormat::Rational,
            6 => TiffFormat::SByte,
            7 => TiffFormat::Undefined,
            8 => TiffFormat::SShort,
            9 => TiffFormat::SLong,
            10 => TiffFormat::SRational,
            11 => TiffFormat::Float,
            12 => TiffFormat::Double,
            16 => TiffFormat::Long8,
            17 => TiffFormat::SLong8,
            18 => TiffFormat::Ifd8,
            _ => return None,
        })
    }

    /// Bytes per component.
    pub fn component_size(self) -> u64 {
        match self {
            TiffFormat::Byte | TiffFormat::Ascii | TiffFormat::SByte | TiffFormat::Undefined => 1,
            TiffFormat::Short | TiffFormat::SShort => 2,
            TiffFormat::Long | TiffFormat::SLong | TiffFormat::Float => 4,
            TiffFormat::Rational
            | TiffFormat::SRational
            | TiffFormat::Double
            | TiffFormat::Long8
            | TiffFormat::SLong8
            | TiffFormat::Ifd8 => 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_table_round_trip() {
        assert_eq!(TiffFormat::from_code(1), Some(TiffFormat::Byte));
        assert_eq!(TiffFormat::from_code(10), Some(TiffFormat::SRational));
        assert_eq!(TiffFormat::from_code(16), Some(TiffFormat::Long8));
        // 0 and 13 price through the handler's custom-format hook
        assert_eq!(TiffFormat::from_code(0), None);
        assert_eq!(TiffFormat::from_code(13), None);
        assert_eq!(TiffFormat::from_code(99), None);
    }

    #[test]
    fn component_sizes() {
        assert_eq!(TiffFormat::Ascii.component_size(), 1);
        assert_eq!(TiffFormat::Short.component_size(), 2);
        assert_eq!(TiffFormat::Float.component_size(), 4);
        assert_eq!(TiffFormat::Rational.component_size(), 8);
    }

    #[test]
    fn bigtiff_widens_the_layout() {
        assert_eq!(TiffStandard::Tiff.entry_size(), 12);
        assert_eq!(TiffStandard::BigTiff.entry_size(), 20);
        assert_eq!(TiffStandard::BigTiff.inline_capacity(), 8);
    }
}
