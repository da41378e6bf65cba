//! Utility module with the crate's errors.

/// A section of the binary format.
///
/// The codec processes sections strictly in the order of this enumeration's
/// variants. Errors carry the section that was being read or written so that
/// a failure in a half-megabyte stream names more than a byte offset.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Section {
    BasePalette,
    LightLevelVariations,
    InvColorVariations,
    SelectedUnitShift,
    AlphaBlend,
    AdditiveBlend,
    MultiplicativeBlend,
    HueVariations,
    RedTones,
    GreenTones,
    BlueTones,
    UnknownVariations,
    MaxComponentBlend,
    DarkenedColorShift,
    TextPalette,
    TextColorShifts,
}

impl Section {
    /// Get this section's human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BasePalette => "base palette",
            Self::LightLevelVariations => "light level variations",
            Self::InvColorVariations => "inverse color variations",
            Self::SelectedUnitShift => "selected unit shift",
            Self::AlphaBlend => "alpha blend tables",
            Self::AdditiveBlend => "additive blend tables",
            Self::MultiplicativeBlend => "multiplicative blend tables",
            Self::HueVariations => "hue variations",
            Self::RedTones => "red tones",
            Self::GreenTones => "green tones",
            Self::BlueTones => "blue tones",
            Self::UnknownVariations => "unknown variations",
            Self::MaxComponentBlend => "max component blend tables",
            Self::DarkenedColorShift => "darkened color shift",
            Self::TextPalette => "text palette",
            Self::TextColorShifts => "text color shifts",
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The kinds of codec failures.
#[derive(Debug)]
pub enum CodecErrorKind {
    /// The underlying reader or writer failed.
    Io(std::io::Error),
    /// The stream ended before the format's fixed length was reached.
    Truncated,
}

/// An error while decoding or encoding the binary format.
///
/// Both directions fail only on I/O: the format has no header, version, or
/// checksum to validate, and every byte of a transform table is a valid
/// palette index. A decode error means the returned container was never
/// observable in a partially filled state — decoding builds a fresh
/// container and only hands it out on full success.
#[derive(Debug)]
pub struct CodecError {
    section: Section,
    kind: CodecErrorKind,
}

impl CodecError {
    pub(crate) fn new(section: Section, source: std::io::Error) -> Self {
        let kind = if source.kind() == std::io::ErrorKind::UnexpectedEof {
            CodecErrorKind::Truncated
        } else {
            CodecErrorKind::Io(source)
        };

        Self { section, kind }
    }

    /// Get the section that was being processed when the error occurred.
    pub fn section(&self) -> Section {
        self.section
    }

    /// Determine whether the input ended before the format's fixed length.
    pub fn is_truncated(&self) -> bool {
        matches!(self.kind, CodecErrorKind::Truncated)
    }
}

impl From<CodecError> for std::io::Error {
    fn from(value: CodecError) -> Self {
        std::io::Error::other(value)
    }
}

impl std::fmt::Display for CodecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            CodecErrorKind::Io(_) => {
                write!(f, "could not process {}", self.section.name())
            }
            CodecErrorKind::Truncated => {
                write!(f, "input ended inside {}", self.section.name())
            }
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CodecErrorKind::Io(error) => Some(error),
            CodecErrorKind::Truncated => None,
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// An error while reading or writing a GIMP palette file.
#[derive(Debug)]
pub enum GplError {
    /// The underlying reader or writer failed.
    Io(std::io::Error),
    /// The file does not start with the `GIMP Palette` magic line.
    MissingMagic,
    /// A color row does not hold three 8-bit decimal components. The payload
    /// is the 1-based line number.
    MalformedColor(usize),
}

impl std::fmt::Display for GplError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(_) => f.write_str("could not read or write GIMP palette"),
            Self::MissingMagic => {
                f.write_str("GIMP palette should start with `GIMP Palette` but does not")
            }
            Self::MalformedColor(line) => {
                write!(f, "line {} should hold three 8-bit components", line)
            }
        }
    }
}

impl std::error::Error for GplError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(error) => Some(error),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GplError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
