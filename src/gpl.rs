//! Reading and writing GIMP palette files.
//!
//! The GIMP palette format (`.gpl`) is the interchange format for base
//! palettes: a `GIMP Palette` magic line, optional `Name:` and `Columns:`
//! headers, `#` comments, and one `R G B [name]` row of decimal components
//! per color. This module reads any palette up to 256 colors and writes the
//! full 256-entry base palette back out.

use std::io::{BufRead, Write};

use crate::error::GplError;
use crate::{Palette, Rgb};

const MAGIC: &str = "GIMP Palette";

/// A GIMP palette: an optional name and up to 256 colors in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GimpPalette {
    name: Option<String>,
    colors: Vec<Rgb>,
}

impl GimpPalette {
    /// Create a new GIMP palette with the given colors.
    pub fn new(colors: Vec<Rgb>) -> Self {
        Self { name: None, colors }
    }

    /// Create a new GIMP palette holding all colors of the given palette.
    pub fn from_palette(palette: &Palette) -> Self {
        Self::new(palette.as_ref().to_vec())
    }

    /// Set this palette's name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Get this palette's name, if the file declared one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get this palette's colors.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Read a GIMP palette from the given reader.
    ///
    /// The first line must be the `GIMP Palette` magic. Header lines and
    /// comments may appear in any order before or between color rows. A
    /// color row must start with three decimal components in `0..=255`;
    /// anything after the third component is treated as the color's name
    /// and ignored. Colors beyond the 256th are ignored as well, since the
    /// base palette cannot hold them.
    pub fn read(reader: &mut impl BufRead) -> Result<Self, GplError> {
        let mut lines = reader.lines();
        let magic = match lines.next() {
            Some(line) => line?,
            None => return Err(GplError::MissingMagic),
        };
        if magic.trim_end() != MAGIC {
            return Err(GplError::MissingMagic);
        }

        let mut palette = Self::default();

        for (number, line) in lines.enumerate() {
            let line = line?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            } else if let Some(name) = line.strip_prefix("Name:") {
                palette.name = Some(name.trim().to_string());
                continue;
            } else if line.starts_with("Columns:") {
                continue;
            }

            // Lines start counting below the magic line.
            let color = parse_color(line).ok_or(GplError::MalformedColor(number + 2))?;
            if palette.colors.len() < Palette::SIZE {
                palette.colors.push(color);
            }
        }

        Ok(palette)
    }

    /// Write this palette to the given writer in GIMP palette format.
    pub fn write(&self, writer: &mut impl Write) -> Result<(), GplError> {
        writeln!(writer, "{}", MAGIC)?;
        if let Some(name) = &self.name {
            writeln!(writer, "Name: {}", name)?;
        }
        writeln!(writer, "Columns: 16")?;

        for color in &self.colors {
            writeln!(writer, "{:3} {:3} {:3}", color.r(), color.g(), color.b())?;
        }

        Ok(())
    }
}

/// Parse the three leading decimal components of a color row.
fn parse_color(line: &str) -> Option<Rgb> {
    let mut components = line.split_whitespace();
    let r = components.next()?.parse().ok()?;
    let g = components.next()?.parse().ok()?;
    let b = components.next()?.parse().ok()?;
    Some(Rgb::new(r, g, b))
}

#[cfg(test)]
mod test {
    use super::{GimpPalette, GplError};
    use crate::{Palette, Rgb};

    #[test]
    fn test_read_rejects_missing_magic() {
        let mut input = "JASC-PAL\n0100\n".as_bytes();
        let result = GimpPalette::read(&mut input);
        assert!(matches!(result, Err(GplError::MissingMagic)));
    }

    #[test]
    fn test_read_parses_headers_comments_and_colors() {
        let mut input = "GIMP Palette\n\
            Name: unit colors\n\
            Columns: 16\n\
            # hand-picked\n\
            \n\
            255   0   0\tfire\n\
            0 255 0\n\
            \t1 2 3 trailing name with spaces\n"
            .as_bytes();

        let palette = GimpPalette::read(&mut input).unwrap();
        assert_eq!(palette.name(), Some("unit colors"));
        assert_eq!(
            palette.colors(),
            &[Rgb::new(255, 0, 0), Rgb::new(0, 255, 0), Rgb::new(1, 2, 3)]
        );
    }

    #[test]
    fn test_read_reports_malformed_row_with_line_number() {
        let mut input = "GIMP Palette\n10 20 30\n10 999 30\n".as_bytes();
        let result = GimpPalette::read(&mut input);
        assert!(matches!(result, Err(GplError::MalformedColor(3))));
    }

    #[test]
    fn test_round_trip_through_text() {
        let palette = Palette::default();
        let gimp = GimpPalette::from_palette(&palette).with_name("greys");

        let mut buffer = Vec::new();
        gimp.write(&mut buffer).unwrap();

        let restored = GimpPalette::read(&mut buffer.as_slice()).unwrap();
        assert_eq!(restored, gimp);
    }

    #[test]
    fn test_overlong_palette_is_clipped() {
        let mut text = String::from("GIMP Palette\n");
        for index in 0..300 {
            text.push_str(&format!("{0} {0} {0}\n", index % 256));
        }

        let palette = GimpPalette::read(&mut text.as_bytes()).unwrap();
        assert_eq!(palette.colors().len(), Palette::SIZE);
    }
}
