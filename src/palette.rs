use crate::core::{distance_squared, find_closest};
use crate::rgb;
use crate::Rgb;

/// A base palette.
///
/// A base palette is a container with exactly [`Palette::SIZE`] colors. That
/// length is an invariant of the format, not a convention: every transform
/// table entry indexes into it and every generator searches all of it. For
/// that reason there is no constructor taking fewer colors that can fail —
/// [`Palette::with_slice`] starts from the greyscale default and overwrites
/// as many entries as the caller supplies.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Palette {
    inner: [Rgb; Palette::SIZE],
}

impl Palette {
    /// The number of colors in a base palette.
    pub const SIZE: usize = 256;

    /// Create a new linear greyscale palette with entry *i* = (i,i,i).
    ///
    /// This is the format's default palette. It doubles as the fill for
    /// undersized caller-supplied palettes, which guarantees the
    /// nearest-color search always has a full 256-entry space.
    pub fn greyscale() -> Self {
        let mut inner = [Rgb::BLACK; Self::SIZE];
        for (index, entry) in inner.iter_mut().enumerate() {
            *entry = Rgb::grey(index as u8);
        }
        Self { inner }
    }

    /// Create a new palette with the given colors.
    pub const fn with_array(colors: [Rgb; Self::SIZE]) -> Self {
        Self { inner: colors }
    }

    /// Create a new palette with the given colors.
    ///
    /// If the slice has fewer than [`Palette::SIZE`] colors, the remaining
    /// entries keep their greyscale defaults. Surplus colors are ignored.
    pub fn with_slice(colors: &[Rgb]) -> Self {
        let mut palette = Self::greyscale();
        for (entry, color) in palette.inner.iter_mut().zip(colors) {
            *entry = *color;
        }
        palette
    }

    /// Find the index of the palette color closest to the given color.
    ///
    /// The distance metric is the sum of squared component differences, with
    /// ties broken towards the lowest index. A color that appears in the
    /// palette maps to its own (first) index. The search is total; it cannot
    /// fail because the palette is never empty.
    pub fn nearest(&self, color: Rgb) -> u8 {
        let index = find_closest(
            color.as_ref(),
            self.inner.iter().map(|c| c.as_ref()),
            distance_squared,
        );

        // The search space has SIZE > 0 candidates.
        index.unwrap_or(0) as u8
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::greyscale()
    }
}

impl AsRef<[Rgb]> for Palette {
    fn as_ref(&self) -> &[Rgb] {
        &self.inner
    }
}

impl std::ops::Index<u8> for Palette {
    type Output = Rgb;

    fn index(&self, index: u8) -> &Self::Output {
        &self.inner[index as usize]
    }
}

impl std::ops::IndexMut<u8> for Palette {
    fn index_mut(&mut self, index: u8) -> &mut Self::Output {
        &mut self.inner[index as usize]
    }
}

impl std::fmt::Debug for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Palette")
            .field("len", &Self::SIZE)
            .field("first", &self.inner[0])
            .field("last", &self.inner[Self::SIZE - 1])
            .finish()
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The 13 legacy text colors.
///
/// These are the default contents of the format's text palette. The values
/// are historical constants of the original data files.
pub const TEXT_COLORS: [Rgb; TextPalette::SIZE] = [
    rgb!(0xFF, 0xFF, 0xFF), // white
    rgb!(0xFF, 0x4D, 0x4D), // red
    rgb!(0x00, 0xFF, 0x00), // green
    rgb!(0x69, 0x69, 0xFF), // blue
    rgb!(0xC7, 0xB3, 0x77), // gold
    rgb!(0x69, 0x69, 0x69), // grey
    rgb!(0x00, 0x00, 0x00), // black
    rgb!(0xD0, 0xC2, 0x7D), // tan
    rgb!(0xFF, 0xA8, 0x00), // orange
    rgb!(0xFF, 0xFF, 0x64), // yellow
    rgb!(0x00, 0x80, 0x00), // dark green
    rgb!(0xAE, 0x00, 0xFF), // purple
    rgb!(0x00, 0xC8, 0x00), // medium green
];

/// A text-color palette.
///
/// A text-color palette is a container with exactly [`TextPalette::SIZE`]
/// colors, one per supported text color. Like [`Palette`], it defaults
/// undersized input instead of rejecting it, except that the fill is the
/// legacy [`TEXT_COLORS`] rather than a greyscale ramp.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct TextPalette {
    inner: [Rgb; TextPalette::SIZE],
}

impl TextPalette {
    /// The number of colors in a text palette.
    pub const SIZE: usize = 13;

    /// Create a new text palette with the given colors.
    pub const fn with_array(colors: [Rgb; Self::SIZE]) -> Self {
        Self { inner: colors }
    }

    /// Create a new text palette with the given colors, filling missing
    /// entries from [`TEXT_COLORS`].
    pub fn with_slice(colors: &[Rgb]) -> Self {
        let mut palette = Self::default();
        for (entry, color) in palette.inner.iter_mut().zip(colors) {
            *entry = *color;
        }
        palette
    }
}

impl Default for TextPalette {
    fn default() -> Self {
        Self { inner: TEXT_COLORS }
    }
}

impl AsRef<[Rgb]> for TextPalette {
    fn as_ref(&self) -> &[Rgb] {
        &self.inner
    }
}

impl std::ops::Index<u8> for TextPalette {
    type Output = Rgb;

    fn index(&self, index: u8) -> &Self::Output {
        &self.inner[index as usize]
    }
}

impl std::ops::IndexMut<u8> for TextPalette {
    fn index_mut(&mut self, index: u8) -> &mut Self::Output {
        &mut self.inner[index as usize]
    }
}

impl std::fmt::Debug for TextPalette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextPalette")
            .field("len", &Self::SIZE)
            .field("first", &self.inner[0])
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::{Palette, TextPalette};
    use crate::Rgb;

    #[test]
    fn test_greyscale_default() {
        let palette = Palette::default();
        for index in 0..=255_u8 {
            assert_eq!(palette[index], Rgb::grey(index));
        }
    }

    #[test]
    fn test_undersized_slice_keeps_default() {
        let palette = Palette::with_slice(&[Rgb::new(1, 2, 3)]);
        assert_eq!(palette[0], Rgb::new(1, 2, 3));
        assert_eq!(palette[1], Rgb::grey(1));
        assert_eq!(palette[255], Rgb::grey(255));

        let text = TextPalette::with_slice(&[Rgb::new(9, 9, 9)]);
        assert_eq!(text[0], Rgb::new(9, 9, 9));
        assert_eq!(text[1], Rgb::new(0xFF, 0x4D, 0x4D));
    }

    #[test]
    fn test_nearest_exact_match() {
        let palette = Palette::greyscale();
        for index in 0..=255_u8 {
            assert_eq!(palette.nearest(Rgb::grey(index)), index);
        }
    }

    #[test]
    fn test_nearest_duplicate_takes_lowest_index() {
        let mut palette = Palette::greyscale();
        palette[10] = Rgb::new(50, 50, 50);
        // Entries 10 and 50 now hold the same color.
        assert_eq!(palette.nearest(Rgb::new(50, 50, 50)), 10);
    }

    #[test]
    fn test_nearest_off_palette_color() {
        let palette = Palette::greyscale();
        // (30,40,50) is closest to the grey with the mean intensity 40.
        assert_eq!(palette.nearest(Rgb::new(30, 40, 50)), 40);
    }
}
