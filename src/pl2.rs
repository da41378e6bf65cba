use std::cell::OnceCell;

use crate::{Float, Palette, Rgb, TextPalette, Transform};

/// A PL2 palette container.
///
/// A container owns one base [`Palette`], one [`TextPalette`], and the
/// format's complete, fixed catalogue of transform tables. It is populated
/// either by [`Pl2::decode`](Pl2::decode) or by
/// [`Pl2::regenerate`](Pl2::regenerate); a freshly created container holds
/// the default palettes and zeroed tables, so encoding is defined in every
/// state.
///
/// The container also owns a lazily computed table with the HSL coordinates
/// of every base palette color. All hue and lightness generators read that
/// table instead of reconverting colors thousands of times. Replacing the
/// base palette through [`Pl2::set_base_palette`] invalidates it. The cache
/// does not take part in equality.
#[derive(Clone, Debug)]
pub struct Pl2 {
    pub base_palette: Palette,

    pub light_level_variations: [Transform; Pl2::LIGHT_LEVELS],
    pub inv_color_variations: [Transform; Pl2::INV_COLOR_LEVELS],
    pub selected_unit_shift: Transform,
    pub alpha_blend: [[Transform; Palette::SIZE]; Pl2::ALPHA_BLEND_LEVELS],
    pub additive_blend: [Transform; Palette::SIZE],
    pub multiplicative_blend: [Transform; Palette::SIZE],
    pub hue_variations: [Transform; Pl2::HUE_VARIATIONS],
    pub red_tones: Transform,
    pub green_tones: Transform,
    pub blue_tones: Transform,
    pub unknown_variations: [Transform; Pl2::UNKNOWN_VARIATIONS],
    pub max_component_blend: [Transform; Palette::SIZE],
    pub darkened_color_shift: Transform,

    pub text_palette: TextPalette,
    pub text_color_shifts: [Transform; TextPalette::SIZE],

    hsl: OnceCell<Box<[[Float; 3]; Palette::SIZE]>>,
}

impl Pl2 {
    /// The number of light level variation tables.
    pub const LIGHT_LEVELS: usize = 32;
    /// The number of inverse color variation tables.
    pub const INV_COLOR_LEVELS: usize = 16;
    /// The number of coarse alpha blend levels.
    pub const ALPHA_BLEND_LEVELS: usize = 3;
    /// The number of hue variation tables across all seven sub-families.
    pub const HUE_VARIATIONS: usize = 111;
    /// The number of reserved tables with no known generation formula.
    pub const UNKNOWN_VARIATIONS: usize = 14;

    /// The total number of transform tables in the format.
    pub const TRANSFORMS: usize = Self::LIGHT_LEVELS
        + Self::INV_COLOR_LEVELS
        + 1 // selected unit shift
        + Self::ALPHA_BLEND_LEVELS * Palette::SIZE
        + Palette::SIZE // additive blend
        + Palette::SIZE // multiplicative blend
        + Self::HUE_VARIATIONS
        + 3 // red/green/blue tones
        + Self::UNKNOWN_VARIATIONS
        + Palette::SIZE // max component blend
        + 1 // darkened color shift
        + TextPalette::SIZE;

    /// The exact number of bytes of the binary format.
    ///
    /// The format has no header and no length fields, so the size follows
    /// from the per-section counts alone: 4 bytes per base palette entry,
    /// 256 bytes per transform table, and 3 bytes per text palette entry.
    pub const BYTE_SIZE: usize = 4 * Palette::SIZE
        + Transform::SIZE * Self::TRANSFORMS
        + 3 * TextPalette::SIZE;

    /// Create a new container with default palettes and zeroed tables.
    ///
    /// The base palette defaults to the linear greyscale ramp and the text
    /// palette to the legacy [`TEXT_COLORS`](crate::TEXT_COLORS).
    pub fn new() -> Self {
        Self {
            base_palette: Palette::greyscale(),
            light_level_variations: [Transform::new(); Self::LIGHT_LEVELS],
            inv_color_variations: [Transform::new(); Self::INV_COLOR_LEVELS],
            selected_unit_shift: Transform::new(),
            alpha_blend: [[Transform::new(); Palette::SIZE]; Self::ALPHA_BLEND_LEVELS],
            additive_blend: [Transform::new(); Palette::SIZE],
            multiplicative_blend: [Transform::new(); Palette::SIZE],
            hue_variations: [Transform::new(); Self::HUE_VARIATIONS],
            red_tones: Transform::new(),
            green_tones: Transform::new(),
            blue_tones: Transform::new(),
            unknown_variations: [Transform::new(); Self::UNKNOWN_VARIATIONS],
            max_component_blend: [Transform::new(); Palette::SIZE],
            darkened_color_shift: Transform::new(),
            text_palette: TextPalette::default(),
            text_color_shifts: [Transform::new(); TextPalette::SIZE],
            hsl: OnceCell::new(),
        }
    }

    /// Create a new container by generating every table from the colors.
    ///
    /// The colors fill the base palette per [`Palette::with_slice`]; an
    /// empty slice yields the greyscale default. This is the one-call path
    /// for turning an imported palette into a complete container.
    pub fn with_palette(colors: &[Rgb]) -> Self {
        let mut pl2 = Self::new();
        pl2.set_base_palette(colors);
        pl2.regenerate();
        pl2
    }

    /// Replace the base palette.
    ///
    /// Undersized input keeps greyscale defaults for the remaining entries.
    /// Replacing the palette invalidates the cached HSL coordinates; it
    /// does not touch any table, so callers that want tables consistent
    /// with the new palette must call [`Pl2::regenerate`] afterwards.
    pub fn set_base_palette(&mut self, colors: &[Rgb]) {
        self.base_palette = Palette::with_slice(colors);
        self.hsl.take();
    }

    /// Replace the text palette.
    ///
    /// Undersized input keeps the legacy defaults for remaining entries.
    pub fn set_text_palette(&mut self, colors: &[Rgb]) {
        self.text_palette = TextPalette::with_slice(colors);
    }

    /// Access the HSL coordinates of every base palette color.
    ///
    /// The table is computed on first access and reused until the base
    /// palette changes.
    pub(crate) fn hsl(&self) -> &[[Float; 3]; Palette::SIZE] {
        self.hsl.get_or_init(|| {
            let mut table = Box::new([[0.0; 3]; Palette::SIZE]);
            for (coordinates, color) in table.iter_mut().zip(self.base_palette.as_ref()) {
                *coordinates = color.to_hsl();
            }
            table
        })
    }
}

impl Default for Pl2 {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Pl2 {
    fn eq(&self, other: &Self) -> bool {
        // The HSL cache is derived state and stays out of the comparison.
        self.base_palette == other.base_palette
            && self.light_level_variations == other.light_level_variations
            && self.inv_color_variations == other.inv_color_variations
            && self.selected_unit_shift == other.selected_unit_shift
            && self.alpha_blend == other.alpha_blend
            && self.additive_blend == other.additive_blend
            && self.multiplicative_blend == other.multiplicative_blend
            && self.hue_variations == other.hue_variations
            && self.red_tones == other.red_tones
            && self.green_tones == other.green_tones
            && self.blue_tones == other.blue_tones
            && self.unknown_variations == other.unknown_variations
            && self.max_component_blend == other.max_component_blend
            && self.darkened_color_shift == other.darkened_color_shift
            && self.text_palette == other.text_palette
            && self.text_color_shifts == other.text_color_shifts
    }
}

impl Eq for Pl2 {}

#[cfg(test)]
mod test {
    use super::Pl2;
    use crate::Rgb;

    #[test]
    fn test_byte_size() {
        assert_eq!(Pl2::BYTE_SIZE, 443_175);
    }

    #[test]
    fn test_cache_invalidation() {
        let mut pl2 = Pl2::new();
        assert_eq!(pl2.hsl()[255], [0.0, 0.0, 1.0]);

        pl2.set_base_palette(&[Rgb::BLACK; 256]);
        assert_eq!(pl2.hsl()[255], [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_equality_ignores_cache() {
        let pl2 = Pl2::new();
        let other = Pl2::new();
        pl2.hsl();
        assert_eq!(pl2, other);
    }
}
