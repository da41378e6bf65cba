//! The generation engine for the PL2 format.
//!
//! Every table the format stores, except the reserved family, derives
//! deterministically from the base palette (and, for the text shifts, the
//! text palette): a formula produces a candidate color for every source
//! index — or every source/destination pair for the blend grids — and the
//! candidate quantizes back to the nearest base palette index. The formulas
//! are total over the 8-bit domain; wherever one could overflow, the result
//! saturates at 0 or 255.

use std::collections::HashMap;

use crate::{Float, Palette, Pl2, Rgb, TextPalette, Transform};

const HUE_STEPS: usize = 24;
const DEGREES_PER_STEP: Float = 15.0;
const MAX_DEGREES: Float = 360.0;

/// A memoizing nearest-color searcher.
///
/// A single generation pass quantizes hundreds of thousands of candidate
/// colors, most of them duplicates — blend grids collapse onto far fewer
/// distinct colors than pairs. Since the nearest index depends only on the
/// candidate and the palette, one memo table serves every generator family.
struct Quantizer<'a> {
    palette: &'a Palette,
    memo: HashMap<Rgb, u8>,
}

impl<'a> Quantizer<'a> {
    fn new(palette: &'a Palette) -> Self {
        Self {
            palette,
            memo: HashMap::new(),
        }
    }

    fn index(&mut self, color: Rgb) -> u8 {
        *self
            .memo
            .entry(color)
            .or_insert_with(|| self.palette.nearest(color))
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Advance the hue by the given number of 15° steps, wrapping past 360°.
fn rotate(hue: Float, step: usize) -> Float {
    let mut hue = hue + step as Float * DEGREES_PER_STEP;
    while hue > MAX_DEGREES {
        hue -= MAX_DEGREES;
    }
    hue
}

/// Combine two colors component-wise with the given blend function.
fn blend(a: Rgb, b: Rgb, mut f: impl FnMut(u8, u8) -> u8) -> Rgb {
    Rgb::new(f(a.r(), b.r()), f(a.g(), b.g()), f(a.b(), b.b()))
}

/// The blend ratio for a coarse alpha level. Levels outside `0..=3` fall
/// back to level 0.
fn blend_ratio(level: usize) -> Float {
    let level = if level > 3 { 0 } else { level };
    0.25 * (level + 1) as Float
}

/// Generate one table per step by mapping every palette component through
/// the given formula and quantizing the result.
fn component_tables<const N: usize>(
    palette: &Palette,
    quantizer: &mut Quantizer,
    f: impl Fn(usize, u8) -> u8,
) -> [Transform; N] {
    let mut tables = [Transform::new(); N];
    for (step, table) in tables.iter_mut().enumerate() {
        for index in 0..=255_u8 {
            let color = palette[index].map(|c| f(step, c));
            table[index] = quantizer.index(color);
        }
    }
    tables
}

fn light_level_tables<const N: usize>(
    palette: &Palette,
    quantizer: &mut Quantizer,
) -> [Transform; N] {
    component_tables(palette, quantizer, |step, c| {
        (((step as u32 + 1) * c as u32) >> 5).min(255) as u8
    })
}

fn inv_color_tables<const N: usize>(
    palette: &Palette,
    quantizer: &mut Quantizer,
) -> [Transform; N] {
    component_tables(palette, quantizer, |step, c| {
        ((((step as u32 + 1) * (255 - c as u32)) >> 4) + c as u32).min(255) as u8
    })
}

/// Generate the selected unit shift: lightness raised by 0.2, saturating at
/// 1.0, except that a lightness of exactly zero stays zero.
fn selected_unit_table(
    hsl: &[[Float; 3]; Palette::SIZE],
    quantizer: &mut Quantizer,
) -> Transform {
    let mut table = Transform::new();
    for index in 0..=255_u8 {
        let [hue, saturation, mut lightness] = hsl[index as usize];
        if lightness != 0.0 {
            lightness = (lightness + 0.2).min(1.0);
        }
        table[index] = quantizer.index(Rgb::from_hsl([hue, saturation, lightness]));
    }
    table
}

fn alpha_blend_tables(
    palette: &Palette,
    quantizer: &mut Quantizer,
) -> [[Transform; Palette::SIZE]; Pl2::ALPHA_BLEND_LEVELS] {
    let mut groups = [[Transform::new(); Palette::SIZE]; Pl2::ALPHA_BLEND_LEVELS];

    for (level, tables) in groups.iter_mut().enumerate() {
        let ratio = blend_ratio(level);
        let inverse = 1.0 - ratio;

        for src in 0..=255_u8 {
            for dst in 0..=255_u8 {
                let color = blend(palette[src], palette[dst], |s, d| {
                    // Both terms truncate before the sum, which therefore
                    // cannot exceed 255.
                    (ratio * s as Float) as u8 + (inverse * d as Float) as u8
                });
                tables[src as usize][dst] = quantizer.index(color);
            }
        }
    }

    groups
}

fn additive_blend_tables(
    palette: &Palette,
    quantizer: &mut Quantizer,
) -> [Transform; Palette::SIZE] {
    let mut tables = [Transform::new(); Palette::SIZE];
    for src in 0..=255_u8 {
        for dst in 0..=255_u8 {
            let color = blend(palette[src], palette[dst], |s, d| {
                (s as u16 + d as u16).min(255) as u8
            });
            tables[src as usize][dst] = quantizer.index(color);
        }
    }
    tables
}

fn multiplicative_blend_tables(
    palette: &Palette,
    quantizer: &mut Quantizer,
) -> [Transform; Palette::SIZE] {
    let mut tables = [Transform::new(); Palette::SIZE];
    for src in 0..=255_u8 {
        for dst in 0..=255_u8 {
            let color = blend(palette[src], palette[dst], |s, d| {
                ((s as u32 * d as u32) / 255) as u8
            });
            tables[src as usize][dst] = quantizer.index(color);
        }
    }
    tables
}

/// Generate the 111 hue variation tables.
///
/// The family layout is fixed by the format: three runs of 24 rotation
/// tables (plain, darkened at half saturation, brightened at half
/// saturation), the greyscale and brightened greyscale tables, 24 rotation
/// tables that hold colors within ±45° of red in place, one blank slot, and
/// 12 fully saturated fixed-hue tables at 30° increments.
fn hue_variation_tables(
    hsl: &[[Float; 3]; Palette::SIZE],
    quantizer: &mut Quantizer,
) -> [Transform; Pl2::HUE_VARIATIONS] {
    let mut tables = [Transform::new(); Pl2::HUE_VARIATIONS];
    let mut cursor = 0;

    for step in 0..HUE_STEPS {
        let table = &mut tables[cursor];
        for index in 0..=255_u8 {
            let [hue, saturation, lightness] = hsl[index as usize];
            table[index] = quantizer.index(Rgb::from_hsl([
                rotate(hue, step),
                saturation,
                lightness,
            ]));
        }
        cursor += 1;
    }

    for step in 0..HUE_STEPS {
        let table = &mut tables[cursor];
        for index in 0..=255_u8 {
            let [hue, _, lightness] = hsl[index as usize];
            table[index] = quantizer.index(Rgb::from_hsl([
                rotate(hue, step),
                0.5,
                (lightness - 0.1).max(0.0),
            ]));
        }
        cursor += 1;
    }

    for step in 0..HUE_STEPS {
        let table = &mut tables[cursor];
        for index in 0..=255_u8 {
            let [hue, _, lightness] = hsl[index as usize];
            table[index] = quantizer.index(Rgb::from_hsl([
                rotate(hue, step),
                0.5,
                (lightness + 0.2).min(1.0),
            ]));
        }
        cursor += 1;
    }

    // Greyscale: saturation dropped, lightness halved.
    {
        let table = &mut tables[cursor];
        for index in 0..=255_u8 {
            let [hue, _, lightness] = hsl[index as usize];
            table[index] = quantizer.index(Rgb::from_hsl([hue, 0.0, lightness / 2.0]));
        }
        cursor += 1;
    }

    // Brightened greyscale: lightness raised by 0.2, renormalized.
    {
        let table = &mut tables[cursor];
        for index in 0..=255_u8 {
            let [hue, _, lightness] = hsl[index as usize];
            table[index] =
                quantizer.index(Rgb::from_hsl([hue, 0.0, (lightness + 0.2) / 1.2]));
        }
        cursor += 1;
    }

    // Rotations that leave near-red hues alone: any base hue within ±45° of
    // 0°/360° copies the immediately preceding table's entry instead.
    // Index 0 stays untouched.
    const TOLERANCE: Float = 3.0 * DEGREES_PER_STEP;
    for step in 0..HUE_STEPS {
        let (before, rest) = tables.split_at_mut(cursor);
        let previous = &before[cursor - 1];
        let table = &mut rest[0];

        for index in 1..=255_u8 {
            let [hue, saturation, lightness] = hsl[index as usize];
            if TOLERANCE < hue && hue < MAX_DEGREES - TOLERANCE {
                table[index] = quantizer.index(Rgb::from_hsl([
                    rotate(hue, step),
                    saturation,
                    lightness,
                ]));
            } else {
                table[index] = previous[index];
            }
        }
        cursor += 1;
    }

    // One blank slot; the format reserves it but nothing fills it.
    cursor += 1;

    // Fully saturated tables with the hue fixed per step.
    for step in 0..HUE_STEPS / 2 {
        let table = &mut tables[cursor];
        for index in 0..=255_u8 {
            let [_, _, lightness] = hsl[index as usize];
            table[index] = quantizer.index(Rgb::from_hsl([
                step as Float * 2.0 * DEGREES_PER_STEP,
                1.0,
                lightness,
            ]));
        }
        cursor += 1;
    }

    debug_assert_eq!(cursor, Pl2::HUE_VARIATIONS);
    tables
}

/// Generate the red, green, and blue tone tables. Index 0 stays untouched.
///
/// Each base color maps to a pure primary whose intensity is the Euclidean
/// magnitude of the base color, saturating at 255.
fn tone_tables(palette: &Palette, quantizer: &mut Quantizer) -> (Transform, Transform, Transform) {
    let mut red = Transform::new();
    let mut green = Transform::new();
    let mut blue = Transform::new();

    for index in 1..=255_u8 {
        let color = palette[index];
        let (r, g, b) = (color.r() as Float, color.g() as Float, color.b() as Float);
        let magnitude = (r * r + g * g + b * b).sqrt().min(255.0) as u8;

        red[index] = quantizer.index(Rgb::new(magnitude, 0, 0));
        green[index] = quantizer.index(Rgb::new(0, magnitude, 0));
        blue[index] = quantizer.index(Rgb::new(0, 0, magnitude));
    }

    (red, green, blue)
}

/// Generate the max component blend grid. Index 0 stays untouched on both
/// axes.
///
/// The destination's largest component, normalized to `0..=1`, weighs the
/// destination against the source per channel.
fn max_component_tables(
    palette: &Palette,
    quantizer: &mut Quantizer,
) -> [Transform; Palette::SIZE] {
    let mut tables = [Transform::new(); Palette::SIZE];

    for src in 1..=255_u8 {
        for dst in 1..=255_u8 {
            let dst_color = palette[dst];
            let weight =
                dst_color.r().max(dst_color.g()).max(dst_color.b()) as Float / 255.0;
            let inverse = 1.0 - weight;

            let color = blend(palette[src], dst_color, |s, d| {
                ((s as Float * inverse) as u16 + (d as Float * weight) as u16).min(255) as u8
            });
            tables[src as usize][dst] = quantizer.index(color);
        }
    }

    tables
}

/// Generate the darkened color shift: every component divided by three.
fn darkened_table(palette: &Palette, quantizer: &mut Quantizer) -> Transform {
    let mut table = Transform::new();
    for index in 0..=255_u8 {
        table[index] = quantizer.index(palette[index].map(|c| c / 3));
    }
    table
}

/// Generate the text color shift tables. Index 0 stays untouched on both
/// the text and the base axis.
///
/// Each text color acts as a tint scaled by the base color's intensity,
/// for which the red channel stands in — the legacy data is greyscale-heavy
/// enough that red tracks brightness.
fn text_shift_tables(
    palette: &Palette,
    text_palette: &TextPalette,
    quantizer: &mut Quantizer,
) -> [Transform; TextPalette::SIZE] {
    let mut tables = [Transform::new(); TextPalette::SIZE];

    for text_index in 1..TextPalette::SIZE {
        let tint = text_palette[text_index as u8];
        let table = &mut tables[text_index];

        for index in 1..=255_u8 {
            let intensity = palette[index].r() as u32;
            let color = tint.map(|c| ((c as u32 * intensity) / 255) as u8);
            table[index] = quantizer.index(color);
        }
    }

    tables
}

impl Pl2 {
    /// Regenerate every derivable transform table from the palettes.
    ///
    /// Generation is deterministic and total: the same base and text
    /// palettes produce bit-identical tables, and no input can fail. The
    /// reserved [`unknown_variations`](Pl2::unknown_variations) have no
    /// known formula and reset to zero — only decoding fills them.
    pub fn regenerate(&mut self) {
        let palette = self.base_palette;
        let hsl = *self.hsl();
        let mut quantizer = Quantizer::new(&palette);

        self.light_level_variations = light_level_tables(&palette, &mut quantizer);
        self.inv_color_variations = inv_color_tables(&palette, &mut quantizer);
        self.selected_unit_shift = selected_unit_table(&hsl, &mut quantizer);

        self.alpha_blend = alpha_blend_tables(&palette, &mut quantizer);
        self.additive_blend = additive_blend_tables(&palette, &mut quantizer);
        self.multiplicative_blend = multiplicative_blend_tables(&palette, &mut quantizer);

        self.hue_variations = hue_variation_tables(&hsl, &mut quantizer);
        let (red, green, blue) = tone_tables(&palette, &mut quantizer);
        self.red_tones = red;
        self.green_tones = green;
        self.blue_tones = blue;

        self.unknown_variations = [Transform::new(); Self::UNKNOWN_VARIATIONS];
        self.max_component_blend = max_component_tables(&palette, &mut quantizer);
        self.darkened_color_shift = darkened_table(&palette, &mut quantizer);

        self.text_color_shifts = text_shift_tables(&palette, &self.text_palette, &mut quantizer);
    }
}

#[cfg(test)]
mod test {
    use crate::{Pl2, Transform};

    fn greyscale_pl2() -> Pl2 {
        Pl2::with_palette(&[])
    }

    #[test]
    fn test_determinism() {
        let first = greyscale_pl2();
        let second = greyscale_pl2();
        assert_eq!(first, second);
    }

    #[test]
    fn test_light_levels_on_greyscale() {
        let pl2 = greyscale_pl2();

        // At the top step the formula is ((31+1) * c) >> 5 == c.
        assert_eq!(pl2.light_level_variations[31], Transform::identity());

        // At the bottom step it is c >> 5.
        assert_eq!(pl2.light_level_variations[0][255], 255 >> 5);
        assert_eq!(pl2.light_level_variations[0][64], 64 >> 5);
    }

    #[test]
    fn test_inv_color_top_step_saturates() {
        let pl2 = greyscale_pl2();

        // At step 15 the formula collapses to (255 - c) + c == 255.
        for index in 0..=255_u8 {
            assert_eq!(pl2.inv_color_variations[15][index], 255);
        }
    }

    #[test]
    fn test_selected_unit_shift_on_greyscale() {
        let pl2 = greyscale_pl2();

        // Zero lightness stays zero; full lightness saturates in place.
        assert_eq!(pl2.selected_unit_shift[0], 0);
        assert_eq!(pl2.selected_unit_shift[255], 255);
    }

    #[test]
    fn test_alpha_blend_ratios() {
        let pl2 = greyscale_pl2();

        // Level 0 blends at 25% source: 0.25*100 + 0.75*200 == 175.
        assert_eq!(pl2.alpha_blend[0][100][200], 175);
        // Level 2 blends at 75% source: 0.75*100 + 0.25*200 == 125.
        assert_eq!(pl2.alpha_blend[2][100][200], 125);
    }

    #[test]
    fn test_additive_blend_clamps() {
        let pl2 = greyscale_pl2();

        assert_eq!(pl2.additive_blend[200][200], 255);
        assert_eq!(pl2.additive_blend[100][50], 150);
        // Symmetric by construction.
        assert_eq!(pl2.additive_blend[50][100], 150);
    }

    #[test]
    fn test_multiplicative_blend() {
        let pl2 = greyscale_pl2();

        assert_eq!(pl2.multiplicative_blend[128][128], 64);
        assert_eq!(pl2.multiplicative_blend[255][77], 77);
    }

    #[test]
    fn test_greyscale_hue_table_halves_lightness() {
        let pl2 = greyscale_pl2();

        // Family four sits at index 72 and halves the lightness.
        assert_eq!(pl2.hue_variations[72][100], 50);
        assert_eq!(pl2.hue_variations[72][255], 128);
    }

    #[test]
    fn test_blank_hue_slot_stays_zeroed() {
        let pl2 = greyscale_pl2();
        assert_eq!(pl2.hue_variations[98], Transform::new());
    }

    #[test]
    fn test_unknown_variations_stay_zeroed() {
        let pl2 = greyscale_pl2();
        for table in &pl2.unknown_variations {
            assert_eq!(*table, Transform::new());
        }
    }

    #[test]
    fn test_tone_tables_leave_index_zero() {
        let pl2 = greyscale_pl2();

        assert_eq!(pl2.red_tones[0], 0);
        assert_eq!(pl2.green_tones[0], 0);
        assert_eq!(pl2.blue_tones[0], 0);
    }

    #[test]
    fn test_max_component_on_greyscale() {
        let pl2 = greyscale_pl2();

        // A white destination dominates entirely.
        assert_eq!(pl2.max_component_blend[10][255], 255);
        // Index 0 stays untouched on both axes.
        assert_eq!(pl2.max_component_blend[0], Transform::new());
        assert_eq!(pl2.max_component_blend[10][0], 0);
    }

    #[test]
    fn test_darkened_shift_divides_by_three() {
        let pl2 = greyscale_pl2();

        assert_eq!(pl2.darkened_color_shift[90], 30);
        assert_eq!(pl2.darkened_color_shift[255], 85);
    }

    #[test]
    fn test_text_shifts_leave_index_zero() {
        let pl2 = greyscale_pl2();

        assert_eq!(pl2.text_color_shifts[0], Transform::new());
        for table in &pl2.text_color_shifts[1..] {
            assert_eq!(table[0], 0);
        }
    }

    #[test]
    fn test_black_text_color_maps_to_black() {
        let pl2 = greyscale_pl2();

        // Text color 6 is black, so every tinted color quantizes to entry 0.
        for index in 1..=255_u8 {
            assert_eq!(pl2.text_color_shifts[6][index], 0);
        }
    }
}
