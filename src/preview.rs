//! Rendering a container as a color swatch image.
//!
//! The preview lays out one image row per transform table, 256 pixels wide,
//! with every pixel showing the base palette color the table maps that
//! column's index to. An identity row precedes the main tables and another
//! one precedes the text shift tables, so the base palette itself is
//! visible as a reference stripe. The reserved tables carry no color
//! information and are left out.

use image::{Rgba, RgbaImage};

use crate::{Palette, Pl2, Transform};

/// The number of main table rows, including the leading identity row.
const MAIN_ROWS: usize = 1
    + Pl2::LIGHT_LEVELS
    + Pl2::INV_COLOR_LEVELS
    + 1
    + Pl2::ALPHA_BLEND_LEVELS * Palette::SIZE
    + Palette::SIZE
    + Palette::SIZE
    + Pl2::HUE_VARIATIONS
    + 3
    + Palette::SIZE
    + 1;

impl Pl2 {
    /// Render this container as a swatch image, one row per table.
    pub fn to_image(&self) -> RgbaImage {
        let identity = Transform::identity();
        let rows = self.preview_rows(&identity);
        let mut image = RgbaImage::new(Palette::SIZE as u32, rows.len() as u32);

        for (y, table) in rows.into_iter().enumerate() {
            for x in 0..=255_u8 {
                let color = self.base_palette[table[x]];
                image.put_pixel(
                    x as u32,
                    y as u32,
                    Rgba([color.r(), color.g(), color.b(), 255]),
                );
            }
        }

        image
    }

    /// Collect the tables to render, in row order.
    fn preview_rows<'a>(&'a self, identity: &'a Transform) -> Vec<&'a Transform> {
        let mut rows = Vec::with_capacity(MAIN_ROWS + 1 + self.text_color_shifts.len());

        rows.push(identity);
        rows.extend(self.light_level_variations.iter());
        rows.extend(self.inv_color_variations.iter());
        rows.push(&self.selected_unit_shift);

        for tables in &self.alpha_blend {
            rows.extend(tables.iter());
        }
        rows.extend(self.additive_blend.iter());
        rows.extend(self.multiplicative_blend.iter());

        rows.extend(self.hue_variations.iter());
        rows.push(&self.red_tones);
        rows.push(&self.green_tones);
        rows.push(&self.blue_tones);

        rows.extend(self.max_component_blend.iter());
        rows.push(&self.darkened_color_shift);

        rows.push(identity);
        rows.extend(self.text_color_shifts.iter());

        rows
    }
}

#[cfg(test)]
mod test {
    use super::MAIN_ROWS;
    use crate::{Palette, Pl2, Rgb, TextPalette};

    #[test]
    fn test_image_dimensions() {
        let pl2 = Pl2::with_palette(&[]);
        let image = pl2.to_image();

        assert_eq!(image.width(), Palette::SIZE as u32);
        assert_eq!(image.height(), (MAIN_ROWS + 1 + TextPalette::SIZE) as u32);
    }

    #[test]
    fn test_identity_row_shows_base_palette() {
        let mut pl2 = Pl2::new();
        pl2.set_base_palette(&[Rgb::new(31, 63, 127)]);
        let image = pl2.to_image();

        // Palettes shorter than 256 colors pad with a greyscale ramp.
        assert_eq!(image.get_pixel(0, 0).0, [31, 63, 127, 255]);
        assert_eq!(image.get_pixel(200, 0).0, [200, 200, 200, 255]);
    }
}
