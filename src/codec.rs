//! The binary codec for the PL2 format.
//!
//! The layout is a plain concatenation of fixed-size sections with no
//! header, no length fields, and no checksum: the base palette (4 bytes per
//! entry, the fourth byte reserved), the lighting tables, the blend mode
//! tables, the color variation tables, the remaining tables, the text
//! palette (3 bytes per entry), and the text color shift tables. Decoding
//! reads strictly forward; encoding writes the same sections in the same
//! order.

use std::io::{Read, Write};

use crate::error::{CodecError, Section};
use crate::{Palette, Pl2, Rgb, TextPalette, Transform};

fn read_array<const N: usize>(
    reader: &mut impl Read,
    section: Section,
) -> Result<[u8; N], CodecError> {
    let mut buffer = [0_u8; N];
    reader
        .read_exact(&mut buffer)
        .map_err(|error| CodecError::new(section, error))?;
    Ok(buffer)
}

fn decode_table(reader: &mut impl Read, section: Section) -> Result<Transform, CodecError> {
    let entries: [u8; Transform::SIZE] = read_array(reader, section)?;
    Ok(Transform::from(entries))
}

fn decode_tables(
    reader: &mut impl Read,
    tables: &mut [Transform],
    section: Section,
) -> Result<(), CodecError> {
    for table in tables {
        *table = decode_table(reader, section)?;
    }
    Ok(())
}

fn encode_table(
    writer: &mut impl Write,
    table: &Transform,
    section: Section,
) -> Result<(), CodecError> {
    writer
        .write_all(table.as_ref())
        .map_err(|error| CodecError::new(section, error))
}

fn encode_tables(
    writer: &mut impl Write,
    tables: &[Transform],
    section: Section,
) -> Result<(), CodecError> {
    for table in tables {
        encode_table(writer, table, section)?;
    }
    Ok(())
}

impl Pl2 {
    /// Decode a container from the given reader.
    ///
    /// This method reads exactly [`Pl2::BYTE_SIZE`] bytes on success. On
    /// failure, it returns the error with the section that was being read;
    /// no partially filled container escapes. The reserved fourth byte of
    /// each base palette entry is discarded.
    pub fn decode(reader: &mut impl Read) -> Result<Self, CodecError> {
        let mut pl2 = Self::new();

        pl2.decode_base_palette(reader)?;
        pl2.decode_lighting(reader)?;
        pl2.decode_blend_modes(reader)?;
        pl2.decode_color_variations(reader)?;
        pl2.decode_other(reader)?;
        pl2.decode_text_palette(reader)?;
        decode_tables(
            reader,
            &mut pl2.text_color_shifts,
            Section::TextColorShifts,
        )?;

        Ok(pl2)
    }

    /// Decode a container from an in-memory buffer.
    pub fn from_bytes(mut data: &[u8]) -> Result<Self, CodecError> {
        Self::decode(&mut data)
    }

    /// Encode this container to the given writer.
    ///
    /// This method writes exactly [`Pl2::BYTE_SIZE`] bytes on success. The
    /// reserved byte of each base palette entry is written as zero. On
    /// error, anything already written must be considered invalid. Every
    /// container encodes — palettes and tables always exist, defaulted or
    /// zeroed where nothing populated them.
    pub fn encode(&self, writer: &mut impl Write) -> Result<(), CodecError> {
        self.encode_base_palette(writer)?;
        self.encode_lighting(writer)?;
        self.encode_blend_modes(writer)?;
        self.encode_color_variations(writer)?;
        self.encode_other(writer)?;
        self.encode_text_palette(writer)?;
        encode_tables(writer, &self.text_color_shifts, Section::TextColorShifts)
    }

    /// Encode this container to a new buffer of [`Pl2::BYTE_SIZE`] bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        let mut buffer = Vec::with_capacity(Self::BYTE_SIZE);
        self.encode(&mut buffer)?;
        Ok(buffer)
    }

    fn decode_base_palette(&mut self, reader: &mut impl Read) -> Result<(), CodecError> {
        let mut colors = [Rgb::BLACK; Palette::SIZE];
        for color in &mut colors {
            let [r, g, b, _reserved] = read_array(reader, Section::BasePalette)?;
            *color = Rgb::new(r, g, b);
        }
        self.set_base_palette(&colors);
        Ok(())
    }

    fn decode_lighting(&mut self, reader: &mut impl Read) -> Result<(), CodecError> {
        decode_tables(
            reader,
            &mut self.light_level_variations,
            Section::LightLevelVariations,
        )?;
        decode_tables(
            reader,
            &mut self.inv_color_variations,
            Section::InvColorVariations,
        )?;
        self.selected_unit_shift = decode_table(reader, Section::SelectedUnitShift)?;
        Ok(())
    }

    fn decode_blend_modes(&mut self, reader: &mut impl Read) -> Result<(), CodecError> {
        for level in &mut self.alpha_blend {
            decode_tables(reader, level, Section::AlphaBlend)?;
        }
        decode_tables(reader, &mut self.additive_blend, Section::AdditiveBlend)?;
        decode_tables(
            reader,
            &mut self.multiplicative_blend,
            Section::MultiplicativeBlend,
        )
    }

    fn decode_color_variations(&mut self, reader: &mut impl Read) -> Result<(), CodecError> {
        decode_tables(reader, &mut self.hue_variations, Section::HueVariations)?;
        self.red_tones = decode_table(reader, Section::RedTones)?;
        self.green_tones = decode_table(reader, Section::GreenTones)?;
        self.blue_tones = decode_table(reader, Section::BlueTones)?;
        Ok(())
    }

    fn decode_other(&mut self, reader: &mut impl Read) -> Result<(), CodecError> {
        decode_tables(
            reader,
            &mut self.unknown_variations,
            Section::UnknownVariations,
        )?;
        decode_tables(
            reader,
            &mut self.max_component_blend,
            Section::MaxComponentBlend,
        )?;
        self.darkened_color_shift = decode_table(reader, Section::DarkenedColorShift)?;
        Ok(())
    }

    fn decode_text_palette(&mut self, reader: &mut impl Read) -> Result<(), CodecError> {
        let mut colors = [Rgb::BLACK; TextPalette::SIZE];
        for color in &mut colors {
            let [r, g, b] = read_array(reader, Section::TextPalette)?;
            *color = Rgb::new(r, g, b);
        }
        self.set_text_palette(&colors);
        Ok(())
    }

    fn encode_base_palette(&self, writer: &mut impl Write) -> Result<(), CodecError> {
        for color in self.base_palette.as_ref() {
            let bytes = [color.r(), color.g(), color.b(), 0];
            writer
                .write_all(&bytes)
                .map_err(|error| CodecError::new(Section::BasePalette, error))?;
        }
        Ok(())
    }

    fn encode_lighting(&self, writer: &mut impl Write) -> Result<(), CodecError> {
        encode_tables(
            writer,
            &self.light_level_variations,
            Section::LightLevelVariations,
        )?;
        encode_tables(
            writer,
            &self.inv_color_variations,
            Section::InvColorVariations,
        )?;
        encode_table(writer, &self.selected_unit_shift, Section::SelectedUnitShift)
    }

    fn encode_blend_modes(&self, writer: &mut impl Write) -> Result<(), CodecError> {
        for level in &self.alpha_blend {
            encode_tables(writer, level, Section::AlphaBlend)?;
        }
        encode_tables(writer, &self.additive_blend, Section::AdditiveBlend)?;
        encode_tables(
            writer,
            &self.multiplicative_blend,
            Section::MultiplicativeBlend,
        )
    }

    fn encode_color_variations(&self, writer: &mut impl Write) -> Result<(), CodecError> {
        encode_tables(writer, &self.hue_variations, Section::HueVariations)?;
        encode_table(writer, &self.red_tones, Section::RedTones)?;
        encode_table(writer, &self.green_tones, Section::GreenTones)?;
        encode_table(writer, &self.blue_tones, Section::BlueTones)
    }

    fn encode_other(&self, writer: &mut impl Write) -> Result<(), CodecError> {
        encode_tables(
            writer,
            &self.unknown_variations,
            Section::UnknownVariations,
        )?;
        encode_tables(
            writer,
            &self.max_component_blend,
            Section::MaxComponentBlend,
        )?;
        encode_table(
            writer,
            &self.darkened_color_shift,
            Section::DarkenedColorShift,
        )
    }

    fn encode_text_palette(&self, writer: &mut impl Write) -> Result<(), CodecError> {
        for color in self.text_palette.as_ref() {
            let bytes = [color.r(), color.g(), color.b()];
            writer
                .write_all(&bytes)
                .map_err(|error| CodecError::new(Section::TextPalette, error))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::error::Section;
    use crate::{Pl2, Rgb};

    /// Build a buffer of the exact format length with non-trivial contents.
    fn patterned_bytes() -> Vec<u8> {
        (0..Pl2::BYTE_SIZE)
            .map(|index| (index % 251) as u8)
            .collect()
    }

    #[test]
    fn test_byte_round_trip() {
        let bytes = patterned_bytes();
        let pl2 = Pl2::from_bytes(&bytes).unwrap();
        assert_eq!(pl2.to_bytes().unwrap().len(), Pl2::BYTE_SIZE);

        let mut expected = bytes;
        // The reserved byte of every base palette entry encodes as zero.
        for entry in 0..256 {
            expected[entry * 4 + 3] = 0;
        }
        assert_eq!(pl2.to_bytes().unwrap(), expected);
    }

    #[test]
    fn test_container_round_trip() {
        let pl2 = Pl2::with_palette(&[Rgb::new(31, 63, 127)]);
        let decoded = Pl2::from_bytes(&pl2.to_bytes().unwrap()).unwrap();
        assert_eq!(decoded, pl2);
    }

    #[test]
    fn test_truncated_input() {
        let error = Pl2::from_bytes(&[]).unwrap_err();
        assert!(error.is_truncated());
        assert_eq!(error.section(), Section::BasePalette);

        let bytes = patterned_bytes();
        let error = Pl2::from_bytes(&bytes[..Pl2::BYTE_SIZE - 1]).unwrap_err();
        assert!(error.is_truncated());
        assert_eq!(error.section(), Section::TextColorShifts);
    }

    #[test]
    fn test_decode_reads_every_section() {
        let bytes = patterned_bytes();
        let pl2 = Pl2::from_bytes(&bytes).unwrap();

        // Spot-check section boundaries: the base palette ends at byte
        // 1024, so the first light level table starts there.
        assert_eq!(pl2.base_palette[0], Rgb::new(0, 1, 2));
        assert_eq!(pl2.light_level_variations[0][0], (1024 % 251) as u8);
    }
}
