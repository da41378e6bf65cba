use crate::Float;

/// Convert the given 24-bit RGB components to HSL coordinates.
///
/// The resulting coordinates comprise the hue in degrees `0..360` as well as
/// saturation and lightness in `0..=1`. Achromatic colors have hue 0 and
/// saturation 0.
pub(crate) fn rgb_to_hsl(components: [u8; 3]) -> [Float; 3] {
    let r = components[0] as Float / 255.0;
    let g = components[1] as Float / 255.0;
    let b = components[2] as Float / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;

    if max == min {
        return [0.0, 0.0, lightness];
    }

    let chroma = max - min;
    let saturation = if lightness > 0.5 {
        chroma / (2.0 - max - min)
    } else {
        chroma / (max + min)
    };

    let hue = if max == r {
        (g - b) / chroma
    } else if max == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };

    [(hue * 60.0).rem_euclid(360.0), saturation, lightness]
}

/// Convert the given HSL coordinates to 24-bit RGB components.
///
/// The hue may be any angle in degrees and is normalized to `0..360`.
/// Saturation and lightness are clamped to `0..=1`, so the conversion is
/// total and always produces an in-gamut color.
pub(crate) fn hsl_to_rgb(coordinates: [Float; 3]) -> [u8; 3] {
    let hue = coordinates[0].rem_euclid(360.0);
    let saturation = coordinates[1].clamp(0.0, 1.0);
    let lightness = coordinates[2].clamp(0.0, 1.0);

    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let side = (hue / 60.0).rem_euclid(2.0);
    let x = chroma * (1.0 - (side - 1.0).abs());
    let m = lightness - chroma / 2.0;

    let (r, g, b) = match hue {
        h if h < 60.0 => (chroma, x, 0.0),
        h if h < 120.0 => (x, chroma, 0.0),
        h if h < 180.0 => (0.0, chroma, x),
        h if h < 240.0 => (0.0, x, chroma),
        h if h < 300.0 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    [
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    ]
}

#[cfg(test)]
mod test {
    use super::{hsl_to_rgb, rgb_to_hsl};

    #[test]
    fn test_primaries() {
        assert_eq!(rgb_to_hsl([255, 0, 0]), [0.0, 1.0, 0.5]);
        assert_eq!(rgb_to_hsl([0, 255, 0]), [120.0, 1.0, 0.5]);
        assert_eq!(rgb_to_hsl([0, 0, 255]), [240.0, 1.0, 0.5]);

        assert_eq!(hsl_to_rgb([0.0, 1.0, 0.5]), [255, 0, 0]);
        assert_eq!(hsl_to_rgb([120.0, 1.0, 0.5]), [0, 255, 0]);
        assert_eq!(hsl_to_rgb([240.0, 1.0, 0.5]), [0, 0, 255]);
    }

    #[test]
    fn test_achromatic() {
        assert_eq!(rgb_to_hsl([0, 0, 0]), [0.0, 0.0, 0.0]);
        assert_eq!(rgb_to_hsl([255, 255, 255]), [0.0, 0.0, 1.0]);

        let [hue, saturation, lightness] = rgb_to_hsl([128, 128, 128]);
        assert_eq!(hue, 0.0);
        assert_eq!(saturation, 0.0);
        assert_eq!(hsl_to_rgb([0.0, 0.0, lightness]), [128, 128, 128]);
    }

    #[test]
    fn test_round_trip() {
        for components in [[255, 128, 0], [17, 42, 93], [200, 200, 100]] {
            assert_eq!(hsl_to_rgb(rgb_to_hsl(components)), components);
        }
    }

    #[test]
    fn test_hue_normalization() {
        assert_eq!(hsl_to_rgb([360.0, 1.0, 0.5]), [255, 0, 0]);
        assert_eq!(hsl_to_rgb([-120.0, 1.0, 0.5]), [0, 0, 255]);
    }

    #[test]
    fn test_clamping() {
        assert_eq!(hsl_to_rgb([0.0, 2.0, 1.5]), [255, 255, 255]);
        assert_eq!(hsl_to_rgb([0.0, -1.0, -0.5]), [0, 0, 0]);
    }
}
