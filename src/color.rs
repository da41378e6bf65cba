use crate::core::{hsl_to_rgb, rgb_to_hsl};
use crate::Float;

/// A macro for creating an [`Rgb`] color from its components.
#[macro_export]
macro_rules! rgb {
    ($r:expr, $g:expr, $b:expr) => {
        $crate::Rgb::new($r, $g, $b)
    };
}

/// An 8-bit RGB color.
///
/// This struct is the only color representation the PL2 format persists.
/// Alpha is not part of the format's semantics; every stored color is
/// treated as fully opaque.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb([u8; 3]);

impl Rgb {
    /// The black color, which doubles as the zero value of the format.
    pub const BLACK: Rgb = Rgb([0, 0, 0]);

    /// Create a new color from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Create a new grey with the given intensity for all three components.
    pub const fn grey(value: u8) -> Self {
        Self([value, value, value])
    }

    /// Access the red component.
    pub const fn r(&self) -> u8 {
        self.0[0]
    }

    /// Access the green component.
    pub const fn g(&self) -> u8 {
        self.0[1]
    }

    /// Access the blue component.
    pub const fn b(&self) -> u8 {
        self.0[2]
    }

    /// Convert this color to HSL coordinates.
    ///
    /// The result has the hue in degrees `0..360` and saturation as well as
    /// lightness in `0..=1`. Greys, including black and white, have hue 0
    /// and saturation 0.
    pub fn to_hsl(&self) -> [Float; 3] {
        rgb_to_hsl(self.0)
    }

    /// Create a new color from HSL coordinates.
    ///
    /// The hue may be any angle in degrees, including negative ones, and is
    /// normalized to `0..360`. Saturation and lightness are clamped to
    /// `0..=1` before conversion.
    pub fn from_hsl(coordinates: [Float; 3]) -> Self {
        Self(hsl_to_rgb(coordinates))
    }

    /// Map each component with the given function.
    pub fn map(&self, mut f: impl FnMut(u8) -> u8) -> Self {
        Self([f(self.0[0]), f(self.0[1]), f(self.0[2])])
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(components: [u8; 3]) -> Self {
        Self(components)
    }
}

impl AsRef<[u8; 3]> for Rgb {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl std::ops::Index<usize> for Rgb {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

#[cfg(test)]
mod test {
    use super::Rgb;

    #[test]
    fn test_accessors() {
        let color = rgb!(1, 2, 3);
        assert_eq!(color.r(), 1);
        assert_eq!(color.g(), 2);
        assert_eq!(color.b(), 3);
        assert_eq!(color, Rgb::from([1, 2, 3]));
    }

    #[test]
    fn test_map() {
        let color = rgb!(10, 20, 30).map(|c| c / 10);
        assert_eq!(color, rgb!(1, 2, 3));
    }
}
