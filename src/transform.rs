use crate::{Palette, Rgb};

/// A palette transform.
///
/// A transform is a fixed-size table with one destination index per base
/// palette entry: a pixel whose color is `palette[i]` renders as
/// `palette[table[i]]` under the effect the table approximates. Because
/// entries are 8-bit, every table is a valid mapping into a 256-entry
/// palette by construction.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Transform {
    inner: [u8; Transform::SIZE],
}

impl Transform {
    /// The number of entries in a transform.
    pub const SIZE: usize = 256;

    /// The identity transform, mapping every index to itself.
    pub fn identity() -> Self {
        let mut inner = [0; Self::SIZE];
        for (index, entry) in inner.iter_mut().enumerate() {
            *entry = index as u8;
        }
        Self { inner }
    }

    /// Create a new zeroed transform.
    pub const fn new() -> Self {
        Self {
            inner: [0; Self::SIZE],
        }
    }

    /// Create a new transform with the given entries.
    pub const fn with_array(entries: [u8; Self::SIZE]) -> Self {
        Self { inner: entries }
    }

    /// Produce the palette that results from applying this transform.
    ///
    /// The resulting palette holds `source[self[i]]` at every index *i*.
    /// This derived view serves inspection and preview; the codec reads and
    /// writes the raw indices.
    pub fn apply(&self, source: &Palette) -> Palette {
        let mut colors = [Rgb::BLACK; Palette::SIZE];
        for (entry, index) in colors.iter_mut().zip(self.inner) {
            *entry = source[index];
        }
        Palette::with_array(colors)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<[u8]> for Transform {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

impl From<[u8; Transform::SIZE]> for Transform {
    fn from(entries: [u8; Transform::SIZE]) -> Self {
        Self { inner: entries }
    }
}

impl std::ops::Index<u8> for Transform {
    type Output = u8;

    fn index(&self, index: u8) -> &Self::Output {
        &self.inner[index as usize]
    }
}

impl std::ops::IndexMut<u8> for Transform {
    fn index_mut(&mut self, index: u8) -> &mut Self::Output {
        &mut self.inner[index as usize]
    }
}

impl std::fmt::Debug for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transform")
            .field("len", &Self::SIZE)
            .field("first", &self.inner[0])
            .field("last", &self.inner[Self::SIZE - 1])
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::Transform;
    use crate::{Palette, Rgb};

    #[test]
    fn test_identity_applies_to_itself() {
        let palette = Palette::greyscale();
        assert_eq!(Transform::identity().apply(&palette), palette);
    }

    #[test]
    fn test_apply_looks_up_destination() {
        let palette = Palette::greyscale();
        let mut table = Transform::new();
        table[0] = 255;

        let applied = table.apply(&palette);
        assert_eq!(applied[0], Rgb::grey(255));
        assert_eq!(applied[1], Rgb::grey(0));
    }

    #[test]
    fn test_equality() {
        let mut table = Transform::identity();
        assert_eq!(table, Transform::identity());

        table[7] = 0;
        assert_ne!(table, Transform::identity());
    }
}
