/// Compute the squared distance between two 24-bit RGB colors.
///
/// This is the format's one and only color metric: the plain sum of squared
/// component differences. All generators quantize through it, either
/// directly or after converting an HSL candidate back to RGB.
#[inline]
pub(crate) fn distance_squared(components1: &[u8; 3], components2: &[u8; 3]) -> u32 {
    let dr = components1[0] as i32 - components2[0] as i32;
    let dg = components1[1] as i32 - components2[1] as i32;
    let db = components1[2] as i32 - components2[2] as i32;

    (dr * dr + dg * dg + db * db) as u32
}

/// Find the candidate color closest to the origin.
///
/// This function compares the origin to every candidate color, computing the
/// distance metric with the given function, and returns the index of the
/// closest candidate color — or `None` if there are no candidates. Ties
/// break towards the first, i.e., lowest, index: a candidate replaces the
/// running minimum only when it is strictly closer. Regeneration of legacy
/// data depends on that tie-breaking order.
pub(crate) fn find_closest<'c, C, F>(
    origin: &[u8; 3],
    candidates: C,
    mut compute_distance: F,
) -> Option<usize>
where
    C: IntoIterator<Item = &'c [u8; 3]>,
    F: FnMut(&[u8; 3], &[u8; 3]) -> u32,
{
    let mut min_distance = u32::MAX;
    let mut min_index = None;

    for (index, candidate) in candidates.into_iter().enumerate() {
        let distance = compute_distance(origin, candidate);
        if distance < min_distance {
            min_distance = distance;
            min_index = Some(index);
        }
    }

    min_index
}

#[cfg(test)]
mod test {
    use super::{distance_squared, find_closest};

    #[test]
    fn test_distance() {
        assert_eq!(distance_squared(&[0, 0, 0], &[0, 0, 0]), 0);
        assert_eq!(distance_squared(&[255, 0, 0], &[0, 0, 0]), 255 * 255);
        assert_eq!(distance_squared(&[1, 2, 3], &[3, 2, 1]), 8);
    }

    #[test]
    fn test_first_minimum_wins() {
        let candidates = [[10, 10, 10], [20, 20, 20], [20, 20, 20]];
        let index = find_closest(&[20, 20, 20], &candidates, distance_squared);
        assert_eq!(index, Some(1));
    }

    #[test]
    fn test_no_candidates() {
        let candidates: [[u8; 3]; 0] = [];
        let index = find_closest(&[0, 0, 0], &candidates, distance_squared);
        assert_eq!(index, None);
    }
}
