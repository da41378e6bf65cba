mod conversion;
mod difference;

pub(crate) use conversion::{hsl_to_rgb, rgb_to_hsl};
pub(crate) use difference::{distance_squared, find_closest};
