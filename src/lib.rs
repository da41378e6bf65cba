//! # PL2
//!
//! A codec and generator for the PL2 palette-transform format: a 256-color
//! base palette plus a fixed catalogue of lookup tables, each mapping every
//! palette index to another palette index so that lighting, blending, hue
//! rotation, and tinting effects cost a single table lookup at render time.
//!
//! The main abstractions are:
//!
//!   * [`Rgb`] implements **8-bit RGB colors**, the only color
//!     representation the format persists. All stored colors are opaque.
//!   * [`Palette`] and [`TextPalette`] implement **fixed-size color
//!     containers** with 256 and 13 entries, respectively. [`Palette`] also
//!     implements the nearest-color search every generator quantizes
//!     through, see [`Palette::nearest`].
//!   * [`Transform`] implements a **single lookup table** with one 8-bit
//!     destination index per palette entry.
//!   * [`Pl2`] implements the **palette container**: the base palette, the
//!     text palette, and every transform group of the format. It decodes
//!     from and encodes to the exact legacy byte layout, and it regenerates
//!     every derivable table from the base palette alone, see
//!     [`Pl2::decode`], [`Pl2::encode`], and [`Pl2::regenerate`].
//!   * The [`gpl`] module bridges to the GIMP palette text format, which
//!     serves as import/export vehicle for base palettes.
#![cfg_attr(
    feature = "png",
    doc = "  * The optional [`preview`] module renders every table as one row of
    an RGBA image for visual inspection."
)]
#![cfg_attr(
    not(feature = "png"),
    doc = "  * The optional `preview` module renders every table as one row of
    an RGBA image for visual inspection."
)]
//!
//! Decoding never commits a partially read container, generation is total
//! over the 8-bit domain, and encoding always writes the format's fixed
//! 443,175 bytes. Round-tripping bytes through [`Pl2::decode`] and
//! [`Pl2::encode`] reproduces them exactly.

/// The floating point type in use.
pub type Float = f64;

mod color;
mod core;
pub mod error;
pub mod gpl;
mod palette;
mod pl2;
#[cfg(feature = "png")]
pub mod preview;
mod transform;

mod codec;
mod generate;

pub use color::Rgb;
pub use palette::{Palette, TextPalette, TEXT_COLORS};
pub use pl2::Pl2;
pub use transform::Transform;
