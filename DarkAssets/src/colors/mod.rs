//! Adaptive color sets
//!
//! Turns colors.json (`{ name: { default?, light, dark } }`) into one
//! `<name>.colorset/Contents.json` per color with default, light and dark
//! variants.

pub mod colorset;
pub mod hex;
pub mod materializer;

pub use colorset::{AdaptiveColor, ColorSetContents, Luminosity};
pub use hex::{Rgb, hex_to_rgb};
pub use materializer::{
    CONTENTS_JSON, ColorEntry, ColorReport, load_colors, materialize_colors, parse_colors,
    write_color_set,
};
