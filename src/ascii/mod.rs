//! ASCII primitives for converting pixels to characters.
//!
//! 1. **Brightness sampling** - RGB(A) to luminance using BT.601
//! 2. **Character mapping** - brightness to a palette index
//! 3. **Dimensions** - aspect-ratio-correct target sizes for terminals
//!
//! # Character Sets
//!
//! Built-in palettes are available via [`CharSet`]; custom ramps are built
//! with [`Palette::new`].

mod charset;
mod dimensions;
mod grayscale;
mod mapping;

pub use charset::{CharSet, Palette, BLOCKS_CHARSET, SHORT_CHARSET, STANDARD_CHARSET};
pub use dimensions::{aspect_height, target_dimensions, CORRECTION_RATIO};
pub use grayscale::{brightness_of, Luminance};
pub use mapping::{char_index, map_row_into, map_to_char};
