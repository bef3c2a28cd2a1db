//! Icon layers.
//!
//! Each layer turns one concern of [`IconSettings`](crate::IconSettings) into
//! SVG elements. The composer stacks them in paint order:
//!
//! ```text
//! <svg>                      outer container, grows for the caption band
//! ├── <metadata>             settings JSON (skipped in preview)
//! ├── <svg>                  shape viewport
//! │   └── <g>                fill / stroke
//! │       ├── <clipPath>     copy of the shape
//! │       ├── shape
//! │       └── <g clip-path>  embedded image
//! ├── <path>                 caption background
//! └── <text>                 caption
//! ```

pub mod caption;
pub mod image;
pub mod metadata;
pub mod shape;

pub use caption::{CaptionLayout, FONT_FAMILY, band_height, build_caption, layout_caption};
pub use image::build_image;
pub use metadata::{build_metadata, parse_metadata};
pub use shape::{CLIP_PATH_ID, build_clip_path, build_shape};
