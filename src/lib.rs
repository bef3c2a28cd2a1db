//! icon-maker: SVG icon composition from editor settings
//!
//! This crate turns an [`IconSettings`] value (shape, size, colors, caption,
//! embedded image) into self-describing SVG markup. The markup embeds the
//! settings that produced it, so an icon can be reopened in the editor from
//! the artifact alone.
//!
//! # Example
//!
//! ```
//! use icon_maker::{
//!     IconSettings, IconSize, OutlineSize, RenderOptions, Shape, build_svg, parse_metadata,
//! };
//!
//! let settings = IconSettings::new()
//!     .with_shape(Shape::Circle)
//!     .with_size(IconSize::Large)
//!     .with_color("#000")
//!     .with_outline("#fff", OutlineSize::Large)
//!     .with_text("Week 1");
//!
//! // Persisted icon: settings travel inside the markup
//! let markup = build_svg(&settings, &RenderOptions::new()).unwrap();
//! assert_eq!(parse_metadata(&markup), Some(settings.clone()));
//!
//! // Live preview: no metadata, unfilled shape
//! let preview = build_svg(&settings, &RenderOptions::preview()).unwrap();
//! assert!(parse_metadata(&preview).is_none());
//! ```
//!
//! # Caption Font
//!
//! Captions use a single bundled font. [`build_stylesheet`] fetches it through
//! a [`FontSource`] and returns a `<style>` element with the font inlined.
//!
//! # Features
//!
//! - `http`: [`HttpFontSource`], fetching the font with `reqwest`
//! - `jsonschema`: `schemars::JsonSchema` for the settings types
//! - `clap`: `clap::ValueEnum` for the settings enums

mod composer;
mod element;
mod error;
mod font;
mod geometry;
mod layer;
mod settings;
mod stylesheet;

pub use composer::{
    PREVIEW_STYLE, RenderOptions, build_group, build_svg, build_svg_tree, build_svg_wrapper,
    container_height,
};
pub use element::{Element, Node, SVG_NS};
pub use error::{IconError, Result};
#[cfg(feature = "http")]
pub use font::HttpFontSource;
pub use font::{FileFontSource, FontAsset, FontSource, StaticFontSource};
pub use geometry::{Point, Rect};
pub use layer::{
    CLIP_PATH_ID, CaptionLayout, FONT_FAMILY, build_caption, build_clip_path, build_image,
    build_metadata, build_shape, layout_caption, parse_metadata,
};
pub use settings::{
    ICON_MAKER_TYPE, IconSettings, IconSize, OutlineSize, Shape, TextPosition, TextSize,
};
pub use stylesheet::{build_stylesheet, stylesheet_element};
