//! Serializable icon settings shared with the icon editor.
//!
//! An [`IconSettings`] value captures everything the editor knows about an
//! icon. It is the composer's only input and is also embedded verbatim in the
//! composed markup, so the JSON form below is a persistence format.
//!
//! # Example
//!
//! ```
//! use icon_maker::{IconSettings, IconSize, OutlineSize, Shape};
//!
//! let settings = IconSettings::new()
//!     .with_shape(Shape::Circle)
//!     .with_size(IconSize::Large)
//!     .with_color("#000")
//!     .with_outline("#fff", OutlineSize::Large);
//!
//! let json = settings.to_json().unwrap();
//! let restored = IconSettings::from_json(&json).unwrap();
//! assert_eq!(restored, settings);
//! ```

use serde::{Deserialize, Serialize};

/// Value of the `type` tag written into every settings payload.
pub const ICON_MAKER_TYPE: &str = "image/svg+xml-icon-maker-icons";

// ============================================================================
// Enumerations
// ============================================================================

/// Outline shape of the icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Shape {
    #[default]
    Square,
    Circle,
    Triangle,
    Diamond,
    Pentagon,
    Hexagon,
    Octagon,
    Star,
}

/// Icon size preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum IconSize {
    XSmall,
    #[default]
    Small,
    Medium,
    Large,
}

impl IconSize {
    /// Edge length of the square shape viewport, in pixels.
    pub const fn pixels(self) -> u32 {
        match self {
            Self::XSmall => 74,
            Self::Small => 122,
            Self::Medium => 158,
            Self::Large => 218,
        }
    }
}

/// Outline thickness preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum OutlineSize {
    #[default]
    None,
    Small,
    Medium,
    Large,
}

impl OutlineSize {
    /// The thickest outline any preset produces.
    pub const MAX: Self = Self::Large;

    /// Stroke width in pixels.
    pub const fn stroke_width(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Small => 2,
            Self::Medium => 4,
            Self::Large => 8,
        }
    }
}

/// Caption font size preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum TextSize {
    #[default]
    Small,
    Medium,
    Large,
    XLarge,
}

impl TextSize {
    /// Font size in pixels.
    pub const fn font_size(self) -> u32 {
        match self {
            Self::Small => 14,
            Self::Medium => 16,
            Self::Large => 22,
            Self::XLarge => 28,
        }
    }
}

/// Where the caption sits relative to the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum TextPosition {
    /// Centered on the shape.
    Middle,
    /// Centered in the lower third of the shape.
    BottomThird,
    /// In a band below the shape; grows the icon's height.
    #[default]
    Below,
}

impl TextPosition {
    /// Returns true if the caption is drawn over the shape instead of below it.
    pub fn overlays_shape(self) -> bool {
        !matches!(self, Self::Below)
    }
}

// ============================================================================
// IconSettings
// ============================================================================

/// Complete editor state for one icon.
///
/// # JSON Format
///
/// ```json
/// {
///   "type": "image/svg+xml-icon-maker-icons",
///   "shape": "circle",
///   "size": "large",
///   "color": "#000",
///   "outlineColor": "#fff",
///   "outlineSize": "large",
///   "text": "",
///   "textSize": "small",
///   "textColor": "#000000",
///   "textBackgroundColor": null,
///   "textPosition": "below",
///   "encodedImage": "",
///   "encodedImageType": "",
///   "encodedImageName": "",
///   "x": 0, "y": 0, "translateX": 0, "translateY": 0,
///   "width": 0, "height": 0,
///   "transform": "",
///   "imageSettings": null
/// }
/// ```
///
/// Missing fields take their default values, so partial payloads load.
/// Fields this type does not model are kept in [`extra`](Self::extra) and
/// written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct IconSettings {
    /// Payload tag, normally [`ICON_MAKER_TYPE`].
    #[serde(rename = "type")]
    pub icon_type: String,

    pub shape: Shape,
    pub size: IconSize,

    /// Shape fill. `None` leaves the shape unfilled.
    pub color: Option<String>,

    /// Shape stroke. `None` omits the outline entirely.
    pub outline_color: Option<String>,
    pub outline_size: OutlineSize,

    /// Caption text. Empty text draws no caption.
    pub text: String,
    pub text_size: TextSize,
    pub text_color: Option<String>,
    pub text_background_color: Option<String>,
    pub text_position: TextPosition,

    /// Embedded image as a data URI. Empty means no image.
    pub encoded_image: String,
    pub encoded_image_type: String,
    pub encoded_image_name: String,

    pub x: f64,
    pub y: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub width: f64,
    pub height: f64,

    /// Explicit transform for the embedded image; overrides the translate pair.
    pub transform: String,

    /// Opaque image-panel state owned by the editor.
    pub image_settings: Option<serde_json::Value>,

    /// Editor fields not modeled above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Default for IconSettings {
    fn default() -> Self {
        Self {
            icon_type: ICON_MAKER_TYPE.to_string(),
            shape: Shape::default(),
            size: IconSize::default(),
            color: None,
            outline_color: Some("#000000".to_string()),
            outline_size: OutlineSize::default(),
            text: String::new(),
            text_size: TextSize::default(),
            text_color: Some("#000000".to_string()),
            text_background_color: None,
            text_position: TextPosition::default(),
            encoded_image: String::new(),
            encoded_image_type: String::new(),
            encoded_image_name: String::new(),
            x: 0.0,
            y: 0.0,
            translate_x: 0.0,
            translate_y: 0.0,
            width: 0.0,
            height: 0.0,
            transform: String::new(),
            image_settings: None,
            extra: serde_json::Map::new(),
        }
    }
}

impl IconSettings {
    /// Creates settings with the editor defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shape.
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    /// Sets the size preset.
    pub fn with_size(mut self, size: IconSize) -> Self {
        self.size = size;
        self
    }

    /// Sets the fill color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the outline color and thickness.
    pub fn with_outline(mut self, color: impl Into<String>, size: OutlineSize) -> Self {
        self.outline_color = Some(color.into());
        self.outline_size = size;
        self
    }

    /// Removes the outline.
    pub fn without_outline(mut self) -> Self {
        self.outline_color = None;
        self
    }

    /// Sets the caption text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the caption size and position.
    pub fn with_text_layout(mut self, size: TextSize, position: TextPosition) -> Self {
        self.text_size = size;
        self.text_position = position;
        self
    }

    /// Sets the caption background color.
    pub fn with_text_background(mut self, color: impl Into<String>) -> Self {
        self.text_background_color = Some(color.into());
        self
    }

    /// Embeds an image given as a data URI, with its mime type and file name.
    pub fn with_encoded_image(
        mut self,
        data_uri: impl Into<String>,
        mime: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.encoded_image = data_uri.into();
        self.encoded_image_type = mime.into();
        self.encoded_image_name = name.into();
        self
    }

    /// Returns true if a caption will be drawn.
    ///
    /// Whitespace counts as text; only the empty string draws nothing.
    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    /// Returns true if an image will be embedded.
    pub fn has_image(&self) -> bool {
        !self.encoded_image.is_empty()
    }

    /// Serializes the settings to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the settings to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes settings from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Tests
// ============================================================================
