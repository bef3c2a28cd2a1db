//! Icon composition: settings in, SVG markup out.
//!
//! Every function here is a pure function of its arguments. Nothing is cached
//! between calls, so composition is safe to run from any number of threads.

use crate::element::{Element, SVG_NS};
use crate::error::Result;
use crate::geometry::{fmt_num, px};
use crate::layer::{band_height, build_caption, build_clip_path, build_image, build_metadata, build_shape};
use crate::settings::IconSettings;

/// Inline style applied to the outer element of a preview render.
pub const PREVIEW_STYLE: &str = "padding: 16px";

// ============================================================================
// RenderOptions
// ============================================================================

/// Options that change how settings are rendered without being part of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Live-preview render: no metadata, shape fill forced to `none`.
    pub is_preview: bool,
}

impl RenderOptions {
    /// Options for a persisted icon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for a live preview.
    pub fn preview() -> Self {
        Self { is_preview: true }
    }
}

// ============================================================================
// Builders
// ============================================================================

/// Builds the square viewport that holds the shape.
///
/// # Example
///
/// ```
/// use icon_maker::{IconSettings, IconSize, build_svg_wrapper};
///
/// let wrapper = build_svg_wrapper(&IconSettings::new().with_size(IconSize::Large));
/// assert_eq!(
///     wrapper.to_string(),
///     r#"<svg fill="none" height="218px" viewBox="0 0 218 218" width="218px" x="0"/>"#
/// );
/// ```
pub fn build_svg_wrapper(settings: &IconSettings) -> Element {
    let dimension = settings.size.pixels() as f64;
    Element::new("svg")
        .attr("fill", "none")
        .attr("width", px(dimension))
        .attr("height", px(dimension))
        .attr("viewBox", format!("0 0 {0} {0}", fmt_num(dimension)))
        .attr("x", "0")
}

/// Builds the `<g>` that carries the shape's fill and stroke.
///
/// The fill is `none` when there is no color or when rendering a preview;
/// preview wins over an explicit color. Stroke attributes appear only when an
/// outline color is set, and preview does not affect them.
pub fn build_group(settings: &IconSettings, options: &RenderOptions) -> Element {
    let fill = match &settings.color {
        Some(color) if !options.is_preview => color.as_str(),
        _ => "none",
    };

    let mut group = Element::new("g").attr("fill", fill);
    if let Some(outline) = &settings.outline_color {
        group.set_attr("stroke", outline.as_str());
        group.set_attr("stroke-width", settings.outline_size.stroke_width().to_string());
    }
    group
}

/// Total height of the composed icon: the shape plus any caption band.
pub fn container_height(settings: &IconSettings) -> f64 {
    settings.size.pixels() as f64 + band_height(settings)
}

/// Composes the complete icon tree.
///
/// Same as [`build_svg`] but stops before serialization, which is handy when
/// the caller wants to inspect or extend the tree.
pub fn build_svg_tree(settings: &IconSettings, options: &RenderOptions) -> Result<Element> {
    let width = settings.size.pixels() as f64;
    let height = container_height(settings);

    let mut root = Element::new("svg")
        .attr("xmlns", SVG_NS)
        .attr("fill", "none")
        .attr("width", px(width))
        .attr("height", px(height))
        .attr("viewBox", format!("0 0 {} {}", fmt_num(width), fmt_num(height)));

    let mut group = build_group(settings, options);
    group.push(build_clip_path(settings));
    group.push(build_shape(settings));
    if let Some(image) = build_image(settings) {
        group.push(image);
    }
    root.push(build_svg_wrapper(settings).child(group));

    if let Some(caption) = build_caption(settings) {
        for element in caption {
            root.push(element);
        }
    }

    if options.is_preview {
        root.set_attr("style", PREVIEW_STYLE);
    } else {
        root.prepend(build_metadata(settings)?);
    }

    Ok(root)
}

/// Composes the icon and serializes it to markup.
///
/// Unless `options.is_preview` is set, the markup embeds the full settings so
/// [`parse_metadata`](crate::parse_metadata) can restore them later.
///
/// # Example
///
/// ```
/// use icon_maker::{IconSettings, RenderOptions, Shape, build_svg, parse_metadata};
///
/// let settings = IconSettings::new().with_shape(Shape::Circle).with_color("#000");
/// let markup = build_svg(&settings, &RenderOptions::new()).unwrap();
///
/// assert!(markup.starts_with("<svg "));
/// assert_eq!(parse_metadata(&markup), Some(settings));
/// ```
pub fn build_svg(settings: &IconSettings, options: &RenderOptions) -> Result<String> {
    let tree = build_svg_tree(settings, options)?;
    let markup = tree.to_markup()?;

    tracing::debug!(
        shape = ?settings.shape,
        size = ?settings.size,
        preview = options.is_preview,
        bytes = markup.len(),
        "composed icon"
    );

    Ok(markup)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::parse_metadata;
    use crate::settings::{IconSize, OutlineSize, Shape, TextPosition, TextSize};
    use pretty_assertions::assert_eq;

    const SIZES: [IconSize; 4] = [
        IconSize::XSmall,
        IconSize::Small,
        IconSize::Medium,
        IconSize::Large,
    ];

    fn group_settings() -> IconSettings {
        IconSettings::new()
            .with_color("#f00")
            .with_outline("#0f0", OutlineSize::Small)
    }

    fn icon_settings() -> IconSettings {
        IconSettings::new()
            .with_shape(Shape::Circle)
            .with_size(IconSize::Large)
            .with_color("#000")
            .with_outline("#fff", OutlineSize::Large)
    }

    #[test]
    fn wrapper_sizes() {
        for (size, d) in SIZES.into_iter().zip([74, 122, 158, 218]) {
            let wrapper = build_svg_wrapper(&IconSettings::new().with_size(size));
            assert_eq!(
                wrapper.to_string(),
                format!(
                    r#"<svg fill="none" height="{d}px" viewBox="0 0 {d} {d}" width="{d}px" x="0"/>"#
                )
            );
        }
    }

    #[test]
    fn group_with_color_and_outline() {
        assert_eq!(
            build_group(&group_settings(), &RenderOptions::new()).to_string(),
            r##"<g fill="#f00" stroke="#0f0" stroke-width="2"/>"##
        );
    }

    #[test]
    fn group_without_color() {
        let mut s = group_settings();
        s.color = None;
        assert_eq!(
            build_group(&s, &RenderOptions::new()).to_string(),
            r##"<g fill="none" stroke="#0f0" stroke-width="2"/>"##
        );
        assert_eq!(
            build_group(&s, &RenderOptions::preview()).to_string(),
            r##"<g fill="none" stroke="#0f0" stroke-width="2"/>"##
        );
    }

    #[test]
    fn preview_suppresses_explicit_fill_but_not_stroke() {
        let group = build_group(&group_settings(), &RenderOptions::preview());
        assert_eq!(group.get_attr("fill"), Some("none"));
        assert_eq!(group.get_attr("stroke"), Some("#0f0"));
    }

    #[test]
    fn group_without_outline_has_no_stroke_attributes() {
        let s = group_settings().without_outline();
        for options in [RenderOptions::new(), RenderOptions::preview()] {
            let group = build_group(&s, &options);
            assert!(group.get_attr("stroke").is_none());
            assert!(group.get_attr("stroke-width").is_none());
        }
        assert_eq!(
            build_group(&s, &RenderOptions::new()).to_string(),
            r##"<g fill="#f00"/>"##
        );
    }

    #[test]
    fn group_stroke_widths() {
        for (size, width) in [
            (OutlineSize::None, "0"),
            (OutlineSize::Small, "2"),
            (OutlineSize::Medium, "4"),
            (OutlineSize::Large, "8"),
        ] {
            let s = group_settings().with_outline("#0f0", size);
            let group = build_group(&s, &RenderOptions::new());
            assert_eq!(group.get_attr("stroke-width"), Some(width));
        }
    }

    #[test]
    fn preview_icon_markup() {
        let mut s = icon_settings();
        s.color = None;

        assert_eq!(
            build_svg(&s, &RenderOptions::preview()).unwrap(),
            concat!(
                r#"<svg fill="none" height="244px" style="padding: 16px" viewBox="0 0 218 244" width="218px" xmlns="http://www.w3.org/2000/svg">"#,
                r#"<svg fill="none" height="218px" viewBox="0 0 218 218" width="218px" x="0">"#,
                r##"<g fill="none" stroke="#fff" stroke-width="8">"##,
                r#"<clipPath id="clip-path-for-embed"><circle cx="109" cy="109" r="105"/></clipPath>"#,
                r#"<circle cx="109" cy="109" r="105"/>"#,
                "</g></svg></svg>",
            )
        );
    }

    #[test]
    fn icon_markup_starts_with_metadata() {
        let s = icon_settings();
        let markup = build_svg(&s, &RenderOptions::new()).unwrap();

        let expected_prefix = format!(
            r#"<svg fill="none" height="244px" viewBox="0 0 218 244" width="218px" xmlns="http://www.w3.org/2000/svg"><metadata>{}</metadata><svg "#,
            s.to_json().unwrap()
        );
        assert!(markup.starts_with(&expected_prefix), "{markup}");
        assert!(markup.contains(r##"<g fill="#000" stroke="#fff" stroke-width="8">"##));
    }

    #[test]
    fn preview_has_no_metadata() {
        let markup = build_svg(&icon_settings(), &RenderOptions::preview()).unwrap();
        assert!(!markup.contains("<metadata"));
        assert!(parse_metadata(&markup).is_none());
    }

    #[test]
    fn metadata_roundtrip() {
        let mut s = icon_settings()
            .with_text("Unit 3")
            .with_text_background("#eee")
            .with_encoded_image("data:image/svg+xml;base64,PHN2Zy8+", "image/svg+xml", "a.svg");
        s.translate_x = 12.5;
        s.image_settings = Some(serde_json::json!({ "mode": "SingleColor", "iconFillColor": "#123456" }));

        let markup = build_svg(&s, &RenderOptions::new()).unwrap();
        assert_eq!(parse_metadata(&markup), Some(s));
    }

    #[test]
    fn metadata_roundtrip_with_fractional_placement() {
        let mut s =
            icon_settings().with_encoded_image("data:image/png;base64,AAAA", "image/png", "x.png");
        s.x = 1.6786666666666665;
        s.y = 1.0 / 3.0;
        s.translate_x = 1.6926666666666665;
        s.translate_y = 1.3933333333333333;
        s.width = 2.0 / 3.0 * 218.0;
        s.height = 0.1 + 0.2;

        let markup = build_svg(&s, &RenderOptions::new()).unwrap();
        assert_eq!(parse_metadata(&markup), Some(s));
    }

    #[test]
    fn metadata_roundtrip_keeps_unmodeled_fields_and_padded_text() {
        let mut s = icon_settings().with_text("  Week 1\n Reading ");
        s.extra.insert("courseId".into(), serde_json::json!("c-42"));

        let markup = build_svg(&s, &RenderOptions::new()).unwrap();
        assert_eq!(parse_metadata(&markup), Some(s));
    }

    #[test]
    fn whitespace_text_grows_height() {
        let blank = build_svg_tree(&icon_settings().with_text(" "), &RenderOptions::new()).unwrap();
        assert_eq!(blank.get_attr("height"), Some("258px"));
        assert_eq!(blank.find("text").unwrap().text_content(), " ");
    }

    #[test]
    fn text_grows_height_and_adds_one_text_element() {
        let plain = icon_settings();
        let captioned = icon_settings().with_text("Hello World!");

        let plain_tree = build_svg_tree(&plain, &RenderOptions::new()).unwrap();
        let captioned_tree = build_svg_tree(&captioned, &RenderOptions::new()).unwrap();

        assert_eq!(plain_tree.get_attr("height"), Some("244px"));
        assert_eq!(captioned_tree.get_attr("height"), Some("258px"));
        assert_eq!(captioned_tree.get_attr("viewBox"), Some("0 0 218 258"));
        assert_eq!(captioned_tree.get_attr("width"), Some("218px"));

        let markup = captioned_tree.to_markup().unwrap();
        assert_eq!(markup.matches("<text ").count(), 1);
        assert!(markup.contains(">Hello World!</tspan></text>"));
        assert!(plain_tree.find("text").is_none());
    }

    #[test]
    fn caption_height_follows_text_size() {
        for size in [TextSize::Small, TextSize::Medium, TextSize::Large, TextSize::XLarge] {
            let base = icon_settings().with_text_layout(size, TextPosition::Below);
            let grown = container_height(&base.clone().with_text("A")) - container_height(&base);
            assert_eq!(grown, size.font_size() as f64);
        }
    }

    #[test]
    fn overlay_caption_keeps_square_viewport() {
        let s = icon_settings()
            .with_text("Hi")
            .with_text_layout(TextSize::Medium, TextPosition::Middle);
        let tree = build_svg_tree(&s, &RenderOptions::new()).unwrap();

        assert_eq!(tree.get_attr("viewBox"), Some("0 0 218 218"));
        assert!(tree.find("text").is_some());
    }

    #[test]
    fn image_nested_in_shape_group() {
        let s = icon_settings().with_encoded_image("data:image/png;base64,AAAA", "image/png", "x.png");
        let tree = build_svg_tree(&s, &RenderOptions::new()).unwrap();

        let group = tree.find("g").unwrap();
        let names: Vec<_> = group.child_elements().map(Element::name).collect();
        assert_eq!(names, ["clipPath", "circle", "g"]);
        assert!(group.find("image").is_some());
    }

    #[test]
    fn composition_is_deterministic_and_pure() {
        let s = icon_settings().with_text("Same");
        let before = s.clone();

        let first = build_svg(&s, &RenderOptions::new()).unwrap();
        let second = build_svg(&s, &RenderOptions::new()).unwrap();

        assert_eq!(first, second);
        assert_eq!(s, before);
    }

    #[test]
    fn output_parses_as_svg() {
        use resvg::usvg::{Options, Tree};

        for shape in [
            Shape::Square,
            Shape::Circle,
            Shape::Triangle,
            Shape::Diamond,
            Shape::Pentagon,
            Shape::Hexagon,
            Shape::Octagon,
            Shape::Star,
        ] {
            for size in SIZES {
                let s = icon_settings()
                    .with_shape(shape)
                    .with_size(size)
                    .with_text("Label")
                    .with_text_background("#ffffff");
                for options in [RenderOptions::new(), RenderOptions::preview()] {
                    let markup = build_svg(&s, &options).unwrap();
                    let tree = Tree::from_str(&markup, &Options::default());
                    assert!(tree.is_ok(), "{shape:?} {size:?}: {markup}");
                }
            }
        }
    }
}
