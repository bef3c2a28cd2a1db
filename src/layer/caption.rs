//! Caption layer: text block and its background pill.
//!
//! Text is not measured against real font metrics. Widths are estimated from
//! an average glyph width for the bundled bold font, which is close enough to
//! center the block and size its background.

use crate::element::Element;
use crate::geometry::{Rect, fmt_num};
use crate::settings::{IconSettings, TextPosition};

/// The single font family used for captions.
pub const FONT_FAMILY: &str = "Lato Extended";

/// Caption color used when the settings carry none.
pub const DEFAULT_TEXT_COLOR: &str = "#000000";

const MARGIN_TOP: f64 = 6.0;
const MARGIN_BOTTOM: f64 = 10.0;
const PILL_PADDING_X: f64 = 5.0;
const PILL_PADDING_Y: f64 = 5.0;
const PILL_RADIUS: f64 = 4.0;

const GLYPH_WIDTH_RATIO: f64 = 0.6;
const ASCENT_RATIO: f64 = 0.8;
const LINE_GAP_RATIO: f64 = 0.25;

/// Computed placement of a caption.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionLayout {
    pub lines: Vec<String>,
    pub font_size: f64,
    /// Distance between consecutive baselines.
    pub line_advance: f64,
    /// Left edge of the text block.
    pub text_x: f64,
    /// Baseline of the first line.
    pub baseline_y: f64,
    /// Background pill.
    pub background: Rect,
}

/// Height of the text block alone; zero for empty text.
fn text_height(settings: &IconSettings) -> f64 {
    if !settings.has_text() {
        return 0.0;
    }
    let font_size = settings.text_size.font_size() as f64;
    let lines = caption_lines(&settings.text).len() as f64;
    lines * font_size + (lines - 1.0) * font_size * LINE_GAP_RATIO
}

fn pill_height(settings: &IconSettings) -> f64 {
    text_height(settings) + 2.0 * PILL_PADDING_Y
}

/// Splits on `\n` only, keeping every character of each line.
fn caption_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

/// Extra height the caption band adds below the shape.
///
/// Only the `below` position reserves a band, and it does so even for empty
/// text so the icon keeps a stable height while the user starts typing.
pub fn band_height(settings: &IconSettings) -> f64 {
    if settings.text_position.overlays_shape() {
        return 0.0;
    }
    MARGIN_TOP + pill_height(settings) + MARGIN_BOTTOM
}

/// Lays out the caption, or returns `None` for empty text.
pub fn layout_caption(settings: &IconSettings) -> Option<CaptionLayout> {
    if !settings.has_text() {
        return None;
    }

    let dimension = settings.size.pixels() as f64;
    let font_size = settings.text_size.font_size() as f64;
    let lines = caption_lines(&settings.text);
    let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as f64;
    let block_width = widest * font_size * GLYPH_WIDTH_RATIO;
    let pill_height = pill_height(settings);

    let top = match settings.text_position {
        TextPosition::Below => dimension + MARGIN_TOP,
        TextPosition::Middle => (dimension - pill_height) / 2.0,
        TextPosition::BottomThird => {
            let third = dimension / 3.0;
            2.0 * third + (third - pill_height) / 2.0
        }
    };

    let text_x = (dimension - block_width) / 2.0;
    let background = Rect::new(
        text_x - PILL_PADDING_X,
        top,
        block_width + 2.0 * PILL_PADDING_X,
        pill_height,
    );

    Some(CaptionLayout {
        lines,
        font_size,
        line_advance: font_size * (1.0 + LINE_GAP_RATIO),
        text_x,
        baseline_y: top + PILL_PADDING_Y + font_size * ASCENT_RATIO,
        background,
    })
}

/// Builds the background pill and text elements, in paint order.
///
/// The text content of the `<text>` element is exactly the caption string:
/// lines sit in `<tspan>`s separated by `\n` text nodes, and whitespace is
/// preserved.
pub fn build_caption(settings: &IconSettings) -> Option<[Element; 2]> {
    let layout = layout_caption(settings)?;

    // A missing background still gets a valid paint value instead of `fill=""`.
    let background = Element::new("path")
        .attr("d", layout.background.rounded_path(PILL_RADIUS))
        .attr(
            "fill",
            settings.text_background_color.as_deref().unwrap_or("none"),
        );

    let x = fmt_num(layout.text_x);
    let mut text = Element::new("text")
        .attr(
            "fill",
            settings.text_color.as_deref().unwrap_or(DEFAULT_TEXT_COLOR),
        )
        .attr("font-family", FONT_FAMILY)
        .attr("font-size", fmt_num(layout.font_size))
        .attr("font-weight", "bold")
        .attr("x", x.clone())
        .attr("xml:space", "preserve")
        .attr("y", fmt_num(layout.baseline_y));

    for (i, line) in layout.lines.iter().enumerate() {
        let dy = if i == 0 { 0.0 } else { layout.line_advance };
        if i > 0 {
            text.push_text("\n");
        }
        text.push(
            Element::new("tspan")
                .attr("dy", fmt_num(dy))
                .attr("x", x.clone())
                .text(line.as_str()),
        );
    }

    Some([background, text])
}
