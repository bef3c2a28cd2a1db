//! Embedded image layer.
//!
//! The encoded payload is inlined as-is. Nothing here decodes or checks it.

use crate::element::Element;
use crate::geometry::fmt_num;
use crate::settings::IconSettings;

use super::shape::CLIP_PATH_ID;

/// Builds the clipped image group, or `None` when no image is embedded.
pub fn build_image(settings: &IconSettings) -> Option<Element> {
    if !settings.has_image() {
        return None;
    }

    let mut image = Element::new("image")
        .attr("href", settings.encoded_image.as_str())
        .attr("x", fmt_num(settings.x))
        .attr("y", fmt_num(settings.y))
        .attr("width", fmt_num(settings.width))
        .attr("height", fmt_num(settings.height));

    if let Some(transform) = placement_transform(settings) {
        image.set_attr("transform", transform);
    }

    Some(
        Element::new("g")
            .attr("clip-path", format!("url(#{CLIP_PATH_ID})"))
            .child(image),
    )
}

/// An explicit transform wins; otherwise a non-zero translate pair is used.
fn placement_transform(settings: &IconSettings) -> Option<String> {
    if !settings.transform.is_empty() {
        return Some(settings.transform.clone());
    }
    if settings.translate_x != 0.0 || settings.translate_y != 0.0 {
        return Some(format!(
            "translate({},{})",
            fmt_num(settings.translate_x),
            fmt_num(settings.translate_y)
        ));
    }
    None
}
