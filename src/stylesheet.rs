//! Inline stylesheet carrying the caption font.
//!
//! Icons are usually viewed outside the editor, where the caption font is
//! not installed, so the font is inlined as a base64 data URI.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;

use crate::element::Element;
use crate::error::Result;
use crate::font::{FontAsset, FontSource};
use crate::layer::FONT_FAMILY;

/// Fetches the caption font once and builds a `<style>` element embedding it.
///
/// A failed fetch is returned as-is. Nothing is retried or cached, so every
/// call fetches again.
///
/// # Example
///
/// ```
/// use icon_maker::{FontAsset, StaticFontSource, build_stylesheet};
///
/// # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// let source = StaticFontSource::new(FontAsset::default());
/// let style = rt.block_on(build_stylesheet(&source)).unwrap();
/// assert!(style.contains("src: url(data:;base64,);"));
/// ```
pub async fn build_stylesheet<S>(source: &S) -> Result<String>
where
    S: FontSource + ?Sized,
{
    let asset = source.fetch().await?;
    let markup = stylesheet_element(&asset).to_markup()?;
    tracing::debug!(font_bytes = asset.bytes.len(), "built font stylesheet");
    Ok(markup)
}

/// Builds the `<style>` element for an already fetched font.
pub fn stylesheet_element(asset: &FontAsset) -> Element {
    Element::new("style")
        .attr("type", "text/css")
        .text(font_face_rule(asset))
}

fn font_face_rule(asset: &FontAsset) -> String {
    format!(
        "@font-face {{font-family: \"{FONT_FAMILY}\";font-weight: bold;src: url(data:{mime};base64,{data});}}",
        mime = asset.mime.as_deref().unwrap_or(""),
        data = BASE64_STANDARD.encode(&asset.bytes),
    )
}
