//! Metadata layer: the settings embedded in the markup for later re-editing.
//!
//! The composed icon is its own save file. [`build_metadata`] writes the full
//! settings as JSON into a `<metadata>` element and [`parse_metadata`] reads
//! them back out of previously composed markup.

use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::Event;

use crate::element::Element;
use crate::error::Result;
use crate::settings::IconSettings;

/// Builds the `<metadata>` element holding the serialized settings.
pub fn build_metadata(settings: &IconSettings) -> Result<Element> {
    Ok(Element::new("metadata").text(settings.to_json()?))
}

/// Recovers the settings embedded in composed markup.
///
/// Missing or unreadable metadata means there are no prior settings to load,
/// so this returns `None` instead of an error.
pub fn parse_metadata(markup: &str) -> Option<IconSettings> {
    let json = match extract_metadata(markup) {
        Ok(Some(json)) => json,
        Ok(None) => {
            tracing::debug!("no metadata element in icon markup");
            return None;
        }
        Err(err) => {
            tracing::warn!(error = %err, "icon markup could not be read");
            return None;
        }
    };

    match IconSettings::from_json(&json) {
        Ok(settings) => Some(settings),
        Err(err) => {
            tracing::warn!(error = %err, "icon metadata is not valid settings JSON");
            None
        }
    }
}

/// Returns the unescaped text of the first `<metadata>` element, if any.
fn extract_metadata(markup: &str) -> Result<Option<String>> {
    let mut reader = Reader::from_str(markup);

    loop {
        match reader.read_event()? {
            Event::Start(start) if start.name().as_ref() == b"metadata" => {
                let raw = reader.read_text(start.name())?;
                let text = unescape(&raw).map_err(quick_xml::Error::from)?;
                return Ok(Some(text.trim().to_string()));
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}
