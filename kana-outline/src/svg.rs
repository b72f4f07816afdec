use tracing::warn;
use xml::reader::{EventReader, XmlEvent};

use crate::error::Result;
use crate::model::ViewBox;
use crate::source::SourceGlyph;

const STROKES_ATTR: &str = "data-strokesvg";
const STROKES_VALUE: &str = "strokes";

fn attr<'a>(attributes: &'a [xml::attribute::OwnedAttribute], name: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|a| a.name.local_name == name)
        .map(|a| a.value.as_str())
}

/// Read the view box and stroke paths of one glyph drawing.
///
/// Stroke paths are the `d` attributes of `path` elements nested (at any
/// depth) in the first `<g data-strokesvg="strokes">`, in document order.
pub fn read_svg_impl(text: &str, fallback: ViewBox) -> Result<SourceGlyph> {
    let parser = EventReader::new(text.as_bytes());
    let mut view_box = None;
    let mut seen_root = false;
    let mut depth = 0usize;
    let mut group_depth: Option<usize> = None;
    let mut group_done = false;
    let mut paths = Vec::new();
    for event in parser {
        match event? {
            XmlEvent::StartElement {
                name, attributes, ..
            } => {
                depth += 1;
                if !seen_root {
                    seen_root = true;
                    let raw = attr(&attributes, "viewBox").or_else(|| attr(&attributes, "viewbox"));
                    view_box = match raw {
                        Some(raw) => {
                            let parsed = ViewBox::parse(raw);
                            if parsed.is_none() {
                                warn!(view_box = raw, "malformed viewBox, using default");
                            }
                            parsed
                        }
                        None => {
                            warn!("no viewBox, using default");
                            None
                        }
                    };
                }
                match group_depth {
                    Some(_) if name.local_name == "path" => {
                        if let Some(d) = attr(&attributes, "d").filter(|d| !d.trim().is_empty()) {
                            paths.push(d.to_string());
                        }
                    }
                    None if !group_done
                        && name.local_name == "g"
                        && attr(&attributes, STROKES_ATTR) == Some(STROKES_VALUE) =>
                    {
                        group_depth = Some(depth);
                    }
                    _ => {}
                }
            }
            XmlEvent::EndElement { .. } => {
                if group_depth == Some(depth) {
                    group_depth = None;
                    group_done = true;
                }
                depth = depth.saturating_sub(1);
            }
            _ => {}
        }
    }
    Ok(SourceGlyph {
        paths,
        view_box: view_box.unwrap_or(fallback),
    })
}
