use tracing::debug;

use crate::config::OutlineConfig;
use crate::error::{OutlineError, Result};
use crate::geometry::normalize::normalize_segments;
use crate::geometry::transform::SubscriptTransform;
use crate::model::{Circle, Segment, Stroke, ViewBox};
use crate::path::interpret::parse_path;

/// Wrap normalized segments into a stroke with start/end hints and the
/// configured default rules.
pub fn build_stroke(id: u32, segments: Vec<Segment>, cfg: &OutlineConfig) -> Result<Stroke> {
    let (first, last) = match (segments.first(), segments.last()) {
        (Some(f), Some(l)) => (f.start(), l.end()),
        _ => return Err(OutlineError::EmptyStrokeData(format!("stroke {id}"))),
    };
    Ok(Stroke {
        id,
        start_hint: Circle::around(first, cfg.start_hint_radius),
        end_hint: Circle::around(last, cfg.end_hint_radius),
        path_hint: segments,
        arrow_hints: Vec::new(),
        rules: cfg.rules,
    })
}

/// Parse every path of one glyph into strokes numbered from 1. When
/// `transform` is given it is applied in native space before normalizing.
pub fn build_strokes(
    paths: &[String],
    vb: &ViewBox,
    transform: Option<&SubscriptTransform>,
    cfg: &OutlineConfig,
) -> Result<Vec<Stroke>> {
    let mut strokes = Vec::with_capacity(paths.len());
    for (i, d) in paths.iter().enumerate() {
        let id = i as u32 + 1;
        let mut native = parse_path(d)?;
        if let Some(t) = transform {
            native = t.apply_segments(&native, vb);
        }
        debug!(stroke = id, segments = native.len(), "parsed stroke");
        strokes.push(build_stroke(id, normalize_segments(&native, vb), cfg)?);
    }
    Ok(strokes)
}
