//! Contracted-sound glyphs: a base kana followed by a small subscript kana,
//! drawn as one character cell.

use tracing::debug;

use crate::config::OutlineConfig;
use crate::error::{OutlineError, Result};
use crate::model::Stroke;
use crate::source::GlyphSource;
use crate::stroke::build_strokes;
use crate::tables::split_compound;

/// Build the combined stroke list of a compound glyph.
///
/// Both components are parsed from their own drawings. The small one is
/// repositioned by `cfg.subscript` in its native space, then both are
/// normalized against their own view boxes and concatenated, base first,
/// with ids renumbered `1..=n`.
pub fn compose_compound(
    glyph: &str,
    source: &dyn GlyphSource,
    cfg: &OutlineConfig,
) -> Result<Vec<Stroke>> {
    let (base, small) =
        split_compound(glyph).ok_or_else(|| OutlineError::UnknownGlyph(glyph.to_string()))?;

    let base_src = source.load(base)?;
    let small_src = source.load(small)?;
    let base_strokes = build_strokes(&base_src.paths, &base_src.view_box, None, cfg)?;
    let small_strokes = build_strokes(
        &small_src.paths,
        &small_src.view_box,
        Some(&cfg.subscript),
        cfg,
    )?;
    if base_strokes.is_empty() {
        return Err(OutlineError::EmptyStrokeData(format!("'{base}' has no strokes")));
    }
    if small_strokes.is_empty() {
        return Err(OutlineError::EmptyStrokeData(format!("'{small}' has no strokes")));
    }
    debug!(
        glyph,
        base = base_strokes.len(),
        small = small_strokes.len(),
        "composing"
    );
    Ok(renumber(base_strokes.into_iter().chain(small_strokes)))
}

fn renumber(strokes: impl Iterator<Item = Stroke>) -> Vec<Stroke> {
    strokes
        .enumerate()
        .map(|(i, mut s)| {
            s.id = i as u32 + 1;
            s
        })
        .collect()
}
