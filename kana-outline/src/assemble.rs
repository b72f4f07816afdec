use tracing::info;

use crate::compose::compose_compound;
use crate::config::OutlineConfig;
use crate::error::{OutlineError, Result};
use crate::model::CharacterDef;
use crate::source::GlyphSource;
use crate::stroke::build_strokes;
use crate::tables::{canonical_order, romanized_label, split_compound};

/// Build the record for one glyph. Compound glyphs go through
/// [`compose_compound`]; everything else is read from its own drawing.
pub fn build_character(
    glyph: &str,
    source: &dyn GlyphSource,
    cfg: &OutlineConfig,
) -> Result<CharacterDef> {
    let label = romanized_label(glyph)?;
    let strokes = if split_compound(glyph).is_some() {
        compose_compound(glyph, source, cfg)?
    } else {
        let src = source.load(glyph)?;
        let strokes = build_strokes(&src.paths, &src.view_box, None, cfg)?;
        if strokes.is_empty() {
            return Err(OutlineError::EmptyStrokeData(format!("'{glyph}' has no strokes")));
        }
        strokes
    };
    info!(glyph, strokes = strokes.len(), "built character");
    Ok(CharacterDef::new(glyph, label, strokes))
}

/// Build every glyph in canonical order, stopping at the first failure.
pub fn build_all(source: &dyn GlyphSource, cfg: &OutlineConfig) -> Result<Vec<CharacterDef>> {
    canonical_order()
        .map(|glyph| build_character(glyph, source, cfg))
        .collect()
}

/// Number of strokes the source drawings declare for `glyph`, summing both
/// components of a compound glyph.
pub fn source_stroke_count(glyph: &str, source: &dyn GlyphSource) -> Result<usize> {
    match split_compound(glyph) {
        Some((base, small)) => Ok(source.load(base)?.paths.len() + source.load(small)?.paths.len()),
        None => Ok(source.load(glyph)?.paths.len()),
    }
}
