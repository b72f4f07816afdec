//! Where raw stroke geometry comes from.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{OutlineError, Result};
use crate::model::ViewBox;

/// Raw path strings of one glyph, in drawing order, plus its view box.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceGlyph {
    pub paths: Vec<String>,
    pub view_box: ViewBox,
}

pub trait GlyphSource {
    /// Fails with [`OutlineError::SourceNotFound`] when no geometry exists.
    fn load(&self, glyph: &str) -> Result<SourceGlyph>;
}

/// Reads `<root>/<glyph>.svg` drawings.
#[derive(Clone, Debug)]
pub struct SvgDirectorySource {
    root: PathBuf,
    fallback: ViewBox,
}

impl SvgDirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            fallback: ViewBox::DEFAULT,
        }
    }

    /// View box used when a drawing declares none (or a malformed one).
    pub fn with_fallback(mut self, vb: ViewBox) -> Self {
        self.fallback = vb;
        self
    }

    pub fn path_for(&self, glyph: &str) -> PathBuf {
        self.root.join(format!("{glyph}.svg"))
    }
}

impl GlyphSource for SvgDirectorySource {
    fn load(&self, glyph: &str) -> Result<SourceGlyph> {
        let path = self.path_for(glyph);
        if !path.is_file() {
            return Err(OutlineError::SourceNotFound(path.display().to_string()));
        }
        let text = std::fs::read_to_string(&path)?;
        let g = crate::svg::read_svg_impl(&text, self.fallback)?;
        debug!(glyph, paths = g.paths.len(), "loaded svg");
        Ok(g)
    }
}

/// In-memory geometry, keyed by glyph.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    glyphs: HashMap<String, SourceGlyph>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, glyph: &str, paths: &[&str], view_box: ViewBox) {
        self.glyphs.insert(
            glyph.to_string(),
            SourceGlyph {
                paths: paths.iter().map(|p| p.to_string()).collect(),
                view_box,
            },
        );
    }

    pub fn remove(&mut self, glyph: &str) -> Option<SourceGlyph> {
        self.glyphs.remove(glyph)
    }
}

impl GlyphSource for MemorySource {
    fn load(&self, glyph: &str) -> Result<SourceGlyph> {
        self.glyphs
            .get(glyph)
            .cloned()
            .ok_or_else(|| OutlineError::SourceNotFound(glyph.to_string()))
    }
}
