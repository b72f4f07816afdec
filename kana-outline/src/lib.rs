//! Converts hand-authored kana stroke drawings into normalized stroke
//! outlines for handwriting practice.
//!
//! Pipeline: path string -> tokens -> segments (native space) -> segments
//! (unit square) -> strokes -> [`CharacterDef`](model::CharacterDef).

pub mod assemble;
pub mod compose;
pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod source;
pub mod stroke;
pub mod tables;
pub mod validate;
pub mod geometry {
    pub mod limits;
    pub mod normalize;
    pub mod tolerance;
    pub mod transform;
}
pub mod path {
    pub mod interpret;
    pub mod tokenize;
}
mod svg;

pub use assemble::{build_all, build_character};
pub use config::OutlineConfig;
pub use error::{OutlineError, Result};
pub use model::{CharacterDef, Circle, MatchRules, Point, Segment, Stroke, ViewBox};
pub use path::interpret::parse_path;
pub use source::{GlyphSource, MemorySource, SourceGlyph, SvgDirectorySource};
pub use validate::{validate, validate_records, AuditRecord, ValidationReport, Violation};
