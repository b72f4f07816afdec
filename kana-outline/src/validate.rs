//! Audit of a produced outline against the source drawings.
//!
//! Unlike conversion, validation never stops early: every glyph in the
//! canonical order is checked and all violations are collected. Records are
//! read loosely so an incomplete record becomes violations, not a parse error.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::assemble::source_stroke_count;
use crate::model::{CharacterDef, Circle, Stroke};
use crate::source::GlyphSource;
use crate::tables::canonical_order;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Violation {
    #[error("Missing kana definition: {glyph}")]
    Missing { glyph: String },

    #[error("Kana {glyph} has no strokes.")]
    NoStrokes { glyph: String },

    #[error("Kana {glyph} stroke {stroke} missing start/end hints.")]
    MissingHint { glyph: String, stroke: u32 },

    #[error("Kana {glyph} stroke {stroke} has empty path_hint.")]
    EmptyPath { glyph: String, stroke: u32 },

    #[error("Kana {glyph} stroke ids {ids:?} are not 1..={expected}.")]
    NonSequentialIds {
        glyph: String,
        ids: Vec<u32>,
        expected: usize,
    },

    #[error("Kana {glyph} has no stroke_count.")]
    MissingStrokeCount { glyph: String },

    #[error("Kana {glyph} stroke_count ({declared}) does not match SVG ({expected}).")]
    StrokeCountMismatch {
        glyph: String,
        declared: usize,
        expected: usize,
    },

    #[error("Kana {glyph} stroke list ({listed}) does not match SVG ({expected}).")]
    StrokeListMismatch {
        glyph: String,
        listed: usize,
        expected: usize,
    },

    #[error("Kana {glyph} source unavailable: {reason}")]
    SourceUnavailable { glyph: String, reason: String },
}

// Absent, null or mistyped values all become `None`.
fn lenient<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let v = Value::deserialize(d)?;
    Ok(serde_json::from_value(v).ok())
}

fn array_len<'de, D: Deserializer<'de>>(d: D) -> Result<Option<usize>, D::Error> {
    Ok(Value::deserialize(d)?.as_array().map(Vec::len))
}

fn lenient_strokes<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<AuditStroke>>, D::Error> {
    let v = Value::deserialize(d)?;
    Ok(v.as_array().map(|items| {
        items
            .iter()
            .map(|s| serde_json::from_value(s.clone()).unwrap_or_default())
            .collect()
    }))
}

/// One outline record as the validator sees it.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AuditRecord {
    #[serde(default, rename = "kana", deserialize_with = "lenient")]
    pub glyph: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub stroke_count: Option<usize>,
    #[serde(default, deserialize_with = "lenient_strokes")]
    pub strokes: Option<Vec<AuditStroke>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AuditStroke {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub start_hint: Option<Circle>,
    #[serde(default, deserialize_with = "lenient")]
    pub end_hint: Option<Circle>,
    /// Number of entries in `path_hint`.
    #[serde(default, rename = "path_hint", deserialize_with = "array_len")]
    pub path_segments: Option<usize>,
}

impl From<&Stroke> for AuditStroke {
    fn from(s: &Stroke) -> Self {
        Self {
            id: Some(s.id),
            start_hint: Some(s.start_hint),
            end_hint: Some(s.end_hint),
            path_segments: Some(s.path_hint.len()),
        }
    }
}

impl From<&CharacterDef> for AuditRecord {
    fn from(def: &CharacterDef) -> Self {
        Self {
            glyph: Some(def.glyph.clone()),
            stroke_count: Some(def.stroke_count),
            strokes: Some(def.strokes.iter().map(AuditStroke::from).collect()),
        }
    }
}

/// Parse an outline artifact body. Only the top level must be a JSON array;
/// entries that are not objects become empty records.
pub fn audit_records_from_str(text: &str) -> serde_json::Result<Vec<AuditRecord>> {
    let items: Vec<Value> = serde_json::from_str(text)?;
    Ok(items
        .into_iter()
        .map(|v| serde_json::from_value(v).unwrap_or_default())
        .collect())
}

/// All violations found by [`validate`].
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_valid() {
            0
        } else {
            1
        }
    }

    fn push(&mut self, v: Violation) {
        warn!("{v}");
        self.violations.push(v);
    }
}

fn hint_ok(c: Option<&Circle>) -> bool {
    c.is_some_and(|c| c.x.is_finite() && c.y.is_finite() && c.radius.is_finite() && c.radius > 0.0)
}

fn check_strokes(glyph: &str, strokes: &[AuditStroke], report: &mut ValidationReport) {
    // 0 never occurs in a valid numbering, so it stands in for a missing id.
    let ids: Vec<u32> = strokes.iter().map(|s| s.id.unwrap_or(0)).collect();
    for (stroke, &id) in strokes.iter().zip(&ids) {
        if !hint_ok(stroke.start_hint.as_ref()) || !hint_ok(stroke.end_hint.as_ref()) {
            report.push(Violation::MissingHint {
                glyph: glyph.to_string(),
                stroke: id,
            });
        }
        if stroke.path_segments.unwrap_or(0) == 0 {
            report.push(Violation::EmptyPath {
                glyph: glyph.to_string(),
                stroke: id,
            });
        }
    }
    if !ids.iter().enumerate().all(|(i, id)| *id as usize == i + 1) {
        report.push(Violation::NonSequentialIds {
            glyph: glyph.to_string(),
            ids,
            expected: strokes.len(),
        });
    }
}

/// Check `defs` against the canonical ordering and the source geometry.
pub fn validate(defs: &[CharacterDef], source: &dyn GlyphSource) -> ValidationReport {
    let records: Vec<AuditRecord> = defs.iter().map(AuditRecord::from).collect();
    validate_records(&records, source)
}

/// Same as [`validate`] over loosely read records. Records without a glyph
/// cannot be matched and are ignored.
pub fn validate_records(records: &[AuditRecord], source: &dyn GlyphSource) -> ValidationReport {
    let mut report = ValidationReport::default();
    let lookup: HashMap<&str, &AuditRecord> = records
        .iter()
        .filter_map(|r| r.glyph.as_deref().map(|g| (g, r)))
        .collect();

    for glyph in canonical_order() {
        let Some(record) = lookup.get(glyph) else {
            report.push(Violation::Missing {
                glyph: glyph.to_string(),
            });
            continue;
        };
        let strokes = match record.strokes.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => {
                report.push(Violation::NoStrokes {
                    glyph: glyph.to_string(),
                });
                continue;
            }
        };
        check_strokes(glyph, strokes, &mut report);

        let expected = match source_stroke_count(glyph, source) {
            Ok(n) => n,
            Err(e) => {
                report.push(Violation::SourceUnavailable {
                    glyph: glyph.to_string(),
                    reason: e.to_string(),
                });
                continue;
            }
        };
        match record.stroke_count {
            None => report.push(Violation::MissingStrokeCount {
                glyph: glyph.to_string(),
            }),
            Some(declared) if declared != expected => {
                report.push(Violation::StrokeCountMismatch {
                    glyph: glyph.to_string(),
                    declared,
                    expected,
                })
            }
            Some(_) => {}
        }
        if strokes.len() != expected {
            report.push(Violation::StrokeListMismatch {
                glyph: glyph.to_string(),
                listed: strokes.len(),
                expected,
            });
        }
    }
    report
}
