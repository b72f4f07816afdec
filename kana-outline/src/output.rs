//! The outline artifact: a JSON array of character records.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{OutlineError, Result};
use crate::model::CharacterDef;
use crate::validate::{audit_records_from_str, AuditRecord};

/// Pretty-printed JSON with a trailing newline. Non-ASCII is written as-is.
pub fn to_json_string(defs: &[CharacterDef]) -> Result<String> {
    let mut text = serde_json::to_string_pretty(defs)?;
    text.push('\n');
    Ok(text)
}

pub fn write_outline(path: &Path, defs: &[CharacterDef]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, to_json_string(defs)?)?;
    info!(path = %path.display(), records = defs.len(), "wrote outline");
    Ok(())
}

fn read_artifact(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(OutlineError::SourceNotFound(path.display().to_string()));
    }
    Ok(fs::read_to_string(path)?)
}

pub fn read_outline(path: &Path) -> Result<Vec<CharacterDef>> {
    Ok(serde_json::from_str(&read_artifact(path)?)?)
}

/// Read an artifact for auditing. Incomplete records are kept.
pub fn read_outline_records(path: &Path) -> Result<Vec<AuditRecord>> {
    Ok(audit_records_from_str(&read_artifact(path)?)?)
}

/// Replace the record for `def.glyph` in an existing outline, in place.
pub fn replace_record(defs: &mut [CharacterDef], def: CharacterDef) -> Result<()> {
    let slot = defs
        .iter_mut()
        .find(|d| d.glyph == def.glyph)
        .ok_or_else(|| OutlineError::RecordNotFound(def.glyph.clone()))?;
    *slot = def;
    Ok(())
}

/// Rewrite `path` with `def` swapped in. The artifact must already exist and
/// already hold a record for the glyph.
pub fn update_outline(path: &Path, def: CharacterDef) -> Result<()> {
    let mut defs = read_outline(path)?;
    replace_record(&mut defs, def)?;
    write_outline(path, &defs)
}
