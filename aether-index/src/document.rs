//! Deriving evidence documents from plain-text files.
//!
//! A text file becomes one document:
//!
//! - `id`: the filename stem
//! - `title`: the first non-blank line
//! - `summary`: the first blank-line-delimited paragraph after the title
//!   line, capped at [`SUMMARY_MAX_CHARS`] characters
//! - `body`: the whole trimmed text
//! - `tags`: the stem split on `_`, or [`DEFAULT_TAG`] if that yields nothing

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::Path;

use chrono::NaiveDate;

use crate::AdminError;
use aether_index_shared::EvidenceDocument;

/// Maximum summary length, in characters.
pub const SUMMARY_MAX_CHARS: usize = 500;

/// Tag used when the filename stem yields none.
pub const DEFAULT_TAG: &str = "example";

/// Read `path` as UTF-8 and derive a document from it.
pub fn read_document(path: &Path, published_at: NaiveDate) -> Result<EvidenceDocument, AdminError> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => {
            AdminError::not_found(format!("Text file not found: {}", path.display()))
        }
        kind => AdminError::from(io::Error::new(kind, format!("{}: {}", path.display(), e))),
    })?;
    document_from_text(path, &text, published_at)
}

/// Derive a document from the contents of a text file.
///
/// Line endings are normalized to `\n` before paragraphs are split.
pub fn document_from_text(
    path: &Path,
    text: &str,
    published_at: NaiveDate,
) -> Result<EvidenceDocument, AdminError> {
    let normalized = text.replace("\r\n", "\n");
    let raw = normalized.trim();
    if raw.is_empty() {
        return Err(AdminError::validation(format!(
            "Text file is empty: {}",
            path.display()
        )));
    }

    let stem = path
        .file_stem()
        .and_then(OsStr::to_str)
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| {
            AdminError::validation(format!(
                "File name has no usable stem: {}",
                path.display()
            ))
        })?;

    // `raw` is trimmed, so its first line is never blank
    let (title_line, after_title) = raw.split_once('\n').unwrap_or((raw, ""));
    let summary_source = first_paragraph(after_title)
        .or_else(|| first_paragraph(raw))
        .unwrap_or(raw);

    Ok(EvidenceDocument {
        id: stem.to_string(),
        title: title_line.trim().to_string(),
        summary: truncate_chars(summary_source, SUMMARY_MAX_CHARS),
        body: raw.to_string(),
        source_url: String::new(),
        published_at,
        tags: tags_from_stem(stem),
    })
}

fn first_paragraph(text: &str) -> Option<&str> {
    text.split("\n\n")
        .map(str::trim)
        .find(|paragraph| !paragraph.is_empty())
}

fn tags_from_stem(stem: &str) -> Vec<String> {
    let tags: Vec<String> = stem
        .split('_')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect();

    if tags.is_empty() {
        vec![DEFAULT_TAG.to_string()]
    } else {
        tags
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_offset, _)) => text[..byte_offset].to_string(),
        None => text.to_string(),
    }
}
