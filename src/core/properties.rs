//! Line-oriented `key=value` resource files.
//!
//! The format is deliberately minimal: no comments, no continuation lines and
//! no unescaping. Values are carried byte-for-byte so escape notation such as
//! `\u00e6` survives untouched.

use crate::domain::model::{Entry, ResourceMap};
use std::path::Path;

use crate::utils::error::{Result, TranslatorError};

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Splits on the first `=`. Blank lines and lines without `=` yield `None`.
pub fn parse_line(line: &str) -> Option<Entry> {
    if line.trim().is_empty() {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    Some(Entry::new(key, value))
}

/// Lines end at `\n`, `\r\n` or a lone `\r`.
pub fn parse(content: &str) -> ResourceMap {
    let mut map = ResourceMap::new();
    // `\r\n` leaves an empty piece between the two, which parse_line drops.
    let lines = content.split(|c: char| c == '\n' || c == '\r');
    for entry in lines.filter_map(parse_line) {
        if map.insert(entry.key.clone(), entry.value).is_some() {
            tracing::debug!("Duplicate key '{}', keeping the later value", entry.key);
        }
    }
    map
}

/// Decodes raw file bytes as UTF-8 and parses them. `path` is only used for
/// the error message.
pub fn parse_bytes(path: &str, bytes: Vec<u8>) -> Result<ResourceMap> {
    let content = String::from_utf8(bytes).map_err(|source| TranslatorError::EncodingError {
        path: Path::new(path).to_path_buf(),
        source,
    })?;
    Ok(parse(&content))
}

/// Every entry, including the last, is followed by [`LINE_ENDING`].
pub fn serialize(map: &ResourceMap) -> String {
    let mut out = String::new();
    for (key, value) in map {
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push_str(LINE_ENDING);
    }
    out
}
