//! JSON rendering and output for the merged theme config.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::info;

use crate::error::MergeError;

/// Indentation used for every JSON file this tool writes
const INDENT: &[u8] = b"    ";

/// How non-ASCII characters are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Escape {
    /// Escape everything outside ASCII as \uXXXX
    #[default]
    Ascii,
    /// Write UTF-8 verbatim
    Unicode,
}

/// Render a value as 4-space indented JSON with a trailing newline
pub fn render_json<T: Serialize + ?Sized>(
    value: &T,
    escape: Escape,
) -> Result<String, serde_json::Error> {
    let mut buf = Vec::with_capacity(4096);
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser)?;

    // serde_json only ever emits UTF-8
    let mut out = String::from_utf8_lossy(&buf).into_owned();
    out.push('\n');

    Ok(match escape {
        Escape::Ascii => escape_non_ascii(&out),
        Escape::Unicode => out,
    })
}

/// Replace every non-ASCII character with its \uXXXX escape (UTF-16 units).
///
/// Only valid on serialized JSON, where non-ASCII can appear inside strings only.
pub fn escape_non_ascii(json: &str) -> String {
    if json.is_ascii() {
        return json.to_string();
    }

    let mut out = String::with_capacity(json.len() + 16);
    let mut units = [0u16; 2];
    for c in json.chars() {
        if c.is_ascii() {
            out.push(c);
            continue;
        }
        for unit in c.encode_utf16(&mut units) {
            let _ = write!(out, "\\u{:04x}", unit);
        }
    }
    out
}

/// Write the merged config, overwriting any existing file.
/// Returns the number of bytes written.
pub fn write_config<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
    escape: Escape,
) -> Result<u64, MergeError> {
    let content = render_json(value, escape).map_err(|source| MergeError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, content.as_bytes()).map_err(|source| MergeError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Wrote merged config to: {}", path.display());
    Ok(content.len() as u64)
}
