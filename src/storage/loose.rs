//! Tolerant loading of a hand-edited profile file.
//!
//! Lines that are neither blank, comments, `[section]` headers nor `key = value` pairs are
//! dropped before the text reaches the INI parser, so stray edits never block a load.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use ini::{Ini, ParseOption};

use super::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comments {
    /// Keep values byte for byte; used when the file is about to be rewritten.
    Keep,
    /// Drop `#`/`;` comments that follow whitespace at the end of a value. A value wrapped
    /// in double quotes is kept whole.
    StripInline,
}

/// Reads and parses `path`. A missing file is an empty document.
pub fn load(path: &Path, comments: Comments) -> Result<Ini, StoreError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "configuration file does not exist yet");
            return Ok(Ini::new());
        }
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let options = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    };

    Ini::load_from_str_opt(&clean(&text, comments), options).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn clean(text: &str, comments: Comments) -> String {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut out = String::with_capacity(text.len());

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();

        let kept = if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            Some(line)
        } else if line.starts_with('[') {
            header(line)
        } else if is_pair(line) {
            Some(match comments {
                Comments::Keep => line,
                Comments::StripInline => strip_inline_comment(line),
            })
        } else {
            None
        };

        match kept {
            Some(line) => {
                out.push_str(line);
                out.push('\n');
            }
            None => tracing::debug!(line = idx + 1, "skipping malformed line in profile file"),
        }
    }

    out
}

/// `[name]`, optionally followed by a comment. Returns the header without the comment.
fn header(line: &str) -> Option<&str> {
    let close = line.find(']')?;
    if line[1..close].trim().is_empty() {
        return None;
    }
    let rest = line[close + 1..].trim_start();
    (rest.is_empty() || is_comment(rest)).then_some(&line[..=close])
}

fn is_comment(text: &str) -> bool {
    text.starts_with('#') || text.starts_with(';')
}

fn separator(line: &str) -> Option<usize> {
    line.find(|c: char| c == '=' || c == ':')
}

fn is_pair(line: &str) -> bool {
    match separator(line) {
        Some(pos) => !line[..pos].trim().is_empty(),
        None => false,
    }
}

fn strip_inline_comment(line: &str) -> &str {
    let Some(sep) = separator(line) else {
        return line;
    };
    let after = &line[sep + 1..];
    let start = sep + 1 + (after.len() - after.trim_start().len());
    let value = &line[start..];

    let end = if value.starts_with('"') {
        quoted_end(value)
    } else {
        unquoted_end(value)
    };
    line[..start + end].trim_end()
}

fn unquoted_end(value: &str) -> usize {
    // The value itself follows whitespace, so a leading marker is a comment too.
    let mut prev_blank = true;
    for (pos, c) in value.char_indices() {
        if prev_blank && (c == '#' || c == ';') {
            return pos;
        }
        prev_blank = c.is_whitespace();
    }
    value.len()
}

/// End of a quoted value: the last quote followed by nothing or by a comment.
fn quoted_end(value: &str) -> usize {
    for (pos, _) in value.match_indices('"').rev() {
        if pos == 0 {
            break;
        }
        let rest = &value[pos + 1..];
        let trimmed = rest.trim_start();
        if trimmed.is_empty() || (is_comment(trimmed) && trimmed.len() < rest.len()) {
            return pos + 1;
        }
    }
    unquoted_end(value)
}
