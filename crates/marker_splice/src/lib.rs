// crates/marker_splice/src/lib.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

/// Raised when a required literal marker substring is absent from the
/// target content. This is the only domain error: the caller is expected
/// to report it and skip the write, leaving the target file untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarkerNotFound {
    #[error("marker `{0}` not found")]
    Marker(String),
    #[error("start marker `{0}` not found")]
    Start(String),
    #[error("end marker `{0}` not found")]
    End(String),
    #[error("start marker `{start}` and end marker `{end}` not found")]
    Both { start: String, end: String },
}

impl MarkerNotFound {
    /// Whether the start marker of a ranged replace was located.
    pub fn start_found(&self) -> bool {
        matches!(self, MarkerNotFound::End(_))
    }

    /// Whether the end marker of a ranged replace was located.
    pub fn end_found(&self) -> bool {
        matches!(self, MarkerNotFound::Start(_))
    }
}

/// Result of a successful splice: the new content plus the byte indices
/// the splice was computed at, kept around for diagnostics.
#[derive(Debug, PartialEq, Eq)]
pub struct Spliced {
    /// The full spliced content, ready to be written back.
    pub content: String,
    /// The insertion index, or the start of the replaced range.
    pub index: usize,
    /// End of the replaced range; `None` for plain insertions.
    pub end_index: Option<usize>,
}

/// The search anchor for one splice. Each binary in this workspace is one
/// invocation site of [`splice_file`] with a fixed `SearchSpec`.
#[derive(Debug, Clone)]
pub enum SearchSpec<'a> {
    /// Insert the fragment immediately after the first occurrence of
    /// `marker`, padded with a newline on each side.
    After { marker: &'a str },
    /// Insert the fragment immediately before the first occurrence of
    /// `marker`, followed by `trailer` so the displaced marker keeps its
    /// original indentation.
    Before { marker: &'a str, trailer: &'a str },
    /// Discard everything from the start of the first `start` through just
    /// before the first `end`, and put the fragment plus `separator` in
    /// its place. `end` itself is preserved.
    Between {
        start: &'a str,
        end: &'a str,
        separator: &'a str,
    },
}

/// Inserts `fragment` immediately after the first occurrence of `marker`.
///
/// The returned content equals `content[..i] + "\n" + fragment + "\n" +
/// content[i..]` where `i` is the byte position just past the marker's last
/// character. Everything up to and including the marker is unchanged.
///
/// # Errors
///
/// Returns [`MarkerNotFound`] if `marker` does not occur in `content`.
pub fn insert_after(content: &str, marker: &str, fragment: &str) -> Result<Spliced, MarkerNotFound> {
    let found = content
        .find(marker)
        .ok_or_else(|| MarkerNotFound::Marker(marker.to_string()))?;
    let index = found + marker.len();
    let mut spliced = String::with_capacity(content.len() + fragment.len() + 2);
    spliced.push_str(&content[..index]);
    spliced.push('\n');
    spliced.push_str(fragment);
    spliced.push('\n');
    spliced.push_str(&content[index..]);
    Ok(Spliced {
        content: spliced,
        index,
        end_index: None,
    })
}

/// Inserts `fragment` immediately before the first occurrence of `marker`,
/// with `trailer` between the fragment and the marker.
///
/// # Errors
///
/// Returns [`MarkerNotFound`] if `marker` does not occur in `content`.
pub fn insert_before(
    content: &str,
    marker: &str,
    fragment: &str,
    trailer: &str,
) -> Result<Spliced, MarkerNotFound> {
    let index = content
        .find(marker)
        .ok_or_else(|| MarkerNotFound::Marker(marker.to_string()))?;
    let mut spliced = String::with_capacity(content.len() + fragment.len() + trailer.len());
    spliced.push_str(&content[..index]);
    spliced.push_str(fragment);
    spliced.push_str(trailer);
    spliced.push_str(&content[index..]);
    Ok(Spliced {
        content: spliced,
        index,
        end_index: None,
    })
}

/// Replaces the region between two markers with `fragment`.
///
/// The returned content equals `content[..s] + fragment + separator +
/// content[e..]` where `s` and `e` are the start indices of the first
/// occurrences of `start_marker` and `end_marker`. The end marker and
/// everything after it is preserved verbatim.
///
/// Only the first occurrence of each marker is considered. If the end
/// marker occurs before the start marker the splice is still performed
/// mechanically and the result can be malformed; callers must ensure the
/// ordering holds in practice.
///
/// # Errors
///
/// Returns [`MarkerNotFound`] identifying whichever marker(s) are absent.
pub fn replace_between(
    content: &str,
    start_marker: &str,
    end_marker: &str,
    fragment: &str,
    separator: &str,
) -> Result<Spliced, MarkerNotFound> {
    let start = content.find(start_marker);
    let end = content.find(end_marker);
    let (index, end_index) = match (start, end) {
        (Some(s), Some(e)) => (s, e),
        (Some(_), None) => return Err(MarkerNotFound::End(end_marker.to_string())),
        (None, Some(_)) => return Err(MarkerNotFound::Start(start_marker.to_string())),
        (None, None) => {
            return Err(MarkerNotFound::Both {
                start: start_marker.to_string(),
                end: end_marker.to_string(),
            })
        }
    };
    let mut spliced = String::with_capacity(content.len() + fragment.len() + separator.len());
    spliced.push_str(&content[..index]);
    spliced.push_str(fragment);
    spliced.push_str(separator);
    spliced.push_str(&content[end_index..]);
    Ok(Spliced {
        content: spliced,
        index,
        end_index: Some(end_index),
    })
}

/// Applies the splice described by `spec` to in-memory content.
pub fn splice(content: &str, fragment: &str, spec: &SearchSpec<'_>) -> Result<Spliced, MarkerNotFound> {
    match spec {
        SearchSpec::After { marker } => insert_after(content, marker, fragment),
        SearchSpec::Before { marker, trailer } => insert_before(content, marker, fragment, trailer),
        SearchSpec::Between {
            start,
            end,
            separator,
        } => replace_between(content, start, end, fragment, separator),
    }
}

/// What a file-level splice run ended with. A missing marker is an
/// ordinary outcome, not an error: the binaries print a diagnostic for it
/// and still exit with status 0.
#[derive(Debug)]
pub enum SpliceOutcome {
    /// The target file was rewritten with the spliced content.
    Spliced(Spliced),
    /// A required marker was absent; the target file was not touched.
    MarkerNotFound(MarkerNotFound),
}

/// Reads the target and fragment files, splices, and on success overwrites
/// the target in place. Strict read-then-write: both files are fully read
/// into memory before any write happens, and nothing is written unless the
/// splice succeeded, so the target is either fully rewritten or untouched.
///
/// # Errors
///
/// Read and write failures (missing file, permissions, invalid UTF-8)
/// propagate as errors with the offending path in the context.
pub fn splice_file(
    target_path: &Path,
    fragment_path: &Path,
    spec: &SearchSpec<'_>,
) -> Result<SpliceOutcome> {
    let content = fs::read_to_string(target_path)
        .with_context(|| format!("Error reading target file {}", target_path.display()))?;
    let fragment = fs::read_to_string(fragment_path)
        .with_context(|| format!("Error reading fragment file {}", fragment_path.display()))?;
    match splice(&content, &fragment, spec) {
        Ok(spliced) => {
            fs::write(target_path, &spliced.content)
                .with_context(|| format!("Error writing target file {}", target_path.display()))?;
            Ok(SpliceOutcome::Spliced(spliced))
        }
        Err(missing) => Ok(SpliceOutcome::MarkerNotFound(missing)),
    }
}
