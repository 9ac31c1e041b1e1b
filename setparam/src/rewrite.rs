//! In-place rewrite of a configuration file
//!
//! The new content is staged in a temporary file next to the target and
//! renamed over it once complete, so the target is either the old file or
//! the new one, never missing or half written.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::args::ReplacementTable;
use crate::error::{Result, SetParamError};
use crate::line::ConfigLine;

/// Summary of one rewrite
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteReport {
    /// Lines read from the original file
    pub lines: usize,
    /// Lines of the form `key = value`
    pub settable: usize,
    /// Keys whose value came from the table, in file order
    pub replaced: Vec<String>,
    /// Table keys that matched no line, sorted
    pub unmatched: Vec<String>,
}

/// Rewrite `path`, substituting the table's values for matching keys.
///
/// Keys absent from the file are ignored; nothing is appended.
pub fn rewrite(path: &Path, table: &ReplacementTable) -> Result<RewriteReport> {
    let original = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SetParamError::TargetNotFound(path.to_path_buf()),
        _ => SetParamError::io(path, "open", e),
    })?;
    let permissions = original
        .metadata()
        .map_err(|e| SetParamError::io(path, "stat", e))?
        .permissions();

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let staged = NamedTempFile::new_in(dir)
        .map_err(|e| SetParamError::io(dir, "create temporary file in", e))?;
    std::fs::set_permissions(staged.path(), permissions)
        .map_err(|e| SetParamError::io(staged.path(), "set permissions on", e))?;

    let mut writer = BufWriter::new(staged);
    let report = rewrite_lines(BufReader::new(original), &mut writer, table)
        .map_err(|e| SetParamError::io(path, "rewrite", e))?;

    let staged = writer
        .into_inner()
        .map_err(|e| SetParamError::io(path, "flush", e.into_error()))?;
    staged
        .as_file()
        .sync_all()
        .map_err(|e| SetParamError::io(staged.path(), "sync", e))?;

    staged.persist(path).map_err(|e| SetParamError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    tracing::info!(
        "Rewrote {}: {} lines, {} settable, {} replaced",
        path.display(),
        report.lines,
        report.settable,
        report.replaced.len()
    );
    if !report.unmatched.is_empty() {
        tracing::debug!("Keys not present in {}: {:?}", path.display(), report.unmatched);
    }

    Ok(report)
}

/// Copy `reader` to `writer` line by line, rendering each line against the
/// table. Line terminators of pass-through lines are kept as read.
pub fn rewrite_lines<R: BufRead, W: Write>(
    mut reader: R,
    writer: &mut W,
    table: &ReplacementTable,
) -> io::Result<RewriteReport> {
    let mut report = RewriteReport::default();
    let mut raw = String::new();

    loop {
        raw.clear();
        if reader.read_line(&mut raw)? == 0 {
            break;
        }
        report.lines += 1;

        let line = ConfigLine::parse(&raw);
        if let Some(key) = line.key() {
            report.settable += 1;
            if table.contains_key(key) {
                tracing::debug!("line {}: setting {}", report.lines, key);
                report.replaced.push(key.to_string());
            }
        }
        writer.write_all(line.render(table).as_bytes())?;
    }
    writer.flush()?;

    report.unmatched = table
        .keys()
        .filter(|key| !report.replaced.iter().any(|r| r.as_str() == *key))
        .map(str::to_string)
        .collect();

    Ok(report)
}
