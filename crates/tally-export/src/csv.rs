//! Single-owner CSV export.
//!
//! Rows are `"ownerId","username","completed","title"` with every field
//! quoted, no header and CRLF line endings. Booleans are written as
//! `True`/`False`.

use crate::{write_atomic, Error, Result};
use std::path::{Path, PathBuf};
use tally_core::CorrelatedTask;

const LINE_TERMINATOR: &str = "\r\n";

pub fn csv_file_name(owner_id: i64) -> String {
    format!("{}.csv", owner_id)
}

/// Render one quoted row per task, in task order.
pub fn render_csv(tasks: &[CorrelatedTask]) -> String {
    let mut out = String::new();
    for task in tasks {
        let fields = [
            task.owner_id.to_string(),
            task.username.clone(),
            bool_field(task.completed).to_string(),
            task.title.clone(),
        ];

        let row: Vec<String> = fields.iter().map(|f| quote(f)).collect();
        out.push_str(&row.join(","));
        out.push_str(LINE_TERMINATOR);
    }
    out
}

/// Write `<owner_id>.csv` into `dir`. The rows are checked before the file
/// replaces any previous export.
pub fn write_csv(dir: &Path, owner_id: i64, tasks: &[CorrelatedTask]) -> Result<PathBuf> {
    let path = dir.join(csv_file_name(owner_id));
    write_atomic(&path, render_csv(tasks).as_bytes(), |written| {
        verify(&path, written, owner_id, tasks)
    })?;

    tracing::info!("Exported {} tasks to {}", tasks.len(), path.display());

    Ok(path)
}

/// Parse CSV in which every field is quoted. Used to read exports back.
pub fn parse_quoted_rows(input: &str) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();
    let mut chars = input.chars().peekable();

    while chars.peek().is_some() {
        let line = rows.len() + 1;
        let mut row = Vec::new();

        loop {
            if chars.next() != Some('"') {
                return Err(Error::MalformedCsv(format!("row {}: unquoted field", line)));
            }

            let mut field = String::new();
            loop {
                match chars.next() {
                    Some('"') if chars.next_if_eq(&'"').is_some() => field.push('"'),
                    Some('"') => break,
                    Some(c) => field.push(c),
                    None => {
                        return Err(Error::MalformedCsv(format!(
                            "row {}: unterminated field",
                            line
                        )))
                    }
                }
            }
            row.push(field);

            match chars.next() {
                Some(',') => continue,
                Some('\r') if chars.next_if_eq(&'\n').is_some() => break,
                Some('\n') | None => break,
                Some(c) => {
                    return Err(Error::MalformedCsv(format!(
                        "row {}: unexpected {:?} after field",
                        line, c
                    )))
                }
            }
        }

        rows.push(row);
    }

    Ok(rows)
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn bool_field(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

fn verify(path: &Path, written: &[u8], owner_id: i64, tasks: &[CorrelatedTask]) -> Result<()> {
    let fail = |reason: String| Error::Verification {
        path: path.display().to_string(),
        reason,
    };

    let text = std::str::from_utf8(written).map_err(|e| fail(format!("not UTF-8: {}", e)))?;
    let rows = parse_quoted_rows(text)?;

    if rows.len() != tasks.len() {
        return Err(fail(format!(
            "expected {} rows, found {}",
            tasks.len(),
            rows.len()
        )));
    }

    let expected_id = owner_id.to_string();
    for (i, (row, task)) in rows.iter().zip(tasks).enumerate() {
        if row.len() != 4 {
            return Err(fail(format!("row {} has {} fields", i + 1, row.len())));
        }
        if row[0] != expected_id || row[3] != task.title {
            return Err(fail(format!("row {} does not match task {:?}", i + 1, task.title)));
        }
    }

    tracing::debug!("Verified {}: {} rows", path.display(), rows.len());

    Ok(())
}
