//! JSON exports.
//!
//! Both documents map owner ids (as strings) to arrays of task objects, but
//! the object schemas differ and are not interchangeable:
//! single-owner entries are `{task, completed, username}`, all-owners
//! entries are `{username, task, completed}`.
//!
//! Output is byte-compatible with Python's `json.dump` defaults: `", "` and
//! `": "` separators, no trailing newline, and everything outside printable
//! ASCII escaped as `\uXXXX`.

use crate::{write_atomic, Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::ser::Formatter;
use std::io;
use std::path::{Path, PathBuf};
use tally_core::{CorrelatedTask, ExportBundle};

pub const ALL_OWNERS_FILE_NAME: &str = "todo_all_employees.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleOwnerEntry {
    pub task: String,
    pub completed: bool,
    pub username: String,
}

impl From<&CorrelatedTask> for SingleOwnerEntry {
    fn from(task: &CorrelatedTask) -> Self {
        Self {
            task: task.title.clone(),
            completed: task.completed,
            username: task.username.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllOwnersEntry {
    pub username: String,
    pub task: String,
    pub completed: bool,
}

impl From<&CorrelatedTask> for AllOwnersEntry {
    fn from(task: &CorrelatedTask) -> Self {
        Self {
            username: task.username.clone(),
            task: task.title.clone(),
            completed: task.completed,
        }
    }
}

pub fn json_file_name(owner_id: i64) -> String {
    format!("{}.json", owner_id)
}

pub fn render_single_owner_json(owner_id: i64, tasks: &[CorrelatedTask]) -> Result<Vec<u8>> {
    let bundle = ExportBundle::single(owner_id, tasks.to_vec());
    render::<SingleOwnerEntry>(&bundle)
}

pub fn render_all_owners_json(bundle: &ExportBundle) -> Result<Vec<u8>> {
    render::<AllOwnersEntry>(bundle)
}

/// Write `<owner_id>.json` into `dir` and check the written document.
pub fn write_single_owner_json(
    dir: &Path,
    owner_id: i64,
    tasks: &[CorrelatedTask],
) -> Result<PathBuf> {
    let path = dir.join(json_file_name(owner_id));
    let bundle = ExportBundle::single(owner_id, tasks.to_vec());
    write_atomic(&path, &render_single_owner_json(owner_id, tasks)?, |written| {
        verify(&path, written, &bundle)
    })?;

    tracing::info!("Exported {} tasks to {}", tasks.len(), path.display());

    Ok(path)
}

/// Write `todo_all_employees.json` into `dir` and check the written document.
pub fn write_all_owners_json(dir: &Path, bundle: &ExportBundle) -> Result<PathBuf> {
    let path = dir.join(ALL_OWNERS_FILE_NAME);
    write_atomic(&path, &render_all_owners_json(bundle)?, |written| {
        verify(&path, written, bundle)
    })?;

    tracing::info!(
        "Exported {} tasks for {} owners to {}",
        bundle.task_count(),
        bundle.len(),
        path.display()
    );

    Ok(path)
}

fn render<'a, E>(bundle: &'a ExportBundle) -> Result<Vec<u8>>
where
    E: Serialize + From<&'a CorrelatedTask>,
{
    let document: IndexMap<&str, Vec<E>> = bundle
        .iter()
        .map(|(key, tasks)| (key, tasks.iter().map(E::from).collect()))
        .collect();

    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, SpacedAsciiFormatter);
    document.serialize(&mut serializer)?;

    Ok(out)
}

/// Compact layout with a space after `,` and `:`, escaping non-ASCII.
struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    // Quotes, backslashes and control characters never reach this method;
    // serde_json routes them through `write_char_escape`.
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        for c in fragment.chars() {
            if (' '..='~').contains(&c) {
                writer.write_all(&[c as u8])?;
            } else {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// Check a written document: same owner keys in the same order, every value
/// an array of objects, and one object per correlated task.
fn verify(path: &Path, written: &[u8], bundle: &ExportBundle) -> Result<()> {
    let fail = |reason: String| Error::Verification {
        path: path.display().to_string(),
        reason,
    };

    let document: IndexMap<String, serde_json::Value> = serde_json::from_slice(written)?;

    let written_keys: Vec<&str> = document.keys().map(String::as_str).collect();
    let expected_keys: Vec<&str> = bundle.keys().collect();
    if written_keys != expected_keys {
        return Err(fail(format!(
            "owner keys {:?} do not match {:?}",
            written_keys, expected_keys
        )));
    }

    for (key, tasks) in bundle.iter() {
        let items = document
            .get(key)
            .and_then(|value| value.as_array())
            .ok_or_else(|| fail(format!("value for owner {} is not a list", key)))?;

        if !items.iter().all(|item| item.is_object()) {
            return Err(fail(format!("value for owner {} is not a list of objects", key)));
        }
        if items.len() != tasks.len() {
            return Err(fail(format!(
                "owner {} has {} items, expected {}",
                key,
                items.len(),
                tasks.len()
            )));
        }
    }

    tracing::debug!(
        "Verified {}: {} owners, {} items",
        path.display(),
        document.len(),
        bundle.task_count()
    );

    Ok(())
}
