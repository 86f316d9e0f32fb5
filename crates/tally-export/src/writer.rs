use crate::Result;
use std::io::Write;
use std::path::Path;
use tempfile::{Builder, NamedTempFile};

/// Replace `path` with `contents` in one step.
///
/// Data goes to a temporary file in the same directory. `check` receives the
/// bytes read back from that file; only if it passes is the file renamed over
/// the target, so readers see either the old file or the whole new one and a
/// rejected artifact never replaces a good one.
///
/// The result keeps the permissions of the file it replaces, or gets the
/// same mode a plain create would (0o666 minus the umask).
pub fn write_atomic<F>(path: &Path, contents: &[u8], check: F) -> Result<()>
where
    F: FnOnce(&[u8]) -> Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = create_temp(dir)?;
    if let Ok(existing) = std::fs::metadata(path) {
        tmp.as_file().set_permissions(existing.permissions())?;
    }

    tmp.write_all(contents)?;
    tmp.flush()?;

    let written = std::fs::read(tmp.path())?;
    check(&written)?;

    tmp.persist(path).map_err(|e| e.error)?;

    tracing::debug!("Wrote {} bytes to {}", contents.len(), path.display());

    Ok(())
}

#[cfg(unix)]
fn create_temp(dir: &Path) -> Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    // The mode is applied at open(2), so the umask still masks it
    let tmp = Builder::new()
        .permissions(std::fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)?;
    Ok(tmp)
}

#[cfg(not(unix))]
fn create_temp(dir: &Path) -> Result<NamedTempFile> {
    Ok(Builder::new().tempfile_in(dir)?)
}
