//! Free-space scanning for download target selection.
//!
//! Seedboxes often spread downloads over several mount points. This module
//! reads a newline-separated file of candidate directories and picks the one
//! whose filesystem currently has the most free space.

use std::ffi::CString;
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use tracing::warn;

/// A candidate directory together with its free byte count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestPath {
    /// The winning directory.
    pub path: PathBuf,
    /// Free bytes on its filesystem at scan time.
    pub free: u64,
}

/// Returns the number of free bytes on the filesystem holding `path`.
///
/// Free means `f_bfree * f_frsize`: every unallocated block, including the
/// reserve normally withheld from unprivileged users.
pub fn free_space(path: &Path) -> io::Result<u64> {
    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "path contains NUL"))?;

    let mut stat: libc::statvfs = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::statvfs(c_path.as_ptr(), &mut stat) };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }

    Ok(stat.f_bfree as u64 * stat.f_frsize as u64)
}

/// Scans a newline-separated list of candidate paths and returns the one
/// with the most free space.
///
/// Candidates that cannot be queried are logged and skipped; blank lines are
/// ignored. Ties keep the earliest candidate. `Ok(None)` means no candidate
/// could be queried at all.
///
/// # Errors
///
/// Only reading `list_file` itself can fail; per-candidate failures never
/// abort the scan.
pub fn best_path(list_file: &Path) -> io::Result<Option<BestPath>> {
    let contents = std::fs::read_to_string(list_file)?;
    let mut best: Option<BestPath> = None;

    for line in contents.lines() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        let path = Path::new(line);
        let free = match free_space(path) {
            Ok(free) => free,
            Err(e) => {
                warn!("skipping {}: {}", path.display(), e);
                continue;
            }
        };

        if best.as_ref().map_or(true, |b| free > b.free) {
            best = Some(BestPath {
                path: path.to_path_buf(),
                free,
            });
        }
    }

    Ok(best)
}
