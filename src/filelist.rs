//! Modification-time listing of a directory tree.
//!
//! Walks a directory recursively, collects every regular file with its
//! modification time, and returns them oldest first. Used to spot stale
//! downloads worth pruning.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::warn;
use walkdir::WalkDir;

/// A regular file and its modification time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path of the file, rooted at the walked directory.
    pub path: PathBuf,
    /// Last modification time.
    pub modified: SystemTime,
}

/// Collects every regular file under `root`, oldest modification time first.
///
/// Entries that cannot be read (permission errors, races with concurrent
/// deletion) are logged and skipped, so a partially unreadable tree still
/// yields the rest. Symlinks are not followed. The sort is stable: files
/// sharing a timestamp keep traversal order.
pub fn collect_sorted(root: &Path) -> Vec<FileEntry> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let modified = match entry.metadata() {
            Ok(meta) => match meta.modified() {
                Ok(modified) => modified,
                Err(e) => {
                    warn!("skipping {}: {}", entry.path().display(), e);
                    continue;
                }
            },
            Err(e) => {
                warn!("skipping {}: {}", entry.path().display(), e);
                continue;
            }
        };

        entries.push(FileEntry {
            path: entry.into_path(),
            modified,
        });
    }

    entries.sort_by_key(|entry| entry.modified);
    entries
}

/// Formats a timestamp as `YYYY-MM-DD HH:MM:SS` in UTC.
pub fn format_timestamp(time: SystemTime) -> String {
    let secs = match time.duration_since(UNIX_EPOCH) {
        Ok(since) => since.as_secs() as i64,
        Err(e) => -(e.duration().as_secs() as i64),
    };

    let days = secs.div_euclid(86_400);
    let tod = secs.rem_euclid(86_400);
    let (year, month, day) = civil_from_days(days);

    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        year,
        month,
        day,
        tod / 3600,
        tod % 3600 / 60,
        tod % 60
    )
}

/// Gregorian date for a day count relative to 1970-01-01.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);

    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_format_epoch() {
        assert_eq!(format_timestamp(UNIX_EPOCH), "1970-01-01 00:00:00");
    }

    #[test]
    fn test_format_end_of_day() {
        let t = UNIX_EPOCH + Duration::from_secs(86_399);
        assert_eq!(format_timestamp(t), "1970-01-01 23:59:59");
    }

    #[test]
    fn test_format_leap_day() {
        let t = UNIX_EPOCH + Duration::from_secs(1_709_164_800);
        assert_eq!(format_timestamp(t), "2024-02-29 00:00:00");
    }

    #[test]
    fn test_format_arbitrary_datetime() {
        // 2021-07-13 02:40:00 UTC
        let t = UNIX_EPOCH + Duration::from_secs(1_626_144_000);
        assert_eq!(format_timestamp(t), "2021-07-13 02:40:00");
    }

    #[test]
    fn test_collect_sorted_orders_by_mtime() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        std::fs::create_dir(&sub).unwrap();

        let older = dir.path().join("older.txt");
        let newer = sub.join("newer.txt");
        std::fs::write(&older, b"a").unwrap();
        std::fs::write(&newer, b"b").unwrap();

        let base = SystemTime::now();
        std::fs::File::options()
            .write(true)
            .open(&older)
            .unwrap()
            .set_modified(base - Duration::from_secs(3600))
            .unwrap();
        std::fs::File::options()
            .write(true)
            .open(&newer)
            .unwrap()
            .set_modified(base)
            .unwrap();

        let entries = collect_sorted(dir.path());
        let paths: Vec<_> = entries.iter().map(|e| e.path.clone()).collect();
        assert_eq!(paths, vec![older, newer]);
    }

    #[test]
    fn test_collect_sorted_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("only-a-dir")).unwrap();
        assert!(collect_sorted(dir.path()).is_empty());
    }

    #[test]
    fn test_collect_sorted_on_missing_root_is_empty() {
        assert!(collect_sorted(Path::new("/no/such/tree")).is_empty());
    }
}
