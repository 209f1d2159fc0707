use crate::{writers::LogWriter, StLogError};
use chrono::{DateTime, Datelike, Days, Duration, NaiveDateTime, NaiveTime, TimeZone, Utc};
use std::{
    ffi::OsString,
    fs::{self, File, OpenOptions},
    io::{LineWriter, Write},
    path::{Path, PathBuf},
};

/// How many rotated files the [`FileWriter`] keeps.
pub const KEEP_BACKUPS: usize = 4;

// Rotated files are named `<path>.<YYYY-MM-DD>`, with the UTC date of the
// start of the week they cover.
const BACKUP_STAMP_FMT: &str = "%Y-%m-%d";
const BACKUP_STAMP_LEN: usize = 10;

/// A [`LogWriter`] that appends to a logfile and rotates it weekly.
///
/// The file is created (or opened for appending) immediately when the writer
/// is constructed. At the first write on or after a rotation boundary —
/// Monday 00:00 UTC — the file is renamed to `<path>.<YYYY-MM-DD>` (the UTC
/// date of the start of the elapsed week) and a fresh file is opened under
/// the original path. Only the [`KEEP_BACKUPS`] newest rotated files are
/// kept; older ones are deleted.
pub struct FileWriter {
    path: PathBuf,
    file: LineWriter<File>,
    rollover_at: DateTime<Utc>,
}

impl FileWriter {
    /// Opens `path` for appending, creating it if necessary.
    ///
    /// # Errors
    ///
    /// `StLogError::Io` if the file cannot be opened or created.
    pub fn new<P: Into<PathBuf>>(path: P) -> Result<Self, StLogError> {
        let path = path.into();
        let file = open_append(&path)?;
        Ok(Self {
            file,
            rollover_at: next_rollover_after(Utc::now()),
            path,
        })
    }

    fn rotate(&mut self, now: DateTime<Utc>) -> std::io::Result<()> {
        self.file.flush()?;
        let backup = backup_path(&self.path, self.rollover_at - Duration::weeks(1));
        // an old backup under the same name must give way
        if fs::metadata(&backup).is_ok() {
            fs::remove_file(&backup)?;
        }
        fs::rename(&self.path, &backup)?;
        self.file = open_append(&self.path)?;
        self.rollover_at = next_rollover_after(now);
        remove_stale_backups(&self.path);
        Ok(())
    }

    #[cfg(test)]
    fn set_rollover_at(&mut self, rollover_at: DateTime<Utc>) {
        self.rollover_at = rollover_at;
    }
}

impl LogWriter for FileWriter {
    fn write(&mut self, line: &[u8]) -> std::io::Result<()> {
        let now = Utc::now();
        if now >= self.rollover_at {
            self.rotate(now)?;
        }
        self.file.write_all(line)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.file.flush()
    }
}

fn open_append(path: &Path) -> std::io::Result<LineWriter<File>> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(LineWriter::new)
}

// The first Monday 00:00 UTC strictly after `t`.
fn next_rollover_after(t: DateTime<Utc>) -> DateTime<Utc> {
    let next_midnight: NaiveDateTime = (t.date_naive() + Days::new(1)).and_time(NaiveTime::MIN);
    let days_to_monday = (7 - next_midnight.weekday().num_days_from_monday()) % 7;
    Utc.from_utc_datetime(&(next_midnight + Days::new(u64::from(days_to_monday))))
}

fn backup_path(path: &Path, period_start: DateTime<Utc>) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(format!(".{}", period_start.format(BACKUP_STAMP_FMT)));
    PathBuf::from(name)
}

// Deletes all but the newest KEEP_BACKUPS rotated files next to `path`.
// Best-effort: listing or deletion failures only leave stale files behind.
fn remove_stale_backups(path: &Path) {
    let (Some(directory), Some(file_name)) = (path.parent(), path.file_name()) else {
        return;
    };
    let directory = if directory.as_os_str().is_empty() {
        Path::new(".")
    } else {
        directory
    };
    let prefix = format!("{}.", file_name.to_string_lossy());

    let Ok(entries) = fs::read_dir(directory) else {
        eprintln!(
            "[stlog] cannot list rotated files in {}",
            directory.display()
        );
        return;
    };
    let mut backups: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|candidate| {
            candidate
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .is_some_and(|n| is_backup_name(&n, &prefix))
        })
        .collect();

    // the date stamps sort chronologically as strings
    backups.sort();
    if backups.len() > KEEP_BACKUPS {
        for stale in &backups[..backups.len() - KEEP_BACKUPS] {
            if let Err(e) = fs::remove_file(stale) {
                eprintln!("[stlog] cannot remove {}: {}", stale.display(), e);
            }
        }
    }
}

fn is_backup_name(name: &str, prefix: &str) -> bool {
    match name.strip_prefix(prefix) {
        Some(stamp) => {
            stamp.len() == BACKUP_STAMP_LEN
                && stamp
                    .chars()
                    .all(|c| c.is_ascii_digit() || c == '-')
        }
        None => false,
    }
}
