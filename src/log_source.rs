/// Log source module
///
/// This module handles:
/// - Reading a single log file or stdin
/// - Picking the most recent autograder log in a directory
///
/// The report pipeline only ever sees the text; where it came from is
/// decided here and passed in through the `LogSource` trait.
use chrono::{DateTime, Local};
use log::{debug, info};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;

/// Default file name prefix of autograder logs
pub const DEFAULT_PREFIX: &str = "autograder_";

/// Default directory searched for logs
pub const DEFAULT_LOGS_DIR: &str = "logs";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("No autograder logs found in {} (looking for files starting with '{prefix}')", dir.display())]
    NoLogs { dir: PathBuf, prefix: String },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Something that can hand over the text of one log
pub trait LogSource {
    /// Human-readable description of the log, shown above the report
    fn describe(&self) -> String;

    /// Read the whole log
    fn read_text(&self) -> Result<String, SourceError>;
}

/// A specific log file
#[derive(Debug, Clone)]
pub struct FileSource {
    pub path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LogSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_text(&self) -> Result<String, SourceError> {
        read_lossy(&self.path)
    }
}

/// Log text piped in on stdin
#[derive(Debug, Clone, Default)]
pub struct StdinSource;

impl LogSource for StdinSource {
    fn describe(&self) -> String {
        "stdin".to_string()
    }

    fn read_text(&self) -> Result<String, SourceError> {
        let mut bytes = Vec::new();
        io::stdin()
            .read_to_end(&mut bytes)
            .map_err(|source| SourceError::Io { path: PathBuf::from("<stdin>"), source })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// The newest log in a directory whose name starts with a prefix
#[derive(Debug, Clone)]
pub struct LatestLogSource {
    pub path: PathBuf,
    pub modified: SystemTime,
}

impl LatestLogSource {
    /// Select the most recently modified matching log
    ///
    /// Ties on modification time go to the lexically greatest name, so
    /// timestamped names still pick the latest run.
    pub fn find(dir: &Path, prefix: &str) -> Result<Self, SourceError> {
        debug!("Looking for '{}*' logs in {}", prefix, dir.display());

        let io_err = |source| SourceError::Io { path: dir.to_path_buf(), source };
        let mut newest: Option<(SystemTime, PathBuf)> = None;

        for entry in fs::read_dir(dir).map_err(io_err)? {
            let entry = entry.map_err(io_err)?;
            let name = entry.file_name();
            if !name.to_string_lossy().starts_with(prefix) {
                continue;
            }

            // Follow symlinks so linked logs count as files
            let metadata = match fs::metadata(entry.path()) {
                Ok(m) if m.is_file() => m,
                Ok(_) => continue,
                Err(e) => {
                    debug!("Skipping {}: {}", entry.path().display(), e);
                    continue;
                }
            };
            let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
            let candidate = (modified, entry.path());

            debug!("Candidate log {}", candidate.1.display());
            if newest.as_ref().is_none_or(|best| candidate > *best) {
                newest = Some(candidate);
            }
        }

        let (modified, path) =
            newest.ok_or_else(|| SourceError::NoLogs { dir: dir.to_path_buf(), prefix: prefix.to_string() })?;
        info!("Using latest log {}", path.display());

        Ok(Self { path, modified })
    }
}

impl LogSource for LatestLogSource {
    fn describe(&self) -> String {
        let modified: DateTime<Local> = self.modified.into();
        format!("{} ({})", self.path.display(), modified.format("%Y-%m-%d %H:%M:%S"))
    }

    fn read_text(&self) -> Result<String, SourceError> {
        read_lossy(&self.path)
    }
}

/// Read a file as text, replacing invalid UTF-8 instead of failing
fn read_lossy(path: &Path) -> Result<String, SourceError> {
    let bytes = fs::read(path).map_err(|source| SourceError::Io { path: path.to_path_buf(), source })?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::time::Duration;

    fn write_with_mtime(dir: &Path, name: &str, contents: &str, secs: u64) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        let file = File::options().write(true).open(&path).unwrap();
        file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs)).unwrap();
        path
    }

    #[test]
    fn test_picks_newest_matching_log() {
        let dir = tempfile::tempdir().unwrap();
        write_with_mtime(dir.path(), "autograder_a.log", "old", 1_000);
        let newest = write_with_mtime(dir.path(), "autograder_b.log", "new", 3_000);
        write_with_mtime(dir.path(), "autograder_c.log", "middle", 2_000);
        write_with_mtime(dir.path(), "system_z.log", "not a grader log", 9_000);

        let source = LatestLogSource::find(dir.path(), DEFAULT_PREFIX).unwrap();
        assert_eq!(source.path, newest);
        assert_eq!(source.read_text().unwrap(), "new");
    }

    #[test]
    fn test_tie_goes_to_greatest_name() {
        let dir = tempfile::tempdir().unwrap();
        write_with_mtime(dir.path(), "autograder_1.log", "first", 5_000);
        let second = write_with_mtime(dir.path(), "autograder_2.log", "second", 5_000);

        let source = LatestLogSource::find(dir.path(), DEFAULT_PREFIX).unwrap();
        assert_eq!(source.path, second);
    }

    #[test]
    fn test_directories_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("autograder_dir")).unwrap();

        let err = LatestLogSource::find(dir.path(), DEFAULT_PREFIX).unwrap_err();
        assert!(matches!(err, SourceError::NoLogs { .. }));
    }

    #[test]
    fn test_no_matching_logs() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();

        let err = LatestLogSource::find(dir.path(), DEFAULT_PREFIX).unwrap_err();
        assert!(err.to_string().contains("No autograder logs found"));
    }

    #[test]
    fn test_missing_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LatestLogSource::find(&dir.path().join("missing"), DEFAULT_PREFIX).unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }

    #[test]
    fn test_file_source_reads_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        fs::write(&path, b"\xff\xfe noise {\"a\": 1}").unwrap();

        let text = FileSource::new(&path).read_text().unwrap();
        assert!(text.ends_with("{\"a\": 1}"));
    }

    #[test]
    fn test_describe_includes_file_name() {
        let dir = tempfile::tempdir().unwrap();
        write_with_mtime(dir.path(), "autograder_x.log", "", 0);
        let source = LatestLogSource::find(dir.path(), DEFAULT_PREFIX).unwrap();
        assert!(source.describe().contains("autograder_x.log"));
    }
}
