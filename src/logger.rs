use crate::error::{FlipcardsError, Result};
use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref LOG_FILE: Mutex<Option<File>> = Mutex::new(None);
}

/// Writes log records to a file; the terminal belongs to the UI.
struct FileLogger;

static LOGGER: FileLogger = FileLogger;

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut guard) = LOG_FILE.lock()
            && let Some(file) = guard.as_mut()
        {
            let _ = writeln!(file, "{}", format_line(record));
        }
    }

    fn flush(&self) {
        if let Ok(mut guard) = LOG_FILE.lock()
            && let Some(file) = guard.as_mut()
        {
            let _ = file.flush();
        }
    }
}

fn format_line(record: &Record) -> String {
    format!(
        "[{}] {:<5} {}: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        record.target(),
        record.args()
    )
}

/// Open (or append to) the log file and route the `log` macros to it.
/// Calling it again only redirects output to the new file.
pub fn init(path: &Path, level: LevelFilter) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| FlipcardsError::Logger(format!("{}: {}", path.display(), e)))?;

    {
        let mut guard = LOG_FILE
            .lock()
            .map_err(|_| FlipcardsError::Logger("log file lock poisoned".to_string()))?;
        *guard = Some(file);
    }

    // A second call finds the logger already installed, which is fine.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_logger_writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flipcards.log");

        init(&path, LevelFilter::Info).unwrap();
        log::info!("loaded 3 cards");
        log::debug!("filtered out");
        log::logger().flush();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("INFO"));
        assert!(content.contains("loaded 3 cards"));
        assert!(!content.contains("filtered out"));
    }

    #[test]
    fn test_logger_init_bad_path() {
        let result = init(Path::new("/definitely/not/here/flipcards.log"), LevelFilter::Info);
        assert!(matches!(result, Err(FlipcardsError::Logger(_))));
    }
}
