use crate::csv::load_rows;
use crate::error::{FlipcardsError, Result};
use crate::extract::extract_rows;
use crate::models::Flashcard;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

pub const CSV_MEDIA_TYPE: &str = "text/csv";

/// How long a rejection or failure stays on screen before going back to idle.
pub const STATUS_RESET_AFTER: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    pub path: PathBuf,
    pub name: String,
    pub media_type: Option<String>,
}

impl FileHandle {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            path,
            name,
            media_type: None,
        }
    }

    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }
}

pub fn accept_file(file: &FileHandle) -> Result<()> {
    if file.name.ends_with(".csv") || file.media_type.as_deref() == Some(CSV_MEDIA_TYPE) {
        Ok(())
    } else {
        Err(FlipcardsError::UnsupportedFileType(file.name.clone()))
    }
}

/// Turn text pasted by dragging a file onto the terminal into a path.
///
/// Terminals differ: some quote the path, some backslash-escape spaces, some
/// send a `file://` URL. Only the first dropped file is used.
pub fn parse_dropped_path(text: &str) -> Option<PathBuf> {
    let line = text.lines().map(str::trim).find(|l| !l.is_empty())?;

    let unquoted = ['\'', '"']
        .iter()
        .find_map(|q| line.strip_prefix(*q).and_then(|l| l.strip_suffix(*q)))
        .unwrap_or(line);
    let unprefixed = unquoted.strip_prefix("file://").unwrap_or(unquoted);

    let mut path = String::with_capacity(unprefixed.len());
    let mut chars = unprefixed.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\'
            && let Some(&escaped) = chars.peek()
            && matches!(escaped, ' ' | '\'' | '"' | '(' | ')' | '&')
        {
            path.push(escaped);
            chars.next();
        } else {
            path.push(c);
        }
    }

    (!path.is_empty()).then(|| PathBuf::from(path))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadState {
    Idle,
    Loaded {
        file_name: String,
        cards: usize,
    },
    Rejected {
        file_name: String,
        since: Instant,
    },
    Failed {
        file_name: String,
        message: String,
        since: Instant,
    },
}

#[derive(Debug)]
pub struct Uploader {
    state: UploadState,
}

impl Default for Uploader {
    fn default() -> Self {
        Self::new()
    }
}

impl Uploader {
    pub fn new() -> Self {
        Self {
            state: UploadState::Idle,
        }
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    /// Check, parse and extract a file in one pass.
    pub fn ingest(&mut self, file: &FileHandle) -> Result<Vec<Flashcard>> {
        self.ingest_at(file, Instant::now())
    }

    fn ingest_at(&mut self, file: &FileHandle, now: Instant) -> Result<Vec<Flashcard>> {
        if let Err(e) = accept_file(file) {
            log::info!("rejected {}: {}", file.path.display(), e);
            self.state = UploadState::Rejected {
                file_name: file.name.clone(),
                since: now,
            };
            return Err(e);
        }

        match load_deck(&file.path) {
            Ok(cards) => {
                log::info!("loaded {} cards from {}", cards.len(), file.name);
                self.state = UploadState::Loaded {
                    file_name: file.name.clone(),
                    cards: cards.len(),
                };
                Ok(cards)
            }
            Err(e) => {
                log::warn!("failed to load {}: {}", file.path.display(), e);
                self.state = UploadState::Failed {
                    file_name: file.name.clone(),
                    message: e.to_string(),
                    since: now,
                };
                Err(e)
            }
        }
    }

    /// Drop an advisory status once it has been visible long enough.
    pub fn tick(&mut self, now: Instant) {
        let since = match &self.state {
            UploadState::Rejected { since, .. } | UploadState::Failed { since, .. } => *since,
            _ => return,
        };
        if now.saturating_duration_since(since) >= STATUS_RESET_AFTER {
            self.state = UploadState::Idle;
        }
    }

    pub fn reset(&mut self) {
        self.state = UploadState::Idle;
    }
}

pub fn load_deck(path: &Path) -> Result<Vec<Flashcard>> {
    let rows = load_rows(path)?;
    Ok(extract_rows(&rows))
}
