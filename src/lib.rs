pub mod config;
pub mod csv;
pub mod error;
pub mod extract;
pub mod logger;
pub mod math;
pub mod models;
pub mod navigator;
pub mod session;
pub mod ui;
pub mod upload;
pub mod utils;

// Re-exports for convenience
pub use config::{Cli, Config};
pub use crate::csv::{get_csv_files, load_rows, parse_rows};
pub use error::{FlipcardsError, Result};
pub use extract::{extract, extract_rows};
pub use models::{AppState, CurrentCard, Flashcard, RowRecord};
pub use navigator::Navigator;
pub use session::{App, handle_cards_input};
pub use ui::{draw_cards, draw_menu};
pub use upload::{FileHandle, UploadState, Uploader, accept_file};
