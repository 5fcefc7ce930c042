use crate::csv::{deck_name, get_csv_files};
use crate::models::AppState;
use crate::navigator::Navigator;
use crate::upload::{FileHandle, Uploader, parse_dropped_path};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::seq::SliceRandom;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// The deck picker: CSV files found in the deck directory.
#[derive(Debug)]
pub struct DeckMenu {
    pub dir: PathBuf,
    pub files: Vec<PathBuf>,
    pub selected: usize,
}

impl DeckMenu {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let mut menu = Self {
            dir: dir.into(),
            files: Vec::new(),
            selected: 0,
        };
        menu.refresh();
        menu
    }

    pub fn refresh(&mut self) {
        self.files = get_csv_files(&self.dir);
        self.selected = self.selected.min(self.files.len().saturating_sub(1));
    }

    pub fn selected_file(&self) -> Option<&Path> {
        self.files.get(self.selected).map(PathBuf::as_path)
    }
}

/// Everything one terminal session owns. A loaded deck lives in exactly one
/// navigator; opening another file replaces it.
#[derive(Debug)]
pub struct App {
    pub state: AppState,
    pub menu: DeckMenu,
    pub uploader: Uploader,
    pub navigator: Navigator,
    pub deck_name: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(deck_dir: impl Into<PathBuf>) -> Self {
        Self {
            state: AppState::Upload,
            menu: DeckMenu::new(deck_dir),
            uploader: Uploader::new(),
            navigator: Navigator::default(),
            deck_name: String::new(),
            should_quit: false,
        }
    }

    /// Load a file and switch to the cards screen. On failure the previous
    /// screen stays up with the uploader's status explaining why.
    pub fn open(&mut self, file: FileHandle) {
        if let Ok(cards) = self.uploader.ingest(&file) {
            self.deck_name = deck_name(&file.path);
            self.navigator.replace_deck(cards);
            self.state = AppState::Cards;
        }
    }

    /// Text pasted into the terminal, which is what dropping a file does.
    pub fn handle_paste(&mut self, text: &str) {
        match parse_dropped_path(text) {
            Some(path) => self.open(FileHandle::from_path(path)),
            None => log::debug!("ignored paste without a path"),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.state {
            AppState::Upload => self.handle_upload_input(key),
            AppState::Cards => {
                handle_cards_input(&mut self.navigator, key, &mut self.state);
                if self.state == AppState::Upload {
                    self.close_deck();
                }
            }
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.uploader.tick(now);
    }

    fn handle_upload_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.menu.selected = self.menu.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.menu.selected < self.menu.files.len().saturating_sub(1) {
                    self.menu.selected += 1;
                }
            }
            KeyCode::Char('r') => {
                self.menu.refresh();
                self.uploader.reset();
            }
            KeyCode::Enter => {
                if let Some(path) = self.menu.selected_file() {
                    let file = FileHandle::from_path(path);
                    self.open(file);
                }
            }
            _ => {}
        }
    }

    fn close_deck(&mut self) {
        self.navigator.replace_deck(Vec::new());
        self.deck_name.clear();
        self.uploader.reset();
    }
}

pub fn handle_cards_input(navigator: &mut Navigator, key: KeyEvent, app_state: &mut AppState) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('m') => {
            *app_state = AppState::Upload;
        }
        KeyCode::Char(' ') | KeyCode::Enter => navigator.toggle(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => navigator.next(),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => navigator.previous(),
        KeyCode::Char('s') => {
            let mut cards = navigator.cards().to_vec();
            cards.shuffle(&mut rand::thread_rng());
            navigator.replace_deck(cards);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Flashcard;
    use crate::upload::UploadState;
    use std::fs;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn deck_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("geo.csv"),
            "title,q,a\nt1,2+2=?,4\nt2, ,x\nt3,Capital of France?,Paris\n",
        )
        .unwrap();
        fs::write(dir.path().join("empty.csv"), "title,q,a\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "not a deck").unwrap();
        dir
    }

    fn navigator(n: usize) -> Navigator {
        Navigator::new(
            (0..n)
                .map(|i| Flashcard::new(format!("Q{i}"), format!("A{i}")))
                .collect(),
        )
    }

    #[test]
    fn test_menu_lists_csv_files() {
        let dir = deck_dir();
        let menu = DeckMenu::new(dir.path());
        assert_eq!(menu.files.len(), 2);
        assert_eq!(menu.selected_file(), Some(dir.path().join("empty.csv").as_path()));
    }

    #[test]
    fn test_menu_navigation_is_bounded() {
        let dir = deck_dir();
        let mut app = App::new(dir.path());

        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.menu.selected, 0);
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.menu.selected, 1);
    }

    #[test]
    fn test_enter_opens_selected_deck() {
        let dir = deck_dir();
        let mut app = App::new(dir.path());
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.state, AppState::Cards);
        assert_eq!(app.deck_name, "geo");
        assert_eq!(app.navigator.deck_size(), 2);

        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.navigator.current_index(), 1);
        assert!(!app.navigator.answer_revealed());
    }

    #[test]
    fn test_empty_deck_opens_cards_screen() {
        let dir = deck_dir();
        let mut app = App::new(dir.path());
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.state, AppState::Cards);
        assert!(app.navigator.current_card().is_empty());
    }

    #[test]
    fn test_paste_of_wrong_type_stays_on_menu() {
        let dir = deck_dir();
        let mut app = App::new(dir.path());
        let notes = dir.path().join("notes.txt");
        app.handle_paste(&format!("'{}'", notes.display()));

        assert_eq!(app.state, AppState::Upload);
        assert!(matches!(app.uploader.state(), UploadState::Rejected { .. }));
        assert_eq!(app.navigator.deck_size(), 0);
    }

    #[test]
    fn test_paste_replaces_current_deck() {
        let dir = deck_dir();
        let mut app = App::new(dir.path());
        app.open(FileHandle::from_path(dir.path().join("geo.csv")));
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(app.navigator.current_index(), 1);

        app.handle_paste(&dir.path().join("geo.csv").display().to_string());
        assert_eq!(app.navigator.current_index(), 0);
        assert!(!app.navigator.answer_revealed());
    }

    #[test]
    fn test_failed_paste_keeps_current_deck() {
        let dir = deck_dir();
        let mut app = App::new(dir.path());
        app.open(FileHandle::from_path(dir.path().join("geo.csv")));
        app.handle_paste("/nowhere/deck.pdf");

        assert_eq!(app.state, AppState::Cards);
        assert_eq!(app.navigator.deck_size(), 2);
    }

    #[test]
    fn test_back_to_menu_discards_deck() {
        let dir = deck_dir();
        let mut app = App::new(dir.path());
        app.open(FileHandle::from_path(dir.path().join("geo.csv")));
        app.handle_key(key(KeyCode::Esc));

        assert_eq!(app.state, AppState::Upload);
        assert_eq!(app.navigator.deck_size(), 0);
        assert!(app.deck_name.is_empty());
        assert_eq!(app.uploader.state(), &UploadState::Idle);
    }

    #[test]
    fn test_ctrl_c_quits_from_any_screen() {
        let dir = deck_dir();
        let mut app = App::new(dir.path());
        app.open(FileHandle::from_path(dir.path().join("geo.csv")));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_q_quits_from_menu() {
        let dir = deck_dir();
        let mut app = App::new(dir.path());
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_cards_input_toggle_and_navigate() {
        let mut nav = navigator(3);
        let mut state = AppState::Cards;

        handle_cards_input(&mut nav, key(KeyCode::Enter), &mut state);
        assert!(nav.answer_revealed());
        handle_cards_input(&mut nav, key(KeyCode::Char(' ')), &mut state);
        assert!(!nav.answer_revealed());

        handle_cards_input(&mut nav, key(KeyCode::Char(' ')), &mut state);
        handle_cards_input(&mut nav, key(KeyCode::Char('n')), &mut state);
        assert_eq!(nav.current_index(), 1);
        assert!(!nav.answer_revealed());

        handle_cards_input(&mut nav, key(KeyCode::Char('h')), &mut state);
        handle_cards_input(&mut nav, key(KeyCode::Char('p')), &mut state);
        assert_eq!(nav.current_index(), 2);
        assert_eq!(state, AppState::Cards);
    }

    #[test]
    fn test_shuffle_keeps_cards_and_resets_position() {
        let mut nav = navigator(10);
        let mut state = AppState::Cards;
        nav.next();
        nav.reveal();

        handle_cards_input(&mut nav, key(KeyCode::Char('s')), &mut state);
        assert_eq!(nav.current_index(), 0);
        assert!(!nav.answer_revealed());

        let mut questions: Vec<String> = nav.cards().iter().map(|c| c.question.clone()).collect();
        questions.sort();
        let mut expected: Vec<String> = (0..10).map(|i| format!("Q{i}")).collect();
        expected.sort();
        assert_eq!(questions, expected);
    }

    #[test]
    fn test_tick_clears_rejection() {
        let dir = deck_dir();
        let mut app = App::new(dir.path());
        app.handle_paste("deck.docx");
        assert!(matches!(app.uploader.state(), UploadState::Rejected { .. }));

        app.tick(Instant::now() + crate::upload::STATUS_RESET_AFTER);
        assert_eq!(app.uploader.state(), &UploadState::Idle);
    }
}
