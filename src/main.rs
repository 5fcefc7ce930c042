use clap::Parser;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use flipcards::{App, AppState, Cli, FileHandle, draw_cards, draw_menu, logger};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn main() -> io::Result<()> {
    let config = Cli::parse().into_config();

    if let Err(e) = logger::init(&config.log_file, config.log_level) {
        eprintln!("warning: logging disabled: {}", e);
    }
    log::info!("starting flipcards, deck directory {}", config.deck_dir.display());

    let mut app = App::new(&config.deck_dir);
    if let Some(path) = &config.initial_file {
        app.open(FileHandle::from_path(path));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("terminal error: {}", e);
    }
    log::info!("exiting");
    log::logger().flush();
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| match app.state {
            AppState::Upload => draw_menu(f, &app.menu, &app.uploader),
            AppState::Cards => draw_cards(f, &app.navigator, &app.deck_name, &app.uploader),
        })?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Paste(text) => app.handle_paste(&text),
                _ => {}
            }
        }

        app.tick(Instant::now());
    }

    Ok(())
}
