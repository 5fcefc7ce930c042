use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::csv::deck_name;
use crate::session::DeckMenu;
use crate::ui::layout::calculate_upload_chunks;
use crate::upload::{UploadState, Uploader};
use crate::utils::truncate_string;

fn key_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Status line text and color for the uploader's current state.
pub fn upload_status(state: &UploadState) -> (String, Color) {
    match state {
        UploadState::Idle => (
            "Drop a .csv file onto this window, or pick one below".to_string(),
            Color::Gray,
        ),
        UploadState::Loaded { file_name, cards } => {
            (format!("Loaded {} ({} cards)", file_name, cards), Color::Green)
        }
        UploadState::Rejected { file_name, .. } => (
            format!("{} is not a CSV file. Please choose a .csv file", file_name),
            Color::Yellow,
        ),
        UploadState::Failed {
            file_name, message, ..
        } => (format!("Could not read {}: {}", file_name, message), Color::Red),
    }
}

pub fn draw_menu(f: &mut Frame, menu: &DeckMenu, uploader: &Uploader) {
    let layout = calculate_upload_chunks(f.area());

    let title = Paragraph::new("Flipcards v0.1.0")
        .style(key_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.title_area);

    let name_width = layout.list_area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = if menu.files.is_empty() {
        vec![ListItem::new(format!("No CSV files found in {}", menu.dir.display())).style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        menu.files
            .iter()
            .enumerate()
            .map(|(i, path)| {
                let name = truncate_string(&deck_name(path), name_width);
                let style = if i == menu.selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(name).style(style)
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Decks in {}", menu.dir.display())),
    );
    f.render_widget(list, layout.list_area);

    let (status_text, status_color) = upload_status(uploader.state());
    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Upload"));
    f.render_widget(status, layout.status_area);

    let help_text = vec![Line::from(vec![
        Span::styled("↑/↓", key_style()),
        Span::from(" Navigate  "),
        Span::styled("Enter", key_style()),
        Span::from(" Open  "),
        Span::styled("r", key_style()),
        Span::from(" Rescan  "),
        Span::styled("Esc/q", key_style()),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
