use crate::math::render_math_text;
use crate::navigator::Navigator;
use crate::ui::layout::calculate_cards_chunks;
use crate::ui::menu::upload_status;
use crate::upload::{UploadState, Uploader};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_cards(f: &mut Frame, navigator: &Navigator, deck_name: &str, uploader: &Uploader) {
    let layout = calculate_cards_chunks(f.area());

    // A failed drop while studying is reported in the header; the deck stays.
    let status = uploader.state();
    let (header_text, header_style) = if matches!(
        status,
        UploadState::Rejected { .. } | UploadState::Failed { .. }
    ) {
        let (text, color) = upload_status(status);
        (text, Style::default().fg(color))
    } else {
        (
            deck_name.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    };
    let header = Paragraph::new(header_text)
        .style(header_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let card = navigator.current_card();
    let (card_title, card_text, border_color) = if card.is_empty() {
        (
            "Flashcards",
            Text::from(Span::styled(
                navigator.visible_text().to_string(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )),
            Color::DarkGray,
        )
    } else if navigator.answer_revealed() {
        ("Answer", render_math_text(navigator.visible_text()), Color::Green)
    } else {
        ("Question", render_math_text(navigator.visible_text()), Color::Cyan)
    };

    // Vertically center short cards inside the panel.
    let inner_height = layout.card_area.height.saturating_sub(2) as usize;
    let padding = inner_height.saturating_sub(card_text.lines.len()) / 2;
    let mut centered = Text::default();
    for _ in 0..padding {
        centered.push_line(Line::from(""));
    }
    centered.extend(card_text.lines);

    let card_widget = Paragraph::new(centered)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title(card_title),
        );
    f.render_widget(card_widget, layout.card_area);

    let position = Paragraph::new(navigator.position_label())
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(position, layout.position_area);

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let flip_label = if navigator.answer_revealed() {
        " Show Question  "
    } else {
        " Show Answer  "
    };
    let help_text = vec![Line::from(vec![
        Span::styled("Space", key_style),
        Span::from(flip_label),
        Span::styled("←/→", key_style),
        Span::from(" Previous/Next  "),
        Span::styled("s", key_style),
        Span::from(" Shuffle  "),
        Span::styled("Esc", key_style),
        Span::from(" Decks  "),
        Span::styled("Ctrl+C", key_style),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
