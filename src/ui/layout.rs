use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct CardsLayout {
    pub header_area: Rect,
    pub card_area: Rect,
    pub position_area: Rect,
    pub help_area: Rect,
}

pub struct UploadLayout {
    pub title_area: Rect,
    pub list_area: Rect,
    pub status_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_cards_chunks(area: Rect) -> CardsLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    CardsLayout {
        header_area: chunks[0],
        card_area: chunks[1],
        position_area: chunks[2],
        help_area: chunks[3],
    }
}

pub fn calculate_upload_chunks(area: Rect) -> UploadLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    UploadLayout {
        title_area: chunks[0],
        list_area: chunks[1],
        status_area: chunks[2],
        help_area: chunks[3],
    }
}
