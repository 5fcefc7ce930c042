/// One parsed CSV row: header name to cell value, in column order.
pub type RowRecord = serde_json::Map<String, serde_json::Value>;

/// Text shown in place of a card when the deck is empty.
pub const EMPTY_DECK_TEXT: &str = "No cards found.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

impl Flashcard {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// What the navigator is pointing at. `Empty` is a display fallback only and
/// carries no data of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentCard<'a> {
    Card(&'a Flashcard),
    Empty,
}

impl<'a> CurrentCard<'a> {
    pub fn question(self) -> &'a str {
        match self {
            CurrentCard::Card(card) => card.question.as_str(),
            CurrentCard::Empty => EMPTY_DECK_TEXT,
        }
    }

    pub fn answer(self) -> &'a str {
        match self {
            CurrentCard::Card(card) => card.answer.as_str(),
            CurrentCard::Empty => "",
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, CurrentCard::Empty)
    }

    pub fn as_card(self) -> Option<&'a Flashcard> {
        match self {
            CurrentCard::Card(card) => Some(card),
            CurrentCard::Empty => None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Upload,
    Cards,
}
