use crate::models::{CurrentCard, EMPTY_DECK_TEXT, Flashcard};

/// Position within a deck plus whether the answer side is showing.
///
/// Invariant: `current_index < max(1, deck_size)`. With an empty deck the
/// index is pinned at 0 and [`Navigator::current_card`] yields
/// [`CurrentCard::Empty`].
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    cards: Vec<Flashcard>,
    current_index: usize,
    answer_revealed: bool,
}

impl Navigator {
    pub fn new(cards: Vec<Flashcard>) -> Self {
        Self {
            cards,
            current_index: 0,
            answer_revealed: false,
        }
    }

    /// Swap in a new deck and start over at the first card, question side up.
    pub fn replace_deck(&mut self, cards: Vec<Flashcard>) {
        self.cards = cards;
        self.current_index = 0;
        self.answer_revealed = false;
    }

    pub fn reveal(&mut self) {
        self.answer_revealed = true;
    }

    pub fn hide(&mut self) {
        self.answer_revealed = false;
    }

    pub fn toggle(&mut self) {
        self.answer_revealed = !self.answer_revealed;
    }

    pub fn next(&mut self) {
        self.answer_revealed = false;
        let size = self.deck_size();
        if size == 0 {
            self.current_index = 0;
        } else {
            self.current_index = (self.current_index + 1) % size;
        }
    }

    pub fn previous(&mut self) {
        self.answer_revealed = false;
        let size = self.deck_size();
        if size == 0 {
            self.current_index = 0;
        } else {
            self.current_index = (self.current_index + size - 1) % size;
        }
    }

    pub fn current_card(&self) -> CurrentCard<'_> {
        match self.cards.get(self.current_index) {
            Some(card) => CurrentCard::Card(card),
            None => CurrentCard::Empty,
        }
    }

    /// Text for the side currently facing up.
    pub fn visible_text(&self) -> &str {
        let card = self.current_card();
        if card.is_empty() {
            EMPTY_DECK_TEXT
        } else if self.answer_revealed {
            card.answer()
        } else {
            card.question()
        }
    }

    /// "3 / 10" style indicator; "0 / 0" when there is nothing to show.
    pub fn position_label(&self) -> String {
        let size = self.deck_size();
        let position = if size > 0 { self.current_index + 1 } else { 0 };
        format!("{} / {}", position, size)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn deck_size(&self) -> usize {
        self.cards.len()
    }

    pub fn answer_revealed(&self) -> bool {
        self.answer_revealed
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }
}
