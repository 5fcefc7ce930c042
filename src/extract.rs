use crate::models::Flashcard;
use serde_json::Value;

/// Column holding the question. Column 0 is a title and is never read.
const QUESTION_COLUMN: usize = 1;
const ANSWER_COLUMN: usize = 2;

/// Turn parsed rows into cards, keeping input order.
///
/// Rows that are not objects, have fewer than two columns, or whose question
/// or answer cell is missing, not a string, or blank are skipped.
pub fn extract(rows: Option<&[Value]>) -> Vec<Flashcard> {
    let Some(rows) = rows else {
        return Vec::new();
    };

    let cards: Vec<Flashcard> = rows.iter().filter_map(row_to_card).collect();

    log::debug!(
        "extracted {} cards from {} rows ({} skipped)",
        cards.len(),
        rows.len(),
        rows.len() - cards.len()
    );

    cards
}

pub fn extract_rows(rows: &[Value]) -> Vec<Flashcard> {
    extract(Some(rows))
}

fn row_to_card(row: &Value) -> Option<Flashcard> {
    let record = row.as_object()?;
    if record.len() < 2 {
        return None;
    }

    let question = non_blank(record.values().nth(QUESTION_COLUMN)?)?;
    let answer = non_blank(record.values().nth(ANSWER_COLUMN)?)?;

    Some(Flashcard::new(question, answer))
}

fn non_blank(value: &Value) -> Option<&str> {
    let trimmed = value.as_str()?.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
