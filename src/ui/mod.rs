mod cards;
pub mod layout;
mod menu;

pub use cards::draw_cards;
pub use layout::{calculate_cards_chunks, calculate_upload_chunks};
pub use menu::{draw_menu, upload_status};
