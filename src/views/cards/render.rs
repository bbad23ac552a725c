// Render facade for cards: external code uses views::cards::{product_card, CARD_WIDTH}.

pub use crate::ui_constants::CARD_WIDTH;
pub use crate::views::cards::items::{product_card, CardResponse};
