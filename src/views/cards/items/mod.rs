// Card building blocks. render.rs re-exports the entry point.
pub mod card;
mod action_button;
mod cover;
mod pills_row;
pub use card::{product_card, CardResponse};
