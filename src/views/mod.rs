pub mod cards;
pub mod ui_helpers;
