pub mod content;
pub mod items;
pub mod motion;
mod render;

pub use render::*;
