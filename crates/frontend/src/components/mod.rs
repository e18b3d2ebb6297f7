//! Reusable UI components.

mod code_block;
mod preview_image;
mod week_card;

pub use code_block::CodeBlock;
pub use preview_image::PreviewImage;
pub use week_card::{CardContent, WeekCard};
