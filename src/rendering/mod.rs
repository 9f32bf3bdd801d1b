pub mod letterbox;
pub mod png_output;

pub use letterbox::{fit, letterbox, Placement};
