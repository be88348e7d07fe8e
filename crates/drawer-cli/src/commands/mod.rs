pub mod common;
pub mod completions;
pub mod render;
pub mod strings;
pub mod styles;
