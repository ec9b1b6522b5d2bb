pub mod content;
pub mod exercise;
