pub mod export;
pub mod parse;
pub mod summarize;
pub mod validate;
