pub mod io;
pub mod models;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use models::{Section, Setting};
pub use parsing::{ParseOptions, parse_document, try_parse_document};
