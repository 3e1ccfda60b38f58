pub mod core;
pub mod loader;
pub mod source;

// Re-export the main types for convenience
pub use self::core::{Dictionary, WordFilter, DEFINITION_PLACEHOLDER};
pub use loader::{load_dictionary, spawn_load};
pub use source::{Bundle, DictionarySource, EmbeddedSource, FileSource};
