//! Data models for the Kohalabel server

pub mod biblio;
pub mod branch;
pub mod item;
pub mod label;

// Re-export commonly used types
pub use biblio::{Biblio, BiblioMetadata};
pub use branch::Branch;
pub use item::CatalogItem;
pub use label::{LabelQuery, LabelRecord};
