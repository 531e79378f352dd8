//! Dialect dictionary loading and lookup.
//!
//! A dictionary is a table of `dialect term, standard term, region?` rows.
//! [`DictionaryLoader`] turns such a table into a [`DialectIndex`], which is
//! built once at startup and only read afterwards.

pub mod entry;
pub mod index;
pub mod loader;

pub use entry::DialectEntry;
pub use index::DialectIndex;
pub use loader::DictionaryLoader;
