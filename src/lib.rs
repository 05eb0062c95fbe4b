// lib.rs - 库函数

pub mod annotate;
pub mod catalog;
pub mod classifier;
pub mod config;
pub mod error;
pub mod profile;
pub mod table;

pub use annotate::{annotate, Summary};
pub use catalog::{build_catalog, Ambiguity, ReferenceCatalog, ReferenceEntry};
pub use classifier::{classify, classify_all, Assignment};
pub use config::Config;
pub use error::{Error, Result};
pub use profile::{Call, Profile, Schema, SENTINEL};
pub use table::Table;
