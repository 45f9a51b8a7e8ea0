// src/lib.rs

//! Passlift
//!
//! Converts saved passwords from Chrome's local "Login Data" SQLite store
//! into the XML documents Firefox's Password Exporter addon imports: one
//! file of saved credentials and one of never-save sites.
//!
//! # Pipeline
//!
//! - Reader: read-only scan of the `logins` table ([`store`])
//! - Normalizer/Classifier: origin stripping, secret decode, blocked vs
//!   form vs realm classification ([`normalize`], [`export::ExportEntry`])
//! - Writer: dedup, sort, container rendering, file output ([`export`])
//!
//! Any anomaly in the input aborts the run before output is trusted; there
//! is no recoverable-error path.

pub mod convert;
mod error;
pub mod export;
pub mod normalize;
pub mod store;

pub use convert::{ConvertOptions, ConvertSummary, run};
pub use error::{Error, Result};
pub use export::ExportEntry;
pub use normalize::NormalizedLogin;
pub use store::LoginRow;
