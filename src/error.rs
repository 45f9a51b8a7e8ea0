// src/error.rs

//! Error types for the conversion pipeline
//!
//! Every anomaly is fatal by design: this is a one-shot offline tool, and a
//! silently wrong import file is worse than no file at all. Errors that stem
//! from a particular store row carry the row's identifying fields so the
//! operator can extend the rules or fix the data by hand.

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting a credential store
#[derive(Error, Debug)]
pub enum Error {
    /// The Login Data store is missing, unreadable, or not a logins database
    #[error("Failed to open credential store '{path}': {source}")]
    StoreOpen {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    /// A stored URL uses a shape the origin-stripping rule does not anticipate
    #[error(
        "Unexpected URL '{url}' (origin '{origin}', realm '{realm}', user '{username}'): \
         only http/https URLs can be stripped to origin form"
    )]
    UnexpectedScheme {
        url: String,
        origin: String,
        realm: String,
        username: String,
    },

    /// Stored password bytes are not valid UTF-8
    #[error("Password for origin '{origin}' (user '{username}') is not valid UTF-8")]
    SecretDecode {
        origin: String,
        username: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// An output document could not be created or written
    #[error("Failed to write '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
