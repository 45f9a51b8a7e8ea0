// src/normalize.rs

//! Normalization of raw login rows
//!
//! Firefox's login storage keys credentials by origin only (no path), so
//! both URL fields are stripped to `scheme://host[:port]` form before
//! export. Chrome's own `chrome:` pseudo-URL rows are not real external
//! credentials and are dropped before normalization.

use crate::error::{Error, Result};
use crate::store::LoginRow;
use tracing::debug;
use url::Url;

/// A login row reduced to the fields the export format needs
///
/// URLs are origin-only and the secret is decoded to text. The blocked flag
/// decides which output document the row ends up in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedLogin {
    pub origin: String,
    pub action_origin: String,
    pub username: String,
    pub password: String,
    pub username_element: String,
    pub password_element: String,
    pub signon_realm: String,
    pub blocked: bool,
}

/// Strip a URL to origin-only form: scheme, host, and explicit port
///
/// Empty input stays empty. Non-empty input must be a parseable http or
/// https URL; anything else is a hard error carrying the row's identity,
/// since an unanticipated shape needs manual review rather than a silent
/// skip. Stripping an already-stripped origin returns it unchanged.
pub fn strip_origin(raw: &str, row: &LoginRow) -> Result<String> {
    if raw.is_empty() {
        return Ok(String::new());
    }

    let parsed = Url::parse(raw).map_err(|_| unexpected_scheme(raw, row))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(unexpected_scheme(raw, row));
    }
    let host = parsed
        .host_str()
        .ok_or_else(|| unexpected_scheme(raw, row))?;

    // Url::port() is None for the scheme's default port, so default ports
    // are not round-tripped into the output.
    Ok(match parsed.port() {
        Some(port) => format!("{}://{}:{}", parsed.scheme(), host, port),
        None => format!("{}://{}", parsed.scheme(), host),
    })
}

fn unexpected_scheme(url: &str, row: &LoginRow) -> Error {
    Error::UnexpectedScheme {
        url: url.to_string(),
        origin: row.origin_url.clone(),
        realm: row.signon_realm.clone(),
        username: row.username_value.clone(),
    }
}

/// Map a raw store row into its normalized form
///
/// Returns `Ok(None)` for Chrome-internal rows, which contribute nothing to
/// either output document.
pub fn normalize(row: &LoginRow) -> Result<Option<NormalizedLogin>> {
    if row.origin_url.starts_with("chrome:") {
        debug!("Skipping Chrome-internal row for {}", row.origin_url);
        return Ok(None);
    }

    let origin = strip_origin(&row.origin_url, row)?;
    let action_origin = strip_origin(&row.action_url, row)?;
    let password =
        String::from_utf8(row.password_value.clone()).map_err(|source| Error::SecretDecode {
            origin: row.origin_url.clone(),
            username: row.username_value.clone(),
            source,
        })?;

    Ok(Some(NormalizedLogin {
        origin,
        action_origin,
        username: row.username_value.clone(),
        password,
        username_element: row.username_element.clone(),
        password_element: row.password_element.clone(),
        signon_realm: row.signon_realm.clone(),
        blocked: row.blacklisted_by_user,
    }))
}
