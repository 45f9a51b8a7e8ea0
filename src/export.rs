// src/export.rs

//! Rendering and writing of Password Exporter XML documents
//!
//! The output format is the one Firefox's Password Exporter addon imports:
//! an `<entries>` container with one `<entry>` element per credential or
//! blocked site. Saved entries carry either a form submit URL or an HTTP
//! realm, never both; a login with no action URL only round-trips into
//! Firefox login forms when exported realm-based.

use crate::error::{Error, Result};
use crate::normalize::NormalizedLogin;
use quick_xml::escape::escape;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Container markup for the saved-credentials document
const PASSLIST_HEADER: &str = "<xml><entries ext=\"Password Exporter\" extxmlversion=\"1.1\" type=\"saved\" encrypt=\"false\">\n";

/// Container markup for the blocked-sites document
const BLACKLIST_HEADER: &str =
    "<xml><entries ext=\"Password Exporter\" extxmlversion=\"1.0.2\" type=\"rejected\">\n";

const LIST_FOOTER: &str = "</entries></xml>\n";

/// A classified login, ready to render as one `<entry>` element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportEntry {
    /// Site the user told Chrome never to save credentials for
    Blocked { host: String },
    /// Credential tied to a specific login form
    Form {
        host: String,
        user: String,
        password: String,
        form_submit_url: String,
        user_field: String,
        pass_field: String,
    },
    /// Credential keyed by HTTP auth realm (no form action URL in the store)
    Realm {
        host: String,
        user: String,
        password: String,
        http_realm: String,
        user_field: String,
        pass_field: String,
    },
}

impl ExportEntry {
    /// Classify a normalized login into its export shape
    pub fn from_login(login: NormalizedLogin) -> Self {
        if login.blocked {
            return Self::Blocked { host: login.origin };
        }
        if login.action_origin.is_empty() {
            Self::Realm {
                host: login.origin,
                user: login.username,
                password: login.password,
                http_realm: login.signon_realm,
                user_field: login.username_element,
                pass_field: login.password_element,
            }
        } else {
            Self::Form {
                host: login.origin,
                user: login.username,
                password: login.password,
                form_submit_url: login.action_origin,
                user_field: login.username_element,
                pass_field: login.password_element,
            }
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked { .. })
    }

    /// Render as one `<entry>` line, XML-escaping every attribute value
    pub fn render(&self) -> String {
        match self {
            Self::Blocked { host } => format!("<entry host=\"{}\"/>\n", escape(host.as_str())),
            Self::Form {
                host,
                user,
                password,
                form_submit_url,
                user_field,
                pass_field,
            } => format!(
                "<entry host=\"{}\" user=\"{}\" password=\"{}\" formSubmitURL=\"{}\" userFieldName=\"{}\" passFieldName=\"{}\" />\n",
                escape(host.as_str()),
                escape(user.as_str()),
                escape(password.as_str()),
                escape(form_submit_url.as_str()),
                escape(user_field.as_str()),
                escape(pass_field.as_str()),
            ),
            Self::Realm {
                host,
                user,
                password,
                http_realm,
                user_field,
                pass_field,
            } => format!(
                "<entry host=\"{}\" user=\"{}\" password=\"{}\" httpRealm=\"{}\" userFieldName=\"{}\" passFieldName=\"{}\" />\n",
                escape(host.as_str()),
                escape(user.as_str()),
                escape(password.as_str()),
                escape(http_realm.as_str()),
                escape(user_field.as_str()),
                escape(pass_field.as_str()),
            ),
        }
    }
}

/// Write one container document, truncating any prior content
///
/// `entries` is already deduplicated and lexicographically ordered by virtue
/// of being a `BTreeSet`; the document is just header + entries + footer.
/// Returns the number of entries written.
fn write_document(path: &Path, header: &str, entries: &BTreeSet<String>) -> Result<usize> {
    let mut doc = String::with_capacity(
        header.len() + LIST_FOOTER.len() + entries.iter().map(|e| e.len()).sum::<usize>(),
    );
    doc.push_str(header);
    for entry in entries {
        doc.push_str(entry);
    }
    doc.push_str(LIST_FOOTER);

    fs::write(path, doc).map_err(|source| Error::Write {
        path: path.display().to_string(),
        source,
    })?;

    debug!("Wrote {} entries to {}", entries.len(), path.display());
    Ok(entries.len())
}

/// Write the saved-credentials document
pub fn write_passlist(path: &Path, entries: &BTreeSet<String>) -> Result<usize> {
    write_document(path, PASSLIST_HEADER, entries)
}

/// Write the blocked-sites document
pub fn write_blacklist(path: &Path, entries: &BTreeSet<String>) -> Result<usize> {
    write_document(path, BLACKLIST_HEADER, entries)
}
