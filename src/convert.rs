// src/convert.rs

//! End-to-end conversion pipeline
//!
//! One batch run: read every row from the store, normalize and classify
//! each, then write the two output documents. The whole run is deterministic
//! and idempotent, so a run killed partway is fixed by rerunning.

use crate::error::Result;
use crate::export::{self, ExportEntry};
use crate::normalize;
use crate::store;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::info;

/// Well-known relative name of Chrome's credential store
pub const DEFAULT_STORE: &str = "Login Data";
/// Well-known output name for the saved-credentials document
pub const DEFAULT_PASSLIST: &str = "passlist.xml";
/// Well-known output name for the blocked-sites document
pub const DEFAULT_BLACKLIST: &str = "blacklist.xml";

/// Input and output locations for one conversion run
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub store_path: PathBuf,
    pub passlist_path: PathBuf,
    pub blacklist_path: PathBuf,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE),
            passlist_path: PathBuf::from(DEFAULT_PASSLIST),
            blacklist_path: PathBuf::from(DEFAULT_BLACKLIST),
        }
    }
}

/// Entry counts written per output document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    pub saved: usize,
    pub blocked: usize,
}

/// Run the full conversion: read, classify, write, report
///
/// Rendered entries are collected into `BTreeSet`s, which both collapses
/// rows that normalize to textually identical entries (Chrome stores full
/// form URLs, so origin-stripping creates duplicates) and yields the
/// lexicographic order the documents are written in.
pub fn run(opts: &ConvertOptions) -> Result<ConvertSummary> {
    let rows = store::read_logins(&opts.store_path)?;
    info!(
        "Read {} login rows from {}",
        rows.len(),
        opts.store_path.display()
    );

    let mut saved = BTreeSet::new();
    let mut blocked = BTreeSet::new();
    for row in &rows {
        let Some(login) = normalize::normalize(row)? else {
            continue;
        };
        let entry = ExportEntry::from_login(login);
        if entry.is_blocked() {
            blocked.insert(entry.render());
        } else {
            saved.insert(entry.render());
        }
    }

    let saved_count = export::write_passlist(&opts.passlist_path, &saved)?;
    println!(
        "Written {} entries to {}",
        saved_count,
        opts.passlist_path.display()
    );

    let blocked_count = export::write_blacklist(&opts.blacklist_path, &blocked)?;
    println!(
        "Written {} entries to {}",
        blocked_count,
        opts.blacklist_path.display()
    );

    Ok(ConvertSummary {
        saved: saved_count,
        blocked: blocked_count,
    })
}
