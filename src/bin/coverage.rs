//! Translation coverage report.
//!
//! Usage:
//!   cargo run --bin coverage              # Print coverage summary
//!   cargo run --bin coverage -- --strict  # Fail when any locale has gaps
//!
//! Also reports pattern violations and text reused across keys.

use anyhow::{bail, Result};
use locale_router::i18n::{TranslationTable, TranslationValidator, COMMON_PATTERNS};
use tracing::{info, warn};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("coverage=info".parse()?),
        )
        .init();

    let strict = std::env::args().any(|arg| arg == "--strict");

    let table = TranslationTable::global();
    let validator = TranslationValidator::new(table);

    let report = validator.coverage();
    println!("{}", report.summary());

    for (locale, issues) in validator.validate_patterns(COMMON_PATTERNS)? {
        for issue in issues {
            warn!("{}.{}: {}", locale, issue.key, issue.issue);
        }
    }

    let keys = table.keys();
    for duplicate in validator.validate(&keys).duplicates {
        info!(
            "\"{}\" reused in {} for keys {:?}",
            duplicate.text, duplicate.locale, duplicate.keys
        );
    }

    if strict && report.has_gaps() {
        bail!(
            "Translation coverage incomplete: {}/{} translations present",
            report.translated,
            report.possible
        );
    }

    Ok(())
}
