//! Formatting helpers for presenting dates on content cards.

use time::{format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime};

/// Render an RFC3339 timestamp as a short badge like `May 12, 2026`.
/// Unparseable input falls back to a dash rather than an error; post dates
/// are cosmetic.
pub fn format_post_date(raw: &str) -> String {
    OffsetDateTime::parse(raw, &Rfc3339)
        .ok()
        .and_then(|ts| {
            ts.format(&format_description!(
                "[month repr:short] [day padding:none], [year]"
            ))
            .ok()
        })
        .unwrap_or_else(|| "—".to_string())
}
