//! Plain-text rendering of a search report.
//!
//! Pure formatting: no network, no disk. One block per qualifying release,
//! in search-result order, each ending with the canonical Discogs URL built
//! from the release id and a slugified title.

use crate::types::SearchReport;
use std::fmt::Write;

const RELEASE_URL_BASE: &str = "https://www.discogs.com/release";

/// Turn a release title into a URL-safe slug.
///
/// Runs of non-alphanumeric characters collapse into a single hyphen, the
/// way Discogs builds its release paths. Casing is preserved.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;
    for ch in title.chars() {
        if ch.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// Canonical Discogs URL for a release.
pub fn release_url(id: u64, title: &str) -> String {
    let slug = slugify(title);
    if slug.is_empty() {
        format!("{RELEASE_URL_BASE}/{id}")
    } else {
        format!("{RELEASE_URL_BASE}/{id}-{slug}")
    }
}

/// Render the report as human-readable text.
///
/// A line with the total result count, a line with the high-rated count,
/// then one block per qualifying release: artist, title, country, year,
/// rating, and the release URL.
pub fn render_report(report: &SearchReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} results.", report.total_results);
    let _ = writeln!(out, "{} results with high ratings:", report.releases.len());

    for release in &report.releases {
        let country = release.country.as_deref().unwrap_or("Unknown");
        let year = release.year.as_deref().unwrap_or("Unknown");
        let _ = writeln!(out);
        // One decimal keeps whole-number ratings in the same shape ("5.0", not "5")
        let _ = writeln!(
            out,
            "{} - {} - {} - {} - rated {:.1}",
            release.artist, release.title, country, year, release.rating
        );
        let _ = writeln!(out, "{}", release_url(release.id, &release.title));
    }

    out
}
