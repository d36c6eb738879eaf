//! Styles reference file maintenance.
//!
//! `--update-styles` rebuilds `styles.txt` from the authenticated user's
//! collection: every style name across the collection, lowercased, most
//! frequent first. When the file exists, `--style` values are validated
//! against it before any search.

use crate::r#trait::DiscogsClient;
use crate::{DiscogsError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Collect style names across the user's whole collection and write them
/// to `path`, one per line. Returns the number of distinct styles written.
pub async fn update_styles_file<C: DiscogsClient>(client: &C, path: &Path) -> Result<usize> {
    let identity = client.identity().await?;
    log::info!("updating styles file from {}'s collection", identity.username);

    let mut styles = Vec::new();
    let mut page = 1;
    loop {
        let collection = client.collection_page(&identity.username, page).await?;
        for item in collection.items {
            for style in item.styles {
                styles.push(style.to_lowercase());
            }
        }
        if !collection.has_next_page {
            break;
        }
        page += 1;
    }

    let ranked = rank_by_frequency(styles);
    fs::write(path, ranked.join("\n") + "\n")?;
    Ok(ranked.len())
}

/// Deduplicate values and order them by how often they occurred, most
/// frequent first. Ties break alphabetically so the output is stable.
pub fn rank_by_frequency(values: Vec<String>) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.into_iter().map(|(value, _)| value).collect()
}

/// Read the styles file, one style per line, skipping blanks.
pub fn load_styles(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Check a `--style` value against the known styles list.
pub fn validate_style(style: &str, known: &[String]) -> Result<()> {
    let lowered = style.to_lowercase();
    if known.iter().any(|candidate| *candidate == lowered) {
        Ok(())
    } else {
        Err(DiscogsError::Config(format!(
            "unknown style '{style}'; run with --update-styles to refresh the styles file"
        )))
    }
}
