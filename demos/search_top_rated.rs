//! Run a top-rated search end to end.
//!
//! Usage: DISCOGS_API_TOKEN=... cargo run --example search_top_rated

use discogs_top_rated::{
    render_report, DiscogsHttpClient, Result, SearchCriteria, TopRatedSearch,
};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let token = std::env::var("DISCOGS_API_TOKEN")
        .expect("DISCOGS_API_TOKEN environment variable must be set");

    let http_client = http_client::native::NativeClient::new();
    let client = DiscogsHttpClient::new(Box::new(http_client), token);

    let criteria = SearchCriteria::builder()
        .filter("style", "ambient")?
        .filter("country", "UK")?
        .filter("year", "1990-1995")?
        .filter("format", "vinyl")?
        .min_rating(4.5)
        .build();

    let report = TopRatedSearch::new(client).run(&criteria).await?;
    print!("{}", render_report(&report));

    Ok(())
}
