use clap::Parser;
use discogs_top_rated::{
    render_report, styles, DiscogsHttpClient, SearchCriteria, TopRatedSearch,
};
use std::env;
use std::path::PathBuf;

/// Discogs top-rated release search
#[derive(Parser)]
#[command(
    name = "discogs-top-rated",
    about = "Search the Discogs database and keep only highly rated releases",
    long_about = None
)]
struct Cli {
    /// Free-text search query
    #[arg(long)]
    query: Option<String>,

    /// Result type (release, master, artist, label)
    #[arg(long = "type")]
    item_type: Option<String>,

    /// Title filter
    #[arg(long)]
    title: Option<String>,

    /// Release title filter
    #[arg(long)]
    release_title: Option<String>,

    /// Credit filter
    #[arg(long)]
    credit: Option<String>,

    /// Artist name filter
    #[arg(long)]
    artist: Option<String>,

    /// Artist name variation filter
    #[arg(long)]
    anv: Option<String>,

    /// Label filter
    #[arg(long)]
    label: Option<String>,

    /// Genre filter
    #[arg(long)]
    genre: Option<String>,

    /// Style filter (validated against the styles file when present)
    #[arg(long)]
    style: Option<String>,

    /// Country filter
    #[arg(long)]
    country: Option<String>,

    /// Year filter; a range like 1990-1995 is passed through as-is
    #[arg(long)]
    year: Option<String>,

    /// Format filter (e.g. vinyl, CD)
    #[arg(long)]
    format: Option<String>,

    /// Catalog number filter
    #[arg(long)]
    catno: Option<String>,

    /// Barcode filter
    #[arg(long)]
    barcode: Option<String>,

    /// Track title filter
    #[arg(long)]
    track: Option<String>,

    /// Submitter username filter
    #[arg(long)]
    submitter: Option<String>,

    /// Contributor username filter
    #[arg(long)]
    contributor: Option<String>,

    /// Minimum community rating a release must reach
    #[arg(long, default_value_t = discogs_top_rated::DEFAULT_MIN_RATING)]
    min_rating: f64,

    /// Exclude releases that have videos attached
    #[arg(long)]
    no_videos: bool,

    /// Rebuild the styles file from your collection and exit
    #[arg(long)]
    update_styles: bool,

    /// Path of the styles reference file
    #[arg(long, default_value = "styles.txt")]
    styles_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Cli::parse();

    // Get the API token from the environment; the client takes it as an
    // explicit value so nothing below reads the environment ad hoc.
    let token = match env::var("DISCOGS_API_TOKEN") {
        Ok(token) if !token.is_empty() => token,
        _ => {
            eprintln!("❌ Error: DISCOGS_API_TOKEN environment variable not set");
            eprintln!();
            eprintln!("Create a personal access token at https://www.discogs.com/settings/developers");
            eprintln!("and export it before running:");
            eprintln!("  export DISCOGS_API_TOKEN=\"your_token\"");
            std::process::exit(1);
        }
    };

    let http_client = http_client::native::NativeClient::new();
    let client = DiscogsHttpClient::new(Box::new(http_client), token);

    if args.update_styles {
        match styles::update_styles_file(&client, &args.styles_file).await {
            Ok(count) => {
                println!(
                    "Wrote {count} styles to {}",
                    args.styles_file.display()
                );
                return Ok(());
            }
            Err(e) => {
                eprintln!("❌ Failed to update styles file: {e}");
                std::process::exit(1);
            }
        }
    }

    if let Some(style) = &args.style {
        if args.styles_file.exists() {
            let known = styles::load_styles(&args.styles_file)?;
            if let Err(e) = styles::validate_style(style, &known) {
                eprintln!("❌ {e}");
                std::process::exit(1);
            }
        }
    }

    let criteria = match build_criteria(&args) {
        Ok(criteria) => criteria,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    if criteria.is_empty() {
        eprintln!("❌ Error: provide at least one search filter (try --style, --country, --year)");
        std::process::exit(1);
    }

    let pipeline = TopRatedSearch::new(client);
    match pipeline.run(&criteria).await {
        Ok(report) => {
            print!("{}", render_report(&report));
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Search failed: {e}");
            std::process::exit(1);
        }
    }
}

fn build_criteria(args: &Cli) -> discogs_top_rated::Result<SearchCriteria> {
    let flags: [(&str, &Option<String>); 18] = [
        ("query", &args.query),
        ("type", &args.item_type),
        ("title", &args.title),
        ("release_title", &args.release_title),
        ("credit", &args.credit),
        ("artist", &args.artist),
        ("anv", &args.anv),
        ("label", &args.label),
        ("genre", &args.genre),
        ("style", &args.style),
        ("country", &args.country),
        ("year", &args.year),
        ("format", &args.format),
        ("catno", &args.catno),
        ("barcode", &args.barcode),
        ("track", &args.track),
        ("submitter", &args.submitter),
        ("contributor", &args.contributor),
    ];

    let mut builder = SearchCriteria::builder()
        .min_rating(args.min_rating)
        .no_videos(args.no_videos);
    for (key, value) in flags {
        if let Some(value) = value {
            builder = builder.filter(key, value)?;
        }
    }
    Ok(builder.build())
}
