//! `ph-digest` — fetch and report the top recently posted Product Hunt
//! products.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use producthunt_digest::{
    acquire_access_token, extract_posts, fetch_posts, report, Config, HttpSession, QueryWindow,
};

#[derive(Parser, Debug)]
#[command(name = "ph-digest", about = "Fetch the top recent Product Hunt products", version)]
struct Cli {
    /// How many days back the query window reaches
    #[arg(long, default_value_t = 7)]
    days_ago: i64,

    /// Maximum number of products to fetch
    #[arg(long, default_value_t = 10)]
    limit: u32,

    /// Save the raw JSON response to a file
    #[arg(long)]
    save: bool,

    /// Where to save the raw response (implies --save)
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Only run the connectivity diagnostics and exit
    #[arg(long)]
    probe: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Env vars may come from a .env file; missing file is fine.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Please add your credentials to the environment or a .env file.");
            return ExitCode::FAILURE;
        }
    };

    let session = HttpSession::new(&config);
    let mut out = io::stdout();

    if cli.probe {
        run_probe(&session, &mut out).await;
        return ExitCode::SUCCESS;
    }

    println!("Using credentials - Client ID: {}...", config.client_id().preview());
    println!("Getting access token...");

    session.prime().await;
    let token = match acquire_access_token(&session, &config).await {
        Ok(token) => token,
        Err(e) => {
            eprintln!("Error getting token: {e}");
            let _ = report::render_auth_failure(&mut out);
            // Stage failures are reported via text, not exit codes.
            return ExitCode::SUCCESS;
        }
    };

    println!("Access token obtained successfully!");
    println!("\nFetching recent top products...");

    let window = QueryWindow {
        days_ago: cli.days_ago,
        limit: cli.limit,
        ..QueryWindow::default()
    };

    let payload = match fetch_posts(&session, &config, &token, &window).await {
        Ok(payload) => payload,
        Err(e) => {
            eprintln!("Error fetching products: {e}");
            let _ = report::render_query_failure(&mut out);
            return ExitCode::SUCCESS;
        }
    };

    match extract_posts(&payload) {
        Some(posts) => {
            if report::render_listing(&mut out, &posts, window.days_ago).is_err() {
                return ExitCode::FAILURE;
            }
        }
        None => {
            let _ = report::render_query_failure(&mut out);
            return ExitCode::SUCCESS;
        }
    }

    if cli.save || cli.output.is_some() {
        let path = cli
            .output
            .unwrap_or_else(|| PathBuf::from(report::DEFAULT_OUTPUT_FILE));
        match report::save_raw(&payload, &path) {
            Ok(()) => println!("Raw response saved to {}", path.display()),
            Err(e) => eprintln!("Failed to save raw response: {e}"),
        }
    }

    ExitCode::SUCCESS
}

async fn run_probe(session: &HttpSession, out: &mut impl Write) {
    // Probe output is best-effort console text.
    let _ = writeln!(out, "Testing connection to Product Hunt...");
    for result in session.probe().await {
        let _ = writeln!(out, "\nTesting {} ({})...", result.name, result.url);
        match result.status {
            Some(status) => {
                let _ = writeln!(out, "Status code: {status}");
                if let Some(bytes) = result.body_bytes {
                    let _ = writeln!(out, "Response size: {bytes} bytes");
                }
                if let Some(cf_ray) = &result.cf_ray {
                    let _ = writeln!(out, "Cloudflare protection detected (CF-RAY: {cf_ray})");
                }
            }
            None => {
                let _ = writeln!(
                    out,
                    "Connection failed: {}",
                    result.error.as_deref().unwrap_or("unknown error")
                );
            }
        }
    }
}
