use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::ehl::{self, DEFAULT_BASE_URL, EhlClient};
use crate::error::Result;
use crate::model::Team;
use crate::output::{self, Stats};

/// Generate iCalendar subscriptions for every EHL team.
///
/// Writes one file per team and alarm combination, plus league-wide
/// files, into the output directory.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory the calendar files are written to.
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Base URL of the EHL API.
    #[arg(long, env = "EHL_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Directory holding index.html and style.css to publish alongside the calendars.
    #[arg(long)]
    pub web_dir: Option<PathBuf>,
}

/// Log to stderr; `RUST_LOG` overrides the default `info` level.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Snippet for the team picker on the static page.
pub fn team_list(teams: &[Team]) -> String {
    let mut out = String::new();
    for team in teams {
        out.push_str(&format!("  {{name: \"{}\", slug: \"{}\"}},\n", team.short_name, team.slug()));
    }
    out
}

pub fn summary(stats: &Stats) -> String {
    format!(
        "Generated {} files ({:.2} KB total)",
        stats.files_written,
        stats.total_bytes as f64 / 1024.0
    )
}

/// Fetch, generate and publish. Returns the sorted team list and write stats.
pub fn run(args: &Args) -> Result<(Vec<Team>, Stats)> {
    let client = EhlClient::new(args.base_url.as_str());

    let season = client.current_season()?;
    info!(season = %season.name, uuid = %season.uuid, "Current season");

    let games = client.fetch_games(&season.uuid)?;

    let mut teams = ehl::extract_teams(&games);
    teams.sort_by(|a, b| a.short_name.cmp(&b.short_name));
    for team in &teams {
        info!(team = %team.short_name, slug = %team.slug(), "Team");
    }

    info!(output = %args.output.display(), "Generating calendars");
    let stats = output::generate_all_calendars(&args.output, &games, &teams, &season.name, Utc::now())?;

    if let Some(web_dir) = &args.web_dir {
        output::copy_web_files(web_dir, &args.output)?;
        info!(web_dir = %web_dir.display(), "Copied web files");
    }

    Ok((teams, stats))
}
