use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use hockeykalender::cli::{self, Args};

fn main() -> ExitCode {
    cli::init_logging();
    let args = Args::parse();

    info!("Starting EHL calendar generation");
    match cli::run(&args) {
        Ok((teams, stats)) => {
            println!("{}", cli::summary(&stats));
            println!("\nTeams for HTML page:");
            print!("{}", cli::team_list(&teams));
            info!("Done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Calendar generation failed");
            ExitCode::FAILURE
        }
    }
}
