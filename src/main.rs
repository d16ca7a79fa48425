mod api;
mod app;
mod cli;
mod config;
mod consts;
mod error;
mod input;
mod output;
mod payload;
mod request_log;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Settings;
use output::{output_summary_json, print_planned_payloads, print_summary_table};

fn init_logging(cli: &Cli) {
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let settings = match &cli.settings {
        Some(path) => Settings::load_from(path).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }),
        None => Settings::discover(),
    };
    let cli = cli.with_settings(settings);

    let summary = match app::run(&cli) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if cli.json {
        println!("{}", output_summary_json(&summary));
    } else {
        if cli.dry_run {
            print_planned_payloads(&summary);
        }
        print_summary_table(&summary, cli.use_color());
    }

    if let Some(reason) = &summary.aborted {
        eprintln!("Error: {reason}");
        std::process::exit(1);
    }
    if cli.strict && summary.has_failures() {
        std::process::exit(2);
    }
}
