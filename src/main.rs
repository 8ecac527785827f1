mod app;
mod cli;
mod client;
mod config;
mod consts;
mod error;
mod extract;
mod puzzle;
mod scaffold;
mod session;
mod utils;

use chrono::Local;
use clap::Parser;

use app::{CommandContext, run_command};
use cli::{Cli, Commands};
use client::HttpClient;
use config::Config;
use error::AppError;
use scaffold::{Scaffolder, Template};
use session::FileSessionStore;
use utils::init_logging;

fn main() {
    let config = Config::load();
    let cli = Cli::parse().with_config(&config);
    init_logging(cli.debug);
    if let Some(ref path) = config.source {
        tracing::debug!("Loaded config from {}", path.display());
    }
    if let Some(extension) = config.ignored_extension() {
        tracing::warn!(extension, "config sets extension without template, ignoring it");
    }

    match run(&cli, &config) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
        }
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli, config: &Config) -> Result<String, AppError> {
    // Only download renders the template
    let template = match (&cli.command, &config.template) {
        (Commands::Download { .. }, Some(path)) => {
            Template::from_file(path, config.extension.as_deref())?
        }
        _ => Template::builtin(),
    };
    let store = FileSessionStore::new(cli.session_path());
    tracing::debug!(path = %store.path().display(), "using session file");
    let client = HttpClient::new(config.client_settings());
    let scaffolder = Scaffolder::new(template);

    let ctx = CommandContext {
        store: &store,
        client: &client,
        scaffolder: &scaffolder,
        today: Local::now().date_naive(),
    };
    run_command(&cli.command, &ctx)
}
