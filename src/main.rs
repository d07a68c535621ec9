use std::path::Path;

use anyhow::Context;
use clap::Parser;

mod api;
mod cli;
mod generators;
mod models;

use crate::api::ServerSettings;
use crate::cli::Args;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    log::info!("Starting PassForge password generator");

    if !args.static_dir.exists() {
        log::warn!(
            "Static directory {} does not exist; the API will run but the UI will 404",
            args.static_dir.display()
        );
    }

    let bind_address = args.bind.clone();
    let port = args.port;
    api::start_server(ServerSettings {
        bind_address: args.bind,
        port,
        static_dir: args.static_dir,
    })
    .await
    .with_context(|| format!("HTTP server failed on {}:{}", bind_address, port))
}
