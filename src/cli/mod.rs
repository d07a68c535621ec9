// src/cli/mod.rs
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Port for the HTTP server
    #[arg(long, env = "PASSFORGE_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Address to bind the server to
    #[arg(long, env = "PASSFORGE_BIND", default_value = "0.0.0.0")]
    pub bind: String,

    /// Directory the web UI is served from
    #[arg(long, env = "PASSFORGE_STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,
}
