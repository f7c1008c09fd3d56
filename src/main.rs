mod cli;
mod config;
mod game;
mod geography;
mod model;
mod share;
mod storage;

use std::{io, process};

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use config::Config;
use storage::Storage;

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    let root = Storage::default_root().unwrap_or_else(|| {
        eprintln!("Could not determine home directory.");
        process::exit(1);
    });

    let storage = match Storage::new(root) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to initialize storage: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = cli::run(config, &storage) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
