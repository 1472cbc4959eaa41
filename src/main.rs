mod engine;

use clap::Parser;
use log::error;

use crate::engine::{use_command, Cli};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = use_command(cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
