use std::io;

use clap::Parser;
use cn::cli::{self, Cli};
use cn::log_error;

fn main() {
    let args = Cli::parse();

    let result = cli::load_config(&args)
        .and_then(|config| cli::run(&args, &config, io::stdin().lock(), &mut io::stdout().lock()));

    if let Err(err) = result {
        log_error!("cn", error = format!("{:#}", err));
        std::process::exit(1);
    }
}
