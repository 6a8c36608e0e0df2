// SPDX-License-Identifier: MPL-2.0
use logo_stamp::app::{self, Flags, USAGE};
use std::process::ExitCode;
use tracing::Level;

#[tokio::main]
async fn main() -> ExitCode {
    let flags = match Flags::parse(pico_args::Arguments::from_env()) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(if flags.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match app::run(flags).await {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(%err, "command failed");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
