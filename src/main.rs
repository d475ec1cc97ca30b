#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! pplx: ask Perplexity AI questions from the command line.

mod api;
mod ask;
mod cli;
mod types;

use clap::Parser;

use cli::{Cli, OutputCtx, write_error};
use types::ErrorOutput;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let ctx = OutputCtx::from_cli(&cli);

    match ask::run(&cli, &ctx).await {
        Ok(()) => {}
        Err(err) => {
            let error_output = ErrorOutput::from_pplx_error(&err);
            write_error(&error_output, cli.output, cli.json);
            std::process::exit(err.exit_code());
        }
    }
}
