#![allow(clippy::must_use_candidate)]

mod args;
mod logging;
mod render;

use args::Args;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logging::init(&args.log_filter, args.log_format)?;

    let err = render::build_error(&args);
    tracing::debug!(transport = ?args.transport, error = %err, "rendering error");

    print!("{}", render::render(args.transport, &err));
    Ok(())
}
