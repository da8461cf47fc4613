//! `normalz`: reconstruct the blue channel of two-channel normal maps.

mod commands;
mod util;

use std::error::Error;

use argh::FromArgs;
use tracing_subscriber::EnvFilter;

#[derive(FromArgs, Debug)]
/// Reconstruct the Z (blue) channel of tangent-space normal maps
struct TopLevel {
    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Image(commands::image::ImageCmd),
    Batch(commands::batch::BatchCmd),
    Sample(commands::sample::SampleCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli: TopLevel = argh::from_env();

    match cli.command {
        Commands::Image(cmd) => commands::image::handle_image_command(&cmd)?,
        Commands::Batch(cmd) => commands::batch::handle_batch_command(&cmd)?,
        Commands::Sample(cmd) => commands::sample::handle_sample_command(&cmd)?,
    }

    Ok(())
}
