use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use argh::FromArgs;

use super::{Policy, reconstruct_options};

#[derive(FromArgs, Debug)]
/// Reconstruct the blue channel of a single image file
#[argh(subcommand, name = "image")]
pub struct ImageCmd {
    /// input image path
    #[argh(option)]
    pub input: PathBuf,

    /// output image path; format follows the extension
    #[argh(option)]
    pub output: PathBuf,

    /// red/green output policy (preserve, renormalize) [default: preserve]
    #[argh(option)]
    pub policy: Option<Policy>,

    /// do not clamp input red/green to [0, 1]
    #[argh(switch)]
    pub no_clamp: bool,
}

pub fn handle_image_command(cmd: &ImageCmd) -> Result<(), Box<dyn Error>> {
    let options = reconstruct_options(cmd.policy, cmd.no_clamp);
    let start = Instant::now();

    let stats = normalz::reconstruct_file(&cmd.input, &cmd.output, options)?;

    println!(
        "Reconstructed {} texels ({} saturated) in {:.2?}",
        stats.texels,
        stats.saturated,
        start.elapsed()
    );
    Ok(())
}
