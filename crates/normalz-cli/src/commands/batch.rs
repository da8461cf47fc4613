use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use argh::FromArgs;
use normalz::BatchStats;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use super::{Policy, reconstruct_options};
use crate::util::{find_all_files, mirror_path};

#[derive(FromArgs, Debug)]
/// Reconstruct every image under an input directory into an output directory
#[argh(subcommand, name = "batch")]
pub struct BatchCmd {
    /// input directory path
    #[argh(option)]
    pub input: PathBuf,

    /// output directory path; the input layout is mirrored
    #[argh(option)]
    pub output: PathBuf,

    /// red/green output policy (preserve, renormalize) [default: preserve]
    #[argh(option)]
    pub policy: Option<Policy>,

    /// do not clamp input red/green to [0, 1]
    #[argh(switch)]
    pub no_clamp: bool,
}

pub fn handle_batch_command(cmd: &BatchCmd) -> Result<(), Box<dyn Error>> {
    let options = reconstruct_options(cmd.policy, cmd.no_clamp);

    let mut files = Vec::new();
    find_all_files(&cmd.input, &normalz::is_supported_extension, &mut files)?;
    println!("Found {} images to reconstruct", files.len());

    let start = Instant::now();

    // Files are independent; each one is also parallel internally.
    let (stats, failed) = files
        .par_iter()
        .map(|path| {
            let output = mirror_path(path, &cmd.input, &cmd.output);
            match normalz::reconstruct_file(path, &output, options) {
                Ok(stats) => (stats, 0usize),
                Err(e) => {
                    tracing::error!(input = %path.display(), "Failed to reconstruct: {e}");
                    (BatchStats::default(), 1)
                }
            }
        })
        .reduce(
            || (BatchStats::default(), 0),
            |(a, fa), (b, fb)| (a + b, fa + fb),
        );

    println!(
        "Reconstructed {} images ({} texels, {} saturated) in {:.2?}",
        files.len() - failed,
        stats.texels,
        stats.saturated,
        start.elapsed()
    );

    if failed > 0 {
        return Err(format!("{failed} of {} images failed", files.len()).into());
    }
    Ok(())
}
