use std::error::Error;

use argh::FromArgs;
use normalz_math::trace;

use super::{Policy, reconstruct_options};

#[derive(FromArgs, Debug)]
/// Print every intermediate value of reconstructing one texel
#[argh(subcommand, name = "sample")]
pub struct SampleCmd {
    /// packed red channel value
    #[argh(positional)]
    pub r: f32,

    /// packed green channel value
    #[argh(positional)]
    pub g: f32,

    /// red/green output policy (preserve, renormalize) [default: preserve]
    #[argh(option)]
    pub policy: Option<Policy>,

    /// do not clamp input red/green to [0, 1]
    #[argh(switch)]
    pub no_clamp: bool,
}

pub fn handle_sample_command(cmd: &SampleCmd) -> Result<(), Box<dyn Error>> {
    let options = reconstruct_options(cmd.policy, cmd.no_clamp);
    if !(cmd.r.is_finite() && cmd.g.is_finite()) {
        return Err(format!("channel values must be finite, got r={} g={}", cmd.r, cmd.g).into());
    }

    let t = trace(cmd.r, cmd.g, options);
    println!("input      r={:.6} g={:.6}", t.r, t.g);
    println!("signed     x={:.6} y={:.6}", t.x, t.y);
    println!(
        "x²+y²      {:.6}{}",
        t.xy_length_squared,
        if t.saturated { " (clamped to 1)" } else { "" }
    );
    println!("z          {:.6}", t.z);
    println!(
        "normalized x={:.6} y={:.6} z={:.6}",
        t.normal.x, t.normal.y, t.normal.z
    );
    println!(
        "output     r={:.6} g={:.6} b={:.6}",
        t.output.r, t.output.g, t.output.b
    );
    Ok(())
}
