pub mod batch;
pub mod image;
pub mod sample;

use std::str::FromStr;

use normalz_math::{ChannelPolicy, ReconstructOptions};

/// Red/green output policy as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Preserve,
    Renormalize,
}

impl FromStr for Policy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "preserve" => Ok(Self::Preserve),
            "renormalize" | "renormalise" => Ok(Self::Renormalize),
            _ => Err(format!(
                "Invalid policy: {s}. Valid policies are: preserve, renormalize"
            )),
        }
    }
}

impl From<Policy> for ChannelPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Preserve => Self::PreserveInput,
            Policy::Renormalize => Self::Renormalized,
        }
    }
}

/// Build reconstruction options from the shared command-line flags.
pub fn reconstruct_options(policy: Option<Policy>, no_clamp: bool) -> ReconstructOptions {
    ReconstructOptions::default()
        .with_channels(policy.map_or(ChannelPolicy::default(), ChannelPolicy::from))
        .with_clamp_input(!no_clamp)
}
