use std::time::Duration;

use anyhow::Result;

/// Hands a target (URL) to the host environment.
pub trait ExternalOpener {
    fn open(&self, target: &str) -> Result<()>;
}

/// Blocks the current flow for a fixed duration.
pub trait Pause {
    fn pause(&self, duration: Duration);
}
