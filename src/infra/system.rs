use std::{thread, time::Duration};

use anyhow::{Context, Result};

use crate::infra::contracts::{ExternalOpener, Pause};

/// Opens targets with the platform URL handler.
#[derive(Debug, Clone, Default)]
pub struct SystemOpener;

impl ExternalOpener for SystemOpener {
    fn open(&self, target: &str) -> Result<()> {
        open::that_detached(target).context("failed to launch system URL handler")
    }
}

#[derive(Debug, Clone, Default)]
pub struct ThreadPause;

impl Pause for ThreadPause {
    fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}
