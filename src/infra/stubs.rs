use std::{cell::RefCell, time::Duration};

use anyhow::{anyhow, Result};

use crate::infra::contracts::{ExternalOpener, Pause};

/// Records every opened target; optionally fails each call.
#[derive(Debug, Default)]
pub struct RecordingOpener {
    pub opened: RefCell<Vec<String>>,
    pub fail: bool,
}

impl RecordingOpener {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl ExternalOpener for RecordingOpener {
    fn open(&self, target: &str) -> Result<()> {
        self.opened.borrow_mut().push(target.to_owned());
        if self.fail {
            Err(anyhow!("no URL handler available"))
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingPause {
    pub pauses: RefCell<Vec<Duration>>,
}

impl Pause for RecordingPause {
    fn pause(&self, duration: Duration) {
        self.pauses.borrow_mut().push(duration);
    }
}
