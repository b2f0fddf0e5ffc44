//! Ctrl-C handling
//!
//! The handler only raises a flag; walking stages poll it between entries and
//! unwind with [`CodemapError::Interrupted`].

use crate::error::{CodemapError, Result, ResultExt};
use std::sync::atomic::{AtomicBool, Ordering};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Install the process-wide Ctrl-C handler. Call once from `main`.
pub fn install_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        INTERRUPTED.store(true, Ordering::SeqCst);
    })
    .with_context(|| "Failed to set Ctrl+C handler")
}

pub fn is_interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Fail with `Interrupted` once Ctrl-C has been pressed
pub fn check() -> Result<()> {
    if is_interrupted() {
        Err(CodemapError::Interrupted)
    } else {
        Ok(())
    }
}
