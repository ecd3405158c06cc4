//! Termination signals.
//!
//! `kill -TERM`, `kill -INT` or a hangup would otherwise end the process while
//! the terminal is still in raw mode. Instead they raise a flag that the frame
//! loop checks once per tick, so they leave through the normal shutdown path.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use signal_hook::consts::TERM_SIGNALS;

/// Set once any termination signal has been delivered.
#[derive(Debug, Clone, Default)]
pub struct ShutdownSignals {
    raised: Arc<AtomicBool>,
}

impl ShutdownSignals {
    /// Install handlers for SIGINT, SIGTERM and SIGQUIT (plus SIGHUP on Unix).
    pub fn register() -> Result<Self> {
        let signals = Self::default();

        #[cfg(unix)]
        let extra = [signal_hook::consts::SIGHUP];
        #[cfg(not(unix))]
        let extra: [i32; 0] = [];

        for &signal in TERM_SIGNALS.iter().chain(extra.iter()) {
            signal_hook::flag::register(signal, Arc::clone(&signals.raised))
                .with_context(|| format!("registering handler for signal {signal}"))?;
        }
        Ok(signals)
    }

    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }
}
