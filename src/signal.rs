//! Ctrl+C handling for graceful shutdown.
//!
//! A single `Arc<AtomicBool>` is shared by the walker, the hasher and the
//! hashing pool. Setting it makes every stage stop at its next check; the
//! finder then reports [`crate::duplicates::FinderError::Interrupted`] and
//! the process exits with code 130 without writing a partial report.
//!
//! ```rust,no_run
//! use dupefind::duplicates::FinderConfig;
//! use dupefind::signal::install_handler;
//!
//! let handler = install_handler().expect("Failed to install signal handler");
//! let config = FinderConfig::default().with_shutdown_flag(handler.get_flag());
//! ```

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError, Weak};

/// Shared shutdown flag.
#[derive(Debug, Clone, Default)]
pub struct ShutdownHandler {
    flag: Arc<AtomicBool>,
}

impl ShutdownHandler {
    /// Create a handler with no shutdown requested.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` once Ctrl+C was pressed or [`Self::request_shutdown`] was called.
    #[must_use]
    pub fn is_shutdown_requested(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Request a shutdown without a signal.
    pub fn request_shutdown(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Get a clone of the flag for the scan pipeline.
    #[must_use]
    pub fn get_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.flag)
    }

    /// Clear the flag.
    pub fn reset(&self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// Error type for signal handler installation.
#[derive(Debug, thiserror::Error)]
pub enum SignalError {
    /// Failed to install the Ctrl+C handler.
    #[error("Failed to install signal handler: {0}")]
    InstallFailed(String),
}

/// Flags of every handler handed out so far.
static FLAGS: Mutex<Vec<Weak<AtomicBool>>> = Mutex::new(Vec::new());

/// Outcome of the one-time hook registration.
static HOOK: OnceLock<Result<(), String>> = OnceLock::new();

fn flags() -> MutexGuard<'static, Vec<Weak<AtomicBool>>> {
    FLAGS.lock().unwrap_or_else(PoisonError::into_inner)
}

fn register_hook() -> Result<(), String> {
    let installed = ctrlc::set_handler(|| {
        for flag in flags().iter().filter_map(Weak::upgrade) {
            flag.store(true, Ordering::SeqCst);
        }
        let mut stderr = std::io::stderr();
        let _ = writeln!(stderr, "\nInterrupted. Stopping scan...");
        let _ = stderr.flush();
    });

    match installed {
        Ok(()) => Ok(()),
        Err(ctrlc::Error::MultipleHandlers) => {
            log::warn!("A Ctrl+C handler is already registered; interrupts will not stop the scan");
            Ok(())
        }
        Err(e) => Err(e.to_string()),
    }
}

/// Install the process-wide Ctrl+C handler and get a fresh shutdown flag.
///
/// The hook is registered once per process. Every call returns a new
/// handler, and Ctrl+C sets the flag of every handler still alive, so runs
/// in one process (as in tests) never clear each other's flag.
///
/// # Errors
///
/// Returns [`SignalError::InstallFailed`] if the OS refuses the hook.
pub fn install_handler() -> Result<ShutdownHandler, SignalError> {
    HOOK.get_or_init(register_hook)
        .clone()
        .map_err(SignalError::InstallFailed)?;

    let handler = ShutdownHandler::new();
    let mut flags = flags();
    flags.retain(|flag| flag.strong_count() > 0);
    flags.push(Arc::downgrade(&handler.flag));
    Ok(handler)
}
