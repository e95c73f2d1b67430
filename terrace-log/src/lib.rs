//! Process-wide diagnostic tracing setup.
//!
//! The library crates emit through the `tracing` macros and never touch
//! the subscriber; hosts call [`init`] once at process start to install
//! one. Initialization is idempotent so tests and embedded hosts can
//! call it unconditionally.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Installs a compact subscriber at INFO level.
pub fn init() {
    init_with_level(Level::INFO);
}

/// Installs a compact subscriber at DEBUG level.
pub fn init_verbose() {
    init_with_level(Level::DEBUG);
}

fn init_with_level(level: Level) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .finish();
    // a subscriber may already be installed; keep the existing one
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init();
        init();
        init_verbose();
    }
}
