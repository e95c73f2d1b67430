//! Elevated execution against a resource scope.
//!
//! Elevation applies to a cleanly reopened scope, never the caller's
//! existing handle, so the elevated action cannot inherit caller-side
//! restrictions. The unsafe-update flag is enabled on the top-level
//! scope, then on the nested child scope, and restored in strict reverse
//! order on every exit path — normal return, error propagation, or
//! unwind — before the handles are released.

use crate::ElevationError;
use tracing::{debug, warn};

/// Abstract access to the platform's scope and elevation capabilities.
///
/// Implementations own the actual resource handles; the provided
/// [`run_elevated`](Self::run_elevated) method owns the lifecycle
/// discipline around them.
pub trait ScopeProvider {
    /// Opaque proof of process-level elevation, acquired exactly once
    /// per elevated call and released when the call completes.
    type Token;
    /// An open resource scope.
    type Handle;

    /// Requests process-level elevation.
    fn elevate(&self) -> Result<Self::Token, ElevationError>;

    /// Opens a fresh, independent scope for the resource URL.
    fn open(&self, url: &str) -> Result<Self::Handle, ElevationError>;

    /// Opens the nested child scope within an open scope.
    fn open_child(&self, parent: &Self::Handle) -> Result<Self::Handle, ElevationError>;

    /// Toggles the scope's unsafe-update flag.
    fn set_unsafe_updates(&self, handle: &Self::Handle, allowed: bool);

    /// Releases a scope handle.
    fn close(&self, handle: Self::Handle) -> Result<(), ElevationError>;

    /// Runs `action` with elevated privilege against the scope at
    /// `resource_url`.
    ///
    /// Failures from `action` propagate to the caller unchanged, after
    /// cleanup completes; cleanup itself never masks them. Failures
    /// while closing handles are logged and swallowed. Nested calls
    /// compose: each invocation owns its own parent/child scope pair
    /// and restores its own flags independently.
    fn run_elevated<T, E, F>(&self, resource_url: &str, action: F) -> Result<T, E>
    where
        Self: Sized,
        F: FnOnce(&Self::Handle) -> Result<T, E>,
        E: From<ElevationError>,
    {
        if resource_url.is_empty() {
            return Err(ElevationError::ScopeNotFound("(empty resource url)".to_string()).into());
        }
        // acquired once per call; released after the scopes close
        let _token = self.elevate()?;
        let mut scope = ElevationGuard::open(self, resource_url)?;
        let child = scope.open_child()?;
        debug!(url = resource_url, "running elevated action");
        action(child)
    }
}

/// Tracks which scopes are open and which flags are set, and runs the
/// cleanup states in order when dropped: clear the child flag, clear the
/// parent flag, close the child, close the parent. A flag that was set
/// is never skipped, whatever state the failure left behind.
struct ElevationGuard<'a, P: ScopeProvider> {
    provider: &'a P,
    parent: Option<P::Handle>,
    child: Option<P::Handle>,
    parent_flag_set: bool,
    child_flag_set: bool,
}

impl<'a, P: ScopeProvider> ElevationGuard<'a, P> {
    /// Opens the top-level scope and enables its unsafe-update flag.
    fn open(provider: &'a P, url: &str) -> Result<Self, ElevationError> {
        let parent = provider.open(url)?;
        provider.set_unsafe_updates(&parent, true);
        Ok(Self {
            provider,
            parent: Some(parent),
            child: None,
            parent_flag_set: true,
            child_flag_set: false,
        })
    }

    /// Opens the nested child scope and enables its flag.
    fn open_child(&mut self) -> Result<&P::Handle, ElevationError> {
        let Some(parent) = self.parent.as_ref() else {
            return Err(ElevationError::Provider("parent scope not open".to_string()));
        };
        let child = self.provider.open_child(parent)?;
        self.provider.set_unsafe_updates(&child, true);
        self.child_flag_set = true;
        Ok(self.child.insert(child))
    }
}

impl<P: ScopeProvider> Drop for ElevationGuard<'_, P> {
    fn drop(&mut self) {
        if self.child_flag_set {
            if let Some(child) = self.child.as_ref() {
                self.provider.set_unsafe_updates(child, false);
            }
        }
        if self.parent_flag_set {
            if let Some(parent) = self.parent.as_ref() {
                self.provider.set_unsafe_updates(parent, false);
            }
        }
        if let Some(child) = self.child.take() {
            if let Err(err) = self.provider.close(child) {
                warn!(error = %err, "failed to close elevated child scope");
            }
        }
        if let Some(parent) = self.parent.take() {
            if let Err(err) = self.provider.close(parent) {
                warn!(error = %err, "failed to close elevated scope");
            }
        }
    }
}
