use std::future::Future;

/// Whether a navbar action (role switch or logout) is currently running.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InFlight {
    busy: bool,
}

impl InFlight {
    /// Marks an action as started, or returns `false` if one is already running.
    pub fn try_start(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    pub fn finish(&mut self) {
        self.busy = false;
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }
}

/// Runs `action` only if `try_start` admits it, calling `finish` once it resolves whether it
/// succeeded or failed.
///
/// # Returns
/// - `Some(result)` - The action ran to completion
/// - `None` - Another action was in flight, `action` was never polled
pub async fn run_exclusive<T, E>(
    try_start: impl FnOnce() -> bool,
    finish: impl FnOnce(),
    action: impl Future<Output = Result<T, E>>,
) -> Option<Result<T, E>> {
    if !try_start() {
        return None;
    }

    let result = action.await;
    finish();

    Some(result)
}
