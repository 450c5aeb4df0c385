//! Screen controllers
//!
//! Each controller holds the state a screen would keep between renders: its
//! toast and a busy flag. Actions validate input, send at most one request,
//! and answer with a [`Transition`](crate::navigation::Transition).

pub mod add;
pub mod edit;
pub mod home;
pub mod login;
pub mod register;

pub use add::AddScreen;
pub use edit::EditScreen;
pub use home::HomeScreen;
pub use login::LoginScreen;
pub use register::RegisterScreen;

use std::sync::atomic::{AtomicBool, Ordering};

/// Disables a screen's submit control while its request is in flight
#[derive(Debug, Default)]
pub struct BusyFlag(AtomicBool);

impl BusyFlag {
    /// Mark the screen busy, or return `None` if it already is. The flag is
    /// released when the guard drops, whether the request succeeded or not.
    pub fn try_acquire(&self) -> Option<BusyGuard<'_>> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard(&self.0))
    }

    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

#[derive(Debug)]
pub struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busy_flag_is_exclusive_until_guard_drops() {
        let flag = BusyFlag::default();

        let guard = flag.try_acquire().expect("first acquire");
        assert!(flag.is_busy());
        assert!(flag.try_acquire().is_none());

        drop(guard);
        assert!(!flag.is_busy());
        assert!(flag.try_acquire().is_some());
    }
}
