use std::time::{Duration, Instant};

/// Upward travel, in pixels, a swipe needs to unlock.
pub const UNLOCK_SWIPE_DISTANCE: f64 = 150.0;

/// Idle time before the lock screen dims to always-on-display.
pub const ALWAYS_ON_DISPLAY_AFTER: Duration = Duration::from_secs(5);

/// Lock screen state.
///
/// Time is passed in by the caller so the state stays deterministic.
#[derive(Debug, Clone)]
pub struct LockScreen {
    locked: bool,
    last_activity: Instant,
}

impl LockScreen {
    /// A new lock screen starts locked.
    pub fn new(now: Instant) -> Self {
        Self {
            locked: true,
            last_activity: now,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Swipe released after moving `offset_y` pixels (negative is upward).
    /// Returns true when this swipe unlocked the screen.
    pub fn release_swipe(&mut self, offset_y: f64) -> bool {
        if self.locked && offset_y < -UNLOCK_SWIPE_DISTANCE {
            self.locked = false;
            return true;
        }
        false
    }

    pub fn lock(&mut self, now: Instant) {
        self.locked = true;
        self.last_activity = now;
    }

    /// Any pointer or key input. Wakes the screen from dimming.
    pub fn record_activity(&mut self, now: Instant) {
        self.last_activity = now;
    }

    /// Whether the locked screen has dimmed to always-on-display.
    pub fn is_dimmed(&self, now: Instant) -> bool {
        self.locked && now.saturating_duration_since(self.last_activity) >= ALWAYS_ON_DISPLAY_AFTER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_locked() {
        let lock = LockScreen::new(Instant::now());
        assert!(lock.is_locked());
    }

    #[test]
    fn test_short_swipe_does_not_unlock() {
        let mut lock = LockScreen::new(Instant::now());
        assert!(!lock.release_swipe(-150.0));
        assert!(!lock.release_swipe(80.0));
        assert!(lock.is_locked());

        assert!(lock.release_swipe(-151.0));
        assert!(!lock.is_locked());
        assert!(!lock.release_swipe(-400.0));
    }

    #[test]
    fn test_dims_after_idle() {
        let start = Instant::now();
        let mut lock = LockScreen::new(start);
        assert!(!lock.is_dimmed(start + Duration::from_secs(4)));
        assert!(lock.is_dimmed(start + Duration::from_secs(5)));

        lock.record_activity(start + Duration::from_secs(6));
        assert!(!lock.is_dimmed(start + Duration::from_secs(7)));
    }

    #[test]
    fn test_unlocked_screen_never_dims() {
        let start = Instant::now();
        let mut lock = LockScreen::new(start);
        lock.release_swipe(-200.0);
        assert!(!lock.is_dimmed(start + Duration::from_secs(60)));

        lock.lock(start + Duration::from_secs(60));
        assert!(lock.is_locked());
        assert!(lock.is_dimmed(start + Duration::from_secs(66)));
    }
}
