use crate::dashboard::controller::Host;
use std::cell::Cell;
use std::time::Duration;

/// Generation counter for the status banner. Each shown message starts a new
/// generation; a pending auto-clear only fires if nothing newer was shown.
#[derive(Debug, Default)]
pub struct StatusClock {
    generation: Cell<u64>,
}

impl StatusClock {
    pub fn begin(&self) -> u64 {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        next
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }

    /// Waits out `timeout`, then reports whether the message shown at
    /// `generation` is still the one on screen and should be cleared.
    pub async fn expired<H: Host>(&self, host: &H, generation: u64, timeout: Duration) -> bool {
        host.sleep(timeout).await;
        self.is_current(generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct InstantHost {
        sleeps: RefCell<Vec<Duration>>,
    }

    impl Host for InstantHost {
        fn confirm(&self, _prompt: &str) -> bool {
            false
        }
        async fn sleep(&self, delay: Duration) {
            self.sleeps.borrow_mut().push(delay);
        }
        fn reload(&self) {}
    }

    const TIMEOUT: Duration = Duration::from_millis(5000);

    #[tokio::test]
    async fn lone_message_clears_after_timeout() {
        let clock = StatusClock::default();
        let host = InstantHost::default();

        let shown = clock.begin();
        assert!(clock.expired(&host, shown, TIMEOUT).await);
        assert_eq!(*host.sleeps.borrow(), vec![TIMEOUT]);
    }

    #[tokio::test]
    async fn older_timer_leaves_newer_message_alone() {
        let clock = StatusClock::default();
        let host = InstantHost::default();

        let first = clock.begin();
        let second = clock.begin();

        assert!(!clock.expired(&host, first, TIMEOUT).await);
        assert!(clock.is_current(second));
        assert!(clock.expired(&host, second, TIMEOUT).await);
    }

    #[test]
    fn generations_increase() {
        let clock = StatusClock::default();
        assert!(!clock.is_current(1));
        assert_eq!(clock.begin(), 1);
        assert_eq!(clock.begin(), 2);
        assert!(clock.is_current(2));
    }
}
