//! Millisecond clock abstraction and the busy-wait repeat helper.

/// A point in time on a millisecond clock.
pub type Instant = fugit::TimerInstantU64<1000>;

/// A span of milliseconds.
pub type Duration = fugit::MillisDurationU64;

/// Monotonic millisecond time source.
pub trait Clock {
    fn now(&self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// Time passed on `clock` since `since`.
///
/// Saturates to zero if the clock reads earlier than `since`.
pub fn elapsed<C: Clock + ?Sized>(clock: &C, since: Instant) -> Duration {
    clock
        .now()
        .checked_duration_since(since)
        .unwrap_or(Duration::from_ticks(0))
}

/// Call `callback` over and over until `duration` has passed on `clock`.
///
/// This is a busy loop: the calling context is blocked for the whole
/// duration and there is no way to stop early. The number of calls depends
/// on how fast `callback` returns, so it must be cheap and safe to repeat
/// (refreshing a display, sampling a pin). The callback runs at least once
/// when `duration` is non-zero and never when it is zero. Anything the
/// callback would need as an argument is captured by the closure.
pub fn repeat_for<C, F>(clock: &C, duration: Duration, mut callback: F)
where
    C: Clock + ?Sized,
    F: FnMut(),
{
    if duration.ticks() == 0 {
        return;
    }
    let start = clock.now();
    loop {
        callback();
        if elapsed(clock, start) >= duration {
            return;
        }
    }
}

/// Like [`repeat_for`], but stops at the first error the callback returns.
pub fn try_repeat_for<C, F, E>(clock: &C, duration: Duration, mut callback: F) -> Result<(), E>
where
    C: Clock + ?Sized,
    F: FnMut() -> Result<(), E>,
{
    if duration.ticks() == 0 {
        return Ok(());
    }
    let start = clock.now();
    loop {
        callback()?;
        if elapsed(clock, start) >= duration {
            return Ok(());
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use core::cell::Cell;

    use super::*;

    /// Clock that advances by a fixed step every time it is read.
    pub(crate) struct StepClock {
        now: Cell<u64>,
        step: u64,
    }

    impl StepClock {
        pub(crate) const fn new(start: u64, step: u64) -> Self {
            Self {
                now: Cell::new(start),
                step,
            }
        }

        pub(crate) fn millis(&self) -> u64 {
            self.now.get()
        }
    }

    impl Clock for StepClock {
        fn now(&self) -> Instant {
            let now = self.now.get();
            self.now.set(now + self.step);
            Instant::from_ticks(now)
        }
    }

    #[test]
    fn zero_duration_never_calls() {
        let clock = StepClock::new(0, 1);
        let mut calls = 0;
        repeat_for(&clock, Duration::from_ticks(0), || calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn runs_at_least_once_even_with_a_coarse_clock() {
        // Every read jumps past the whole duration.
        let clock = StepClock::new(0, 1_000);
        let mut calls = 0;
        repeat_for(&clock, Duration::from_ticks(5), || calls += 1);
        assert_eq!(calls, 1);
    }

    #[test]
    fn returns_only_after_duration_elapsed() {
        let clock = StepClock::new(40, 1);
        let mut calls = 0;
        repeat_for(&clock, Duration::from_ticks(10), || calls += 1);
        // Start read at 40, one call before each check at 41..=50.
        assert_eq!(calls, 10);
        assert!(clock.millis() - 40 >= 10);
    }

    #[test]
    fn callback_sees_captured_argument() {
        let clock = StepClock::new(0, 2);
        let mut toggled = false;
        let mut flips = 0;
        repeat_for(&clock, Duration::from_ticks(8), || {
            toggled = !toggled;
            flips += 1;
        });
        assert_eq!(flips, 4);
        assert!(!toggled);
    }

    #[test]
    fn clock_running_backwards_counts_as_no_time() {
        let clock = StepClock::new(5, 0);
        assert_eq!(elapsed(&clock, Instant::from_ticks(10)).ticks(), 0);
    }

    #[test]
    fn try_repeat_stops_on_first_error() {
        let clock = StepClock::new(0, 1);
        let mut calls = 0;
        let result = try_repeat_for(&clock, Duration::from_ticks(100), || {
            calls += 1;
            if calls == 3 { Err("pin stuck") } else { Ok(()) }
        });
        assert_eq!(result, Err("pin stuck"));
        assert_eq!(calls, 3);
    }

    #[test]
    fn try_repeat_completes() {
        let clock = StepClock::new(0, 5);
        let result: Result<(), ()> = try_repeat_for(&clock, Duration::from_ticks(20), || Ok(()));
        assert_eq!(result, Ok(()));
    }
}
