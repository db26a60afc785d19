//! One-shot wall-clock trigger for the overlay.

/// Calendar fields of a local date-time. `month` is 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetMoment {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

/// Source of the current time in epoch milliseconds.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// One-shot delayed callback.
pub trait Timer {
    type Error;

    fn after(&mut self, delay_ms: i32, callback: Box<dyn FnOnce()>) -> Result<(), Self::Error>;
}

/// Whether the document can take the overlay yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadyGate {
    Now,
    AwaitContentLoaded,
}

impl ReadyGate {
    pub fn from_ready_state(state: &str) -> Self {
        if state == "loading" {
            ReadyGate::AwaitContentLoaded
        } else {
            ReadyGate::Now
        }
    }
}

/// The parts of a hosting document the scheduler waits on.
pub trait Page {
    type Error;

    fn ready_state(&self) -> String;
    fn on_content_loaded(&self, callback: Box<dyn FnOnce()>) -> Result<(), Self::Error>;
}

/// Runs `f` once `page` is past loading: now, or on content-loaded.
pub fn when_ready<P: Page + ?Sized>(page: &P, f: Box<dyn FnOnce()>) -> Result<ReadyGate, P::Error> {
    let gate = ReadyGate::from_ready_state(&page.ready_state());
    match gate {
        ReadyGate::Now => f(),
        ReadyGate::AwaitContentLoaded => {
            log::debug!("document still loading, waiting for DOMContentLoaded");
            page.on_content_loaded(f)?;
        }
    }
    Ok(gate)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    Now,
    After(i32),
}

#[derive(Clone, Copy, Debug)]
pub struct Scheduler {
    target_ms: f64,
}

impl Scheduler {
    pub fn new(target_ms: f64) -> Self {
        Self { target_ms }
    }

    /// Immediate when the target is now or past, else the remaining delay.
    /// Delays longer than the host timer can express are clamped.
    pub fn plan(&self, now_ms: f64) -> Trigger {
        let delay = self.target_ms - now_ms;
        if delay <= 0.0 {
            Trigger::Now
        } else {
            Trigger::After(delay.ceil().min(i32::MAX as f64) as i32)
        }
    }

    /// Runs `start` now, or hands it to `timer` for the planned delay.
    pub fn arm<C, T>(&self, clock: &C, timer: &mut T, start: Box<dyn FnOnce()>) -> Result<Trigger, T::Error>
    where
        C: Clock + ?Sized,
        T: Timer + ?Sized,
    {
        let trigger = self.plan(clock.now_ms());
        match trigger {
            Trigger::Now => {
                log::info!("overlay target time reached, starting now");
                start();
            }
            Trigger::After(delay_ms) => {
                log::info!("overlay starts in {delay_ms} ms");
                timer.after(delay_ms, start)?;
            }
        }
        Ok(trigger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::convert::Infallible;
    use std::rc::Rc;

    struct Frozen(f64);

    impl Clock for Frozen {
        fn now_ms(&self) -> f64 {
            self.0
        }
    }

    /// Fake timer driven by explicit `advance` calls.
    #[derive(Default)]
    struct ManualTimer {
        now: f64,
        pending: Vec<(f64, Box<dyn FnOnce()>)>,
    }

    impl ManualTimer {
        fn advance_to(&mut self, now: f64) {
            self.now = now;
            let (due, rest): (Vec<_>, Vec<_>) =
                self.pending.drain(..).partition(|(at, _)| *at <= now);
            self.pending = rest;
            for (_, cb) in due {
                cb();
            }
        }
    }

    impl Timer for ManualTimer {
        type Error = Infallible;

        fn after(&mut self, delay_ms: i32, callback: Box<dyn FnOnce()>) -> Result<(), Infallible> {
            self.pending.push((self.now + delay_ms as f64, callback));
            Ok(())
        }
    }

    fn counter() -> (Rc<Cell<u32>>, Box<dyn FnOnce()>) {
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        (hits, Box::new(move || h.set(h.get() + 1)))
    }

    #[test]
    fn past_target_starts_immediately() {
        let scheduler = Scheduler::new(1_000.0);
        let mut timer = ManualTimer::default();
        let (hits, start) = counter();

        let trigger = scheduler.arm(&Frozen(5_000.0), &mut timer, start).unwrap();

        assert_eq!(trigger, Trigger::Now);
        assert_eq!(hits.get(), 1);
        assert!(timer.pending.is_empty());
    }

    #[test]
    fn exact_target_counts_as_past() {
        assert_eq!(Scheduler::new(42.0).plan(42.0), Trigger::Now);
    }

    #[test]
    fn future_target_waits_exact_delay() {
        let t0 = 1_700_000_000_000.0;
        let scheduler = Scheduler::new(t0 + 5_000.0);
        let mut timer = ManualTimer {
            now: t0,
            ..Default::default()
        };
        let (hits, start) = counter();

        let trigger = scheduler.arm(&Frozen(t0), &mut timer, start).unwrap();
        assert_eq!(trigger, Trigger::After(5_000));

        timer.advance_to(t0 + 4_999.0);
        assert_eq!(hits.get(), 0);
        timer.advance_to(t0 + 5_000.0);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn far_future_is_clamped() {
        let scheduler = Scheduler::new(1e15);
        assert_eq!(scheduler.plan(0.0), Trigger::After(i32::MAX));
    }

    /// Document stand-in whose load event is fired by hand.
    struct FakePage {
        state: &'static str,
        pending: RefCell<Vec<Box<dyn FnOnce()>>>,
    }

    impl FakePage {
        fn new(state: &'static str) -> Self {
            Self {
                state,
                pending: RefCell::new(Vec::new()),
            }
        }

        fn fire_content_loaded(&self) {
            for cb in self.pending.borrow_mut().drain(..) {
                cb();
            }
        }
    }

    impl Page for FakePage {
        type Error = Infallible;

        fn ready_state(&self) -> String {
            self.state.to_string()
        }

        fn on_content_loaded(&self, callback: Box<dyn FnOnce()>) -> Result<(), Infallible> {
            self.pending.borrow_mut().push(callback);
            Ok(())
        }
    }

    #[test]
    fn loading_document_defers_until_content_loaded() {
        let page = FakePage::new("loading");
        let (hits, start) = counter();

        assert_eq!(when_ready(&page, start), Ok(ReadyGate::AwaitContentLoaded));
        assert_eq!(hits.get(), 0);

        page.fire_content_loaded();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn interactive_or_complete_document_runs_now() {
        for state in ["interactive", "complete"] {
            let page = FakePage::new(state);
            let (hits, start) = counter();

            assert_eq!(when_ready(&page, start), Ok(ReadyGate::Now));
            assert_eq!(hits.get(), 1);
            assert!(page.pending.borrow().is_empty());
        }
    }

    #[test]
    fn timer_receives_callback_once() {
        let scheduler = Scheduler::new(10.0);
        let log = Rc::new(RefCell::new(Vec::new()));
        let l = log.clone();
        let mut timer = ManualTimer::default();
        scheduler
            .arm(&Frozen(0.0), &mut timer, Box::new(move || l.borrow_mut().push("start")))
            .unwrap();
        timer.advance_to(100.0);
        timer.advance_to(200.0);
        assert_eq!(*log.borrow(), vec!["start"]);
    }
}
