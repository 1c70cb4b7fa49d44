//! Start-up splash sequencing: Visible, then Exiting while the slide-out
//! animation plays, then Hidden for the rest of the session.

use std::rc::Rc;

use log::debug;
use yew::functional::Reducible;

use crate::config;
use crate::timer::Scheduler;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SplashPhase {
    Visible,
    Exiting,
    Hidden,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplashTiming {
    pub exit_after_ms: u32,
    /// Length of the exit animation, counted from the Exiting transition.
    pub exit_duration_ms: u32,
}

impl Default for SplashTiming {
    fn default() -> Self {
        Self {
            exit_after_ms: config::SPLASH_EXIT_AFTER_MS,
            exit_duration_ms: config::SPLASH_EXIT_DURATION_MS,
        }
    }
}

impl SplashTiming {
    pub fn hide_after_ms(&self) -> u32 {
        self.exit_after_ms.saturating_add(self.exit_duration_ms)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplashSequencer {
    phase: SplashPhase,
    timing: SplashTiming,
}

impl Default for SplashSequencer {
    fn default() -> Self {
        Self::new(SplashTiming::default())
    }
}

impl SplashSequencer {
    pub fn new(timing: SplashTiming) -> Self {
        Self {
            phase: SplashPhase::Visible,
            timing,
        }
    }

    pub fn phase(&self) -> SplashPhase {
        self.phase
    }

    #[cfg(test)]
    pub fn is_mounted(&self) -> bool {
        self.phase != SplashPhase::Hidden
    }

    #[cfg(test)]
    pub fn is_exiting(&self) -> bool {
        self.phase == SplashPhase::Exiting
    }

    /// Phase a sequencer created at t=0 shows at `elapsed_ms`.
    #[cfg(test)]
    pub fn phase_at(&self, elapsed_ms: u32) -> SplashPhase {
        if elapsed_ms >= self.timing.hide_after_ms() {
            SplashPhase::Hidden
        } else if elapsed_ms >= self.timing.exit_after_ms {
            SplashPhase::Exiting
        } else {
            SplashPhase::Visible
        }
    }

    /// Moves forward to `target`. Earlier phases are ignored, so the phase
    /// never reverts. Returns whether anything changed.
    pub fn advance_to(&mut self, target: SplashPhase) -> bool {
        if target > self.phase {
            debug!("splash {:?} -> {:?}", self.phase, target);
            self.phase = target;
            true
        } else {
            false
        }
    }

    /// Offset from creation at which `phase` begins.
    fn starts_at(&self, phase: SplashPhase) -> u32 {
        match phase {
            SplashPhase::Visible => 0,
            SplashPhase::Exiting => self.timing.exit_after_ms,
            SplashPhase::Hidden => self.timing.hide_after_ms(),
        }
    }

    /// Transitions still ahead, as delays measured from the start of the
    /// current phase.
    pub fn remaining(&self) -> Vec<(u32, SplashPhase)> {
        let origin = self.starts_at(self.phase);
        [SplashPhase::Exiting, SplashPhase::Hidden]
            .into_iter()
            .filter(|target| *target > self.phase)
            .map(|target| (self.starts_at(target) - origin, target))
            .collect()
    }

    /// Schedules the remaining transitions, treating now as the start of the
    /// current phase. Every deadline is measured from that same instant, so a
    /// late first timer does not push the second one back. Dropping the
    /// returned handles cancels whatever has not fired yet.
    pub fn schedule<S, F>(&self, scheduler: &S, on_phase: F) -> Vec<S::Handle>
    where
        S: Scheduler,
        F: Fn(SplashPhase) + Clone + 'static,
    {
        self.remaining()
            .into_iter()
            .map(|(delay_ms, target)| {
                let on_phase = on_phase.clone();
                scheduler.once(delay_ms, Box::new(move || on_phase(target)))
            })
            .collect()
    }
}

impl Reducible for SplashSequencer {
    type Action = SplashPhase;

    fn reduce(self: Rc<Self>, target: SplashPhase) -> Rc<Self> {
        let mut next = *self;
        if next.advance_to(target) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::manual::ManualScheduler;
    use std::cell::RefCell;

    fn recorder() -> (Rc<RefCell<SplashSequencer>>, impl Fn(SplashPhase) + Clone + 'static) {
        let state = Rc::new(RefCell::new(SplashSequencer::default()));
        let sink = state.clone();
        (state, move |phase| {
            sink.borrow_mut().advance_to(phase);
        })
    }

    #[test]
    fn test_phase_at_boundaries() {
        let splash = SplashSequencer::default();
        assert_eq!(splash.phase_at(0), SplashPhase::Visible);
        assert_eq!(splash.phase_at(2_499), SplashPhase::Visible);
        assert_eq!(splash.phase_at(2_500), SplashPhase::Exiting);
        assert_eq!(splash.phase_at(3_499), SplashPhase::Exiting);
        assert_eq!(splash.phase_at(3_500), SplashPhase::Hidden);
        assert_eq!(splash.phase_at(u32::MAX), SplashPhase::Hidden);
    }

    #[test]
    fn test_advance_is_monotonic() {
        let mut splash = SplashSequencer::default();
        assert!(splash.advance_to(SplashPhase::Hidden));
        assert!(!splash.advance_to(SplashPhase::Exiting));
        assert!(!splash.advance_to(SplashPhase::Visible));
        assert_eq!(splash.phase(), SplashPhase::Hidden);
        assert!(!splash.is_mounted());
    }

    #[test]
    fn test_reducer_keeps_same_rc_when_nothing_changes() {
        let hidden = Rc::new(SplashSequencer::default()).reduce(SplashPhase::Hidden);
        let again = hidden.clone().reduce(SplashPhase::Exiting);
        assert!(Rc::ptr_eq(&hidden, &again));
    }

    #[test]
    fn test_scheduled_timeline() {
        let scheduler = ManualScheduler::new();
        let (state, on_phase) = recorder();
        let _handles = SplashSequencer::default().schedule(&scheduler, on_phase);

        assert_eq!(state.borrow().phase(), SplashPhase::Visible);
        scheduler.advance(2_499);
        assert_eq!(state.borrow().phase(), SplashPhase::Visible);
        scheduler.advance(1);
        assert_eq!(state.borrow().phase(), SplashPhase::Exiting);
        assert!(state.borrow().is_exiting());
        scheduler.advance(999);
        assert_eq!(state.borrow().phase(), SplashPhase::Exiting);
        scheduler.advance(1);
        assert_eq!(state.borrow().phase(), SplashPhase::Hidden);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_teardown_before_exit_stops_everything() {
        let scheduler = ManualScheduler::new();
        let (state, on_phase) = recorder();
        let handles = SplashSequencer::default().schedule(&scheduler, on_phase);

        scheduler.advance(1_000);
        drop(handles);
        scheduler.advance(10_000);
        assert_eq!(state.borrow().phase(), SplashPhase::Visible);
    }

    #[test]
    fn test_teardown_while_exiting_keeps_exiting() {
        let scheduler = ManualScheduler::new();
        let (state, on_phase) = recorder();
        let handles = SplashSequencer::default().schedule(&scheduler, on_phase);

        scheduler.advance(3_000);
        drop(handles);
        scheduler.advance(10_000);
        assert_eq!(state.borrow().phase(), SplashPhase::Exiting);
    }

    #[test]
    fn test_exiting_schedules_only_the_hide() {
        let scheduler = ManualScheduler::new();
        let state = Rc::new(RefCell::new(SplashSequencer::default()));
        state.borrow_mut().advance_to(SplashPhase::Exiting);
        let sink = state.clone();
        let start = *state.borrow();
        let _handles = start.schedule(&scheduler, move |phase| {
            sink.borrow_mut().advance_to(phase);
        });

        assert_eq!(start.remaining(), vec![(1_000, SplashPhase::Hidden)]);
        scheduler.advance(999);
        assert_eq!(state.borrow().phase(), SplashPhase::Exiting);
        scheduler.advance(1);
        assert_eq!(state.borrow().phase(), SplashPhase::Hidden);
    }

    #[test]
    fn test_visible_remaining_deadlines() {
        assert_eq!(
            SplashSequencer::default().remaining(),
            vec![(2_500, SplashPhase::Exiting), (3_500, SplashPhase::Hidden)]
        );
    }

    #[test]
    fn test_hidden_schedules_nothing() {
        let scheduler = ManualScheduler::new();
        let mut splash = SplashSequencer::default();
        splash.advance_to(SplashPhase::Hidden);
        let handles = splash.schedule(&scheduler, |_| {});
        assert!(handles.is_empty());
    }
}
