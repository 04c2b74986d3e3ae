//! Simulated form submission
//!
//! A valid submit marks the button busy, waits out a fake network delay,
//! then clears the busy markers, shows the success message, resets the
//! form, and hides the message again after a second delay. No request is
//! ever sent.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::schedule::Scheduler;

/// Fake request latency
pub const DEFAULT_BUSY_MS: u32 = 650;
/// How long the success message stays up
pub const DEFAULT_SUCCESS_MS: u32 = 3000;

/// DOM effects a submission needs from its form
pub trait FormSurface {
    /// Validate (and mark) every field; true if all pass
    fn validate_all(&self) -> bool;
    fn focus_first_invalid(&self);
    fn set_busy(&self, busy: bool);
    fn set_success_visible(&self, visible: bool);
    /// Clear values and any leftover invalid markers
    fn reset(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTiming {
    pub busy_ms: u32,
    pub success_ms: u32,
}

impl Default for SubmitTiming {
    fn default() -> Self {
        Self {
            busy_ms: DEFAULT_BUSY_MS,
            success_ms: DEFAULT_SUCCESS_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Busy,
    /// Success message visible
    Confirming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; first invalid field focused
    Rejected,
    /// Busy sequence started
    Accepted,
}

/// Per-form submission state and its pending timers
pub struct SubmitFlow<V: FormSurface, S: Scheduler> {
    surface: V,
    scheduler: S,
    timing: SubmitTiming,
    phase: Cell<SubmitPhase>,
    busy_timer: RefCell<Option<S::Handle>>,
    success_timer: RefCell<Option<S::Handle>>,
}

impl<V: FormSurface + 'static, S: Scheduler + 'static> SubmitFlow<V, S> {
    pub fn new(surface: V, scheduler: S, timing: SubmitTiming) -> Rc<Self> {
        Rc::new(Self {
            surface,
            scheduler,
            timing,
            phase: Cell::new(SubmitPhase::Idle),
            busy_timer: RefCell::new(None),
            success_timer: RefCell::new(None),
        })
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase.get()
    }

    pub const fn surface(&self) -> &V {
        &self.surface
    }

    /// Handle a submit event (default navigation already prevented).
    /// Every submit validates. A valid submit while busy restarts the busy
    /// delay; an invalid one leaves the pending completion alone.
    pub fn submit(self: &Rc<Self>) -> SubmitOutcome {
        if !self.surface.validate_all() {
            self.surface.focus_first_invalid();
            return SubmitOutcome::Rejected;
        }

        let was_busy = self.phase.get() == SubmitPhase::Busy;
        self.surface.set_busy(true);
        self.phase.set(SubmitPhase::Busy);

        let weak = Rc::downgrade(self);
        let handle = self.scheduler.defer(
            self.timing.busy_ms,
            Box::new(move || {
                if let Some(flow) = Weak::upgrade(&weak) {
                    flow.complete();
                }
            }),
        );
        // replacing the handle cancels the earlier completion
        drop(self.busy_timer.borrow_mut().replace(handle));
        if was_busy {
            log::debug!("Resubmitted while busy, busy delay restarted");
        }

        SubmitOutcome::Accepted
    }

    /// Fake response arrived
    fn complete(self: &Rc<Self>) {
        self.surface.set_busy(false);
        self.surface.set_success_visible(true);
        self.phase.set(SubmitPhase::Confirming);

        let weak = Rc::downgrade(self);
        let handle = self.scheduler.defer(
            self.timing.success_ms,
            Box::new(move || {
                if let Some(flow) = Weak::upgrade(&weak) {
                    flow.dismiss();
                }
            }),
        );
        // Replacing a previous submission's timer cancels it; the newest
        // success message gets its full duration.
        *self.success_timer.borrow_mut() = Some(handle);

        self.surface.reset();
        log::info!("Form submitted (simulated)");
    }

    fn dismiss(&self) {
        self.surface.set_success_visible(false);
        if self.phase.get() == SubmitPhase::Confirming {
            self.phase.set(SubmitPhase::Idle);
        }
    }

    /// Cancel pending timers; nothing scheduled fires afterwards
    pub fn teardown(&self) {
        let busy = self.busy_timer.borrow_mut().take();
        let success = self.success_timer.borrow_mut().take();
        drop((busy, success));
        self.phase.set(SubmitPhase::Idle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ManualScheduler;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Effect {
        FocusInvalid,
        Busy(bool),
        Success(bool),
        Reset,
    }

    #[derive(Default)]
    struct FakeForm {
        valid: Cell<bool>,
        effects: RefCell<Vec<Effect>>,
    }

    impl FakeForm {
        fn valid() -> Self {
            let form = Self::default();
            form.valid.set(true);
            form
        }

        fn take(&self) -> Vec<Effect> {
            std::mem::take(&mut *self.effects.borrow_mut())
        }
    }

    impl FormSurface for FakeForm {
        fn validate_all(&self) -> bool {
            self.valid.get()
        }
        fn focus_first_invalid(&self) {
            self.effects.borrow_mut().push(Effect::FocusInvalid);
        }
        fn set_busy(&self, busy: bool) {
            self.effects.borrow_mut().push(Effect::Busy(busy));
        }
        fn set_success_visible(&self, visible: bool) {
            self.effects.borrow_mut().push(Effect::Success(visible));
        }
        fn reset(&self) {
            self.effects.borrow_mut().push(Effect::Reset);
        }
    }

    fn flow(form: FakeForm) -> (Rc<SubmitFlow<FakeForm, ManualScheduler>>, ManualScheduler) {
        let sched = ManualScheduler::new();
        (
            SubmitFlow::new(form, sched.clone(), SubmitTiming::default()),
            sched,
        )
    }

    #[test]
    fn test_invalid_submit_focuses_and_never_goes_busy() {
        let (flow, sched) = flow(FakeForm::default());
        assert_eq!(flow.submit(), SubmitOutcome::Rejected);
        sched.advance(10_000);
        assert_eq!(flow.surface().take(), vec![Effect::FocusInvalid]);
        assert_eq!(flow.phase(), SubmitPhase::Idle);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_valid_submit_sequence() {
        let (flow, sched) = flow(FakeForm::valid());
        assert_eq!(flow.submit(), SubmitOutcome::Accepted);
        assert_eq!(flow.surface().take(), vec![Effect::Busy(true)]);
        assert_eq!(flow.phase(), SubmitPhase::Busy);

        sched.advance(649);
        assert!(flow.surface().take().is_empty());

        sched.advance(1);
        assert_eq!(
            flow.surface().take(),
            vec![Effect::Busy(false), Effect::Success(true), Effect::Reset]
        );
        assert_eq!(flow.phase(), SubmitPhase::Confirming);

        sched.advance(2999);
        assert!(flow.surface().take().is_empty());
        sched.advance(1);
        assert_eq!(flow.surface().take(), vec![Effect::Success(false)]);
        assert_eq!(flow.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn test_submit_while_busy_revalidates_and_restarts_delay() {
        let (flow, sched) = flow(FakeForm::valid());
        flow.submit();
        sched.advance(400);
        assert_eq!(flow.submit(), SubmitOutcome::Accepted);
        assert_eq!(flow.surface().take(), vec![Effect::Busy(true), Effect::Busy(true)]);

        // the first completion would have fired at 650
        sched.advance(649);
        assert!(flow.surface().take().is_empty());
        sched.advance(1);
        assert_eq!(
            flow.surface().take(),
            vec![Effect::Busy(false), Effect::Success(true), Effect::Reset]
        );
    }

    #[test]
    fn test_invalid_submit_while_busy_keeps_pending_completion() {
        let (flow, sched) = flow(FakeForm::valid());
        flow.submit();
        flow.surface().take();
        flow.surface().valid.set(false);

        sched.advance(300);
        assert_eq!(flow.submit(), SubmitOutcome::Rejected);
        assert_eq!(flow.surface().take(), vec![Effect::FocusInvalid]);
        assert_eq!(flow.phase(), SubmitPhase::Busy);

        sched.advance(350);
        assert_eq!(
            flow.surface().take(),
            vec![Effect::Busy(false), Effect::Success(true), Effect::Reset]
        );
    }

    #[test]
    fn test_resubmit_during_confirmation_restarts_success_window() {
        let (flow, sched) = flow(FakeForm::valid());
        flow.submit();
        sched.advance(650 + 1000);
        flow.surface().take();

        assert_eq!(flow.submit(), SubmitOutcome::Accepted);
        sched.advance(650);
        flow.surface().take();

        // the first success timer would have fired here
        sched.advance(2000);
        assert!(flow.surface().take().is_empty());
        sched.advance(1000);
        assert_eq!(flow.surface().take(), vec![Effect::Success(false)]);
    }

    #[test]
    fn test_teardown_while_busy_cancels_everything() {
        let (flow, sched) = flow(FakeForm::valid());
        flow.submit();
        flow.surface().take();
        flow.teardown();
        sched.advance(10_000);
        assert!(flow.surface().take().is_empty());
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_teardown_while_confirming_leaves_message() {
        let (flow, sched) = flow(FakeForm::valid());
        flow.submit();
        sched.advance(650);
        flow.surface().take();
        flow.teardown();
        sched.advance(5000);
        assert!(flow.surface().take().is_empty());
    }

    #[test]
    fn test_dropped_flow_is_inert() {
        let sched = ManualScheduler::new();
        let form = FakeForm::valid();
        let flow = SubmitFlow::new(form, sched.clone(), SubmitTiming::default());
        flow.submit();
        drop(flow);
        assert_eq!(sched.pending(), 0);
        sched.advance(10_000);
    }
}
