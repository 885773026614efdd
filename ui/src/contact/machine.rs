//! Submission state machine for the contact overlay.
//!
//! ```text
//!            submit (valid)           delivered
//!   Idle ───────────────────▶ Sending ──────────▶ Success
//!    ▲                           │                  │
//!    │ retry                     │ failed           │ close (+400 ms clear)
//!    └──────── Error ◀───────────┘                  ▼
//!               │ close (+400 ms clear)            Idle
//!               ▼
//!              Idle
//! ```
//!
//! The controller is plain data; the overlay component owns it in a signal,
//! spawns the delivery future and the delayed clear, and feeds results back.
//!
//! A request in flight is never cancelled. Closing the overlay while `Sending`
//! defers the clear until the outcome arrives, and reopening before then shows
//! the same submission still sending.

use thiserror::Error;

use super::delivery::{DeliveryError, EmailPayload};
use super::form::{ContactForm, Field, ValidationError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

/// A submission that passed validation and must be handed to the mailer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub id: u64,
    pub payload: EmailPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    /// Submitting is only possible from `Idle`.
    #[error("form cannot be submitted while {0:?}")]
    Unavailable(SubmissionStatus),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Handle for a delayed clear scheduled by [`ContactController::close`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct ContactController {
    form: ContactForm,
    status: SubmissionStatus,
    invalid: Option<ValidationError>,
    next_attempt: u64,
    in_flight: Option<u64>,
    close_generation: u64,
    pending_clear: Option<u64>,
    /// The overlay closed while sending; clear once the outcome lands.
    clear_on_settle: bool,
}

impl ContactController {
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Last validation failure, kept until the offending field is edited.
    pub fn invalid(&self) -> Option<ValidationError> {
        self.invalid
    }

    pub fn submit_enabled(&self) -> bool {
        self.status == SubmissionStatus::Idle
    }

    pub fn edit(&mut self, field: Field, value: String) {
        self.form.set(field, value);
        if self.invalid.map(|err| err.field()) == Some(field) {
            self.invalid = None;
        }
    }

    /// `Idle → Sending` when the form is valid.
    pub fn begin_submit(&mut self) -> Result<Attempt, SubmitRejected> {
        if self.status != SubmissionStatus::Idle {
            return Err(SubmitRejected::Unavailable(self.status));
        }
        if let Err(err) = self.form.validate() {
            self.invalid = Some(err);
            return Err(err.into());
        }

        self.invalid = None;
        self.status = SubmissionStatus::Sending;
        let id = self.next_attempt;
        self.next_attempt += 1;
        self.in_flight = Some(id);
        tracing::debug!(attempt = id, "contact form submission started");

        Ok(Attempt {
            id,
            payload: self.form.payload(),
        })
    }

    /// `Sending → Success | Error`. Returns `false` for an outcome that does
    /// not belong to the attempt in flight.
    pub fn finish(&mut self, attempt: u64, outcome: Result<(), DeliveryError>) -> bool {
        if self.in_flight != Some(attempt) {
            tracing::warn!(attempt, in_flight = ?self.in_flight, "ignoring outcome of unknown contact submission");
            return false;
        }

        self.in_flight = None;
        self.status = match outcome {
            Ok(()) => {
                tracing::info!(attempt, "contact form delivered");
                SubmissionStatus::Success
            }
            Err(err) => {
                tracing::error!(attempt, %err, "contact form delivery failed");
                SubmissionStatus::Error
            }
        };
        if self.clear_on_settle {
            self.reset();
        }
        true
    }

    /// `Error → Idle`, keeping every field.
    pub fn retry(&mut self) -> bool {
        if self.status == SubmissionStatus::Error {
            self.status = SubmissionStatus::Idle;
            true
        } else {
            false
        }
    }

    /// The overlay is closing. Call [`complete_close`](Self::complete_close)
    /// with the ticket once the exit animation has finished.
    pub fn close(&mut self) -> ClearTicket {
        self.close_generation += 1;
        self.pending_clear = Some(self.close_generation);
        ClearTicket(self.close_generation)
    }

    /// Clear fields and return to `Idle` unless the ticket was superseded.
    /// While a submission is in flight the clear is deferred to
    /// [`finish`](Self::finish) and `false` is returned.
    pub fn complete_close(&mut self, ticket: ClearTicket) -> bool {
        if self.pending_clear != Some(ticket.0) {
            return false;
        }
        if let Some(attempt) = self.in_flight {
            tracing::debug!(attempt, "clear deferred until contact submission settles");
            self.pending_clear = None;
            self.clear_on_settle = true;
            return false;
        }
        self.reset();
        true
    }

    /// The overlay is opening again. A clear still waiting on its delay is
    /// applied now so the previous contents never flash on screen. With a
    /// submission in flight nothing is cleared: the overlay shows it sending.
    pub fn reopen(&mut self) {
        self.clear_on_settle = false;
        if self.pending_clear.take().is_some() && self.in_flight.is_none() {
            self.reset();
        }
    }

    fn reset(&mut self) {
        debug_assert!(self.in_flight.is_none());
        self.form = ContactForm::default();
        self.status = SubmissionStatus::Idle;
        self.invalid = None;
        self.pending_clear = None;
        self.clear_on_settle = false;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use futures::executor::LocalPool;
    use futures::future::{FutureExt, LocalBoxFuture};
    use futures::task::LocalSpawnExt;
    use futures_channel::oneshot;

    use super::*;
    use crate::contact::delivery::{Mailer, MailerHandle};

    /// Mailer whose calls resolve only when the test releases them.
    #[derive(Default)]
    struct GatedMailer {
        calls: RefCell<Vec<EmailPayload>>,
        gates: RefCell<VecDeque<oneshot::Receiver<Result<(), DeliveryError>>>>,
    }

    impl GatedMailer {
        fn gate(&self) -> oneshot::Sender<Result<(), DeliveryError>> {
            let (tx, rx) = oneshot::channel();
            self.gates.borrow_mut().push_back(rx);
            tx
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl Mailer for Rc<GatedMailer> {
        fn send(&self, payload: EmailPayload) -> LocalBoxFuture<'static, Result<(), DeliveryError>> {
            self.calls.borrow_mut().push(payload);
            let gate = self.gates.borrow_mut().pop_front();
            async move {
                match gate {
                    Some(rx) => rx
                        .await
                        .unwrap_or_else(|_| Err(DeliveryError::Transport("gate dropped".into()))),
                    None => Ok(()),
                }
            }
            .boxed_local()
        }
    }

    struct Harness {
        pool: LocalPool,
        controller: Rc<RefCell<ContactController>>,
        mailer: Rc<GatedMailer>,
        handle: MailerHandle,
    }

    impl Harness {
        fn new() -> Self {
            let mailer = Rc::new(GatedMailer::default());
            Self {
                pool: LocalPool::new(),
                controller: Rc::new(RefCell::new(ContactController::default())),
                handle: MailerHandle::new(mailer.clone()),
                mailer,
            }
        }

        fn fill(&self) {
            let mut ctl = self.controller.borrow_mut();
            ctl.edit(Field::Name, "Amal Saleh".into());
            ctl.edit(Field::Email, "amal@example.com".into());
            ctl.edit(Field::Message, "Please call us back.".into());
        }

        /// Same sequence the overlay runs on submit.
        fn submit(&mut self) -> Result<(), SubmitRejected> {
            let attempt = self.controller.borrow_mut().begin_submit()?;
            let delivery = self.handle.send(attempt.payload.clone());
            let controller = self.controller.clone();
            self.pool
                .spawner()
                .spawn_local(async move {
                    let outcome = delivery.await;
                    controller.borrow_mut().finish(attempt.id, outcome);
                })
                .expect("spawn delivery");
            self.pool.run_until_stalled();
            Ok(())
        }

        fn settle(&mut self) {
            self.pool.run_until_stalled();
        }

        fn status(&self) -> SubmissionStatus {
            self.controller.borrow().status()
        }

        fn submit_enabled(&self) -> bool {
            self.controller.borrow().submit_enabled()
        }
    }

    #[test]
    fn missing_required_field_stays_idle() {
        for field in [Field::Name, Field::Email, Field::Message] {
            let mut h = Harness::new();
            h.fill();
            h.controller.borrow_mut().edit(field, String::new());

            let rejected = h.submit().unwrap_err();
            assert_eq!(rejected, SubmitRejected::Invalid(ValidationError::Missing(field)));
            assert_eq!(h.status(), SubmissionStatus::Idle);
            assert_eq!(h.controller.borrow().invalid().map(|e| e.field()), Some(field));
            assert_eq!(h.mailer.call_count(), 0);
        }
    }

    #[test]
    fn malformed_email_stays_idle() {
        for bad in ["amal.example.com", "amal@", "amal@example"] {
            let mut h = Harness::new();
            h.fill();
            h.controller.borrow_mut().edit(Field::Email, bad.into());

            assert_eq!(
                h.submit(),
                Err(SubmitRejected::Invalid(ValidationError::MalformedEmail))
            );
            assert_eq!(h.status(), SubmissionStatus::Idle);
            assert_eq!(h.mailer.call_count(), 0);
        }
    }

    #[test]
    fn editing_the_invalid_field_clears_the_marker() {
        let mut h = Harness::new();
        h.fill();
        h.controller.borrow_mut().edit(Field::Email, "nope".into());
        let _ = h.submit();
        assert!(h.controller.borrow().invalid().is_some());

        h.controller.borrow_mut().edit(Field::Name, "Other".into());
        assert!(h.controller.borrow().invalid().is_some());
        h.controller.borrow_mut().edit(Field::Email, "amal@example.com".into());
        assert!(h.controller.borrow().invalid().is_none());
    }

    #[test]
    fn successful_delivery_disables_submit_until_done() {
        let mut h = Harness::new();
        h.fill();
        let gate = h.mailer.gate();

        h.submit().unwrap();
        assert_eq!(h.status(), SubmissionStatus::Sending);
        assert!(!h.submit_enabled());

        h.settle();
        assert_eq!(h.status(), SubmissionStatus::Sending);
        assert!(!h.submit_enabled());

        gate.send(Ok(())).unwrap();
        h.settle();
        assert_eq!(h.status(), SubmissionStatus::Success);

        let sent = h.mailer.calls.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].company, "N/A");
        assert_eq!(sent[0].reply_to, "amal@example.com");
    }

    #[test]
    fn failed_delivery_then_retry_keeps_fields() {
        let mut h = Harness::new();
        h.fill();
        let gate = h.mailer.gate();

        h.submit().unwrap();
        gate.send(Err(DeliveryError::Rejected {
            status: 400,
            body: "The public key is invalid".into(),
        }))
        .unwrap();
        h.settle();
        assert_eq!(h.status(), SubmissionStatus::Error);
        assert!(!h.submit_enabled());

        assert!(h.controller.borrow_mut().retry());
        assert_eq!(h.status(), SubmissionStatus::Idle);
        assert!(h.submit_enabled());
        let ctl = h.controller.borrow();
        assert_eq!(ctl.form().name, "Amal Saleh");
        assert_eq!(ctl.form().email, "amal@example.com");
        assert_eq!(ctl.form().message, "Please call us back.");
    }

    #[test]
    fn retry_is_only_valid_from_error() {
        let mut ctl = ContactController::default();
        assert!(!ctl.retry());
        assert_eq!(ctl.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn second_submit_while_sending_is_ignored() {
        let mut h = Harness::new();
        h.fill();
        let gate = h.mailer.gate();

        h.submit().unwrap();
        assert_eq!(
            h.submit(),
            Err(SubmitRejected::Unavailable(SubmissionStatus::Sending))
        );
        assert_eq!(h.mailer.call_count(), 1);

        gate.send(Ok(())).unwrap();
        h.settle();
        assert_eq!(h.status(), SubmissionStatus::Success);
        assert_eq!(h.mailer.call_count(), 1);
    }

    #[test]
    fn close_after_success_clears_once_delay_elapses() {
        let mut h = Harness::new();
        h.fill();
        h.submit().unwrap();
        assert_eq!(h.status(), SubmissionStatus::Success);

        let ticket = h.controller.borrow_mut().close();
        // Exit animation still running: content stays put.
        assert_eq!(h.status(), SubmissionStatus::Success);
        assert_eq!(h.controller.borrow().form().name, "Amal Saleh");

        assert!(h.controller.borrow_mut().complete_close(ticket));
        let ctl = h.controller.borrow();
        assert!(ctl.form().is_empty());
        assert_eq!(ctl.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn close_after_error_clears_too() {
        let mut h = Harness::new();
        h.fill();
        let gate = h.mailer.gate();
        h.submit().unwrap();
        gate.send(Err(DeliveryError::Transport("offline".into()))).unwrap();
        h.settle();
        assert_eq!(h.status(), SubmissionStatus::Error);

        let ticket = h.controller.borrow_mut().close();
        assert!(h.controller.borrow_mut().complete_close(ticket));
        assert!(h.controller.borrow().form().is_empty());
        assert_eq!(h.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn reopening_within_delay_shows_a_clean_form() {
        let mut h = Harness::new();
        h.fill();
        h.submit().unwrap();

        let ticket = h.controller.borrow_mut().close();
        h.controller.borrow_mut().reopen();
        {
            let ctl = h.controller.borrow();
            assert!(ctl.form().is_empty());
            assert_eq!(ctl.status(), SubmissionStatus::Idle);
        }

        // User starts typing before the old timer fires; it must not wipe that.
        h.controller.borrow_mut().edit(Field::Name, "Second try".into());
        assert!(!h.controller.borrow_mut().complete_close(ticket));
        assert_eq!(h.controller.borrow().form().name, "Second try");
    }

    #[test]
    fn reopen_without_pending_clear_keeps_fields() {
        let mut ctl = ContactController::default();
        ctl.edit(Field::Name, "Amal".into());
        ctl.reopen();
        assert_eq!(ctl.form().name, "Amal");
    }

    #[test]
    fn closing_while_sending_clears_after_the_outcome() {
        let mut h = Harness::new();
        h.fill();
        let gate = h.mailer.gate();
        h.submit().unwrap();

        let ticket = h.controller.borrow_mut().close();
        assert!(!h.controller.borrow_mut().complete_close(ticket));
        assert_eq!(h.status(), SubmissionStatus::Sending);
        assert_eq!(h.controller.borrow().form().name, "Amal Saleh");

        gate.send(Ok(())).unwrap();
        h.settle();
        assert_eq!(h.status(), SubmissionStatus::Idle);
        assert!(h.controller.borrow().form().is_empty());
        assert!(h.submit_enabled());
    }

    #[test]
    fn reopening_while_sending_blocks_a_second_send() {
        let mut h = Harness::new();
        h.fill();
        let gate = h.mailer.gate();
        h.submit().unwrap();

        let ticket = h.controller.borrow_mut().close();
        h.controller.borrow_mut().reopen();
        assert_eq!(h.status(), SubmissionStatus::Sending);
        assert!(!h.submit_enabled());
        assert_eq!(
            h.submit(),
            Err(SubmitRejected::Unavailable(SubmissionStatus::Sending))
        );
        assert_eq!(h.mailer.call_count(), 1);

        // The stale timer from the first close must not wipe the reopened form.
        assert!(!h.controller.borrow_mut().complete_close(ticket));
        assert_eq!(h.controller.borrow().form().name, "Amal Saleh");

        gate.send(Err(DeliveryError::Transport("offline".into()))).unwrap();
        h.settle();
        assert_eq!(h.status(), SubmissionStatus::Error);
        assert_eq!(h.controller.borrow().form().name, "Amal Saleh");
    }

    #[test]
    fn reopening_after_the_deferred_clear_shows_the_outcome() {
        let mut h = Harness::new();
        h.fill();
        let gate = h.mailer.gate();
        h.submit().unwrap();

        let ticket = h.controller.borrow_mut().close();
        assert!(!h.controller.borrow_mut().complete_close(ticket));
        h.controller.borrow_mut().reopen();

        gate.send(Ok(())).unwrap();
        h.settle();
        assert_eq!(h.status(), SubmissionStatus::Success);
        assert_eq!(h.mailer.call_count(), 1);
    }

    #[test]
    fn outcome_for_an_unknown_attempt_is_ignored() {
        let mut h = Harness::new();
        h.fill();
        let gate = h.mailer.gate();
        h.submit().unwrap();

        assert!(!h.controller.borrow_mut().finish(99, Ok(())));
        assert_eq!(h.status(), SubmissionStatus::Sending);

        gate.send(Ok(())).unwrap();
        h.settle();
        assert_eq!(h.status(), SubmissionStatus::Success);
    }
}
