//! Contact submission workflow.
//!
//! Holds the form fields and a small state machine
//! `Idle -> Sending -> (Sent | Failed) -> Sending ...`. A submit snapshots
//! the fields, runs the relay call once on a background thread and reports
//! back over a channel that [`ContactWorkflow::poll`] drains every frame.

pub mod form;

pub use form::{is_valid_email, ContactForm, Field, FieldError};

use std::sync::{mpsc, Arc};

use crate::config::RelayConfig;
use crate::net::relay::{EmailRelay, RelayError, RelayRequest};

/// Where the current (or last) submission stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Sent,
    /// Detail is for the log only; the UI shows a generic message.
    Failed(RelayError),
}

/// Banner-level view of [`SubmissionState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Unset,
    Success,
    Failure,
}

pub struct ContactWorkflow {
    form: ContactForm,
    state: SubmissionState,
    relay: Arc<dyn EmailRelay>,
    config: RelayConfig,
    pending: Option<mpsc::Receiver<Result<(), RelayError>>>,
}

impl ContactWorkflow {
    pub fn new(relay: Arc<dyn EmailRelay>, config: RelayConfig) -> Self {
        Self {
            form: ContactForm::default(),
            state: SubmissionState::Idle,
            relay,
            config,
            pending: None,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Replace one field, leaving the others untouched.
    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// In-place editing handle for a single field (text widgets bind to this).
    pub fn field_mut(&mut self, field: Field) -> &mut String {
        self.form.get_mut(field)
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_sending(&self) -> bool {
        self.state == SubmissionState::Sending
    }

    pub fn status(&self) -> SubmissionStatus {
        match self.state {
            SubmissionState::Sent => SubmissionStatus::Success,
            SubmissionState::Failed(_) => SubmissionStatus::Failure,
            SubmissionState::Idle | SubmissionState::Sending => SubmissionStatus::Unset,
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_sending() {
            "Sending..."
        } else {
            "Send Message"
        }
    }

    /// Start a submission. Returns `false` if one is already in flight.
    pub fn on_submit(&mut self) -> bool {
        self.submit_with(|| {})
    }

    /// Like [`on_submit`](Self::on_submit); `notify` runs on the relay thread
    /// once the result has been posted (used to wake the UI).
    pub fn submit_with<F>(&mut self, notify: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        if self.is_sending() {
            log::debug!("submit ignored: already sending");
            return false;
        }
        self.state = SubmissionState::Sending;

        let request = RelayRequest::new(&self.config, &self.form);
        let relay = Arc::clone(&self.relay);
        let (tx, rx) = mpsc::channel();
        self.pending = Some(rx);

        log::info!(
            "sending contact message via {} / {}",
            request.service_id,
            request.template_id
        );

        std::thread::spawn(move || {
            let result = relay.send(&request);
            let _ = tx.send(result);
            notify();
        });
        true
    }

    /// Drain the pending result, if any. Returns the new status on the
    /// frame the submission resolves.
    pub fn poll(&mut self) -> Option<SubmissionStatus> {
        let rx = self.pending.as_ref()?;
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(mpsc::TryRecvError::Empty) => return None,
            Err(mpsc::TryRecvError::Disconnected) => Err(RelayError::new(
                "relay",
                "relay thread exited without a result",
            )),
        };
        self.pending = None;

        match result {
            Ok(()) => {
                log::info!("contact message sent");
                self.state = SubmissionState::Sent;
                self.form.clear();
            }
            Err(e) => {
                log::error!("contact message failed: {}", e);
                self.state = SubmissionState::Failed(e);
            }
        }
        Some(self.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    /// Relay that returns a fixed result, optionally waiting for a release
    /// signal first.
    struct ScriptedRelay {
        result: Result<(), RelayError>,
        calls: AtomicUsize,
        last: Mutex<Option<RelayRequest>>,
        gate: Option<Mutex<mpsc::Receiver<()>>>,
    }

    impl ScriptedRelay {
        fn new(result: Result<(), RelayError>) -> Self {
            Self {
                result,
                calls: AtomicUsize::new(0),
                last: Mutex::new(None),
                gate: None,
            }
        }

        fn gated(result: Result<(), RelayError>) -> (Self, mpsc::Sender<()>) {
            let (tx, rx) = mpsc::channel();
            let mut relay = Self::new(result);
            relay.gate = Some(Mutex::new(rx));
            (relay, tx)
        }
    }

    impl EmailRelay for ScriptedRelay {
        fn send(&self, request: &RelayRequest) -> Result<(), RelayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some(request.clone());
            if let Some(gate) = &self.gate {
                let _ = gate.lock().unwrap().recv();
            }
            self.result.clone()
        }
    }

    struct PanickingRelay;

    impl EmailRelay for PanickingRelay {
        fn send(&self, _request: &RelayRequest) -> Result<(), RelayError> {
            panic!("relay blew up");
        }
    }

    fn workflow(relay: Arc<dyn EmailRelay>) -> ContactWorkflow {
        ContactWorkflow::new(relay, RelayConfig::default())
    }

    fn fill(wf: &mut ContactWorkflow) {
        wf.on_field_change(Field::Name, "A");
        wf.on_field_change(Field::Email, "a@b.com");
        wf.on_field_change(Field::Subject, "S");
        wf.on_field_change(Field::Message, "M");
    }

    fn wait_resolved(wf: &mut ContactWorkflow) -> SubmissionStatus {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(status) = wf.poll() {
                return status;
            }
            assert!(Instant::now() < deadline, "submission never resolved");
            std::thread::sleep(Duration::from_millis(2));
        }
    }

    #[test]
    fn successful_send_resets_fields() {
        let relay = Arc::new(ScriptedRelay::new(Ok(())));
        let mut wf = workflow(relay.clone());
        fill(&mut wf);

        assert!(wf.on_submit());
        assert!(wf.is_sending());
        assert_eq!(wf.status(), SubmissionStatus::Unset);
        assert_eq!(wf.button_label(), "Sending...");

        assert_eq!(wait_resolved(&mut wf), SubmissionStatus::Success);
        assert_eq!(wf.state(), &SubmissionState::Sent);
        assert_eq!(wf.form(), &ContactForm::default());
        assert!(!wf.is_sending());
        assert_eq!(wf.button_label(), "Send Message");
        assert_eq!(relay.calls.load(Ordering::SeqCst), 1);

        let sent = relay.last.lock().unwrap().clone().unwrap();
        assert_eq!(sent.template_params.name, "A");
        assert_eq!(sent.template_params.email, "a@b.com");
        assert_eq!(sent.user_id, RelayConfig::default().public_key);
    }

    #[test]
    fn failed_send_keeps_fields() {
        let err = RelayError::new("request", "connection refused");
        let relay = Arc::new(ScriptedRelay::new(Err(err.clone())));
        let mut wf = workflow(relay.clone());
        fill(&mut wf);
        let before = wf.form().clone();

        assert!(wf.on_submit());
        assert_eq!(wait_resolved(&mut wf), SubmissionStatus::Failure);
        assert_eq!(wf.state(), &SubmissionState::Failed(err));
        assert_eq!(wf.form(), &before);
        assert_eq!(before.subject, "S");
        assert!(!wf.is_sending());
        assert_eq!(relay.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn submit_while_sending_is_rejected() {
        let (relay, release) = ScriptedRelay::gated(Ok(()));
        let relay = Arc::new(relay);
        let mut wf = workflow(relay.clone());
        fill(&mut wf);

        assert!(wf.on_submit());
        assert!(!wf.on_submit());
        assert!(wf.poll().is_none());
        assert!(wf.is_sending());

        release.send(()).unwrap();
        assert_eq!(wait_resolved(&mut wf), SubmissionStatus::Success);
        assert_eq!(relay.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn new_attempt_clears_previous_result() {
        let relay = Arc::new(ScriptedRelay::new(Err(RelayError::new("response", "HTTP 500"))));
        let mut wf = workflow(relay.clone());
        fill(&mut wf);

        wf.on_submit();
        assert_eq!(wait_resolved(&mut wf), SubmissionStatus::Failure);

        // manual retry after a failure
        assert!(wf.on_submit());
        assert_eq!(wf.status(), SubmissionStatus::Unset);
        assert_eq!(wait_resolved(&mut wf), SubmissionStatus::Failure);
        assert_eq!(relay.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn panicking_relay_releases_sending() {
        let mut wf = workflow(Arc::new(PanickingRelay));
        fill(&mut wf);
        assert!(wf.on_submit());
        assert_eq!(wait_resolved(&mut wf), SubmissionStatus::Failure);
        assert!(!wf.is_sending());
        assert_eq!(wf.form().name, "A");
    }

    #[test]
    fn notify_runs_after_result() {
        let relay = Arc::new(ScriptedRelay::new(Ok(())));
        let mut wf = workflow(relay);
        let (tx, rx) = mpsc::channel();
        assert!(wf.submit_with(move || {
            let _ = tx.send(());
        }));
        rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(wf.poll(), Some(SubmissionStatus::Success));
    }

    #[test]
    fn field_edits_are_idempotent() {
        let mut wf = workflow(Arc::new(ScriptedRelay::new(Ok(()))));
        fill(&mut wf);
        wf.on_field_change(Field::Subject, "X");
        wf.on_field_change(Field::Subject, "X");
        assert_eq!(wf.form().subject, "X");
        assert_eq!(wf.form().name, "A");
        assert_eq!(wf.form().email, "a@b.com");
        assert_eq!(wf.form().message, "M");
        assert_eq!(wf.state(), &SubmissionState::Idle);
    }

    #[test]
    fn poll_without_submission_is_quiet() {
        let mut wf = workflow(Arc::new(ScriptedRelay::new(Ok(()))));
        assert_eq!(wf.poll(), None);
        assert_eq!(wf.status(), SubmissionStatus::Unset);
    }
}
