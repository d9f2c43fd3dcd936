//! Contact form orchestrator.
//!
//! Feeds user input, delivery results and timer expiry into the pure
//! `SubmissionStateMachine` and executes the actions it returns.
//!
//! ```text
//! User / Timer Events
//!   ↓
//! ContactFormController (serializes access, runs delivery)
//!   ↓
//! SubmissionStateMachine (pure transitions)
//!   ↓
//! SubmissionActions (delivery, field reset, display timer)
//! ```

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, error, info, info_span, warn, Instrument};

use nl_core::contact::ContactFormSnapshot;
use nl_core::ports::{
    DeliveryError, DeliveryRequest, DeliveryTarget, DisplayTimerPort, MessageDeliveryPort,
    SubmissionEventPort, TimerGeneration,
};
use nl_core::{
    ContactMessage, DeliveryFailure, FieldErrors, FormField, FormFields, FormId,
    SubmissionAction, SubmissionEvent, SubmissionState, SubmissionStateMachine,
};

use crate::AppDeps;

/// Timing and destination of the contact form.
#[derive(Debug, Clone)]
pub struct ContactFormConfig {
    /// How long a success/error notice stays before the form resets.
    pub display_duration: Duration,
    /// Upper bound on one delivery call.
    pub delivery_timeout: Duration,
    pub target: DeliveryTarget,
}

/// Result of a submit that the form accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid(FieldErrors),
    Delivered,
    Failed(DeliveryFailure),
}

/// Submit refused because of the current form state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactFormError {
    #[error("a submission is already in progress")]
    SubmitInProgress,
    #[error("the success notice is still displayed")]
    NoticeDisplayed,
}

/// Orchestrator that owns the single contact form instance.
pub struct ContactFormController {
    form_id: FormId,
    config: ContactFormConfig,
    form: Mutex<ContactFormSnapshot>,
    /// Generation of the display timer currently armed. Always locked
    /// after `form`.
    armed_timer: Mutex<Option<TimerGeneration>>,
    delivery: Arc<dyn MessageDeliveryPort>,
    display_timer: Arc<dyn DisplayTimerPort>,
    events: Arc<dyn SubmissionEventPort>,
}

impl ContactFormController {
    pub fn new(
        config: ContactFormConfig,
        delivery: Arc<dyn MessageDeliveryPort>,
        display_timer: Arc<dyn DisplayTimerPort>,
        events: Arc<dyn SubmissionEventPort>,
    ) -> Self {
        Self {
            form_id: FormId::new(),
            config,
            form: Mutex::new(ContactFormSnapshot::default()),
            armed_timer: Mutex::new(None),
            delivery,
            display_timer,
            events,
        }
    }

    pub fn from_deps(config: ContactFormConfig, deps: &AppDeps) -> Self {
        Self::new(
            config,
            deps.delivery.clone(),
            deps.display_timer.clone(),
            deps.submission_events.clone(),
        )
    }

    pub fn form_id(&self) -> &FormId {
        &self.form_id
    }

    pub async fn snapshot(&self) -> ContactFormSnapshot {
        self.form.lock().await.clone()
    }

    /// Edits one field. Ignored while a submission is in flight.
    pub async fn update_field(&self, field: FormField, value: String) -> ContactFormSnapshot {
        let snapshot = {
            let mut form = self.form.lock().await;
            if form.state.is_submitting() {
                debug!(form_id = %self.form_id, %field, "field edit ignored while submitting");
                return form.clone();
            }
            form.fields.set(field, value);
            let (next, _) = SubmissionStateMachine::transition(
                form.state.clone(),
                SubmissionEvent::FieldEdited { field },
            );
            form.state = next;
            form.clone()
        };
        self.emit(&snapshot).await;
        snapshot
    }

    /// Validates `fields` and, when they pass, delivers them exactly once.
    ///
    /// The lock is released while the delivery call is pending, so a
    /// concurrent submit observes `Submitting` and is refused. Submitting
    /// from the error notice is a retry and closes the notice.
    pub async fn submit(&self, fields: FormFields) -> Result<SubmitOutcome, ContactFormError> {
        let span = info_span!("usecase.contact_form.submit", form_id = %self.form_id);
        async {
            let (snapshot, message) = {
                let mut form = self.form.lock().await;
                match &form.state {
                    SubmissionState::Submitting => {
                        warn!("submit rejected: delivery in progress");
                        return Err(ContactFormError::SubmitInProgress);
                    }
                    SubmissionState::Success => {
                        warn!("submit rejected: success notice still displayed");
                        return Err(ContactFormError::NoticeDisplayed);
                    }
                    SubmissionState::Idle { .. } | SubmissionState::Error { .. } => {}
                }
                form.fields = fields.clone();
                let message = self
                    .dispatch_locked(&mut form, SubmissionEvent::Submit { fields })
                    .await;
                (form.clone(), message)
            };
            self.emit(&snapshot).await;

            let Some(message) = message else {
                let errors = match snapshot.state {
                    SubmissionState::Idle { errors } => errors,
                    _ => FieldErrors::new(),
                };
                info!(errors = errors.len(), "contact form failed validation");
                return Ok(SubmitOutcome::Invalid(errors));
            };

            let event = self.deliver(&message).await;
            let outcome = match &event {
                SubmissionEvent::DeliveryFailed { failure } => SubmitOutcome::Failed(failure.clone()),
                _ => SubmitOutcome::Delivered,
            };
            self.dispatch(event).await;
            Ok(outcome)
        }
        .instrument(span)
        .await
    }

    /// Submits whatever the form currently holds.
    pub async fn submit_current(&self) -> Result<SubmitOutcome, ContactFormError> {
        let fields = self.form.lock().await.fields.clone();
        self.submit(fields).await
    }

    /// Closes a success/error notice before its display duration ends.
    pub async fn dismiss(&self) -> ContactFormSnapshot {
        let span = info_span!("usecase.contact_form.dismiss", form_id = %self.form_id);
        self.dispatch(SubmissionEvent::Dismiss).instrument(span).await
    }

    /// Called when a display timer for this form fires.
    ///
    /// Only the currently armed `generation` resets the notice; an expiry
    /// that was already queued when its timer got stopped or replaced is
    /// dropped.
    pub async fn display_elapsed(&self, generation: TimerGeneration) -> ContactFormSnapshot {
        let span = info_span!(
            "usecase.contact_form.display_elapsed",
            form_id = %self.form_id,
            generation = generation.0
        );
        async {
            let (before, after) = {
                let mut form = self.form.lock().await;
                {
                    let mut armed = self.armed_timer.lock().await;
                    if *armed != Some(generation) {
                        debug!(armed = ?*armed, "stale display expiry ignored");
                        return form.clone();
                    }
                    *armed = None;
                }
                let before = form.clone();
                self.dispatch_locked(&mut form, SubmissionEvent::DisplayElapsed)
                    .await;
                (before, form.clone())
            };
            if before != after {
                self.emit(&after).await;
            }
            after
        }
        .instrument(span)
        .await
    }

    async fn deliver(&self, message: &ContactMessage) -> SubmissionEvent {
        let request = DeliveryRequest::new(&self.config.target, message);
        let result =
            match tokio::time::timeout(self.config.delivery_timeout, self.delivery.deliver(&request))
                .await
            {
                Ok(result) => result,
                Err(_) => Err(DeliveryError::Timeout {
                    after_ms: duration_ms(self.config.delivery_timeout),
                }),
            };

        match result {
            Ok(receipt) => {
                info!(status = receipt.status, text = %receipt.text, "contact message delivered");
                SubmissionEvent::DeliverySucceeded
            }
            Err(err) => {
                error!(error = %err, "contact message delivery failed");
                SubmissionEvent::DeliveryFailed {
                    failure: DeliveryFailure::new(err.to_string()),
                }
            }
        }
    }

    /// Applies `event`, emitting a change notification when the form changed.
    async fn dispatch(&self, event: SubmissionEvent) -> ContactFormSnapshot {
        let (before, after) = {
            let mut form = self.form.lock().await;
            let before = form.clone();
            self.dispatch_locked(&mut form, event).await;
            (before, form.clone())
        };
        if before != after {
            self.emit(&after).await;
        }
        after
    }

    /// Runs one transition and its actions. Returns the message to deliver,
    /// if the transition asked for one.
    async fn dispatch_locked(
        &self,
        form: &mut ContactFormSnapshot,
        event: SubmissionEvent,
    ) -> Option<ContactMessage> {
        let from = form.state.clone();
        let event_name = format!("{:?}", event);
        let (next, actions) = SubmissionStateMachine::transition(form.state.clone(), event);
        if from != next {
            info!(from = ?from, to = ?next, event = %event_name, "submission state transition");
        }
        form.state = next;
        self.execute_actions(form, actions).await
    }

    async fn execute_actions(
        &self,
        form: &mut ContactFormSnapshot,
        actions: Vec<SubmissionAction>,
    ) -> Option<ContactMessage> {
        let mut pending = None;
        for action in actions {
            debug!(?action, "contact form executing action");
            match action {
                SubmissionAction::Deliver { message } => pending = Some(message),
                SubmissionAction::ClearFields => form.fields.clear(),
                SubmissionAction::StartDisplayTimer => {
                    // A failed timer leaves the notice up until dismissed.
                    let armed = match self
                        .display_timer
                        .start(&self.form_id, self.config.display_duration)
                        .await
                    {
                        Ok(generation) => Some(generation),
                        Err(err) => {
                            error!(error = %err, "failed to start display timer");
                            None
                        }
                    };
                    *self.armed_timer.lock().await = armed;
                }
                SubmissionAction::StopDisplayTimer => {
                    *self.armed_timer.lock().await = None;
                    if let Err(err) = self.display_timer.stop(&self.form_id).await {
                        warn!(error = %err, "failed to stop display timer");
                    }
                }
            }
        }
        pending
    }

    async fn emit(&self, snapshot: &ContactFormSnapshot) {
        self.events
            .emit_submission_changed(&self.form_id, snapshot)
            .await;
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::*;
    use nl_core::ports::DeliveryReceipt;
    use nl_core::FieldErrorKind;

    mock! {
        pub Delivery {}

        #[async_trait]
        impl MessageDeliveryPort for Delivery {
            async fn deliver(&self, request: &DeliveryRequest) -> Result<DeliveryReceipt, DeliveryError>;
        }
    }

    mock! {
        pub Timer {}

        #[async_trait]
        impl DisplayTimerPort for Timer {
            async fn start(&self, form_id: &FormId, after: Duration) -> anyhow::Result<TimerGeneration>;
            async fn stop(&self, form_id: &FormId) -> anyhow::Result<()>;
        }
    }

    mock! {
        pub Events {}

        #[async_trait]
        impl SubmissionEventPort for Events {
            async fn emit_submission_changed(&self, form_id: &FormId, snapshot: &ContactFormSnapshot);
        }
    }

    fn config() -> ContactFormConfig {
        ContactFormConfig {
            display_duration: Duration::from_millis(3000),
            delivery_timeout: Duration::from_secs(10),
            target: DeliveryTarget {
                service_id: "service_test".to_string(),
                template_id: "template_test".to_string(),
                public_key: "pk_test".to_string(),
            },
        }
    }

    fn quiet_events() -> MockEvents {
        let mut events = MockEvents::new();
        events.expect_emit_submission_changed().returning(|_, _| ());
        events
    }

    fn jane() -> FormFields {
        FormFields::new("Jane Doe", "jane@co.com", "Interested in a quote")
    }

    #[tokio::test]
    async fn invalid_fields_never_reach_delivery() {
        let mut delivery = MockDelivery::new();
        delivery.expect_deliver().never();
        let mut timer = MockTimer::new();
        timer.expect_start().never();

        let controller = ContactFormController::new(
            config(),
            Arc::new(delivery),
            Arc::new(timer),
            Arc::new(quiet_events()),
        );

        let outcome = controller
            .submit(FormFields::new("", "not-an-email", ""))
            .await
            .unwrap();

        match outcome {
            SubmitOutcome::Invalid(errors) => {
                assert_eq!(errors.len(), 3);
                assert_eq!(
                    errors.get(FormField::Email).map(|e| e.kind),
                    Some(FieldErrorKind::InvalidFormat)
                );
            }
            other => panic!("expected invalid outcome, got {other:?}"),
        }
        assert!(controller.snapshot().await.state.is_idle());
    }

    #[tokio::test]
    async fn success_delivers_mapped_params_and_starts_timer() {
        let mut delivery = MockDelivery::new();
        delivery
            .expect_deliver()
            .withf(|request| {
                request.service_id == "service_test"
                    && request.template_id == "template_test"
                    && request.public_key == "pk_test"
                    && request.template_params.get("user_name").map(String::as_str)
                        == Some("Jane Doe")
                    && request.template_params.get("reply_to").map(String::as_str)
                        == Some("jane@co.com")
                    && !request.template_params.contains_key("company")
            })
            .times(1)
            .returning(|_| {
                Ok(DeliveryReceipt {
                    status: 200,
                    text: "OK".to_string(),
                })
            });
        let mut timer = MockTimer::new();
        timer
            .expect_start()
            .with(always(), eq(Duration::from_millis(3000)))
            .times(1)
            .returning(|_, _| Ok(TimerGeneration(1)));

        let controller = ContactFormController::new(
            config(),
            Arc::new(delivery),
            Arc::new(timer),
            Arc::new(quiet_events()),
        );

        let outcome = controller.submit(jane()).await.unwrap();

        assert_eq!(outcome, SubmitOutcome::Delivered);
        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.state, SubmissionState::Success);
        assert!(snapshot.fields.is_empty());
    }

    #[tokio::test]
    async fn failure_keeps_fields_and_reports_reason() {
        let mut delivery = MockDelivery::new();
        delivery.expect_deliver().times(1).returning(|_| {
            Err(DeliveryError::Rejected {
                status: 400,
                body: "The public key is invalid".to_string(),
            })
        });
        let mut timer = MockTimer::new();
        timer.expect_start().times(1).returning(|_, _| Ok(TimerGeneration(1)));

        let controller = ContactFormController::new(
            config(),
            Arc::new(delivery),
            Arc::new(timer),
            Arc::new(quiet_events()),
        );

        let outcome = controller.submit(jane()).await.unwrap();

        let SubmitOutcome::Failed(failure) = outcome else {
            panic!("expected failure outcome");
        };
        assert!(failure.reason.contains("400"));
        let snapshot = controller.snapshot().await;
        assert!(matches!(snapshot.state, SubmissionState::Error { .. }));
        assert_eq!(snapshot.fields, jane());
    }

    #[tokio::test]
    async fn submit_during_notice_is_refused() {
        let mut delivery = MockDelivery::new();
        delivery.expect_deliver().times(1).returning(|_| {
            Ok(DeliveryReceipt {
                status: 200,
                text: "OK".to_string(),
            })
        });
        let mut timer = MockTimer::new();
        timer.expect_start().returning(|_, _| Ok(TimerGeneration(1)));

        let controller = ContactFormController::new(
            config(),
            Arc::new(delivery),
            Arc::new(timer),
            Arc::new(quiet_events()),
        );

        controller.submit(jane()).await.unwrap();
        let err = controller.submit(jane()).await.unwrap_err();

        assert_eq!(err, ContactFormError::NoticeDisplayed);
    }

    #[tokio::test]
    async fn submit_from_error_notice_retries_delivery() {
        let mut delivery = MockDelivery::new();
        let mut attempt = 0;
        delivery.expect_deliver().times(2).returning(move |_| {
            attempt += 1;
            if attempt == 1 {
                Err(DeliveryError::Transport("connection refused".to_string()))
            } else {
                Ok(DeliveryReceipt {
                    status: 200,
                    text: "OK".to_string(),
                })
            }
        });
        let mut timer = MockTimer::new();
        timer.expect_start().times(2).returning(|_, _| Ok(TimerGeneration(1)));
        timer.expect_stop().times(1).returning(|_| Ok(()));

        let controller = ContactFormController::new(
            config(),
            Arc::new(delivery),
            Arc::new(timer),
            Arc::new(quiet_events()),
        );

        assert!(matches!(
            controller.submit(jane()).await.unwrap(),
            SubmitOutcome::Failed(_)
        ));
        let outcome = controller.submit_current().await.unwrap();

        assert_eq!(outcome, SubmitOutcome::Delivered);
        assert_eq!(controller.snapshot().await.state, SubmissionState::Success);
    }

    #[tokio::test]
    async fn dismiss_stops_timer_and_returns_to_idle() {
        let mut delivery = MockDelivery::new();
        delivery
            .expect_deliver()
            .returning(|_| Err(DeliveryError::Transport("connection refused".to_string())));
        let mut timer = MockTimer::new();
        timer.expect_start().times(1).returning(|_, _| Ok(TimerGeneration(1)));
        timer.expect_stop().times(1).returning(|_| Ok(()));

        let controller = ContactFormController::new(
            config(),
            Arc::new(delivery),
            Arc::new(timer),
            Arc::new(quiet_events()),
        );

        controller.submit(jane()).await.unwrap();
        let snapshot = controller.dismiss().await;

        assert!(snapshot.state.is_idle());
        assert_eq!(snapshot.fields, jane());
    }

    #[tokio::test]
    async fn stale_display_elapsed_is_ignored() {
        let mut events = MockEvents::new();
        events.expect_emit_submission_changed().never();

        let controller = ContactFormController::new(
            config(),
            Arc::new(MockDelivery::new()),
            Arc::new(MockTimer::new()),
            Arc::new(events),
        );

        let snapshot = controller.display_elapsed(TimerGeneration(1)).await;
        assert_eq!(snapshot, ContactFormSnapshot::default());
    }

    #[tokio::test]
    async fn timer_start_failure_is_not_fatal() {
        let mut delivery = MockDelivery::new();
        delivery.expect_deliver().returning(|_| {
            Ok(DeliveryReceipt {
                status: 200,
                text: "OK".to_string(),
            })
        });
        let mut timer = MockTimer::new();
        timer
            .expect_start()
            .returning(|_, _| Err(anyhow::anyhow!("runtime shutting down")));

        let controller = ContactFormController::new(
            config(),
            Arc::new(delivery),
            Arc::new(timer),
            Arc::new(quiet_events()),
        );

        assert_eq!(controller.submit(jane()).await.unwrap(), SubmitOutcome::Delivered);
        assert_eq!(controller.snapshot().await.state, SubmissionState::Success);
    }

    #[tokio::test]
    async fn editing_clears_only_that_fields_error() {
        let controller = ContactFormController::new(
            config(),
            Arc::new(MockDelivery::new()),
            Arc::new(MockTimer::new()),
            Arc::new(quiet_events()),
        );

        controller
            .submit(FormFields::new("", "", "hello"))
            .await
            .unwrap();
        let snapshot = controller
            .update_field(FormField::Name, "Jane".to_string())
            .await;

        let SubmissionState::Idle { errors } = snapshot.state else {
            panic!("expected idle");
        };
        assert!(errors.get(FormField::Name).is_none());
        assert!(errors.get(FormField::Email).is_some());
        assert_eq!(snapshot.fields.name, "Jane");
    }

    #[test]
    fn timeout_millis_saturate_instead_of_wrapping() {
        assert_eq!(duration_ms(Duration::from_millis(10_000)), 10_000);
        assert_eq!(duration_ms(Duration::MAX), u64::MAX);
    }
}
