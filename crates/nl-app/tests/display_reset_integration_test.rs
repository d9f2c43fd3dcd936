use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use nl_app::usecases::{ContactFormConfig, ContactFormController, SubmitOutcome};
use nl_core::contact::ContactFormSnapshot;
use nl_core::ports::{DeliveryTarget, SubmissionEventPort};
use nl_core::{FormFields, FormId, SubmissionState};
use nl_infra::{SimulatedDelivery, TokioDisplayTimer};

#[derive(Default)]
struct CollectingEvents {
    states: Mutex<Vec<SubmissionState>>,
}

#[async_trait]
impl SubmissionEventPort for CollectingEvents {
    async fn emit_submission_changed(&self, _form_id: &FormId, snapshot: &ContactFormSnapshot) {
        self.states.lock().unwrap().push(snapshot.state.clone());
    }
}

fn controller(
    timer: Arc<TokioDisplayTimer>,
    events: Arc<CollectingEvents>,
) -> Arc<ContactFormController> {
    Arc::new(ContactFormController::new(
        ContactFormConfig {
            display_duration: Duration::from_millis(3000),
            delivery_timeout: Duration::from_millis(10_000),
            target: DeliveryTarget::default(),
        },
        Arc::new(SimulatedDelivery::new(Duration::from_millis(1500))),
        timer,
        events,
    ))
}

#[tokio::test(start_paused = true)]
async fn notice_resets_to_idle_after_display_duration() {
    let (timer, mut fired) = TokioDisplayTimer::new();
    let events = Arc::new(CollectingEvents::default());
    let controller = controller(Arc::new(timer), events.clone());

    let outcome = controller
        .submit(FormFields::new("Jane Doe", "jane@co.com", "Interested in a quote"))
        .await
        .unwrap();
    assert_eq!(outcome, SubmitOutcome::Delivered);
    let shown_at = tokio::time::Instant::now();

    let expiry = fired.recv().await.expect("timer fires");
    assert_eq!(&expiry.form_id, controller.form_id());
    assert!(shown_at.elapsed() >= Duration::from_millis(3000));

    let snapshot = controller.display_elapsed(expiry.generation).await;
    assert!(snapshot.state.is_idle());
    assert_eq!(
        *events.states.lock().unwrap(),
        vec![
            SubmissionState::Submitting,
            SubmissionState::Success,
            SubmissionState::idle()
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn dismissed_notice_never_reports_expiry() {
    let (timer, mut fired) = TokioDisplayTimer::new();
    let events = Arc::new(CollectingEvents::default());
    let controller = controller(Arc::new(timer), events);

    controller
        .submit(FormFields::new("Jane Doe", "jane@co.com", "Interested in a quote"))
        .await
        .unwrap();
    controller.dismiss().await;

    tokio::time::sleep(Duration::from_millis(10_000)).await;

    assert!(fired.try_recv().is_err());
    assert!(controller.snapshot().await.state.is_idle());
}

#[tokio::test(start_paused = true)]
async fn expiry_queued_before_dismiss_leaves_next_notice_up() {
    let (timer, mut fired) = TokioDisplayTimer::new();
    let events = Arc::new(CollectingEvents::default());
    let controller = controller(Arc::new(timer), events);
    let jane = FormFields::new("Jane Doe", "jane@co.com", "Interested in a quote");

    controller.submit(jane.clone()).await.unwrap();
    let queued = fired.recv().await.expect("first timer fires");

    controller.dismiss().await;
    controller.submit(jane).await.unwrap();

    let snapshot = controller.display_elapsed(queued.generation).await;
    assert_eq!(snapshot.state, SubmissionState::Success);

    let current = fired.recv().await.expect("second timer fires");
    assert_ne!(current.generation, queued.generation);
    let snapshot = controller.display_elapsed(current.generation).await;
    assert!(snapshot.state.is_idle());
}
