use std::rc::Rc;

use log::info;
use thiserror::Error;
use yew::Reducible;

use crate::config;
use crate::contact::draft::{ContactFormDraft, ContactSubmission, DraftField, ValidationError};
use crate::contact::firestore::{DocumentStore, StoreError};
use crate::contact::guard::SubmissionGuard;
use crate::storage::KeyValueStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Submitting,
    Cooldown { remaining_secs: u64 },
}

impl SubmissionPhase {
    pub fn from_remaining(remaining_secs: u64) -> Self {
        match remaining_secs {
            0 => SubmissionPhase::Idle,
            remaining_secs => SubmissionPhase::Cooldown { remaining_secs },
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("Please wait {remaining_secs} seconds before sending another message.")]
    CoolingDown { remaining_secs: u64 },
    #[error("We couldn't send your message. Please try again.")]
    Store(#[from] StoreError),
}

/// Checks that have to pass before anything leaves the browser.
pub fn precheck<S: KeyValueStore>(
    guard: &SubmissionGuard<S>,
    draft: &ContactFormDraft,
    now_ms: i64,
) -> Result<(), SubmitError> {
    draft.validate()?;
    guard.check(now_ms)?;
    Ok(())
}

/// Validates, checks the cooldown, writes the submission and, only once the
/// write succeeded, starts a new cooldown window. A failed write leaves the
/// guard untouched so the user can retry straight away.
pub async fn submit<S, D>(
    guard: &SubmissionGuard<S>,
    store: &D,
    draft: &ContactFormDraft,
    now: impl Fn() -> i64,
) -> Result<String, SubmitError>
where
    S: KeyValueStore,
    D: DocumentStore + ?Sized,
{
    let started_at = now();
    precheck(guard, draft, started_at)?;

    let record = ContactSubmission::new(draft.clone(), started_at);
    let id = store.create_document(config::CONTACT_COLLECTION, &record).await?;
    info!("Contact submission stored as {}", id);

    guard.record_success(now());
    Ok(id)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Sent,
    Error(String),
}

/// UI-facing state of the contact form: the draft being edited plus the
/// submission phase and notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionFlow {
    pub phase: SubmissionPhase,
    pub notice: Option<Notice>,
    pub draft: ContactFormDraft,
}

pub enum FlowAction {
    Edit { field: DraftField, value: String },
    /// Periodic recompute from the persisted timestamp.
    Tick { remaining_secs: u64 },
    Rejected(String),
    Started,
    Succeeded { remaining_secs: u64 },
    Failed(String),
    /// Success message has been shown long enough; the form starts over.
    Acknowledged,
}

impl SubmissionFlow {
    pub fn resume(phase: SubmissionPhase) -> Self {
        Self {
            phase,
            notice: None,
            draft: ContactFormDraft::default(),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }
}

impl Reducible for SubmissionFlow {
    type Action = FlowAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FlowAction::Edit { field, value } => {
                next.draft = next.draft.with(field, value);
            }
            FlowAction::Tick { remaining_secs } => {
                let phase = SubmissionPhase::from_remaining(remaining_secs);
                if self.is_submitting() || phase == self.phase {
                    return self;
                }
                next.phase = phase;
            }
            FlowAction::Rejected(message) => {
                next.notice = Some(Notice::Error(message));
            }
            FlowAction::Started => {
                next.phase = SubmissionPhase::Submitting;
                next.notice = None;
            }
            FlowAction::Succeeded { remaining_secs } => {
                next.phase = SubmissionPhase::from_remaining(remaining_secs);
                next.notice = Some(Notice::Sent);
            }
            FlowAction::Failed(message) => {
                next.phase = SubmissionPhase::Idle;
                next.notice = Some(Notice::Error(message));
            }
            FlowAction::Acknowledged => {
                next.draft = ContactFormDraft::default();
                if next.notice == Some(Notice::Sent) {
                    next.notice = None;
                }
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use async_trait::async_trait;
    use futures::executor::block_on;

    use super::*;
    use crate::storage::MemoryStore;

    const T0: i64 = 1_700_000_000_000;

    #[derive(Default)]
    struct RecordingStore {
        writes: RefCell<Vec<(String, ContactSubmission)>>,
        fail_next: Cell<bool>,
    }

    #[async_trait(?Send)]
    impl DocumentStore for RecordingStore {
        async fn create_document(
            &self,
            collection: &str,
            record: &ContactSubmission,
        ) -> Result<String, StoreError> {
            if self.fail_next.replace(false) {
                return Err(StoreError::Network("offline".into()));
            }
            let mut writes = self.writes.borrow_mut();
            writes.push((collection.to_string(), record.clone()));
            Ok(format!("doc-{}", writes.len()))
        }
    }

    fn draft() -> ContactFormDraft {
        ContactFormDraft {
            name: "A".into(),
            email: "a@b.com".into(),
            phone_number: "1234567890".into(),
            company: String::new(),
            message: "hi".into(),
        }
    }

    #[test]
    fn successful_submit_writes_once_and_starts_cooldown() {
        let guard = SubmissionGuard::new(MemoryStore::new());
        let store = RecordingStore::default();

        let id = block_on(submit(&guard, &store, &draft(), || T0)).unwrap();

        assert_eq!(id, "doc-1");
        let writes = store.writes.borrow();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].0, "contactSubmissions");
        assert_eq!(writes[0].1.draft, draft());
        assert_eq!(guard.last_submission_ms(), Some(T0));
    }

    #[test]
    fn rapid_resubmits_within_window_never_reach_the_store() {
        let guard = SubmissionGuard::new(MemoryStore::new());
        let store = RecordingStore::default();
        block_on(submit(&guard, &store, &draft(), || T0)).unwrap();

        let mut previous = u64::MAX;
        for elapsed in (500..60_000).step_by(1_500) {
            let err = block_on(submit(&guard, &store, &draft(), || T0 + elapsed)).unwrap_err();
            let SubmitError::CoolingDown { remaining_secs } = err else {
                panic!("expected cooldown rejection, got {:?}", err);
            };
            assert!(remaining_secs > 0);
            assert!(remaining_secs <= previous);
            previous = remaining_secs;
        }
        assert_eq!(store.writes.borrow().len(), 1);

        block_on(submit(&guard, &store, &draft(), || T0 + 60_000)).unwrap();
        assert_eq!(store.writes.borrow().len(), 2);
    }

    #[test]
    fn failed_write_does_not_start_cooldown() {
        let guard = SubmissionGuard::new(MemoryStore::new());
        let store = RecordingStore::default();
        store.fail_next.set(true);

        let err = block_on(submit(&guard, &store, &draft(), || T0)).unwrap_err();
        assert!(matches!(err, SubmitError::Store(StoreError::Network(_))));
        assert_eq!(err.to_string(), "We couldn't send your message. Please try again.");
        assert_eq!(guard.last_submission_ms(), None);

        block_on(submit(&guard, &store, &draft(), || T0 + 1)).unwrap();
        assert_eq!(store.writes.borrow().len(), 1);
    }

    #[test]
    fn invalid_draft_is_rejected_before_any_write() {
        let guard = SubmissionGuard::new(MemoryStore::new());
        let store = RecordingStore::default();
        let incomplete = draft().with(DraftField::Email, String::new());

        let err = block_on(submit(&guard, &store, &incomplete, || T0)).unwrap_err();
        assert_eq!(err.to_string(), "Email is required");
        assert!(store.writes.borrow().is_empty());
    }

    #[test]
    fn cooldown_is_measured_from_when_the_write_finished() {
        let guard = SubmissionGuard::new(MemoryStore::new());
        let store = RecordingStore::default();
        let clock = Cell::new(T0);
        let now = || {
            let t = clock.get();
            clock.set(t + 2_000);
            t
        };

        block_on(submit(&guard, &store, &draft(), now)).unwrap();
        assert_eq!(guard.last_submission_ms(), Some(T0 + 2_000));
        assert_eq!(store.writes.borrow()[0].1.timestamp.timestamp_millis(), T0);
    }

    #[test]
    fn reload_during_cooldown_resumes_blocked() {
        let storage = MemoryStore::new();
        let store = RecordingStore::default();
        block_on(submit(&SubmissionGuard::new(storage.clone()), &store, &draft(), || T0)).unwrap();

        let reloaded = SubmissionGuard::new(storage);
        let flow = SubmissionFlow::resume(reloaded.phase(T0 + 20_000));
        assert_eq!(flow.phase, SubmissionPhase::Cooldown { remaining_secs: 40 });

        let err = block_on(submit(&reloaded, &store, &draft(), || T0 + 20_000)).unwrap_err();
        assert_eq!(err, SubmitError::CoolingDown { remaining_secs: 40 });
        assert_eq!(store.writes.borrow().len(), 1);
    }

    fn reduce(flow: SubmissionFlow, action: FlowAction) -> SubmissionFlow {
        (*Rc::new(flow).reduce(action)).clone()
    }

    #[test]
    fn flow_walks_idle_submitting_cooldown_idle() {
        let flow = SubmissionFlow::resume(SubmissionPhase::Idle);

        let flow = reduce(flow, FlowAction::Started);
        assert!(flow.is_submitting());

        // ticks don't interrupt an in-flight write
        let flow = reduce(flow, FlowAction::Tick { remaining_secs: 0 });
        assert!(flow.is_submitting());

        let flow = reduce(flow, FlowAction::Succeeded { remaining_secs: 60 });
        assert_eq!(flow.phase, SubmissionPhase::Cooldown { remaining_secs: 60 });
        assert_eq!(flow.notice, Some(Notice::Sent));

        let flow = reduce(flow, FlowAction::Acknowledged);
        assert_eq!(flow.notice, None);

        let flow = reduce(flow, FlowAction::Tick { remaining_secs: 12 });
        assert_eq!(flow.phase, SubmissionPhase::Cooldown { remaining_secs: 12 });

        let flow = reduce(flow, FlowAction::Tick { remaining_secs: 0 });
        assert_eq!(flow.phase, SubmissionPhase::Idle);
    }

    #[test]
    fn failure_returns_to_idle_and_rejection_keeps_phase() {
        let flow = reduce(SubmissionFlow::resume(SubmissionPhase::Idle), FlowAction::Started);
        let flow = reduce(flow, FlowAction::Failed("offline".into()));
        assert_eq!(flow.phase, SubmissionPhase::Idle);
        assert_eq!(flow.notice, Some(Notice::Error("offline".into())));

        let cooling = SubmissionFlow::resume(SubmissionPhase::Cooldown { remaining_secs: 50 });
        let flow = reduce(cooling, FlowAction::Rejected("wait".into()));
        assert_eq!(flow.phase, SubmissionPhase::Cooldown { remaining_secs: 50 });

        // an error notice is not cleared by the success timer
        let flow = reduce(flow, FlowAction::Acknowledged);
        assert_eq!(flow.notice, Some(Notice::Error("wait".into())));
    }

    #[test]
    fn draft_is_cleared_once_success_has_been_shown() {
        let mut flow = SubmissionFlow::resume(SubmissionPhase::Idle);
        for (field, value) in [
            (DraftField::Name, "A"),
            (DraftField::Email, "a@b.com"),
            (DraftField::PhoneNumber, "1234567890"),
            (DraftField::Message, "hi"),
        ] {
            flow = reduce(flow, FlowAction::Edit { field, value: value.into() });
        }
        assert_eq!(flow.draft, draft());

        let flow = reduce(flow, FlowAction::Started);
        let flow = reduce(flow, FlowAction::Succeeded { remaining_secs: 60 });
        // still visible while the success message shows
        assert_eq!(flow.draft, draft());

        let flow = reduce(flow, FlowAction::Acknowledged);
        assert_eq!(flow.draft, ContactFormDraft::default());
        assert_eq!(flow.notice, None);
        assert_eq!(flow.phase, SubmissionPhase::Cooldown { remaining_secs: 60 });
    }

    #[test]
    fn failed_submit_keeps_the_draft_for_retry() {
        let mut flow = SubmissionFlow::resume(SubmissionPhase::Idle);
        flow.draft = draft();
        let flow = reduce(flow, FlowAction::Started);
        let flow = reduce(flow, FlowAction::Failed("offline".into()));
        assert_eq!(flow.draft, draft());
    }
}
