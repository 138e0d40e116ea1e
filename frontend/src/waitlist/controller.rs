use std::cell::RefCell;
use std::rc::Rc;

use log::{error, info, warn};

use super::email::{EmailAddress, EmailError};
use super::store::{StoreError, WaitlistEntry, WaitlistStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reachability {
    Unknown,
    Reachable,
    /// Set when the initial count failed. Sticks for the rest of the session.
    Unreachable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    StoreUnreachable,
    InsertFailed,
}

/// How a successful join was recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Stored { id: String },
    LocalOnly(FallbackReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success(Delivery),
    Duplicate,
    ValidationError(EmailError),
    /// A submission from this form is still waiting on the store.
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Loading,
    Success,
    Duplicate,
    Invalid,
}

impl NoticeKind {
    /// How long the toast stays up, `None` until replaced.
    pub fn duration_ms(self) -> Option<u32> {
        match self {
            NoticeKind::Loading => None,
            NoticeKind::Success => Some(6_000),
            NoticeKind::Duplicate => Some(4_000),
            NoticeKind::Invalid => Some(5_000),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// What the form renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub input: String,
    pub phase: Phase,
    pub displayed_count: u64,
    pub notice: Option<Notice>,
    /// Bumped for every notice posted, including one equal to the last.
    pub notice_seq: u64,
}

#[derive(Debug, Clone)]
pub struct WaitlistSettings {
    pub base_count: u64,
    pub source: Option<String>,
    pub client_context: Option<String>,
}

struct FormState {
    input: String,
    phase: Phase,
    displayed_count: u64,
    reachability: Reachability,
    notice: Option<Notice>,
    notice_seq: u64,
}

impl FormState {
    fn post(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.notice_seq += 1;
    }
}

/// Drives the waitlist form: validation, duplicate check, insert and the
/// local-only fallback when the store cannot be reached.
///
/// State lives behind a `RefCell` so the UI can share one controller through an
/// `Rc`. Borrows are never held across an `.await`.
pub struct WaitlistController {
    store: Rc<dyn WaitlistStore>,
    settings: WaitlistSettings,
    state: RefCell<FormState>,
    listener: RefCell<Option<Rc<dyn Fn(FormSnapshot)>>>,
}

impl WaitlistController {
    pub fn new(store: Rc<dyn WaitlistStore>, settings: WaitlistSettings) -> Self {
        let state = FormState {
            input: String::new(),
            phase: Phase::Idle,
            displayed_count: settings.base_count,
            reachability: Reachability::Unknown,
            notice: None,
            notice_seq: 0,
        };
        Self {
            store,
            settings,
            state: RefCell::new(state),
            listener: RefCell::new(None),
        }
    }

    /// Registers the one listener told about every state change.
    pub fn subscribe(&self, listener: impl Fn(FormSnapshot) + 'static) {
        *self.listener.borrow_mut() = Some(Rc::new(listener));
    }

    fn notify(&self) {
        let listener = self.listener.borrow().clone();
        if let Some(listener) = listener {
            listener(self.snapshot());
        }
    }

    pub fn snapshot(&self) -> FormSnapshot {
        let state = self.state.borrow();
        FormSnapshot {
            input: state.input.clone(),
            phase: state.phase,
            displayed_count: state.displayed_count,
            notice: state.notice.clone(),
            notice_seq: state.notice_seq,
        }
    }

    pub fn reachability(&self) -> Reachability {
        self.state.borrow().reachability
    }

    pub fn set_input(&self, value: String) {
        self.state.borrow_mut().input = value;
        self.notify();
    }

    pub fn dismiss_notice(&self) {
        self.state.borrow_mut().notice = None;
        self.notify();
    }

    /// Fetches the stored count once at mount. Never lowers what is already shown.
    pub async fn load_initial_count(&self) -> u64 {
        let result = self.store.count().await;
        let mut state = self.state.borrow_mut();
        match result {
            Ok(stored) => {
                info!("waitlist has {} stored entries", stored);
                state.reachability = Reachability::Reachable;
                let refreshed = self.settings.base_count.saturating_add(stored);
                state.displayed_count = state.displayed_count.max(refreshed);
            }
            Err(e) => {
                warn!("waitlist store unreachable, continuing in local-only mode: {}", e);
                state.reachability = Reachability::Unreachable;
            }
        }
        let displayed = state.displayed_count;
        drop(state);
        self.notify();
        displayed
    }

    pub async fn submit(&self, raw_email: &str) -> SubmissionOutcome {
        if self.state.borrow().phase == Phase::Submitting {
            return SubmissionOutcome::Busy;
        }

        let email = match EmailAddress::parse(raw_email) {
            Ok(email) => email,
            Err(e) => {
                self.state.borrow_mut().post(Notice::new(NoticeKind::Invalid, e.to_string()));
                self.notify();
                return SubmissionOutcome::ValidationError(e);
            }
        };

        {
            let mut state = self.state.borrow_mut();
            state.phase = Phase::Submitting;
            state.post(Notice::new(
                NoticeKind::Loading,
                "Adding you to the waitlist...",
            ));
        }
        self.notify();

        let outcome = self.deliver(email).await;
        self.finish(&outcome);
        self.notify();
        outcome
    }

    async fn deliver(&self, email: EmailAddress) -> SubmissionOutcome {
        if self.reachability() == Reachability::Unreachable {
            info!("store marked unreachable, recording {} locally", email);
            return SubmissionOutcome::Success(Delivery::LocalOnly(
                FallbackReason::StoreUnreachable,
            ));
        }

        match self.store.exists(&email).await {
            Ok(true) => {
                info!("{} is already on the waitlist", email);
                return SubmissionOutcome::Duplicate;
            }
            Ok(false) => {}
            Err(e) => warn!("duplicate check failed, inserting anyway: {}", e),
        }

        let entry = WaitlistEntry::new(
            email,
            self.settings.source.clone(),
            self.settings.client_context.clone(),
        );
        match self.store.insert(entry).await {
            Ok(id) => {
                info!("Successfully added to waitlist with ID: {}", id);
                SubmissionOutcome::Success(Delivery::Stored { id })
            }
            Err(StoreError::Duplicate) => SubmissionOutcome::Duplicate,
            Err(e) => {
                error!("Error adding to waitlist, keeping local-only success: {}", e);
                SubmissionOutcome::Success(Delivery::LocalOnly(FallbackReason::InsertFailed))
            }
        }
    }

    fn finish(&self, outcome: &SubmissionOutcome) {
        let mut state = self.state.borrow_mut();
        state.phase = Phase::Idle;
        match outcome {
            SubmissionOutcome::Success(delivery) => {
                if let Delivery::LocalOnly(reason) = delivery {
                    warn!("waitlist join shown as success without a stored entry ({:?})", reason);
                }
                state.input.clear();
                state.displayed_count = state.displayed_count.saturating_add(1);
                state.post(Notice::new(
                    NoticeKind::Success,
                    "🎉 Welcome to the waitlist! We'll notify you when we launch.",
                ));
            }
            SubmissionOutcome::Duplicate => {
                state.post(Notice::new(
                    NoticeKind::Duplicate,
                    "This email is already on our waitlist!",
                ));
            }
            SubmissionOutcome::ValidationError(_) | SubmissionOutcome::Busy => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waitlist::store::MockWaitlistStore;
    use async_trait::async_trait;
    use std::cell::Cell;

    const BASE: u64 = 134;

    fn settings() -> WaitlistSettings {
        WaitlistSettings {
            base_count: BASE,
            source: Some("hero_section".to_string()),
            client_context: Some("test-agent".to_string()),
        }
    }

    /// In-memory collection that can be switched into an outage.
    #[derive(Default)]
    struct MemoryStore {
        entries: RefCell<Vec<WaitlistEntry>>,
        offline: Cell<bool>,
        calls: Cell<u32>,
    }

    impl MemoryStore {
        fn offline() -> Self {
            let store = Self::default();
            store.offline.set(true);
            store
        }

        fn with_emails(emails: &[&str]) -> Self {
            let store = Self::default();
            for email in emails {
                store.entries.borrow_mut().push(WaitlistEntry::new(
                    EmailAddress::parse(email).unwrap(),
                    None,
                    None,
                ));
            }
            store
        }

        fn stored_for(&self, email: &str) -> usize {
            self.entries
                .borrow()
                .iter()
                .filter(|entry| entry.email.as_str() == email)
                .count()
        }

        fn check(&self) -> Result<(), StoreError> {
            self.calls.set(self.calls.get() + 1);
            if self.offline.get() {
                Err(StoreError::Unavailable("simulated outage".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait(?Send)]
    impl WaitlistStore for MemoryStore {
        async fn exists(&self, email: &EmailAddress) -> Result<bool, StoreError> {
            // Suspend like a real round-trip would
            tokio::task::yield_now().await;
            self.check()?;
            Ok(self.entries.borrow().iter().any(|entry| &entry.email == email))
        }

        async fn insert(&self, entry: WaitlistEntry) -> Result<String, StoreError> {
            self.check()?;
            let mut entries = self.entries.borrow_mut();
            entries.push(entry);
            Ok(format!("doc-{}", entries.len()))
        }

        async fn count(&self) -> Result<u64, StoreError> {
            self.check()?;
            Ok(self.entries.borrow().len() as u64)
        }
    }

    fn controller(store: &Rc<MemoryStore>) -> WaitlistController {
        WaitlistController::new(store.clone(), settings())
    }

    #[tokio::test]
    async fn scenario_a_fresh_store_then_join() {
        let store = Rc::new(MemoryStore::default());
        let controller = controller(&store);

        assert_eq!(controller.load_initial_count().await, 134);

        controller.set_input("a@b.com".to_string());
        let outcome = controller.submit("a@b.com").await;

        assert_eq!(
            outcome,
            SubmissionOutcome::Success(Delivery::Stored { id: "doc-1".to_string() })
        );
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.displayed_count, 135);
        assert_eq!(snapshot.input, "");
        assert_eq!(snapshot.phase, Phase::Idle);
        assert_eq!(snapshot.notice.unwrap().kind, NoticeKind::Success);
    }

    #[tokio::test]
    async fn scenario_b_existing_email_is_duplicate() {
        let store = Rc::new(MemoryStore::with_emails(&["a@b.com"]));
        let controller = controller(&store);
        assert_eq!(controller.load_initial_count().await, 135);

        controller.set_input("a@b.com".to_string());
        let outcome = controller.submit("a@b.com").await;

        assert_eq!(outcome, SubmissionOutcome::Duplicate);
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.displayed_count, 135);
        assert_eq!(snapshot.input, "a@b.com");
        assert_eq!(
            snapshot.notice,
            Some(Notice::new(
                NoticeKind::Duplicate,
                "This email is already on our waitlist!"
            ))
        );
        assert_eq!(store.stored_for("a@b.com"), 1);
    }

    #[tokio::test]
    async fn scenario_c_outage_still_reports_success() {
        let store = Rc::new(MemoryStore::offline());
        let controller = controller(&store);

        let outcome = controller.submit("c@d.com").await;

        assert_eq!(
            outcome,
            SubmissionOutcome::Success(Delivery::LocalOnly(FallbackReason::InsertFailed))
        );
        assert_eq!(controller.snapshot().displayed_count, 135);
        assert_eq!(controller.snapshot().phase, Phase::Idle);
    }

    #[tokio::test]
    async fn scenario_d_malformed_email_never_reaches_store() {
        let mut mock = MockWaitlistStore::new();
        mock.expect_exists().never();
        mock.expect_insert().never();
        mock.expect_count().never();
        let controller = WaitlistController::new(Rc::new(mock), settings());

        controller.set_input("not-an-email".to_string());
        let outcome = controller.submit("not-an-email").await;

        assert_eq!(
            outcome,
            SubmissionOutcome::ValidationError(EmailError::Malformed)
        );
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.input, "not-an-email");
        assert_eq!(snapshot.displayed_count, BASE);
        assert_eq!(snapshot.phase, Phase::Idle);
        assert_eq!(
            snapshot.notice,
            Some(Notice::new(
                NoticeKind::Invalid,
                "Please enter a valid email address"
            ))
        );
    }

    #[tokio::test]
    async fn empty_and_malformed_inputs_make_no_store_calls() {
        let store = Rc::new(MemoryStore::default());
        let controller = controller(&store);

        for raw in ["", "   ", "user@", "@b.com", "a@b", "a b@c.com"] {
            assert!(matches!(
                controller.submit(raw).await,
                SubmissionOutcome::ValidationError(_)
            ));
        }
        assert_eq!(store.calls.get(), 0);
        assert_eq!(controller.snapshot().displayed_count, BASE);
    }

    #[tokio::test]
    async fn second_submit_of_same_email_is_duplicate() {
        let store = Rc::new(MemoryStore::default());
        let controller = controller(&store);

        assert!(matches!(
            controller.submit("a@b.com").await,
            SubmissionOutcome::Success(Delivery::Stored { .. })
        ));
        assert_eq!(controller.submit("a@b.com").await, SubmissionOutcome::Duplicate);
        assert_eq!(store.stored_for("a@b.com"), 1);
        assert_eq!(controller.snapshot().displayed_count, BASE + 1);
    }

    #[tokio::test]
    async fn differently_cased_email_is_same_identity() {
        let store = Rc::new(MemoryStore::default());
        let controller = controller(&store);

        assert!(matches!(
            controller.submit("  USER@Example.COM ").await,
            SubmissionOutcome::Success(Delivery::Stored { .. })
        ));
        assert_eq!(
            controller.submit("user@example.com").await,
            SubmissionOutcome::Duplicate
        );
        assert_eq!(store.stored_for("user@example.com"), 1);
    }

    #[tokio::test]
    async fn stored_entry_carries_source_and_context() {
        let store = Rc::new(MemoryStore::default());
        let controller = controller(&store);

        controller.submit("a@b.com").await;

        let entries = store.entries.borrow();
        assert_eq!(entries[0].source.as_deref(), Some("hero_section"));
        assert_eq!(entries[0].client_context.as_deref(), Some("test-agent"));
    }

    #[tokio::test]
    async fn initial_count_adds_base_to_stored_entries() {
        let store = Rc::new(MemoryStore::with_emails(&["a@b.com", "c@d.com", "e@f.com"]));
        let controller = controller(&store);

        assert_eq!(controller.load_initial_count().await, 137);
        assert_eq!(controller.reachability(), Reachability::Reachable);
    }

    #[tokio::test]
    async fn unreachable_count_keeps_base_and_short_circuits_submits() {
        let store = Rc::new(MemoryStore::offline());
        let controller = controller(&store);

        assert_eq!(controller.load_initial_count().await, 134);
        assert_eq!(controller.reachability(), Reachability::Unreachable);
        assert_eq!(store.calls.get(), 1);

        for expected in 135..=137 {
            assert_eq!(
                controller.submit("c@d.com").await,
                SubmissionOutcome::Success(Delivery::LocalOnly(FallbackReason::StoreUnreachable))
            );
            assert_eq!(controller.snapshot().displayed_count, expected);
        }
        assert_eq!(store.calls.get(), 1);
    }

    #[tokio::test]
    async fn failed_duplicate_check_still_inserts() {
        let mut mock = MockWaitlistStore::new();
        mock.expect_exists()
            .times(1)
            .returning(|_| Err(StoreError::Network("timeout".to_string())));
        mock.expect_insert()
            .times(1)
            .withf(|entry| entry.email.as_str() == "a@b.com")
            .returning(|_| Ok("abc".to_string()));
        let controller = WaitlistController::new(Rc::new(mock), settings());

        assert_eq!(
            controller.submit("A@B.com").await,
            SubmissionOutcome::Success(Delivery::Stored { id: "abc".to_string() })
        );
        assert_eq!(controller.snapshot().displayed_count, BASE + 1);
    }

    #[tokio::test]
    async fn permission_denied_insert_degrades_to_success() {
        let mut mock = MockWaitlistStore::new();
        mock.expect_exists().times(1).returning(|_| Ok(false));
        mock.expect_insert()
            .times(1)
            .returning(|_| Err(StoreError::PermissionDenied("rules".to_string())));
        let controller = WaitlistController::new(Rc::new(mock), settings());
        controller.set_input("a@b.com".to_string());

        assert_eq!(
            controller.submit("a@b.com").await,
            SubmissionOutcome::Success(Delivery::LocalOnly(FallbackReason::InsertFailed))
        );
        assert_eq!(controller.snapshot().input, "");
    }

    #[tokio::test]
    async fn duplicate_reported_by_insert_is_duplicate() {
        let mut mock = MockWaitlistStore::new();
        mock.expect_exists().times(1).returning(|_| Ok(false));
        mock.expect_insert()
            .times(1)
            .returning(|_| Err(StoreError::Duplicate));
        let controller = WaitlistController::new(Rc::new(mock), settings());

        assert_eq!(controller.submit("a@b.com").await, SubmissionOutcome::Duplicate);
        assert_eq!(controller.snapshot().displayed_count, BASE);
    }

    #[tokio::test]
    async fn refresh_never_lowers_displayed_count() {
        let store = Rc::new(MemoryStore::default());
        let controller = controller(&store);

        controller.submit("a@b.com").await;
        controller.submit("c@d.com").await;
        store.entries.borrow_mut().clear();

        assert_eq!(controller.load_initial_count().await, BASE + 2);
    }

    #[tokio::test]
    async fn dismissing_clears_notice() {
        let store = Rc::new(MemoryStore::default());
        let controller = controller(&store);

        controller.submit("nope").await;
        assert!(controller.snapshot().notice.is_some());
        controller.dismiss_notice();
        assert!(controller.snapshot().notice.is_none());
    }

    #[tokio::test]
    async fn overlapping_submit_from_same_form_is_busy() {
        let store = Rc::new(MemoryStore::default());
        let controller = controller(&store);

        let (first, second) =
            tokio::join!(controller.submit("a@b.com"), controller.submit("c@d.com"));

        let busy = [&first, &second]
            .iter()
            .filter(|outcome| ***outcome == SubmissionOutcome::Busy)
            .count();
        assert_eq!(busy, 1);
        assert_eq!(store.entries.borrow().len(), 1);
        assert_eq!(controller.snapshot().displayed_count, BASE + 1);
    }

    #[tokio::test]
    async fn listener_sees_submitting_then_idle() {
        let store = Rc::new(MemoryStore::default());
        let controller = controller(&store);
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            controller.subscribe(move |snapshot| {
                seen.borrow_mut().push((snapshot.phase, snapshot.displayed_count))
            });
        }

        controller.submit("a@b.com").await;

        assert_eq!(
            *seen.borrow(),
            vec![(Phase::Submitting, BASE), (Phase::Idle, BASE + 1)]
        );
    }

    #[tokio::test]
    async fn repeated_identical_notice_gets_a_new_sequence() {
        let store = Rc::new(MemoryStore::default());
        let controller = controller(&store);

        controller.submit("nope").await;
        let first = controller.snapshot();
        controller.submit("nope").await;
        let second = controller.snapshot();

        assert_eq!(first.notice, second.notice);
        assert_eq!(second.notice_seq, first.notice_seq + 1);
    }

    #[tokio::test]
    async fn submit_while_submitting_is_busy_and_leaves_state_alone() {
        let store = Rc::new(MemoryStore::default());
        let controller = controller(&store);
        controller.set_input("a@b.com".to_string());
        controller.state.borrow_mut().phase = Phase::Submitting;

        assert_eq!(controller.submit("a@b.com").await, SubmissionOutcome::Busy);
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.phase, Phase::Submitting);
        assert_eq!(snapshot.input, "a@b.com");
        assert_eq!(snapshot.displayed_count, BASE);
        assert_eq!(store.calls.get(), 0);
    }

    #[test]
    fn notice_durations_follow_kind() {
        assert_eq!(NoticeKind::Loading.duration_ms(), None);
        assert_eq!(NoticeKind::Success.duration_ms(), Some(6_000));
        assert_eq!(NoticeKind::Duplicate.duration_ms(), Some(4_000));
        assert_eq!(NoticeKind::Invalid.duration_ms(), Some(5_000));
    }
}
