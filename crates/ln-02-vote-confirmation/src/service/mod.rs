//! Vote Confirmation Service - workflow logic
//!
//! # Concurrency
//! State lives behind one `parking_lot::Mutex`. It is never held across an
//! await or while calling into the store, so the dialog stays usable while a
//! submission is outstanding. Each submission runs on its own task and always
//! settles, whether or not the caller is still waiting for it.

use std::sync::Arc;

use async_trait::async_trait;
use nano_telemetry::{metric_inc, time_histogram, VOTE_SUBMISSIONS, VOTE_SUBMISSION_DURATION};
use parking_lot::Mutex;
use shared_types::{Account, DelegateRef, Passphrase};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::domain::request::validate;
use crate::domain::{
    ConfirmationRequest, VoteConfirmationConfig, VoteError, VoteSelection, WorkflowState,
};
use crate::ports::{DelegateApi, VoteConfirmationApi, VoteStateStore};


/// Stored phase. `Invalid` is derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Submitting,
    Confirmed,
    CoolingDown,
}

struct WorkflowInner {
    account: Account,
    selection: VoteSelection,
    second_passphrase: Passphrase,
    phase: Phase,
    /// Bumped per dispatched submission so late timers and late failures
    /// cannot rewind a newer submission's phase.
    generation: u64,
}

impl WorkflowInner {
    fn confirm_enabled(&self) -> bool {
        validate(&self.account, &self.selection, &self.second_passphrase).is_ok()
    }

    fn transition(&mut self, to: Phase) {
        debug!(from = ?self.phase, to = ?to, generation = self.generation, "Vote workflow transition");
        self.phase = to;
    }
}

/// A confirmed submission.
#[derive(Debug)]
pub struct Confirmation {
    /// What the network accepted.
    pub selection: VoteSelection,
    /// One-shot task that clears the selection when the cooldown elapses.
    pub cooldown: JoinHandle<()>,
}

/// Dependencies for VoteConfirmationService
pub struct VoteConfirmationDependencies<D, S> {
    pub delegate_api: Arc<D>,
    pub store: Arc<S>,
    pub account: Account,
    pub config: VoteConfirmationConfig,
}

/// Vote Confirmation Service
pub struct VoteConfirmationService<D, S>
where
    D: DelegateApi,
    S: VoteStateStore,
{
    delegate_api: Arc<D>,
    store: Arc<S>,
    inner: Arc<Mutex<WorkflowInner>>,
    config: VoteConfirmationConfig,
}

impl<D, S> VoteConfirmationService<D, S>
where
    D: DelegateApi + 'static,
    S: VoteStateStore + 'static,
{
    pub fn new(deps: VoteConfirmationDependencies<D, S>) -> Self {
        Self {
            delegate_api: deps.delegate_api,
            store: deps.store,
            inner: Arc::new(Mutex::new(WorkflowInner {
                account: deps.account,
                selection: VoteSelection::new(),
                second_passphrase: Passphrase::default(),
                phase: Phase::Idle,
                generation: 0,
            })),
            config: deps.config,
        }
    }

    /// Current selection, as the dialog lists it.
    pub fn selection(&self) -> VoteSelection {
        self.inner.lock().selection.clone()
    }

    /// Last captured second passphrase.
    pub fn second_passphrase(&self) -> Passphrase {
        self.inner.lock().second_passphrase.clone()
    }
}

/// One dispatched vote call and everything needed to settle it.
///
/// Runs on its own task so the outcome is applied even when the caller of
/// `confirm` stops waiting.
struct Submission<D, S> {
    delegate_api: Arc<D>,
    store: Arc<S>,
    inner: Arc<Mutex<WorkflowInner>>,
    config: VoteConfirmationConfig,
    request: ConfirmationRequest,
    generation: u64,
}

impl<D, S> Submission<D, S>
where
    D: DelegateApi,
    S: VoteStateStore + 'static,
{
    async fn run(self) -> Result<Confirmation, VoteError> {
        info!(
            generation = self.generation,
            delegates = self.request.selection.len(),
            "Submitting votes"
        );

        let outcome = {
            let _timer = time_histogram!(VOTE_SUBMISSION_DURATION);
            self.delegate_api.vote(&self.request).await
        };

        match outcome {
            Ok(receipt) if receipt.success => Ok(self.on_confirmed()),
            Ok(_) => Err(settle_failure(
                &self.inner,
                self.store.as_ref(),
                self.generation,
                "the network did not accept the vote transaction".to_string(),
            )),
            Err(e) => Err(settle_failure(
                &self.inner,
                self.store.as_ref(),
                self.generation,
                e,
            )),
        }
    }

    fn on_confirmed(self) -> Confirmation {
        self.inner.lock().transition(Phase::Confirmed);
        metric_inc!(VOTE_SUBMISSIONS, &["confirmed"]);

        self.store.pending_votes_added(&self.request.selection);
        self.store.show_success_alert();
        info!(
            voted = self.request.selection.to_vote().len(),
            unvoted = self.request.selection.to_unvote().len(),
            "Votes confirmed"
        );

        let cooldown = self.schedule_clear();
        {
            let mut inner = self.inner.lock();
            if inner.generation == self.generation && inner.phase == Phase::Confirmed {
                inner.transition(Phase::CoolingDown);
            }
        }

        Confirmation {
            selection: self.request.selection,
            cooldown,
        }
    }

    fn schedule_clear(&self) -> JoinHandle<()> {
        // The deadline is fixed here, not when the task is first polled.
        let sleep = tokio::time::sleep(self.config.cooldown);
        let inner = Arc::clone(&self.inner);
        let store = Arc::clone(&self.store);
        let generation = self.generation;

        tokio::spawn(async move {
            sleep.await;
            clear_after_cooldown(&inner, store.as_ref(), generation);
        })
    }
}

fn settle_failure<S: VoteStateStore>(
    inner: &Mutex<WorkflowInner>,
    store: &S,
    generation: u64,
    reason: String,
) -> VoteError {
    {
        let mut inner = inner.lock();
        if inner.generation == generation && inner.phase == Phase::Submitting {
            inner.transition(Phase::Idle);
        }
    }
    metric_inc!(VOTE_SUBMISSIONS, &["failed"]);
    warn!(reason = %reason, "Vote submission failed");
    store.show_failure_alert(&reason);
    VoteError::SubmissionFailed(reason)
}

fn clear_after_cooldown<S: VoteStateStore>(
    inner: &Mutex<WorkflowInner>,
    store: &S,
    generation: u64,
) {
    let cleared = {
        let mut inner = inner.lock();
        if inner.generation != generation && inner.phase == Phase::Submitting {
            // A newer submission owns the selection until it settles.
            debug!(generation, "Cooldown elapsed during a newer submission, keeping selection");
            return;
        }
        if inner.generation == generation && inner.phase == Phase::CoolingDown {
            inner.transition(Phase::Idle);
        }
        inner.selection.clear()
    };

    if cleared {
        debug!(generation, "Cooldown elapsed, clearing vote lists");
        store.clear_vote_lists();
    } else {
        debug!(generation, "Cooldown elapsed, selection already empty");
    }
}

#[async_trait]
impl<D, S> VoteConfirmationApi for VoteConfirmationService<D, S>
where
    D: DelegateApi + 'static,
    S: VoteStateStore + 'static,
{
    async fn confirm(&self) -> Result<Confirmation, VoteError> {
        let submission = {
            let mut inner = self.inner.lock();
            if inner.phase == Phase::Submitting {
                return Err(VoteError::SubmissionInFlight);
            }
            let request =
                ConfirmationRequest::build(&inner.account, &inner.selection, &inner.second_passphrase)
                    .inspect_err(|e| {
                        metric_inc!(VOTE_SUBMISSIONS, &["refused"]);
                        debug!(error = %e, "Confirm refused");
                    })?;
            inner.generation += 1;
            inner.transition(Phase::Submitting);
            Submission {
                delegate_api: Arc::clone(&self.delegate_api),
                store: Arc::clone(&self.store),
                inner: Arc::clone(&self.inner),
                config: self.config.clone(),
                request,
                generation: inner.generation,
            }
        };

        let generation = submission.generation;
        match tokio::spawn(submission.run()).await {
            Ok(result) => result,
            Err(e) => Err(settle_failure(
                &self.inner,
                self.store.as_ref(),
                generation,
                format!("vote submission aborted: {e}"),
            )),
        }
    }

    fn cancel(&self) {
        let cleared = {
            let mut inner = self.inner.lock();
            match inner.phase {
                Phase::Idle => inner.selection.clear(),
                Phase::Submitting | Phase::Confirmed | Phase::CoolingDown => false,
            }
        };

        if cleared {
            self.store.clear_vote_lists();
        }
        self.store.close_dialog();
        debug!(discarded = cleared, "Vote dialog closed");
    }

    fn set_second_passphrase(&self, value: &str) {
        self.inner.lock().second_passphrase = Passphrase::new(value);
    }

    fn update_selection(
        &self,
        to_vote: Vec<DelegateRef>,
        to_unvote: Vec<DelegateRef>,
    ) -> Result<(), VoteError> {
        let selection = VoteSelection::from_lists(to_vote, to_unvote)?;
        self.inner.lock().selection = selection;
        Ok(())
    }

    fn update_account(&self, account: Account) {
        self.inner.lock().account = account;
    }

    fn is_confirm_enabled(&self) -> bool {
        self.inner.lock().confirm_enabled()
    }

    fn state(&self) -> WorkflowState {
        let inner = self.inner.lock();
        match inner.phase {
            Phase::Idle if !inner.confirm_enabled() => WorkflowState::Invalid,
            Phase::Idle => WorkflowState::Idle,
            Phase::Submitting => WorkflowState::Submitting,
            Phase::Confirmed => WorkflowState::Confirmed,
            Phase::CoolingDown => WorkflowState::CoolingDown,
        }
    }
}
