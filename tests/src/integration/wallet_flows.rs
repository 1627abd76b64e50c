//! # Wallet Flows
//!
//! The vote confirmation workflow and account saving, wired to their
//! in-memory stores the way the UI wires them to the application store.
//!
//! ## Flows Tested:
//!
//! 1. **Confirm votes**: dispatch → optimistic pending votes → success alert →
//!    lists cleared 10 s later
//! 2. **Second passphrase**: gating and verbatim capture
//! 3. **Save account**: network name → index → store → dialog closed

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use parking_lot::Mutex;

    use ln_02_vote_confirmation::adapters::Alert;
    use ln_02_vote_confirmation::{
        ConfirmationRequest, DelegateApi, InMemoryVoteStore, VoteConfirmationApi,
        VoteConfirmationConfig, VoteConfirmationDependencies, VoteConfirmationService, VoteError,
        VoteReceipt, WorkflowState,
    };
    use ln_03_account_saving::{InMemoryAccountStore, SaveAccountService};
    use nano_telemetry::{encode_metrics, register_metrics, VOTE_SUBMISSIONS};
    use shared_types::{Account, DelegateRef, Passphrase, NETWORKS};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Delegate API that accepts or rejects every vote and keeps the requests.
    struct ScriptedDelegateApi {
        accept: bool,
        calls: AtomicUsize,
        seen: Mutex<Vec<ConfirmationRequest>>,
    }

    impl ScriptedDelegateApi {
        fn new(accept: bool) -> Self {
            Self {
                accept,
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl DelegateApi for ScriptedDelegateApi {
        async fn vote(&self, request: &ConfirmationRequest) -> Result<VoteReceipt, String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().push(request.clone());
            if self.accept {
                Ok(VoteReceipt { success: true })
            } else {
                Err("Network error".to_string())
            }
        }
    }

    fn account(second_signature: bool) -> Account {
        Account::new("16313739661670634666L", "c094ebee7ec0c50ebee32918655e089f6e1a604b83bcaa760293c61e0f18ab6f")
            .with_passphrase(Passphrase::new("wagon stock borrow episode laundry kitten salute link globe zero feed marble"))
            .with_second_signature(second_signature)
    }

    fn workflow(
        api: Arc<ScriptedDelegateApi>,
        account: Account,
    ) -> (
        VoteConfirmationService<ScriptedDelegateApi, InMemoryVoteStore>,
        Arc<InMemoryVoteStore>,
    ) {
        let store = Arc::new(InMemoryVoteStore::new());
        let service = VoteConfirmationService::new(VoteConfirmationDependencies {
            delegate_api: api,
            store: Arc::clone(&store),
            account,
            config: VoteConfirmationConfig::default(),
        });
        service
            .update_selection(
                vec![DelegateRef::new("yashar"), DelegateRef::new("tom")],
                vec![DelegateRef::new("john"), DelegateRef::new("test")],
            )
            .unwrap();
        (service, store)
    }

    // =============================================================================
    // INTEGRATION TESTS: VOTE CONFIRMATION
    // =============================================================================

    #[tokio::test(start_paused = true)]
    async fn test_confirm_votes_full_cycle() {
        let api = Arc::new(ScriptedDelegateApi::new(true));
        let (service, store) = workflow(Arc::clone(&api), account(false));

        let confirmation = service.confirm().await.unwrap();
        assert_eq!(store.pending_added_calls(), 1);
        assert_eq!(store.alerts(), vec![Alert::Success]);
        assert_eq!(confirmation.selection.len(), 4);

        tokio::time::advance(Duration::from_millis(9_999)).await;
        assert_eq!(store.clear_calls(), 0);

        tokio::time::advance(Duration::from_millis(1)).await;
        confirmation.cooldown.await.unwrap();
        assert_eq!(store.clear_calls(), 1);
        assert_eq!(service.state(), WorkflowState::Invalid);
        assert_eq!(api.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejected_vote_keeps_lists() {
        let api = Arc::new(ScriptedDelegateApi::new(false));
        let (service, store) = workflow(api, account(false));

        let err = service.confirm().await.unwrap_err();
        assert!(matches!(err, VoteError::SubmissionFailed(_)));
        assert_eq!(store.pending_added_calls(), 0);
        assert_eq!(store.alerts(), vec![Alert::Failure("Network error".into())]);

        tokio::time::advance(Duration::from_secs(60)).await;
        assert_eq!(store.clear_calls(), 0);
        assert_eq!(service.selection().len(), 4);
    }

    #[tokio::test]
    async fn test_second_passphrase_flow() {
        let api = Arc::new(ScriptedDelegateApi::new(true));
        let (service, _store) = workflow(Arc::clone(&api), account(true));

        assert!(!service.is_confirm_enabled());
        assert_eq!(
            service.confirm().await.unwrap_err(),
            VoteError::MissingSecondPassphrase
        );
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);

        service.set_second_passphrase("this is test");
        let confirmation = service.confirm().await.unwrap();
        confirmation.cooldown.abort();

        let seen = api.seen.lock();
        assert_eq!(
            seen[0].second_passphrase.as_ref().map(Passphrase::expose),
            Some("this is test")
        );
        assert_eq!(seen[0].delegates().len(), 4);
    }

    #[tokio::test]
    async fn test_vote_outcomes_are_counted() {
        register_metrics().unwrap();
        let before = VOTE_SUBMISSIONS.with_label_values(&["refused"]).get();

        let api = Arc::new(ScriptedDelegateApi::new(true));
        let (service, _store) = workflow(api, account(false));
        service.update_selection(vec![], vec![]).unwrap();
        let _ = service.confirm().await;

        assert!(VOTE_SUBMISSIONS.with_label_values(&["refused"]).get() >= before + 1.0);
        assert!(encode_metrics().unwrap().contains("ln_vote_submissions_total"));
    }

    // =============================================================================
    // INTEGRATION TESTS: ACCOUNT SAVING
    // =============================================================================

    #[test]
    fn test_save_account_for_every_known_network() {
        let store = Arc::new(InMemoryAccountStore::new());
        let service = SaveAccountService::new(Arc::clone(&store));

        for (index, network) in NETWORKS.iter().enumerate() {
            let saved = service.save(network.name, "1L", "key").unwrap();
            assert_eq!(saved.network, index);
        }

        assert_eq!(store.accounts().len(), NETWORKS.len());
        assert_eq!(store.close_calls(), NETWORKS.len());
        assert_eq!(store.last().map(|a| a.network), Some(2));
    }
}
