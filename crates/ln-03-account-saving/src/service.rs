//! Save Account Service

use std::sync::Arc;

use shared_types::Network;
use tracing::{info, warn};

use crate::domain::{SaveAccountError, SavedAccount};
use crate::ports::AccountStore;

pub struct SaveAccountService<S: AccountStore> {
    store: Arc<S>,
}

impl<S: AccountStore> SaveAccountService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Save the account under the network named `network_name`, then close
    /// the dialog. An unknown network saves nothing and leaves the dialog open.
    pub fn save(
        &self,
        network_name: &str,
        address: &str,
        public_key: &str,
    ) -> Result<SavedAccount, SaveAccountError> {
        let network = Network::index_of(network_name)
            .inspect_err(|e| warn!(error = %e, "Account not saved"))?;

        let account = SavedAccount {
            network,
            address: address.to_string(),
            public_key: public_key.to_string(),
        };
        self.store.account_saved(account.clone());
        self.store.close_dialog();

        info!(network = network_name, address, "Account saved");
        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryAccountStore;
    use shared_types::NetworkError;

    fn service() -> (SaveAccountService<InMemoryAccountStore>, Arc<InMemoryAccountStore>) {
        let store = Arc::new(InMemoryAccountStore::new());
        (SaveAccountService::new(Arc::clone(&store)), store)
    }

    #[test]
    fn test_save_resolves_network_index() {
        let (service, store) = service();

        let saved = service
            .save("Testnet", "16313739661670634666L", "c094eb")
            .unwrap();

        assert_eq!(saved.network, 1);
        assert_eq!(store.accounts(), vec![saved]);
        assert_eq!(store.close_calls(), 1);
    }

    #[test]
    fn test_unknown_network_saves_nothing() {
        let (service, store) = service();

        let result = service.save("Betanet", "1L", "key");

        assert_eq!(
            result,
            Err(SaveAccountError::Network(NetworkError::UnknownNetwork(
                "Betanet".into()
            )))
        );
        assert!(store.accounts().is_empty());
        assert_eq!(store.close_calls(), 0);
    }

    #[test]
    fn test_saved_account_wire_format() {
        let (service, _store) = service();
        let saved = service.save("Custom Node", "1L", "key").unwrap();

        let json = serde_json::to_value(&saved).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "network": 2, "address": "1L", "publicKey": "key" })
        );
    }
}
