//! # Known Networks
//!
//! The wallet addresses networks by their position in this list. Saved
//! accounts persist that index, so the order must never change.

use serde::Serialize;

use crate::errors::NetworkError;

/// A network the wallet can connect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Network {
    /// Display name, as shown in the login form.
    pub name: &'static str,
    /// Whether the node address is user-provided.
    pub custom: bool,
}

/// All known networks, in index order.
pub const NETWORKS: [Network; 3] = [
    Network {
        name: "Mainnet",
        custom: false,
    },
    Network {
        name: "Testnet",
        custom: false,
    },
    Network {
        name: "Custom Node",
        custom: true,
    },
];

impl Network {
    /// Index of the network whose display name matches `name` exactly.
    pub fn index_of(name: &str) -> Result<usize, NetworkError> {
        NETWORKS
            .iter()
            .position(|network| network.name == name)
            .ok_or_else(|| NetworkError::UnknownNetwork(name.to_string()))
    }

    pub fn by_index(index: usize) -> Option<&'static Network> {
        NETWORKS.get(index)
    }
}
