//! Trading user and wallet session state.

use serde::{Deserialize, Serialize};

use super::id::WalletAddress;

/// A resolved platform user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    address: WalletAddress,
    #[serde(default)]
    proxy_wallet_address: Option<WalletAddress>,
}

impl User {
    pub fn new(address: WalletAddress) -> Self {
        Self {
            address,
            proxy_wallet_address: None,
        }
    }

    #[must_use]
    pub fn with_proxy_wallet(mut self, proxy: WalletAddress) -> Self {
        self.proxy_wallet_address = Some(proxy);
        self
    }

    /// Primary connected wallet.
    #[must_use]
    pub const fn address(&self) -> &WalletAddress {
        &self.address
    }

    #[must_use]
    pub const fn proxy_wallet_address(&self) -> Option<&WalletAddress> {
        self.proxy_wallet_address.as_ref()
    }

    /// Address that holds custody and signs orders.
    ///
    /// This is the proxy wallet when one is deployed, otherwise the primary
    /// wallet.
    #[must_use]
    pub fn signing_address(&self) -> &WalletAddress {
        self.proxy_wallet_address.as_ref().unwrap_or(&self.address)
    }
}

/// Wallet connection state at the moment an order is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// A wallet is connected.
    #[serde(default)]
    pub connected: bool,
    /// The user record, once the auth handshake has resolved it.
    #[serde(default)]
    pub user: Option<User>,
}

impl Session {
    /// A connected session with a resolved user.
    pub fn connected(user: User) -> Self {
        Self {
            connected: true,
            user: Some(user),
        }
    }
}
