//! Exchange-agnostic domain logic.

pub mod error;
pub mod id;
pub mod market;
pub mod money;
pub mod order;
pub mod pricing;
pub mod sanitize;
pub mod sync;
pub mod user;

pub use id::{MarketId, OrderId, TokenId, WalletAddress};
pub use market::{Market, Outcome};
pub use money::{Price, Volume};
pub use order::{Expiration, ExpirationPolicy, OrderForm, OrderMode, OrderSide};
pub use sync::{LocalOrder, OrderStatus, OrderUpdate, RemoteOrder, VolumeRecord};
pub use user::{Session, User};
