//! Client for the Steam Web API `IGameServersService` interface.
//!
//! Provides a thin HTTP wrapper around the game server account methods of the
//! Steam Web API: requests are authenticated with an API key carried in the
//! query string, and every response arrives wrapped in a one-field JSON
//! envelope (`{"response": ...}`) that this crate unwraps for the caller.
//!
//! # Architecture
//!
//! Two layers, split so the transport stays agnostic to per-method payload
//! shapes:
//!
//! - [`GameServersApi`] - Trait defining the raw `get`/`post` primitives
//! - [`HttpGameServersClient`] - Real HTTP implementation using reqwest
//! - [`GameServersService`] - Typed methods (`GetAccountList`,
//!   `CreateAccount`, ...) decoding the raw payload into concrete types
//! - `mock::MockGameServersApi` - Mock for unit tests (behind `test-utils`
//!   feature)
//!
//! # Example
//!
//! ```ignore
//! use steam_gameservers::{GameServersService, HttpGameServersClient};
//!
//! let client = HttpGameServersClient::new("my-api-key");
//! let service = GameServersService::new(client);
//!
//! let accounts = service.get_account_list().await?;
//! for server in accounts.servers {
//!     println!("{} ({})", server.steamid, server.memo);
//! }
//! ```
//!
//! # Raw calls
//!
//! The raw layer can be used directly when a method's payload shape is not
//! covered by the typed layer; it returns the still-JSON-encoded inner
//! payload for the caller to decode:
//!
//! ```ignore
//! use steam_gameservers::{GameServersApi, HttpGameServersClient};
//!
//! let client = HttpGameServersClient::new("my-api-key");
//! let payload = client.get("GetAccountList", &[]).await?;
//! let list: MyShape = serde_json::from_slice(&payload)?;
//! ```
//!
//! Known gap, preserved from the wrapped API's behavior: HTTP status codes
//! are not inspected before the envelope decode, so a non-2xx response with a
//! JSON body that parses is indistinguishable from success at this layer.

mod client;
mod service;
mod types;

pub use client::{GameServersApi, GameServersError, HttpGameServersClient};
pub use service::GameServersService;
pub use types::{
    AccountList, AccountPublicInfo, CreatedAccount, GameServerAccount, NewLoginToken, TokenStatus,
};

#[cfg(any(test, feature = "test-utils"))]
pub use client::mock;
