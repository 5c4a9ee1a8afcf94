//! Typed operations of the `IGameServersService` interface.
//!
//! Second phase of the two-phase decode: the raw client returns the inner
//! `response` payload as bytes, and each method here decodes those bytes into
//! its concrete shape. The service is generic over [`GameServersApi`] so it
//! works with the real HTTP client or a mock.

use crate::client::{GameServersApi, GameServersError};
use crate::types::{AccountList, AccountPublicInfo, CreatedAccount, NewLoginToken, TokenStatus};

/// Typed wrapper over the raw `IGameServersService` client.
pub struct GameServersService<C> {
    client: C,
}

impl<C: GameServersApi> GameServersService<C> {
    /// Wrap a raw API client.
    pub const fn new(client: C) -> Self {
        Self { client }
    }

    /// List the game server accounts owned by the user of the API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload does not decode.
    pub async fn get_account_list(&self) -> Result<AccountList, GameServersError> {
        let payload = self.client.get("GetAccountList", &[]).await?;
        Ok(serde_json::from_slice(&payload)?)
    }

    /// Create a persistent game server account for `appid`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload does not decode.
    pub async fn create_account(
        &self,
        appid: u32,
        memo: &str,
    ) -> Result<CreatedAccount, GameServersError> {
        let appid = appid.to_string();
        let payload = self
            .client
            .post("CreateAccount", &[("appid", &appid), ("memo", memo)])
            .await?;
        Ok(serde_json::from_slice(&payload)?)
    }

    /// Change the memo of an existing game server account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn set_memo(&self, steamid: &str, memo: &str) -> Result<(), GameServersError> {
        self.client
            .post("SetMemo", &[("steamid", steamid), ("memo", memo)])
            .await?;
        Ok(())
    }

    /// Invalidate the account's current login token and issue a new one.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload does not decode.
    pub async fn reset_login_token(&self, steamid: &str) -> Result<String, GameServersError> {
        let payload = self
            .client
            .post("ResetLoginToken", &[("steamid", steamid)])
            .await?;
        let token: NewLoginToken = serde_json::from_slice(&payload)?;
        Ok(token.login_token)
    }

    /// Delete a game server account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_account(&self, steamid: &str) -> Result<(), GameServersError> {
        self.client
            .post("DeleteAccount", &[("steamid", steamid)])
            .await?;
        Ok(())
    }

    /// Get public information about a game server account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload does not decode.
    pub async fn get_account_public_info(
        &self,
        steamid: &str,
    ) -> Result<AccountPublicInfo, GameServersError> {
        let payload = self
            .client
            .get("GetAccountPublicInfo", &[("steamid", steamid)])
            .await?;
        Ok(serde_json::from_slice(&payload)?)
    }

    /// Query the status of a login token.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload does not decode.
    pub async fn query_login_token(
        &self,
        login_token: &str,
    ) -> Result<TokenStatus, GameServersError> {
        let payload = self
            .client
            .get("QueryLoginToken", &[("login_token", login_token)])
            .await?;
        Ok(serde_json::from_slice(&payload)?)
    }
}
