//! Data types for `IGameServersService` responses.
//!
//! Steam serializes 64-bit SteamIDs as JSON strings; they are kept as strings
//! here rather than parsed into integers.

use serde::{Deserialize, Serialize};

/// A persistent game server account owned by the API key's user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameServerAccount {
    /// SteamID of the game server account.
    pub steamid: String,
    /// App the server account is associated with.
    pub appid: u32,
    /// Login token used by the server to authenticate.
    pub login_token: String,
    /// Free-form memo set by the account owner.
    #[serde(default)]
    pub memo: String,
    /// Whether the account has been deleted.
    #[serde(default)]
    pub is_deleted: bool,
    /// Whether the login token has expired.
    #[serde(default)]
    pub is_expired: bool,
    /// Unix timestamp of the token's last logon.
    #[serde(default)]
    pub rt_last_logon: u32,
}

/// Response from the `GetAccountList` method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountList {
    #[serde(default)]
    pub servers: Vec<GameServerAccount>,
    /// Whether the user is banned from managing game server accounts.
    #[serde(default)]
    pub is_banned: bool,
    #[serde(default)]
    pub expires: u32,
    /// SteamID of the actor the list belongs to.
    #[serde(default)]
    pub actor: String,
    #[serde(default)]
    pub last_action_time: u32,
}

/// Response from the `CreateAccount` method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedAccount {
    pub steamid: String,
    pub login_token: String,
}

/// Response from the `ResetLoginToken` method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLoginToken {
    pub login_token: String,
}

/// Response from the `GetAccountPublicInfo` method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountPublicInfo {
    pub steamid: String,
    pub appid: u32,
}

/// Response from the `QueryLoginToken` method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenStatus {
    /// SteamID the token belongs to, if any.
    #[serde(default)]
    pub steamid: Option<String>,
    #[serde(default)]
    pub is_banned: bool,
    #[serde(default)]
    pub expires: u32,
}
