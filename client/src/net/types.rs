//! Wire types for the JWT token endpoint and the persisted session.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Username/password pair posted to the token endpoint.
///
/// Values are sent exactly as typed; nothing is trimmed or validated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Account identifier as returned by the server.
///
/// WordPress usually answers with a number, but the value is stored with
/// whatever JSON type the server chose.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Numeric(i64),
    Text(String),
}

/// Session persisted to `localStorage` after a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionToken {
    pub user_id: UserId,
    pub token: String,
}

/// Response body of `POST /wp-json/jwt-auth/v1/token`.
///
/// Both the success and the rejection shapes decode into this struct;
/// `data` on a rejection carries unrelated fields (e.g. `status`), so its
/// members are optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<TokenData>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `data` member of a token response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TokenData {
    #[serde(default)]
    pub id: Option<UserId>,
    #[serde(default)]
    pub token: Option<String>,
}
