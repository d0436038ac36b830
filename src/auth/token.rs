use serde::{Deserialize, Serialize};

/// Access/refresh token pair identifying a member.
///
/// Issued by the upstream service at enrollment and renewed through
/// `Members::renew_token`. Supplied by the caller on each member-scoped
/// call; never stored by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserToken {
    pub access_token: String,
    pub refresh_token: String,
}

impl UserToken {
    pub fn new<T: Into<String>>(access_token: T, refresh_token: T) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}
