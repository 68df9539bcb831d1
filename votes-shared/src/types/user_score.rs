use serde::{Deserialize, Serialize};
use crate::types::UserId;

/// The reputation score of a single user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserScore {
    pub user_id: UserId,
    pub score: i64,
}
