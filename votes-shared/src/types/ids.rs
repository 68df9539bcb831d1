use uuid::Uuid;

/// Opaque identifier of a user account (voter or author).
pub type UserId = Uuid;

/// Opaque identifier of a post or a comment. Posts and comments share one id space.
pub type TargetId = Uuid;
