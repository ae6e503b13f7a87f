//! Member entity as exposed by the member directory.

use serde::{Deserialize, Serialize};

use taskgate_core::types::MemberId;

use super::rank::Rank;

/// An active organization member.
///
/// `role` and `rank` are carried exactly as the directory stores them; the
/// token issuer decides whether they are usable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Unique member identifier.
    pub id: MemberId,
    /// Login identifier (employee number).
    pub external_id: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Department name.
    pub department: String,
    /// Raw organizational role claim, e.g. `ROLE_MANAGER`.
    pub role: String,
    /// Position in the organizational hierarchy, if assigned.
    pub rank: Option<Rank>,
}
