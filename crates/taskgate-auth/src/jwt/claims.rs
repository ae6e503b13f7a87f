//! JWT claims carried by access and refresh tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use taskgate_core::types::MemberId;
use taskgate_entity::{Member, MemberRole, Rank};

/// Distinguishes access tokens from refresh tokens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Short-lived token presented on every request.
    Access,
    /// Long-lived token exchanged for a new access token.
    Refresh,
}

/// Claims embedded in every access token.
///
/// Rank and role are copied in at issue time so authorization checks need
/// no directory round-trip while the token is valid. A rank change is
/// therefore only visible once the holder's current token expires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject: the member's login identifier.
    pub sub: String,
    /// Member id.
    pub mid: MemberId,
    /// Department name.
    pub department: String,
    /// Organizational role claim.
    pub role: MemberRole,
    /// Rank level used by rank gates.
    pub rank_level: u8,
    /// Rank display label.
    pub rank_label: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Unique token id.
    pub jti: Uuid,
    /// Always [`TokenType::Access`].
    pub token_type: TokenType,
}

impl AccessClaims {
    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Returns the lifetime left at `now`, zero if already past.
    pub fn remaining_at(&self, now: DateTime<Utc>) -> std::time::Duration {
        let remaining = self.exp - now.timestamp();
        if remaining > 0 {
            std::time::Duration::from_secs(remaining as u64)
        } else {
            std::time::Duration::ZERO
        }
    }

    /// Returns the rank carried by the token.
    pub fn rank(&self) -> Rank {
        Rank::new(self.rank_label.clone(), self.rank_level)
    }
}

/// Claims embedded in a refresh token. Only the subject is carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// Subject: the member's login identifier.
    pub sub: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Unique token id; keeps two refresh tokens minted in the same second distinct.
    pub jti: Uuid,
    /// Always [`TokenType::Refresh`].
    pub token_type: TokenType,
}

/// Input to access token issuing, taken unvalidated from a member record.
#[derive(Debug, Clone)]
pub struct AccessPayload {
    /// Login identifier.
    pub subject: String,
    /// Member id.
    pub member_id: MemberId,
    /// Department name.
    pub department: String,
    /// Raw organizational role value.
    pub role: String,
    /// Rank, if the member has one.
    pub rank: Option<Rank>,
}

impl From<&Member> for AccessPayload {
    fn from(member: &Member) -> Self {
        Self {
            subject: member.external_id.clone(),
            member_id: member.id,
            department: member.department.clone(),
            role: member.role.clone(),
            rank: member.rank.clone(),
        }
    }
}
