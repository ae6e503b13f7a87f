//! Token issuing and validation.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use taskgate_core::config::AuthConfig;
use taskgate_core::error::AppError;
use taskgate_core::result::AppResult;
use taskgate_entity::MemberRole;

use super::claims::{AccessClaims, AccessPayload, RefreshClaims, TokenType};

/// Tokens returned by a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
    /// Access token expiration timestamp.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration timestamp.
    pub refresh_expires_at: DateTime<Utc>,
}

/// A freshly issued access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessGrant {
    /// Short-lived access token.
    pub access_token: String,
    /// Access token expiration timestamp.
    pub access_expires_at: DateTime<Utc>,
}

/// Signs and validates HS256 access and refresh tokens.
///
/// Owns the signing secret and the expiration policy. Validation collapses
/// every failure into two outcomes: `ExpiredToken` for a well-signed token
/// past its expiry, `InvalidToken` for everything else.
#[derive(Clone)]
pub struct TokenIssuer {
    /// HMAC key for signing.
    encoding_key: EncodingKey,
    /// HMAC key for verification.
    decoding_key: DecodingKey,
    /// Signature and expiry checks.
    validation: Validation,
    /// Access token lifetime.
    access_ttl: Duration,
    /// Refresh token lifetime.
    refresh_ttl: Duration,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .field("leeway", &self.validation.leeway)
            .finish()
    }
}

impl TokenIssuer {
    /// Creates an issuer from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = config.clock_skew_leeway_seconds;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            access_ttl: Duration::minutes(config.jwt_access_ttl_minutes as i64),
            refresh_ttl: Duration::hours(config.jwt_refresh_ttl_hours as i64),
        }
    }

    /// Refresh token lifetime, used as the TTL of the stored current refresh.
    pub fn refresh_ttl(&self) -> std::time::Duration {
        self.refresh_ttl.to_std().unwrap_or_default()
    }

    /// Clock skew tolerated past `exp`; a token is accepted until `exp + leeway`.
    pub fn leeway(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.validation.leeway)
    }

    /// Issues an access token valid from now.
    pub fn issue_access(&self, payload: &AccessPayload) -> AppResult<AccessGrant> {
        self.issue_access_at(payload, Utc::now())
    }

    /// Issues an access token as if minted at `now`.
    ///
    /// Fails with `MissingRequiredField` when the subject or department is
    /// blank, the role does not resolve, or no rank is assigned.
    pub fn issue_access_at(
        &self,
        payload: &AccessPayload,
        now: DateTime<Utc>,
    ) -> AppResult<AccessGrant> {
        if payload.subject.trim().is_empty() {
            return Err(AppError::missing_required_field("subject"));
        }
        if payload.department.trim().is_empty() {
            return Err(AppError::missing_required_field("department"));
        }
        let role = MemberRole::resolve(&payload.role)
            .ok_or_else(|| AppError::missing_required_field("role"))?;
        let rank = payload
            .rank
            .as_ref()
            .ok_or_else(|| AppError::missing_required_field("rank"))?;

        let exp = now + self.access_ttl;
        let claims = AccessClaims {
            sub: payload.subject.clone(),
            mid: payload.member_id,
            department: payload.department.clone(),
            role,
            rank_level: rank.level,
            rank_label: rank.label.clone(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            jti: Uuid::new_v4(),
            token_type: TokenType::Access,
        };

        let access_token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))?;

        Ok(AccessGrant {
            access_token,
            access_expires_at: exp,
        })
    }

    /// Issues a refresh token for the subject, returning it with its expiry.
    pub fn issue_refresh(&self, subject: &str) -> AppResult<(String, DateTime<Utc>)> {
        if subject.trim().is_empty() {
            return Err(AppError::missing_required_field("subject"));
        }

        let now = Utc::now();
        let exp = now + self.refresh_ttl;
        let claims = RefreshClaims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            jti: Uuid::new_v4(),
            token_type: TokenType::Refresh,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode refresh token: {e}")))?;

        Ok((token, exp))
    }

    /// Issues an access and refresh token for the same subject.
    pub fn issue_pair(&self, payload: &AccessPayload) -> AppResult<TokenPair> {
        let access = self.issue_access(payload)?;
        let (refresh_token, refresh_expires_at) = self.issue_refresh(&payload.subject)?;

        Ok(TokenPair {
            access_token: access.access_token,
            refresh_token,
            access_expires_at: access.access_expires_at,
            refresh_expires_at,
        })
    }

    /// Validates an access token and returns its claims.
    pub fn validate_access(&self, token: &str) -> AppResult<AccessClaims> {
        let claims: AccessClaims = self.decode_token(token)?;
        if claims.token_type != TokenType::Access {
            return Err(AppError::invalid_token(
                "Invalid token type: expected access token",
            ));
        }
        Ok(claims)
    }

    /// Validates a refresh token and returns its claims.
    pub fn validate_refresh(&self, token: &str) -> AppResult<RefreshClaims> {
        let claims: RefreshClaims = self.decode_token(token)?;
        if claims.token_type != TokenType::Refresh {
            return Err(AppError::invalid_token(
                "Invalid token type: expected refresh token",
            ));
        }
        Ok(claims)
    }

    /// Decode without type checking.
    fn decode_token<T: DeserializeOwned + Clone>(&self, token: &str) -> AppResult<T> {
        let token_data =
            decode::<T>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    JwtErrorKind::ExpiredSignature => AppError::expired_token(),
                    JwtErrorKind::InvalidSignature => {
                        debug!("Token signature mismatch");
                        AppError::invalid_token("Invalid token signature")
                    }
                    _ => {
                        debug!(error = %e, "Token could not be parsed");
                        AppError::invalid_token("Invalid token")
                    }
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskgate_core::error::ErrorKind;
    use taskgate_core::types::MemberId;
    use taskgate_entity::Rank;

    fn config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            ..AuthConfig::default()
        }
    }

    fn payload() -> AccessPayload {
        AccessPayload {
            subject: "E1001".to_string(),
            member_id: MemberId::new(42),
            department: "Platform".to_string(),
            role: "MANAGER".to_string(),
            rank: Some(Rank::new("DIRECTOR", 5)),
        }
    }

    #[test]
    fn test_access_round_trip() {
        let issuer = TokenIssuer::new(&config("test-secret"));
        let grant = issuer.issue_access(&payload()).unwrap();
        let claims = issuer.validate_access(&grant.access_token).unwrap();

        assert_eq!(claims.sub, "E1001");
        assert_eq!(claims.mid, MemberId::new(42));
        assert_eq!(claims.department, "Platform");
        assert_eq!(claims.role, MemberRole::Manager);
        assert_eq!(claims.rank_level, 5);
        assert_eq!(claims.rank_label, "DIRECTOR");
        assert_eq!(claims.exp, grant.access_expires_at.timestamp());
    }

    #[test]
    fn test_missing_fields_rejected() {
        let issuer = TokenIssuer::new(&config("test-secret"));

        let cases = [
            AccessPayload {
                subject: " ".into(),
                ..payload()
            },
            AccessPayload {
                department: String::new(),
                ..payload()
            },
            AccessPayload {
                role: "ROLE_OWNER".into(),
                ..payload()
            },
            AccessPayload {
                rank: None,
                ..payload()
            },
        ];

        for case in cases {
            let err = issuer.issue_access(&case).unwrap_err();
            assert_eq!(err.kind, ErrorKind::MissingRequiredField);
        }

        let err = issuer.issue_refresh("").unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingRequiredField);
    }

    #[test]
    fn test_foreign_signature_is_invalid() {
        let ours = TokenIssuer::new(&config("test-secret"));
        let theirs = TokenIssuer::new(&config("other-secret"));
        let grant = theirs.issue_access(&payload()).unwrap();

        let err = ours.validate_access(&grant.access_token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidToken);
    }

    #[test]
    fn test_tampered_payload_is_invalid() {
        let issuer = TokenIssuer::new(&config("test-secret"));
        let token = issuer.issue_access(&payload()).unwrap().access_token;

        let parts: Vec<&str> = token.split('.').collect();
        let mut body: Vec<char> = parts[1].chars().collect();
        let mid = body.len() / 2;
        body[mid] = if body[mid] == 'A' { 'B' } else { 'A' };
        let tampered = format!("{}.{}.{}", parts[0], body.into_iter().collect::<String>(), parts[2]);

        let err = issuer.validate_access(&tampered).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidToken);
    }

    #[test]
    fn test_garbage_is_invalid() {
        let issuer = TokenIssuer::new(&config("test-secret"));
        for token in ["", "not-a-token", "a.b.c"] {
            let err = issuer.validate_access(token).unwrap_err();
            assert_eq!(err.kind, ErrorKind::InvalidToken);
        }
    }

    #[test]
    fn test_expired_is_distinct_from_invalid() {
        let issuer = TokenIssuer::new(&config("test-secret"));
        let issued_at = Utc::now() - Duration::hours(2);
        let grant = issuer.issue_access_at(&payload(), issued_at).unwrap();

        let err = issuer.validate_access(&grant.access_token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::ExpiredToken);
        assert!(err.is_token_expired());
    }

    #[test]
    fn test_token_types_are_not_interchangeable() {
        let issuer = TokenIssuer::new(&config("test-secret"));
        let pair = issuer.issue_pair(&payload()).unwrap();

        let err = issuer.validate_access(&pair.refresh_token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidToken);

        let err = issuer.validate_refresh(&pair.access_token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidToken);

        let refresh = issuer.validate_refresh(&pair.refresh_token).unwrap();
        assert_eq!(refresh.sub, "E1001");
    }

    #[test]
    fn test_refresh_tokens_are_unique() {
        let issuer = TokenIssuer::new(&config("test-secret"));
        let (a, _) = issuer.issue_refresh("E1001").unwrap();
        let (b, _) = issuer.issue_refresh("E1001").unwrap();
        assert_ne!(a, b);
    }
}
