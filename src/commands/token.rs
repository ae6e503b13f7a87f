//! Token commands.

use clap::Args;
use serde::Serialize;

use taskgate_auth::jwt::{AccessClaims, RefreshClaims};
use taskgate_auth::{AccessPayload, authenticate_token, fingerprint as token_fingerprint, revoke_token};
use taskgate_core::config::AppConfig;
use taskgate_core::result::AppResult;
use taskgate_core::types::MemberId;
use taskgate_entity::Rank;

use crate::output;

/// Arguments for `issue`
#[derive(Debug, Args)]
pub struct IssueArgs {
    /// Login identifier (token subject)
    #[arg(long)]
    pub subject: String,
    /// Member id
    #[arg(long)]
    pub member_id: i64,
    /// Department name
    #[arg(long)]
    pub department: String,
    /// Organizational role, e.g. MANAGER or ROLE_MEMBER
    #[arg(long)]
    pub role: String,
    /// Rank label
    #[arg(long)]
    pub rank_label: Option<String>,
    /// Rank level
    #[arg(long)]
    pub rank_level: Option<u8>,
}

/// A single token argument
#[derive(Debug, Args)]
pub struct TokenArg {
    /// The token
    pub token: String,
}

/// Claims of whichever token type validated.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum InspectedClaims {
    Access(AccessClaims),
    Refresh(RefreshClaims),
}

/// Mint a token pair and record the refresh token as current.
pub async fn issue(args: &IssueArgs, config: &AppConfig) -> AppResult<()> {
    let issuer = super::token_issuer(config);
    let rank = match (&args.rank_label, args.rank_level) {
        (Some(label), Some(level)) => Some(Rank::new(label.clone(), level)),
        _ => None,
    };
    let payload = AccessPayload {
        subject: args.subject.clone(),
        member_id: MemberId::new(args.member_id),
        department: args.department.clone(),
        role: args.role.clone(),
        rank,
    };

    let pair = issuer.issue_pair(&payload)?;
    let store = super::revocation_store(config).await?;
    store
        .set_current_refresh(payload.member_id, &pair.refresh_token, issuer.refresh_ttl())
        .await?;

    output::print_item(&pair);
    Ok(())
}

/// Validate either token type and print its claims. No revocation check.
pub fn inspect(args: &TokenArg, config: &AppConfig) -> AppResult<()> {
    let issuer = super::token_issuer(config);
    let claims = match issuer.validate_access(&args.token) {
        Ok(claims) => InspectedClaims::Access(claims),
        Err(access_err) => match issuer.validate_refresh(&args.token) {
            Ok(claims) => InspectedClaims::Refresh(claims),
            Err(_) => return Err(access_err),
        },
    };

    output::print_item(&claims);
    Ok(())
}

/// Authenticate an access token as a protected request would.
pub async fn verify(args: &TokenArg, config: &AppConfig) -> AppResult<()> {
    let issuer = super::token_issuer(config);
    let store = super::revocation_store(config).await?;
    let principal = authenticate_token(&issuer, &store, &args.token).await?;

    output::print_item(&principal);
    Ok(())
}

/// Revoke an access token.
pub async fn revoke(args: &TokenArg, config: &AppConfig) -> AppResult<()> {
    let issuer = super::token_issuer(config);
    let store = super::revocation_store(config).await?;
    let claims = revoke_token(&issuer, &store, &args.token).await?;

    output::print_success("Token revoked");
    output::print_kv("member_id", &claims.mid.to_string());
    output::print_kv("fingerprint", &token_fingerprint(&args.token));
    Ok(())
}

/// Print a token's fingerprint.
pub fn fingerprint(args: &TokenArg) {
    println!("{}", token_fingerprint(&args.token));
}
