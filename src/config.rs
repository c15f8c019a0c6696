//! Tracker configuration
//!
//! Everything the tracker needs is gathered into a [`TrackerConfig`] value
//! up front. Only [`TrackerConfig::from_env`] reads the process environment;
//! the rest of the crate works from the struct.
//!
//! Environment priority for the commit context:
//! 1. `REPOSITORY` / `BRANCH` / `COMMIT_HASH`
//! 2. `GITHUB_REPOSITORY` / `GITHUB_REF_NAME` / `GITHUB_SHA` (set by GitHub Actions)

use crate::error::{Error, Result};
use crate::types::CommitContext;
use std::env;
use std::fmt;

/// Base URL of the ingestion project
pub const ENDPOINT_VAR: &str = "SUPABASE_URL";
/// Service credential sent as a bearer token
pub const CREDENTIAL_VAR: &str = "SUPABASE_SERVICE_KEY";
/// Commit message to parse
pub const MESSAGE_VAR: &str = "COMMIT_MESSAGE";
/// Repository in `owner/repo` form
pub const REPOSITORY_VAR: &str = "REPOSITORY";
/// Branch name
pub const BRANCH_VAR: &str = "BRANCH";
/// Full commit SHA
pub const COMMIT_HASH_VAR: &str = "COMMIT_HASH";

const GITHUB_REPOSITORY_VAR: &str = "GITHUB_REPOSITORY";
const GITHUB_BRANCH_VAR: &str = "GITHUB_REF_NAME";
const GITHUB_SHA_VAR: &str = "GITHUB_SHA";

/// Raw tracker inputs; blank values count as absent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Endpoint base URL
    pub endpoint: Option<String>,
    /// Service credential
    pub credential: Option<String>,
    /// Commit message
    pub message: Option<String>,
    /// Repository (`owner/repo`)
    pub repository: Option<String>,
    /// Branch name
    pub branch: Option<String>,
    /// Commit SHA
    pub commit_hash: Option<String>,
}

/// Endpoint and credential, both present
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Endpoint base URL
    pub endpoint: String,
    /// Service credential
    pub credential: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("endpoint", &self.endpoint)
            .field("credential", &"<redacted>")
            .finish()
    }
}

impl TrackerConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read configuration through a variable lookup function
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Self {
            endpoint: var(ENDPOINT_VAR),
            credential: var(CREDENTIAL_VAR),
            message: var(MESSAGE_VAR),
            repository: var(REPOSITORY_VAR).or_else(|| var(GITHUB_REPOSITORY_VAR)),
            branch: var(BRANCH_VAR).or_else(|| var(GITHUB_BRANCH_VAR)),
            commit_hash: var(COMMIT_HASH_VAR).or_else(|| var(GITHUB_SHA_VAR)),
        }
    }

    /// Overlay `overrides` on top of this config; set fields in `overrides` win
    #[must_use]
    pub fn merge(self, overrides: Self) -> Self {
        Self {
            endpoint: overrides.endpoint.or(self.endpoint),
            credential: overrides.credential.or(self.credential),
            message: overrides.message.or(self.message),
            repository: overrides.repository.or(self.repository),
            branch: overrides.branch.or(self.branch),
            commit_hash: overrides.commit_hash.or(self.commit_hash),
        }
    }

    /// Endpoint and credential, if both are configured
    pub fn credentials(&self) -> Option<Credentials> {
        Some(Credentials {
            endpoint: non_blank(self.endpoint.as_deref())?.trim().to_string(),
            credential: non_blank(self.credential.as_deref())?.trim().to_string(),
        })
    }

    /// Commit message, if configured
    pub fn message(&self) -> Option<&str> {
        non_blank(self.message.as_deref())
    }

    /// Commit context; every field must be present
    pub fn context(&self) -> Result<CommitContext> {
        let missing: Vec<&str> = [
            (REPOSITORY_VAR, &self.repository),
            (BRANCH_VAR, &self.branch),
            (COMMIT_HASH_VAR, &self.commit_hash),
        ]
        .into_iter()
        .filter(|(_, value)| non_blank(value.as_deref()).is_none())
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            return Err(Error::Config(format!(
                "missing commit context: {}",
                missing.join(", ")
            )));
        }

        Ok(self.context_lossy())
    }

    /// Commit context with absent fields left empty
    pub fn context_lossy(&self) -> CommitContext {
        let field = |value: &Option<String>| {
            non_blank(value.as_deref())
                .map(|v| v.trim().to_string())
                .unwrap_or_default()
        };

        CommitContext {
            repository: field(&self.repository),
            branch: field(&self.branch),
            commit_hash: field(&self.commit_hash),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_reads_all_vars() {
        let config = TrackerConfig::from_lookup(lookup_from(&[
            ("SUPABASE_URL", "https://abc.supabase.co"),
            ("SUPABASE_SERVICE_KEY", "key"),
            ("COMMIT_MESSAGE", "[code] Fix year:2024 phase:1 week:1"),
            ("REPOSITORY", "octo/repo"),
            ("BRANCH", "main"),
            ("COMMIT_HASH", "abc123"),
        ]));

        let creds = config.credentials().unwrap();
        assert_eq!(creds.endpoint, "https://abc.supabase.co");
        assert_eq!(creds.credential, "key");
        assert_eq!(config.message(), Some("[code] Fix year:2024 phase:1 week:1"));
        assert_eq!(
            config.context().unwrap(),
            CommitContext::new("octo/repo", "main", "abc123")
        );
    }

    #[test]
    fn test_github_actions_fallback() {
        let config = TrackerConfig::from_lookup(lookup_from(&[
            ("GITHUB_REPOSITORY", "octo/actions"),
            ("GITHUB_REF_NAME", "dev"),
            ("GITHUB_SHA", "fff000"),
            ("BRANCH", "explicit"),
        ]));

        let ctx = config.context().unwrap();
        assert_eq!(ctx.repository, "octo/actions");
        assert_eq!(ctx.branch, "explicit");
        assert_eq!(ctx.commit_hash, "fff000");
    }

    #[test]
    fn test_blank_values_are_absent() {
        let config = TrackerConfig::from_lookup(lookup_from(&[
            ("SUPABASE_URL", "https://abc.supabase.co"),
            ("SUPABASE_SERVICE_KEY", "  "),
            ("COMMIT_MESSAGE", ""),
        ]));

        assert!(config.credentials().is_none());
        assert!(config.message().is_none());
    }

    #[test]
    fn test_missing_context_lists_fields() {
        let config = TrackerConfig {
            repository: Some("octo/repo".to_string()),
            ..TrackerConfig::default()
        };

        let err = config.context().unwrap_err();
        assert_eq!(
            err.to_string(),
            "configuration error: missing commit context: BRANCH, COMMIT_HASH"
        );

        let lossy = config.context_lossy();
        assert_eq!(lossy.repository, "octo/repo");
        assert!(lossy.branch.is_empty());
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let base = TrackerConfig {
            endpoint: Some("https://env.example".to_string()),
            message: Some("from env".to_string()),
            ..TrackerConfig::default()
        };
        let overrides = TrackerConfig {
            message: Some("from flag".to_string()),
            ..TrackerConfig::default()
        };

        let merged = base.merge(overrides);
        assert_eq!(merged.endpoint.as_deref(), Some("https://env.example"));
        assert_eq!(merged.message.as_deref(), Some("from flag"));
    }

    #[test]
    fn test_credentials_debug_is_redacted() {
        let creds = Credentials {
            endpoint: "https://abc.supabase.co".to_string(),
            credential: "secret".to_string(),
        };
        assert!(!format!("{creds:?}").contains("secret"));
    }
}
