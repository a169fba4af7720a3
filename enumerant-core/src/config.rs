//! Registry configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the resolver does when a documented variant has the same folded
/// name as a declared member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowPolicy {
    /// The declared member wins and the documented entry is dropped
    #[default]
    Shadow,
    /// Resolution fails with `EnumError::ShadowedVariant`
    Reject,
}

impl ShadowPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShadowPolicy::Shadow => "shadow",
            ShadowPolicy::Reject => "reject",
        }
    }
}

impl fmt::Display for ShadowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShadowPolicy {
    type Err = ShadowPolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "shadow" => Ok(ShadowPolicy::Shadow),
            "reject" => Ok(ShadowPolicy::Reject),
            _ => Err(ShadowPolicyParseError(s.to_string())),
        }
    }
}

/// Error when parsing an invalid shadow policy string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowPolicyParseError(pub String);

impl fmt::Display for ShadowPolicyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid shadow policy: {}", self.0)
    }
}

impl std::error::Error for ShadowPolicyParseError {}

// ============================================================================
// REGISTRY CONFIGURATION
// ============================================================================

/// Resolution settings shared by a registry and its resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Handling of documented variants that collide with declared members.
    pub shadow_policy: ShadowPolicy,

    /// Whether definition docs are scanned for `@method static self Name()`
    /// declarations.
    pub scan_docs: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            shadow_policy: ShadowPolicy::Shadow,
            scan_docs: true,
        }
    }
}

impl RegistryConfig {
    /// Create RegistryConfig from environment variables.
    ///
    /// Environment variables:
    /// - `ENUMERANT_SHADOW_POLICY`: "shadow" or "reject" (default: shadow)
    /// - `ENUMERANT_SCAN_DOCS`: "true" or "false" (default: true)
    ///
    /// Unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let shadow_policy = lookup("ENUMERANT_SHADOW_POLICY")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.shadow_policy);

        let scan_docs = lookup("ENUMERANT_SCAN_DOCS")
            .map(|s| s.trim().to_lowercase() != "false")
            .unwrap_or(defaults.scan_docs);

        Self {
            shadow_policy,
            scan_docs,
        }
    }

    pub fn with_shadow_policy(mut self, policy: ShadowPolicy) -> Self {
        self.shadow_policy = policy;
        self
    }

    pub fn with_scan_docs(mut self, scan_docs: bool) -> Self {
        self.scan_docs = scan_docs;
        self
    }
}
