//! Registry configuration from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default Identity Service target name.
pub const DEFAULT_IDENTITY_CHAINCODE: &str = "identity";

/// Default Identity Service lookup function.
pub const DEFAULT_IDENTITY_FUNCTION: &str = "getIdentity";

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {variable}: {reason}")]
    InvalidValue {
        variable: &'static str,
        value: String,
        reason: String,
    },
}

/// What a second `initialize` does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReinitPolicy {
    /// Silently replace the stored authority with the new caller's org
    #[default]
    Overwrite,
    /// Refuse with `AlreadyInitialized`; the stored authority is kept
    Reject,
}

impl FromStr for ReinitPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "overwrite" => Ok(ReinitPolicy::Overwrite),
            "reject" => Ok(ReinitPolicy::Reject),
            other => Err(format!("expected `overwrite` or `reject`, got `{other}`")),
        }
    }
}

impl fmt::Display for ReinitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReinitPolicy::Overwrite => f.write_str("overwrite"),
            ReinitPolicy::Reject => f.write_str("reject"),
        }
    }
}

/// Configuration for the property registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Behaviour of a repeated `initialize`
    pub reinit_policy: ReinitPolicy,

    /// Name the Identity Service is deployed under
    pub identity_chaincode: String,

    /// Identity Service function resolving an owner id
    pub identity_function: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            reinit_policy: ReinitPolicy::default(),
            identity_chaincode: DEFAULT_IDENTITY_CHAINCODE.to_string(),
            identity_function: DEFAULT_IDENTITY_FUNCTION.to_string(),
        }
    }
}

impl RegistryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PC_REINIT_POLICY`: `overwrite` or `reject` (default: overwrite)
    /// - `PC_IDENTITY_CHAINCODE`: Identity Service name (default: identity)
    /// - `PC_IDENTITY_FUNCTION`: lookup function (default: getIdentity)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let reinit_policy = match lookup("PC_REINIT_POLICY") {
            Some(value) => value
                .parse()
                .map_err(|reason| ConfigError::InvalidValue {
                    variable: "PC_REINIT_POLICY",
                    value,
                    reason,
                })?,
            None => defaults.reinit_policy,
        };

        let identity_chaincode =
            non_empty(lookup("PC_IDENTITY_CHAINCODE"), "PC_IDENTITY_CHAINCODE")?
                .unwrap_or(defaults.identity_chaincode);

        let identity_function =
            non_empty(lookup("PC_IDENTITY_FUNCTION"), "PC_IDENTITY_FUNCTION")?
                .unwrap_or(defaults.identity_function);

        Ok(Self {
            reinit_policy,
            identity_chaincode,
            identity_function,
        })
    }
}

fn non_empty(value: Option<String>, variable: &'static str) -> Result<Option<String>, ConfigError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(ConfigError::InvalidValue {
            variable,
            value: v,
            reason: "must not be empty".to_string(),
        }),
        other => Ok(other),
    }
}
