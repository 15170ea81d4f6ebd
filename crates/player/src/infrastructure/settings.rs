//! Client settings read from the environment.
//!
//! Values come from process environment variables, optionally seeded from a
//! `.env` file by the binary. Every variable has a default except the player
//! id: without it the client runs disconnected.

use rise_domain::{DomainError, PlayerId, PlayerName};

pub const PLAYER_ID_VAR: &str = "RISE_PLAYER_ID";
pub const PLAYER_NAME_VAR: &str = "RISE_PLAYER_NAME";
pub const REMOTE_TIMEOUT_VAR: &str = "RISE_REMOTE_TIMEOUT_MS";
pub const LEDGER_LATENCY_VAR: &str = "RISE_LEDGER_LATENCY_MS";
pub const LEDGER_FAILURE_RATE_VAR: &str = "RISE_LEDGER_FAILURE_RATE";

/// Default per-call timeout for ledger requests (2 minutes)
pub const DEFAULT_REMOTE_TIMEOUT_MS: u64 = 120_000;
pub const DEFAULT_LEDGER_LATENCY_MS: u64 = 350;
pub const DEFAULT_PLAYER_NAME: &str = "Survivor";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("{var} must be {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("{var} is not valid: {source}")]
    Domain {
        var: &'static str,
        #[source]
        source: DomainError,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Wallet address; `None` means no wallet is connected
    pub player_id: Option<PlayerId>,
    pub player_name: PlayerName,
    pub remote_timeout_ms: u64,
    pub ledger_latency_ms: u64,
    /// Probability in `[0, 1]` that the in-memory ledger fails a call
    pub ledger_failure_rate: f64,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read settings through an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |var: &str| {
            lookup(var)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let player_id = read(PLAYER_ID_VAR)
            .map(|raw| {
                PlayerId::new(raw).map_err(|source| SettingsError::Domain {
                    var: PLAYER_ID_VAR,
                    source,
                })
            })
            .transpose()?;

        let player_name = PlayerName::new(
            read(PLAYER_NAME_VAR).unwrap_or_else(|| DEFAULT_PLAYER_NAME.to_string()),
        )
        .map_err(|source| SettingsError::Domain {
            var: PLAYER_NAME_VAR,
            source,
        })?;

        let remote_timeout_ms = parse_millis(
            REMOTE_TIMEOUT_VAR,
            read(REMOTE_TIMEOUT_VAR),
            DEFAULT_REMOTE_TIMEOUT_MS,
        )?;
        if remote_timeout_ms == 0 {
            return Err(SettingsError::Invalid {
                var: REMOTE_TIMEOUT_VAR,
                expected: "a positive number of milliseconds",
                value: "0".to_string(),
            });
        }

        let ledger_latency_ms = parse_millis(
            LEDGER_LATENCY_VAR,
            read(LEDGER_LATENCY_VAR),
            DEFAULT_LEDGER_LATENCY_MS,
        )?;

        let ledger_failure_rate = match read(LEDGER_FAILURE_RATE_VAR) {
            None => 0.0,
            Some(raw) => match raw.parse::<f64>() {
                Ok(rate) if (0.0..=1.0).contains(&rate) => rate,
                _ => {
                    return Err(SettingsError::Invalid {
                        var: LEDGER_FAILURE_RATE_VAR,
                        expected: "a probability between 0 and 1",
                        value: raw,
                    })
                }
            },
        };

        Ok(Self {
            player_id,
            player_name,
            remote_timeout_ms,
            ledger_latency_ms,
            ledger_failure_rate,
        })
    }
}

fn parse_millis(
    var: &'static str,
    raw: Option<String>,
    default: u64,
) -> Result<u64, SettingsError> {
    match raw {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| SettingsError::Invalid {
            var,
            expected: "a whole number of milliseconds",
            value: raw,
        }),
    }
}
