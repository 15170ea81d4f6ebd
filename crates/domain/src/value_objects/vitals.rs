//! Player vitals.
//!
//! All three values are clamped to `[0, 100]` on construction. The surrounding
//! game-rules layer owns how they change; the client only displays and
//! transports them.

use serde::{Deserialize, Serialize};

/// Upper bound for every vital
pub const MAX_VITAL: u8 = 100;

/// Values strictly below this render as warnings
pub const LOW_VITAL_THRESHOLD: u8 = 30;

/// Health, hunger and thirst of the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawVitals")]
pub struct Vitals {
    health: u8,
    hunger: u8,
    thirst: u8,
}

impl Vitals {
    /// Build vitals, clamping each value into `[0, 100]`.
    pub fn new(health: i64, hunger: i64, thirst: i64) -> Self {
        Self {
            health: clamp_vital(health),
            hunger: clamp_vital(hunger),
            thirst: clamp_vital(thirst),
        }
    }

    pub fn health(&self) -> u8 {
        self.health
    }

    pub fn hunger(&self) -> u8 {
        self.hunger
    }

    pub fn thirst(&self) -> u8 {
        self.thirst
    }
}

/// Wire shape of `Vitals`; values are clamped on the way in
#[derive(Deserialize)]
struct RawVitals {
    health: i64,
    hunger: i64,
    thirst: i64,
}

impl From<RawVitals> for Vitals {
    fn from(raw: RawVitals) -> Self {
        Self::new(raw.health, raw.hunger, raw.thirst)
    }
}

/// Clamp a raw value into the vital range.
pub fn clamp_vital(value: i64) -> u8 {
    u8::try_from(value.clamp(0, i64::from(MAX_VITAL))).unwrap_or(MAX_VITAL)
}

/// Whether a vital should be rendered with the warning tag
pub fn is_low(value: u8) -> bool {
    value < LOW_VITAL_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_clamped() {
        let vitals = Vitals::new(-5, 250, 42);
        assert_eq!(vitals.health(), 0);
        assert_eq!(vitals.hunger(), 100);
        assert_eq!(vitals.thirst(), 42);
    }

    #[test]
    fn deserialized_values_are_clamped() {
        let vitals: Vitals =
            serde_json::from_str(r#"{"health":255,"hunger":-3,"thirst":60}"#).unwrap();
        assert_eq!(vitals, Vitals::new(100, 0, 60));
    }

    #[test]
    fn threshold_is_exclusive() {
        assert!(is_low(29));
        assert!(!is_low(30));
        assert!(is_low(0));
    }
}
