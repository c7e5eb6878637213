//! Rule options a host may tune per game.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::OptionError;

/// Tunable rules. `Default` gives the standard game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RulesConfig {
    /// Turns owed by a color whose liar call turns out wrong
    pub failed_call_penalty: u32,
    /// Reject moves by the color not on move
    pub enforce_turn_order: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            failed_call_penalty: 1,
            enforce_turn_order: true,
        }
    }
}

impl RulesConfig {
    #[must_use]
    pub const fn failed_call_penalty(mut self, turns: u32) -> Self {
        self.failed_call_penalty = turns;
        self
    }

    #[must_use]
    pub const fn enforce_turn_order(mut self, enforce: bool) -> Self {
        self.enforce_turn_order = enforce;
        self
    }

    /// Set an option by name, as a host passes it through from its own
    /// settings. Names are case-insensitive; spaces and dashes count as
    /// underscores.
    pub fn apply_option(&mut self, name: &str, value: &str) -> Result<(), OptionError> {
        let normalized = name.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        let invalid = || OptionError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        };
        match normalized.as_str() {
            "failed_call_penalty" => {
                self.failed_call_penalty = value.trim().parse().map_err(|_| invalid())?;
            }
            "enforce_turn_order" => {
                self.enforce_turn_order = match value.trim().to_ascii_lowercase().as_str() {
                    "true" | "on" | "1" => true,
                    "false" | "off" | "0" => false,
                    _ => return Err(invalid()),
                };
            }
            _ => {
                return Err(OptionError::UnknownOption {
                    name: name.to_string(),
                })
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RulesConfig::default();
        assert_eq!(config.failed_call_penalty, 1);
        assert!(config.enforce_turn_order);
    }

    #[test]
    fn test_apply_option() {
        let mut config = RulesConfig::default();
        config.apply_option("Failed Call Penalty", "2").unwrap();
        config.apply_option("enforce-turn-order", "off").unwrap();
        assert_eq!(
            config,
            RulesConfig::default()
                .failed_call_penalty(2)
                .enforce_turn_order(false)
        );
    }

    #[test]
    fn test_apply_option_errors() {
        let mut config = RulesConfig::default();
        assert!(matches!(
            config.apply_option("hash", "16"),
            Err(OptionError::UnknownOption { .. })
        ));
        assert!(matches!(
            config.apply_option("failed_call_penalty", "-1"),
            Err(OptionError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.apply_option("enforce_turn_order", "maybe"),
            Err(OptionError::InvalidValue { .. })
        ));
        assert_eq!(config, RulesConfig::default());
    }
}
