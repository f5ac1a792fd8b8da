use anyhow::{Context, Result};
use std::env;
use tic_tac_toe_engine::{Player, Symbol};

pub const PLAYER_ONE_NAME: &str = "TTT_PLAYER_ONE_NAME";
pub const PLAYER_ONE_SYMBOL: &str = "TTT_PLAYER_ONE_SYMBOL";
pub const PLAYER_TWO_NAME: &str = "TTT_PLAYER_TWO_NAME";
pub const PLAYER_TWO_SYMBOL: &str = "TTT_PLAYER_TWO_SYMBOL";
pub const LOG_FILTER: &str = "TTT_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    pub name: String,
    pub symbol: Symbol,
}

impl PlayerConfig {
    pub fn into_player(self) -> Player {
        Player::new(self.name, self.symbol)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub players: [PlayerConfig; 2],
    /// Used when `RUST_LOG` is not set.
    pub log_filter: String,
    pub window_title: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        let symbol = |key: &str, default: &str| -> Result<Symbol> {
            var(key, default)
                .parse::<Symbol>()
                .with_context(|| format!("invalid {key}"))
        };

        Ok(AppConfig {
            players: [
                PlayerConfig {
                    name: var(PLAYER_ONE_NAME, "Goku"),
                    symbol: symbol(PLAYER_ONE_SYMBOL, "X")?,
                },
                PlayerConfig {
                    name: var(PLAYER_TWO_NAME, "Saitama"),
                    symbol: symbol(PLAYER_TWO_SYMBOL, "O")?,
                },
            ],
            log_filter: var(LOG_FILTER, "info"),
            window_title: "Tic-Tac-Toe".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.players[0].name, "Goku");
        assert_eq!(config.players[0].symbol, Symbol::X);
        assert_eq!(config.players[1].name, "Saitama");
        assert_eq!(config.players[1].symbol, Symbol::O);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn overrides_are_applied() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (PLAYER_ONE_NAME, "Ada"),
            (PLAYER_ONE_SYMBOL, "o"),
            (PLAYER_TWO_SYMBOL, "x"),
            (LOG_FILTER, "debug"),
        ]))
        .unwrap();
        assert_eq!(config.players[0].clone().into_player(), Player::new("Ada", Symbol::O));
        assert_eq!(config.players[1].symbol, Symbol::X);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[(PLAYER_TWO_NAME, "  ")])).unwrap();
        assert_eq!(config.players[1].name, "Saitama");
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[(PLAYER_ONE_SYMBOL, "Z")])).unwrap_err();
        assert_eq!(err.to_string(), format!("invalid {PLAYER_ONE_SYMBOL}"));
        assert_eq!(err.root_cause().to_string(), r#"expected X or O, got "Z""#);
    }
}
