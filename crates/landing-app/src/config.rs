//! Loading `GameConfig` from JSON.

use std::fs;
use std::path::Path;

use tracing::info;

use landing_core::config::GameConfig;

use crate::error::{AppError, AppResult};

pub fn load_config(path: &Path) -> AppResult<GameConfig> {
    let text = fs::read_to_string(path).map_err(|source| AppError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&text)?;
    info!(path = %path.display(), sites = config.sites.len(), "config loaded");
    Ok(config)
}

/// Parse and validate. Missing fields fall back to defaults.
pub fn parse_config(text: &str) -> AppResult<GameConfig> {
    let config: GameConfig = serde_json::from_str(text)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use landing_core::enums::SiteKind;

    #[test]
    fn test_empty_object_is_the_default_config() {
        assert_eq!(parse_config("{}").unwrap(), GameConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = parse_config(
            r#"{ "seed": 3, "sites": [ { "kind": "Helipad", "x": 10.0, "y": 10.0 } ] }"#,
        )
        .unwrap();
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.sites.len(), 1);
        assert_eq!(config.sites[0].kind, SiteKind::Helipad);
        assert_eq!(config.tick_period_ms, GameConfig::default().tick_period_ms);
    }

    #[test]
    fn test_contract_violation_is_reported() {
        let err = parse_config(r#"{ "selection_margin": 0.0 }"#).unwrap_err();
        assert!(matches!(err, AppError::Contract(_)), "{err}");
    }

    #[test]
    fn test_bad_json_is_reported() {
        let err = parse_config("{ not json").unwrap_err();
        assert!(matches!(err, AppError::Json(_)), "{err}");
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let err = load_config(Path::new("/nonexistent/landing.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/landing.json"));
    }
}
