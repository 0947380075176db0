use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("cepform.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub lookup: Option<Lookup>,
    pub gateway: Option<Gateway>,
    pub export: Option<Export>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Lookup {
    pub gateway: Option<LookupGateway>,
    pub merge_policy: Option<MergePolicy>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub timeout: Option<Duration>,
}

impl Default for Lookup {
    fn default() -> Self {
        Config::default().lookup.expect("Lookup configuration")
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LookupGateway {
    Viacep,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergePolicy {
    LastResponseWins,
    LatestRequestOnly,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub viacep: Option<ViaCep>,
}

impl Default for Gateway {
    fn default() -> Self {
        Config::default().gateway.expect("Gateway configuration")
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ViaCep {
    pub base_url: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Export {
    pub output_dir: PathBuf,
}

impl Default for Export {
    fn default() -> Self {
        Config::default().export.expect("Export configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert!(cfg.lookup.is_some());
        assert!(cfg.gateway.is_some());
        assert!(cfg.export.is_some());
    }

    #[test]
    fn default_lookup_config() {
        let cfg = Lookup::default();
        assert!(matches!(cfg.gateway, Some(LookupGateway::Viacep)));
        assert!(matches!(cfg.merge_policy, Some(MergePolicy::LastResponseWins)));
        assert!(cfg.timeout.is_none());
    }

    #[test]
    fn parse_full_config_example_from_file() {
        let cfg_string = fs::read_to_string("src/config/cepform.full-example.toml").unwrap();
        let cfg: Config = toml::from_str(&cfg_string).unwrap();
        let lookup = cfg.lookup.unwrap();
        assert!(matches!(
            lookup.merge_policy,
            Some(MergePolicy::LatestRequestOnly)
        ));
        assert_eq!(lookup.timeout, Some(Duration::from_secs(10)));
        assert_eq!(cfg.export.unwrap().output_dir, PathBuf::from("downloads"));
    }

    #[test]
    fn parse_empty_config() {
        let cfg: Config = toml::from_str("").unwrap();
        assert!(cfg.lookup.is_none());
        assert!(cfg.gateway.is_none());
        assert!(cfg.export.is_none());
    }
}
