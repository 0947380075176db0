use anyhow::{anyhow, Result};
use cep_application::prelude::MergePolicy;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "cepform.toml";

const ENV_NAME_VIACEP_BASE_URL: &str = "VIACEP_BASE_URL";
const ENV_NAME_OUTPUT_DIR: &str = "CEPFORM_OUTPUT_DIR";

pub struct Config {
    pub lookup: Lookup,
    pub export: Export,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::debug!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::debug!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(base_url) = env::var(ENV_NAME_VIACEP_BASE_URL) {
            cfg.lookup.gateway = LookupGateway::ViaCep { base_url };
        }
        if let Ok(dir) = env::var(ENV_NAME_OUTPUT_DIR) {
            cfg.export.output_dir = dir.into();
        }
        Ok(cfg)
    }
}

pub struct Lookup {
    pub gateway: LookupGateway,
    pub merge_policy: MergePolicy,
    /// Requests never time out if `None`.
    pub timeout: Option<Duration>,
}

pub enum LookupGateway {
    ViaCep { base_url: String },
}

pub struct Export {
    /// File system directory that receives exported files.
    pub output_dir: PathBuf,
}

impl From<raw::MergePolicy> for MergePolicy {
    fn from(from: raw::MergePolicy) -> Self {
        match from {
            raw::MergePolicy::LastResponseWins => Self::LastResponseWins,
            raw::MergePolicy::LatestRequestOnly => Self::LatestRequestOnly,
        }
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            lookup,
            gateway,
            export,
        } = from;

        let raw::Lookup {
            gateway: gw_name,
            merge_policy,
            timeout,
        } = lookup.unwrap_or_default();

        let gateway = match gw_name.unwrap_or(raw::LookupGateway::Viacep) {
            raw::LookupGateway::Viacep => {
                let raw::ViaCep { base_url } = gateway
                    .unwrap_or_default()
                    .viacep
                    .ok_or_else(|| anyhow!("Missing 'viacep' gateway configuration"))?;
                let base_url = base_url
                    .ok_or_else(|| anyhow!("Missing base URL of the 'viacep' gateway"))?;
                if base_url.trim().is_empty() {
                    return Err(anyhow!("Empty base URL of the 'viacep' gateway"));
                }
                LookupGateway::ViaCep { base_url }
            }
        };

        if timeout == Some(Duration::ZERO) {
            return Err(anyhow!("The lookup timeout must be greater than zero"));
        }

        let lookup = Lookup {
            gateway,
            merge_policy: merge_policy.map(Into::into).unwrap_or_default(),
            timeout,
        };

        let raw::Export { output_dir } = export.unwrap_or_default();
        let export = Export { output_dir };

        Ok(Self { lookup, export })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> Result<Config> {
        let raw: raw::Config = toml::from_str(toml)?;
        Config::try_from(raw)
    }

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let _: Config = Config::try_load_from_file_or_default(file).unwrap();
    }

    #[test]
    fn default_values() {
        let cfg = Config::try_from(raw::Config::default()).unwrap();
        let LookupGateway::ViaCep { base_url } = &cfg.lookup.gateway;
        assert_eq!(base_url, "https://viacep.com.br/ws");
        assert_eq!(cfg.lookup.merge_policy, MergePolicy::LastResponseWins);
        assert!(cfg.lookup.timeout.is_none());
        assert_eq!(cfg.export.output_dir, PathBuf::from("."));
    }

    #[test]
    fn empty_file_falls_back_to_defaults() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.lookup.merge_policy, MergePolicy::LastResponseWins);
        assert_eq!(cfg.export.output_dir, PathBuf::from("."));
    }

    #[test]
    fn custom_values() {
        let cfg = parse(
            r#"
            [lookup]
            merge-policy = "latest-request-only"
            timeout = "1500ms"

            [gateway.viacep]
            base-url = "http://localhost:3000/ws"

            [export]
            output-dir = "/tmp/cep"
            "#,
        )
        .unwrap();
        let LookupGateway::ViaCep { base_url } = &cfg.lookup.gateway;
        assert_eq!(base_url, "http://localhost:3000/ws");
        assert_eq!(cfg.lookup.merge_policy, MergePolicy::LatestRequestOnly);
        assert_eq!(cfg.lookup.timeout, Some(Duration::from_millis(1500)));
        assert_eq!(cfg.export.output_dir, PathBuf::from("/tmp/cep"));
    }

    #[test]
    fn reject_invalid_values() {
        assert!(parse(
            r#"
            [gateway.viacep]
            base-url = " "
            "#
        )
        .is_err());
        assert!(parse(
            r#"
            [lookup]
            timeout = "0s"
            "#
        )
        .is_err());
        assert!(parse(
            r#"
            [lookup]
            merge-policy = "first-response-wins"
            "#
        )
        .is_err());
    }

    #[test]
    fn missing_gateway_section() {
        assert!(parse(
            r#"
            [gateway]
            "#
        )
        .is_err());
    }
}
