use anyhow::Result;
use cep_gateways::{download::SaveToDirectory, viacep::ViaCep};

use crate::config;

pub fn lookup_gateway(cfg: &config::Lookup) -> Result<ViaCep> {
    match &cfg.gateway {
        config::LookupGateway::ViaCep { base_url } => {
            log::info!("Use ViaCEP gateway ({base_url})");
            if let Some(timeout) = cfg.timeout {
                log::info!("Lookups time out after {} ms", timeout.as_millis());
            }
            Ok(ViaCep::try_new(base_url.as_str(), cfg.timeout)?)
        }
    }
}

pub fn download_gateway(cfg: &config::Export) -> Result<SaveToDirectory> {
    let gw = SaveToDirectory::try_new(&cfg.output_dir)?;
    log::info!("Save exported files in {}", gw.path().display());
    Ok(gw)
}
