use std::{path::PathBuf, sync::Arc};

use anyhow::Result;
use cep_application::prelude::*;
use cep_core::{entities::AddressField, gateways::download::DownloadGateway};
use clap::{Parser, Subcommand};

use crate::{config::Config, gateways, repl, view};

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    config_file: Option<PathBuf>,

    /// Directory that receives the exported cep.txt
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Base URL of the ViaCEP web service
    #[arg(long, value_name = "URL")]
    viacep_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Look up a single postal code and print the address as JSON
    Lookup {
        /// Eight digits without a hyphen
        postal_code: String,

        /// Also save the address as cep.txt
        #[arg(long)]
        save: bool,
    },
}

pub fn run() -> Result<()> {
    let args = Args::parse();

    let mut cfg = Config::try_load_from_file_or_default(args.config_file.as_ref())?;
    if let Some(output_dir) = args.output_dir {
        cfg.export.output_dir = output_dir;
    }
    if let Some(base_url) = args.viacep_url {
        cfg.lookup.gateway = crate::config::LookupGateway::ViaCep { base_url };
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match args.command {
        Some(Command::Lookup { postal_code, save }) => {
            runtime.block_on(lookup_once(&cfg, postal_code, save))
        }
        None => {
            let lookup_gw = Arc::new(gateways::lookup_gateway(&cfg.lookup)?);
            let download_gw = gateways::download_gateway(&cfg.export)?;
            let form = AddressForm::new(cfg.lookup.merge_policy);
            runtime.block_on(repl::run(form, lookup_gw, download_gw))
        }
    }
}

async fn lookup_once(cfg: &Config, postal_code: String, save: bool) -> Result<()> {
    let lookup_gw = gateways::lookup_gateway(&cfg.lookup)?;
    let mut form = AddressForm::new(cfg.lookup.merge_policy);
    form.set_field(AddressField::PostalCode, postal_code);
    let outcome = form.blur_postal_code(&lookup_gw).await;
    log::debug!("Lookup outcome: {outcome:?}");
    if outcome == LookupOutcome::Failed {
        log::warn!("The address could not be looked up");
    }
    let file = form.submit()?;
    println!("{}", view::file_content(&file));
    if save {
        let download_gw = gateways::download_gateway(&cfg.export)?;
        let location = download_gw.offer_download(&file)?;
        log::info!("Saved {location}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn parse_lookup_command() {
        let args = Args::try_parse_from(["cepform", "lookup", "01001000", "--save"]).unwrap();
        match args.command {
            Some(Command::Lookup { postal_code, save }) => {
                assert_eq!(postal_code, "01001000");
                assert!(save);
            }
            None => panic!("missing subcommand"),
        }
    }

    #[test]
    fn parse_global_options() {
        let args = Args::try_parse_from([
            "cepform",
            "--output-dir",
            "/tmp",
            "--viacep-url",
            "http://localhost/ws",
        ])
        .unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.output_dir, Some(PathBuf::from("/tmp")));
        assert_eq!(args.viacep_url.as_deref(), Some("http://localhost/ws"));
    }
}
