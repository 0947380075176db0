use std::{
    io::{IsTerminal, Write},
    sync::Arc,
};

use anyhow::Result;
use cep_application::{error::ExportError, prelude::*};
use cep_core::{
    entities::AddressField,
    gateways::{download::DownloadGateway, lookup::PostalCodeLookupGateway},
};
use clap::{CommandFactory, Parser, Subcommand};
use thiserror::Error;
use tokio::{
    io::{self, AsyncBufReadExt, BufReader},
    sync::mpsc,
};

use crate::view;

/// A single line of input.
#[derive(Debug, Parser)]
#[command(multicall = true, subcommand_required = true)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Edit a field (cep, logradouro, complemento, bairro, cidade, estado)
    Set {
        #[arg(value_name = "FIELD")]
        field: AddressField,
        /// Words are joined with a single space, quote the value to keep it as it is
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Edit the CEP and leave the input (starts the lookup)
    Cep {
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,
    },
    /// Leave the CEP input (starts the lookup)
    Blur,
    /// Wait until all pending lookups are answered
    Wait,
    /// Display the form
    Show,
    /// Clear the form
    #[command(name = "limpar", visible_alias = "reset")]
    Reset,
    /// Save the address as cep.txt
    #[command(name = "salvar", visible_alias = "save")]
    Save,
    /// Leave
    #[command(visible_alias = "exit")]
    Quit,
}

#[derive(Debug, Error)]
pub enum LineError {
    #[error("Invalid quoting")]
    Quoting,
    #[error(transparent)]
    Command(#[from] clap::Error),
}

/// Tokenizes a line like a shell would and parses the command.
///
/// Returns `None` for blank lines.
pub fn parse_line(line: &str) -> Result<Option<Command>, LineError> {
    let tokens = shlex::split(line).ok_or(LineError::Quoting)?;
    if tokens.is_empty() {
        return Ok(None);
    }
    let Line { command } = Line::try_parse_from(tokens)?;
    Ok(Some(command))
}

/// The form together with everything that is needed to operate it.
struct Session<G, D> {
    form: AddressForm,
    lookup_gw: Arc<G>,
    download_gw: D,
    completed_tx: mpsc::UnboundedSender<CompletedLookup>,
    pending: usize,
}

impl<G, D> Session<G, D>
where
    G: PostalCodeLookupGateway + Send + Sync + 'static,
    D: DownloadGateway,
{
    fn new(
        form: AddressForm,
        lookup_gw: Arc<G>,
        download_gw: D,
        completed_tx: mpsc::UnboundedSender<CompletedLookup>,
    ) -> Self {
        Self {
            form,
            lookup_gw,
            download_gw,
            completed_tx,
            pending: 0,
        }
    }

    /// Executes a command and returns the text that should be displayed.
    fn handle(&mut self, cmd: Command) -> Option<String> {
        match cmd {
            Command::Set { field, value } => {
                self.form.set_field(field, value.join(" "));
                if field.is_validated() {
                    self.form.validation_message().map(|msg| format!("! {msg}"))
                } else {
                    None
                }
            }
            Command::Cep { value } => {
                self.form
                    .set_field(AddressField::PostalCode, value.unwrap_or_default());
                Some(self.blur())
            }
            Command::Blur => Some(self.blur()),
            Command::Show => Some(view::render_form(&self.form)),
            Command::Reset => {
                self.form.reset();
                Some(view::render_form(&self.form))
            }
            Command::Save => Some(self.save()),
            // Handled by the event loop
            Command::Wait | Command::Quit => None,
        }
    }

    fn blur(&mut self) -> String {
        match self.form.begin_lookup() {
            Ok(pending) => {
                let msg = format!("Consultando CEP {} ...", pending.postal_code());
                let lookup_gw = Arc::clone(&self.lookup_gw);
                let completed_tx = self.completed_tx.clone();
                tokio::spawn(async move {
                    let completed = pending.run(&*lookup_gw).await;
                    if completed_tx.send(completed).is_err() {
                        log::debug!("Lookup answered after the form has been closed");
                    }
                });
                self.pending += 1;
                msg
            }
            Err(reason) => format!("! {reason}"),
        }
    }

    fn save(&mut self) -> String {
        match self.form.save(&self.download_gw) {
            Ok(location) => format!("Salvo em {location}"),
            Err(ExportError::PostalCode(reason)) => format!("! {reason}"),
            Err(err) => {
                log::error!("Unable to save the address: {err}");
                format!("Não foi possível salvar: {err}")
            }
        }
    }

    fn complete(&mut self, completed: CompletedLookup) -> Option<String> {
        self.pending = self.pending.saturating_sub(1);
        let outcome = self.form.complete_lookup(completed);
        view::lookup_outcome(outcome)
            .map(|msg| format!("{msg}\n{}", view::render_form(&self.form)))
    }

    /// Waits until all pending lookups have been answered.
    async fn drain(
        &mut self,
        completed_rx: &mut mpsc::UnboundedReceiver<CompletedLookup>,
    ) -> Vec<String> {
        let mut out = vec![];
        while self.pending > 0 {
            let Some(completed) = completed_rx.recv().await else {
                break;
            };
            out.extend(self.complete(completed));
        }
        out
    }
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

pub async fn run<G, D>(form: AddressForm, lookup_gw: Arc<G>, download_gw: D) -> Result<()>
where
    G: PostalCodeLookupGateway + Send + Sync + 'static,
    D: DownloadGateway,
{
    let interactive = std::io::stdin().is_terminal();
    let (completed_tx, mut completed_rx) = mpsc::unbounded_channel();
    let mut session = Session::new(form, lookup_gw, download_gw, completed_tx);
    let mut lines = BufReader::new(io::stdin()).lines();

    if interactive {
        println!("{}", Line::command().render_help());
        println!("{}", view::render_form(&session.form));
    }

    loop {
        if interactive {
            prompt();
        }
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_line(&line) {
                    Ok(None) => continue,
                    Ok(Some(Command::Quit)) => break,
                    Ok(Some(Command::Wait)) => {
                        for out in session.drain(&mut completed_rx).await {
                            println!("{out}");
                        }
                    }
                    Ok(Some(cmd)) => {
                        if let Some(out) = session.handle(cmd) {
                            println!("{out}");
                        }
                    }
                    // Help is delivered as an error, clap knows where to print it.
                    Err(LineError::Command(err)) => {
                        let _ = err.print();
                    }
                    Err(err) => eprintln!("{err}"),
                }
            }
            Some(completed) = completed_rx.recv() => {
                if let Some(out) = session.complete(completed) {
                    println!("\n{out}");
                }
            }
        }
    }

    // Don't leave while lookups are still in flight.
    for out in session.drain(&mut completed_rx).await {
        println!("{out}");
    }
    Ok(())
}
