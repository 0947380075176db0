use std::{borrow::Cow, fmt::Write};

use cep_application::prelude::*;
use cep_core::{entities::AddressField, gateways::download::ExportFile};
use strum::IntoEnumIterator;

const LABEL_WIDTH: usize = 12;

pub fn render_form(form: &AddressForm) -> String {
    let mut out = String::new();
    for field in AddressField::iter() {
        let _ = writeln!(
            out,
            "{:<width$} : {}",
            field.label(),
            form.field(field),
            width = LABEL_WIDTH
        );
        if field.is_validated() {
            if let Some(msg) = form.validation_message() {
                let _ = writeln!(out, "{:<width$}   ! {msg}", "", width = LABEL_WIDTH);
            }
        }
    }
    out.push_str("[ Limpar ] [ Salvar ]");
    out
}

pub fn file_content(file: &ExportFile) -> Cow<'_, str> {
    String::from_utf8_lossy(&file.content)
}

pub fn lookup_outcome(outcome: LookupOutcome) -> Option<&'static str> {
    match outcome {
        LookupOutcome::Merged => Some("Endereço preenchido."),
        // Failures are silent, the form simply stays as it is.
        LookupOutcome::NoData
        | LookupOutcome::Failed
        | LookupOutcome::Discarded
        | LookupOutcome::Skipped(_) => None,
    }
}
