use super::*;
use crate::{export_address::*, lookup::*};

/// State of the address form.
///
/// The form owns the [`AddressRecord`]. All mutations go through
/// the methods below, i.e. user edits, lookups, reset and export.
#[derive(Debug, Default)]
pub struct AddressForm {
    record: AddressRecord,
    merge_policy: MergePolicy,
    // The validation message of the CEP input is only
    // displayed after the user interacted with it.
    postal_code_touched: bool,
    latest_generation: u64,
}

impl AddressForm {
    pub fn new(merge_policy: MergePolicy) -> Self {
        Self {
            merge_policy,
            ..Default::default()
        }
    }

    pub const fn record(&self) -> &AddressRecord {
        &self.record
    }

    pub const fn merge_policy(&self) -> MergePolicy {
        self.merge_policy
    }

    pub fn field(&self, field: AddressField) -> &str {
        self.record.get(field)
    }

    /// A direct user edit of a single input.
    pub fn set_field(&mut self, field: AddressField, value: impl Into<String>) {
        self.record.set(field, value);
        if field.is_validated() {
            self.postal_code_touched = true;
        }
    }

    /// Live validation of the postal code.
    pub fn validation(&self) -> std::result::Result<(), PostalCodeInvalidation> {
        self.record.validate()
    }

    pub fn is_valid(&self) -> bool {
        self.validation().is_ok()
    }

    /// The message that is displayed below the CEP input, if any.
    pub fn validation_message(&self) -> Option<PostalCodeInvalidation> {
        if !self.postal_code_touched {
            return None;
        }
        usecases::field_invalidation(&self.record, AddressField::PostalCode)
    }

    /// The CEP input lost its focus.
    ///
    /// Returns the lookup that should be sent if the postal code is valid.
    pub fn begin_lookup(&mut self) -> std::result::Result<PendingLookup, PostalCodeInvalidation> {
        self.postal_code_touched = true;
        let postal_code = match usecases::postal_code_for_lookup(&self.record) {
            Ok(postal_code) => postal_code.to_owned(),
            Err(usecases::Error::PostalCode(reason)) => {
                debug!(
                    "Skip lookup of invalid postal code '{}': {}",
                    self.record.postal_code,
                    reason.reason()
                );
                return Err(reason);
            }
        };
        self.latest_generation += 1;
        Ok(PendingLookup {
            generation: self.latest_generation,
            postal_code,
        })
    }

    /// Applies the answer of a lookup.
    ///
    /// Failures are only logged, they never change the form.
    pub fn complete_lookup(&mut self, completed: CompletedLookup) -> LookupOutcome {
        let CompletedLookup { pending, result } = completed;
        if self.merge_policy == MergePolicy::LatestRequestOnly
            && pending.generation != self.latest_generation
        {
            debug!(
                "Discard outdated lookup of postal code {} (#{} < #{})",
                pending.postal_code, pending.generation, self.latest_generation
            );
            return LookupOutcome::Discarded;
        }
        match result {
            Ok(Some(lookup)) => {
                usecases::merge_lookup(&mut self.record, lookup);
                debug!("Merged address of postal code {}", pending.postal_code);
                LookupOutcome::Merged
            }
            Ok(None) => {
                debug!("No address data for postal code {}", pending.postal_code);
                LookupOutcome::NoData
            }
            Err(err) => {
                warn!(
                    "Unable to look up address of postal code {}: {err}",
                    pending.postal_code
                );
                LookupOutcome::Failed
            }
        }
    }

    /// The CEP input lost its focus: look up and merge the address.
    pub async fn blur_postal_code<G>(&mut self, lookup_gw: &G) -> LookupOutcome
    where
        G: PostalCodeLookupGateway,
    {
        match self.begin_lookup() {
            Ok(pending) => {
                let completed = pending.run(lookup_gw).await;
                self.complete_lookup(completed)
            }
            Err(reason) => LookupOutcome::Skipped(reason),
        }
    }

    /// The "Salvar" button.
    ///
    /// An invalid postal code blocks the export and
    /// reveals the validation message.
    pub fn submit(&mut self) -> Result<ExportFile> {
        self.postal_code_touched = true;
        export_address(&self.record)
    }

    /// Submits the form and hands the file over to the host.
    pub fn save<D>(&mut self, download_gw: &D) -> Result<String>
    where
        D: DownloadGateway,
    {
        self.postal_code_touched = true;
        save_address(download_gw, &self.record)
    }

    /// The "Limpar" button.
    pub fn reset(&mut self) {
        usecases::reset_address(&mut self.record);
        self.postal_code_touched = false;
        // Lookups that are still pending now belong to an outdated state.
        self.latest_generation += 1;
    }
}
