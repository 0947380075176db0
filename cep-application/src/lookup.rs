use super::*;

/// How the results of overlapping lookups are merged into the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergePolicy {
    /// Every response is merged in the order of arrival.
    #[default]
    LastResponseWins,
    /// Only the response of the most recent request is merged,
    /// responses of older requests are discarded.
    LatestRequestOnly,
}

/// A lookup that has been triggered but not yet answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLookup {
    pub(crate) generation: u64,
    pub(crate) postal_code: String,
}

impl PendingLookup {
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    /// Sends the request and waits for the response.
    ///
    /// This does not need access to the form, so the form stays
    /// usable while the request is pending.
    pub async fn run<G>(self, lookup_gw: &G) -> CompletedLookup
    where
        G: PostalCodeLookupGateway,
    {
        debug!(
            "Look up address of postal code {} (#{})",
            self.postal_code, self.generation
        );
        let result = lookup_gw.lookup_postal_code(&self.postal_code).await;
        CompletedLookup {
            pending: self,
            result,
        }
    }
}

/// The answer to a [`PendingLookup`].
#[derive(Debug)]
pub struct CompletedLookup {
    pub(crate) pending: PendingLookup,
    pub(crate) result: std::result::Result<Option<AddressLookup>, LookupError>,
}

impl CompletedLookup {
    pub const fn pending(&self) -> &PendingLookup {
        &self.pending
    }
}

/// What happened when the CEP input lost its focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The postal code is invalid, no request has been sent.
    Skipped(PostalCodeInvalidation),
    /// The looked up address details have been merged into the form.
    Merged,
    /// The service responded without any data.
    NoData,
    /// The request failed. The form is unchanged.
    Failed,
    /// A more recent lookup has been started in the meantime.
    Discarded,
}
