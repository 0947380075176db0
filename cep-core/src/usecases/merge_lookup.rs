use super::*;

/// Overwrites all looked up fields of the record.
///
/// Missing values are replaced by an empty string,
/// the postal code is never touched.
pub fn merge_lookup(record: &mut AddressRecord, lookup: AddressLookup) {
    if lookup.is_empty() {
        log::debug!(
            "No address details found for {}: clear looked up fields",
            record.postal_code
        );
    }
    let AddressLookup {
        street,
        complement,
        neighborhood,
        city,
        state,
    } = lookup;
    record.street = street.unwrap_or_default();
    record.complement = complement.unwrap_or_default();
    record.neighborhood = neighborhood.unwrap_or_default();
    record.city = city.unwrap_or_default();
    record.state = state.unwrap_or_default();
}
