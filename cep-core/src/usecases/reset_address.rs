use super::*;

pub fn reset_address(record: &mut AddressRecord) {
    *record = AddressRecord::default();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_filled_record() {
        let mut r = AddressRecord {
            postal_code: "0100".into(),
            street: "a".into(),
            complement: "b".into(),
            neighborhood: "c".into(),
            city: "d".into(),
            state: "e".into(),
        };
        reset_address(&mut r);
        assert!(r.is_empty());
    }
}
