use super::*;
use cep_entities as e;

impl From<&e::address::AddressRecord> for Address {
    fn from(from: &e::address::AddressRecord) -> Self {
        let e::address::AddressRecord {
            postal_code,
            street,
            complement,
            neighborhood,
            city,
            state,
        } = from;
        Self {
            cep: postal_code.clone(),
            logradouro: street.clone(),
            complemento: complement.clone(),
            bairro: neighborhood.clone(),
            cidade: city.clone(),
            estado: state.clone(),
        }
    }
}

// NOTE:
// ViaCEP calls the city `localidade`, the form calls it `cidade`.
// Keep this mapping explicit.
impl From<ViaCepAddress> for e::lookup::AddressLookup {
    fn from(from: ViaCepAddress) -> Self {
        let ViaCepAddress {
            logradouro,
            complemento,
            bairro,
            localidade,
            estado,
        } = from;
        Self {
            street: logradouro,
            complement: complemento,
            neighborhood: bairro,
            city: localidade,
            state: estado,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_uses_form_field_names() {
        let record = e::address::AddressRecord {
            postal_code: "01001000".into(),
            street: "Praça da Sé".into(),
            complement: "lado ímpar".into(),
            neighborhood: "Sé".into(),
            city: "São Paulo".into(),
            state: "SP".into(),
        };
        let json = serde_json::to_value(Address::from(&record)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "cep": "01001000",
                "logradouro": "Praça da Sé",
                "complemento": "lado ímpar",
                "bairro": "Sé",
                "cidade": "São Paulo",
                "estado": "SP",
            })
        );
    }

    #[test]
    fn empty_record_exports_all_keys() {
        let json = serde_json::to_value(Address::from(&e::address::AddressRecord::default()))
            .unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 6);
        assert!(obj.values().all(|v| v == ""));
    }

    #[test]
    fn localidade_becomes_city() {
        let json = r#"{
          "cep": "01001-000",
          "logradouro": "Praça da Sé",
          "complemento": "lado ímpar",
          "unidade": "",
          "bairro": "Sé",
          "localidade": "São Paulo",
          "uf": "SP",
          "estado": "São Paulo",
          "regiao": "Sudeste",
          "ibge": "3550308",
          "gia": "1004",
          "ddd": "11",
          "siafi": "7107"
        }"#;
        let viacep: ViaCepAddress = serde_json::from_str(json).unwrap();
        let lookup = e::lookup::AddressLookup::from(viacep);
        assert_eq!(lookup.city.as_deref(), Some("São Paulo"));
        assert_eq!(lookup.street.as_deref(), Some("Praça da Sé"));
        assert_eq!(lookup.state.as_deref(), Some("São Paulo"));
    }

    #[test]
    fn error_response_has_no_values() {
        let viacep: ViaCepAddress = serde_json::from_str(r#"{"erro": true}"#).unwrap();
        assert!(e::lookup::AddressLookup::from(viacep).is_empty());
        let viacep: ViaCepAddress = serde_json::from_str(r#"{"erro": "true"}"#).unwrap();
        assert!(e::lookup::AddressLookup::from(viacep).is_empty());
    }
}
