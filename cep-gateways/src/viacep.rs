use std::{future::Future, time::Duration};

use cep_boundary as json;
use cep_core::{entities::AddressLookup, gateways::lookup::*};
use serde_json::Value;

pub const DEFAULT_BASE_URL: &str = "https://viacep.com.br/ws";

/// Postal code lookup based on viacep.com.br.
#[derive(Debug, Clone)]
pub struct ViaCep {
    base_url: String,
    client: reqwest::Client,
}

impl ViaCep {
    pub fn try_new(base_url: impl Into<String>, timeout: Option<Duration>) -> reqwest::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn request_url(&self, postal_code: &str) -> String {
        format!("{}/{postal_code}/json/", self.base_url)
    }
}

fn transport_error(err: reqwest::Error) -> LookupError {
    LookupError::Transport(err.to_string())
}

fn malformed(err: serde_json::Error) -> LookupError {
    LookupError::Malformed(err.to_string())
}

/// Falsy JSON values (`null`, `false`, `0`, `""`) carry no data.
/// Any other value that is not an object has no address details
/// and clears the looked up fields.
fn parse_response_body(body: &str) -> Result<Option<AddressLookup>, LookupError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(malformed)?;
    let lookup = match value {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Object(_) => {
            let address: json::ViaCepAddress = serde_json::from_value(value).map_err(malformed)?;
            Some(address.into())
        }
        _ => {
            log::debug!("Unexpected response body: {body}");
            Some(AddressLookup::default())
        }
    };
    Ok(lookup)
}

impl PostalCodeLookupGateway for ViaCep {
    fn lookup_postal_code(
        &self,
        postal_code: &str,
    ) -> impl Future<Output = Result<Option<AddressLookup>, LookupError>> + Send {
        let url = self.request_url(postal_code);
        let client = self.client.clone();
        async move {
            log::debug!("GET {url}");
            let response = client.get(&url).send().await.map_err(transport_error)?;
            let status = response.status();
            if !status.is_success() {
                return Err(LookupError::Status(status.as_u16()));
            }
            let body = response.text().await.map_err(transport_error)?;
            parse_response_body(&body)
        }
    }
}
