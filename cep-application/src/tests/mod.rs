pub mod prelude {

    use std::{future::Future, io, sync::Mutex};

    pub use cep_core::{
        entities::*,
        gateways::{download::*, lookup::*},
    };

    pub fn praca_da_se_fields() -> [(AddressField, &'static str); 6] {
        [
            (AddressField::PostalCode, "01001000"),
            (AddressField::Street, "Praça da Sé"),
            (AddressField::Complement, "lado ímpar"),
            (AddressField::Neighborhood, "Sé"),
            (AddressField::City, "São Paulo"),
            (AddressField::State, "SP"),
        ]
    }

    pub fn praca_da_se() -> AddressRecord {
        let mut record = AddressRecord::default();
        for (field, value) in praca_da_se_fields() {
            record.set(field, value);
        }
        record
    }

    pub fn praca_da_se_lookup() -> AddressLookup {
        AddressLookup::from(&praca_da_se())
    }

    pub struct MockLookupGw {
        response: Result<Option<AddressLookup>, LookupError>,
        requests: Mutex<Vec<String>>,
    }

    impl MockLookupGw {
        pub fn new(response: Result<Option<AddressLookup>, LookupError>) -> Self {
            Self {
                response,
                requests: Default::default(),
            }
        }

        pub fn responding(lookup: AddressLookup) -> Self {
            Self::new(Ok(Some(lookup)))
        }

        pub fn failing(err: LookupError) -> Self {
            Self::new(Err(err))
        }

        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl PostalCodeLookupGateway for MockLookupGw {
        fn lookup_postal_code(
            &self,
            postal_code: &str,
        ) -> impl Future<Output = Result<Option<AddressLookup>, LookupError>> + Send {
            self.requests.lock().unwrap().push(postal_code.to_owned());
            let response = self.response.clone();
            async move { response }
        }
    }

    #[derive(Default)]
    pub struct MockDownloadGw {
        pub files: Mutex<Vec<ExportFile>>,
        fail: bool,
    }

    impl MockDownloadGw {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }
    }

    impl DownloadGateway for MockDownloadGw {
        fn offer_download(&self, file: &ExportFile) -> Result<String, DownloadError> {
            if self.fail {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only").into());
            }
            self.files.lock().unwrap().push(file.clone());
            Ok(format!("mock://{}", file.file_name))
        }
    }
}
