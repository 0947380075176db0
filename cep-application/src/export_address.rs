use super::*;
use cep_boundary as json;

pub const EXPORT_FILE_NAME: &str = "cep.txt";
pub const EXPORT_MIME_TYPE: &str = "text/plain";

/// Serializes a valid record into the file that is offered for download.
pub fn export_address(record: &AddressRecord) -> Result<ExportFile> {
    record.validate()?;
    let content = serde_json::to_string(&json::Address::from(record))?;
    Ok(ExportFile {
        file_name: EXPORT_FILE_NAME.to_string(),
        mime_type: EXPORT_MIME_TYPE.to_string(),
        content: content.into_bytes(),
    })
}

pub fn save_address<D>(download_gw: &D, record: &AddressRecord) -> Result<String>
where
    D: DownloadGateway,
{
    let file = export_address(record)?;
    let location = download_gw.offer_download(&file)?;
    info!("Saved address of postal code {} to {location}", record.postal_code);
    Ok(location)
}
