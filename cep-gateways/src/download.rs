use std::{
    fs, io,
    path::{Path, PathBuf},
};

use cep_core::gateways::download::*;

/// Stores downloads as files in a local directory.
#[derive(Debug, Clone)]
pub struct SaveToDirectory {
    dir: PathBuf,
}

impl SaveToDirectory {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        let dir = directory.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && Path::new(name).file_name().and_then(|n| n.to_str()) == Some(name)
}

impl DownloadGateway for SaveToDirectory {
    fn offer_download(&self, file: &ExportFile) -> Result<String, DownloadError> {
        if !is_plain_file_name(&file.file_name) {
            return Err(DownloadError::FileName(file.file_name.clone()));
        }
        let path = self.dir.join(&file.file_name);
        log::debug!(
            "Write {} ({}, {} bytes)",
            path.display(),
            file.mime_type,
            file.content.len()
        );
        fs::write(&path, &file.content)?;
        Ok(path.display().to_string())
    }
}
