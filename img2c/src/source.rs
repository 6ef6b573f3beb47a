//! Where the encoded image bytes come from.
use crate::error::*;
use std::{
    fs::File,
    io::{Cursor, Read},
    path::PathBuf,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Path(PathBuf),
    Url(String),
    Bytes(Vec<u8>),
}

impl ImageSource {
    /// Opens the source for reading. Network fetches block the calling
    /// thread and are not retried.
    pub fn open(self) -> Result<Box<dyn Read + Send>, Error> {
        match self {
            ImageSource::Path(path) => {
                let file = File::open(&path).map_err(|e| {
                    Error::SourceUnavailable(format!(
                        "{ERROR_OPENING_RESOURCE} {}: {e}",
                        path.display()
                    ))
                })?;
                Ok(Box::new(file))
            }
            ImageSource::Url(url) => {
                log::info!("fetching {url}");
                let response = reqwest::blocking::get(&url)?.error_for_status()?;
                Ok(Box::new(response))
            }
            ImageSource::Bytes(bytes) => Ok(Box::new(Cursor::new(bytes))),
        }
    }
}
