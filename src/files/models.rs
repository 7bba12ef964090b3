//! File upload data models

use serde::{Deserialize, Serialize};

/// One stored file in an upload response
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadedFile {
    pub name: String,
    pub url: String,
}

/// Target folder for an upload, defaulting to the products folder
#[derive(Debug, Deserialize)]
pub struct UploadParams {
    pub folder: Option<String>,
}
