use std::path::PathBuf;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct DietwatchConfig {
    pub document: DocumentConfig,
    pub cedric: CedricConfig,
}

#[derive(Clone, Debug)]
pub struct DocumentConfig {
    /// Path of the diet-plan JSON document. Read fresh on every request.
    pub path: PathBuf,
}

#[derive(Clone, Debug)]
pub struct CedricConfig {
    pub api_url: String,
    /// When unset, requests are sent without an Authorization header.
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}
