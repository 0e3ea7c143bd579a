mod error;
mod file;
mod path;
mod request;
mod web;

#[cfg(test)]
mod tests;

pub use error::ResolveError;
pub use path::validate_text_path;
pub use request::ResolverRequest;
pub use web::html_to_text;

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Turns a file name or URL into the text behind it
#[async_trait]
pub trait ContentResolver: Send + Sync {
    async fn fetch_page(&self, url: &str) -> Result<String, ResolveError>;

    async fn read_text_file(&self, file: &str) -> Result<String, ResolveError>;

    async fn resolve(&self, request: &ResolverRequest) -> Result<String, ResolveError> {
        match request {
            ResolverRequest::FetchPage { url } => self.fetch_page(url).await,
            ResolverRequest::ReadFile { file } => self.read_text_file(file).await,
        }
    }
}

/// Reads local `.txt` files and fetches pages over HTTP
pub struct DefaultResolver {
    http: Client,
}

impl DefaultResolver {
    pub fn new(timeout: Duration) -> Result<Self, ResolveError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl ContentResolver for DefaultResolver {
    async fn fetch_page(&self, url: &str) -> Result<String, ResolveError> {
        web::fetch_page_text(&self.http, url).await
    }

    async fn read_text_file(&self, file: &str) -> Result<String, ResolveError> {
        file::read_text_file(file).await
    }
}
