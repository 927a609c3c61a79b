// src/core/net.rs
// Transport seam. The core only ever sees raw body bytes; callers decode them
// with `core::codepage`. `HttpFetcher` is the real (blocking, TLS) client,
// tests plug in canned pages through the same trait.

use std::error::Error;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

use crate::config::options::FetchOptions;

pub type BoxError = Box<dyn Error + Send + Sync>;

pub trait Fetch {
    /// GET `url`, returning the body of a 2xx response.
    fn get(&self, url: &str) -> Result<Vec<u8>, BoxError>;

    /// POST an already-encoded `application/x-www-form-urlencoded` body.
    fn post_form(&self, url: &str, body: String) -> Result<Vec<u8>, BoxError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(opts: &FetchOptions) -> Result<Self, BoxError> {
        let client = Client::builder()
            .timeout(opts.timeout)
            .user_agent(opts.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<Vec<u8>, BoxError> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(format!("HTTP error: {} {}", status, url).into());
        }
        Ok(resp.bytes()?.to_vec())
    }

    fn post_form(&self, url: &str, body: String) -> Result<Vec<u8>, BoxError> {
        let resp = self.client
            .post(url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(format!("HTTP error: {} {}", status, url).into());
        }
        Ok(resp.bytes()?.to_vec())
    }
}
