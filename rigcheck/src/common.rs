use anyhow::Context;

const USER_AGENT: &str = concat!("rigcheck/", env!("CARGO_PKG_VERSION"));

/// A `reqwest` client, optionally keeping cookies between requests.
#[derive(Clone)]
pub struct Client<const COOKIES: bool>(pub reqwest::Client);

impl<const COOKIES: bool> Client<COOKIES> {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self(
            reqwest::Client::builder()
                .cookie_store(COOKIES)
                .user_agent(USER_AGENT)
                .build()
                .context("building the HTTP client")?,
        ))
    }
}

impl<const COOKIES: bool> Default for Client<COOKIES> {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| Self(reqwest::Client::new()))
    }
}
