use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub use reqwest::Error;

/// End-to-end budget for one webhook call. The relay makes exactly one
/// attempt per inbound request, so this also bounds how long a request can
/// block on a slow webhook.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// RFC 3986 unreserved characters stay literal, everything else is encoded.
const MESSAGE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Builds the outbound URL: the webhook base with `message` attached as the
/// single query parameter.
pub fn request_url(base_url: &str, message: &str) -> String {
    format!(
        "{}?message={}",
        base_url,
        utf8_percent_encode(message, MESSAGE_SET)
    )
}

#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(base_url: &str) -> Result<Self, Error> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.to_owned(),
        })
    }

    /// GETs the webhook with `message` attached and returns the raw response
    /// body. A non-2xx answer counts as a failed request, like any other
    /// transport error.
    pub async fn forward(&self, message: &str) -> Result<String, Error> {
        let url = request_url(&self.base_url, message);
        let response = self.http.get(&url).send().await?.error_for_status()?;
        response.text().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_base_plus_encoded_message() {
        assert_eq!(
            request_url("http://n8n.local/webhook/chat", "hello"),
            "http://n8n.local/webhook/chat?message=hello"
        );
        assert_eq!(
            request_url("http://n8n.local/webhook/chat", "hello world"),
            "http://n8n.local/webhook/chat?message=hello%20world"
        );
    }

    #[test]
    fn unreserved_characters_stay_literal() {
        assert_eq!(
            request_url("http://host/hook", "a-b_c.d~e123"),
            "http://host/hook?message=a-b_c.d~e123"
        );
    }

    #[test]
    fn separators_and_unicode_are_encoded() {
        assert_eq!(
            request_url("http://host/hook", "a&b=c?d+e"),
            "http://host/hook?message=a%26b%3Dc%3Fd%2Be"
        );
        assert_eq!(
            request_url("http://host/hook", "€"),
            "http://host/hook?message=%E2%82%AC"
        );
    }

    #[test]
    fn encoding_survives_form_decoding_on_the_receiving_end() {
        let message = "tell me a joke & don't hold back, 100% + more";
        let url = request_url("http://host/hook", message);
        let query = url.split_once('?').unwrap().1;
        let (key, value) = url::form_urlencoded::parse(query.as_bytes())
            .next()
            .unwrap();
        assert_eq!(key, "message");
        assert_eq!(value, message);
    }

    #[tokio::test]
    async fn client_construction_accepts_any_timeout() {
        assert!(Client::new("http://host/hook").is_ok());
        assert!(Client::with_timeout("http://host/hook", Duration::from_millis(50)).is_ok());
    }
}
