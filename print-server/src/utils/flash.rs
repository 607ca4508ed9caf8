//! Signed flash messages
//!
//! One-shot operator messages carried across a redirect in a cookie.
//!
//! Cookie value: `base64url(json array of messages) "." hex(hmac-sha256)`.
//! The MAC is keyed with `SECRET_KEY`; a value with a bad MAC or a bad
//! encoding is ignored as if no cookie had been sent.

use axum::http::{HeaderMap, header};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;

/// Cookie name
pub const FLASH_COOKIE: &str = "flash";

type HmacSha256 = Hmac<Sha256>;

/// Seals and opens flash cookies
pub struct FlashSigner {
    key: Vec<u8>,
}

impl FlashSigner {
    pub fn new(secret: &str) -> Self {
        Self {
            key: secret.as_bytes().to_vec(),
        }
    }

    fn mac(&self) -> Result<HmacSha256, &'static str> {
        HmacSha256::new_from_slice(&self.key).map_err(|_| "HMAC key error")
    }

    /// Messages → signed cookie value
    pub fn seal(&self, messages: &[String]) -> Result<String, &'static str> {
        let json = serde_json::to_vec(messages).map_err(|_| "Flash encoding failed")?;
        let data = URL_SAFE_NO_PAD.encode(json);

        let mut mac = self.mac()?;
        mac.update(data.as_bytes());
        let signature = hex::encode(mac.finalize().into_bytes());

        Ok(format!("{data}.{signature}"))
    }

    /// Signed cookie value → messages, `None` if tampered or malformed
    pub fn open(&self, value: &str) -> Option<Vec<String>> {
        let (data, signature) = value.rsplit_once('.')?;

        let sig_bytes = hex::decode(signature).ok()?;
        let mut mac = self.mac().ok()?;
        mac.update(data.as_bytes());
        mac.verify_slice(&sig_bytes).ok()?;

        let json = URL_SAFE_NO_PAD.decode(data).ok()?;
        serde_json::from_slice(&json).ok()
    }

    /// `Set-Cookie` value carrying `messages`
    pub fn set_cookie(&self, messages: &[String]) -> Result<String, &'static str> {
        let value = self.seal(messages)?;
        Ok(format!("{FLASH_COOKIE}={value}; Path=/; HttpOnly; SameSite=Lax"))
    }

    /// Pending messages from the request's `Cookie` headers
    pub fn read(&self, headers: &HeaderMap) -> Vec<String> {
        let Some(value) = cookie_value(headers, FLASH_COOKIE) else {
            return Vec::new();
        };

        self.open(value).unwrap_or_else(|| {
            tracing::warn!("Ignoring flash cookie with invalid signature");
            Vec::new()
        })
    }
}

/// `Set-Cookie` value removing the flash cookie
pub fn clear_cookie() -> String {
    format!("{FLASH_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Find a cookie by name across all `Cookie` headers
fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|h| h.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v)
}
