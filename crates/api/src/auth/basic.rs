//! HTTP Basic credentials (`Authorization: Basic base64(user:pass)`).

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Username and password decoded from a Basic `Authorization` header value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl BasicCredentials {
    /// Parse a header value. Returns `None` for any other scheme, invalid
    /// base64, non-UTF-8 payloads or a payload without a `:` separator.
    pub fn parse(header: &str) -> Option<Self> {
        let (scheme, encoded) = header.trim().split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return None;
        }

        let decoded = STANDARD.decode(encoded.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        // The password may itself contain ':'; only the first one separates.
        let (username, password) = decoded.split_once(':')?;

        Some(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    /// Encode as a header value.
    pub fn to_header_value(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password);
        format!("Basic {}", STANDARD.encode(raw))
    }
}
