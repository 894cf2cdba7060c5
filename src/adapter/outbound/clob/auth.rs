//! L2 (API key) request signing for the CLOB.
//!
//! Each authenticated request carries the API key, passphrase, a unix
//! timestamp and an HMAC-SHA256 signature over
//! `timestamp + METHOD + path + body`, keyed with the decoded API secret.
//! Secret and signature are URL-safe base64.

use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::config::ClobCredentials;
use crate::error::ClobError;

type HmacSha256 = Hmac<Sha256>;

pub const POLY_ADDRESS: &str = "POLY_ADDRESS";
pub const POLY_SIGNATURE: &str = "POLY_SIGNATURE";
pub const POLY_TIMESTAMP: &str = "POLY_TIMESTAMP";
pub const POLY_API_KEY: &str = "POLY_API_KEY";
pub const POLY_PASSPHRASE: &str = "POLY_PASSPHRASE";

/// Compute the request signature.
pub fn build_hmac_signature(
    secret: &str,
    timestamp: i64,
    method: &str,
    request_path: &str,
    body: Option<&str>,
) -> Result<String, ClobError> {
    let key = URL_SAFE
        .decode(secret.trim())
        .or_else(|_| STANDARD.decode(secret.trim()))
        .map_err(|e| ClobError::InvalidSecret(e.to_string()))?;

    let mut message = format!("{timestamp}{}{request_path}", method.to_ascii_uppercase());
    if let Some(body) = body {
        message.push_str(body);
    }

    let mut mac =
        HmacSha256::new_from_slice(&key).map_err(|e| ClobError::InvalidSecret(e.to_string()))?;
    mac.update(message.as_bytes());
    Ok(URL_SAFE.encode(mac.finalize().into_bytes()))
}

/// Build the full L2 header set for one request.
pub fn l2_headers(
    credentials: &ClobCredentials,
    timestamp: i64,
    method: &str,
    request_path: &str,
    body: Option<&str>,
) -> Result<Vec<(&'static str, String)>, ClobError> {
    let signature =
        build_hmac_signature(&credentials.secret, timestamp, method, request_path, body)?;
    Ok(vec![
        (POLY_ADDRESS, credentials.address.clone()),
        (POLY_SIGNATURE, signature),
        (POLY_TIMESTAMP, timestamp.to_string()),
        (POLY_API_KEY, credentials.api_key.clone()),
        (POLY_PASSPHRASE, credentials.passphrase.clone()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    // base64url("orderdesk-test-secret")
    const SECRET: &str = "b3JkZXJkZXNrLXRlc3Qtc2VjcmV0";

    #[test]
    fn signs_get_without_body() {
        let sig = build_hmac_signature(SECRET, 1_700_000_000, "GET", "/data/order/0xabc", None)
            .unwrap();
        assert_eq!(sig, "FsUNk3GNwfklopYDlZFPal38l-psfVVUSxK0c0_nIUc=");
    }

    #[test]
    fn signs_body_and_normalizes_method() {
        let sig =
            build_hmac_signature(SECRET, 1_700_000_000, "post", "/order", Some(r#"{"a":1}"#))
                .unwrap();
        assert_eq!(sig, "qF-nnv-lG4zGbVVjZOFsaRGMTVLp-6SKrnmqYOtDess=");
    }

    #[test]
    fn rejects_undecodable_secret() {
        let result = build_hmac_signature("not base64!!", 0, "GET", "/", None);
        assert!(matches!(result, Err(ClobError::InvalidSecret(_))));
    }

    #[test]
    fn header_set_is_complete() {
        let creds = ClobCredentials {
            address: "0xabc".into(),
            api_key: "key-1".into(),
            secret: SECRET.into(),
            passphrase: "phrase".into(),
        };
        let headers = l2_headers(&creds, 42, "GET", "/data/order/1", None).unwrap();
        let names: Vec<_> = headers.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            [POLY_ADDRESS, POLY_SIGNATURE, POLY_TIMESTAMP, POLY_API_KEY, POLY_PASSPHRASE]
        );
        assert_eq!(headers[2].1, "42");
    }
}
