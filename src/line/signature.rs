use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Base64-encoded HMAC-SHA256 of the raw request body, keyed by the channel
/// secret. The signature covers the byte-exact body, so callers must pass
/// the payload as received, never a re-serialized form.
pub fn sign(secret: &str, body: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
    mac.update(body);
    STANDARD.encode(mac.finalize().into_bytes())
}

/// Checks the `X-Line-Signature` header value against the raw body.
/// Undecodable header values fail closed.
pub fn verify(secret: &str, body: &[u8], signature: &str) -> bool {
    let decoded = match STANDARD.decode(signature) {
        Ok(bytes) => bytes,
        Err(_) => return false,
    };
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
    mac.update(body);
    mac.verify_slice(&decoded).is_ok()
}
