//! Caller identity asserted by the upstream load balancer.
//!
//! The ALB completes the OIDC flow and forwards the subject in the
//! `x-amzn-oidc-identity` header. This service does not authenticate; it only
//! echoes a sanitized copy of that value. Sanitization is a plain allow-list
//! filter over the raw header bytes, so header values that are not valid UTF-8
//! or visible ASCII are neutralized instead of rejected.

use http::HeaderMap;

use crate::config::{IDENTITY_HEADER, MAX_IDENTITY_LEN};

/// Whether `byte` survives sanitization: ASCII letters, digits, `@`, `.`, `_`, `-`.
#[inline]
fn is_allowed(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'@' | b'.' | b'_' | b'-')
}

/// Remove every byte outside the allow-list, preserving the order of the rest.
pub fn sanitize(raw: &[u8]) -> String {
    raw.iter()
        .copied()
        .filter(|&b| is_allowed(b))
        .map(char::from)
        .collect()
}

/// Extract the identity to echo back, if any.
///
/// Returns `None` when the header is absent or empty, or when the sanitized
/// value is empty or longer than [`MAX_IDENTITY_LEN`]. Only the first value is
/// consulted when the header is repeated.
pub fn authenticated_user(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(IDENTITY_HEADER)?.as_bytes();
    if raw.is_empty() {
        return None;
    }

    let sanitized = sanitize(raw);
    if sanitized.is_empty() {
        tracing::debug!(raw_len = raw.len(), "Identity header sanitized to empty, omitting");
        return None;
    }
    if sanitized.len() > MAX_IDENTITY_LEN {
        tracing::debug!(
            sanitized_len = sanitized.len(),
            max = MAX_IDENTITY_LEN,
            "Identity header too long after sanitization, omitting"
        );
        return None;
    }

    Some(sanitized)
}
