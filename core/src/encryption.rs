//! Payload encryption for the encrypted prefill operation.
//!
//! # Design
//! Each call is self-contained: the PEM is re-parsed and a fresh encrypter
//! built every time, so there is no key cache and no shared state between
//! in-flight calls. The configured PEM is usually an X.509 certificate (the
//! public key is extracted from it), but a bare public key PEM is accepted
//! too. Every failure, from PEM parsing to JWE finalization, surfaces as
//! `PrefillError::PayloadEncryption` with the underlying cause's description.

use josekit::jwe::{JweHeader, RSA_OAEP};

use crate::error::PrefillError;

/// Wrap `serialized_body` in a compact JWE (RSA-OAEP + A256GCM) under the
/// public key found in `public_key_cert_pem`.
pub async fn encrypt(serialized_body: &str, public_key_cert_pem: &str) -> Result<String, PrefillError> {
    let key_pem = public_key_pem(public_key_cert_pem)?;
    let encrypter = RSA_OAEP
        .encrypter_from_pem(&key_pem)
        .map_err(|e| PrefillError::PayloadEncryption(e.to_string()))?;

    let mut header = JweHeader::new();
    header.set_content_encryption("A256GCM");

    josekit::jwe::serialize_compact(serialized_body.as_bytes(), &header, &encrypter)
        .map_err(|e| PrefillError::PayloadEncryption(e.to_string()))
}

/// Extract the SPKI public key PEM from an X.509 certificate, or pass the
/// input through when it is already a public key PEM.
fn public_key_pem(pem: &str) -> Result<Vec<u8>, PrefillError> {
    if let Ok(cert) = openssl::x509::X509::from_pem(pem.as_bytes()) {
        let key = cert
            .public_key()
            .map_err(|e| PrefillError::PayloadEncryption(e.to_string()))?;
        return key
            .public_key_to_pem()
            .map_err(|e| PrefillError::PayloadEncryption(e.to_string()));
    }
    Ok(pem.as_bytes().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CERT_PEM: &str = include_str!("../tests/fixtures/encryption-cert.pem");
    const KEY_PEM: &str = include_str!("../tests/fixtures/encryption-key.pem");

    #[tokio::test]
    async fn produces_a_five_part_compact_token() {
        let token = encrypt(r#"{"a":1}"#, CERT_PEM).await.unwrap();
        assert_eq!(token.split('.').count(), 5);
    }

    #[tokio::test]
    async fn token_decrypts_back_to_the_plaintext() {
        let body = r#"{"applicants":[{"type":"basic"}]}"#;
        let token = encrypt(body, CERT_PEM).await.unwrap();

        let decrypter = RSA_OAEP.decrypter_from_pem(KEY_PEM).unwrap();
        let (plaintext, header) = josekit::jwe::deserialize_compact(&token, &decrypter).unwrap();
        assert_eq!(plaintext, body.as_bytes());
        assert_eq!(header.content_encryption(), Some("A256GCM"));
    }

    #[tokio::test]
    async fn garbage_pem_is_a_payload_encryption_error() {
        let err = encrypt(r#"{"a":1}"#, "not a pem").await.unwrap_err();
        assert!(matches!(err, PrefillError::PayloadEncryption(_)));
    }

    #[tokio::test]
    async fn fresh_encrypter_per_call_yields_distinct_tokens() {
        // Random CEK and IV per call: identical plaintexts never produce
        // identical tokens.
        let a = encrypt(r#"{"a":1}"#, CERT_PEM).await.unwrap();
        let b = encrypt(r#"{"a":1}"#, CERT_PEM).await.unwrap();
        assert_ne!(a, b);
    }
}
