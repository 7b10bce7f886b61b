//! Unit tests for the token codec

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::user::{Principal, UserRole};
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenCodec, TokenCodecConfig, MIN_SECRET_BYTES};

const TEST_SECRET: &str = "unit-test-secret-0123456789abcdefghij";

fn test_codec() -> TokenCodec {
    TokenCodec::new(TokenCodecConfig {
        secret: TEST_SECRET.to_string(),
        access_token_ttl_secs: 3600,
        issuer: "legalease".to_string(),
    })
    .expect("codec config should be valid")
}

fn test_principal() -> Principal {
    Principal {
        subject: Uuid::new_v4(),
        role: UserRole::Client,
    }
}

#[test]
fn issue_then_verify_round_trips_the_principal() {
    let codec = test_codec();
    let principal = test_principal();

    let token = codec.issue(&principal).unwrap();
    let verified = codec.verify(&token).unwrap();

    assert_eq!(verified, principal);
}

#[test]
fn token_past_its_ttl_fails_with_expired() {
    let codec = test_codec();
    let principal = test_principal();

    // Issued two hours ago with a one-hour ttl
    let issued_at = Utc::now() - Duration::hours(2);
    let token = codec.issue_at(&principal, issued_at).unwrap();

    let err = codec.verify(&token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::Expired)));
}

#[test]
fn tampered_signature_is_rejected() {
    let codec = test_codec();
    let token = codec.issue(&test_principal()).unwrap();

    let mut corrupted = token.clone();
    let last = corrupted.pop().unwrap();
    corrupted.push(if last == 'A' { 'B' } else { 'A' });

    let err = codec.verify(&corrupted).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::InvalidSignature | TokenError::InvalidFormat)
    ));
}

#[test]
fn tampered_payload_is_rejected() {
    let codec = test_codec();
    let token = codec.issue(&test_principal()).unwrap();

    // Flip one character in the middle of the payload segment
    let payload_start = token.find('.').unwrap() + 1;
    let payload_end = token.rfind('.').unwrap();
    let target = payload_start + (payload_end - payload_start) / 2;
    let mut bytes = token.into_bytes();
    bytes[target] = if bytes[target] == b'x' { b'y' } else { b'x' };
    let corrupted = String::from_utf8(bytes).unwrap();

    let err = codec.verify(&corrupted).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::InvalidSignature | TokenError::InvalidFormat)
    ));
}

#[test]
fn token_signed_with_another_key_is_rejected() {
    let codec = test_codec();
    let other = TokenCodec::new(TokenCodecConfig {
        secret: "another-secret-entirely-0123456789abcdef".to_string(),
        access_token_ttl_secs: 3600,
        issuer: "legalease".to_string(),
    })
    .unwrap();

    let token = other.issue(&test_principal()).unwrap();
    let err = codec.verify(&token).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::InvalidSignature)
    ));
}

#[test]
fn garbage_token_is_rejected_as_invalid_format() {
    let codec = test_codec();
    let err = codec.verify("definitely.not.a-jwt").unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::InvalidFormat)));
}

#[test]
fn short_secret_is_rejected_at_construction() {
    let err = TokenCodec::new(TokenCodecConfig {
        secret: "too-short".to_string(),
        access_token_ttl_secs: 3600,
        issuer: "legalease".to_string(),
    })
    .unwrap_err();

    assert!(matches!(
        err,
        DomainError::Token(TokenError::WeakSecret { min_bytes }) if min_bytes == MIN_SECRET_BYTES
    ));
}

#[test]
fn issuer_mismatch_is_rejected() {
    let codec = test_codec();
    let other_issuer = TokenCodec::new(TokenCodecConfig {
        secret: TEST_SECRET.to_string(),
        access_token_ttl_secs: 3600,
        issuer: "someone-else".to_string(),
    })
    .unwrap();

    let token = other_issuer.issue(&test_principal()).unwrap();
    let err = codec.verify(&token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::InvalidFormat)));
}
