//! Salted SHA-256 credential hasher.
//!
//! Stands in for the deployment's credential capability behind the
//! [`CredentialHasher`] seam. Credentials look like
//! `sha256$<salt>$<digest>`, where the digest covers salt and secret;
//! verification re-derives the digest from the stored salt.

use std::time::{SystemTime, UNIX_EPOCH};

use helpdesk_store::CredentialHasher;
use sha2::{Digest, Sha256};

pub struct SaltedSha256;

impl SaltedSha256 {
    fn digest(salt: &str, secret: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(salt.as_bytes());
        hasher.update(b"$");
        hasher.update(secret.as_bytes());
        hasher
            .finalize()
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect()
    }
}

impl CredentialHasher for SaltedSha256 {
    fn hash(&self, secret: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let salt = format!("{:x}", nanos ^ u128::from(std::process::id()));
        format!("sha256${salt}${}", Self::digest(&salt, secret))
    }

    fn verify(&self, secret: &str, credential: &str) -> bool {
        let mut parts = credential.split('$');
        matches!(
            (parts.next(), parts.next(), parts.next(), parts.next()),
            (Some("sha256"), Some(salt), Some(digest), None)
                if digest == Self::digest(salt, secret)
        )
    }
}
