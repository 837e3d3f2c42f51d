//! The credential-hashing seam.

/// External credential-hashing capability: given a secret, produce a
/// verifiable opaque credential.
///
/// The store never interprets credentials; the format belongs to the
/// implementation. Binaries plug in a real hasher, tests a transparent one.
pub trait CredentialHasher: Send + Sync {
    /// Turn a secret into an opaque credential.
    fn hash(&self, secret: &str) -> String;

    /// Check a secret against a previously produced credential.
    fn verify(&self, secret: &str, credential: &str) -> bool;
}
