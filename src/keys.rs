//! Key and signature wrapper types.

use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::{eckcdsa, x25519};

/// A clamped Curve25519 secret key. Zeroed on drop.
#[derive(Clone)]
pub struct PrivateKey([u8; 32]);

impl PrivateKey {
    /// Builds a key from 32 bytes, clamping them into the ladder subgroup.
    pub fn from_bytes(bytes: [u8; 32]) -> PrivateKey {
        let mut raw = bytes;
        crate::scalar::clamp(&mut raw);
        PrivateKey(raw)
    }

    /// Draws 32 bytes from a cryptographically secure source and clamps
    /// them.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> PrivateKey {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        PrivateKey::from_bytes(bytes)
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// The corresponding public key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(x25519::public_key(&self.0))
    }

    /// The raw shared secret with a peer public key; hash before use.
    pub fn shared_secret(&self, pk: &PublicKey) -> [u8; 32] {
        x25519::shared_secret(&self.0, &pk.0)
    }

    /// Signs a message. Deterministic: the same key and message always
    /// produce the same signature.
    pub fn sign(&self, m: &[u8]) -> Signature {
        Signature(eckcdsa::sign(&self.0, m))
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl Zeroize for PrivateKey {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// A 32-byte public key; bit 255 is part of the x-coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PublicKey([u8; 32]);

impl PublicKey {
    pub fn from_bytes(bytes: [u8; 32]) -> PublicKey {
        PublicKey(bytes)
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// True iff the encoding round-trips through the field, i.e. the
    /// x-coordinate is below 2^255 - 19.
    pub fn is_canonical(&self) -> bool {
        eckcdsa::is_canonical_public_key(&self.0)
    }

    /// Verifies a signature over `m` by the holder of this key.
    pub fn verify(&self, m: &[u8], sig: &Signature, enforce_canonical: bool) -> bool {
        eckcdsa::verify(m, &sig.0, &self.0, enforce_canonical)
    }
}

impl From<[u8; 32]> for PublicKey {
    fn from(bytes: [u8; 32]) -> PublicKey {
        PublicKey(bytes)
    }
}

/// A 64-byte signature: the scalar v followed by the challenge hash h.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Signature([u8; 64]);

impl Signature {
    pub fn from_bytes(bytes: [u8; 64]) -> Signature {
        Signature(bytes)
    }

    pub fn to_bytes(&self) -> [u8; 64] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// True iff the scalar half is reduced modulo the group order.
    pub fn is_canonical(&self) -> bool {
        eckcdsa::is_canonical_signature(&self.0)
    }
}

impl From<[u8; 64]> for Signature {
    fn from(bytes: [u8; 64]) -> Signature {
        Signature(bytes)
    }
}

#[cfg(test)]
mod tests {
    use rand::thread_rng;

    use super::*;

    #[test]
    fn generated_keys_round_trip() {
        for _ in 0..4 {
            let sk = PrivateKey::generate(&mut thread_rng());
            let pk = sk.public_key();
            assert!(pk.is_canonical());

            let sig = sk.sign(b"wrapped api");
            assert!(sig.is_canonical());
            assert!(pk.verify(b"wrapped api", &sig, true));
            assert!(!pk.verify(b"different message", &sig, true));
        }
    }

    #[test]
    fn construction_clamps() {
        let sk = PrivateKey::from_bytes([0xFF; 32]);
        let raw = sk.to_bytes();
        assert_eq!(raw[0] & 0x07, 0);
        assert_eq!(raw[31] & 0x80, 0);
        assert_eq!(raw[31] & 0x40, 0x40);
    }

    #[test]
    fn key_agreement_is_symmetric() {
        let sk_a = PrivateKey::generate(&mut thread_rng());
        let sk_b = PrivateKey::generate(&mut thread_rng());
        assert_eq!(
            sk_a.shared_secret(&sk_b.public_key()),
            sk_b.shared_secret(&sk_a.public_key())
        );
    }
}
