//! Deterministic EC-KCDSA signatures with SHA-256.
//!
//! Signing derives everything from the secret key and the message:
//!
//! ```text
//! md = H(m)
//! x  = H(md || s)          where s is the signing exponent for sk
//! Y  = X(xG)
//! h  = H(md || Y)
//! v  = (x - h) s mod q
//! ```
//!
//! The signature is v || h. Verification recovers Y = vP + hG with the
//! combined ladder and accepts iff H(H(m) || Y) == h.
//!
//! The ladders do not branch on secret bits, but the signing path is not
//! constant time: the sign selection, egcd inversion and byte division all
//! take data-dependent paths.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::fe25519;
use crate::point;
use crate::scalar;

/// Signs `m` with the given secret key, producing the 64-byte signature
/// v || h.
pub fn sign(sk: &[u8; 32], m: &[u8]) -> [u8; 64] {
    let (_, signing_key) = point::keygen(sk);

    let md: [u8; 32] = Sha256::digest(m).into();

    let mut x: [u8; 32] = Sha256::new()
        .chain_update(md)
        .chain_update(signing_key)
        .finalize()
        .into();
    scalar::clamp(&mut x);
    let y = point::scalar_base_mult(&x);

    let h: [u8; 32] = Sha256::new().chain_update(md).chain_update(y).finalize().into();

    let mut v = [0u8; 32];
    // x is a clamped hash of the signing key, so a zero v cannot come up
    let _ = scalar::sign(&mut v, &h, &x, &signing_key);

    let mut sig = [0u8; 64];
    sig[..32].copy_from_slice(&v);
    sig[32..].copy_from_slice(&h);
    sig
}

/// Verifies a signature over `m` by the holder of `pk`. With
/// `enforce_canonical` the signature scalar must be reduced modulo the
/// group order and the public key must round-trip through the field
/// encoding.
pub fn verify(m: &[u8], sig: &[u8; 64], pk: &[u8; 32], enforce_canonical: bool) -> bool {
    if enforce_canonical && !(is_canonical_signature(sig) && is_canonical_public_key(pk)) {
        return false;
    }

    let mut v = [0u8; 32];
    v.copy_from_slice(&sig[..32]);
    let mut h = [0u8; 32];
    h.copy_from_slice(&sig[32..]);

    let y = point::double_scalar_mult(&v, &h, pk);

    let md: [u8; 32] = Sha256::digest(m).into();
    let h2: [u8; 32] = Sha256::new().chain_update(md).chain_update(y).finalize().into();

    h2.ct_eq(&h).into()
}

/// True iff the signature scalar is reduced modulo the group order.
pub fn is_canonical_signature(sig: &[u8; 64]) -> bool {
    let mut v = [0u8; 32];
    v.copy_from_slice(&sig[..32]);
    scalar::is_canonical(&v)
}

/// True iff the public key survives an unpack/pack round trip, i.e. its
/// x-coordinate is in [0, 2^255 - 19).
pub fn is_canonical_public_key(pk: &[u8; 32]) -> bool {
    fe25519::pack(&fe25519::unpack(pk)) == *pk
}

#[cfg(test)]
mod tests {
    use rand::{thread_rng, Rng};

    use crate::x25519::public_key;

    use super::*;

    #[test]
    fn round_trip() {
        for _ in 0..8 {
            let sk_a: [u8; 32] = thread_rng().gen();
            let pk_a = public_key(&sk_a);
            let pk_b = public_key(&thread_rng().gen());

            let message = b"this is a message";

            let sig = sign(&sk_a, message);
            let mut sig_p = sig;
            sig_p[4] ^= 1;

            assert!(verify(message, &sig, &pk_a, true));
            assert!(!verify(message, &sig, &pk_b, true));
            assert!(!verify(b"this is a different message", &sig, &pk_a, true));
            assert!(!verify(message, &sig_p, &pk_a, true));
        }
    }

    #[test]
    fn signing_is_deterministic() {
        let sk: [u8; 32] = thread_rng().gen();
        let message = b"the same message twice";
        assert_eq!(sign(&sk, message), sign(&sk, message));
    }

    #[test]
    fn signatures_are_canonical() {
        for _ in 0..8 {
            let sk: [u8; 32] = thread_rng().gen();
            let sig = sign(&sk, b"canonical by construction");
            assert!(is_canonical_signature(&sig));
        }
    }

    #[test]
    fn unreduced_signature_scalar_is_rejected_when_enforced() {
        let sk: [u8; 32] = thread_rng().gen();
        let pk = public_key(&sk);
        let message = b"canonicality test";
        let sig = sign(&sk, message);

        /* v + q is the same scalar modulo the order but not canonical;
         * v < q < 2^253 so the addition cannot carry out of 32 bytes */
        let mut sig_p = sig;
        {
            let (v, _) = sig_p.split_at_mut(32);
            scalar::mula_small(v, 0, &scalar::ORDER, 32, 1);
        }

        assert!(verify(message, &sig, &pk, true));
        assert!(!verify(message, &sig_p, &pk, true));
        assert!(verify(message, &sig_p, &pk, false));
    }

    #[test]
    fn tampered_public_keys_are_rejected() {
        let sk: [u8; 32] = thread_rng().gen();
        let pk = public_key(&sk);
        let message = b"key binding";
        let sig = sign(&sk, message);

        for i in [0usize, 13, 31] {
            let mut pk_p = pk;
            pk_p[i] ^= 4;
            assert!(!verify(message, &sig, &pk_p, false));
        }
    }
}
