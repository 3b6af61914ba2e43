//! Diffie-Hellman key agreement over the Montgomery ladder.

use crate::point;

/// Given a 32-byte secret key, returns the corresponding public key. The
/// key is clamped before use.
pub fn public_key(sk: &[u8; 32]) -> [u8; 32] {
    point::scalar_base_mult(sk)
}

/// The shared secret between a secret key and a peer public key. The
/// result is raw key material and needs hashing before use.
pub fn shared_secret(sk: &[u8; 32], pk: &[u8; 32]) -> [u8; 32] {
    point::scalar_mult(sk, pk)
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;
    use rand::{thread_rng, Rng};
    use x25519_dalek::{x25519, X25519_BASEPOINT_BYTES};

    use super::*;

    #[test]
    fn rfc7748_scalar_mult_vector() {
        let k = hex!("a546e36bf0527c9d3b16154b82465edd62144c0ac1fc5a18506a2244ba449ac4");
        let u = hex!("e6db6867583030db3594c1a424b15f7c726624ec26b3353b10a903a6d0ab1c4c");
        let expect = hex!("c3da55379de9c6908e94ea4df28d084f32eccf03491c71f754b4075577a28552");
        assert_eq!(shared_secret(&k, &u), expect);
    }

    #[test]
    fn rfc7748_key_pair_vectors() {
        let sk_a = hex!("77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a");
        let pk_a = hex!("8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a");
        let sk_b = hex!("5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb");
        let pk_b = hex!("de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f");
        let ss = hex!("4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742");

        assert_eq!(public_key(&sk_a), pk_a);
        assert_eq!(public_key(&sk_b), pk_b);
        assert_eq!(shared_secret(&sk_a, &pk_b), ss);
        assert_eq!(shared_secret(&sk_b, &pk_a), ss);
    }

    #[test]
    fn dh_round_trip() {
        for _ in 0..16 {
            let sk_a: [u8; 32] = thread_rng().gen();
            let sk_b: [u8; 32] = thread_rng().gen();
            let ss_a = shared_secret(&sk_a, &public_key(&sk_b));
            let ss_b = shared_secret(&sk_b, &public_key(&sk_a));
            assert_eq!(ss_a, ss_b);
        }
    }

    #[test]
    fn agrees_with_x25519_dalek() {
        for _ in 0..8 {
            let sk: [u8; 32] = thread_rng().gen();
            assert_eq!(public_key(&sk), x25519(sk, X25519_BASEPOINT_BYTES));

            /* RFC 7748 masks bit 255 of the peer coordinate before the
             * ladder; this encoding keeps it, so clear it for comparison */
            let mut peer: [u8; 32] = thread_rng().gen();
            peer[31] &= 0x7F;
            assert_eq!(shared_secret(&sk, &peer), x25519(sk, peer));
        }
    }

    #[test]
    fn zero_key_terminates() {
        let zero = [0u8; 32];
        let pk = public_key(&zero);
        assert_eq!(pk, x25519(zero, X25519_BASEPOINT_BYTES));
        /* the all-zero public key is a low-order point; the ladder must
         * still run to completion */
        let _ = shared_secret(&zero, &zero);
    }
}
