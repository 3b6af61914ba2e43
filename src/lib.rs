//! kcdsa25519 provides a small, portable implementation of the deterministic
//! EC-KCDSA digital signature algorithm over Curve25519 with SHA-256, plus
//! Diffie-Hellman key agreement on the same curve.
//!
//! All values cross the API as little-endian byte arrays: scalars and
//! x-coordinates are 32 bytes, signatures are 64 (the signature scalar v
//! followed by the challenge hash h). Verification recomputes Y = vP + hG
//! with a combined two-scalar ladder and checks H(H(m) || Y) against h.
//!
//! Key agreement and verification do not branch on secret data; the signing
//! path has data-dependent timing in its sign selection and modular
//! inversion.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use crate::eckcdsa::{is_canonical_public_key, is_canonical_signature, sign, verify};
pub use crate::keys::{PrivateKey, PublicKey, Signature};
pub use crate::x25519::{public_key, shared_secret};

mod eckcdsa;
mod fe25519;
mod keys;
mod point;
mod scalar;
mod x25519;
