//! Montgomery-ladder scalar multiplication on y^2 = x^3 + 486662 x^2 + x.
//!
//! Points are projective (X, Z) pairs; the affine x-coordinate is X/Z and
//! Z = 0 is the point at infinity. The ladder keeps two tracks whose
//! difference is the base point and advances both with one doubling and one
//! differential addition per scalar bit, selecting tracks by array index
//! rather than by branching on the bit.

use crate::fe25519::{self, Fe25519, BASE_2Y, BASE_R2Y};
use crate::scalar::{self, ORDER, ORDER_TIMES_8};

/// Curve coefficient A.
const A: i64 = 486662;
/// (A - 2) / 4, the doubling constant.
const A24: i64 = 121665;
/// Base point abscissa.
const BASE_X: i64 = 9;
/// Square of the base point ordinate.
const BASE_Y2: i64 = 39420360;

/// t1 = ax + az, t2 = ax - az.
fn mont_prep(ax: &Fe25519, az: &Fe25519) -> (Fe25519, Fe25519) {
    (fe25519::add(ax, az), fe25519::sub(ax, az))
}

/// A = P + Q given X(P) = (t1+t2)/(t1-t2), X(Q) = (t3+t4)/(t3-t4) and
/// X(P-Q) = dx. Consumes t1 and t2, preserves t3 and t4.
fn mont_add(
    t1: Fe25519,
    t2: Fe25519,
    t3: &Fe25519,
    t4: &Fe25519,
    dx: &Fe25519,
) -> (Fe25519, Fe25519) {
    let ax = fe25519::mul(&t2, t3);
    let az = fe25519::mul(&t1, t4);
    let sum = fe25519::add(&ax, &az);
    let dif = fe25519::sub(&ax, &az);
    let bx = fe25519::sqr(&sum);
    let t = fe25519::sqr(&dif);
    let bz = fe25519::mul(&t, dx);
    (bx, bz)
}

/// B = 2 Q given X(Q) = (t3+t4)/(t3-t4).
fn mont_dbl(t3: &Fe25519, t4: &Fe25519) -> (Fe25519, Fe25519) {
    let t1 = fe25519::sqr(t3);
    let t2 = fe25519::sqr(t4);
    let bx = fe25519::mul(&t1, &t2);
    let t2 = fe25519::sub(&t1, &t2);
    let mut bz = fe25519::mul_small(&t2, A24);
    bz = fe25519::add(&t1, &bz);
    (bx, fe25519::mul(&bz, &t2))
}

/// The right-hand side of the curve equation: x^3 + 486662 x^2 + x.
fn x_to_y2(x: &Fe25519) -> Fe25519 {
    let mut t = fe25519::sqr(x);
    let y2 = fe25519::mul_small(x, A);
    t = fe25519::add(&t, &y2);
    t[0] += 1;
    fe25519::mul(&t, x)
}

/// Runs the 256-bit ladder for an already-clamped exponent `k` from the
/// base x-coordinate `dx`. Returns both tracks: index 0 holds kG, index 1
/// holds (k+1)G, with X(track1) - X(track0) = dx throughout.
fn ladder(k: &[u8; 32], dx: &Fe25519) -> ([Fe25519; 2], [Fe25519; 2]) {
    /* 0G = point at infinity, 1G = the base */
    let mut x = [fe25519::set(1), *dx];
    let mut z = [fe25519::zero(), fe25519::set(1)];

    for i in (0..32).rev() {
        for j in (0..8).rev() {
            /* swap arguments depending on the bit */
            let bit1 = usize::from(k[i] >> j & 1);
            let bit0 = bit1 ^ 1;

            /* a' = a + b, b' = 2 b */
            let (t1, t2) = mont_prep(&x[bit0], &z[bit0]);
            let (t3, t4) = mont_prep(&x[bit1], &z[bit1]);
            let (ax, az) = mont_add(t1, t2, &t3, &t4, dx);
            let (bx, bz) = mont_dbl(&t3, &t4);
            x[bit0] = ax;
            z[bit0] = az;
            x[bit1] = bx;
            z[bit1] = bz;
        }
    }

    (x, z)
}

/// X(kG) for the standard base point, as 32 bytes. The scalar is clamped
/// before use.
pub fn scalar_base_mult(k: &[u8; 32]) -> [u8; 32] {
    let mut e = *k;
    scalar::clamp(&mut e);
    let gx = fe25519::set(BASE_X);
    let (x, z) = ladder(&e, &gx);
    let t = fe25519::recip(&z[0], false);
    fe25519::pack(&fe25519::mul(&x[0], &t))
}

/// X(k * P) for a peer x-coordinate `p`, as 32 bytes. The scalar is clamped
/// before use.
pub fn scalar_mult(k: &[u8; 32], p: &[u8; 32]) -> [u8; 32] {
    let mut e = *k;
    scalar::clamp(&mut e);
    let dx = fe25519::unpack(p);
    let (x, z) = ladder(&e, &dx);
    let t = fe25519::recip(&z[0], false);
    fe25519::pack(&fe25519::mul(&x[0], &t))
}

/// Key generation for signing: returns the public key P = kG together with
/// the signing exponent s satisfying s |P| = G. The scalar is clamped
/// before use.
pub fn keygen(k: &[u8; 32]) -> ([u8; 32], [u8; 32]) {
    let mut e = *k;
    scalar::clamp(&mut e);
    let gx = fe25519::set(BASE_X);
    let (x, z) = ladder(&e, &gx);
    let t1 = fe25519::recip(&z[0], false);
    let px = fe25519::mul(&x[0], &t1);
    let pk = fe25519::pack(&px);

    let py2 = x_to_y2(&px); /* Py^2 */
    let t3 = fe25519::recip(&z[1], false); /* where Q = P + G ... */
    let mut t2 = fe25519::mul(&x[1], &t3); /* t2 = Qx */
    t2 = fe25519::add(&t2, &px); /* t2 = Qx + Px */
    t2[0] += BASE_X + A; /* t2 = Qx + Px + Gx + 486662 */
    let mut dx = px;
    dx[0] -= BASE_X; /* dx = Px - Gx */
    let t3 = fe25519::sqr(&dx); /* t3 = (Px - Gx)^2 */
    dx = fe25519::mul(&t2, &t3); /* dx = t2 (Px - Gx)^2 */
    dx = fe25519::sub(&dx, &py2); /* dx = t2 (Px - Gx)^2 - Py^2 */
    dx[0] -= BASE_Y2; /* dx = t2 (Px - Gx)^2 - Py^2 - Gy^2 */
    let t1 = fe25519::mul(&dx, &BASE_R2Y); /* t1 = -Py */

    let mut s = [0u8; 32];
    if fe25519::is_negative(&t1) {
        /* sign is 1, so just copy */
        s.copy_from_slice(&e);
    } else {
        /* sign is -1, so negate */
        s = ORDER_TIMES_8;
        scalar::mula_small(&mut s, 0, &e, 32, -1);
    }

    /* the reduction of s modulo the group order is skipped here: egcd32
     * takes the unreduced value as-is */

    /* take the reciprocal of s modulo the group order */
    let mut a = s;
    let mut b = ORDER;
    s = scalar::egcd32(&mut a, &mut b);
    if s[31] & 0x80 != 0 {
        scalar::mula_small(&mut s, 0, &ORDER, 32, 1);
    }

    (pk, s)
}

/// Y = v P + h G, the combined two-scalar multiplication used to recover
/// the signature public point. Runs three (X, Z) tracks in lock-step:
///
///   y[0] is (even)P + (even)G
///   y[1] is (even)P + (odd)G   if the current d-bit is 0
///   y[1] is (odd)P + (even)G   if the current d-bit is 1
///   y[2] is (odd)P + (odd)G
///
/// The direction vector d encodes the running carries of v and h so every
/// step needs only differential additions against P, G, P+G or P-G.
pub fn double_scalar_mult(v: &[u8; 32], h: &[u8; 32], p: &[u8; 32]) -> [u8; 32] {
    let mut d = [0u8; 32];

    /* p_pts[0] = G, p_pts[1] = P */
    let p_pts = [fe25519::set(BASE_X), fe25519::unpack(p)];
    let mut s_pts = [fe25519::zero(); 2];
    let mut t1 = [fe25519::zero(); 3];
    let mut t2 = [fe25519::zero(); 3];

    /* s_pts[0] = X(P+G), s_pts[1] = X(P-G):
     *   (Py^2 + Gy^2 -+ 2 Py Gy)/(Px - Gx)^2 - Px - Gx - 486662 */
    t2[0] = x_to_y2(&p_pts[1]); /* t2[0] = Py^2 */
    t1[0] = fe25519::sqrt(&t2[0]); /* t1[0] = Py or -Py */
    let j = usize::from(fe25519::is_negative(&t1[0]));
    t2[0][0] += BASE_Y2; /* t2[0] = Py^2 + Gy^2 */
    t2[1] = fe25519::mul(&BASE_2Y, &t1[0]); /* t2[1] = +-2 Py Gy */
    t1[j] = fe25519::sub(&t2[0], &t2[1]); /* t1[0] = Py^2 + Gy^2 - 2 Py Gy */
    t1[1 - j] = fe25519::add(&t2[0], &t2[1]); /* t1[1] = Py^2 + Gy^2 + 2 Py Gy */
    t2[0] = p_pts[1]; /* t2[0] = Px */
    t2[0][0] -= BASE_X; /* t2[0] = Px - Gx */
    t2[1] = fe25519::sqr(&t2[0]); /* t2[1] = (Px - Gx)^2 */
    t2[0] = fe25519::recip(&t2[1], false); /* t2[0] = 1/(Px - Gx)^2 */
    s_pts[0] = fe25519::mul(&t1[0], &t2[0]);
    s_pts[0] = fe25519::sub(&s_pts[0], &p_pts[1]);
    s_pts[0][0] -= BASE_X + A; /* s_pts[0] = X(P+G) */
    s_pts[1] = fe25519::mul(&t1[1], &t2[0]);
    s_pts[1] = fe25519::sub(&s_pts[1], &p_pts[1]);
    s_pts[1][0] -= BASE_X + A; /* s_pts[1] = X(P-G) */
    s_pts[0] = fe25519::mul_small(&s_pts[0], 1); /* reduce s_pts[0] */
    s_pts[1] = fe25519::mul_small(&s_pts[1], 1); /* reduce s_pts[1] */

    /* prepare the chain */
    let (mut vi, mut hi, mut di, mut nvh): (i32, i32, i32, i32) = (0, 0, 0, 0);
    for i in 0..32 {
        vi = (vi >> 8) ^ i32::from(v[i]) ^ (i32::from(v[i]) << 1);
        hi = (hi >> 8) ^ i32::from(h[i]) ^ (i32::from(h[i]) << 1);
        nvh = !(vi ^ hi);
        di = (nvh & ((di & 0x80) >> 7)) ^ vi;
        di ^= nvh & ((di & 0x01) << 1);
        di ^= nvh & ((di & 0x02) << 1);
        di ^= nvh & ((di & 0x04) << 1);
        di ^= nvh & ((di & 0x08) << 1);
        di ^= nvh & ((di & 0x10) << 1);
        di ^= nvh & ((di & 0x20) << 1);
        di ^= nvh & ((di & 0x40) << 1);
        d[i] = di as u8;
    }

    di = ((nvh & ((di & 0x80) << 1)) ^ vi) >> 8;

    /* initialize state */
    let mut yx = [fe25519::set(1), p_pts[di as usize], s_pts[0]];
    let mut yz = [fe25519::zero(), fe25519::set(1), fe25519::set(1)];

    vi = 0;
    hi = 0;

    for i in (0..32).rev() {
        /* only the low 16 bits of the accumulators feed the step below, so
         * drop the rest instead of letting the shifts overflow */
        vi = ((vi << 8) | i32::from(v[i])) & 0xFFFF;
        hi = ((hi << 8) | i32::from(h[i])) & 0xFFFF;
        di = ((di << 8) | i32::from(d[i])) & 0xFFFF;
        for j in (0..8).rev() {
            let prep = [
                mont_prep(&yx[0], &yz[0]),
                mont_prep(&yx[1], &yz[1]),
                mont_prep(&yx[2], &yz[2]),
            ];

            let k = (((vi ^ (vi >> 1)) >> j & 1) + ((hi ^ (hi >> 1)) >> j & 1)) as usize;
            let (bx, bz) = mont_dbl(&prep[k].0, &prep[k].1);
            yx[0] = bx;
            yz[0] = bz;

            let k = ((di >> j & 2) ^ ((di >> j & 1) << 1)) as usize;
            let (ax, az) = mont_add(
                prep[1].0,
                prep[1].1,
                &prep[k].0,
                &prep[k].1,
                &p_pts[(di >> j & 1) as usize],
            );
            yx[1] = ax;
            yz[1] = az;

            let (ax, az) = mont_add(
                prep[2].0,
                prep[2].1,
                &prep[0].0,
                &prep[0].1,
                &s_pts[(((vi ^ hi) >> j & 2) >> 1) as usize],
            );
            yx[2] = ax;
            yz[2] = az;
        }
    }

    let k = usize::from(v[0] & 1) + usize::from(h[0] & 1);
    let t = fe25519::recip(&yz[k], false);
    fe25519::pack(&fe25519::mul(&yx[k], &t))
}

#[cfg(test)]
mod tests {
    use rand::{thread_rng, Rng};

    use super::*;

    #[test]
    fn keygen_matches_scalar_base_mult() {
        for _ in 0..4 {
            let k: [u8; 32] = thread_rng().gen();
            let (pk, _) = keygen(&k);
            assert_eq!(pk, scalar_base_mult(&k));
        }
    }

    #[test]
    fn base_mult_is_mult_by_nine() {
        let mut nine = [0u8; 32];
        nine[0] = 9;
        for _ in 0..4 {
            let k: [u8; 32] = thread_rng().gen();
            assert_eq!(scalar_base_mult(&k), scalar_mult(&k, &nine));
        }
    }

    #[test]
    fn signing_exponent_high_bit_clear() {
        // the egcd result is fixed up into [0, q), which clears bit 255
        for _ in 0..4 {
            let k: [u8; 32] = thread_rng().gen();
            let (_, s) = keygen(&k);
            assert_eq!(s[31] & 0x80, 0);
        }
    }
}
