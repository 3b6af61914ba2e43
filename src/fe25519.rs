//! Arithmetic modulo p = 2^255 - 19 on ten signed 64-bit limbs.
//!
//! Limb `i` holds the coefficient of 2^ceil(25.5 * i), so limb widths
//! alternate 26, 25, 26, 25, ... bits starting from limb 0. Inputs to [mul],
//! [sqr] and [mul_small] need not be reduced; their outputs are. Inputs to
//! [add] and [sub] must be reduced and their outputs are not; multiply by
//! one first if an unreduced value needs to be added again.

pub type Fe25519 = [i64; 10];

pub const P25: i64 = (1 << 25) - 1;
pub const P26: i64 = (1 << 26) - 1;

/// 2 * Gy, where Gy is the ordinate of the base point.
pub const BASE_2Y: Fe25519 = [
    39999547, 18689728, 59995525, 1648697, 57546132, 24010086, 19059592, 5425144, 63499247,
    16420658,
];

/// -1 / (2 * Gy).
pub const BASE_R2Y: Fe25519 = [
    5744, 8160848, 4790893, 13779497, 35730846, 12541209, 49101323, 30047407, 40071253, 6226132,
];

pub const fn zero() -> Fe25519 {
    [0; 10]
}

/// A small constant. `k` must be in -185861411..=185861411 so a follow-on
/// [mul_small] cannot overflow.
pub const fn set(k: i64) -> Fe25519 {
    let mut x = [0; 10];
    x[0] = k;
    x
}

/// Decodes 32 little-endian bytes into limb form. Bit 255 is kept, so one
/// signed high bit can survive intermediate computations.
pub fn unpack(m: &[u8; 32]) -> Fe25519 {
    let b = |i: usize| i64::from(m[i]);
    [
        b(0) | b(1) << 8 | b(2) << 16 | (b(3) & 3) << 24,
        (b(3) & !3) >> 2 | b(4) << 6 | b(5) << 14 | (b(6) & 7) << 22,
        (b(6) & !7) >> 3 | b(7) << 5 | b(8) << 13 | (b(9) & 31) << 21,
        (b(9) & !31) >> 5 | b(10) << 3 | b(11) << 11 | (b(12) & 63) << 19,
        (b(12) & !63) >> 6 | b(13) << 2 | b(14) << 10 | b(15) << 18,
        b(16) | b(17) << 8 | b(18) << 16 | (b(19) & 1) << 24,
        (b(19) & !1) >> 1 | b(20) << 7 | b(21) << 15 | (b(22) & 7) << 23,
        (b(22) & !7) >> 3 | b(23) << 5 | b(24) << 13 | (b(25) & 15) << 21,
        (b(25) & !15) >> 4 | b(26) << 4 | b(27) << 12 | (b(28) & 63) << 20,
        (b(28) & !63) >> 6 | b(29) << 2 | b(30) << 10 | b(31) << 18,
    ]
}

/// True iff the reduced-form input is >= 2^255 - 19.
pub fn is_overflow(x: &Fe25519) -> bool {
    (x[0] > P26 - 19
        && (x[1] & x[3] & x[5] & x[7] & x[9]) == P25
        && (x[2] & x[4] & x[6] & x[8]) == P26)
        || x[9] > P25
}

/// Serializes to 32 little-endian bytes, conditionally subtracting p first
/// so the output value lies in [0, p). The input must be in the reduced form
/// produced by [unpack], [mul], [sqr], [mul_small], or [set] of a value in
/// 0..=P25.
pub fn pack(x: &Fe25519) -> [u8; 32] {
    let mut ld = i64::from(is_overflow(x)) - i64::from(x[9] < 0);
    let ud = ld * -(P25 + 1);
    ld *= 19;

    let mut m = [0u8; 32];
    let mut t = ld + x[0] + (x[1] << 26);
    m[0] = t as u8;
    m[1] = (t >> 8) as u8;
    m[2] = (t >> 16) as u8;
    m[3] = (t >> 24) as u8;
    t = (t >> 32) + (x[2] << 19);
    m[4] = t as u8;
    m[5] = (t >> 8) as u8;
    m[6] = (t >> 16) as u8;
    m[7] = (t >> 24) as u8;
    t = (t >> 32) + (x[3] << 13);
    m[8] = t as u8;
    m[9] = (t >> 8) as u8;
    m[10] = (t >> 16) as u8;
    m[11] = (t >> 24) as u8;
    t = (t >> 32) + (x[4] << 6);
    m[12] = t as u8;
    m[13] = (t >> 8) as u8;
    m[14] = (t >> 16) as u8;
    m[15] = (t >> 24) as u8;
    t = (t >> 32) + x[5] + (x[6] << 25);
    m[16] = t as u8;
    m[17] = (t >> 8) as u8;
    m[18] = (t >> 16) as u8;
    m[19] = (t >> 24) as u8;
    t = (t >> 32) + (x[7] << 19);
    m[20] = t as u8;
    m[21] = (t >> 8) as u8;
    m[22] = (t >> 16) as u8;
    m[23] = (t >> 24) as u8;
    t = (t >> 32) + (x[8] << 12);
    m[24] = t as u8;
    m[25] = (t >> 8) as u8;
    m[26] = (t >> 16) as u8;
    m[27] = (t >> 24) as u8;
    t = (t >> 32) + ((x[9] + ud) << 6);
    m[28] = t as u8;
    m[29] = (t >> 8) as u8;
    m[30] = (t >> 16) as u8;
    m[31] = (t >> 24) as u8;
    m
}

pub fn add(x: &Fe25519, y: &Fe25519) -> Fe25519 {
    core::array::from_fn(|i| x[i] + y[i])
}

pub fn sub(x: &Fe25519, y: &Fe25519) -> Fe25519 {
    core::array::from_fn(|i| x[i] - y[i])
}

/// Multiplies by a small integer in -185861411..=185861411. The carry pass
/// starts at limb 8 so the 19-fold wrap of limb 9 lands back in limb 0.
pub fn mul_small(x: &Fe25519, y: i64) -> Fe25519 {
    let mut xy = [0i64; 10];
    let mut t = x[8] * y;
    xy[8] = t & P26;
    t = (t >> 26) + x[9] * y;
    xy[9] = t & P25;
    t = 19 * (t >> 25) + x[0] * y;
    xy[0] = t & P26;
    t = (t >> 26) + x[1] * y;
    xy[1] = t & P25;
    t = (t >> 25) + x[2] * y;
    xy[2] = t & P26;
    t = (t >> 26) + x[3] * y;
    xy[3] = t & P25;
    t = (t >> 25) + x[4] * y;
    xy[4] = t & P26;
    t = (t >> 26) + x[5] * y;
    xy[5] = t & P25;
    t = (t >> 25) + x[6] * y;
    xy[6] = t & P26;
    t = (t >> 26) + x[7] * y;
    xy[7] = t & P25;
    t = (t >> 25) + xy[8];
    xy[8] = t & P26;
    xy[9] += t >> 26;
    xy
}

/// Schoolbook product using 2^255 = 19 (mod p). Cross terms whose limb
/// indices sum past 9 fold back times 19; terms straddling a 25/26-bit
/// boundary carry an extra factor of 2. The carry chain runs 8, 9, 0..7
/// and closes the ring.
pub fn mul(x: &Fe25519, y: &Fe25519) -> Fe25519 {
    let mut xy = [0i64; 10];
    let mut t = x[0] * y[8]
        + x[2] * y[6]
        + x[4] * y[4]
        + x[6] * y[2]
        + x[8] * y[0]
        + 2 * (x[1] * y[7] + x[3] * y[5] + x[5] * y[3] + x[7] * y[1])
        + 38 * (x[9] * y[9]);
    xy[8] = t & P26;
    t = (t >> 26)
        + x[0] * y[9]
        + x[1] * y[8]
        + x[2] * y[7]
        + x[3] * y[6]
        + x[4] * y[5]
        + x[5] * y[4]
        + x[6] * y[3]
        + x[7] * y[2]
        + x[8] * y[1]
        + x[9] * y[0];
    xy[9] = t & P25;
    t = x[0] * y[0]
        + 19 * ((t >> 25) + x[2] * y[8] + x[4] * y[6] + x[6] * y[4] + x[8] * y[2])
        + 38 * (x[1] * y[9] + x[3] * y[7] + x[5] * y[5] + x[7] * y[3] + x[9] * y[1]);
    xy[0] = t & P26;
    t = (t >> 26)
        + x[0] * y[1]
        + x[1] * y[0]
        + 19 * (x[2] * y[9]
            + x[3] * y[8]
            + x[4] * y[7]
            + x[5] * y[6]
            + x[6] * y[5]
            + x[7] * y[4]
            + x[8] * y[3]
            + x[9] * y[2]);
    xy[1] = t & P25;
    t = (t >> 25)
        + x[0] * y[2]
        + x[2] * y[0]
        + 19 * (x[4] * y[8] + x[6] * y[6] + x[8] * y[4])
        + 2 * (x[1] * y[1])
        + 38 * (x[3] * y[9] + x[5] * y[7] + x[7] * y[5] + x[9] * y[3]);
    xy[2] = t & P26;
    t = (t >> 26)
        + x[0] * y[3]
        + x[1] * y[2]
        + x[2] * y[1]
        + x[3] * y[0]
        + 19 * (x[4] * y[9]
            + x[5] * y[8]
            + x[6] * y[7]
            + x[7] * y[6]
            + x[8] * y[5]
            + x[9] * y[4]);
    xy[3] = t & P25;
    t = (t >> 25)
        + x[0] * y[4]
        + x[2] * y[2]
        + x[4] * y[0]
        + 19 * (x[6] * y[8] + x[8] * y[6])
        + 2 * (x[1] * y[3] + x[3] * y[1])
        + 38 * (x[5] * y[9] + x[7] * y[7] + x[9] * y[5]);
    xy[4] = t & P26;
    t = (t >> 26)
        + x[0] * y[5]
        + x[1] * y[4]
        + x[2] * y[3]
        + x[3] * y[2]
        + x[4] * y[1]
        + x[5] * y[0]
        + 19 * (x[6] * y[9] + x[7] * y[8] + x[8] * y[7] + x[9] * y[6]);
    xy[5] = t & P25;
    t = (t >> 25)
        + x[0] * y[6]
        + x[2] * y[4]
        + x[4] * y[2]
        + x[6] * y[0]
        + 19 * (x[8] * y[8])
        + 2 * (x[1] * y[5] + x[3] * y[3] + x[5] * y[1])
        + 38 * (x[7] * y[9] + x[9] * y[7]);
    xy[6] = t & P26;
    t = (t >> 26)
        + x[0] * y[7]
        + x[1] * y[6]
        + x[2] * y[5]
        + x[3] * y[4]
        + x[4] * y[3]
        + x[5] * y[2]
        + x[6] * y[1]
        + x[7] * y[0]
        + 19 * (x[8] * y[9] + x[9] * y[8]);
    xy[7] = t & P25;
    t = (t >> 25) + xy[8];
    xy[8] = t & P26;
    xy[9] += t >> 26;
    xy
}

/// Squaring, the symmetric collection of [mul]'s cross terms.
pub fn sqr(x: &Fe25519) -> Fe25519 {
    let mut x2 = [0i64; 10];
    let mut t = x[4] * x[4]
        + 2 * (x[0] * x[8] + x[2] * x[6])
        + 38 * (x[9] * x[9])
        + 4 * (x[1] * x[7] + x[3] * x[5]);
    x2[8] = t & P26;
    t = (t >> 26) + 2 * (x[0] * x[9] + x[1] * x[8] + x[2] * x[7] + x[3] * x[6] + x[4] * x[5]);
    x2[9] = t & P25;
    t = 19 * (t >> 25)
        + x[0] * x[0]
        + 38 * (x[2] * x[8] + x[4] * x[6] + x[5] * x[5])
        + 76 * (x[1] * x[9] + x[3] * x[7]);
    x2[0] = t & P26;
    t = (t >> 26)
        + 2 * (x[0] * x[1])
        + 38 * (x[2] * x[9] + x[3] * x[8] + x[4] * x[7] + x[5] * x[6]);
    x2[1] = t & P25;
    t = (t >> 25)
        + 19 * (x[6] * x[6])
        + 2 * (x[0] * x[2] + x[1] * x[1])
        + 38 * (x[4] * x[8])
        + 76 * (x[3] * x[9] + x[5] * x[7]);
    x2[2] = t & P26;
    t = (t >> 26)
        + 2 * (x[0] * x[3] + x[1] * x[2])
        + 38 * (x[4] * x[9] + x[5] * x[8] + x[6] * x[7]);
    x2[3] = t & P25;
    t = (t >> 25)
        + x[2] * x[2]
        + 2 * (x[0] * x[4])
        + 38 * (x[6] * x[8] + x[7] * x[7])
        + 4 * (x[1] * x[3])
        + 76 * (x[5] * x[9]);
    x2[4] = t & P26;
    t = (t >> 26)
        + 2 * (x[0] * x[5] + x[1] * x[4] + x[2] * x[3])
        + 38 * (x[6] * x[9] + x[7] * x[8]);
    x2[5] = t & P25;
    t = (t >> 25)
        + 19 * (x[8] * x[8])
        + 2 * (x[0] * x[6] + x[2] * x[4] + x[3] * x[3])
        + 4 * (x[1] * x[5])
        + 76 * (x[7] * x[9]);
    x2[6] = t & P26;
    t = (t >> 26)
        + 2 * (x[0] * x[7] + x[1] * x[6] + x[2] * x[5] + x[3] * x[4])
        + 38 * (x[8] * x[9]);
    x2[7] = t & P25;
    t = (t >> 25) + x2[8];
    x2[8] = t & P26;
    x2[9] += t >> 26;
    x2
}

/// Computes x^(p-2), the reciprocal; with `sqrt_assist` it instead computes
/// x^((p-5)/8) for [sqrt]. The chain for x^(2^255 - 21) is straight from
/// djb's implementation.
pub fn recip(x: &Fe25519, sqrt_assist: bool) -> Fe25519 {
    let mut t1 = sqr(x); /*  2 == 2 * 1  */
    let mut t2 = sqr(&t1); /*  4 == 2 * 2  */
    let mut t0 = sqr(&t2); /*  8 == 2 * 4  */
    t2 = mul(&t0, x); /*  9 == 8 + 1  */
    t0 = mul(&t2, &t1); /* 11 == 9 + 2  */
    t1 = sqr(&t0); /* 22 == 2 * 11 */
    let mut t3 = mul(&t1, &t2); /* 31 == 22 + 9 == 2^5 - 2^0 */
    t1 = sqr(&t3); /* 2^6  - 2^1 */
    t2 = sqr(&t1); /* 2^7  - 2^2 */
    t1 = sqr(&t2); /* 2^8  - 2^3 */
    t2 = sqr(&t1); /* 2^9  - 2^4 */
    t1 = sqr(&t2); /* 2^10 - 2^5 */
    t2 = mul(&t1, &t3); /* 2^10 - 2^0 */
    t1 = sqr(&t2); /* 2^11 - 2^1 */
    t3 = sqr(&t1); /* 2^12 - 2^2 */
    for _ in 1..5 {
        t1 = sqr(&t3);
        t3 = sqr(&t1);
    } /* 2^20 - 2^10 */
    t1 = mul(&t3, &t2); /* 2^20 - 2^0 */
    t3 = sqr(&t1); /* 2^21 - 2^1 */
    let mut t4 = sqr(&t3); /* 2^22 - 2^2 */
    for _ in 1..10 {
        t3 = sqr(&t4);
        t4 = sqr(&t3);
    } /* 2^40 - 2^20 */
    t3 = mul(&t4, &t1); /* 2^40 - 2^0 */
    for _ in 0..5 {
        t1 = sqr(&t3);
        t3 = sqr(&t1);
    } /* 2^50 - 2^10 */
    t1 = mul(&t3, &t2); /* 2^50 - 2^0 */
    t2 = sqr(&t1); /* 2^51 - 2^1 */
    t3 = sqr(&t2); /* 2^52 - 2^2 */
    for _ in 1..25 {
        t2 = sqr(&t3);
        t3 = sqr(&t2);
    } /* 2^100 - 2^50 */
    t2 = mul(&t3, &t1); /* 2^100 - 2^0 */
    t3 = sqr(&t2); /* 2^101 - 2^1 */
    t4 = sqr(&t3); /* 2^102 - 2^2 */
    for _ in 1..50 {
        t3 = sqr(&t4);
        t4 = sqr(&t3);
    } /* 2^200 - 2^100 */
    t3 = mul(&t4, &t2); /* 2^200 - 2^0 */
    for _ in 0..25 {
        t4 = sqr(&t3);
        t3 = sqr(&t4);
    } /* 2^250 - 2^50 */
    t2 = mul(&t3, &t1); /* 2^250 - 2^0 */
    t1 = sqr(&t2); /* 2^251 - 2^1 */
    t2 = sqr(&t1); /* 2^252 - 2^2 */
    if sqrt_assist {
        mul(x, &t2) /* 2^252 - 3 */
    } else {
        t1 = sqr(&t2); /* 2^253 - 2^3 */
        t2 = sqr(&t1); /* 2^254 - 2^4 */
        t1 = sqr(&t2); /* 2^255 - 2^5 */
        mul(&t1, &t0) /* 2^255 - 21 */
    }
}

/// Parity of the canonical value; requires reduced input.
pub fn is_negative(x: &Fe25519) -> bool {
    (i64::from(is_overflow(x) || x[9] < 0) ^ (x[0] & 1)) != 0
}

/// One of the two square roots of `u`, for p = 5 (mod 8):
/// x = u v (2uv^2 - 1) with v = (2u)^((p-5)/8). The caller picks the sign
/// via [is_negative].
pub fn sqrt(u: &Fe25519) -> Fe25519 {
    let t1 = add(u, u); /* t1 = 2u */
    let v = recip(&t1, true); /* v = (2u)^((p-5)/8) */
    let x = sqr(&v); /* x = v^2 */
    let mut t2 = mul(&t1, &x); /* t2 = 2uv^2 */
    t2[0] -= 1; /* t2 = 2uv^2 - 1 */
    let t1 = mul(&v, &t2); /* t1 = v(2uv^2 - 1) */
    mul(u, &t1) /* x = uv(2uv^2 - 1) */
}
