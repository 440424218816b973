//! The capped arbitrary-precision signed decimal integer.
//!
//! A [`BigInt`] stores its magnitude as little-endian base-10^9 limbs with
//! the sign kept separately. The base is chosen so the product of two limbs
//! fits in 64 bits, which keeps every kernel in plain integer arithmetic.
//!
//! Every operation produces a normalized value: no redundant leading zero
//! limbs, and zero is always non-negative with exactly one limb.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use num_traits::{One, Zero};
use smallvec::SmallVec;

use crate::error::{BigIntError, ParseBigIntError};

/// The limb base. One limb holds nine decimal digits.
const BASE: u64 = 1_000_000_000;

/// Decimal digits per limb.
const BASE_DIGITS: usize = 9;

/// Limb storage. Values below 10^27 stay inline on the stack.
pub(crate) type LimbVec = SmallVec<[u32; 3]>;

/// An arbitrary precision signed integer with a fixed magnitude cap.
///
/// The magnitude is a little-endian sequence of base-10^9 limbs; the sign
/// is stored separately and is never negative for zero. Addition,
/// subtraction and multiplication reject results above
/// [`BigInt::MAX_DECIMAL_DIGITS`] decimal digits with
/// [`BigIntError::Overflow`]; division and modulo cannot grow a magnitude
/// and are exempt.
///
/// Division truncates toward zero and the remainder takes the dividend's
/// sign, matching Rust's primitive integers: `-7 / 2 == -3` and
/// `-7 % 2 == -1`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    pub(crate) negative: bool,
    pub(crate) limbs: LimbVec,
}

// Unsigned magnitude kernels. Slices are little-endian and, except for the
// intermediate buffers inside multiplication and division, normalized.

fn mag_trim(limbs: &mut LimbVec) {
    while limbs.len() > 1 && limbs.last() == Some(&0) {
        limbs.pop();
    }
}

fn mag_cmp(a: &[u32], b: &[u32]) -> Ordering {
    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }
    for (x, y) in a.iter().rev().zip(b.iter().rev()) {
        if x != y {
            return x.cmp(y);
        }
    }
    Ordering::Equal
}

fn mag_add(a: &[u32], b: &[u32]) -> LimbVec {
    let len = a.len().max(b.len());
    let mut out = LimbVec::with_capacity(len + 1);
    let mut carry = 0u64;
    for i in 0..len {
        let x = u64::from(a.get(i).copied().unwrap_or(0));
        let y = u64::from(b.get(i).copied().unwrap_or(0));
        let sum = x + y + carry;
        out.push((sum % BASE) as u32);
        carry = sum / BASE;
    }
    if carry != 0 {
        out.push(carry as u32);
    }
    out
}

/// Requires `a >= b`.
fn mag_sub(a: &[u32], b: &[u32]) -> LimbVec {
    let mut out = LimbVec::with_capacity(a.len());
    let mut borrow = 0u64;
    for (i, &limb) in a.iter().enumerate() {
        let x = u64::from(limb);
        let y = u64::from(b.get(i).copied().unwrap_or(0)) + borrow;
        if x < y {
            out.push((BASE + x - y) as u32);
            borrow = 1;
        } else {
            out.push((x - y) as u32);
            borrow = 0;
        }
    }
    out
}

fn mag_mul(a: &[u32], b: &[u32]) -> LimbVec {
    // Generously pre-sized so the carry tail never reallocates.
    let mut out = LimbVec::from_elem(0, a.len() + b.len() + 2);
    for (i, &x) in a.iter().enumerate() {
        let x = u64::from(x);
        let mut carry = 0u64;
        let mut j = 0;
        while j < b.len() || carry != 0 {
            let y = u64::from(b.get(j).copied().unwrap_or(0));
            let cur = u64::from(out[i + j]) + x * y + carry;
            out[i + j] = (cur % BASE) as u32;
            carry = cur / BASE;
            j += 1;
        }
    }
    out
}

/// Returns a normalized magnitude; a zero product is `[0]` regardless of
/// `a`'s length, so length-first comparison against it stays valid.
fn mag_mul_limb(a: &[u32], m: u32) -> LimbVec {
    let m = u64::from(m);
    let mut out = LimbVec::with_capacity(a.len() + 1);
    let mut carry = 0u64;
    for &limb in a {
        let cur = u64::from(limb) * m + carry;
        out.push((cur % BASE) as u32);
        carry = cur / BASE;
    }
    while carry != 0 {
        out.push((carry % BASE) as u32);
        carry /= BASE;
    }
    if out.is_empty() {
        out.push(0);
    }
    mag_trim(&mut out);
    out
}

/// Signed addition over (sign, magnitude) pairs.
///
/// Opposite signs reduce to a magnitude subtraction; the operand with the
/// larger magnitude decides the sign, the first operand winning ties (the
/// tie is a zero result, which normalization makes non-negative).
fn add_with_signs(a_neg: bool, a: &[u32], b_neg: bool, b: &[u32]) -> BigInt {
    if a_neg == b_neg {
        BigInt::from_parts(a_neg, mag_add(a, b))
    } else if mag_cmp(a, b) == Ordering::Less {
        BigInt::from_parts(b_neg, mag_sub(b, a))
    } else {
        BigInt::from_parts(a_neg, mag_sub(a, b))
    }
}

impl BigInt {
    /// Maximum decimal digit count a value may hold.
    pub const MAX_DECIMAL_DIGITS: usize = 30_009;

    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self::from(value)
    }

    /// Builds a normalized value from a sign and a raw magnitude.
    pub(crate) fn from_parts(negative: bool, mut limbs: LimbVec) -> Self {
        if limbs.is_empty() {
            limbs.push(0);
        }
        mag_trim(&mut limbs);
        let negative = negative && !(limbs.len() == 1 && limbs[0] == 0);
        Self { negative, limbs }
    }

    fn from_sign_magnitude(negative: bool, magnitude: u128) -> Self {
        let mut limbs = LimbVec::new();
        let mut m = magnitude;
        while m != 0 {
            limbs.push((m % u128::from(BASE)) as u32);
            m /= u128::from(BASE);
        }
        Self::from_parts(negative, limbs)
    }

    /// Parses an optionally `+`/`-`-prefixed decimal digit string.
    ///
    /// The empty string parses to zero. Leading zeros and `-0` are accepted
    /// and normalized away.
    ///
    /// # Errors
    ///
    /// Returns [`ParseBigIntError::Empty`] for a bare sign and
    /// [`ParseBigIntError::InvalidDigit`] for any non-digit character after
    /// the optional sign.
    pub fn from_decimal_str(s: &str) -> Result<Self, ParseBigIntError> {
        if s.is_empty() {
            return Ok(Self::default());
        }
        let (negative, digits) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = s.strip_prefix('+') {
            (false, rest)
        } else {
            (false, s)
        };
        if digits.is_empty() {
            return Err(ParseBigIntError::Empty);
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseBigIntError::InvalidDigit);
        }
        // Chunk boundaries are aligned to the least-significant end.
        let mut limbs = LimbVec::with_capacity(digits.len() / BASE_DIGITS + 1);
        for chunk in digits.as_bytes().rchunks(BASE_DIGITS) {
            let limb = chunk.iter().fold(0u32, |acc, &b| acc * 10 + u32::from(b - b'0'));
            limbs.push(limb);
        }
        Ok(Self::from_parts(negative, limbs))
    }

    /// Returns true if this integer is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 0
    }

    /// Returns true if this integer is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            limbs: self.limbs.clone(),
        }
    }

    /// Returns the number of decimal digits in the magnitude.
    ///
    /// Zero counts as one digit.
    #[must_use]
    pub fn decimal_digits(&self) -> usize {
        let (top, rest) = match self.limbs.split_last() {
            Some((&top, rest)) => (top, rest.len()),
            None => return 0,
        };
        let mut digits = rest * BASE_DIGITS + 1;
        let mut t = top / 10;
        while t > 0 {
            digits += 1;
            t /= 10;
        }
        digits
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        let mut mag = 0u128;
        for &limb in self.limbs.iter().rev() {
            mag = mag * u128::from(BASE) + u128::from(limb);
            if mag > u128::from(u64::MAX) {
                return None;
            }
        }
        let mag = i128::try_from(mag).ok()?;
        i64::try_from(if self.negative { -mag } else { mag }).ok()
    }

    fn check_cap(self) -> Result<Self, BigIntError> {
        if self.decimal_digits() > Self::MAX_DECIMAL_DIGITS {
            Err(BigIntError::Overflow)
        } else {
            Ok(self)
        }
    }

    /// Computes `self + rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`BigIntError::Overflow`] if the result exceeds the decimal
    /// digit cap; neither operand is affected.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, BigIntError> {
        add_with_signs(self.negative, &self.limbs, rhs.negative, &rhs.limbs).check_cap()
    }

    /// Computes `self - rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`BigIntError::Overflow`] if the result exceeds the decimal
    /// digit cap; neither operand is affected.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, BigIntError> {
        add_with_signs(self.negative, &self.limbs, !rhs.negative, &rhs.limbs).check_cap()
    }

    /// Computes `self * rhs` by the grade-school double loop.
    ///
    /// # Errors
    ///
    /// Returns [`BigIntError::Overflow`] if the result exceeds the decimal
    /// digit cap; neither operand is affected.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, BigIntError> {
        let limbs = mag_mul(&self.limbs, &rhs.limbs);
        Self::from_parts(self.negative != rhs.negative, limbs).check_cap()
    }

    /// Computes the truncating quotient and remainder of `self / rhs`.
    ///
    /// The magnitudes are divided by standard long division: the running
    /// remainder prefix gains one dividend limb per step, and each quotient
    /// limb is found by binary search over `[0, 10^9)` with a trial
    /// multiply-and-compare of the full divisor. The quotient's sign is the
    /// XOR of the operand signs; a nonzero remainder takes the dividend's
    /// sign. Neither result can exceed the digit cap.
    ///
    /// # Errors
    ///
    /// Returns [`BigIntError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div_rem(&self, rhs: &Self) -> Result<(Self, Self), BigIntError> {
        if rhs.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        if mag_cmp(&self.limbs, &rhs.limbs) == Ordering::Less {
            return Ok((Self::default(), self.clone()));
        }

        let divisor: &[u32] = &rhs.limbs;
        let mut quotient = LimbVec::from_elem(0, self.limbs.len());
        let mut cur = LimbVec::new();
        cur.push(0);

        for i in (0..self.limbs.len()).rev() {
            cur.insert(0, self.limbs[i]);
            mag_trim(&mut cur);

            // Largest x with divisor * x <= cur. x = 0 always satisfies the
            // test, so the search never underflows.
            let mut lo = 0u32;
            let mut hi = (BASE - 1) as u32;
            let mut x = 0u32;
            while lo <= hi {
                let mid = (lo + hi) / 2;
                if mag_cmp(&mag_mul_limb(divisor, mid), &cur) == Ordering::Greater {
                    hi = mid - 1;
                } else {
                    x = mid;
                    lo = mid + 1;
                }
            }
            quotient[i] = x;
            let mut rem = mag_sub(&cur, &mag_mul_limb(divisor, x));
            mag_trim(&mut rem);
            cur = rem;
        }

        let q = Self::from_parts(self.negative != rhs.negative, quotient);
        let r = Self::from_parts(self.negative, cur);
        Ok((q, r))
    }

    /// Computes `self / rhs`, truncating toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`BigIntError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, BigIntError> {
        self.checked_div_rem(rhs).map(|(q, _)| q)
    }

    /// Computes `self % rhs`; a nonzero result has the dividend's sign.
    ///
    /// # Errors
    ///
    /// Returns [`BigIntError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_rem(&self, rhs: &Self) -> Result<Self, BigIntError> {
        self.checked_div_rem(rhs).map(|(_, r)| r)
    }
}

impl Default for BigInt {
    fn default() -> Self {
        let mut limbs = LimbVec::new();
        limbs.push(0);
        Self {
            negative: false,
            limbs,
        }
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (negative, _) => {
                let mag = mag_cmp(&self.limbs, &other.limbs);
                if negative {
                    mag.reverse()
                } else {
                    mag
                }
            }
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        match self.limbs.split_last() {
            Some((top, rest)) => {
                write!(f, "{top}")?;
                for limb in rest.iter().rev() {
                    write!(f, "{limb:09}")?;
                }
            }
            None => f.write_str("0")?,
        }
        Ok(())
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({self})")
    }
}

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal_str(s)
    }
}

impl Zero for BigInt {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        BigInt::is_zero(self)
    }
}

impl One for BigInt {
    fn one() -> Self {
        Self::new(1)
    }

    fn is_one(&self) -> bool {
        !self.negative && self.limbs.len() == 1 && self.limbs[0] == 1
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),+ $(,)?) => {$(
        impl From<$t> for BigInt {
            fn from(value: $t) -> Self {
                Self::from_sign_magnitude(value < 0, value.unsigned_abs() as u128)
            }
        }
    )+};
}

macro_rules! impl_from_unsigned {
    ($($t:ty),+ $(,)?) => {$(
        impl From<$t> for BigInt {
            fn from(value: $t) -> Self {
                Self::from_sign_magnitude(false, value as u128)
            }
        }
    )+};
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);
impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
