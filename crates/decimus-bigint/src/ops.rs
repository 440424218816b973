//! Operator overloads for [`BigInt`].
//!
//! The `std::ops` operators delegate to the `checked_*` methods and panic
//! on [`BigIntError::Overflow`] or [`BigIntError::DivisionByZero`], the
//! same contract primitive integers have for overflow and `/ 0`. Callers
//! that need to recover use the checked methods directly.
//!
//! Mixed overloads accept an `i64` on either side of `+`, `-` and `*` (and
//! their compound forms) by converting it first.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use crate::bigint::BigInt;
use crate::error::BigIntError;

fn expect_ok(result: Result<BigInt, BigIntError>) -> BigInt {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{e}"),
    }
}

impl Neg for BigInt {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        // Never produce a negative zero.
        if !self.is_zero() {
            self.negative = !self.negative;
        }
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl Add for BigInt {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        expect_ok(self.checked_add(&rhs))
    }
}

impl Add<&BigInt> for BigInt {
    type Output = Self;

    fn add(self, rhs: &BigInt) -> Self::Output {
        expect_ok(self.checked_add(rhs))
    }
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: Self) -> Self::Output {
        expect_ok(self.checked_add(rhs))
    }
}

impl Sub for BigInt {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        expect_ok(self.checked_sub(&rhs))
    }
}

impl Sub<&BigInt> for BigInt {
    type Output = Self;

    fn sub(self, rhs: &BigInt) -> Self::Output {
        expect_ok(self.checked_sub(rhs))
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: Self) -> Self::Output {
        expect_ok(self.checked_sub(rhs))
    }
}

impl Mul for BigInt {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        expect_ok(self.checked_mul(&rhs))
    }
}

impl Mul<&BigInt> for BigInt {
    type Output = Self;

    fn mul(self, rhs: &BigInt) -> Self::Output {
        expect_ok(self.checked_mul(rhs))
    }
}

impl Mul for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: Self) -> Self::Output {
        expect_ok(self.checked_mul(rhs))
    }
}

impl Div for BigInt {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        expect_ok(self.checked_div(&rhs))
    }
}

impl Div<&BigInt> for BigInt {
    type Output = Self;

    fn div(self, rhs: &BigInt) -> Self::Output {
        expect_ok(self.checked_div(rhs))
    }
}

impl Div for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: Self) -> Self::Output {
        expect_ok(self.checked_div(rhs))
    }
}

impl Rem for BigInt {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        expect_ok(self.checked_rem(&rhs))
    }
}

impl Rem<&BigInt> for BigInt {
    type Output = Self;

    fn rem(self, rhs: &BigInt) -> Self::Output {
        expect_ok(self.checked_rem(rhs))
    }
}

impl Rem for &BigInt {
    type Output = BigInt;

    fn rem(self, rhs: Self) -> Self::Output {
        expect_ok(self.checked_rem(rhs))
    }
}

impl AddAssign for BigInt {
    fn add_assign(&mut self, rhs: Self) {
        *self = expect_ok(self.checked_add(&rhs));
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        *self = expect_ok(self.checked_add(rhs));
    }
}

impl SubAssign for BigInt {
    fn sub_assign(&mut self, rhs: Self) {
        *self = expect_ok(self.checked_sub(&rhs));
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        *self = expect_ok(self.checked_sub(rhs));
    }
}

impl MulAssign for BigInt {
    fn mul_assign(&mut self, rhs: Self) {
        *self = expect_ok(self.checked_mul(&rhs));
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        *self = expect_ok(self.checked_mul(rhs));
    }
}

impl DivAssign for BigInt {
    fn div_assign(&mut self, rhs: Self) {
        *self = expect_ok(self.checked_div(&rhs));
    }
}

impl DivAssign<&BigInt> for BigInt {
    fn div_assign(&mut self, rhs: &BigInt) {
        *self = expect_ok(self.checked_div(rhs));
    }
}

impl RemAssign for BigInt {
    fn rem_assign(&mut self, rhs: Self) {
        *self = expect_ok(self.checked_rem(&rhs));
    }
}

impl RemAssign<&BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: &BigInt) {
        *self = expect_ok(self.checked_rem(rhs));
    }
}

// Mixed-type convenience overloads with a native integer on either side.

impl Add<i64> for BigInt {
    type Output = Self;

    fn add(self, rhs: i64) -> Self::Output {
        self + BigInt::from(rhs)
    }
}

impl Add<i64> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: i64) -> Self::Output {
        self + &BigInt::from(rhs)
    }
}

impl Add<BigInt> for i64 {
    type Output = BigInt;

    fn add(self, rhs: BigInt) -> Self::Output {
        BigInt::from(self) + rhs
    }
}

impl Sub<i64> for BigInt {
    type Output = Self;

    fn sub(self, rhs: i64) -> Self::Output {
        self - BigInt::from(rhs)
    }
}

impl Sub<i64> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: i64) -> Self::Output {
        self - &BigInt::from(rhs)
    }
}

impl Sub<BigInt> for i64 {
    type Output = BigInt;

    fn sub(self, rhs: BigInt) -> Self::Output {
        BigInt::from(self) - rhs
    }
}

impl Mul<i64> for BigInt {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        self * BigInt::from(rhs)
    }
}

impl Mul<i64> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: i64) -> Self::Output {
        self * &BigInt::from(rhs)
    }
}

impl Mul<BigInt> for i64 {
    type Output = BigInt;

    fn mul(self, rhs: BigInt) -> Self::Output {
        BigInt::from(self) * rhs
    }
}

impl AddAssign<i64> for BigInt {
    fn add_assign(&mut self, rhs: i64) {
        *self += BigInt::from(rhs);
    }
}

impl SubAssign<i64> for BigInt {
    fn sub_assign(&mut self, rhs: i64) {
        *self -= BigInt::from(rhs);
    }
}

impl MulAssign<i64> for BigInt {
    fn mul_assign(&mut self, rhs: i64) {
        *self *= BigInt::from(rhs);
    }
}
