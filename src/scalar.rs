use std::fmt;
use std::ops::{Add, AddAssign, Neg};
use std::str::FromStr;

use num_traits::{Signed, Zero};

use crate::errors::Error;

/// Arbitrary-precision signed integer used for balances and deltas.
///
/// The store wire form is the plain decimal string (`"0"`, `"1500"`), the
/// same shape the decode layer puts in `Transfer.value`. Deltas may be
/// negative; persisted balances never are.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct BigInt(num_bigint::BigInt);

impl BigInt {
    pub fn zero() -> BigInt {
        BigInt(num_bigint::BigInt::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    /// Strictly less than zero.
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Parses the decimal wire form. An optional leading sign is accepted;
    /// anything else (whitespace, exponents, hex) is rejected.
    pub fn from_decimal(input: &str) -> Result<BigInt, Error> {
        num_bigint::BigInt::from_str(input)
            .map(BigInt)
            .map_err(|_| Error::InvalidValue(input.to_string()))
    }

    /// Decimal wire form, with a leading `-` when negative.
    pub fn to_decimal(&self) -> String {
        self.0.to_str_radix(10)
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(self, rhs: BigInt) -> BigInt {
        BigInt(self.0 + rhs.0)
    }
}

impl AddAssign for BigInt {
    fn add_assign(&mut self, rhs: BigInt) {
        self.0 += rhs.0;
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt(-self.0)
    }
}

impl From<i32> for BigInt {
    fn from(value: i32) -> BigInt {
        BigInt(num_bigint::BigInt::from(value))
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> BigInt {
        BigInt(num_bigint::BigInt::from(value))
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> BigInt {
        BigInt(num_bigint::BigInt::from(value))
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(input: &str) -> Result<BigInt, Error> {
        BigInt::from_decimal(input)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
