#![allow(non_upper_case_globals)]

use std::ops::{Add, Neg, Sub, Mul, Div, AddAssign, SubAssign, MulAssign, DivAssign};
use derive_more::{Display, Debug};
use num_traits::{Zero, One};
use auto_impl_ops::auto_ops;

use crate::{Elem, AddMonOps, AddGrpOps, MonOps, RingOps, FieldOps, AddMon, AddGrp, Mon, Ring, Field};

type I = u32;

/// The prime field `Z/pZ`, stored as its representative in `0..p`.
///
/// Elements are ordered by representative, so every nonzero element
/// counts as positive when a polynomial over `Zp` is printed.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, Debug)]
#[display("{_0}")]
#[debug("{_0}")]
pub struct Zp<const p: I>(I);

impl<const p: I> Zp<p> {
    pub fn new(a: i64) -> Self {
        assert!(p > 1);
        let r = a.rem_euclid(i64::from(p));
        Self(r as I)
    }

    pub fn rep(&self) -> &I {
        &self.0
    }

    // a^{p-2} = a^{-1} for a != 0.
    pub fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(self.pow_n((p - 2) as usize))
        }
    }

    fn reduce(a: u64) -> Self {
        Self((a % u64::from(p)) as I)
    }
}

impl<const p: I> From<i32> for Zp<p> {
    fn from(a: i32) -> Self {
        Self::new(i64::from(a))
    }
}

// Serialized as the representative. Deserialized values are reduced mod p.
#[cfg(feature = "serde")]
impl<const p: I> serde::Serialize for Zp<p> {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where S: serde::Serializer {
        s.serialize_u32(self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de, const p: I> serde::Deserialize<'de> for Zp<p> {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where D: serde::Deserializer<'de> {
        let a = <i64 as serde::Deserialize>::deserialize(d)?;
        Ok(Self::new(a))
    }
}

impl<const p: I> Zero for Zp<p> {
    fn zero() -> Self {
        Self(0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl<const p: I> One for Zp<p> {
    fn one() -> Self {
        Self(1)
    }

    fn is_one(&self) -> bool {
        self.0 == 1
    }
}

impl<const p: I> Neg for Zp<p> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<'a, const p: I> Neg for &'a Zp<p> {
    type Output = Zp<p>;
    fn neg(self) -> Self::Output {
        Zp::reduce(u64::from(p) - u64::from(self.0))
    }
}

#[auto_ops]
impl<'a, 'b, const p: I> Add<&'b Zp<p>> for &'a Zp<p> {
    type Output = Zp<p>;
    fn add(self, rhs: &'b Zp<p>) -> Self::Output {
        Zp::reduce(u64::from(self.0) + u64::from(rhs.0))
    }
}

#[auto_ops]
impl<'a, 'b, const p: I> Sub<&'b Zp<p>> for &'a Zp<p> {
    type Output = Zp<p>;
    fn sub(self, rhs: &'b Zp<p>) -> Self::Output {
        Zp::reduce(u64::from(self.0) + u64::from(p) - u64::from(rhs.0))
    }
}

#[auto_ops]
impl<'a, 'b, const p: I> Mul<&'b Zp<p>> for &'a Zp<p> {
    type Output = Zp<p>;
    fn mul(self, rhs: &'b Zp<p>) -> Self::Output {
        Zp::reduce(u64::from(self.0) * u64::from(rhs.0))
    }
}

#[auto_ops]
impl<'a, 'b, const p: I> Div<&'b Zp<p>> for &'a Zp<p> {
    type Output = Zp<p>;
    fn div(self, rhs: &'b Zp<p>) -> Self::Output {
        match rhs.inv() {
            Some(inv) => self * inv,
            None => panic!("attempt to divide by zero in F{}", p)
        }
    }
}

macro_rules! impl_alg_ops {
    ($trait:ident) => {
        impl<const p: I> $trait for Zp<p> {}
        impl<'a, const p: I> $trait<Zp<p>> for &'a Zp<p> {}
    };
}

impl_alg_ops!(AddMonOps);
impl_alg_ops!(AddGrpOps);
impl_alg_ops!(MonOps);
impl_alg_ops!(RingOps);
impl_alg_ops!(FieldOps);

impl<const p: I> Elem for Zp<p> {
    fn math_symbol() -> String {
        format!("F{}", p)
    }
}

impl<const p: I> AddMon for Zp<p> {}
impl<const p: I> AddGrp for Zp<p> {}
impl<const p: I> Mon for Zp<p> {}
impl<const p: I> Ring for Zp<p> {}
impl<const p: I> Field for Zp<p> {}
