use std::ops::{Div, DivAssign, Mul, MulAssign};
use num_traits::One;

use crate::{AddGrp, AddGrpOps, Elem};

pub trait MonOps<T = Self>:
    Sized +
    Mul<T, Output = T> +
    for<'a> Mul<&'a T, Output = T>
{}

pub trait Mon:
    Elem +
    One +
    MonOps +
    MulAssign +
    for<'a> MulAssign<&'a Self>
where
    for<'a> &'a Self: MonOps<Self>
{
    /// `self^n` by repeated squaring, `O(log n)` multiplications.
    fn pow_n(&self, n: usize) -> Self {
        let mut res = Self::one();
        let mut base = self.clone();
        let mut n = n;

        while n > 0 {
            if n & 1 == 1 {
                res *= &base;
            }
            n >>= 1;
            if n > 0 {
                base = &base * &base;
            }
        }

        res
    }
}

pub trait RingOps<T = Self>:
    AddGrpOps<T> +
    MonOps<T>
{}

pub trait Ring:
    AddGrp +
    Mon +
    RingOps +
    From<i32>
where
    for<'a> &'a Self: RingOps<Self>
{}

// Integer types are admitted with truncating division. Algorithms that
// divide are then exact only when every division they perform is.
pub trait FieldOps<T = Self>:
    RingOps<T> +
    Div<T, Output = T> +
    for<'a> Div<&'a T, Output = T>
{}

pub trait Field:
    Ring +
    FieldOps +
    DivAssign +
    for<'a> DivAssign<&'a Self>
where
    for<'a> &'a Self: FieldOps<Self>
{}
