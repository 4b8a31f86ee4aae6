use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use num_traits::Zero;

/// Anything that can sit in a polynomial: cloneable, comparable for
/// equality, printable, and shareable across threads. No `Eq`, so `f64`
/// qualifies.
pub trait Elem:
    Default +
    PartialEq +
    Clone +
    Send +
    Sync +
    Display +
    Debug +
    'static
{
    /// Name of the structure, e.g. `Z`, `F7`, `Z[x]`.
    fn math_symbol() -> String;
}

// `+` with `T` or `&T` on the right, implemented for `T` and `&T`.
pub trait AddMonOps<T = Self>:
    Sized +
    Add<T, Output = T> +
    for<'a> Add<&'a T, Output = T>
{}

pub trait AddMon:
    Elem +
    Zero +
    AddMonOps +
    AddAssign +
    for<'a> AddAssign<&'a Self>
where
    for<'a> &'a Self: AddMonOps<Self>
{}

pub trait AddGrpOps<T = Self>:
    AddMonOps<T> +
    Neg<Output = T> +
    Sub<T, Output = T> +
    for<'a> Sub<&'a T, Output = T>
{}

pub trait AddGrp:
    AddMon +
    AddGrpOps +
    SubAssign +
    for<'a> SubAssign<&'a Self>
where
    for<'a> &'a Self: AddGrpOps<Self>
{}
