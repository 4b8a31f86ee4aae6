use std::ops::MulAssign;
use num_traits::{Zero, One};
use upoly_core::{Coeff, FieldOps, Ring, RingOps};

use crate::PolyError;
use crate::euclid;

/// A univariate polynomial `Σ cᵢ xⁱ` over the coefficient type `R`.
///
/// Implementors keep their storage canonical: no zero coefficient is
/// ever stored, so that derived equality is extensional and `deg()` is
/// always the index of the highest nonzero coefficient (`-1` for the
/// zero polynomial).
///
/// Ring operations (`+`, `-`, `*` and their assigning forms) are
/// required through [`Ring`]; everything else except storage access and
/// evaluation is shared here.
pub trait UPoly<R>:
    Ring +
    PartialEq<R> +
    From<Vec<R>> +
    FromIterator<R> +
    for<'a> MulAssign<&'a R>
where
    R: Coeff, for<'x> &'x R: FieldOps<R>,
    for<'x> &'x Self: RingOps<Self>
{
    /// The constant polynomial `r`, or zero if `r` is zero.
    fn from_const(r: R) -> Self;

    /// The single term `r xⁱ`.
    fn mono(r: R, i: usize) -> Self;

    /// Highest index with a nonzero coefficient, `-1` for zero.
    fn deg(&self) -> isize;

    /// Coefficient of `xⁱ`. Total: zero outside the stored range.
    fn coeff(&self, i: usize) -> &R;

    /// Nonzero terms in increasing degree.
    fn terms(&self) -> impl Iterator<Item = (usize, &R)>;

    fn eval(&self, x: &R) -> R;

    fn variable() -> Self {
        Self::mono(R::one(), 1)
    }

    fn lead_coeff(&self) -> &R {
        let d = usize::try_from(self.deg()).unwrap_or(0);
        self.coeff(d)
    }

    fn const_term(&self) -> &R {
        self.coeff(0)
    }

    fn is_monic(&self) -> bool {
        self.lead_coeff().is_one()
    }

    fn scale(&self, r: &R) -> Self {
        let mut f = self.clone();
        f *= r;
        f
    }

    fn add_const(&self, r: &R) -> Self {
        self + &Self::from_const(r.clone())
    }

    fn sub_const(&self, r: &R) -> Self {
        self - &Self::from_const(r.clone())
    }

    /// `selfⁿ` by `n` successive multiplications. `pow(0)` is one, also
    /// for the zero polynomial.
    fn pow(&self, n: usize) -> Self {
        let mut res = Self::one();
        for _ in 0..n {
            res *= self;
        }
        res
    }

    fn try_pow(&self, n: i64) -> Result<Self, PolyError> {
        let n = usize::try_from(n).map_err(|_| PolyError::NegativeExponent { exp: n })?;
        Ok(self.pow(n))
    }

    /// `self(g(x))`, accumulating `cᵢ gⁱ` with a running power of `g`.
    fn compose(&self, g: &Self) -> Self {
        if self.is_zero() {
            return Self::zero()
        }
        if g.is_zero() {
            return Self::from_const(self.const_term().clone())
        }

        let mut res = Self::zero();
        let mut gk = Self::one(); // g^k
        let mut k = 0;

        for (i, a) in self.terms() {
            while k < i {
                gk *= g;
                k += 1;
            }
            res += gk.scale(a);
        }

        res
    }

    fn div_rem(&self, d: &Self) -> Result<(Self, Self), PolyError> {
        if d.is_zero() {
            return Err(PolyError::DivisionByZero)
        }
        Ok(euclid::div_rem_unchecked::<Self, R>(self, d))
    }

    fn checked_div(&self, d: &Self) -> Result<Self, PolyError> {
        let (q, _) = self.div_rem(d)?;
        Ok(q)
    }

    fn checked_rem(&self, d: &Self) -> Result<Self, PolyError> {
        let (_, r) = self.div_rem(d)?;
        Ok(r)
    }

    fn monic(&self) -> Self {
        euclid::monic::<Self, R>(self)
    }

    fn gcd(a: &Self, b: &Self) -> Self {
        euclid::gcd::<Self, R>(a, b)
    }
}

// Extensional equality across representations.
pub(crate) fn eq_coeffwise<P, Q, R>(p: &P, q: &Q) -> bool
where
    R: Coeff, for<'x> &'x R: FieldOps<R>,
    P: UPoly<R>, for<'x> &'x P: RingOps<P>,
    Q: UPoly<R>, for<'x> &'x Q: RingOps<Q>
{
    let d = p.deg();
    d == q.deg() && (0..=d).all(|i| {
        let i = i as usize;
        p.coeff(i) == q.coeff(i)
    })
}

macro_rules! impl_alg_structs {
    ($poly:ident) => {
        impl<R> ::upoly_core::AddMonOps<Self> for $poly<R>
        where R: ::upoly_core::Coeff, for<'x> &'x R: ::upoly_core::FieldOps<R> {}

        impl<R> ::upoly_core::AddMonOps<$poly<R>> for &$poly<R>
        where R: ::upoly_core::Coeff, for<'x> &'x R: ::upoly_core::FieldOps<R> {}

        impl<R> ::upoly_core::AddGrpOps<Self> for $poly<R>
        where R: ::upoly_core::Coeff, for<'x> &'x R: ::upoly_core::FieldOps<R> {}

        impl<R> ::upoly_core::AddGrpOps<$poly<R>> for &$poly<R>
        where R: ::upoly_core::Coeff, for<'x> &'x R: ::upoly_core::FieldOps<R> {}

        impl<R> ::upoly_core::MonOps<Self> for $poly<R>
        where R: ::upoly_core::Coeff, for<'x> &'x R: ::upoly_core::FieldOps<R> {}

        impl<R> ::upoly_core::MonOps<$poly<R>> for &$poly<R>
        where R: ::upoly_core::Coeff, for<'x> &'x R: ::upoly_core::FieldOps<R> {}

        impl<R> ::upoly_core::RingOps<Self> for $poly<R>
        where R: ::upoly_core::Coeff, for<'x> &'x R: ::upoly_core::FieldOps<R> {}

        impl<R> ::upoly_core::RingOps<$poly<R>> for &$poly<R>
        where R: ::upoly_core::Coeff, for<'x> &'x R: ::upoly_core::FieldOps<R> {}

        impl<R> ::upoly_core::Elem for $poly<R>
        where R: ::upoly_core::Coeff, for<'x> &'x R: ::upoly_core::FieldOps<R> {
            fn math_symbol() -> String {
                format!("{}[x]", <R as ::upoly_core::Elem>::math_symbol())
            }
        }

        impl<R> ::upoly_core::AddMon for $poly<R>
        where R: ::upoly_core::Coeff, for<'x> &'x R: ::upoly_core::FieldOps<R> {}

        impl<R> ::upoly_core::AddGrp for $poly<R>
        where R: ::upoly_core::Coeff, for<'x> &'x R: ::upoly_core::FieldOps<R> {}

        impl<R> ::upoly_core::Mon for $poly<R>
        where R: ::upoly_core::Coeff, for<'x> &'x R: ::upoly_core::FieldOps<R> {}

        impl<R> ::upoly_core::Ring for $poly<R>
        where R: ::upoly_core::Coeff, for<'x> &'x R: ::upoly_core::FieldOps<R> {}

        impl<R> From<i32> for $poly<R>
        where R: ::upoly_core::Coeff, for<'x> &'x R: ::upoly_core::FieldOps<R> {
            fn from(i: i32) -> Self {
                <Self as $crate::UPoly<R>>::from_const(R::from(i))
            }
        }

        impl<R> ::num_traits::Zero for $poly<R>
        where R: ::upoly_core::Coeff, for<'x> &'x R: ::upoly_core::FieldOps<R> {
            fn zero() -> Self {
                Self::new_raw()
            }

            fn is_zero(&self) -> bool {
                <Self as $crate::UPoly<R>>::deg(self) < 0
            }
        }

        impl<R> ::num_traits::One for $poly<R>
        where R: ::upoly_core::Coeff, for<'x> &'x R: ::upoly_core::FieldOps<R> {
            fn one() -> Self {
                <Self as $crate::UPoly<R>>::from_const(<R as ::num_traits::One>::one())
            }

            fn is_one(&self) -> bool {
                <Self as $crate::UPoly<R>>::deg(self) == 0 &&
                ::num_traits::One::is_one(<Self as $crate::UPoly<R>>::const_term(self))
            }
        }

        impl<R> Default for $poly<R>
        where R: ::upoly_core::Coeff, for<'x> &'x R: ::upoly_core::FieldOps<R> {
            fn default() -> Self {
                Self::new_raw()
            }
        }

        impl<R> PartialEq<R> for $poly<R>
        where R: ::upoly_core::Coeff, for<'x> &'x R: ::upoly_core::FieldOps<R> {
            fn eq(&self, r: &R) -> bool {
                self == &<Self as $crate::UPoly<R>>::from_const(r.clone())
            }
        }

        impl<R> std::fmt::Display for $poly<R>
        where R: ::upoly_core::Coeff, for<'x> &'x R: ::upoly_core::FieldOps<R> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $crate::fmt::write_poly::<Self, R>(f, self)
            }
        }

        impl<R> std::fmt::Debug for $poly<R>
        where R: ::upoly_core::Coeff, for<'x> &'x R: ::upoly_core::FieldOps<R> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(self, f)
            }
        }

        impl<R> std::ops::Neg for $poly<R>
        where R: ::upoly_core::Coeff, for<'x> &'x R: ::upoly_core::FieldOps<R> {
            type Output = Self;
            fn neg(self) -> Self::Output {
                -&self
            }
        }
    };
}

// Ops with a scalar on the left, e.g. `3 * p` or `2 == p`. A generic
// scalar type cannot be covered, so each coefficient type is listed,
// with its generics in brackets when it has any.
macro_rules! impl_scalar_lhs {
    ($poly:ident, [$($g:tt)*] $t:ty) => {
        impl<$($g)*> PartialEq<$poly<$t>> for $t {
            fn eq(&self, p: &$poly<$t>) -> bool {
                p == self
            }
        }

        impl<$($g)*> std::ops::Add<$poly<$t>> for $t {
            type Output = $poly<$t>;
            fn add(self, p: $poly<$t>) -> Self::Output {
                p + self
            }
        }

        impl<$($g)*> std::ops::Sub<$poly<$t>> for $t {
            type Output = $poly<$t>;
            fn sub(self, p: $poly<$t>) -> Self::Output {
                -p + self
            }
        }

        impl<$($g)*> std::ops::Mul<$poly<$t>> for $t {
            type Output = $poly<$t>;
            fn mul(self, p: $poly<$t>) -> Self::Output {
                p * self
            }
        }
    };
    ($poly:ident, $($t:ty),*) => { $(
        impl_scalar_lhs!($poly, [] $t);
    )* };
}

pub(crate) use {impl_alg_structs, impl_scalar_lhs};
