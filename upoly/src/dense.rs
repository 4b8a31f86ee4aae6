use std::ops::{Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Neg, Div, DivAssign, Rem, RemAssign};
use auto_impl_ops::auto_ops;
use itertools::{EitherOrBoth, Itertools};
use num_traits::{Zero, One};
use upoly_core::{Coeff, FieldOps, Zp};

use crate::poly::{eq_coeffwise, impl_alg_structs, impl_scalar_lhs};
use crate::{SparsePoly, UPoly};

/// Dense storage: `coeffs[i]` is the coefficient of `xⁱ`.
///
/// Trailing zeros are always trimmed, so the zero polynomial is the
/// empty vector and `deg() == coeffs.len() - 1`.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<R>", into = "Vec<R>"))]
pub struct DensePoly<R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    coeffs: Vec<R>,
    zero: R
}

impl<R> DensePoly<R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    pub(crate) fn new_raw() -> Self {
        Self { coeffs: vec![], zero: R::zero() }
    }

    fn new(coeffs: Vec<R>) -> Self {
        let mut p = Self { coeffs, zero: R::zero() };
        p.clean();
        p
    }

    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    fn clean(&mut self) {
        while self.coeffs.last().is_some_and(|a| a.is_zero()) {
            self.coeffs.pop();
        }
    }

    fn zip_with<F>(&self, rhs: &Self, f: F) -> Self
    where F: Fn(EitherOrBoth<&R, &R>) -> R {
        let coeffs = self.coeffs.iter().zip_longest(rhs.coeffs.iter()).map(f).collect();
        Self::new(coeffs)
    }
}

impl<R> From<Vec<R>> for DensePoly<R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    fn from(coeffs: Vec<R>) -> Self {
        Self::new(coeffs)
    }
}

impl<R> FromIterator<R> for DensePoly<R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    fn from_iter<T: IntoIterator<Item = R>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<R> From<DensePoly<R>> for Vec<R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    fn from(p: DensePoly<R>) -> Self {
        p.coeffs
    }
}

impl<R> From<SparsePoly<R>> for DensePoly<R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    fn from(p: SparsePoly<R>) -> Self {
        let n = usize::try_from(p.deg() + 1).unwrap_or(0);
        let mut coeffs = vec![R::zero(); n];
        for (i, a) in p.into_terms() {
            coeffs[i] = a;
        }
        Self::new(coeffs)
    }
}

impl<R> PartialEq<SparsePoly<R>> for DensePoly<R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    fn eq(&self, other: &SparsePoly<R>) -> bool {
        eq_coeffwise::<Self, SparsePoly<R>, R>(self, other)
    }
}

impl<R> Neg for &DensePoly<R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    type Output = DensePoly<R>;
    fn neg(self) -> Self::Output {
        DensePoly::new(self.coeffs.iter().map(|a| -a).collect())
    }
}

#[auto_ops]
impl<R> AddAssign<&DensePoly<R>> for DensePoly<R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    fn add_assign(&mut self, rhs: &DensePoly<R>) {
        *self = self.zip_with(rhs, |e| match e {
            EitherOrBoth::Both(a, b) => a + b,
            EitherOrBoth::Left(a) => a.clone(),
            EitherOrBoth::Right(b) => b.clone()
        })
    }
}

#[auto_ops]
impl<R> SubAssign<&DensePoly<R>> for DensePoly<R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    fn sub_assign(&mut self, rhs: &DensePoly<R>) {
        *self = self.zip_with(rhs, |e| match e {
            EitherOrBoth::Both(a, b) => a - b,
            EitherOrBoth::Left(a) => a.clone(),
            EitherOrBoth::Right(b) => -b
        })
    }
}

#[auto_ops]
impl<R> MulAssign<&DensePoly<R>> for DensePoly<R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    fn mul_assign(&mut self, rhs: &DensePoly<R>) {
        if self.is_zero() || rhs.is_zero() {
            *self = Self::zero();
            return
        }

        let n = self.coeffs.len() + rhs.coeffs.len() - 1;
        let mut c = vec![R::zero(); n];

        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue
            }
            for (j, b) in rhs.coeffs.iter().enumerate() {
                c[i + j] += a * b;
            }
        }

        *self = Self::new(c)
    }
}

#[auto_ops]
impl<R> AddAssign<&R> for DensePoly<R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    fn add_assign(&mut self, rhs: &R) {
        match self.coeffs.first_mut() {
            Some(a) => *a += rhs,
            None => self.coeffs.push(rhs.clone())
        }
        self.clean()
    }
}

#[auto_ops]
impl<R> SubAssign<&R> for DensePoly<R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    fn sub_assign(&mut self, rhs: &R) {
        match self.coeffs.first_mut() {
            Some(a) => *a -= rhs,
            None => self.coeffs.push(-rhs)
        }
        self.clean()
    }
}

#[auto_ops]
impl<R> MulAssign<&R> for DensePoly<R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    fn mul_assign(&mut self, rhs: &R) {
        if rhs.is_zero() {
            self.coeffs.clear();
            return
        }
        for a in self.coeffs.iter_mut() {
            *a *= rhs;
        }
        self.clean()
    }
}

#[auto_ops]
impl<R> Div<&DensePoly<R>> for DensePoly<R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    type Output = Self;

    fn div(self, rhs: &DensePoly<R>) -> Self {
        match self.div_rem(rhs) {
            Ok((q, _)) => q,
            Err(e) => panic!("{e}")
        }
    }
}

#[auto_ops]
impl<R> Rem<&DensePoly<R>> for DensePoly<R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    type Output = Self;

    fn rem(self, rhs: &DensePoly<R>) -> Self {
        match self.div_rem(rhs) {
            Ok((_, r)) => r,
            Err(e) => panic!("{e}")
        }
    }
}

impl<R> UPoly<R> for DensePoly<R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    fn from_const(r: R) -> Self {
        Self::new(vec![r])
    }

    fn mono(r: R, i: usize) -> Self {
        if r.is_zero() {
            return Self::zero()
        }
        let mut coeffs = vec![R::zero(); i + 1];
        coeffs[i] = r;
        Self { coeffs, zero: R::zero() }
    }

    fn deg(&self) -> isize {
        self.coeffs.len() as isize - 1
    }

    fn coeff(&self, i: usize) -> &R {
        self.coeffs.get(i).unwrap_or(&self.zero)
    }

    fn terms(&self) -> impl Iterator<Item = (usize, &R)> {
        self.coeffs.iter().enumerate().filter(|(_, a)| !a.is_zero())
    }

    fn eval(&self, x: &R) -> R {
        let mut res = R::zero();
        let mut xi = R::one(); // x^i

        for (i, a) in self.coeffs.iter().enumerate() {
            if i > 0 {
                xi *= x;
            }
            if !a.is_zero() {
                res += a * &xi;
            }
        }

        res
    }
}

impl_alg_structs!(DensePoly);
impl_scalar_lhs!(DensePoly, i32, i64, i128, f64);
impl_scalar_lhs!(DensePoly, [const P: u32] Zp<P>);
