use std::collections::btree_map::{BTreeMap, Entry};
use std::ops::{Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Neg, Div, DivAssign, Rem, RemAssign};
use auto_impl_ops::auto_ops;
use num_traits::{Zero, One};
use upoly_core::{Coeff, FieldOps, Mon, Zp};

use crate::poly::{eq_coeffwise, impl_alg_structs, impl_scalar_lhs};
use crate::{DensePoly, UPoly};

/// Sparse storage: a map from degree to a nonzero coefficient.
///
/// Entries whose coefficient becomes zero are removed immediately.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "BTreeMap<usize, R>", into = "BTreeMap<usize, R>"))]
pub struct SparsePoly<R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    terms: BTreeMap<usize, R>,
    zero: R
}

impl<R> SparsePoly<R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    pub(crate) fn new_raw() -> Self {
        Self { terms: BTreeMap::new(), zero: R::zero() }
    }

    pub fn nterms(&self) -> usize {
        self.terms.len()
    }

    pub fn into_terms(self) -> impl Iterator<Item = (usize, R)> {
        self.terms.into_iter()
    }

    fn add_term(&mut self, k: usize, r: R) {
        if r.is_zero() {
            return
        }
        match self.terms.entry(k) {
            Entry::Vacant(e) => {
                e.insert(r);
            },
            Entry::Occupied(mut e) => {
                *e.get_mut() += r;
                if e.get().is_zero() {
                    e.remove();
                }
            }
        }
    }

    fn clean(&mut self) {
        self.terms.retain(|_, a| !a.is_zero());
    }
}

impl<R> FromIterator<(usize, R)> for SparsePoly<R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    fn from_iter<T: IntoIterator<Item = (usize, R)>>(iter: T) -> Self {
        let mut p = Self::new_raw();
        for (k, r) in iter {
            p.add_term(k, r);
        }
        p
    }
}

impl<R> FromIterator<R> for SparsePoly<R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    fn from_iter<T: IntoIterator<Item = R>>(iter: T) -> Self {
        iter.into_iter().enumerate().collect()
    }
}

impl<R> From<Vec<R>> for SparsePoly<R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    fn from(coeffs: Vec<R>) -> Self {
        coeffs.into_iter().collect()
    }
}

impl<R> From<BTreeMap<usize, R>> for SparsePoly<R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    fn from(terms: BTreeMap<usize, R>) -> Self {
        let mut p = Self { terms, zero: R::zero() };
        p.clean();
        p
    }
}

impl<R> From<SparsePoly<R>> for BTreeMap<usize, R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    fn from(p: SparsePoly<R>) -> Self {
        p.terms
    }
}

impl<R> From<DensePoly<R>> for SparsePoly<R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    fn from(p: DensePoly<R>) -> Self {
        Vec::from(p).into_iter().collect()
    }
}

impl<R> PartialEq<DensePoly<R>> for SparsePoly<R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    fn eq(&self, other: &DensePoly<R>) -> bool {
        eq_coeffwise::<Self, DensePoly<R>, R>(self, other)
    }
}

impl<R> Neg for &SparsePoly<R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    type Output = SparsePoly<R>;
    fn neg(self) -> Self::Output {
        let terms = self.terms.iter().map(|(&k, a)| (k, -a)).collect();
        SparsePoly { terms, zero: R::zero() }
    }
}

#[auto_ops]
impl<R> AddAssign<&SparsePoly<R>> for SparsePoly<R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    fn add_assign(&mut self, rhs: &SparsePoly<R>) {
        for (&k, a) in rhs.terms.iter() {
            self.add_term(k, a.clone());
        }
    }
}

#[auto_ops]
impl<R> SubAssign<&SparsePoly<R>> for SparsePoly<R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    fn sub_assign(&mut self, rhs: &SparsePoly<R>) {
        for (&k, a) in rhs.terms.iter() {
            self.add_term(k, -a);
        }
    }
}

#[auto_ops]
impl<R> MulAssign<&SparsePoly<R>> for SparsePoly<R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    fn mul_assign(&mut self, rhs: &SparsePoly<R>) {
        let mut res = Self::new_raw();
        for (&i, a) in self.terms.iter() {
            for (&j, b) in rhs.terms.iter() {
                res.add_term(i + j, a * b);
            }
        }
        *self = res
    }
}

#[auto_ops]
impl<R> AddAssign<&R> for SparsePoly<R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    fn add_assign(&mut self, rhs: &R) {
        self.add_term(0, rhs.clone())
    }
}

#[auto_ops]
impl<R> SubAssign<&R> for SparsePoly<R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    fn sub_assign(&mut self, rhs: &R) {
        self.add_term(0, -rhs)
    }
}

#[auto_ops]
impl<R> MulAssign<&R> for SparsePoly<R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    fn mul_assign(&mut self, rhs: &R) {
        for a in self.terms.values_mut() {
            *a *= rhs;
        }
        self.clean()
    }
}

#[auto_ops]
impl<R> Div<&SparsePoly<R>> for SparsePoly<R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    type Output = Self;

    fn div(self, rhs: &SparsePoly<R>) -> Self {
        match self.div_rem(rhs) {
            Ok((q, _)) => q,
            Err(e) => panic!("{e}")
        }
    }
}

#[auto_ops]
impl<R> Rem<&SparsePoly<R>> for SparsePoly<R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    type Output = Self;

    fn rem(self, rhs: &SparsePoly<R>) -> Self {
        match self.div_rem(rhs) {
            Ok((_, r)) => r,
            Err(e) => panic!("{e}")
        }
    }
}

impl<R> UPoly<R> for SparsePoly<R>
where R: Coeff, for<'x> &'x R: FieldOps<R> {
    fn from_const(r: R) -> Self {
        Self::mono(r, 0)
    }

    fn mono(r: R, i: usize) -> Self {
        let mut p = Self::new_raw();
        p.add_term(i, r);
        p
    }

    fn deg(&self) -> isize {
        match self.terms.last_key_value() {
            Some((&k, _)) => k as isize,
            None => -1
        }
    }

    fn coeff(&self, i: usize) -> &R {
        self.terms.get(&i).unwrap_or(&self.zero)
    }

    fn terms(&self) -> impl Iterator<Item = (usize, &R)> {
        self.terms.iter().map(|(&k, a)| (k, a))
    }

    // Powers of x are advanced only to the stored degrees.
    fn eval(&self, x: &R) -> R {
        let mut res = R::zero();
        let mut xk = R::one(); // x^k
        let mut k = 0;

        for (&i, a) in self.terms.iter() {
            xk *= x.pow_n(i - k);
            k = i;
            res += a * &xk;
        }

        res
    }
}

impl_alg_structs!(SparsePoly);
impl_scalar_lhs!(SparsePoly, i32, i64, i128, f64);
impl_scalar_lhs!(SparsePoly, [const P: u32] Zp<P>);
