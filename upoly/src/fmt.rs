//! Canonical text rendering shared by every [`UPoly`] implementation.
//!
//! Terms are written in decreasing degree. The leading term carries no
//! `+`; every later term is prefixed by `+` when its coefficient is
//! positive and otherwise by the coefficient's own sign. Unit
//! coefficients are elided in front of `x`. The zero polynomial is
//! written as the coefficient zero.

use std::fmt::{self, Formatter};
use num_traits::{Zero, One};
use upoly_core::{Coeff, FieldOps, RingOps};

use crate::UPoly;

pub fn write_poly<P, R>(f: &mut Formatter<'_>, p: &P) -> fmt::Result
where
    R: Coeff, for<'x> &'x R: FieldOps<R>,
    P: UPoly<R>, for<'x> &'x P: RingOps<P>
{
    if p.is_zero() {
        return write!(f, "{}", R::zero())
    }

    let d = p.deg() as usize;

    for i in (0..=d).rev() {
        let a = p.coeff(i);
        if a.is_zero() {
            continue
        }

        let sign = if i < d && a.is_positive() { "+" } else { "" };

        if i == 0 {
            write!(f, "{sign}{a}")?;
            continue
        }

        let x = fmt_var(i);

        if a.is_one() {
            write!(f, "{sign}{x}")?;
        } else if (-a).is_one() {
            write!(f, "-{x}")?;
        } else {
            write!(f, "{sign}{a}*{x}")?;
        }
    }

    Ok(())
}

fn fmt_var(i: usize) -> String {
    if i == 1 {
        "x".to_string()
    } else {
        format!("x^{i}")
    }
}
