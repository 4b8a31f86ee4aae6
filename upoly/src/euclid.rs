use log::{debug, trace, warn};
use num_traits::Zero;
use upoly_core::{Coeff, FieldOps, RingOps};

use crate::UPoly;

// (a/b) x^{i-j} for f = ax^i + ..., g = bx^j + ..., i >= j.
fn lead_quot<P, R>(f: &P, g: &P) -> P
where
    R: Coeff, for<'x> &'x R: FieldOps<R>,
    P: UPoly<R>, for<'x> &'x P: RingOps<P>
{
    let k = (f.deg() - g.deg()) as usize;
    let c = f.lead_coeff() / g.lead_coeff();
    P::mono(c, k)
}

/// Long division `f = q g + r`. `g` must be nonzero.
///
/// Every step cancels the leading term of the running remainder. Over a
/// field the cancelled term is zero by construction, so a rounding
/// residue left there (e.g. `(1/49)*49` in `f64`) is dropped. When the
/// coefficients do not divide exactly (truncating integer division) the
/// leftover is a true remainder smaller than `lead(g)`; the loop then
/// stops early, and `f = q g + r` still holds with `deg r >= deg g`.
pub(crate) fn div_rem_unchecked<P, R>(f: &P, g: &P) -> (P, P)
where
    R: Coeff, for<'x> &'x R: FieldOps<R>,
    P: UPoly<R>, for<'x> &'x P: RingOps<P>
{
    debug_assert!(!g.is_zero());

    let mut q = P::zero();
    let mut r = f.clone();

    while r.deg() >= g.deg() {
        let t = lead_quot::<P, R>(&r, g);
        if t.is_zero() {
            warn!("remainder {r} does not reduce by {g}, stop dividing.");
            break
        }

        let d = r.deg() as usize;
        let mut r1 = &r - &(&t * g);

        if r1.deg() >= r.deg() {
            let e = r1.coeff(d).clone();
            if (&e / g.lead_coeff()).is_zero() {
                warn!("remainder {r} does not reduce by {g}, stop dividing.");
                break
            }
            r1 = &r1 - &P::mono(e, d);
        }

        trace!("div: q += {t}, r: {r} -> {r1}");

        q += t;
        r = r1;
    }

    (q, r)
}

pub(crate) fn monic<P, R>(f: &P) -> P
where
    R: Coeff, for<'x> &'x R: FieldOps<R>,
    P: UPoly<R>, for<'x> &'x P: RingOps<P>
{
    if f.is_zero() || f.is_monic() {
        return f.clone()
    }

    let u = P::from_const(f.lead_coeff().clone());
    let (q, _) = div_rem_unchecked::<P, R>(f, &u);
    q
}

/// Monic greatest common divisor by the Euclidean algorithm.
/// `gcd(0, 0)` is zero.
pub fn gcd<P, R>(a: &P, b: &P) -> P
where
    R: Coeff, for<'x> &'x R: FieldOps<R>,
    P: UPoly<R>, for<'x> &'x P: RingOps<P>
{
    let (mut a, mut b) = (a.clone(), b.clone());

    while !b.is_zero() {
        let (_, r) = div_rem_unchecked::<P, R>(&a, &b);

        debug!("gcd: ({a}) mod ({b}) = {r}");

        if r.deg() >= b.deg() {
            warn!("gcd: remainder {r} does not reduce by {b}, stop.");
            a = b;
            break
        }

        (a, b) = (b, r);
    }

    monic::<P, R>(&a)
}
