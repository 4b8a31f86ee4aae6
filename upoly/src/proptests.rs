//! Property-based tests shared by both engines.

use proptest::prelude::*;
use upoly_core::Zp;

use crate::{DensePoly, SparsePoly, UPoly};

type F = Zp<7>;

fn small_coeffs() -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::vec(-10i64..10, 0..=6)
}

// Lead coefficient ±1, so that integer division is exact.
fn unit_lead_coeffs() -> impl Strategy<Value = Vec<i64>> {
    (proptest::collection::vec(-10i64..10, 0..=3), prop::bool::ANY).prop_map(|(mut v, neg)| {
        v.push(if neg { -1 } else { 1 });
        v
    })
}

fn zp_coeffs() -> impl Strategy<Value = Vec<F>> {
    proptest::collection::vec((0i64..7).prop_map(F::new), 0..=6)
}

macro_rules! prop_suite {
    ($name:ident, $poly:ident) => {
        mod $name {
            use num_traits::{Zero, One};
            use proptest::prelude::*;
            use crate::{$poly as Poly, UPoly, PolyError};
            use super::*;

            type P = Poly<i64>;
            type Pz = Poly<F>;

            proptest! {
                #[test]
                fn canonical(a in small_coeffs(), b in small_coeffs()) {
                    let (a, b) = (P::from(a), P::from(b));
                    for p in [&a + &b, &a - &b, &a * &b] {
                        if let Ok(d) = usize::try_from(p.deg()) {
                            prop_assert!(!p.coeff(d).is_zero());
                        }
                        let d = (p.deg() + 1) as usize;
                        prop_assert!(p.coeff(d).is_zero());
                    }
                }

                #[test]
                fn add_commutative(a in small_coeffs(), b in small_coeffs()) {
                    let (a, b) = (P::from(a), P::from(b));
                    prop_assert_eq!(&a + &b, &b + &a);
                }

                #[test]
                fn add_identity_inverse(a in small_coeffs()) {
                    let a = P::from(a);
                    prop_assert_eq!(&a + &P::zero(), a.clone());
                    prop_assert!((&a - &a).is_zero());
                }

                #[test]
                fn mul_commutative(a in small_coeffs(), b in small_coeffs()) {
                    let (a, b) = (P::from(a), P::from(b));
                    prop_assert_eq!(&a * &b, &b * &a);
                }

                #[test]
                fn mul_associative(a in small_coeffs(), b in small_coeffs(), c in small_coeffs()) {
                    let (a, b, c) = (P::from(a), P::from(b), P::from(c));
                    prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
                }

                #[test]
                fn distributive(a in small_coeffs(), b in small_coeffs(), c in small_coeffs()) {
                    let (a, b, c) = (P::from(a), P::from(b), P::from(c));
                    prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
                }

                #[test]
                fn mul_degree(a in small_coeffs(), b in small_coeffs()) {
                    let (a, b) = (P::from(a), P::from(b));
                    let c = &a * &b;
                    if a.is_zero() || b.is_zero() {
                        prop_assert_eq!(c.deg(), -1);
                    } else {
                        prop_assert_eq!(c.deg(), a.deg() + b.deg());
                    }
                }

                #[test]
                fn mul_one(a in small_coeffs()) {
                    let a = P::from(a);
                    prop_assert_eq!(&a * &P::one(), a.clone());
                    prop_assert!((&a * &P::zero()).is_zero());
                }

                #[test]
                fn pow_is_repeated_mul(a in small_coeffs()) {
                    let a = P::from(a);
                    prop_assert_eq!(a.pow(2), &a * &a);
                    prop_assert_eq!(a.pow(0), P::one());
                }

                #[test]
                fn division_law(a in small_coeffs(), d in unit_lead_coeffs()) {
                    let (a, d) = (P::from(a), P::from(d));
                    let (q, r) = a.div_rem(&d).unwrap();
                    prop_assert_eq!(&(&q * &d) + &r, a);
                    prop_assert!(r.deg() < d.deg());
                }

                #[test]
                fn division_law_zp(a in zp_coeffs(), d in zp_coeffs()) {
                    let (a, d) = (Pz::from(a), Pz::from(d));
                    prop_assume!(!d.is_zero());
                    let (q, r) = a.div_rem(&d).unwrap();
                    prop_assert_eq!(&(&q * &d) + &r, a);
                    prop_assert!(r.deg() < d.deg());
                }

                #[test]
                fn division_by_zero(a in small_coeffs()) {
                    let a = P::from(a);
                    prop_assert_eq!(a.div_rem(&P::zero()), Err(PolyError::DivisionByZero));
                }

                #[test]
                fn gcd_monic(a in zp_coeffs(), b in zp_coeffs()) {
                    let (a, b) = (Pz::from(a), Pz::from(b));
                    let g = Pz::gcd(&a, &b);
                    if a.is_zero() && b.is_zero() {
                        prop_assert!(g.is_zero());
                    } else {
                        prop_assert!(g.is_monic());
                        prop_assert!(a.checked_rem(&g).unwrap().is_zero());
                        prop_assert!(b.checked_rem(&g).unwrap().is_zero());
                    }
                }

                #[test]
                fn compose_identity(a in small_coeffs()) {
                    let a = P::from(a);
                    prop_assert_eq!(a.compose(&P::variable()), a);
                }

                #[test]
                fn compose_eval(a in zp_coeffs(), b in zp_coeffs(), x in 0i64..7) {
                    let (a, b, x) = (Pz::from(a), Pz::from(b), F::new(x));
                    prop_assert_eq!(a.compose(&b).eval(&x), a.eval(&b.eval(&x)));
                }
            }
        }
    };
}

prop_suite!(dense, DensePoly);
prop_suite!(sparse, SparsePoly);

proptest! {
    #[test]
    fn engines_agree(a in small_coeffs(), b in small_coeffs(), x in -3i64..3) {
        let (da, db) = (DensePoly::from(a.clone()), DensePoly::from(b.clone()));
        let (sa, sb) = (SparsePoly::from(a), SparsePoly::from(b));
        prop_assert_eq!(&da, &sa);
        prop_assert_eq!(&(&da * &db), &(&sa * &sb));
        prop_assert_eq!(&(&da - &db), &(&sa - &sb));
        prop_assert_eq!(da.to_string(), sa.to_string());
        prop_assert_eq!(da.eval(&x), sa.eval(&x));
        prop_assert_eq!(DensePoly::from(sa), da);
    }
}
