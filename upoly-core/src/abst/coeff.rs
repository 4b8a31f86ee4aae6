use num_traits::Zero;
use crate::{Field, FieldOps};

/// Capability set required of polynomial coefficients: field-like
/// arithmetic plus an ordering, which is only consulted to decide the
/// sign shown in front of a term.
pub trait Coeff: 
    Field + 
    PartialOrd
where 
    for<'a> &'a Self: FieldOps<Self> 
{
    fn is_positive(&self) -> bool { 
        self > &Self::zero()
    }

    fn is_negative(&self) -> bool { 
        self < &Self::zero()
    }
}

impl<T> Coeff for T
where T: Field + PartialOrd, for<'a> &'a T: FieldOps<T> {}
