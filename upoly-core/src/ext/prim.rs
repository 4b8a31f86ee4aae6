use crate::*;

macro_rules! impl_ops {
    ($trait:ident, $type:ty) => {
        impl $trait for $type {}
        impl<'a> $trait<$type> for &'a $type {}
    };
}

macro_rules! impl_prim {
    ($type:ident, $symbol:literal) => {
        impl_ops!(AddMonOps, $type);
        impl_ops!(AddGrpOps, $type);
        impl_ops!(MonOps, $type);
        impl_ops!(RingOps, $type);
        impl_ops!(FieldOps, $type);

        impl Elem for $type {
            fn math_symbol() -> String { 
                String::from($symbol)
            }
        }
        
        impl AddMon for $type {}
        impl AddGrp for $type {}
        impl Mon for $type {}
        impl Ring for $type {}
        impl Field for $type {}
    }
}

impl_prim!(i32, "Z");
impl_prim!(i64, "Z");
impl_prim!(i128, "Z");
impl_prim!(f64, "R");
