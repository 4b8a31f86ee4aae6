#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PolyError { 
    #[display("division by the zero polynomial")]
    DivisionByZero,

    #[display("negative exponent: {exp}")]
    NegativeExponent { exp: i64 }
}

impl std::error::Error for PolyError {}
