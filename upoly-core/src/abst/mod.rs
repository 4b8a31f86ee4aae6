mod additive;
mod ring;
mod coeff;

pub use additive::*;
pub use ring::*;
pub use coeff::*;
