mod error;
mod poly;
mod euclid;
mod dense;
mod sparse;

pub mod fmt;

pub use error::PolyError;
pub use poly::UPoly;
pub use euclid::gcd;
pub use dense::DensePoly;
pub use sparse::SparsePoly;


#[cfg(test)]
mod proptests;
