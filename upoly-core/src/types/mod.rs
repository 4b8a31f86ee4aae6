mod zp;

pub use zp::Zp;
