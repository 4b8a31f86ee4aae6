mod abst;
mod ext;
mod types;

pub use abst::*;
pub use ext::*;
pub use types::*;

pub mod util;
