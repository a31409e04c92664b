//! Admin pages

mod companies;
mod dashboard;
mod review;
mod vendors;

pub use companies::*;
pub use dashboard::*;
pub use review::*;
pub use vendors::*;
