pub mod error;
pub mod math;
pub mod reference;

pub use error::{Error, Method, Result};
pub use math::expint::{expint, try_expint};
