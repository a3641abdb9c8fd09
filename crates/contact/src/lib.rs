mod controller;
mod form;
mod transport;
mod value_object;

pub use controller::*;
pub use form::*;
pub use transport::*;
pub use value_object::*;
