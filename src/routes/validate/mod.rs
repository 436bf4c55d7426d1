mod handler;
mod model;

pub use handler::{validate_email, validate_password};
