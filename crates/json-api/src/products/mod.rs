//! Products

pub(crate) mod errors;
mod handlers;
pub(crate) mod request;
pub(crate) mod response;

pub(crate) use handlers::*;
