//! Extension traits

mod depot;
mod request;
mod result;

pub(crate) use depot::DepotExt as _;
pub(crate) use request::JsonRequestExt as _;
pub(crate) use result::ResultExt as _;
