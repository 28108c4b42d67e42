//! Local key-value store and the server-side snapshot document.

mod model;
mod repository;

pub use repository::{CloudStateRepository, LocalStateRepository, SNAPSHOT_DOC_ID};
