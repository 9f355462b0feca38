//! Message types of the `juno.feeshare.v1` protobuf package.
//!
//! The structs carry both the prost wire encoding used over gRPC and the
//! JSON mapping served by the REST gateway.

mod feeshare;
mod pagination;
pub(crate) mod serde_helpers;

pub use feeshare::*;
pub(crate) use pagination::next_page;
pub use pagination::{PageRequest, PageResponse};
