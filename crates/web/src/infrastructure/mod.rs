//! Infrastructure layer - adapters implementing the outbound ports

pub mod dom;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
