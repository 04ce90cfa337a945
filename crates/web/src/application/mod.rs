//! Application layer - form behaviour built on the outbound ports

pub mod services;
