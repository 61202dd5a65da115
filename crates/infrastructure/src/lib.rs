//! Inverse Query Infrastructure Layer
pub mod dns;
pub mod system;
