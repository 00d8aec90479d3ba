// src/infrastructure/security/mod.rs
pub mod identity;

pub use identity::JwtIdentityVerifier;
