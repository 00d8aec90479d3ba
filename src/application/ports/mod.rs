// src/application/ports/mod.rs
pub mod identity;
pub mod storage;
pub mod time;
pub mod util;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type IdentityVerifierPort = dyn identity::IdentityVerifier;
pub type ObjectStoragePort = dyn storage::ObjectStorage;
pub type ClockPort = dyn time::Clock;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
