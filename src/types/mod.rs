pub mod errors;
pub mod fingerprint;

pub use errors::{FingerprintError, SelectorError};
pub use fingerprint::Fingerprint;
