//! Package identity constants.

/// Name the consistency check looks up in the installed-distribution registry.
pub const PACKAGE_NAME: &str = env!("CARGO_PKG_NAME");

/// Version string this build was authored as, taken from the manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
