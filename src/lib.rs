//! Installed-version consistency checker.
//!
//! Compares the version this package was built as against the version the
//! environment's installed-distribution registry records for it, and exposes
//! the registry's query surface (`show`, `list`) for inspection.

pub mod cli;
pub mod commands;
pub mod domain;
pub mod services;

pub use cli::{Cli, Commands};
pub use domain::constants::{PACKAGE_NAME, VERSION};
pub use domain::models::*;
pub use services::config::load_config;
pub use services::consistency::{build_check_report, check_self};
pub use services::output::{print_one, print_out, render_failure};
pub use services::registry::{find_record, load_registry, resolve_registry_path, version_of};
