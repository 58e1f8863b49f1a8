pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(not(windows))]
pub const EXEC_NAME: &str = "backendless";
#[cfg(windows)]
pub const EXEC_NAME: &str = "backendless.exe";

pub const API_BASE_URL: &str = "https://api.bindings.tech";

// relative to the home directory
pub const STORE_DIRECTORY: &str = ".backendless";
