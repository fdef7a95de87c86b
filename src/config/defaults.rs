/// Configuration default values
///
/// This module contains all the default values for configuration options,
/// making them easily changeable in one central location.
// Web server defaults
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_REQUEST_SIZE: usize = 10 * 1024 * 1024; // 10MB

// Storage defaults
pub const DEFAULT_UPLOAD_PATH: &str = "./data/uploads";

// Cache defaults
pub const DEFAULT_CACHE_CAPACITY: usize = 10;
