// src/config/consts.rs

// Dataset source
pub const DEFAULT_DATA_BASE: &str = "data";
pub const DEFAULT_YEAR: u16 = 2025;
pub const DATASET_FILE: &str = "offerings.json";
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = "offerings_browser/1.0";

// Config + local files
pub const CONFIG_FILE: &str = "offerings.toml";
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Browsing
pub const PAGE_SIZE: usize = 50;
pub const EXCERPT_CHARS: usize = 150;
pub const ELLIPSIS: &str = "...";
pub const SEARCH_DEBOUNCE_MS: u64 = 300;
pub const SCROLL_THRESHOLD: f32 = 500.0; // px from the bottom
pub const SWIPE_MIN_DISTANCE: f32 = 50.0; // logical px

// Fallback text
pub const ANONYMOUS: &str = "Anonymous";
pub const NO_OFFERING_TEXT: &str = "No offering text available.";
pub const LOAD_FAILED_MSG: &str = "Failed to load offerings. Please refresh the page.";
pub const EMPTY_DATASET_MSG: &str = "No offerings data available. Please refresh the page.";
pub const NO_MATCHES_MSG: &str = "No offerings found";
