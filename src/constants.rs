pub const CONFIG_FILE: &str = ".admin-console-config.json";

pub const DATABASE_URL_ENV: &str = "ADMIN_DATABASE_URL";
pub const DATABASE_KEY_ENV: &str = "ADMIN_DATABASE_KEY";
pub const SHEET_URL_ENV: &str = "ADMIN_SHEET_URL";

/// Path prefix of the hosted database's REST gateway.
pub const REST_PREFIX: &str = "rest/v1";

/// Key column used by the spreadsheet API for feedback rows.
pub const SHEET_KEY_FIELD: &str = "email";

// Incremental reveal
pub const INITIAL_VISIBLE: usize = 3;
pub const LOAD_MORE_STEP: usize = 3;

/// Users seen within this many minutes count as active on the overview.
pub const ACTIVE_WINDOW_MINUTES: i64 = 5;

/// Success and info notifications disappear after this many seconds.
pub const NOTIFICATION_TTL_SECS: u64 = 5;
pub const MAX_VISIBLE_NOTIFICATIONS: usize = 3;

pub const FALLBACK_ERROR_MESSAGE: &str = "Unknown error";
