// Data source
pub const DOCUMENTATION_URL: &str =
    "https://app.codeguide.dev/api/urls/e65d5d99-56b2-49f9-bf58-de651902b255?download=true";

// Filesystem layout
pub const DOC_DIR: &str = "documentation";
pub const MARKER_FILE: &str = "implementation_plan.md";

// Response classification
pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const EXPIRED_KEYWORD: &str = "expired";

// Console messages
pub const MSG_DOWNLOADING: &str = "Downloading documentation...";
pub const MSG_EXPIRED: &str = "The URL is expired. Please follow the instructions below:";
pub const MSG_UNEXPECTED_JSON: &str = "Received JSON that does not indicate expiration:";
pub const MSG_ERROR_PREFIX: &str = "An error occurred:";
