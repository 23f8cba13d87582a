/// Directory (under the asset root) holding per-page configuration
pub const PAGE_DIRECTORY: &str = "pages";

/// Extension registered with the JSON asset loader for page configuration
pub const PAGE_CONFIG_EXTENSION: &str = "page.json";

/// Page loaded when neither the URL nor the command line names one
pub const DEFAULT_PAGE: &str = "education";

/// Document the logo navigates to when nothing more specific is configured
pub const FALLBACK_NAVIGATION_URL: &str = "index.html";

/// Query parameter selecting the page on wasm
pub const PAGE_QUERY_PARAMETER: &str = "page";
