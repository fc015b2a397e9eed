/// User agent string for HTTP requests
pub const USER_AGENT: &str = "dwd-mcp-server/0.1.0";

/// DWD app API base URL (station observations)
pub const DWD_APP_API_BASE: &str = "https://app-prod-ws.warnwetter.de/v30";

/// DWD static content base URL (nowcast warning feeds)
pub const DWD_STATIC_API_BASE: &str =
    "https://s3.eu-central-1.amazonaws.com/app-prod-static.warnwetter.de/v16";

/// Nowcast warnings feed, German
pub const NOWCAST_WARNINGS_DE: &str = "warnings_nowcast.json";

/// Nowcast warnings feed, English
pub const NOWCAST_WARNINGS_EN: &str = "warnings_nowcast_en.json";
