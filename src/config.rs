pub const PLUGIN_NAME: &str = "dayz-dev";
pub const DOCS_URL: &str = "https://github.com/chaos/dayz-dev-plugin";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
