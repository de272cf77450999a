pub const THREAD_NAME: &str = "multirole_session";
pub const DEFAULT_STORE_PATH: &str = "./session_store.json";
pub const DEFAULT_PRIORITY: &str = "su,admin,vendor,courier";
pub const DEFAULT_TIMEOUT_SEC: &str = "10";
