pub const ENDPOINT_PROFILE_PATH: &str = "api/user/profile";
/// Where a logout navigates when the caller gives no path
pub const DEFAULT_REDIRECT_PATH: &str = "/";
/// Status code with which the backend revokes a session
pub const UNAUTHORIZED_STATUS: u16 = 401;
