/// Storage key of the unscoped customer storefront token
pub const CUSTOMER_TOKEN_KEY: &str = "token";
/// Seconds before the real expiry at which a token is already treated as dead
pub const EXPIRY_BUFFER_SECS: i64 = 300;
/// Delimiter between header, payload and signature segments
pub const TOKEN_SEGMENT_DELIMITER: char = '.';
