mod claim;
mod codec;
mod constants;
mod expiry;
mod log;

pub mod token_fields;

pub use claim::DecodedClaims;
pub use codec::decode;
pub use constants::{CUSTOMER_TOKEN_KEY, EXPIRY_BUFFER_SECS};
pub use expiry::{now_epoch_secs, ExpiryPolicy};
