mod base64url;
mod hash;
mod percent;
mod unicode;

pub use base64url::{base64_url_decode, base64_url_encode};
pub use hash::{hash_bytes_hex, hash_hex};
pub use percent::{percent_decode, percent_decode_bytes, percent_decode_with, percent_encode};
pub use unicode::expand_unicode_escapes;
