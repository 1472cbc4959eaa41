pub mod encoding;
pub mod script;
mod table;
pub mod transcode;

pub use encoding::CharEncoding;   // re-export
pub use script::{builtin_converter, to_simplified_chinese, to_traditional_chinese, ScriptConverter, TableConverter};   // re-export
pub use transcode::{gb2312_to_big5, transcode, transcode_labels, utf8_to_big5, utf8_to_gb2312};   // re-export
