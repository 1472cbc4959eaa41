use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
	#[error("Decode error {0}")]
	Decode(String),

	#[error("Unsupported encoding {0}")]
	UnsupportedEncoding(String),

	#[error("Unknown platform {0}")]
	UnknownPlatform(String),
}

impl From<base64::DecodeError> for CodecError {
	fn from(err: base64::DecodeError) -> Self {
		CodecError::Decode(format!("invalid base64: {}", err))
	}
}

impl From<FromUtf8Error> for CodecError {
	fn from(err: FromUtf8Error) -> Self {
		CodecError::Decode(format!("invalid utf-8: {}", err))
	}
}
