use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::CodecError;

/// Standard Base64 over the UTF-8 bytes of `input`, with `+`, `/` and `=`
/// swapped for `*`, `-` and `.` so the result can sit in a URL unescaped.
pub fn base64_url_encode(input: &str) -> String {
	STANDARD
		.encode(input.as_bytes())
		.chars()
		.map(|c| match c {
			'+' => '*',
			'/' => '-',
			'=' => '.',
			c => c,
		})
		.collect()
}

/// Reverses [`base64_url_encode`]. Bad padding, characters outside the
/// alphabet and non UTF-8 payloads all fail with [`CodecError::Decode`].
pub fn base64_url_decode(input: &str) -> Result<String, CodecError> {
	let standard: String = input
		.chars()
		.map(|c| match c {
			'.' => '=',
			'*' => '+',
			'-' => '/',
			c => c,
		})
		.collect();
	let bytes = STANDARD.decode(standard)?;
	Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_encode_replaces_reserved_characters() {
		let encoded = base64_url_encode("a+b/c=");
		assert!(!encoded.contains(&['+', '/', '='][..]));
		// "?>?" is "Pz4/" in standard base64
		assert_eq!(base64_url_encode("?>?"), "Pz4-");
		assert_eq!(base64_url_encode("a"), "YQ..");
	}

	#[test]
	fn test_round_trip() {
		let inputs = ["", "hello", "中文下载", "a+b/c=", "emoji 😀 ~~~", "\u{0}\u{7f}"];
		for input in inputs {
			assert_eq!(base64_url_decode(&base64_url_encode(input)).unwrap(), input);
		}
	}

	#[test]
	fn test_decode_malformed() {
		assert!(matches!(base64_url_decode("***"), Err(CodecError::Decode(_))));
		assert!(matches!(base64_url_decode("YQ."), Err(CodecError::Decode(_))));
		assert!(matches!(base64_url_decode("Y#=="), Err(CodecError::Decode(_))));
	}

	#[test]
	fn test_decode_invalid_utf8() {
		// 0xff 0xfe
		assert!(matches!(base64_url_decode("--4."), Err(CodecError::Decode(_))));
	}
}
