use crate::charset::CharEncoding;
use crate::error::CodecError;

/// Pushes `source` through `from` and then `to`, so the result only holds
/// characters both encodings can represent. Anything unmappable along the way
/// comes back as `?`.
pub fn transcode(source: &str, from: CharEncoding, to: CharEncoding) -> String {
	let source_bytes = from.encode(source);
	let text = from.decode(&source_bytes);
	let target_bytes = to.encode(&text);
	to.decode(&target_bytes)
}

/// Same as [`transcode`], with both encodings given by registry label.
pub fn transcode_labels(source: &str, from: &str, to: &str) -> Result<String, CodecError> {
	let from = CharEncoding::from_label(from)?;
	let to = CharEncoding::from_label(to)?;
	Ok(transcode(source, from, to))
}

pub fn utf8_to_big5(source: &str) -> String {
	transcode(source, CharEncoding::Utf8, CharEncoding::Big5)
}

pub fn utf8_to_gb2312(source: &str) -> String {
	transcode(source, CharEncoding::Utf8, CharEncoding::Gb2312)
}

pub fn gb2312_to_big5(source: &str) -> String {
	transcode(source, CharEncoding::Gb2312, CharEncoding::Big5)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_shared_characters_survive() {
		// 中文 exists in both GBK and Big5
		assert_eq!(gb2312_to_big5("中文abc"), "中文abc");
		assert_eq!(utf8_to_big5("中文"), "中文");
		assert_eq!(utf8_to_gb2312("中文"), "中文");
	}

	#[test]
	fn test_unmappable_becomes_question_mark() {
		assert_eq!(utf8_to_big5("a한b"), "a?b");
		assert_eq!(utf8_to_gb2312("x😀y"), "x?y");
	}

	#[test]
	fn test_utf8_to_utf8_is_identity() {
		let s = "héllo 世界 😀";
		assert_eq!(transcode(s, CharEncoding::Utf8, CharEncoding::Default), s);
	}

	#[test]
	fn test_transcode_labels() {
		assert_eq!(transcode_labels("中文", "gb2312", "big5").unwrap(), "中文");
		assert!(matches!(
			transcode_labels("x", "utf-8", "ebcdic"),
			Err(CodecError::UnsupportedEncoding(_))
		));
		assert!(matches!(
			transcode_labels("x", "nope", "utf-8"),
			Err(CodecError::UnsupportedEncoding(_))
		));
	}
}
