use std::sync::OnceLock;

use regex::{Captures, Regex};

// One or more back-to-back `\uXXXX` escapes, so surrogate pairs land in one match.
static ESCAPE_RUN: OnceLock<Regex> = OnceLock::new();

fn escape_run() -> &'static Regex {
	ESCAPE_RUN.get_or_init(|| Regex::new(r"(?i)(?:\\u[0-9a-f]{4})+").expect("escape pattern is valid"))
}

/// Replaces `\uXXXX` escapes (hex digits in either case) with the characters
/// they stand for. Each escape is one UTF-16 code unit; a lone surrogate turns
/// into U+FFFD. Text around the escapes is left alone.
pub fn expand_unicode_escapes(input: &str) -> String {
	escape_run()
		.replace_all(input, |caps: &Captures| {
			let run = &caps[0];
			let units: Vec<u16> = run
				.as_bytes()
				.chunks(6)
				.filter_map(|escape| std::str::from_utf8(&escape[2..]).ok())
				.filter_map(|hex| u16::from_str_radix(hex, 16).ok())
				.collect();
			String::from_utf16_lossy(&units)
		})
		.into_owned()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_expand_basic() {
		assert_eq!(expand_unicode_escapes(r"\u4e2d\u6587"), "中文");
		assert_eq!(expand_unicode_escapes(r"title: \u4E2D!"), "title: 中!");
		assert_eq!(expand_unicode_escapes(r"\U0041"), "A");
	}

	#[test]
	fn test_non_matching_text_unchanged() {
		assert_eq!(expand_unicode_escapes("plain"), "plain");
		assert_eq!(expand_unicode_escapes(r"\u12"), r"\u12");
		assert_eq!(expand_unicode_escapes(r"\u12zz"), r"\u12zz");
		assert_eq!(expand_unicode_escapes(r"\x41"), r"\x41");
	}

	#[test]
	fn test_extra_hex_digits_stay() {
		assert_eq!(expand_unicode_escapes(r"\u00411"), "A1");
	}

	#[test]
	fn test_surrogates() {
		assert_eq!(expand_unicode_escapes(r"\ud83d\ude00"), "😀");
		assert_eq!(expand_unicode_escapes(r"a\ud83db"), "a\u{FFFD}b");
	}
}
