use std::sync::OnceLock;

use log::debug;
use regex::Regex;

use crate::sanitize::Platform;

const RESERVED_DEVICE_NAMES: [&str; 22] = [
	"CON", "PRN", "AUX", "NUL",
	"COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8", "COM9",
	"LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

static EXTENSION: OnceLock<Regex> = OnceLock::new();

/// Replaces every character that is invalid in a file name or a path on the
/// host platform with `replacement`.
pub fn sanitize(input: &str, replacement: &str) -> String {
	sanitize_for(Platform::host(), input, replacement)
}

/// [`sanitize`] against an explicit platform's tables. Characters of
/// `replacement` that are themselves invalid are dropped from it first, so
/// the output never holds an invalid character.
pub fn sanitize_for(platform: Platform, input: &str, replacement: &str) -> String {
	let invalid = |c: char| platform.is_invalid_file_name_char(c) || platform.is_invalid_path_char(c);

	let replacement: String = replacement.chars().filter(|c| !invalid(*c)).collect();
	let mut result = String::with_capacity(input.len());
	for c in input.chars() {
		if invalid(c) {
			result.push_str(&replacement);
		} else {
			result.push(c);
		}
	}
	result
}

/// [`sanitize_for`] plus the Windows naming rules that go beyond single
/// characters: trailing dots and spaces are trimmed and reserved device names
/// (`CON`, `LPT1.txt`, ...) get a leading `_`.
pub fn sanitize_file_name(input: &str, replacement: &str, platform: Platform) -> String {
	let cleaned = sanitize_for(platform, input, replacement);
	if platform != Platform::Windows {
		return cleaned;
	}

	let trimmed = cleaned.trim_end_matches(&['.', ' '][..]);
	let stem = trimmed.split('.').next().unwrap_or_default().trim_end();
	if RESERVED_DEVICE_NAMES.iter().any(|name| name.eq_ignore_ascii_case(stem)) {
		debug!("{:?} is a reserved device name", stem);
		return format!("_{}", trimmed);
	}
	trimmed.to_string()
}

/// Returns the first three-character extension directly followed by `?`,
/// e.g. `.mp4` in `.../clip.mp4?sig=1`, or an empty string. Media hosts that
/// label flash video `.hlv` get `.flv` back.
pub fn extract_extension(url: &str) -> String {
	let pattern = EXTENSION.get_or_init(|| Regex::new(r"(\.\w{3})\?").expect("extension pattern is valid"));
	let ext = pattern
		.captures(url)
		.and_then(|caps| caps.get(1))
		.map(|m| m.as_str())
		.unwrap_or_default();

	if ext == ".hlv" {
		return ".flv".to_string();
	}
	ext.to_string()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_sanitize_windows() {
		assert_eq!(sanitize_for(Platform::Windows, r#"a<b>c:d"e/f\g|h?i*j"#, ""), "abcdefghij");
		assert_eq!(sanitize_for(Platform::Windows, "tab\there", "_"), "tab_here");
		assert_eq!(sanitize_for(Platform::Windows, "第1集: 开始", "-"), "第1集- 开始");
	}

	#[test]
	fn test_sanitize_unix() {
		assert_eq!(sanitize_for(Platform::Unix, "a/b\0c:d", "_"), "a_b_c:d");
	}

	#[test]
	fn test_sanitize_output_has_no_invalid_chars() {
		let inputs = ["", "clean.txt", "<<>>", "a\u{1}b\u{1f}c", "x/y\\z", "???***"];
		let replacements = ["", "_", "/", "a?b"];
		for platform in [Platform::Windows, Platform::Unix] {
			let banned = platform.invalid_file_name_chars();
			for input in inputs {
				for replacement in replacements {
					let out = sanitize_for(platform, input, replacement);
					assert!(!out.chars().any(|c| banned.contains(&c)), "{:?} -> {:?}", input, out);
				}
			}
		}
	}

	#[test]
	fn test_sanitize_host() {
		let banned = Platform::host().invalid_file_name_chars();
		assert!(!sanitize("a/b\0c", "").chars().any(|c| banned.contains(&c)));
	}

	#[test]
	fn test_reserved_device_names() {
		assert_eq!(sanitize_file_name("con", "", Platform::Windows), "_con");
		assert_eq!(sanitize_file_name("LPT1.txt", "", Platform::Windows), "_LPT1.txt");
		assert_eq!(sanitize_file_name("console.txt", "", Platform::Windows), "console.txt");
		assert_eq!(sanitize_file_name("name. . ", "", Platform::Windows), "name");
		assert_eq!(sanitize_file_name("con", "", Platform::Unix), "con");
	}

	#[test]
	fn test_extract_extension() {
		assert_eq!(extract_extension("http://x.com/video.hlv?token=1"), ".flv");
		assert_eq!(extract_extension("http://x.com/a.mp4?x=1&y=b.flv?"), ".mp4");
		assert_eq!(extract_extension("http://x.com/video.mp4"), "");
		assert_eq!(extract_extension("http://x.com/video.mpeg?x"), "");
		assert_eq!(extract_extension(""), "");
	}
}
