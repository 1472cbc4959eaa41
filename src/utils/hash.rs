/// MD5 fingerprint of the UTF-8 bytes of `content`, as 32 lowercase hex chars.
///
/// Used for identity and dedup only. Do not rely on it for collision resistance.
pub fn hash_hex(content: &str) -> String {
	hash_bytes_hex(content.as_bytes())
}

pub fn hash_bytes_hex(bytes: &[u8]) -> String {
	format!("{:x}", md5::compute(bytes))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_known_digests() {
		assert_eq!(hash_hex(""), "d41d8cd98f00b204e9800998ecf8427e");
		assert_eq!(hash_hex("abc"), "900150983cd24fb0d6963f7d28e17f72");
		assert_eq!(
			hash_hex("The quick brown fox jumps over the lazy dog"),
			"9e107d9d372bb6826bd81d3542a419d6"
		);
	}

	#[test]
	fn test_shape_and_determinism() {
		for input in ["a", "中文", "a much longer input string\nwith lines"] {
			let first = hash_hex(input);
			assert_eq!(first.len(), 32);
			assert!(first.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
			assert_eq!(first, hash_hex(input));
		}
		assert_ne!(hash_hex("a"), hash_hex("b"));
	}

	#[test]
	fn test_bytes_match_str() {
		assert_eq!(hash_bytes_hex("中文".as_bytes()), hash_hex("中文"));
	}
}
