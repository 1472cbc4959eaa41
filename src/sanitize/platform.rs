use std::fmt;
use std::str::FromStr;

use crate::error::CodecError;

/// Which filesystem's rules decide what counts as an invalid character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
	Windows,
	Unix,
}

// Shared by both Windows tables, on top of the control range 0x00..=0x1F.
const WINDOWS_PATH_RESERVED: [char; 4] = ['"', '<', '>', '|'];
// Extra characters a Windows file name may not hold, though a full path can.
const WINDOWS_NAME_RESERVED: [char; 5] = [':', '*', '?', '\\', '/'];

impl Platform {
	pub fn host() -> Self {
		if cfg!(windows) {
			Platform::Windows
		} else {
			Platform::Unix
		}
	}

	pub fn is_invalid_path_char(&self, c: char) -> bool {
		match self {
			Platform::Windows => c < '\u{20}' || WINDOWS_PATH_RESERVED.contains(&c),
			Platform::Unix => c == '\0',
		}
	}

	/// Path separators are rejected here but allowed by [`Self::is_invalid_path_char`].
	pub fn is_invalid_file_name_char(&self, c: char) -> bool {
		match self {
			Platform::Windows => self.is_invalid_path_char(c) || WINDOWS_NAME_RESERVED.contains(&c),
			Platform::Unix => c == '\0' || c == '/',
		}
	}

	pub fn invalid_path_chars(&self) -> Vec<char> {
		(0u8..=0x7f)
			.map(char::from)
			.filter(|c| self.is_invalid_path_char(*c))
			.collect()
	}

	pub fn invalid_file_name_chars(&self) -> Vec<char> {
		(0u8..=0x7f)
			.map(char::from)
			.filter(|c| self.is_invalid_file_name_char(*c))
			.collect()
	}
}

impl FromStr for Platform {
	type Err = CodecError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"host" | "" => Ok(Platform::host()),
			"windows" => Ok(Platform::Windows),
			"unix" | "linux" | "macos" => Ok(Platform::Unix),
			other => Err(CodecError::UnknownPlatform(other.to_string())),
		}
	}
}

impl fmt::Display for Platform {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Platform::Windows => write!(f, "windows"),
			Platform::Unix => write!(f, "unix"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_windows_tables() {
		let names = Platform::Windows.invalid_file_name_chars();
		let paths = Platform::Windows.invalid_path_chars();
		// 32 control characters plus the reserved punctuation
		assert_eq!(paths.len(), 32 + 4);
		assert_eq!(names.len(), 32 + 4 + 5);
		assert!(names.contains(&'/') && !paths.contains(&'/'));
		assert!(names.contains(&':') && !paths.contains(&':'));
		assert!(paths.iter().all(|c| names.contains(c)));
	}

	#[test]
	fn test_unix_tables() {
		assert_eq!(Platform::Unix.invalid_path_chars(), vec!['\0']);
		assert_eq!(Platform::Unix.invalid_file_name_chars(), vec!['\0', '/']);
	}

	#[test]
	fn test_parse() {
		assert_eq!("Windows".parse::<Platform>().unwrap(), Platform::Windows);
		assert_eq!("unix".parse::<Platform>().unwrap(), Platform::Unix);
		assert_eq!("host".parse::<Platform>().unwrap(), Platform::host());
		assert!("amiga".parse::<Platform>().is_err());
	}
}
