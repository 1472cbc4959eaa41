use std::fmt;
use std::str::FromStr;

use encoding_rs::{EncoderResult, Encoding, BIG5, GB18030, GBK, UTF_8};
use log::debug;

use crate::error::CodecError;

/// Named character encodings understood by the codec.
///
/// `Default` is the process-wide default text encoding, which is always UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharEncoding {
	Utf8,
	Gb2312,
	Gbk,
	Gb18030,
	Big5,
	Default,
}

// Fixed label table. Codepage numbers follow the Windows names.
const REGISTRY: &[(&str, CharEncoding)] = &[
	("utf-8", CharEncoding::Utf8),
	("utf8", CharEncoding::Utf8),
	("65001", CharEncoding::Utf8),
	("gb2312", CharEncoding::Gb2312),
	("936", CharEncoding::Gb2312),
	("cp936", CharEncoding::Gb2312),
	("gbk", CharEncoding::Gbk),
	("gb18030", CharEncoding::Gb18030),
	("54936", CharEncoding::Gb18030),
	("big5", CharEncoding::Big5),
	("950", CharEncoding::Big5),
	("cp950", CharEncoding::Big5),
	("default", CharEncoding::Default),
];

// Byte substituted for characters the target encoding has no mapping for.
const FALLBACK_BYTE: u8 = b'?';

impl CharEncoding {
	pub const ALL: [CharEncoding; 6] = [
		CharEncoding::Utf8,
		CharEncoding::Gb2312,
		CharEncoding::Gbk,
		CharEncoding::Gb18030,
		CharEncoding::Big5,
		CharEncoding::Default,
	];

	/// Looks a label up in the registry, ignoring case and surrounding whitespace.
	pub fn from_label(label: &str) -> Result<Self, CodecError> {
		let wanted = label.trim().to_ascii_lowercase();
		REGISTRY
			.iter()
			.find(|(name, _)| *name == wanted)
			.map(|(_, enc)| *enc)
			.ok_or_else(|| CodecError::UnsupportedEncoding(label.to_string()))
	}

	pub fn name(&self) -> &'static str {
		match self {
			CharEncoding::Utf8 => "utf-8",
			CharEncoding::Gb2312 => "gb2312",
			CharEncoding::Gbk => "gbk",
			CharEncoding::Gb18030 => "gb18030",
			CharEncoding::Big5 => "big5",
			CharEncoding::Default => "default",
		}
	}

	/// The codec tables backing this encoding. GB2312 is served by the GBK
	/// superset, the same way browsers treat the label.
	pub fn codec(&self) -> &'static Encoding {
		match self {
			CharEncoding::Utf8 | CharEncoding::Default => UTF_8,
			CharEncoding::Gb2312 | CharEncoding::Gbk => GBK,
			CharEncoding::Gb18030 => GB18030,
			CharEncoding::Big5 => BIG5,
		}
	}

	/// Encodes `text`, writing `?` for every character the encoding cannot represent.
	pub fn encode(&self, text: &str) -> Vec<u8> {
		let codec = self.codec();
		if codec == UTF_8 {
			return text.as_bytes().to_vec();
		}

		let mut encoder = codec.new_encoder();
		let mut out = Vec::with_capacity(text.len() + 16);
		let mut buf = [0u8; 1024];
		let mut rest = text;
		let mut unmappable = 0usize;

		loop {
			let (result, read, written) =
				encoder.encode_from_utf8_without_replacement(rest, &mut buf, true);
			out.extend_from_slice(&buf[..written]);
			rest = &rest[read..];
			match result {
				EncoderResult::InputEmpty => break,
				EncoderResult::OutputFull => {}
				EncoderResult::Unmappable(ch) => {
					debug!("{} cannot represent {:?}, using fallback", self.name(), ch);
					unmappable += 1;
					out.push(FALLBACK_BYTE);
				}
			}
		}

		if unmappable > 0 {
			debug!("{} characters replaced while encoding to {}", unmappable, self.name());
		}
		out
	}

	/// Decodes `bytes`; malformed sequences become U+FFFD.
	pub fn decode(&self, bytes: &[u8]) -> String {
		let (text, had_errors) = self.codec().decode_without_bom_handling(bytes);
		if had_errors {
			debug!("malformed {} input replaced with U+FFFD", self.name());
		}
		text.into_owned()
	}
}

impl Default for CharEncoding {
	fn default() -> Self {
		CharEncoding::Default
	}
}

impl FromStr for CharEncoding {
	type Err = CodecError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		CharEncoding::from_label(s)
	}
}

impl fmt::Display for CharEncoding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
