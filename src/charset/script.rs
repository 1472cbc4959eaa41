// script.rs
use std::collections::HashMap;
use std::sync::OnceLock;

use super::table::{FOLD_SIMPLIFIED, FOLD_TRADITIONAL, SIMPLIFIED, TRADITIONAL};

/// Converts between Simplified and Traditional Chinese character forms.
///
/// Conversion is character-for-character: the output always has the same
/// number of chars as the input.
pub trait ScriptConverter {
	fn to_simplified(&self, source: &str) -> String;
	fn to_traditional(&self, source: &str) -> String;
}

/// A converter driven by a one-to-one character table. Characters without an
/// entry pass through unchanged.
#[derive(Debug, Clone, Default)]
pub struct TableConverter {
	to_simplified: HashMap<char, char>,
	to_traditional: HashMap<char, char>,
}

impl TableConverter {
	/// Builds a converter from `(simplified, traditional)` pairs. When several
	/// pairs share a character, the first one wins for that direction.
	pub fn from_pairs<I>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (char, char)>,
	{
		let mut converter = TableConverter::default();
		for (simplified, traditional) in pairs {
			converter.to_simplified.entry(traditional).or_insert(simplified);
			converter.to_traditional.entry(simplified).or_insert(traditional);
		}
		converter
	}

	/// Adds one-way `(simplified, traditional)` folds: the traditional form
	/// converts to the simplified one, but not back. Folds replace any
	/// existing simplification of the same traditional character.
	pub fn with_folds<I>(mut self, folds: I) -> Self
	where
		I: IntoIterator<Item = (char, char)>,
	{
		for (simplified, traditional) in folds {
			self.to_simplified.insert(traditional, simplified);
		}
		self
	}

	pub fn len(&self) -> usize {
		self.to_traditional.len()
	}

	pub fn is_empty(&self) -> bool {
		self.to_traditional.is_empty()
	}
}

impl ScriptConverter for TableConverter {
	fn to_simplified(&self, source: &str) -> String {
		source
			.chars()
			.map(|c| *self.to_simplified.get(&c).unwrap_or(&c))
			.collect()
	}

	fn to_traditional(&self, source: &str) -> String {
		source
			.chars()
			.map(|c| *self.to_traditional.get(&c).unwrap_or(&c))
			.collect()
	}
}

static BUILTIN: OnceLock<TableConverter> = OnceLock::new();

/// The built-in character table, built on first use and shared read-only
/// afterwards.
pub fn builtin_converter() -> &'static TableConverter {
	BUILTIN.get_or_init(|| {
		TableConverter::from_pairs(SIMPLIFIED.chars().zip(TRADITIONAL.chars()))
			.with_folds(FOLD_SIMPLIFIED.chars().zip(FOLD_TRADITIONAL.chars()))
	})
}

pub fn to_simplified_chinese(source: &str) -> String {
	builtin_converter().to_simplified(source)
}

pub fn to_traditional_chinese(source: &str) -> String {
	builtin_converter().to_traditional(source)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_tables_are_aligned() {
		assert_eq!(SIMPLIFIED.chars().count(), TRADITIONAL.chars().count());
		assert_eq!(FOLD_SIMPLIFIED.chars().count(), FOLD_TRADITIONAL.chars().count());
		for (s, t) in SIMPLIFIED.chars().zip(TRADITIONAL.chars()) {
			assert_ne!(s, t, "identity pair {}", s);
		}
		assert!(builtin_converter().len() > 2000);
	}

	#[test]
	fn test_to_traditional() {
		assert_eq!(to_traditional_chinese("中国学生"), "中國學生");
		assert_eq!(to_traditional_chinese("电话号码"), "電話號碼");
	}

	#[test]
	fn test_to_simplified() {
		assert_eq!(to_simplified_chinese("中國學生"), "中国学生");
		assert_eq!(to_simplified_chinese("龍馬精神"), "龙马精神");
	}

	#[test]
	fn test_media_titles_convert_fully() {
		let titles = [
			("视频", "視頻"),
			("电视剧", "電視劇"),
			("专辑", "專輯"),
			("动画剧场版", "動畫劇場版"),
			("纪录片下载", "紀錄片下載"),
			("粤语连续剧", "粵語連續劇"),
			("演唱会现场", "演唱會現場"),
			("弹幕评论", "彈幕評論"),
			("网盘链接", "網盤鏈接"),
			("无损音乐", "無損音樂"),
			("简体字幕组", "簡體字幕組"),
		];
		for (simplified, traditional) in titles {
			assert_eq!(to_traditional_chinese(simplified), traditional);
			assert_eq!(to_simplified_chinese(traditional), simplified);
		}
	}

	#[test]
	fn test_folds_only_simplify() {
		// 乾 and 幹 both fold into 干, which stays 干 on the way back
		assert_eq!(to_simplified_chinese("乾幹"), "干干");
		assert_eq!(to_traditional_chinese("干"), "干");
		assert_eq!(to_simplified_chinese("麵裡"), "面里");
		// 餘 folds to 余 even though 馀 also pairs with it
		assert_eq!(to_simplified_chinese("餘"), "余");
		assert_eq!(to_traditional_chinese("馀"), "餘");
	}

	#[test]
	fn test_char_count_preserved() {
		let inputs = ["", "abc", "繁體中文測試", "简体中文测试 with ascii", "😀國😀", "乾隆皇帝的頭髮"];
		for input in inputs {
			let n = input.chars().count();
			assert_eq!(to_simplified_chinese(input).chars().count(), n);
			assert_eq!(to_traditional_chinese(input).chars().count(), n);
		}
	}

	#[test]
	fn test_custom_table() {
		let converter = TableConverter::from_pairs([('x', 'X'), ('y', 'Y'), ('z', 'X')]);
		assert_eq!(converter.len(), 3);
		assert_eq!(converter.to_traditional("xyz!"), "XYX!");
		// 'X' maps back to the first simplified form
		assert_eq!(converter.to_simplified("XY"), "xy");

		let folded = converter.with_folds([('z', 'X'), ('q', 'Q')]);
		assert_eq!(folded.to_simplified("XQ"), "zq");
		assert_eq!(folded.to_traditional("q"), "q");
	}

	#[test]
	fn test_empty_table_passes_through() {
		let converter = TableConverter::default();
		assert!(converter.is_empty());
		assert_eq!(converter.to_simplified("國"), "國");
	}
}
