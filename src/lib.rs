// lib.rs - Library interface for the text codec helpers

pub mod charset;
pub mod config;
pub mod error;
pub mod sanitize;
pub mod utils;

// Re-export commonly used types for easier testing
pub use charset::*;
pub use error::CodecError;
pub use sanitize::*;
pub use utils::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_examples() {
        assert_eq!(extract_extension("http://x.com/video.hlv?token=1"), ".flv");
        assert_eq!(percent_encode("\n", CharEncoding::Utf8), "%a");

        let encoded = base64_url_encode("a+b/c=");
        assert!(!encoded.contains(&['+', '/', '='][..]));

        let result = base64_url_decode("***");
        assert!(matches!(result, Err(CodecError::Decode(_))));
    }

    #[test]
    fn test_download_name_pipeline() {
        // a title scraped from a page, escaped, then turned into a file name
        let title = expand_unicode_escapes(r"\u4e2d\u6587: part 1/2");
        let traditional = to_traditional_chinese(&title);
        let name = sanitize_for(Platform::Windows, &traditional, "_");
        let ext = extract_extension("http://cdn.example.com/v/123.hlv?k=abc");
        assert_eq!(format!("{}{}", name, ext), "中文_ part 1_2.flv");
    }

    #[test]
    fn test_gb18030_url_round_trip() {
        let keyword = "动画下载";
        let encoded = percent_encode(keyword, CharEncoding::Gb18030);
        assert!(encoded.starts_with('%'));
        assert_eq!(percent_decode(&encoded).unwrap(), keyword);
    }

    #[test]
    fn test_hash_is_stable_across_scripts() {
        let simplified = "电视剧";
        let traditional = to_traditional_chinese(simplified);
        assert_ne!(hash_hex(simplified), hash_hex(&traditional));
        assert_eq!(hash_hex(&to_simplified_chinese(&traditional)), hash_hex(simplified));
    }

    #[test]
    fn test_transcode_error_type() {
        let err = transcode_labels("x", "shift-jis", "utf-8").unwrap_err();
        assert_eq!(err.to_string(), "Unsupported encoding shift-jis");
    }
}
