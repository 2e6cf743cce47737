use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for disaster location ids (URL slugs)
    /// Must be lowercase ascii alphanumeric with single hyphens
    /// - Valid: "ha-tinh", "tp-hcm", "ba-ria-vung-tau"
    /// - Invalid: "-hue", "hue-", "ha--tinh", "Ha-Tinh", "ha_tinh", "hà-tĩnh"
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();

    /// Regex for disaster status codes as written by the weather ingestion
    /// process: lowercase words joined by underscores, Vietnamese letters allowed
    /// - Valid: "ngập_lụt", "cảnh_báo_bão", "stable"
    /// - Invalid: "Ngập lụt", "_bão", "bão_"
    pub static ref STATUS_CODE_REGEX: Regex =
        Regex::new(r"^[\p{Ll}0-9]+(?:_[\p{Ll}0-9]+)*$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_regex_valid() {
        assert!(SLUG_REGEX.is_match("ha-tinh"));
        assert!(SLUG_REGEX.is_match("tp-hcm"));
        assert!(SLUG_REGEX.is_match("ba-ria-vung-tau"));
        assert!(SLUG_REGEX.is_match("hanoi"));
    }

    #[test]
    fn test_slug_regex_invalid() {
        assert!(!SLUG_REGEX.is_match("-hue")); // starts with hyphen
        assert!(!SLUG_REGEX.is_match("hue-")); // ends with hyphen
        assert!(!SLUG_REGEX.is_match("ha--tinh")); // double hyphen
        assert!(!SLUG_REGEX.is_match("Ha-Tinh")); // uppercase
        assert!(!SLUG_REGEX.is_match("ha_tinh")); // underscore
        assert!(!SLUG_REGEX.is_match("hà-tĩnh")); // diacritics
        assert!(!SLUG_REGEX.is_match(""));
    }

    #[test]
    fn test_status_code_regex() {
        assert!(STATUS_CODE_REGEX.is_match("ngập_lụt"));
        assert!(STATUS_CODE_REGEX.is_match("cảnh_báo_bão"));
        assert!(STATUS_CODE_REGEX.is_match("stable"));
        assert!(!STATUS_CODE_REGEX.is_match("Ngập lụt"));
        assert!(!STATUS_CODE_REGEX.is_match("_bão"));
        assert!(!STATUS_CODE_REGEX.is_match("bão_"));
    }
}
