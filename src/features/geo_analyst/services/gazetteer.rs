//! Free-text address to (region, province) resolution.
//!
//! Matching is case-insensitive substring containment. Provinces are scanned
//! region by region (North, Central, South) in list order and the first alias
//! found in the address wins. An address that mentions two provinces resolves
//! to whichever comes first in that order, not whichever comes first in the
//! text.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::features::geo_analyst::models::Region;
use crate::shared::text::title_case;

/// A gazetteer province: canonical display name plus the lowercase aliases
/// matched against addresses.
#[derive(Debug, PartialEq, Eq)]
pub struct Province {
    pub name: &'static str,
    pub region: Region,
    pub aliases: &'static [&'static str],
}

impl Province {
    fn matches(&self, haystack: &str) -> bool {
        self.aliases.iter().any(|alias| haystack.contains(alias))
    }

    /// Lowercase key used by the static risk table
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

macro_rules! province {
    ($region:expr, $name:expr, [$($alias:expr),+ $(,)?]) => {
        Province {
            name: $name,
            region: $region,
            aliases: &[$($alias),+],
        }
    };
}

use Region::{Central, North, South};

static PROVINCES: &[Province] = &[
    // Miền Bắc
    province!(North, "Hà Nội", ["hà nội"]),
    province!(North, "Hải Phòng", ["hải phòng"]),
    province!(North, "Quảng Ninh", ["quảng ninh"]),
    province!(North, "Nam Định", ["nam định"]),
    province!(North, "Thái Bình", ["thái bình"]),
    province!(North, "Bắc Giang", ["bắc giang"]),
    province!(North, "Bắc Ninh", ["bắc ninh"]),
    province!(North, "Hải Dương", ["hải dương"]),
    province!(North, "Hưng Yên", ["hưng yên"]),
    province!(North, "Vĩnh Phúc", ["vĩnh phúc"]),
    province!(North, "Phú Thọ", ["phú thọ"]),
    province!(North, "Thái Nguyên", ["thái nguyên"]),
    province!(North, "Lạng Sơn", ["lạng sơn"]),
    province!(North, "Cao Bằng", ["cao bằng"]),
    province!(North, "Lào Cai", ["lào cai"]),
    province!(North, "Yên Bái", ["yên bái"]),
    province!(North, "Tuyên Quang", ["tuyên quang"]),
    province!(North, "Hà Giang", ["hà giang"]),
    province!(North, "Điện Biên", ["điện biên"]),
    province!(North, "Lai Châu", ["lai châu"]),
    province!(North, "Sơn La", ["sơn la"]),
    province!(North, "Hòa Bình", ["hòa bình"]),
    province!(North, "Ninh Bình", ["ninh bình"]),
    // Miền Trung
    province!(Central, "Thanh Hóa", ["thanh hóa"]),
    province!(Central, "Nghệ An", ["nghệ an"]),
    province!(Central, "Hà Tĩnh", ["hà tĩnh"]),
    province!(Central, "Quảng Bình", ["quảng bình"]),
    province!(Central, "Quảng Trị", ["quảng trị"]),
    province!(Central, "Thừa Thiên Huế", ["thừa thiên huế"]),
    province!(Central, "Đà Nẵng", ["đà nẵng"]),
    province!(Central, "Quảng Nam", ["quảng nam"]),
    province!(Central, "Quảng Ngãi", ["quảng ngãi"]),
    province!(Central, "Bình Định", ["bình định"]),
    province!(Central, "Phú Yên", ["phú yên"]),
    province!(Central, "Khánh Hòa", ["khánh hòa"]),
    province!(Central, "Ninh Thuận", ["ninh thuận"]),
    province!(Central, "Bình Thuận", ["bình thuận"]),
    province!(Central, "Kon Tum", ["kon tum"]),
    province!(Central, "Gia Lai", ["gia lai"]),
    province!(Central, "Đắk Lắk", ["đắk lắk"]),
    province!(Central, "Đắk Nông", ["đắk nông"]),
    province!(Central, "Lâm Đồng", ["lâm đồng"]),
    // Miền Nam
    province!(South, "TP Hồ Chí Minh", ["tp.hcm", "hồ chí minh", "sài gòn"]),
    province!(South, "Bình Dương", ["bình dương"]),
    province!(South, "Đồng Nai", ["đồng nai"]),
    province!(South, "Bà Rịa - Vũng Tàu", ["bà rịa", "vũng tàu"]),
    province!(South, "Bình Phước", ["bình phước"]),
    province!(South, "Tây Ninh", ["tây ninh"]),
    province!(South, "Long An", ["long an"]),
    province!(South, "Tiền Giang", ["tiền giang"]),
    province!(South, "Bến Tre", ["bến tre"]),
    province!(South, "Trà Vinh", ["trà vinh"]),
    province!(South, "Vĩnh Long", ["vĩnh long"]),
    province!(South, "Đồng Tháp", ["đồng tháp"]),
    province!(South, "An Giang", ["an giang"]),
    province!(South, "Kiên Giang", ["kiên giang"]),
    province!(South, "Cần Thơ", ["cần thơ"]),
    province!(South, "Hậu Giang", ["hậu giang"]),
    province!(South, "Sóc Trăng", ["sóc trăng"]),
    province!(South, "Bạc Liêu", ["bạc liêu"]),
    province!(South, "Cà Mau", ["cà mau"]),
];

/// Corrections applied before querying the registry by province name
static PROVINCE_ALIASES: &[(&str, &str)] = &[
    ("hồ chí minh", "TP Hồ Chí Minh"),
    ("tp.hcm", "TP Hồ Chí Minh"),
    ("hcm", "TP Hồ Chí Minh"),
    ("sài gòn", "TP Hồ Chí Minh"),
    ("tp hồ chí minh", "TP Hồ Chí Minh"),
    ("vũng tàu", "Bà Rịa - Vũng Tàu"),
    ("bà rịa", "Bà Rịa - Vũng Tàu"),
    ("bà rịa - vũng tàu", "Bà Rịa - Vũng Tàu"),
    ("huế", "Thừa Thiên Huế"),
    ("thừa thiên huế", "Thừa Thiên Huế"),
];

lazy_static! {
    static ref PROVINCE_ALIAS_MAP: HashMap<&'static str, &'static str> =
        PROVINCE_ALIASES.iter().copied().collect();
}

/// All gazetteer provinces in iteration order
pub fn provinces() -> &'static [Province] {
    PROVINCES
}

/// Provinces of one region, in list order
pub fn provinces_in(region: Region) -> impl Iterator<Item = &'static Province> {
    PROVINCES.iter().filter(move |p| p.region == region)
}

/// First province whose alias occurs in `address`
pub fn extract_province(address: &str) -> Option<&'static Province> {
    let haystack = address.to_lowercase();
    PROVINCES.iter().find(|p| p.matches(&haystack))
}

/// Region of the first province whose alias occurs in `address`
pub fn detect_region(address: &str) -> Option<Region> {
    extract_province(address).map(|p| p.region)
}

/// Maps an extracted province name onto the registry's canonical spelling.
///
/// Known multi-form names go through the alias table; anything else is
/// title-cased.
pub fn normalize_province(raw: &str) -> String {
    let key = raw.trim().to_lowercase();
    match PROVINCE_ALIAS_MAP.get(key.as_str()) {
        Some(canonical) => canonical.to_string(),
        None => title_case(raw.trim()),
    }
}
