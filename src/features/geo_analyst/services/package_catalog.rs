//! Insurance package metadata keyed by short code.
//!
//! Both recommendation paths resolve through this one table: registry rows
//! list codes directly, the keyword rules name a code per rule.

#[derive(Debug, PartialEq, Eq)]
pub struct PackageCatalogEntry {
    pub code: &'static str,
    pub name: &'static str,
    /// URL slug of the package page
    pub package_id: &'static str,
    pub percent: u8,
    pub reason: &'static str,
}

pub const COMPREHENSIVE_DISASTER: &str = "bh_thien_tai_tong_hop";

static PACKAGE_CATALOG: &[PackageCatalogEntry] = &[
    // Codes written by the registry seeding and weather ingestion
    PackageCatalogEntry {
        code: "bh_thien_tai_mien_bac",
        name: "Bảo Hiểm Thiệt Hại Do Ngập Lụt",
        package_id: "flood-basic",
        percent: 95,
        reason: "Bảo vệ tài sản nhà cửa, đồ đạc khỏi thiệt hại do ngập lụt, lũ quét tại các vùng có nguy cơ cao",
    },
    PackageCatalogEntry {
        code: "bh_thien_tai_mien_trung",
        name: "Bảo Hiểm Thiệt Hại Do Bão",
        package_id: "storm-comprehensive",
        percent: 95,
        reason: "Bảo vệ toàn diện tài sản khỏi thiệt hại do bão, gió lốc, sét đánh tại khu vực ven biển",
    },
    PackageCatalogEntry {
        code: "bh_xe_co_gioi",
        name: "Bảo Hiểm Phương Tiện Thiên Tai",
        package_id: "disaster-vehicle",
        percent: 90,
        reason: "Bảo vệ xe ô tô, xe máy khỏi thiệt hại do ngập nước, bão, lũ, cây đổ",
    },
    PackageCatalogEntry {
        code: "bh_xe_ngap_nuoc",
        name: "Bảo Hiểm Xe Ngập Nước",
        package_id: "vehicle-flood",
        percent: 92,
        reason: "Bồi thường chi phí sửa chữa động cơ, hệ thống điện bị hư hỏng do ngập nước",
    },
    PackageCatalogEntry {
        code: "bh_tai_san",
        name: "Bảo Hiểm Tài Sản Gia Đình",
        package_id: "property-general",
        percent: 88,
        reason: "Bảo vệ tài sản, đồ đạc trong nhà khỏi thiệt hại do thiên tai",
    },
    PackageCatalogEntry {
        code: "bh_nha_o",
        name: "Bảo Hiểm Nhà Ở Trước Bão",
        package_id: "home-storm",
        percent: 93,
        reason: "Đảm bảo chi phí sửa chữa hoặc xây dựng lại nhà cửa bị hư hại do bão",
    },
    PackageCatalogEntry {
        code: "bh_nha_cua",
        name: "Bảo Hiểm Nhà Cửa Thiên Tai",
        package_id: "home-disaster",
        percent: 93,
        reason: "Bảo vệ nhà cửa khỏi thiệt hại do thiên tai (bão, lũ, sét đánh)",
    },
    PackageCatalogEntry {
        code: "bh_than_the",
        name: "Bảo Hiểm Thân Thể Tai Nạn",
        package_id: "personal-accident",
        percent: 85,
        reason: "Bảo vệ sức khỏe và tính mạng khi gặp tai nạn do thiên tai",
    },
    PackageCatalogEntry {
        code: "bh_suc_khoe",
        name: "Bảo Hiểm Sức Khỏe",
        package_id: "health-basic",
        percent: 80,
        reason: "Bảo vệ sức khỏe toàn diện, đặc biệt trong điều kiện thời tiết khắc nghiệt",
    },
    PackageCatalogEntry {
        code: "bh_du_lich",
        name: "Bảo Hiểm Du Lịch",
        package_id: "travel-insurance",
        percent: 75,
        reason: "Bảo vệ an toàn khi di chuyển trong điều kiện thiên tai",
    },
    PackageCatalogEntry {
        code: "bh_nong_nghiep",
        name: "Bảo Hiểm Nông Nghiệp",
        package_id: "agriculture",
        percent: 85,
        reason: "Bảo vệ mùa màng, vật nuôi khỏi thiệt hại do thiên tai",
    },
    // Packages offered by the keyword rules
    PackageCatalogEntry {
        code: COMPREHENSIVE_DISASTER,
        name: "Bảo hiểm thiên tai tổng hợp",
        package_id: "disaster-comprehensive",
        percent: 95,
        reason: "Khu vực có cảnh báo bão, nguy cơ thiệt hại cao về người và tài sản.",
    },
    PackageCatalogEntry {
        code: "bh_phuong_tien_ngap_nuoc",
        name: "Bảo hiểm phương tiện ngập nước",
        package_id: "vehicle-waterlogging",
        percent: 90,
        reason: "Nguy cơ ngập úng cao, phương tiện có thể bị hư hại do nước.",
    },
    PackageCatalogEntry {
        code: "bh_nha_cua_lu_lut",
        name: "Bảo hiểm nhà cửa thiên tai",
        package_id: "home-flood",
        percent: 85,
        reason: "Nguy cơ hư hại nhà cửa và tài sản do lũ lụt.",
    },
    PackageCatalogEntry {
        code: "bh_suc_khoe_thien_tai",
        name: "Bảo hiểm sức khỏe thiên tai",
        package_id: "health-disaster",
        percent: 80,
        reason: "Thời tiết khắc nghiệt ảnh hưởng đến sức khỏe, nguy cơ bệnh tật cao.",
    },
    PackageCatalogEntry {
        code: "bh_tai_nan_ca_nhan",
        name: "Bảo hiểm tai nạn cá nhân",
        package_id: "accident-road",
        percent: 75,
        reason: "Điều kiện giao thông nguy hiểm, nguy cơ tai nạn cao.",
    },
    PackageCatalogEntry {
        code: "bh_tai_san_sat_lo",
        name: "Bảo hiểm tài sản thiên tai",
        package_id: "property-landslide",
        percent: 88,
        reason: "Nguy cơ sạt lở đất, ảnh hưởng đến tài sản và an toàn.",
    },
];

pub fn get(code: &str) -> Option<&'static PackageCatalogEntry> {
    PACKAGE_CATALOG.iter().find(|entry| entry.code == code)
}

pub fn entries() -> &'static [PackageCatalogEntry] {
    PACKAGE_CATALOG
}
