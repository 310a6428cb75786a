//! The fixed experience-tag vocabulary.

/// Tags the generator may emit. Anything else is rejected by the parser.
///
/// "리더쉽" and "리더십" are both listed: the generator uses either spelling
/// and both are accepted as-is.
///
/// "성장기 스타트업 경험" is spelled with a single space; older outputs used
/// a double space. Matching ignores whitespace, but the returned spelling is
/// the single-spaced one.
pub const CANONICAL_TAGS: &[&str] = &[
    "물류 도메인 경험",
    "상위권 대학교",
    "대규모 회사 경험",
    "성장기 스타트업 경험",
    "리더쉽",
    "리더십",
    "대용량 데이터 처리 경험",
    "IPO",
    "M&A 경험",
    "신규 투자 유치 경험",
    "신기술 도입 경험",
    "글로벌 프로젝트 경험",
    "고객 관리 경험",
    "조직 관리 경험",
    "교육 및 멘토링 경험",
];

/// Presentation order of the final tag list. Tags missing here sort last.
pub const PRESENTATION_ORDER: &[&str] = &[
    "상위권 대학교",
    "대규모 회사 경험",
    "성장기 스타트업 경험",
    "리더쉽",
    "리더십",
    "대용량 데이터 처리 경험",
    "IPO",
    "M&A 경험",
    "신규 투자 유치 경험",
    "신기술 도입 경험",
    "글로벌 프로젝트 경험",
    "고객 관리 경험",
    "조직 관리 경험",
    "교육 및 멘토링 경험",
];

/// Lower-cased with all whitespace removed; the form tags are compared in.
pub fn normalize_tag(tag: &str) -> String {
    tag.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
