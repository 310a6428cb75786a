//! Narrative Formatter — renders a profile as the sectioned text block the
//! generator reads. Every section is always present; empty ones carry an
//! explicit "no information" line.

use crate::models::profile::{Education, EducationDateRange, EducationPeriod, Position, Profile};

const NO_PERIOD: &str = "기간 정보 없음";
const PRESENT: &str = "현재";
const NO_START: &str = "시작일 정보 없음";

pub fn format_profile(profile: &Profile) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push("\n### 학력 사항".to_string());
    if profile.educations.is_empty() {
        parts.push("  (학력 정보 없음)".to_string());
    } else {
        parts.extend(
            profile
                .educations
                .iter()
                .enumerate()
                .map(|(i, edu)| education_line(i + 1, edu)),
        );
    }

    parts.push(text_section("직무 요약", profile.headline.as_deref(), "(직무 요약 정보 없음)"));
    parts.push(text_section("개인 요약", profile.summary.as_deref(), "(개인 요약 정보 없음)"));
    let skills = profile.skills.join(", ");
    parts.push(text_section("기술 요약", Some(skills.as_str()), "(기술 정보 없음)"));

    parts.push("\n### 경력 사항:".to_string());
    if profile.positions.is_empty() {
        parts.push("  (경력 정보 없음)".to_string());
    } else {
        parts.extend(
            profile
                .positions
                .iter()
                .enumerate()
                .map(|(i, pos)| position_block(i + 1, pos)),
        );
    }

    parts.join("\n")
}

fn text_section(title: &str, body: Option<&str>, placeholder: &str) -> String {
    let body = body.map(str::trim).filter(|b| !b.is_empty()).unwrap_or(placeholder);
    format!("### {title} : \n{body}")
}

fn education_line(index: usize, edu: &Education) -> String {
    let school = non_blank(edu.school_name.as_deref()).unwrap_or("학교명 미기재");
    let degree_field = format!(
        "{} {}",
        edu.degree_name.as_deref().unwrap_or_default(),
        edu.field_of_study.as_deref().unwrap_or_default()
    );
    let degree_field = non_blank(Some(degree_field.as_str())).unwrap_or("학위/전공 미기재");
    format!("{index}. {school} - {degree_field} ({})", education_period(edu))
}

/// Rendered period: `YYYY[.MM] ~ YYYY[.MM]`, `YYYY[.MM] ~ 현재`, free text,
/// or the no-period sentinel.
pub fn education_period(edu: &Education) -> String {
    match edu.period() {
        EducationPeriod::Structured(range) => structured_period(&range),
        EducationPeriod::Text(text) => text,
        EducationPeriod::Unknown => NO_PERIOD.to_string(),
    }
}

fn structured_period(range: &EducationDateRange) -> String {
    let start = range.start_date_on.and_then(|ym| ym.display());
    let end = range.end_date_on.and_then(|ym| ym.display());
    match (start, end) {
        (Some(start), Some(end)) => format!("{start} ~ {end}"),
        (Some(start), None) => format!("{start} ~ {PRESENT}"),
        _ => NO_PERIOD.to_string(),
    }
}

fn position_block(index: usize, pos: &Position) -> String {
    let company = non_blank(pos.company_name.as_deref()).unwrap_or("회사명 미기재");
    let title = non_blank(pos.title.as_deref()).unwrap_or("직무 미기재");
    let range = pos.start_end_date.unwrap_or_default();
    let start = range
        .start
        .and_then(|ym| ym.display())
        .unwrap_or_else(|| NO_START.to_string());
    let end = range
        .end
        .and_then(|ym| ym.display())
        .unwrap_or_else(|| PRESENT.to_string());

    let mut block = format!("{index}. {company} - {title} ({start} ~ {end})");
    if let Some(description) = non_blank(pos.description.as_deref()) {
        let indented = description.replace('\n', "\n    ");
        block.push_str(&format!("\n    주요 업무/성과: \n    {indented}"));
    }
    block
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
