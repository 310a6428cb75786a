use serde::{Deserialize, Serialize};

/// Candidate profile as received by the inference endpoint.
///
/// Every field is optional; unknown fields (names, photo URL, projects …) are
/// accepted and ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub headline: Option<String>,
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub positions: Vec<Position>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub educations: Vec<Education>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub company_name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub company_location: Option<String>,
    pub start_end_date: Option<DateRange>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

impl YearMonth {
    /// `YYYY` or `YYYY.MM`; `None` when the year is unknown.
    pub fn display(&self) -> Option<String> {
        let year = self.year?;
        Some(match self.month {
            Some(month) => format!("{year}.{month:02}"),
            None => year.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<YearMonth>,
    pub end: Option<YearMonth>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationDateRange {
    pub start_date_on: Option<YearMonth>,
    pub end_date_on: Option<YearMonth>,
}

/// The education `startEndDate` field arrives either as free text
/// ("2010 - 2012") or as a structured range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EducationDates {
    Text(String),
    Range(EducationDateRange),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub school_name: Option<String>,
    pub degree_name: Option<String>,
    pub field_of_study: Option<String>,
    pub start_end_date: Option<EducationDates>,
    pub origin_start_end_date: Option<EducationDateRange>,
}

/// The single authoritative study period of an education entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EducationPeriod {
    Structured(EducationDateRange),
    Text(String),
    Unknown,
}

impl Education {
    /// Resolves the period: origin range, then structured range, then
    /// non-blank free text, then unknown.
    pub fn period(&self) -> EducationPeriod {
        if let Some(origin) = self.origin_start_end_date {
            return EducationPeriod::Structured(origin);
        }
        match &self.start_end_date {
            Some(EducationDates::Range(range)) => EducationPeriod::Structured(*range),
            Some(EducationDates::Text(text)) if !text.trim().is_empty() => {
                EducationPeriod::Text(text.trim().to_string())
            }
            _ => EducationPeriod::Unknown,
        }
    }
}

impl Profile {
    /// First non-blank school name, used as the university retrieval query.
    pub fn university_query(&self) -> Option<String> {
        self.educations
            .iter()
            .filter_map(|edu| edu.school_name.as_deref())
            .map(str::trim)
            .find(|name| !name.is_empty())
            .map(str::to_string)
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_deserializes_camel_case_and_ignores_unknown_fields() {
        let json = r#"{
            "firstName": "길동",
            "lastName": "홍",
            "headline": "CTO at 엘박스",
            "skills": ["Rust", "Python"],
            "positions": [{
                "title": "Chief Technology Officer",
                "companyName": "엘박스",
                "companyLocation": "서울",
                "startEndDate": {"start": {"year": 2023, "month": 3}}
            }],
            "educations": null
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.headline.as_deref(), Some("CTO at 엘박스"));
        assert_eq!(profile.skills, vec!["Rust", "Python"]);
        assert_eq!(profile.positions[0].company_name.as_deref(), Some("엘박스"));
        let range = profile.positions[0].start_end_date.unwrap();
        assert_eq!(range.start.unwrap().year, Some(2023));
        assert!(range.end.is_none());
        assert!(profile.educations.is_empty());
    }

    #[test]
    fn test_education_dates_text_variant() {
        let edu: Education =
            serde_json::from_str(r#"{"schoolName": "서울대학교", "startEndDate": "2010 - 2012"}"#)
                .unwrap();
        assert_eq!(edu.period(), EducationPeriod::Text("2010 - 2012".to_string()));
    }

    #[test]
    fn test_education_dates_structured_variant() {
        let edu: Education = serde_json::from_str(
            r#"{"startEndDate": {"startDateOn": {"year": 2010}, "endDateOn": {"year": 2014, "month": 2}}}"#,
        )
        .unwrap();
        match edu.period() {
            EducationPeriod::Structured(range) => {
                assert_eq!(range.start_date_on.unwrap().year, Some(2010));
                assert_eq!(range.end_date_on.unwrap().month, Some(2));
            }
            other => panic!("expected structured period, got {other:?}"),
        }
    }

    #[test]
    fn test_origin_range_takes_priority_over_text() {
        let edu: Education = serde_json::from_str(
            r#"{
                "startEndDate": "2010 - 2012",
                "originStartEndDate": {"startDateOn": {"year": 2009}, "endDateOn": {"year": 2013}}
            }"#,
        )
        .unwrap();
        match edu.period() {
            EducationPeriod::Structured(range) => {
                assert_eq!(range.start_date_on.unwrap().year, Some(2009));
            }
            other => panic!("expected origin range, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_text_period_is_unknown() {
        let edu: Education = serde_json::from_str(r#"{"startEndDate": "  "}"#).unwrap();
        assert_eq!(edu.period(), EducationPeriod::Unknown);
        assert_eq!(Education::default().period(), EducationPeriod::Unknown);
    }

    #[test]
    fn test_year_month_display() {
        let ym = YearMonth {
            year: Some(2020),
            month: Some(8),
        };
        assert_eq!(ym.display().as_deref(), Some("2020.08"));
        let year_only = YearMonth {
            year: Some(2020),
            month: None,
        };
        assert_eq!(year_only.display().as_deref(), Some("2020"));
        let month_only = YearMonth {
            year: None,
            month: Some(3),
        };
        assert!(month_only.display().is_none());
    }

    #[test]
    fn test_university_query_skips_blank_school_names() {
        let profile = Profile {
            educations: vec![
                Education {
                    school_name: Some("   ".to_string()),
                    ..Default::default()
                },
                Education {
                    school_name: Some(" 연세대학교 ".to_string()),
                    ..Default::default()
                },
                Education {
                    school_name: Some("KAIST".to_string()),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert_eq!(profile.university_query().as_deref(), Some("연세대학교"));
        assert!(Profile::default().university_query().is_none());
    }
}
