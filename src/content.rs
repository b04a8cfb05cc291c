use serde::{Deserialize, Deserializer};
use std::fmt;

use crate::skills::{parse_stars, MAX_STARS};

pub const SITE_CONTENT_JSON: &str = include_str!("../content/site.json");

/// Display triple carried by each content item as `data-*` attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkMeta {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
}

impl WorkMeta {
    /// Reads the triple from an attribute lookup on a rendered item.
    pub fn from_attributes(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        Some(Self {
            kind: lookup("data-type")?,
            title: lookup("data-title")?,
            description: lookup("data-description")?,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntry {
    #[serde(flatten)]
    pub meta: WorkMeta,
    pub image: String,
    #[serde(default)]
    pub alt: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Banner {
    pub image: String,
    #[serde(default)]
    pub alt: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SkillEntry {
    pub id: String,
    pub label: String,
    #[serde(deserialize_with = "deserialize_stars")]
    pub stars: u8,
    #[serde(default)]
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub entries: Vec<SkillEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProcessStep {
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProcessGroup {
    pub name: String,
    pub steps: Vec<ProcessStep>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SiteContent {
    pub works: Vec<WorkEntry>,
    #[serde(default)]
    pub banners: Vec<Banner>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub process: Vec<ProcessGroup>,
}

#[derive(Debug)]
pub enum ContentError {
    Parse(serde_json::Error),
    NoWorks,
    EmptyField { work: usize, field: &'static str },
    DuplicateSkillId(String),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(error) => write!(f, "site content is not valid JSON: {error}"),
            Self::NoWorks => write!(f, "site content lists no works"),
            Self::EmptyField { work, field } => write!(f, "work {work} has an empty {field}"),
            Self::DuplicateSkillId(id) => write!(f, "skill id `{id}` is used more than once"),
        }
    }
}

impl std::error::Error for ContentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(error) => Some(error),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse(error)
    }
}

pub fn parse_site_content(raw: &str) -> Result<SiteContent, ContentError> {
    let content: SiteContent = serde_json::from_str(raw)?;
    validate(&content)?;
    Ok(content)
}

pub fn load_site_content() -> Result<SiteContent, ContentError> {
    parse_site_content(SITE_CONTENT_JSON)
}

fn validate(content: &SiteContent) -> Result<(), ContentError> {
    if content.works.is_empty() {
        return Err(ContentError::NoWorks);
    }

    for (work, entry) in content.works.iter().enumerate() {
        let fields = [
            ("type", &entry.meta.kind),
            ("title", &entry.meta.title),
            ("image", &entry.image),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ContentError::EmptyField {
                work,
                field: *field,
            });
        }
    }

    let mut seen = std::collections::HashSet::new();
    for entry in content.skills.iter().flat_map(|group| group.entries.iter()) {
        if !seen.insert(entry.id.as_str()) {
            return Err(ContentError::DuplicateSkillId(entry.id.clone()));
        }
    }

    Ok(())
}

fn deserialize_stars<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(number) => number
            .as_i64()
            .map(|stars| stars.clamp(0, i64::from(MAX_STARS)) as u8)
            .unwrap_or(0),
        serde_json::Value::String(raw) => parse_stars(&raw),
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_is_valid() {
        let content = load_site_content().expect("bundled site content parses");
        assert!(!content.works.is_empty());
    }

    #[test]
    fn stars_accept_numbers_and_strings() {
        let raw = r#"{
            "works": [{ "type": "Web", "title": "A", "description": "d", "image": "/a.webp" }],
            "skills": [{ "name": "Design", "entries": [
                { "id": "figma", "label": "Figma", "stars": 4 },
                { "id": "ps", "label": "Photoshop", "stars": "7" }
            ]}]
        }"#;

        let content = parse_site_content(raw).expect("valid content");
        let stars: Vec<u8> = content.skills[0].entries.iter().map(|entry| entry.stars).collect();
        assert_eq!(stars, vec![4, 5]);
    }

    #[test]
    fn empty_work_list_is_rejected() {
        let result = parse_site_content(r#"{ "works": [] }"#);
        assert!(matches!(result, Err(ContentError::NoWorks)));
    }

    #[test]
    fn blank_title_is_rejected() {
        let raw = r#"{ "works": [{ "type": "Web", "title": " ", "description": "", "image": "/a.webp" }] }"#;
        let result = parse_site_content(raw);
        assert!(matches!(
            result,
            Err(ContentError::EmptyField { work: 0, field: "title" })
        ));
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        let error = parse_site_content("{ works: ").expect_err("not JSON");
        assert!(error.to_string().starts_with("site content is not valid JSON"));
    }

    #[test]
    fn meta_reads_from_attributes() {
        let meta = WorkMeta::from_attributes(|name| match name {
            "data-type" => Some("Web".to_string()),
            "data-title" => Some("Bakery site".to_string()),
            "data-description" => Some("Landing page".to_string()),
            _ => None,
        })
        .expect("all attributes present");

        assert_eq!(meta.title, "Bakery site");
        assert!(WorkMeta::from_attributes(|_| None).is_none());
    }
}
