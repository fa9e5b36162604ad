use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The four fixed gallery sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Uiux,
    Frontend,
    Backend,
    Fullstack,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Uiux,
        Section::Frontend,
        Section::Backend,
        Section::Fullstack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uiux => "uiux",
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Fullstack => "fullstack",
        }
    }

    /// Display title shown at the top of a section page.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Uiux => "UI/UX Design",
            Self::Frontend => "Frontend Development",
            Self::Backend => "Backend Development",
            Self::Fullstack => "Full-Stack Development",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Uiux => "Discover stunning designs and prototypes.",
            Self::Frontend => "Explore interactive user interfaces.",
            Self::Backend => "Dive into server-side implementations.",
            Self::Fullstack => "Complete end-to-end applications.",
        }
    }

    /// Placeholder thumbnail assigned to uploads in this section.
    pub fn placeholder_thumbnail(&self) -> &'static str {
        match self {
            Self::Uiux => "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?auto=compress&cs=tinysrgb&w=400",
            Self::Frontend => "https://images.pexels.com/photos/11035380/pexels-photo-11035380.jpeg?auto=compress&cs=tinysrgb&w=400",
            Self::Backend => "https://images.pexels.com/photos/270348/pexels-photo-270348.jpeg?auto=compress&cs=tinysrgb&w=400",
            Self::Fullstack => "https://images.pexels.com/photos/267350/pexels-photo-267350.jpeg?auto=compress&cs=tinysrgb&w=400",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uiux" => Ok(Self::Uiux),
            "frontend" => Ok(Self::Frontend),
            "backend" => Ok(Self::Backend),
            "fullstack" => Ok(Self::Fullstack),
            other => anyhow::bail!("invalid section: {other}"),
        }
    }
}

/// How a project entered the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadMethod {
    Github,
    File,
    Link,
}

impl UploadMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::File => "file",
            Self::Link => "link",
        }
    }
}

impl fmt::Display for UploadMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UploadMethod {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "github" => Ok(Self::Github),
            "file" => Ok(Self::File),
            "link" => Ok(Self::Link),
            other => anyhow::bail!("invalid upload method: {other}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubRepo {
    pub url: String,
}

/// Descriptor returned by the file-upload endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredFile {
    pub filename: String,
    pub url: String,
    pub size: u64,
    pub content_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub section: Section,
    pub author: String,
    pub uploaded_at: String,
    pub thumbnail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_repo: Option<GithubRepo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<StoredFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_method: Option<UploadMethod>,
    pub likes: u64,
    pub views: u64,
}

pub struct CreateProjectInput {
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub section: Section,
    pub upload_method: Option<UploadMethod>,
    pub thumbnail: String,
    pub link: Option<String>,
    pub github_repo: Option<GithubRepo>,
    pub files: Vec<StoredFile>,
    pub author: Option<String>,
}

#[derive(Default)]
pub struct UpdateProjectInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tech_stack: Option<Vec<String>>,
    pub thumbnail: Option<String>,
    pub link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_round_trip() {
        for section in Section::ALL {
            let parsed: Section = section.as_str().parse().unwrap();
            assert_eq!(parsed, section);
        }
    }

    #[test]
    fn test_section_rejects_unknown_tag() {
        assert!("mobile".parse::<Section>().is_err());
        assert!("".parse::<Section>().is_err());
    }

    #[test]
    fn test_section_serde_lowercase() {
        let json = serde_json::to_string(&Section::Fullstack).unwrap();
        assert_eq!(json, r#""fullstack""#);
        let back: Section = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Section::Fullstack);
    }

    #[test]
    fn test_upload_method_round_trip() {
        for method in [UploadMethod::Github, UploadMethod::File, UploadMethod::Link] {
            let parsed: UploadMethod = method.as_str().parse().unwrap();
            assert_eq!(parsed, method);
        }
        assert!("ftp".parse::<UploadMethod>().is_err());
    }

    #[test]
    fn test_project_optional_fields_default() {
        let json = r#"{
            "id": "1",
            "title": "T",
            "description": "D",
            "tech_stack": [],
            "section": "backend",
            "author": "A",
            "uploaded_at": "2024-01-01T00:00:00Z",
            "thumbnail": "http://example.com/t.jpg",
            "likes": 0,
            "views": 0
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert!(project.link.is_none());
        assert!(project.github_repo.is_none());
        assert!(project.files.is_empty());
        assert!(project.upload_method.is_none());
    }
}
