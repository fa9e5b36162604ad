//! The multi-step upload flow: pick a section, fill in the form for one of
//! the three upload methods, submit. Field state lives here so a closed or
//! abandoned flow can be discarded wholesale.

use std::time::Duration;

use tokio::time::sleep;

use crate::api::{LocalFile, ProjectsApi, UploadApi};
use crate::error::{Error, Result};
use crate::models::{CreateProjectInput, GithubRepo, Project, Section, UploadMethod};

const ANALYZE_LATENCY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Choosing one of the four sections.
    Section,
    /// Filling the upload form; the section is fixed until `back()`.
    Form,
}

/// Raw form input. Tech stack is the comma-separated text field, parsed at
/// submit time.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pub title: String,
    pub description: String,
    pub tech_stack: String,
    pub link: String,
    pub github_url: String,
    pub file: Option<LocalFile>,
}

/// Advisory tech-stack detection for a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoAnalysis {
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub database: Vec<String>,
    pub tools: Vec<String>,
}

impl RepoAnalysis {
    pub fn all_tags(&self) -> Vec<String> {
        self.frontend
            .iter()
            .chain(&self.backend)
            .chain(&self.database)
            .chain(&self.tools)
            .cloned()
            .collect()
    }
}

pub struct UploadFlow {
    step: Step,
    section: Option<Section>,
    method: UploadMethod,
    pub fields: FormFields,
    analysis: Option<RepoAnalysis>,
    analyze_latency: Duration,
}

impl Default for UploadFlow {
    fn default() -> Self {
        Self {
            step: Step::Section,
            section: None,
            method: UploadMethod::Github,
            fields: FormFields::default(),
            analysis: None,
            analyze_latency: ANALYZE_LATENCY,
        }
    }
}

impl UploadFlow {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn with_analyze_latency(latency: Duration) -> Self {
        Self {
            analyze_latency: latency,
            ..Self::default()
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn section(&self) -> Option<Section> {
        self.section
    }

    pub fn method(&self) -> UploadMethod {
        self.method
    }

    pub fn analysis(&self) -> Option<&RepoAnalysis> {
        self.analysis.as_ref()
    }

    /// Fix the section and advance to the form.
    pub fn select_section(&mut self, section: Section) {
        self.section = Some(section);
        self.step = Step::Form;
    }

    /// Return to section choice, clearing method and field state.
    pub fn back(&mut self) {
        let latency = self.analyze_latency;
        *self = Self {
            analyze_latency: latency,
            ..Self::default()
        };
    }

    pub fn set_method(&mut self, method: UploadMethod) {
        self.method = method;
    }

    /// Discard all in-progress input, from any state.
    pub fn reset(&mut self) {
        self.back();
    }

    /// Mocked repository analysis. Purely advisory: when tags are detected
    /// they overwrite the tech-stack field.
    pub async fn analyze_repo(&mut self) -> Result<&RepoAnalysis> {
        if self.fields.github_url.trim().is_empty() {
            return Err(Error::validation("GitHub repository URL is required"));
        }

        sleep(self.analyze_latency).await;

        let analysis = RepoAnalysis {
            frontend: vec!["React".into(), "TypeScript".into(), "Tailwind CSS".into()],
            backend: vec!["Node.js".into(), "Express".into()],
            database: vec!["MongoDB".into()],
            tools: vec!["Git".into(), "Docker".into()],
        };

        let detected = analysis.all_tags();
        if !detected.is_empty() {
            self.fields.tech_stack = detected.join(", ");
        }

        Ok(self.analysis.insert(analysis))
    }

    /// Required-field checks. Runs before any repository or upload call.
    pub fn validate(&self) -> Result<()> {
        if self.step != Step::Form || self.section.is_none() {
            return Err(Error::validation("Choose a section first"));
        }
        if self.fields.title.trim().is_empty() {
            return Err(Error::validation("Project title is required"));
        }
        if self.fields.description.trim().is_empty() {
            return Err(Error::validation("Description is required"));
        }
        match self.method {
            UploadMethod::Github if self.fields.github_url.trim().is_empty() => {
                Err(Error::validation("GitHub repository URL is required"))
            }
            UploadMethod::File if self.fields.file.is_none() => {
                Err(Error::validation("No file selected"))
            }
            UploadMethod::Link if self.fields.link.trim().is_empty() => {
                Err(Error::validation("Project link is required"))
            }
            _ => Ok(()),
        }
    }

    /// Submit the form. On success the new record is returned and the flow
    /// resets to section choice; on failure the state is left in place for
    /// retry.
    pub async fn submit(
        &mut self,
        projects: &ProjectsApi<'_>,
        uploads: &UploadApi,
    ) -> Result<Project> {
        self.validate()?;
        let Some(section) = self.section else {
            return Err(Error::validation("Choose a section first"));
        };

        let mut files = Vec::new();
        if self.method == UploadMethod::File {
            if let Some(file) = &self.fields.file {
                files.push(uploads.single(file).await?);
            }
        }

        let input = CreateProjectInput {
            title: self.fields.title.trim().to_string(),
            description: self.fields.description.trim().to_string(),
            tech_stack: parse_tech_stack(&self.fields.tech_stack),
            section,
            upload_method: Some(self.method),
            thumbnail: section.placeholder_thumbnail().to_string(),
            link: match self.method {
                UploadMethod::Link => Some(self.fields.link.trim().to_string()),
                _ => None,
            },
            github_repo: match self.method {
                UploadMethod::Github => Some(GithubRepo {
                    url: self.fields.github_url.trim().to_string(),
                }),
                _ => None,
            },
            files,
            author: None,
        };

        let project = projects.create(input).await?;
        self.reset();
        Ok(project)
    }
}

/// Split the comma-separated tech-stack field into tags, dropping blanks.
pub fn parse_tech_stack(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
