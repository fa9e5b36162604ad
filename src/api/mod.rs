//! The mock backend: CRUD over the durable project slot plus a fake
//! file-upload endpoint. Every operation sleeps a fixed latency before
//! touching the store, mirroring a network round trip.

use std::time::Duration;

use chrono::Utc;
use tokio::time::sleep;

use crate::error::{Error, Result};
use crate::models::{CreateProjectInput, Project, Section, StoredFile, UpdateProjectInput};
use crate::store::{Store, PROJECTS_KEY};

const DEFAULT_LATENCY: Duration = Duration::from_millis(400);
const DEFAULT_UPLOAD_LATENCY: Duration = Duration::from_millis(1000);

/// Author assigned when a creation payload does not name one.
pub const DEFAULT_AUTHOR: &str = "Anonymous Developer";

pub struct ProjectsApi<'a> {
    store: &'a Store,
    latency: Duration,
}

impl<'a> ProjectsApi<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self {
            store,
            latency: DEFAULT_LATENCY,
        }
    }

    /// Override the simulated latency (tests use zero).
    pub fn with_latency(store: &'a Store, latency: Duration) -> Self {
        Self { store, latency }
    }

    fn load(&self) -> Result<Vec<Project>> {
        // An untouched or corrupt slot reads as an empty collection.
        Ok(self.store.get(PROJECTS_KEY)?.unwrap_or_default())
    }

    fn save(&self, projects: &[Project]) -> Result<()> {
        self.store.put(PROJECTS_KEY, &projects)?;
        Ok(())
    }

    /// Full ordered list, optionally restricted to one section.
    /// Insertion order is preserved: newest first.
    pub async fn get_all(&self, section: Option<Section>) -> Result<Vec<Project>> {
        sleep(self.latency).await;

        let mut projects = self.load()?;
        if let Some(section) = section {
            projects.retain(|p| p.section == section);
        }
        Ok(projects)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Project> {
        sleep(self.latency).await;

        self.load()?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::not_found(id))
    }

    /// Assigns a time-ordered id and creation timestamp, zeroes the counters,
    /// defaults the author, and prepends the record to the collection.
    pub async fn create(&self, input: CreateProjectInput) -> Result<Project> {
        sleep(self.latency).await;

        let project = Project {
            id: ulid::Ulid::new().to_string(),
            title: input.title,
            description: input.description,
            tech_stack: input.tech_stack,
            section: input.section,
            author: input.author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            uploaded_at: Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            thumbnail: input.thumbnail,
            link: input.link,
            github_repo: input.github_repo,
            files: input.files,
            upload_method: input.upload_method,
            likes: 0,
            views: 0,
        };

        let mut projects = self.load()?;
        projects.insert(0, project.clone());
        self.save(&projects)?;

        tracing::debug!(id = %project.id, section = %project.section, "created project");
        Ok(project)
    }

    /// Merge partial fields into an existing record.
    pub async fn update(&self, id: &str, input: UpdateProjectInput) -> Result<Project> {
        sleep(self.latency).await;

        let mut projects = self.load()?;
        let project = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::not_found(id))?;

        if let Some(title) = input.title {
            project.title = title;
        }
        if let Some(description) = input.description {
            project.description = description;
        }
        if let Some(tech_stack) = input.tech_stack {
            project.tech_stack = tech_stack;
        }
        if let Some(thumbnail) = input.thumbnail {
            project.thumbnail = thumbnail;
        }
        if let Some(link) = input.link {
            project.link = Some(link);
        }

        let updated = project.clone();
        self.save(&projects)?;
        Ok(updated)
    }

    /// Remove the record with the given id. No-op when absent.
    pub async fn delete(&self, id: &str) -> Result<()> {
        sleep(self.latency).await;

        let mut projects = self.load()?;
        projects.retain(|p| p.id != id);
        self.save(&projects)
    }

    /// Increment the like counter. Returns the updated record, or `None`
    /// when the id is unknown (not an error, matching the delete contract).
    pub async fn like(&self, id: &str) -> Result<Option<Project>> {
        sleep(self.latency).await;

        let mut projects = self.load()?;
        let Some(project) = projects.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        project.likes += 1;
        let updated = project.clone();
        self.save(&projects)?;
        Ok(Some(updated))
    }
}

/// A file handed to the upload endpoint: name plus what the browser would
/// know about the blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    pub name: String,
    pub size: u64,
    pub content_type: String,
}

pub struct UploadApi {
    latency: Duration,
}

impl Default for UploadApi {
    fn default() -> Self {
        Self {
            latency: DEFAULT_UPLOAD_LATENCY,
        }
    }
}

impl UploadApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    /// Store a single file and return its descriptor. The only failure the
    /// mock reproduces is a nameless file; a real backend can fail the
    /// transfer itself and callers must treat that the same way.
    pub async fn single(&self, file: &LocalFile) -> Result<StoredFile> {
        sleep(self.latency).await;

        if file.name.is_empty() {
            return Err(Error::UploadTransport(
                "file has no name to store it under".to_string(),
            ));
        }

        Ok(StoredFile {
            filename: file.name.clone(),
            url: format!("https://example.com/files/{}", file.name),
            size: file.size,
            content_type: file.content_type.clone(),
        })
    }

    /// Delete a stored file. The mock only simulates the round trip.
    pub async fn delete(&self, _filename: &str) -> Result<()> {
        sleep(self.latency).await;
        Ok(())
    }
}
