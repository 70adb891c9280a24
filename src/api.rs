//! Collaborator boundaries and the generation driver
//!
//! The transform itself performs no I/O. Fetching the design document and
//! persisting the generated artifact happen behind the [`DocumentSource`]
//! and [`ArtifactSink`] traits; the Figma HTTP endpoint lives outside this
//! crate and plugs in through `DocumentSource`. [`FileSource`] and
//! [`DirectorySink`] cover the local-file case.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::builder::transform_roots;
use crate::errors::GenerateError;
use crate::renderers::{emit, FragmentRenderer};

/// Supplies the raw design document
pub trait DocumentSource {
    fn fetch(&self) -> Result<Value, GenerateError>;
}

/// Persists a generated artifact under a name
pub trait ArtifactSink {
    fn write(&self, name: &str, contents: &str) -> Result<(), GenerateError>;
}

/// Reads a previously exported document JSON from disk
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for FileSource {
    fn fetch(&self) -> Result<Value, GenerateError> {
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Writes artifacts into an output directory, creating it if needed
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArtifactSink for DirectorySink {
    fn write(&self, name: &str, contents: &str) -> Result<(), GenerateError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(name);
        fs::write(&path, contents)?;
        log::info!("wrote generated artifact to {}", path.display());
        Ok(())
    }
}

/// Drives the pipeline: fetch, transform, emit, compose
pub struct UiGenerator<'a> {
    source: &'a dyn DocumentSource,
    renderer: &'a dyn FragmentRenderer,
}

impl<'a> UiGenerator<'a> {
    pub fn new(source: &'a dyn DocumentSource, renderer: &'a dyn FragmentRenderer) -> Self {
        Self { source, renderer }
    }

    /// Generate the full artifact text for the fetched document
    pub fn generate(&self) -> Result<String, GenerateError> {
        let document = self.source.fetch()?;
        let roots = transform_roots(&document)?;
        log::info!("transformed {} root frame(s)", roots.len());

        let fragments = roots
            .iter()
            .map(|root| emit(root, self.renderer))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.renderer.page(fragments)?)
    }

    /// Generate and persist the artifact through a sink
    pub fn generate_to(&self, sink: &dyn ArtifactSink, name: &str) -> Result<String, GenerateError> {
        let code = self.generate()?;
        sink.write(name, &code)?;
        Ok(code)
    }
}
