use std::{
    collections::HashMap,
    fs,
    path::PathBuf,
};

use tracing::trace;

use crate::error::{CoreError, CoreResult};

/// Where user-data templates come from.
pub trait TemplateSource {
    /// Return the full text of the named template.
    ///
    /// Fails with [`CoreError::MissingTemplateFile`] if it cannot be read.
    fn read(&self, name: &str) -> CoreResult<String>;
}

/// Templates stored as files in one directory.
#[derive(Clone, Debug)]
pub struct DirTemplateSource {
    root: PathBuf,
}

impl DirTemplateSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TemplateSource for DirTemplateSource {
    fn read(&self, name: &str) -> CoreResult<String> {
        let path = self.root.join(name);
        trace!(path = %path.display(), "reading user data template");
        fs::read_to_string(&path).map_err(|e| CoreError::MissingTemplateFile {
            path,
            reason: e.to_string(),
        })
    }
}

/// In-memory templates, keyed by file name.
#[derive(Clone, Debug, Default)]
pub struct MemoryTemplateSource {
    templates: HashMap<String, String>,
}

impl MemoryTemplateSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, body: impl Into<String>) -> &mut Self {
        self.templates.insert(name.into(), body.into());
        self
    }
}

impl TemplateSource for MemoryTemplateSource {
    fn read(&self, name: &str) -> CoreResult<String> {
        self.templates
            .get(name)
            .cloned()
            .ok_or_else(|| CoreError::MissingTemplateFile {
                path: PathBuf::from(name),
                reason: "no such template".to_string(),
            })
    }
}
