use std::{
    collections::HashMap,
    fmt, fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::error;

/// Metadata a loader declares for one installed mod.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModMetadata {
    /// The mod's namespace.
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Lookup seam over the host's table of currently loaded mods. Hosts wrap
/// their loader's live metadata here; tests use [`ModRegistry`].
pub trait ModLookup {
    fn metadata(&self, namespace: &str) -> Option<&ModMetadata>;
}

#[derive(Debug)]
pub enum ModRegistryError {
    DuplicateId(String),
    Load(std::io::Error),
}

impl fmt::Display for ModRegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModRegistryError::DuplicateId(id) => {
                write!(f, "Duplicate mod id `{}`", id)
            }
            ModRegistryError::Load(err) => {
                write!(f, "Failed to load mod metadata: {}", err)
            }
        }
    }
}

impl From<std::io::Error> for ModRegistryError {
    fn from(err: std::io::Error) -> Self {
        ModRegistryError::Load(err)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ModRegistry {
    entries: HashMap<String, ModMetadata>,
}

impl ModRegistry {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn register(&mut self, metadata: ModMetadata) -> Result<(), ModRegistryError> {
        if self.entries.contains_key(&metadata.id) {
            return Err(ModRegistryError::DuplicateId(metadata.id));
        }
        self.entries.insert(metadata.id.clone(), metadata);
        Ok(())
    }

    /// Reads every `*.json` metadata file in `directory`. Files that fail
    /// to deserialize are logged and skipped; a duplicate mod id aborts
    /// the load.
    pub fn load_from_directory(directory: impl AsRef<Path>) -> Result<Self, ModRegistryError> {
        let mut registry = Self::new();

        for entry in fs::read_dir(directory)? {
            let entry = entry?;
            let path: PathBuf = entry.path();

            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }

            let file_contents = fs::read_to_string(&path)?;
            let metadata = match serde_json::from_str::<ModMetadata>(&file_contents) {
                Ok(metadata) => metadata,
                Err(e) => {
                    error!("Failed to deserialize mod metadata {:?}: {}", path, e);
                    continue;
                }
            };

            registry.register(metadata)?;
        }

        Ok(registry)
    }

    pub fn get(&self, namespace: &str) -> Option<&ModMetadata> {
        self.entries.get(namespace)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl ModLookup for ModRegistry {
    fn metadata(&self, namespace: &str) -> Option<&ModMetadata> {
        self.entries.get(namespace)
    }
}
