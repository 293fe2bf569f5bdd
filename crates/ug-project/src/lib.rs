//! ug-project: persisted graph format (JSON / YAML).

pub mod codec;
pub mod schema;

use std::path::Path;

use tracing::debug;
use ug_graph::Graph;

pub use codec::{DecodingError, decode, encode};
pub use schema::*;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Decoding error: {0}")]
    Decoding(#[from] DecodingError),

    #[error("Unsupported format: {what}")]
    UnsupportedFormat { what: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> ProjectResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            other => Err(ProjectError::UnsupportedFormat {
                what: format!("{} (extension {:?})", path.display(), other),
            }),
        }
    }
}

pub fn to_json_string(graph: &Graph) -> ProjectResult<String> {
    Ok(serde_json::to_string_pretty(&encode(graph))?)
}

pub fn from_json_str(content: &str) -> ProjectResult<Graph> {
    let doc: GraphDoc = serde_json::from_str(content)?;
    Ok(decode(doc)?)
}

pub fn to_yaml_string(graph: &Graph) -> ProjectResult<String> {
    Ok(serde_yaml::to_string(&encode(graph))?)
}

pub fn from_yaml_str(content: &str) -> ProjectResult<Graph> {
    let doc: GraphDoc = serde_yaml::from_str(content)?;
    Ok(decode(doc)?)
}

pub fn load_json(path: &Path) -> ProjectResult<Graph> {
    debug!(path = %path.display(), "loading graph (json)");
    let content = std::fs::read_to_string(path)?;
    from_json_str(&content)
}

pub fn save_json(path: &Path, graph: &Graph) -> ProjectResult<()> {
    debug!(path = %path.display(), "saving graph (json)");
    let content = to_json_string(graph)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_yaml(path: &Path) -> ProjectResult<Graph> {
    debug!(path = %path.display(), "loading graph (yaml)");
    let content = std::fs::read_to_string(path)?;
    from_yaml_str(&content)
}

pub fn save_yaml(path: &Path, graph: &Graph) -> ProjectResult<()> {
    debug!(path = %path.display(), "saving graph (yaml)");
    let content = to_yaml_string(graph)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a graph, choosing the format from the file extension.
pub fn load(path: &Path) -> ProjectResult<Graph> {
    load_as(path, Format::from_path(path)?)
}

pub fn load_as(path: &Path, format: Format) -> ProjectResult<Graph> {
    match format {
        Format::Json => load_json(path),
        Format::Yaml => load_yaml(path),
    }
}

/// Save a graph, choosing the format from the file extension.
pub fn save(path: &Path, graph: &Graph) -> ProjectResult<()> {
    match Format::from_path(path)? {
        Format::Json => save_json(path, graph),
        Format::Yaml => save_yaml(path, graph),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(Format::from_path(Path::new("a.json")).unwrap(), Format::Json);
        assert_eq!(Format::from_path(Path::new("a.yml")).unwrap(), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("a.yaml")).unwrap(), Format::Yaml);
        assert!(matches!(
            Format::from_path(Path::new("a.txt")),
            Err(ProjectError::UnsupportedFormat { .. })
        ));
        assert!(Format::from_path(Path::new("noext")).is_err());
    }
}
