//! Destinations for exported route files.

use routeplan_core::RouteExport;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Persists `(filename, content)` pairs.
pub trait ExportSink {
    /// Store an export and return where it went.
    fn save(&self, filename: &str, content: &str) -> Result<PathBuf, SinkError>;

    fn save_export(&self, export: &RouteExport) -> Result<PathBuf, SinkError> {
        self.save(&export.filename, &export.content)
    }
}

/// Writes exports as files inside a directory.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ExportSink for FileSink {
    fn save(&self, filename: &str, content: &str) -> Result<PathBuf, SinkError> {
        // Only the final component is used so a filename cannot escape the directory
        let name = Path::new(filename)
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("route.txt"));
        let path = self.dir.join(name);

        std::fs::create_dir_all(&self.dir).map_err(|source| SinkError::Io {
            path: self.dir.clone(),
            source,
        })?;
        std::fs::write(&path, content).map_err(|source| SinkError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), bytes = content.len(), "Saved export");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use routeplan_core::{format_route, Coordinate, ExportKind, PlannedRoute};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("routeplan-sink-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn writes_export_under_suggested_name() {
        let dir = scratch_dir("write");
        let sink = FileSink::new(&dir);
        let route = PlannedRoute::from_path(
            vec![Coordinate::new(50.08, 14.44), Coordinate::new(49.20, 16.61)],
            185.5,
        );
        let export = format_route(Some(&route), ExportKind::Coordinates).unwrap();

        let path = sink.save_export(&export).unwrap();
        assert_eq!(path, dir.join("route_coordinates.txt"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "50.08, 14.44\n49.2, 16.61");
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn strips_directories_from_filename() {
        let dir = scratch_dir("strip");
        let sink = FileSink::new(&dir);
        let path = sink.save("../../escape.txt", "x").unwrap();
        assert_eq!(path, dir.join("escape.txt"));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
