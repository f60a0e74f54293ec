//! Hands diagrams to the Graphviz layout engine.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    process::Command,
};

use tracing::debug;

use crate::{
    config::DiagramConfig,
    dot::Dot,
    error::{Error, Result},
    graph::Diagram,
};

/// The output formats the engine is asked to produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Png,
    Svg,
    Pdf,
}

impl Format {
    /// Returns the name passed to the engine's `-T` flag, also used as the file extension.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Pdf => "pdf",
        }
    }
}

/// The files produced by a single render pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    /// The base name the pass was rendered under.
    pub name: String,
    /// The DOT source, stored under the base name itself.
    pub source: PathBuf,
    /// The rasterized image, the base name followed by the format's extension.
    pub image: PathBuf,
}

/// Writes DOT sources and invokes the layout engine on them.
#[derive(Clone, Debug)]
pub struct Renderer {
    engine: String,
    format: Format,
    output_dir: PathBuf,
}

impl Renderer {
    pub fn new(engine: impl Into<String>, format: Format, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            engine: engine.into(),
            format,
            output_dir: output_dir.into(),
        }
    }

    pub fn from_config(config: &DiagramConfig) -> Self {
        Self::new(
            config.engine.clone(),
            config.format,
            config.output_dir.clone(),
        )
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes the DOT source of the diagram to `<output_dir>/<name>` and returns its path.
    pub fn write_source(&self, diagram: &Diagram, name: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;

        let path = self.output_dir.join(name);
        fs::write(&path, Dot::new(diagram).to_string())?;

        Ok(path)
    }

    /// Renders the diagram to `<output_dir>/<name>.<format>`, leaving the DOT source next to it.
    ///
    /// Nothing is retried, any failure of the engine is returned as is.
    pub fn render(&self, diagram: &Diagram, name: &str) -> Result<Artifact> {
        let source = self.write_source(diagram, name)?;
        let image = self
            .output_dir
            .join(format!("{name}.{}", self.format.as_str()));

        debug!(
            engine = %self.engine,
            source = %source.display(),
            image = %image.display(),
            "invoking layout engine"
        );

        let output = Command::new(&self.engine)
            .arg(format!("-T{}", self.format.as_str()))
            .arg(&source)
            .arg("-o")
            .arg(&image)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => Error::EngineNotFound {
                    engine: self.engine.clone(),
                },
                _ => Error::Io(e),
            })?;

        if !output.status.success() {
            return Err(Error::EngineFailed {
                engine: self.engine.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }

        Ok(Artifact {
            name: name.to_owned(),
            source,
            image,
        })
    }
}
