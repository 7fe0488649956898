use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tictactoe::Response;

/// Collects everything that happened in a session and writes it to a JSON
/// file at the end.
pub struct Recorder {
    path: PathBuf,
    interactions: Vec<Interaction>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    /// The request line exactly as it was received.
    pub request: String,
    /// `None` for requests that are not answered, i.e. `Bye`.
    pub response: Option<Response>,
}

impl Recorder {
    pub fn new(path: PathBuf) -> anyhow::Result<Self> {
        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => std::path::Path::new("."),
        };
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            path,
            interactions: Vec::new(),
        })
    }

    pub fn store_interaction(&mut self, request: &str, response: Option<&Response>) {
        self.interactions.push(Interaction {
            request: String::from(request),
            response: response.cloned(),
        });
    }

    pub fn interactions(&self) -> &[Interaction] {
        &self.interactions
    }

    pub fn write_recording(&mut self) -> anyhow::Result<()> {
        let writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(writer, &std::mem::take(&mut self.interactions))?;
        Ok(())
    }
}
