use crate::error::Result;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// File stem used when no output name is given
pub const DEFAULT_OUTPUT_NAME: &str = "json_output";

/// Serialize `data` to `<output_name>.json` in the current working directory
pub fn export_json<T: Serialize + ?Sized>(data: &T, output_name: &str) -> Result<PathBuf> {
    Exporter::default().write(data, output_name)
}

/// Writes JSON artifacts into a directory.
///
/// Each write truncates the target file first; a failure part way through can leave a
/// partial file behind. The directory itself is never created.
#[derive(Debug, Clone)]
pub struct Exporter {
    output_dir: PathBuf,
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Exporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Path a given output name is written to
    pub fn path_for(&self, output_name: &str) -> PathBuf {
        self.output_dir.join(format!("{}.json", output_name))
    }

    /// Serialize `data` into `<output_dir>/<output_name>.json`
    pub fn write<T: Serialize + ?Sized>(&self, data: &T, output_name: &str) -> Result<PathBuf> {
        let path = self.path_for(output_name);

        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer(&mut writer, data)?;
        writer.flush()?;

        ::log::info!("Wrote {}", path.display());
        Ok(path)
    }

    /// Serialize `data` under the default output name
    pub fn write_default<T: Serialize + ?Sized>(&self, data: &T) -> Result<PathBuf> {
        self.write(data, DEFAULT_OUTPUT_NAME)
    }
}
