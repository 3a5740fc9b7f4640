use anyhow::{Context, Result};
use docload::LoadedFile;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn write_json_lines<W: Write>(mut out: W, files: &[LoadedFile]) -> Result<()> {
    for file in files {
        for doc in &file.documents {
            serde_json::to_writer(&mut out, doc).context("Failed to serialize chunk")?;
            out.write_all(b"\n")?;
        }
    }
    out.flush()?;
    Ok(())
}

pub fn write_json_lines_file(path: &Path, files: &[LoadedFile]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    write_json_lines(BufWriter::new(file), files)
        .with_context(|| format!("Failed to write output file: {}", path.display()))
}
