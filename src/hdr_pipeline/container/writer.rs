use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::hdr_pipeline::common::error::{CaptureError, Result};
use crate::hdr_pipeline::decode::PixelBuffer;

pub trait ContainerWriter {
    /// File extension for this container, without the leading dot.
    fn extension(&self) -> &'static str;

    /// Serializes the buffer into the container's byte layout.
    fn write(&self, buffer: &PixelBuffer, out: &mut dyn Write) -> Result<()>;
}

/// Writes a container file with atomic-replace semantics: the bytes land in
/// a temporary file in the destination directory and are renamed over the
/// target only once fully written. A partial file is never visible under the
/// target path.
pub fn write_container(
    path: &Path,
    writer: &dyn ContainerWriter,
    buffer: &PixelBuffer,
) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        Some(_) => Path::new("."),
        None => {
            return Err(CaptureError::ContextCreationFailed(format!(
                "destination path has no parent directory: {}",
                path.display()
            )));
        }
    };

    let tmp = tempfile::NamedTempFile::new_in(dir)?;
    {
        let mut out = BufWriter::new(tmp.as_file());
        writer.write(buffer, &mut out)?;
        out.flush()?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| CaptureError::IoError(e.error))?;

    debug!("Wrote container file: {}", path.display());
    Ok(())
}
