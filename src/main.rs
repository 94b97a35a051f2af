use std::path::Path;

use hdr_capture_rs::hdr_pipeline::{ContainerFormat, LinearRgbaDecoder, write_container};
use hdr_capture_rs::logger;

use tracing::{error, info};

/// Offline conversion: decodes an encoded image file and writes it back out
/// as an HDR container, exercising the decode and serialization stages
/// without a camera.
fn main() -> anyhow::Result<()> {
    logger::init();

    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "input.jpg".to_string());
    let output = args.next().unwrap_or_else(|| "output.hdrbin".to_string());

    let container = if output.ends_with(".exr") {
        ContainerFormat::OpenExr
    } else {
        ContainerFormat::HdrBin
    };

    info!("Converting {} -> {} ({:?})", input, output, container);

    let data = std::fs::read(&input)?;
    match LinearRgbaDecoder.decode_bytes(&data) {
        Ok(buffer) => {
            let writer = container.writer();
            write_container(Path::new(&output), writer.as_ref(), &buffer)?;
            info!(
                "Conversion successful: {}x{} float32 RGBA",
                buffer.width(),
                buffer.height()
            );
        }
        Err(e) => error!("Conversion failed: {}", e),
    }

    Ok(())
}
