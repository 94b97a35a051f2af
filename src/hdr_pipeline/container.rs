//! Container writing module
//!
//! Serializes a decoded pixel buffer into one of two binary container
//! layouts, written with atomic-replace semantics.

mod hdrbin;
mod openexr;
pub mod types;
mod writer;

pub use hdrbin::{
    HDRBIN_DATA_TYPE_F32, HDRBIN_HEADER_LEN, HDRBIN_MAGIC, HDRBIN_VERSION, HdrBinWriter,
};
pub use openexr::{EXR_MAGIC, EXR_VERSION, OpenExrWriter};
pub use types::ContainerFormat;
pub use writer::{ContainerWriter, write_container};

impl ContainerFormat {
    pub fn writer(&self) -> Box<dyn ContainerWriter> {
        match self {
            ContainerFormat::HdrBin => Box::new(HdrBinWriter),
            ContainerFormat::OpenExr => Box::new(OpenExrWriter),
        }
    }
}
