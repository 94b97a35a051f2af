use crate::hdr_pipeline::camera::CapturedPhoto;
use crate::hdr_pipeline::common::error::Result;
use crate::hdr_pipeline::decode::types::PixelBuffer;

pub trait PixelDecoder {
    fn decode(&self, photo: &CapturedPhoto) -> Result<PixelBuffer>;
}
