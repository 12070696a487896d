use crate::compression_config::EncodingMethod;
use crate::encoder_buffer::EncoderBuffer;
use crate::encoder_options::EncoderOptions;
use crate::point_cloud::PointCloud;
use crate::point_cloud_sequential_encoder::PointCloudSequentialEncoder;
use crate::point_cloud_spatial_encoder::PointCloudSpatialEncoder;
use crate::status::Status;

/// Capability contract for point-cloud encoders: bind a borrowed geometry,
/// then produce a self-contained bit-stream into the caller's buffer.
pub trait PointCloudEncoder<'a> {
    fn set_point_cloud(&mut self, point_cloud: &'a PointCloud);

    fn point_cloud(&self) -> Option<&'a PointCloud>;

    fn encoding_method(&self) -> EncodingMethod;

    fn encode(&mut self, options: &EncoderOptions, out_buffer: &mut EncoderBuffer) -> Status;
}

/// Maps a selection tag to exactly one encoder instance. Tags other than
/// the spatial one map to the sequential fallback.
pub fn create_point_cloud_encoder<'a>(
    method: EncodingMethod,
) -> Box<dyn PointCloudEncoder<'a> + 'a> {
    match method {
        EncodingMethod::PointCloudSpatial => Box::new(PointCloudSpatialEncoder::new()),
        _ => Box::new(PointCloudSequentialEncoder::new()),
    }
}
