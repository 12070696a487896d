use crate::compression_config::EncodingMethod;
use crate::encoder_buffer::EncoderBuffer;
use crate::encoder_options::EncoderOptions;
use crate::point_cloud::PointCloud;
use crate::point_cloud_encoder::PointCloudEncoder;
use crate::sequential_attribute_encoder::encode_attribute_set;
use crate::status::{EncodeError, Status};
use crate::version::encode_stream_header;

/// Generic per-attribute encoder with no structural assumptions; the
/// universal fallback for point clouds.
#[derive(Debug, Default)]
pub struct PointCloudSequentialEncoder<'a> {
    point_cloud: Option<&'a PointCloud>,
}

impl<'a> PointCloudSequentialEncoder<'a> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'a> PointCloudEncoder<'a> for PointCloudSequentialEncoder<'a> {
    fn set_point_cloud(&mut self, point_cloud: &'a PointCloud) {
        self.point_cloud = Some(point_cloud);
    }

    fn point_cloud(&self) -> Option<&'a PointCloud> {
        self.point_cloud
    }

    fn encoding_method(&self) -> EncodingMethod {
        EncodingMethod::PointCloudSequential
    }

    fn encode(&mut self, options: &EncoderOptions, out_buffer: &mut EncoderBuffer) -> Status {
        let point_cloud = self.point_cloud.ok_or_else(|| {
            EncodeError::InvalidInput("no point cloud bound to the encoder".to_string())
        })?;
        encode_stream_header(out_buffer, EncodingMethod::PointCloudSequential);
        out_buffer.encode_u32(point_cloud.num_points() as u32);
        encode_attribute_set(point_cloud, options, out_buffer)
    }
}
