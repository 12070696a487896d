use std::collections::HashMap;

use crate::compression_config::EncodingMethod;
use crate::encoder_buffer::EncoderBuffer;
use crate::encoder_options::EncoderOptions;
use crate::expert_encoder::ExpertEncoder;
use crate::geometry_attribute::AttributeType;
use crate::mesh::Mesh;
use crate::point_cloud::PointCloud;
use crate::prediction_scheme::PredictionSchemeMethod;
use crate::status::Status;

/// Convenience front end above [`ExpertEncoder`]. Per-attribute settings
/// are keyed by semantic type instead of attribute id, so the same
/// configuration can be reused across geometries; the translation to ids
/// happens when a geometry is encoded. A semantic type not present on the
/// geometry simply matches nothing.
#[derive(Debug, Default, Clone)]
pub struct Encoder {
    options: EncoderOptions,
    attribute_quantization: HashMap<AttributeType, i32>,
    attribute_prediction: HashMap<AttributeType, PredictionSchemeMethod>,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_speed_options(&mut self, encoding_speed: i32, decoding_speed: i32) {
        self.options.set_speed(encoding_speed, decoding_speed);
    }

    pub fn set_encoding_method(&mut self, method: EncodingMethod) {
        self.options.set_encoding_method(method);
    }

    pub fn set_use_built_in_attribute_compression(&mut self, enabled: bool) {
        self.options.set_use_built_in_attribute_compression(enabled);
    }

    pub fn set_attribute_quantization(&mut self, att_type: AttributeType, quantization_bits: i32) {
        self.attribute_quantization
            .insert(att_type, quantization_bits);
    }

    pub fn set_attribute_prediction_scheme(
        &mut self,
        att_type: AttributeType,
        method: PredictionSchemeMethod,
    ) {
        self.attribute_prediction.insert(att_type, method);
    }

    pub fn encode_point_cloud_to_buffer(
        &self,
        point_cloud: &PointCloud,
        out_buffer: &mut EncoderBuffer,
    ) -> Status {
        let mut expert = ExpertEncoder::from_point_cloud(point_cloud);
        expert.reset_with_options(self.expert_options_for(point_cloud));
        expert.encode_to_buffer(out_buffer)
    }

    pub fn encode_mesh_to_buffer(&self, mesh: &Mesh, out_buffer: &mut EncoderBuffer) -> Status {
        let mut expert = ExpertEncoder::from_mesh(mesh);
        expert.reset_with_options(self.expert_options_for(mesh));
        expert.encode_to_buffer(out_buffer)
    }

    fn expert_options_for(&self, point_cloud: &PointCloud) -> EncoderOptions {
        let mut options = self.options.clone();
        for (att_id, att) in point_cloud.attributes().iter().enumerate() {
            let att_type = att.attribute_type();
            if let Some(&bits) = self.attribute_quantization.get(&att_type) {
                options.set_attribute_quantization(att_id as i32, bits);
            }
            if let Some(&method) = self.attribute_prediction.get(&att_type) {
                options.set_attribute_prediction_scheme(att_id as i32, method);
            }
        }
        options
    }
}
