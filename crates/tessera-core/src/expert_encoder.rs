use log::debug;

use crate::compression_config::EncodingMethod;
use crate::data_types::DataType;
use crate::encoder_buffer::EncoderBuffer;
use crate::encoder_options::EncoderOptions;
use crate::geometry_attribute::AttributeType;
use crate::mesh::Mesh;
use crate::mesh_encoder::{create_mesh_encoder, MeshEncoder};
use crate::point_cloud::PointCloud;
use crate::point_cloud_encoder::{create_point_cloud_encoder, PointCloudEncoder};
use crate::prediction_scheme::PredictionSchemeMethod;
use crate::status::{EncodeError, Status};

/// Entry point of the encoding pipeline. Borrows the input geometry,
/// collects fine-grained options through setters, and on each production
/// request selects and runs exactly one concrete encoder.
///
/// Setters never validate; an invalid combination set early and corrected
/// later is not an error. Validation happens when a bit-stream is
/// requested.
#[derive(Debug, Default)]
pub struct ExpertEncoder<'a> {
    point_cloud: Option<&'a PointCloud>,
    mesh: Option<&'a Mesh>,
    options: EncoderOptions,
}

impl<'a> ExpertEncoder<'a> {
    pub fn from_point_cloud(point_cloud: &'a PointCloud) -> Self {
        Self {
            point_cloud: Some(point_cloud),
            mesh: None,
            options: EncoderOptions::default(),
        }
    }

    /// A mesh also satisfies the point-cloud view; storing both lets the
    /// dispatch ask "is this a mesh?" in O(1).
    pub fn from_mesh(mesh: &'a Mesh) -> Self {
        let point_cloud: &'a PointCloud = mesh;
        Self {
            point_cloud: Some(point_cloud),
            mesh: Some(mesh),
            options: EncoderOptions::default(),
        }
    }

    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    pub fn set_speed_options(&mut self, encoding_speed: i32, decoding_speed: i32) {
        self.options.set_speed(encoding_speed, decoding_speed);
    }

    pub fn set_encoding_method(&mut self, method: EncodingMethod) {
        self.options.set_encoding_method(method);
    }

    pub fn set_attribute_quantization(&mut self, att_id: i32, quantization_bits: i32) {
        self.options
            .set_attribute_quantization(att_id, quantization_bits);
    }

    pub fn set_attribute_prediction_scheme(
        &mut self,
        att_id: i32,
        method: PredictionSchemeMethod,
    ) {
        self.options.set_attribute_prediction_scheme(att_id, method);
    }

    pub fn set_use_built_in_attribute_compression(&mut self, enabled: bool) {
        self.options.set_use_built_in_attribute_compression(enabled);
    }

    /// Discards all configuration and reinstalls the defaults. The
    /// geometry reference is untouched.
    pub fn reset(&mut self) {
        self.options = EncoderOptions::default();
    }

    /// Like [`reset`](Self::reset), but installs a caller-supplied options
    /// snapshot instead of the defaults.
    pub fn reset_with_options(&mut self, options: EncoderOptions) {
        self.options = options;
    }

    /// Selects a strategy for the bound geometry and delegates bit-stream
    /// production to it. Selection is re-run from scratch on every call
    /// using the current options.
    pub fn encode_to_buffer(&mut self, out_buffer: &mut EncoderBuffer) -> Status {
        let Some(point_cloud) = self.point_cloud else {
            return Err(EncodeError::InvalidInput(
                "no geometry bound to the encoder".to_string(),
            ));
        };
        match self.mesh {
            Some(mesh) => self.encode_mesh_to_buffer(mesh, out_buffer),
            None => self.encode_point_cloud_to_buffer(point_cloud, out_buffer),
        }
    }

    fn encode_point_cloud_to_buffer(
        &self,
        point_cloud: &'a PointCloud,
        out_buffer: &mut EncoderBuffer,
    ) -> Status {
        let method = select_point_cloud_encoding_method(point_cloud, &self.options)?;
        debug!(
            "selected {:?} for a point cloud with {} attributes",
            method,
            point_cloud.num_attributes()
        );
        let mut encoder = create_point_cloud_encoder(method);
        encoder.set_point_cloud(point_cloud);
        encoder.encode(&self.options, out_buffer)
    }

    fn encode_mesh_to_buffer(&self, mesh: &'a Mesh, out_buffer: &mut EncoderBuffer) -> Status {
        let method = select_mesh_encoding_method(&self.options);
        debug!("selected {:?} for a mesh with {} faces", method, mesh.num_faces());
        let mut encoder = create_mesh_encoder(method);
        encoder.set_mesh(mesh);
        encoder.encode(&self.options, out_buffer)
    }
}

/// Chooses between the spatial and sequential point-cloud strategies.
///
/// The spatial strategy is a candidate when the options explicitly request
/// it, or when no method is set, the speed is below 10 and the cloud has a
/// single attribute. An explicit request whose preconditions fail is an
/// error; a default candidate falls back to sequential coding.
pub fn select_point_cloud_encoding_method(
    point_cloud: &PointCloud,
    options: &EncoderOptions,
) -> Result<EncodingMethod, EncodeError> {
    let explicit_spatial = options.encoding_method() == Some(EncodingMethod::PointCloudSpatial);
    let default_candidate = options.encoding_method().is_none()
        && options.speed() < 10
        && point_cloud.num_attributes() == 1;
    if explicit_spatial || default_candidate {
        if spatial_encoding_eligible(point_cloud, options) {
            return Ok(EncodingMethod::PointCloudSpatial);
        }
        if explicit_spatial {
            return Err(EncodeError::InvalidEncodingMethod(
                "spatial encoding requested but the geometry does not satisfy its preconditions"
                    .to_string(),
            ));
        }
    }
    // Any other explicit method, including a mesh one, takes this path.
    Ok(EncodingMethod::PointCloudSequential)
}

/// The spatial strategy consumes one metrically meaningful 3-D position
/// stream: attribute 0 must carry positions with three components, stored
/// as float32 (with quantization enabled for it) or uint32.
fn spatial_encoding_eligible(point_cloud: &PointCloud, options: &EncoderOptions) -> bool {
    let Some(att) = point_cloud.attribute(0) else {
        return false;
    };
    if att.attribute_type() != AttributeType::Position || att.num_components() != 3 {
        return false;
    }
    match att.data_type() {
        DataType::Uint32 => true,
        DataType::Float32 => options.is_attribute_quantization_enabled(0),
        _ => false,
    }
}

/// Chooses between the connectivity-aware and sequential mesh strategies.
/// Both accept any mesh, so an explicit choice is always honored; without
/// one, connectivity coding wins unless the caller asked for the fastest
/// setting.
pub fn select_mesh_encoding_method(options: &EncoderOptions) -> EncodingMethod {
    match options.encoding_method() {
        Some(EncodingMethod::MeshSequential) => EncodingMethod::MeshSequential,
        Some(EncodingMethod::MeshConnectivity) => EncodingMethod::MeshConnectivity,
        _ => {
            if options.speed() == 10 {
                EncodingMethod::MeshSequential
            } else {
                EncodingMethod::MeshConnectivity
            }
        }
    }
}
