//! Tessera core library
//!
//! Encoder selection and dispatch for compressing 3D point clouds and
//! triangle meshes: geometry containers, a typed options store, and the
//! strategy selectors that route a production request to exactly one
//! concrete encoder.

// =============================================================================
// Geometry containers and shared utilities
// =============================================================================

pub mod bit_utils;
pub mod data_buffer;
pub mod data_types;
pub mod geometry_attribute;
pub mod geometry_indices;
pub mod mesh;
pub mod point_cloud;
pub mod quantization_utils;
pub mod status;

// =============================================================================
// Encoding configuration and bitstream framing
// =============================================================================

pub mod compression_config;
pub mod encoder_buffer;
pub mod encoder_options;
pub mod prediction_scheme;
pub mod version;

// =============================================================================
// Encoders, selection and dispatch
// =============================================================================

pub mod encoder;
pub mod expert_encoder;
pub mod mesh_connectivity_encoder;
pub mod mesh_encoder;
pub mod mesh_sequential_encoder;
pub mod point_cloud_encoder;
pub mod point_cloud_sequential_encoder;
pub mod point_cloud_spatial_encoder;
pub mod sequential_attribute_encoder;

// =============================================================================
// Re-exports
// =============================================================================

pub use compression_config::{EncodedGeometryType, EncodingMethod};
pub use data_buffer::DataBuffer;
pub use data_types::DataType;
pub use encoder::Encoder;
pub use encoder_buffer::EncoderBuffer;
pub use encoder_options::{AttributeOptions, EncoderOptions};
pub use expert_encoder::{
    select_mesh_encoding_method, select_point_cloud_encoding_method, ExpertEncoder,
};
pub use geometry_attribute::{AttributeType, PointAttribute};
pub use geometry_indices::{FaceIndex, PointIndex};
pub use mesh::Mesh;
pub use mesh_connectivity_encoder::MeshConnectivityEncoder;
pub use mesh_encoder::{create_mesh_encoder, MeshEncoder};
pub use mesh_sequential_encoder::MeshSequentialEncoder;
pub use point_cloud::PointCloud;
pub use point_cloud_encoder::{create_point_cloud_encoder, PointCloudEncoder};
pub use point_cloud_sequential_encoder::PointCloudSequentialEncoder;
pub use point_cloud_spatial_encoder::PointCloudSpatialEncoder;
pub use prediction_scheme::PredictionSchemeMethod;
pub use status::{EncodeError, Status};
