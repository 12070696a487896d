use crate::compression_config::EncodingMethod;
use crate::encoder_buffer::EncoderBuffer;
use crate::encoder_options::EncoderOptions;
use crate::mesh::Mesh;
use crate::mesh_connectivity_encoder::MeshConnectivityEncoder;
use crate::mesh_sequential_encoder::MeshSequentialEncoder;
use crate::status::Status;

/// Capability contract for mesh encoders, mirroring the point-cloud one
/// with a mesh binding.
pub trait MeshEncoder<'a> {
    fn set_mesh(&mut self, mesh: &'a Mesh);

    fn mesh(&self) -> Option<&'a Mesh>;

    fn encoding_method(&self) -> EncodingMethod;

    fn encode(&mut self, options: &EncoderOptions, out_buffer: &mut EncoderBuffer) -> Status;
}

/// Maps a selection tag to exactly one encoder instance. Tags other than
/// the connectivity one map to the sequential fallback.
pub fn create_mesh_encoder<'a>(method: EncodingMethod) -> Box<dyn MeshEncoder<'a> + 'a> {
    match method {
        EncodingMethod::MeshConnectivity => Box::new(MeshConnectivityEncoder::new()),
        _ => Box::new(MeshSequentialEncoder::new()),
    }
}
