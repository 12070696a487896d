use crate::bit_utils::zig_zag_encode;
use crate::compression_config::EncodingMethod;
use crate::encoder_buffer::EncoderBuffer;
use crate::encoder_options::EncoderOptions;
use crate::mesh::Mesh;
use crate::mesh_encoder::MeshEncoder;
use crate::sequential_attribute_encoder::encode_attribute_set;
use crate::status::{EncodeError, Status};
use crate::version::encode_stream_header;

/// Connectivity-aware mesh encoder. Corner indices are coded relative to
/// the highest vertex id seen so far, so a triangle strip of fresh
/// vertices costs one symbol per corner and back-references stay small.
#[derive(Debug, Default)]
pub struct MeshConnectivityEncoder<'a> {
    mesh: Option<&'a Mesh>,
}

impl<'a> MeshConnectivityEncoder<'a> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'a> MeshEncoder<'a> for MeshConnectivityEncoder<'a> {
    fn set_mesh(&mut self, mesh: &'a Mesh) {
        self.mesh = Some(mesh);
    }

    fn mesh(&self) -> Option<&'a Mesh> {
        self.mesh
    }

    fn encoding_method(&self) -> EncodingMethod {
        EncodingMethod::MeshConnectivity
    }

    fn encode(&mut self, options: &EncoderOptions, out_buffer: &mut EncoderBuffer) -> Status {
        let mesh = self
            .mesh
            .ok_or_else(|| EncodeError::InvalidInput("no mesh bound to the encoder".to_string()))?;
        encode_stream_header(out_buffer, EncodingMethod::MeshConnectivity);
        out_buffer.encode_u32(mesh.num_faces() as u32);
        out_buffer.encode_u32(mesh.num_points() as u32);

        let num_points = mesh.num_points();
        // Each corner is coded as a signed offset from the next unseen
        // vertex id; a first reference comes out as zero.
        let mut next_new: i64 = 0;
        for face in mesh.faces() {
            for corner in face {
                let index = corner.0 as i64;
                if corner.0 as usize >= num_points {
                    return Err(EncodeError::InvalidParameter(format!(
                        "face references point {} but the mesh has {} points",
                        corner.0, num_points
                    )));
                }
                out_buffer.encode_varint(zig_zag_encode(index - next_new));
                if index >= next_new {
                    next_new = index + 1;
                }
            }
        }

        encode_attribute_set(mesh, options, out_buffer)
    }
}
