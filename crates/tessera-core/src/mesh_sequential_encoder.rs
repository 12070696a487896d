use crate::bit_utils::bits_required;
use crate::compression_config::EncodingMethod;
use crate::encoder_buffer::EncoderBuffer;
use crate::encoder_options::EncoderOptions;
use crate::mesh::Mesh;
use crate::mesh_encoder::MeshEncoder;
use crate::sequential_attribute_encoder::encode_attribute_set;
use crate::status::{EncodeError, Status};
use crate::version::encode_stream_header;

/// Stores connectivity verbatim at the narrowest index width that fits,
/// then defers to the generic attribute coding. The fastest mesh path.
#[derive(Debug, Default)]
pub struct MeshSequentialEncoder<'a> {
    mesh: Option<&'a Mesh>,
}

impl<'a> MeshSequentialEncoder<'a> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'a> MeshEncoder<'a> for MeshSequentialEncoder<'a> {
    fn set_mesh(&mut self, mesh: &'a Mesh) {
        self.mesh = Some(mesh);
    }

    fn mesh(&self) -> Option<&'a Mesh> {
        self.mesh
    }

    fn encoding_method(&self) -> EncodingMethod {
        EncodingMethod::MeshSequential
    }

    fn encode(&mut self, options: &EncoderOptions, out_buffer: &mut EncoderBuffer) -> Status {
        let mesh = self
            .mesh
            .ok_or_else(|| EncodeError::InvalidInput("no mesh bound to the encoder".to_string()))?;
        encode_stream_header(out_buffer, EncodingMethod::MeshSequential);
        out_buffer.encode_u32(mesh.num_faces() as u32);
        out_buffer.encode_u32(mesh.num_points() as u32);

        let num_points = mesh.num_points();
        let index_bits = if num_points <= 1 {
            1
        } else {
            bits_required(num_points as u32 - 1).max(1)
        };
        let bytes_per_index: u8 = match (index_bits + 7) / 8 {
            1 => 1,
            2 => 2,
            _ => 4,
        };
        out_buffer.encode_u8(bytes_per_index);

        for face in mesh.faces() {
            for corner in face {
                let index = corner.0;
                if index as usize >= num_points {
                    return Err(EncodeError::InvalidParameter(format!(
                        "face references point {} but the mesh has {} points",
                        index, num_points
                    )));
                }
                match bytes_per_index {
                    1 => out_buffer.encode_u8(index as u8),
                    2 => out_buffer.encode_u16(index as u16),
                    _ => out_buffer.encode_u32(index),
                }
            }
        }

        encode_attribute_set(mesh, options, out_buffer)
    }
}
