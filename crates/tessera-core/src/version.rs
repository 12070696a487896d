//! Bitstream framing shared by all encoders.

use crate::compression_config::EncodingMethod;
use crate::encoder_buffer::EncoderBuffer;

/// Magic bytes opening every tessera stream.
pub const STREAM_MAGIC: &[u8; 5] = b"TESSA";

pub const BITSTREAM_VERSION_MAJOR: u8 = 1;
pub const BITSTREAM_VERSION_MINOR: u8 = 0;

/// Byte offset of the geometry-type tag within the stream header.
pub const HEADER_GEOMETRY_TYPE_OFFSET: usize = 7;
/// Byte offset of the method id within the stream header.
pub const HEADER_METHOD_OFFSET: usize = 8;

/// Writes the common header: magic, version, geometry type, method id and a
/// reserved flags field.
pub fn encode_stream_header(out_buffer: &mut EncoderBuffer, method: EncodingMethod) {
    out_buffer.encode_data(STREAM_MAGIC);
    out_buffer.encode_u8(BITSTREAM_VERSION_MAJOR);
    out_buffer.encode_u8(BITSTREAM_VERSION_MINOR);
    out_buffer.encode_u8(method.geometry_type() as u8);
    out_buffer.encode_u8(method.method_id());
    out_buffer.encode_u16(0); // Flags, reserved.
}
