use tessera_core::compression_config::EncodingMethod;
use tessera_core::data_types::DataType;
use tessera_core::encoder::Encoder;
use tessera_core::encoder_buffer::EncoderBuffer;
use tessera_core::geometry_attribute::{AttributeType, PointAttribute};
use tessera_core::geometry_indices::PointIndex;
use tessera_core::mesh::Mesh;
use tessera_core::point_cloud::PointCloud;
use tessera_core::prediction_scheme::PredictionSchemeMethod;
use tessera_core::version::HEADER_METHOD_OFFSET;

fn float_position_cloud(num_points: usize) -> PointCloud {
    let mut pc = PointCloud::new();
    let mut att =
        PointAttribute::new(AttributeType::Position, 3, DataType::Float32, false, num_points);
    for i in 0..num_points {
        let base = i as f32;
        att.buffer_mut().write(i * 12, &base.to_le_bytes());
        att.buffer_mut().write(i * 12 + 4, &(base + 1.0).to_le_bytes());
        att.buffer_mut().write(i * 12 + 8, &(base + 2.0).to_le_bytes());
    }
    pc.add_attribute(att).unwrap();
    pc
}

#[test]
fn type_keyed_quantization_reaches_matching_attributes() {
    let pc = float_position_cloud(16);
    let mut encoder = Encoder::new();
    encoder.set_attribute_quantization(AttributeType::Position, 12);

    let mut buffer = EncoderBuffer::new();
    encoder.encode_point_cloud_to_buffer(&pc, &mut buffer).unwrap();
    // Quantization made the single position stream spatial-eligible.
    assert_eq!(buffer.data()[HEADER_METHOD_OFFSET], 1);
}

#[test]
fn settings_for_absent_types_match_nothing() {
    let pc = float_position_cloud(16);
    let mut encoder = Encoder::new();
    encoder.set_attribute_quantization(AttributeType::Normal, 12);

    let mut buffer = EncoderBuffer::new();
    encoder.encode_point_cloud_to_buffer(&pc, &mut buffer).unwrap();
    // Positions stayed unquantized, so the sequential fallback runs.
    assert_eq!(buffer.data()[HEADER_METHOD_OFFSET], 0);
}

#[test]
fn type_keyed_prediction_scheme_is_translated_to_attribute_ids() {
    let mut pc = PointCloud::new();
    let mut att = PointAttribute::new(AttributeType::Generic, 1, DataType::Int32, false, 4);
    for (i, v) in [5i32, 6, 7, 8].iter().enumerate() {
        att.buffer_mut().write(i * 4, &v.to_le_bytes());
    }
    pc.add_attribute(att).unwrap();

    let mut encoder = Encoder::new();
    encoder.set_attribute_prediction_scheme(AttributeType::Generic, PredictionSchemeMethod::Difference);

    let mut buffer = EncoderBuffer::new();
    encoder.encode_point_cloud_to_buffer(&pc, &mut buffer).unwrap();

    // Header (11), point count (4), attribute count varint (1), one
    // descriptor (5), then the integer-coding tag and the prediction id.
    assert_eq!(buffer.data()[21], 2);
    assert_eq!(
        buffer.data()[22],
        PredictionSchemeMethod::Difference.method_id()
    );
}

#[test]
fn mesh_encoding_follows_the_speed_policy() {
    let mut mesh = Mesh::new();
    mesh.add_attribute(PointAttribute::new(
        AttributeType::Position,
        3,
        DataType::Float32,
        false,
        3,
    ))
    .unwrap();
    mesh.add_face([PointIndex(0), PointIndex(1), PointIndex(2)]);

    let mut encoder = Encoder::new();
    let mut buffer = EncoderBuffer::new();
    encoder.encode_mesh_to_buffer(&mesh, &mut buffer).unwrap();
    assert_eq!(buffer.data()[HEADER_METHOD_OFFSET], 1);

    encoder.set_speed_options(10, 10);
    let mut buffer = EncoderBuffer::new();
    encoder.encode_mesh_to_buffer(&mesh, &mut buffer).unwrap();
    assert_eq!(buffer.data()[HEADER_METHOD_OFFSET], 0);
}

#[test]
fn explicit_method_set_on_the_facade_is_forwarded() {
    let pc = float_position_cloud(16);
    let mut encoder = Encoder::new();
    encoder.set_encoding_method(EncodingMethod::PointCloudSpatial);
    encoder.set_attribute_quantization(AttributeType::Position, 10);

    let mut buffer = EncoderBuffer::new();
    encoder.encode_point_cloud_to_buffer(&pc, &mut buffer).unwrap();
    assert_eq!(buffer.data()[HEADER_METHOD_OFFSET], 1);
}
