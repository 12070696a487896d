use tessera_core::compression_config::EncodingMethod;
use tessera_core::data_types::DataType;
use tessera_core::encoder_buffer::EncoderBuffer;
use tessera_core::encoder_options::EncoderOptions;
use tessera_core::geometry_attribute::{AttributeType, PointAttribute};
use tessera_core::geometry_indices::PointIndex;
use tessera_core::mesh::Mesh;
use tessera_core::mesh_encoder::{create_mesh_encoder, MeshEncoder};
use tessera_core::status::EncodeError;

fn quad_mesh() -> Mesh {
    let mut mesh = Mesh::new();
    let mut att = PointAttribute::new(AttributeType::Position, 3, DataType::Float32, false, 4);
    let corners = [
        [0.0f32, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [1.0, 1.0, 0.0],
    ];
    for (i, corner) in corners.iter().enumerate() {
        for (c, value) in corner.iter().enumerate() {
            att.buffer_mut().write(i * 12 + c * 4, &value.to_le_bytes());
        }
    }
    mesh.add_attribute(att).unwrap();
    mesh.add_face([PointIndex(0), PointIndex(1), PointIndex(2)]);
    mesh.add_face([PointIndex(2), PointIndex(1), PointIndex(3)]);
    mesh
}

#[test]
fn sequential_encoder_picks_the_narrowest_index_width() {
    let mesh = quad_mesh();
    let mut encoder = create_mesh_encoder(EncodingMethod::MeshSequential);
    encoder.set_mesh(&mesh);
    let mut buffer = EncoderBuffer::new();
    encoder.encode(&EncoderOptions::new(), &mut buffer).unwrap();

    // Header (11), face count (4), point count (4), then the width tag.
    assert_eq!(&buffer.data()[11..15], &2u32.to_le_bytes());
    assert_eq!(&buffer.data()[15..19], &4u32.to_le_bytes());
    assert_eq!(buffer.data()[19], 1);
    assert_eq!(&buffer.data()[20..26], &[0, 1, 2, 2, 1, 3]);
}

#[test]
fn connectivity_encoder_codes_corners_against_the_high_water_mark() {
    let mesh = quad_mesh();
    let mut encoder = create_mesh_encoder(EncodingMethod::MeshConnectivity);
    encoder.set_mesh(&mesh);
    let mut buffer = EncoderBuffer::new();
    encoder.encode(&EncoderOptions::new(), &mut buffer).unwrap();

    // Fresh vertices are zeros, the two back-references are zigzagged
    // offsets -1 and -2.
    assert_eq!(&buffer.data()[19..25], &[0, 0, 0, 1, 3, 0]);
}

#[test]
fn face_referencing_a_missing_point_is_rejected() {
    let mut mesh = quad_mesh();
    mesh.add_face([PointIndex(3), PointIndex(4), PointIndex(5)]);

    for method in [EncodingMethod::MeshSequential, EncodingMethod::MeshConnectivity] {
        let mut encoder = create_mesh_encoder(method);
        encoder.set_mesh(&mesh);
        let mut buffer = EncoderBuffer::new();
        let status = encoder.encode(&EncoderOptions::new(), &mut buffer);
        assert!(
            matches!(status, Err(EncodeError::InvalidParameter(_))),
            "{:?}",
            method
        );
    }
}

#[test]
fn unbound_encoder_reports_invalid_input() {
    let mut encoder = create_mesh_encoder(EncodingMethod::MeshConnectivity);
    let mut buffer = EncoderBuffer::new();
    let status = encoder.encode(&EncoderOptions::new(), &mut buffer);
    assert!(matches!(status, Err(EncodeError::InvalidInput(_))));
}

#[test]
fn factory_maps_tags_to_matching_encoders() {
    assert_eq!(
        create_mesh_encoder(EncodingMethod::MeshConnectivity).encoding_method(),
        EncodingMethod::MeshConnectivity
    );
    assert_eq!(
        create_mesh_encoder(EncodingMethod::MeshSequential).encoding_method(),
        EncodingMethod::MeshSequential
    );
    // Foreign tags fall back to the sequential encoder.
    assert_eq!(
        create_mesh_encoder(EncodingMethod::PointCloudSpatial).encoding_method(),
        EncodingMethod::MeshSequential
    );
}

#[test]
fn quantized_mesh_attributes_shrink_the_payload() {
    let mesh = quad_mesh();
    let mut options = EncoderOptions::new();

    let mut encoder = create_mesh_encoder(EncodingMethod::MeshConnectivity);
    encoder.set_mesh(&mesh);
    let mut raw = EncoderBuffer::new();
    encoder.encode(&options, &mut raw).unwrap();

    options.set_attribute_quantization(0, 8);
    let mut encoder = create_mesh_encoder(EncodingMethod::MeshConnectivity);
    encoder.set_mesh(&mesh);
    let mut quantized = EncoderBuffer::new();
    encoder.encode(&options, &mut quantized).unwrap();

    assert!(quantized.size() < raw.size());
}
