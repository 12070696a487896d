use crate::bit_utils::zig_zag_encode;
use crate::compression_config::EncodingMethod;
use crate::data_types::DataType;
use crate::encoder_buffer::EncoderBuffer;
use crate::encoder_options::EncoderOptions;
use crate::geometry_attribute::{AttributeType, PointAttribute};
use crate::point_cloud::PointCloud;
use crate::point_cloud_encoder::PointCloudEncoder;
use crate::quantization_utils::Quantizer;
use crate::sequential_attribute_encoder::MAX_QUANTIZATION_BITS;
use crate::status::{EncodeError, Status};
use crate::version::encode_stream_header;

/// Position-stream encoder exploiting 3-D spatial locality: points are
/// quantized onto an integer grid, sorted, and coded as per-component
/// deltas. Requires attribute 0 to be a 3-component position stream of
/// float32 (quantized) or uint32 values.
#[derive(Debug, Default)]
pub struct PointCloudSpatialEncoder<'a> {
    point_cloud: Option<&'a PointCloud>,
}

impl<'a> PointCloudSpatialEncoder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    fn gather_grid_positions(
        &self,
        att: &PointAttribute,
        num_points: usize,
        options: &EncoderOptions,
        out_buffer: &mut EncoderBuffer,
    ) -> Result<Vec<[u32; 3]>, EncodeError> {
        let mut grid = Vec::with_capacity(num_points);

        if att.data_type() == DataType::Uint32 {
            out_buffer.encode_u8(0); // Raw integer grid.
            for entry in 0..num_points {
                grid.push([
                    att.component_u32(entry, 0),
                    att.component_u32(entry, 1),
                    att.component_u32(entry, 2),
                ]);
            }
            return Ok(grid);
        }

        let bits = options.attribute_quantization_bits(0).unwrap_or(-1);
        if bits <= 0 {
            return Err(EncodeError::InvalidParameter(
                "spatial encoding of float positions requires quantization".to_string(),
            ));
        }
        if bits > MAX_QUANTIZATION_BITS {
            return Err(EncodeError::InvalidParameter(format!(
                "quantization bits for the position attribute out of range: {}",
                bits
            )));
        }

        let mut mins = [f32::MAX; 3];
        let mut maxs = [f32::MIN; 3];
        for entry in 0..num_points {
            for component in 0..3 {
                let value = att.component_f32(entry, component);
                mins[component] = mins[component].min(value);
                maxs[component] = maxs[component].max(value);
            }
        }
        if num_points == 0 {
            mins = [0.0; 3];
            maxs = [0.0; 3];
        }
        let mut range: f32 = 0.0;
        for component in 0..3 {
            range = range.max(maxs[component] - mins[component]);
        }

        out_buffer.encode_u8(1); // Quantized grid.
        out_buffer.encode_u8(bits as u8);
        for min in &mins {
            out_buffer.encode_f32(*min);
        }
        out_buffer.encode_f32(range);

        let quantizer = Quantizer::from_range(range, (1u32 << bits) - 1);
        for entry in 0..num_points {
            let mut point = [0u32; 3];
            for (component, min) in mins.iter().enumerate() {
                point[component] = quantizer.quantize(att.component_f32(entry, component) - min);
            }
            grid.push(point);
        }
        Ok(grid)
    }
}

impl<'a> PointCloudEncoder<'a> for PointCloudSpatialEncoder<'a> {
    fn set_point_cloud(&mut self, point_cloud: &'a PointCloud) {
        self.point_cloud = Some(point_cloud);
    }

    fn point_cloud(&self) -> Option<&'a PointCloud> {
        self.point_cloud
    }

    fn encoding_method(&self) -> EncodingMethod {
        EncodingMethod::PointCloudSpatial
    }

    fn encode(&mut self, options: &EncoderOptions, out_buffer: &mut EncoderBuffer) -> Status {
        let point_cloud = self.point_cloud.ok_or_else(|| {
            EncodeError::InvalidInput("no point cloud bound to the encoder".to_string())
        })?;
        let att = point_cloud.attribute(0).ok_or_else(|| {
            EncodeError::InvalidParameter(
                "spatial encoding requires a position attribute".to_string(),
            )
        })?;
        if att.attribute_type() != AttributeType::Position || att.num_components() != 3 {
            return Err(EncodeError::InvalidParameter(
                "spatial encoding requires a 3-component position attribute".to_string(),
            ));
        }
        if att.data_type() != DataType::Float32 && att.data_type() != DataType::Uint32 {
            return Err(EncodeError::InvalidParameter(format!(
                "spatial encoding does not support position data type {:?}",
                att.data_type()
            )));
        }
        let num_points = point_cloud.num_points();
        if att.size() != num_points {
            return Err(EncodeError::InvalidParameter(format!(
                "position attribute has {} values for {} points",
                att.size(),
                num_points
            )));
        }

        encode_stream_header(out_buffer, EncodingMethod::PointCloudSpatial);
        out_buffer.encode_u32(num_points as u32);

        let grid = self.gather_grid_positions(att, num_points, options, out_buffer)?;

        // Lexicographic order keeps spatially close points adjacent, so the
        // per-component deltas stay small.
        let mut order: Vec<usize> = (0..num_points).collect();
        order.sort_unstable_by_key(|&i| grid[i]);

        let mut previous = [0i64; 3];
        for &i in &order {
            for (component, prev) in previous.iter_mut().enumerate() {
                let value = grid[i][component] as i64;
                out_buffer.encode_varint(zig_zag_encode(value - *prev));
                *prev = value;
            }
        }

        // Any further attributes follow the reordered points verbatim.
        for (att_id, extra) in point_cloud.attributes().iter().enumerate().skip(1) {
            if extra.size() != num_points {
                return Err(EncodeError::InvalidParameter(format!(
                    "attribute {} has {} values for {} points",
                    att_id,
                    extra.size(),
                    num_points
                )));
            }
            out_buffer.encode_u8(extra.attribute_type() as u8);
            out_buffer.encode_u8(extra.data_type() as u8);
            out_buffer.encode_u8(extra.num_components());
            out_buffer.encode_u8(extra.normalized() as u8);
            out_buffer.encode_varint(extra.unique_id() as u64);
            for &i in &order {
                out_buffer.encode_data(extra.entry_bytes(i));
            }
        }
        Ok(())
    }
}
