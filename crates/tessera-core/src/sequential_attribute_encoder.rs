use byteorder::{ByteOrder, LittleEndian};

use crate::bit_utils::zig_zag_encode;
use crate::data_types::DataType;
use crate::encoder_buffer::EncoderBuffer;
use crate::encoder_options::EncoderOptions;
use crate::geometry_attribute::PointAttribute;
use crate::point_cloud::PointCloud;
use crate::prediction_scheme::PredictionSchemeMethod;
use crate::quantization_utils::Quantizer;
use crate::status::{EncodeError, Status};

pub const MAX_QUANTIZATION_BITS: i32 = 30;

// Per-attribute payload coding tags.
const CODING_RAW: u8 = 0;
const CODING_QUANTIZED: u8 = 1;
const CODING_INTEGER: u8 = 2;

const PREDICTION_NONE: u8 = 0xff;

/// Writes the attribute descriptor table followed by one payload per
/// attribute. Shared by the sequential point-cloud and mesh encoders.
pub fn encode_attribute_set(
    point_cloud: &PointCloud,
    options: &EncoderOptions,
    out_buffer: &mut EncoderBuffer,
) -> Status {
    out_buffer.encode_varint(point_cloud.attributes().len() as u64);
    for att in point_cloud.attributes() {
        out_buffer.encode_u8(att.attribute_type() as u8);
        out_buffer.encode_u8(att.data_type() as u8);
        out_buffer.encode_u8(att.num_components());
        out_buffer.encode_u8(att.normalized() as u8);
        out_buffer.encode_varint(att.unique_id() as u64);
    }
    for (att_id, att) in point_cloud.attributes().iter().enumerate() {
        let encoder = SequentialAttributeEncoder::new(att, att_id as i32);
        encoder.encode_values(point_cloud.num_points(), options, out_buffer)?;
    }
    Ok(())
}

/// Codes the values of a single attribute. Picks quantized coding for
/// floats with quantization enabled, integer coding (with an optional
/// difference transform) for integral data, and raw pass-through otherwise.
pub struct SequentialAttributeEncoder<'a> {
    attribute: &'a PointAttribute,
    att_id: i32,
}

impl<'a> SequentialAttributeEncoder<'a> {
    pub fn new(attribute: &'a PointAttribute, att_id: i32) -> Self {
        Self { attribute, att_id }
    }

    pub fn encode_values(
        &self,
        num_points: usize,
        options: &EncoderOptions,
        out_buffer: &mut EncoderBuffer,
    ) -> Status {
        let att = self.attribute;
        if att.size() != num_points {
            return Err(EncodeError::InvalidParameter(format!(
                "attribute {} has {} values for {} points",
                self.att_id,
                att.size(),
                num_points
            )));
        }
        let quantization_bits = options.attribute_quantization_bits(self.att_id).unwrap_or(-1);
        if att.data_type() == DataType::Float32 && quantization_bits > 0 {
            self.encode_quantized(quantization_bits, out_buffer)
        } else if att.data_type().is_integral() && options.use_built_in_attribute_compression() {
            self.encode_integers(options, out_buffer)
        } else {
            self.encode_raw(out_buffer)
        }
    }

    fn encode_quantized(&self, bits: i32, out_buffer: &mut EncoderBuffer) -> Status {
        if bits > MAX_QUANTIZATION_BITS {
            return Err(EncodeError::InvalidParameter(format!(
                "quantization bits for attribute {} out of range: {}",
                self.att_id, bits
            )));
        }
        let att = self.attribute;
        let components = att.num_components() as usize;
        out_buffer.encode_u8(CODING_QUANTIZED);
        out_buffer.encode_u8(bits as u8);

        if att.size() == 0 {
            for _ in 0..components {
                out_buffer.encode_f32(0.0);
            }
            out_buffer.encode_f32(0.0);
            return Ok(());
        }

        // Per-component minimum, one shared range.
        let mut mins = vec![f32::MAX; components];
        let mut maxs = vec![f32::MIN; components];
        for entry in 0..att.size() {
            for (component, min) in mins.iter_mut().enumerate() {
                let value = att.component_f32(entry, component);
                *min = min.min(value);
                maxs[component] = maxs[component].max(value);
            }
        }
        let mut range: f32 = 0.0;
        for component in 0..components {
            range = range.max(maxs[component] - mins[component]);
        }
        for min in &mins {
            out_buffer.encode_f32(*min);
        }
        out_buffer.encode_f32(range);

        let max_quantized_value = (1u32 << bits) - 1;
        let quantizer = Quantizer::from_range(range, max_quantized_value);
        for entry in 0..att.size() {
            for (component, min) in mins.iter().enumerate() {
                let value = att.component_f32(entry, component);
                out_buffer.encode_varint(quantizer.quantize(value - min) as u64);
            }
        }
        Ok(())
    }

    fn encode_integers(&self, options: &EncoderOptions, out_buffer: &mut EncoderBuffer) -> Status {
        let att = self.attribute;
        let components = att.num_components() as usize;
        out_buffer.encode_u8(CODING_INTEGER);

        let use_difference = options.attribute_prediction_scheme(self.att_id)
            == Some(PredictionSchemeMethod::Difference);
        out_buffer.encode_u8(if use_difference {
            PredictionSchemeMethod::Difference.method_id()
        } else {
            PREDICTION_NONE
        });

        let mut previous = vec![0i64; components];
        for entry in 0..att.size() {
            for (component, prev) in previous.iter_mut().enumerate() {
                let value = component_as_i64(att, entry, component)?;
                let symbol = if use_difference {
                    let delta = value - *prev;
                    *prev = value;
                    delta
                } else {
                    value
                };
                out_buffer.encode_varint(zig_zag_encode(symbol));
            }
        }
        Ok(())
    }

    fn encode_raw(&self, out_buffer: &mut EncoderBuffer) -> Status {
        out_buffer.encode_u8(CODING_RAW);
        out_buffer.encode_data(self.attribute.buffer().data());
        Ok(())
    }
}

fn component_as_i64(
    att: &PointAttribute,
    entry: usize,
    component: usize,
) -> Result<i64, EncodeError> {
    let scalar_size = att.data_type().byte_length();
    let offset = entry * att.byte_stride() + component * scalar_size;
    let bytes = &att.buffer().data()[offset..offset + scalar_size];
    Ok(match att.data_type() {
        DataType::Int8 => bytes[0] as i8 as i64,
        DataType::Uint8 | DataType::Bool => bytes[0] as i64,
        DataType::Int16 => LittleEndian::read_i16(bytes) as i64,
        DataType::Uint16 => LittleEndian::read_u16(bytes) as i64,
        DataType::Int32 => LittleEndian::read_i32(bytes) as i64,
        DataType::Uint32 => LittleEndian::read_u32(bytes) as i64,
        DataType::Int64 => LittleEndian::read_i64(bytes),
        DataType::Uint64 => LittleEndian::read_u64(bytes) as i64,
        DataType::Float32 | DataType::Float64 | DataType::Invalid => {
            return Err(EncodeError::EncodingFailed(format!(
                "data type {:?} has no integer representation",
                att.data_type()
            )))
        }
    })
}
