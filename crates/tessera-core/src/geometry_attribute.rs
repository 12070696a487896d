use byteorder::{ByteOrder, LittleEndian};

use crate::data_buffer::DataBuffer;
use crate::data_types::DataType;

/// Semantic role of a per-point data stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeType {
    Invalid = -1,
    Position = 0,
    Normal,
    Color,
    TexCoord,
    Generic,
}

/// A named per-point data stream with a component count and scalar type.
/// Values are stored as raw little-endian bytes, one entry per point.
#[derive(Debug, Clone)]
pub struct PointAttribute {
    attribute_type: AttributeType,
    data_type: DataType,
    num_components: u8,
    normalized: bool,
    num_entries: usize,
    unique_id: u32,
    buffer: DataBuffer,
}

impl PointAttribute {
    pub fn new(
        attribute_type: AttributeType,
        num_components: u8,
        data_type: DataType,
        normalized: bool,
        num_entries: usize,
    ) -> Self {
        let byte_stride = num_components as usize * data_type.byte_length();
        let mut buffer = DataBuffer::new();
        buffer.resize(num_entries * byte_stride);
        Self {
            attribute_type,
            data_type,
            num_components,
            normalized,
            num_entries,
            unique_id: 0,
            buffer,
        }
    }

    pub fn attribute_type(&self) -> AttributeType {
        self.attribute_type
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn num_components(&self) -> u8 {
        self.num_components
    }

    pub fn normalized(&self) -> bool {
        self.normalized
    }

    /// Number of value entries (one per point).
    pub fn size(&self) -> usize {
        self.num_entries
    }

    pub fn unique_id(&self) -> u32 {
        self.unique_id
    }

    pub fn set_unique_id(&mut self, id: u32) {
        self.unique_id = id;
    }

    pub fn byte_stride(&self) -> usize {
        self.num_components as usize * self.data_type.byte_length()
    }

    pub fn buffer(&self) -> &DataBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut DataBuffer {
        &mut self.buffer
    }

    /// Raw bytes of one value entry.
    pub fn entry_bytes(&self, entry: usize) -> &[u8] {
        let stride = self.byte_stride();
        let offset = entry * stride;
        &self.buffer.data()[offset..offset + stride]
    }

    pub fn component_f32(&self, entry: usize, component: usize) -> f32 {
        debug_assert_eq!(self.data_type, DataType::Float32);
        let offset = entry * self.byte_stride() + component * 4;
        LittleEndian::read_f32(&self.buffer.data()[offset..offset + 4])
    }

    pub fn component_u32(&self, entry: usize, component: usize) -> u32 {
        debug_assert_eq!(self.data_type, DataType::Uint32);
        let offset = entry * self.byte_stride() + component * 4;
        LittleEndian::read_u32(&self.buffer.data()[offset..offset + 4])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_and_size() {
        let att = PointAttribute::new(AttributeType::Position, 3, DataType::Float32, false, 10);
        assert_eq!(att.byte_stride(), 12);
        assert_eq!(att.size(), 10);
        assert_eq!(att.buffer().len(), 120);
    }

    #[test]
    fn component_readback() {
        let mut att = PointAttribute::new(AttributeType::Position, 3, DataType::Float32, false, 2);
        att.buffer_mut().write(12, &1.5f32.to_le_bytes());
        att.buffer_mut().write(20, &(-2.0f32).to_le_bytes());
        assert_eq!(att.component_f32(1, 0), 1.5);
        assert_eq!(att.component_f32(1, 2), -2.0);
    }
}
