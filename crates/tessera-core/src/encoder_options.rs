use std::collections::HashMap;

use crate::compression_config::EncodingMethod;
use crate::prediction_scheme::PredictionSchemeMethod;

pub const DEFAULT_SPEED: i32 = 5;

/// Per-attribute settings. Absent fields mean "use the default"; an id that
/// was never configured yields the default struct.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AttributeOptions {
    pub quantization_bits: Option<i32>,
    pub prediction_scheme: Option<PredictionSchemeMethod>,
}

/// All knobs the encoding pipeline reads. Setters never validate; invalid
/// combinations surface at selection time.
#[derive(Debug, Clone, PartialEq)]
pub struct EncoderOptions {
    encoding_speed: i32,
    decoding_speed: i32,
    encoding_method: Option<EncodingMethod>,
    use_built_in_attribute_compression: bool,
    attribute_options: HashMap<i32, AttributeOptions>,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            encoding_speed: DEFAULT_SPEED,
            decoding_speed: DEFAULT_SPEED,
            encoding_method: None,
            use_built_in_attribute_compression: true,
            attribute_options: HashMap::new(),
        }
    }
}

impl EncoderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encoding speed, 0-10. Higher is faster at a lower compression ratio.
    pub fn speed(&self) -> i32 {
        self.encoding_speed
    }

    /// Stored for downstream use only; no selection rule reads it.
    pub fn decoding_speed(&self) -> i32 {
        self.decoding_speed
    }

    pub fn set_speed(&mut self, encoding_speed: i32, decoding_speed: i32) {
        self.encoding_speed = encoding_speed;
        self.decoding_speed = decoding_speed;
    }

    pub fn encoding_method(&self) -> Option<EncodingMethod> {
        self.encoding_method
    }

    pub fn set_encoding_method(&mut self, method: EncodingMethod) {
        self.encoding_method = Some(method);
    }

    pub fn use_built_in_attribute_compression(&self) -> bool {
        self.use_built_in_attribute_compression
    }

    pub fn set_use_built_in_attribute_compression(&mut self, enabled: bool) {
        self.use_built_in_attribute_compression = enabled;
    }

    /// Settings for the given attribute id. Ids that were never configured
    /// (including negative or out-of-range ones) yield the defaults.
    pub fn attribute(&self, att_id: i32) -> AttributeOptions {
        self.attribute_options
            .get(&att_id)
            .copied()
            .unwrap_or_default()
    }

    pub fn set_attribute_quantization(&mut self, att_id: i32, quantization_bits: i32) {
        self.attribute_options
            .entry(att_id)
            .or_default()
            .quantization_bits = Some(quantization_bits);
    }

    pub fn attribute_quantization_bits(&self, att_id: i32) -> Option<i32> {
        self.attribute(att_id).quantization_bits
    }

    /// True when quantization was configured with a positive bit depth.
    pub fn is_attribute_quantization_enabled(&self, att_id: i32) -> bool {
        self.attribute_quantization_bits(att_id)
            .map_or(false, |bits| bits > 0)
    }

    pub fn set_attribute_prediction_scheme(
        &mut self,
        att_id: i32,
        method: PredictionSchemeMethod,
    ) {
        self.attribute_options
            .entry(att_id)
            .or_default()
            .prediction_scheme = Some(method);
    }

    pub fn attribute_prediction_scheme(&self, att_id: i32) -> Option<PredictionSchemeMethod> {
        self.attribute(att_id).prediction_scheme
    }
}
