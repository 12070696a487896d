/// Maps floating-point values from `[0, range]` onto `[0, max_quantized_value]`.
/// Callers are expected to subtract the per-component minimum first.
#[derive(Debug, Default, Clone, Copy)]
pub struct Quantizer {
    inverse_delta: f32,
}

impl Quantizer {
    pub fn from_range(range: f32, max_quantized_value: u32) -> Self {
        let inverse_delta = if range > 0.0 {
            max_quantized_value as f32 / range
        } else {
            0.0
        };
        Self { inverse_delta }
    }

    pub fn quantize(&self, value: f32) -> u32 {
        (value * self.inverse_delta + 0.5).floor() as u32
    }
}
