/// Prediction transform applied to attribute values before entropy coding.
/// Stored per attribute in the encoder options; the sequential coders only
/// act on `Difference`, the remaining methods are recorded for downstream
/// encoders that understand them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredictionSchemeMethod {
    Difference = 0,
    Parallelogram = 1,
    MultiParallelogram = 2,
    GeometricNormal = 3,
}

impl PredictionSchemeMethod {
    pub fn method_id(self) -> u8 {
        self as u8
    }
}
