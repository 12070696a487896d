use crate::geometry_attribute::PointAttribute;
use crate::status::EncodeError;

/// An unordered collection of points, each carrying one or more attributes.
/// Attributes get dense ids in insertion order; the first attribute fixes
/// the point count and every later one must agree with it.
#[derive(Debug, Default, Clone)]
pub struct PointCloud {
    attributes: Vec<PointAttribute>,
    num_points: usize,
}

impl PointCloud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    /// Only meaningful for attribute-free clouds; attributes added later
    /// must carry exactly this many values.
    pub fn set_num_points(&mut self, num_points: usize) {
        self.num_points = num_points;
    }

    /// Adds an attribute and returns its id, which also becomes the
    /// attribute's unique id in produced streams. An attribute whose value
    /// count disagrees with an already fixed point count is rejected.
    pub fn add_attribute(&mut self, mut attribute: PointAttribute) -> Result<i32, EncodeError> {
        if self.num_points == 0 {
            self.num_points = attribute.size();
        } else if attribute.size() != self.num_points {
            return Err(EncodeError::InvalidParameter(format!(
                "attribute carries {} values for a cloud of {} points",
                attribute.size(),
                self.num_points
            )));
        }
        let id = self.attributes.len() as i32;
        attribute.set_unique_id(id as u32);
        self.attributes.push(attribute);
        Ok(id)
    }

    pub fn num_attributes(&self) -> i32 {
        self.attributes.len() as i32
    }

    /// Lookup tolerating ids straight from unvalidated configuration;
    /// negative and out-of-range ids yield `None`.
    pub fn attribute(&self, att_id: i32) -> Option<&PointAttribute> {
        usize::try_from(att_id)
            .ok()
            .and_then(|index| self.attributes.get(index))
    }

    pub fn attributes(&self) -> &[PointAttribute] {
        &self.attributes
    }
}
