#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodedGeometryType {
    PointCloud = 0,
    TriangularMesh = 1,
}

/// Tag identifying a concrete encoding strategy. Selection produces one of
/// these; a factory maps it to exactly one encoder instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodingMethod {
    PointCloudSequential,
    PointCloudSpatial,
    MeshSequential,
    MeshConnectivity,
}

impl EncodingMethod {
    pub fn geometry_type(self) -> EncodedGeometryType {
        match self {
            EncodingMethod::PointCloudSequential | EncodingMethod::PointCloudSpatial => {
                EncodedGeometryType::PointCloud
            }
            EncodingMethod::MeshSequential | EncodingMethod::MeshConnectivity => {
                EncodedGeometryType::TriangularMesh
            }
        }
    }

    /// On-wire method id within the geometry type: 0 for the sequential
    /// fallback, 1 for the specialized strategy.
    pub fn method_id(self) -> u8 {
        match self {
            EncodingMethod::PointCloudSequential | EncodingMethod::MeshSequential => 0,
            EncodingMethod::PointCloudSpatial | EncodingMethod::MeshConnectivity => 1,
        }
    }
}
