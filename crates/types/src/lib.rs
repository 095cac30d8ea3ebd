pub mod color;
pub mod geometry;
pub mod ids;
pub mod resource;

pub use color::Color;
pub use geometry::{Rect, Size, EPSILON};
pub use ids::{ObjectId, ResourceLoc};
pub use resource::{
    ColorSpaceDescriptor, ColorSpaceKind, DrawParamDescriptor, FontDescriptor, LineCap, LineJoin,
    MediaType, MultiMediaDescriptor, PathCommand, ResourceDescriptor, ResourceKind, ResourceList,
    VectorShapeDescriptor,
};
