pub mod earth;
pub mod geospatial;
pub mod marker;
pub mod rotation;
