pub mod marker;
pub mod model;
pub mod shell;
pub mod rotation;
