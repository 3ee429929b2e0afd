// Domain layer: view-model records, provider payload shapes and ports.

pub mod model;
pub mod ports;
pub mod raw;
