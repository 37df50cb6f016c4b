// Domain layer: registry entities and the settings port the registry is built from.

pub mod model;
pub mod ports;
