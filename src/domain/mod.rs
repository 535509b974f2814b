// Domain layer: models and the ports the handlers and loops depend on.

pub mod model;
pub mod ports;
