// Domain layer: records, output formats and the resolved run settings.

pub mod model;
pub mod ports;
