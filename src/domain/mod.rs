// Domain layer: records the codec produces and the ports it depends on.

pub mod model;
pub mod ports;
