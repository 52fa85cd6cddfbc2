// Domain layer: feed records, style outputs and the ports the pipeline runs against.

pub mod model;
pub mod ports;
