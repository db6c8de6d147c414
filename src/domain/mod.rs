// Domain layer: models, wire types and ports. No I/O happens here.

pub mod completion;
pub mod model;
pub mod ports;
