// Domain layer: the built URI value and the builder port. No I/O.

pub mod model;
pub mod ports;
