// Domain layer: form and report models plus the ports the core talks to.

pub mod model;
pub mod ports;
