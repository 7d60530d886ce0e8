// Domain layer: content model and ports. No knowledge of the page tree.

pub mod model;
pub mod ports;
