//! Domain layer: tender entities, pure validation rules, and the ports
//! through which the registry reaches its external collaborators.

pub mod ports;
pub mod tender;
pub mod validation;
