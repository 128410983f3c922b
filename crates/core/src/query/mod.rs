pub mod model;
pub mod sap;

pub use model::Ancestral;
pub use sap::SapEngine;
