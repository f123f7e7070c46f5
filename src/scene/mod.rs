//! Boundary model (JSON) and arena representation of UI layout trees.

pub(crate) mod model;
pub(crate) mod tree;
