//! Uniform ratio scaling of [`crate::UiTree`]s.
//!
//! [`scaler::TreeScaler`] is the entry point; the passes live in their own modules and share
//! the text-metric helper.

pub(crate) mod direct;
pub(crate) mod opts;
pub(crate) mod relative;
pub(crate) mod scaler;
pub(crate) mod snapshot;
pub(crate) mod text;
