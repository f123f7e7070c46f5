//! uiscale rescales hierarchical UI layout trees by one uniform ratio.
//!
//! A layout authored at one resolution (say 1920x1080) is rewritten in place so it renders at
//! another. Only pixel-space offsets (`position.offset`, `size.offset`) and text metrics are
//! touched; every other property of a node passes through unchanged.
//!
//! # Pipeline overview
//!
//! 1. **Load**: `NodeDef` (serde/JSON boundary) -> [`UiTree`] (arena with parent links)
//! 2. **Scale**: [`TreeScaler::scale`] with a [`ScaleStrategy`]
//! 3. **Save** (optional): [`UiTree::to_json_string`] / [`UiTree::to_writer`]
//!
//! # Strategies
//!
//! - [`ScaleStrategy::Direct`]: every renderable node's own offsets are multiplied by the ratio.
//! - [`ScaleStrategy::Relative`]: original geometry is snapshotted first, then each node is
//!   recomputed as a fraction of its already-scaled parent, so rounding does not compound.
//!
//! A node is *renderable* when it has both a `position` and a `size` record. Other nodes are
//! left untouched but their children are still visited. Sizes and font sizes never drop
//! below 1.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod scale;
mod scene;

pub use crate::foundation::core::Vec2;
pub use crate::foundation::error::{UiScaleError, UiScaleResult};
pub use crate::foundation::ids::{NodeIdx, TreeId};
pub use crate::scale::opts::{ScaleStrategy, ScalerOpts, SizePolicy};
pub use crate::scale::scaler::{ScaleStats, TreeScaler};
pub use crate::scene::model::{Dim, NodeDef};
pub use crate::scene::tree::{Preorder, TreeSummary, UiNode, UiTree};
