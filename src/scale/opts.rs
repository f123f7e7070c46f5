/// Traversal strategy of a [`crate::TreeScaler`], fixed at construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleStrategy {
    /// Multiply every node's own offsets and text metrics by the ratio.
    #[default]
    Direct,
    /// Snapshot original geometry, then recompute each node as a fraction of its scaled parent.
    Relative,
}

/// How the relative strategy derives new sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizePolicy {
    /// Size follows the parent: `(own / original parent) * target parent`.
    #[default]
    Relative,
    /// Size is the original size times the ratio, independent of the parent.
    Direct,
}

/// Scaler configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScalerOpts {
    /// Traversal strategy.
    pub strategy: ScaleStrategy,
    /// Size policy; only consulted by [`ScaleStrategy::Relative`].
    pub size_policy: SizePolicy,
}

impl ScalerOpts {
    /// Options selecting the relative strategy with the given size policy.
    pub fn relative(size_policy: SizePolicy) -> Self {
        Self {
            strategy: ScaleStrategy::Relative,
            size_policy,
        }
    }
}
