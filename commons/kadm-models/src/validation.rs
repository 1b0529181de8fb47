#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// A node snapshot was attributed to a different cluster than the one
    /// being resolved. This is an upstream invariant violation and is
    /// classified apart from any ordinary `deny` validation outcome.
    #[error("Node {node} does not belong to cluster {cluster}")]
    ForeignNode { node: String, cluster: String },

    #[error("Validator error: {0}")]
    ValidatorError(#[from] validator::ValidationErrors),
}
