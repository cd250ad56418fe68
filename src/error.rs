/// Ways a [`Tree`][crate::Tree] can be found broken by [`validate`][crate::Tree::validate].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum InvariantError {
    /// An in-order walk reached a key that isn't larger than the one before it.
    #[error("key at in-order position {position} is not greater than its predecessor")]
    OutOfOrder {
        /// Zero-based in-order index of the offending key.
        position: usize,
    },
    /// The tree's recorded length disagrees with how many nodes it has.
    #[error("tree records {recorded} keys but holds {counted}")]
    LengthMismatch {
        /// The length the tree reports.
        recorded: usize,
        /// The number of nodes actually reachable from the root.
        counted: usize,
    },
}
