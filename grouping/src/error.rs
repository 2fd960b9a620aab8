use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while building or querying a [`Grouping`](crate::Grouping).
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum GroupingError {
    /// An edge or query referenced an item outside the universe.
    #[error("item is not part of the grouping universe")]
    #[diagnostic(code(aoc_grouping::unknown_item))]
    UnknownItem,

    /// The edges ran out before every item ended up in one group.
    #[error("edges ran out with {groups} groups still apart")]
    #[diagnostic(
        code(aoc_grouping::never_connected),
        help("the edge list does not span the whole universe")
    )]
    NeverConnected { groups: usize },

    /// No edge can be the first to connect a universe that is already one group.
    #[error("all {items} items already form a single group")]
    #[diagnostic(code(aoc_grouping::already_connected))]
    AlreadyConnected { items: usize },
}
