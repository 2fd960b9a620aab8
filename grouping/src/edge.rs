use std::hash::Hash;

use tracing::debug;

use crate::{Grouping, GroupingError, Merge};

/// A weighted candidate connection between two items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<T, W> {
    pub a: T,
    pub b: T,
    pub weight: W,
}

impl<T, W> Edge<T, W> {
    pub fn new(a: T, b: T, weight: W) -> Self {
        Self { a, b, weight }
    }
}

/// Sorts edges by ascending weight. Equal weights keep their input order.
pub fn sort_edges<T, W: Ord>(edges: &mut [Edge<T, W>]) {
    edges.sort_by(|x, y| x.weight.cmp(&y.weight));
}

/// Tunes how a sweep reports progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepOptions {
    /// Whether edges joining two items of the same group advance the step count.
    pub count_redundant_edges: bool,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            count_redundant_edges: true,
        }
    }
}

/// Tally of a finished sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    pub processed: usize,
    pub merges: usize,
    pub redundant: usize,
}

/// The edge whose merge left a single group, and the step it was counted at.
#[derive(Debug, PartialEq, Eq)]
pub struct Connection<'e, T, W> {
    pub edge: &'e Edge<T, W>,
    /// 1-based position of `edge` among the counted edges.
    pub step: usize,
}

impl<T: Eq + Hash + Clone> Grouping<T> {
    /// Processes edges in the given order, merging the groups they connect.
    ///
    /// Callers sort the edges beforehand (see [`sort_edges`]).
    pub fn process_edges_in_order<'e, W: 'e>(
        &mut self,
        edges: impl IntoIterator<Item = &'e Edge<T, W>>,
    ) -> Result<SweepStats, GroupingError>
    where
        T: 'e,
    {
        let mut stats = SweepStats::default();

        for edge in edges {
            stats.processed += 1;
            match self.union(&edge.a, &edge.b)? {
                Merge::Joined { .. } => stats.merges += 1,
                Merge::Redundant => stats.redundant += 1,
            }
        }

        debug!(?stats, groups = self.group_count(), "edge sweep finished");
        Ok(stats)
    }

    /// Processes edges until the whole universe is one group and returns the
    /// edge that closed the last gap.
    pub fn first_edge_that_fully_connects<'e, W: 'e>(
        &mut self,
        edges: impl IntoIterator<Item = &'e Edge<T, W>>,
        options: SweepOptions,
    ) -> Result<Connection<'e, T, W>, GroupingError>
    where
        T: 'e,
    {
        if self.group_count() <= 1 {
            return Err(GroupingError::AlreadyConnected { items: self.len() });
        }

        let mut step = 0;
        for edge in edges {
            let merge = self.union(&edge.a, &edge.b)?;
            if merge.is_joined() || options.count_redundant_edges {
                step += 1;
            }

            if merge.is_joined() && self.group_count() == 1 {
                debug!(step, "universe fully connected");
                return Ok(Connection { edge, step });
            }
        }

        Err(GroupingError::NeverConnected {
            groups: self.group_count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn chain() -> Vec<Edge<u8, u32>> {
        let mut edges = vec![
            Edge::new(0, 3, 50),
            Edge::new(2, 3, 40),
            Edge::new(0, 1, 10),
            Edge::new(0, 2, 30),
            Edge::new(1, 2, 20),
        ];
        sort_edges(&mut edges);
        edges
    }

    #[test]
    fn sorting_is_stable_for_equal_weights() {
        let mut edges = vec![
            Edge::new('b', 'c', 2),
            Edge::new('a', 'b', 1),
            Edge::new('c', 'd', 2),
        ];
        sort_edges(&mut edges);

        let order = edges.iter().map(|e| (e.a, e.b)).collect::<Vec<_>>();
        assert_eq!(order, vec![('a', 'b'), ('b', 'c'), ('c', 'd')]);
    }

    #[test]
    fn sweep_counts_merges_and_redundant_edges() -> Result<(), GroupingError> {
        let mut grouping = Grouping::new(0..4);
        let stats = grouping.process_edges_in_order(chain().iter().take(3))?;

        assert_eq!(
            stats,
            SweepStats {
                processed: 3,
                merges: 2,
                redundant: 1,
            }
        );
        assert_eq!(grouping.group_sizes(), vec![3, 1]);
        Ok(())
    }

    #[test]
    fn empty_sweep_leaves_singletons() -> Result<(), GroupingError> {
        let mut grouping = Grouping::new(0..4u8);
        let stats = grouping.process_edges_in_order(std::iter::empty::<&Edge<u8, u32>>())?;

        assert_eq!(stats, SweepStats::default());
        assert_eq!(grouping.group_sizes(), vec![1; 4]);
        Ok(())
    }

    #[rstest]
    #[case(true, 4)]
    #[case(false, 3)]
    fn reports_the_edge_that_connects_everything(
        #[case] count_redundant_edges: bool,
        #[case] step: usize,
    ) -> Result<(), GroupingError> {
        let edges = chain();
        let mut grouping = Grouping::new(0..4);

        let connection = grouping
            .first_edge_that_fully_connects(&edges, SweepOptions { count_redundant_edges })?;

        assert_eq!(connection.edge, &Edge::new(2, 3, 40));
        assert_eq!(connection.step, step);
        assert_eq!(grouping.group_count(), 1);
        Ok(())
    }

    #[test]
    fn fails_when_edges_never_connect() {
        let edges = vec![Edge::new(0, 1, 1), Edge::new(2, 3, 2)];
        let mut grouping = Grouping::new(0..5);

        assert_eq!(
            grouping.first_edge_that_fully_connects(&edges, SweepOptions::default()),
            Err(GroupingError::NeverConnected { groups: 3 })
        );
    }

    #[test]
    fn single_item_universe_is_already_connected() {
        let edges: Vec<Edge<u8, u8>> = Vec::new();
        let mut grouping = Grouping::new([7u8]);

        assert_eq!(
            grouping.first_edge_that_fully_connects(&edges, SweepOptions::default()),
            Err(GroupingError::AlreadyConnected { items: 1 })
        );
    }
}
