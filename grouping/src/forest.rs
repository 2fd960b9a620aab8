use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use crate::GroupingError;

/// Identifies a group through the arena index of its root item.
///
/// Ids are only stable until the next merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(usize);

/// Outcome of joining the groups of two items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Merge {
    /// Two distinct groups became one group of `size` items.
    Joined { size: usize },
    /// Both items already shared a group.
    Redundant,
}

impl Merge {
    pub fn is_joined(self) -> bool {
        matches!(self, Merge::Joined { .. })
    }
}

/// A snapshot of one group, borrowing its members from the universe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<'a, T> {
    pub id: GroupId,
    pub members: Vec<&'a T>,
}

impl<T: PartialEq> Group<'_, T> {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.members.iter().any(|&member| member == item)
    }
}

/// Disjoint Set Union over an arbitrary item universe.
///
/// Items are interned into a dense arena once, so the forest itself only deals
/// with `usize` indices. Merges use union by size and path halving; read-only
/// queries walk to the root without compressing, which keeps them `&self`.
#[derive(Debug, Clone)]
pub struct Grouping<T> {
    items: Vec<T>,
    index: HashMap<T, usize>,
    parent: Vec<usize>,
    sizes: Vec<usize>,
    groups: usize,
}

impl<T: Eq + Hash + Clone> Grouping<T> {
    /// Builds the universe. Repeated items collapse into one.
    pub fn new(universe: impl IntoIterator<Item = T>) -> Self {
        let mut items = Vec::new();
        let mut index = HashMap::new();

        for item in universe {
            if let Entry::Vacant(slot) = index.entry(item.clone()) {
                slot.insert(items.len());
                items.push(item);
            }
        }

        let n = items.len();
        Self {
            items,
            index,
            parent: (0..n).collect(),
            sizes: vec![1; n],
            groups: n,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of groups currently partitioning the universe.
    pub fn group_count(&self) -> usize {
        self.groups
    }

    fn index_of(&self, item: &T) -> Result<usize, GroupingError> {
        self.index.get(item).copied().ok_or(GroupingError::UnknownItem)
    }

    fn root(&self, mut i: usize) -> usize {
        while self.parent[i] != i {
            i = self.parent[i];
        }
        i
    }

    fn find(&mut self, mut i: usize) -> usize {
        while self.parent[i] != i {
            let grandparent = self.parent[self.parent[i]];
            self.parent[i] = grandparent;
            i = grandparent;
        }
        i
    }

    /// Joins the groups containing `a` and `b`.
    pub fn union(&mut self, a: &T, b: &T) -> Result<Merge, GroupingError> {
        let a = self.index_of(a)?;
        let b = self.index_of(b)?;
        Ok(self.union_indices(a, b))
    }

    pub(crate) fn union_indices(&mut self, a: usize, b: usize) -> Merge {
        let mut root_a = self.find(a);
        let mut root_b = self.find(b);

        if root_a == root_b {
            return Merge::Redundant;
        }

        // The larger tree absorbs the smaller one.
        if self.sizes[root_a] < self.sizes[root_b] {
            std::mem::swap(&mut root_a, &mut root_b);
        }
        self.parent[root_b] = root_a;
        self.sizes[root_a] += self.sizes[root_b];
        self.groups -= 1;

        Merge::Joined {
            size: self.sizes[root_a],
        }
    }

    pub fn group_id(&self, item: &T) -> Result<GroupId, GroupingError> {
        Ok(GroupId(self.root(self.index_of(item)?)))
    }

    pub fn same_group(&self, a: &T, b: &T) -> Result<bool, GroupingError> {
        Ok(self.group_id(a)? == self.group_id(b)?)
    }

    /// Returns the group currently containing `item`.
    pub fn group_of(&self, item: &T) -> Result<Group<'_, T>, GroupingError> {
        let root = self.root(self.index_of(item)?);
        let members = self
            .items
            .iter()
            .enumerate()
            .filter(|&(i, _)| self.root(i) == root)
            .map(|(_, member)| member)
            .collect();

        Ok(Group {
            id: GroupId(root),
            members,
        })
    }

    /// The full partition, ordered by group id. Members keep universe order.
    pub fn groups(&self) -> Vec<Group<'_, T>> {
        let mut by_root: BTreeMap<usize, Vec<&T>> = BTreeMap::new();
        for (i, item) in self.items.iter().enumerate() {
            by_root.entry(self.root(i)).or_default().push(item);
        }

        by_root
            .into_iter()
            .map(|(root, members)| Group {
                id: GroupId(root),
                members,
            })
            .collect()
    }

    /// Sizes of all groups, largest first.
    pub fn group_sizes(&self) -> Vec<usize> {
        let mut sizes = self
            .parent
            .iter()
            .enumerate()
            .filter(|&(i, &parent)| i == parent)
            .map(|(i, _)| self.sizes[i])
            .collect::<Vec<_>>();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes
    }

    /// Multiplies the sizes of the `n` largest groups.
    ///
    /// With fewer than `n` groups every group takes part; an empty universe
    /// yields the empty product, 1.
    pub fn top_n_group_sizes_product(&self, n: usize) -> usize {
        self.group_sizes().into_iter().take(n).product()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn starts_as_singletons() {
        let grouping = Grouping::new(['a', 'b', 'c']);

        assert_eq!(grouping.group_count(), 3);
        assert_eq!(grouping.group_sizes(), vec![1, 1, 1]);
        assert_eq!(grouping.top_n_group_sizes_product(3), 1);
    }

    #[test]
    fn empty_universe_has_no_groups() {
        let grouping = Grouping::<u32>::new([]);

        assert!(grouping.is_empty());
        assert_eq!(grouping.group_count(), 0);
        assert!(grouping.groups().is_empty());
        assert_eq!(grouping.top_n_group_sizes_product(3), 1);
    }

    #[test]
    fn duplicate_items_collapse() {
        let grouping = Grouping::new([1, 2, 2, 3, 1]);

        assert_eq!(grouping.len(), 3);
        assert_eq!(grouping.group_count(), 3);
    }

    #[test]
    fn union_reports_merges_and_redundancy() -> Result<(), GroupingError> {
        let mut grouping = Grouping::new(0..4);

        assert_eq!(grouping.union(&0, &1)?, Merge::Joined { size: 2 });
        assert_eq!(grouping.union(&2, &1)?, Merge::Joined { size: 3 });
        assert_eq!(grouping.union(&0, &2)?, Merge::Redundant);
        assert_eq!(grouping.group_count(), 2);
        assert!(grouping.same_group(&0, &2)?);
        assert!(!grouping.same_group(&0, &3)?);
        Ok(())
    }

    #[test]
    fn group_of_lists_members() -> Result<(), GroupingError> {
        let mut grouping = Grouping::new(["x", "y", "z"]);
        grouping.union(&"z", &"x")?;

        let group = grouping.group_of(&"x")?;
        assert_eq!(group.members, vec![&"x", &"z"]);
        assert!(group.contains(&"z"));
        assert_eq!(group.id, grouping.group_id(&"z")?);

        let alone = grouping.group_of(&"y")?;
        assert_eq!(alone.len(), 1);
        Ok(())
    }

    #[test]
    fn unknown_items_are_rejected() {
        let mut grouping = Grouping::new([1, 2]);

        assert_eq!(grouping.union(&1, &7), Err(GroupingError::UnknownItem));
        assert_eq!(grouping.group_of(&9), Err(GroupingError::UnknownItem));
    }

    #[rstest]
    #[case(1, 5)]
    #[case(2, 10)]
    #[case(3, 20)]
    #[case(10, 20)]
    fn top_n_product(#[case] n: usize, #[case] expected: usize) -> Result<(), GroupingError> {
        // Groups of sizes 5, 2, 2, 1.
        let mut grouping = Grouping::new(0..10);
        for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 4), (5, 6), (7, 8)] {
            grouping.union(&a, &b)?;
        }

        assert_eq!(grouping.group_sizes(), vec![5, 2, 2, 1]);
        assert_eq!(grouping.top_n_group_sizes_product(n), expected);
        Ok(())
    }
}
