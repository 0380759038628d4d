// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tree facade: construction, insertion, bulk loading, queries, and
//! deletion against a single root.

use alloc::vec::Vec;
use core::mem;

use log::{debug, trace};

use crate::bounds::BBox;
use crate::bulk;
use crate::error::Error;
use crate::geometry::Geometry;
use crate::node::{Children, Limits, Node, calc_bbox};
use crate::split::split_node;

/// Construction configuration.
///
/// `min_entries` is always derived as `max(2, ceil(0.4 * max_entries))`,
/// never configured directly.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Maximum children per node; clamped to at least 4. Defaults to 9.
    pub max_entries: usize,
    /// Number of axes; clamped to at least 2. Defaults to 2 and must match
    /// the geometry accessor.
    pub dimension: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: 9,
            dimension: 2,
        }
    }
}

/// A balanced, bulk-loadable spatial index over axis-aligned bounding boxes.
///
/// Single-threaded and synchronous: every operation mutates the tree in
/// place through the one root and runs to completion. Callers needing
/// concurrent access must serialize externally.
pub struct RTree<T, G: Geometry<T>> {
    root: Node<T>,
    geom: G,
    limits: Limits,
    len: usize,
}

/// What descends during an insertion: a single item bound for a leaf, or an
/// already-built subtree attached one level above its own height.
enum Entry<T> {
    Item(T),
    Subtree(Node<T>),
}

impl<T> Entry<T> {
    fn target_height(&self) -> usize {
        match self {
            Self::Item(_) => 1,
            Self::Subtree(node) => node.height + 1,
        }
    }
}

impl<T, G: Geometry<T>> RTree<T, G> {
    /// Create an empty tree with default configuration, taking the dimension
    /// from the accessor.
    ///
    /// # Errors
    ///
    /// Fails if the accessor reports fewer than two axes.
    pub fn new(geom: G) -> Result<Self, Error> {
        let dimension = geom.dimension();
        Self::with_config(
            Config {
                dimension,
                ..Config::default()
            },
            geom,
        )
    }

    /// Create an empty tree with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Fails if the accessor reports fewer than two axes, or if the clamped
    /// configured dimension disagrees with the accessor's.
    pub fn with_config(config: Config, geom: G) -> Result<Self, Error> {
        let accessor_dim = geom.dimension();
        if accessor_dim < 2 {
            return Err(Error::InvalidDimension(accessor_dim));
        }
        let dimension = config.dimension.max(2);
        if dimension != accessor_dim {
            return Err(Error::DimensionMismatch {
                config: dimension,
                accessor: accessor_dim,
            });
        }
        let max_entries = config.max_entries.max(4);
        let min_entries = 2.max((2 * max_entries).div_ceil(5));
        Ok(Self {
            root: Node::new_leaf(dimension),
            geom,
            limits: Limits {
                max_entries,
                min_entries,
                dimension,
            },
            len: 0,
        })
    }

    /// Number of items in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the tree; an empty tree is a single leaf of height 1.
    pub fn height(&self) -> usize {
        self.root.height
    }

    /// Number of axes.
    pub fn dimension(&self) -> usize {
        self.limits.dimension
    }

    /// Bounding box of everything in the tree (the root's box).
    ///
    /// For an empty tree this is the empty box, which intersects nothing.
    pub fn envelope(&self) -> &BBox {
        &self.root.bbox
    }

    /// Drop all items, resetting the root to a fresh empty leaf.
    pub fn clear(&mut self) {
        self.root = Node::new_leaf(self.limits.dimension);
        self.len = 0;
    }

    /// Insert one item, splitting overfull nodes on the way back up and
    /// growing the root if the split propagates that far.
    pub fn insert(&mut self, item: T) {
        let bbox = self.geom.bbox(&item);
        let Self {
            root, geom, limits, ..
        } = self;
        if let Some(sibling) = insert_entry(geom, *limits, root, Entry::Item(item), &bbox) {
            grow_root(root, sibling, limits.dimension);
        }
        self.len += 1;
    }

    /// Bulk-load a batch of items.
    ///
    /// Batches smaller than `min_entries` fall back to one-by-one insertion;
    /// an empty batch is a no-op. Larger batches are packed into a balanced
    /// subtree with sort-tile-recursive partitioning and merged into the
    /// existing tree: adopted outright if the tree is empty, joined under a
    /// new root when heights are equal, and otherwise inserted as a subtree
    /// at the level matching the height difference.
    pub fn load(&mut self, items: Vec<T>) {
        if items.is_empty() {
            return;
        }
        if items.len() < self.limits.min_entries {
            for item in items {
                self.insert(item);
            }
            return;
        }

        let count = items.len();
        self.len += count;
        let Self {
            root, geom, limits, ..
        } = self;
        let mut node = bulk::build_tree(geom, *limits, items);
        debug!(
            "bulk-loaded {count} items into a subtree of height {}",
            node.height
        );

        if root.child_count() == 0 {
            trace!("adopting bulk-built subtree as the root");
            *root = node;
        } else if root.height == node.height {
            grow_root(root, node, limits.dimension);
        } else {
            if root.height < node.height {
                // The taller tree stays put and receives the shorter one.
                mem::swap(root, &mut node);
            }
            let bbox = node.bbox.clone();
            if let Some(sibling) = insert_entry(geom, *limits, root, Entry::Subtree(node), &bbox) {
                grow_root(root, sibling, limits.dimension);
            }
        }
    }

    /// All items whose box intersects `bbox`.
    ///
    /// Iterative depth-first traversal over an explicit stack; a child fully
    /// contained by the query is emitted wholesale with no further box
    /// tests.
    pub fn search(&self, bbox: &BBox) -> Vec<&T> {
        let mut result = Vec::new();
        if !bbox.intersects(&self.root.bbox) {
            return result;
        }
        let mut stack: Vec<&Node<T>> = Vec::new();
        let mut node = &self.root;
        loop {
            match &node.children {
                Children::Items(items) => {
                    for item in items {
                        if bbox.intersects(&self.geom.bbox(item)) {
                            result.push(item);
                        }
                    }
                }
                Children::Nodes(nodes) => {
                    for child in nodes {
                        if bbox.intersects(&child.bbox) {
                            if bbox.contains(&child.bbox) {
                                collect_into(child, &mut result);
                            } else {
                                stack.push(child);
                            }
                        }
                    }
                }
            }
            match stack.pop() {
                Some(next) => node = next,
                None => break,
            }
        }
        result
    }

    /// Whether anything in the tree intersects `bbox`.
    ///
    /// Same traversal as [`search`](Self::search) but short-circuits on the
    /// first hit; a disjoint root answers without visiting any children.
    pub fn collides(&self, bbox: &BBox) -> bool {
        if !bbox.intersects(&self.root.bbox) {
            return false;
        }
        let mut stack: Vec<&Node<T>> = Vec::new();
        let mut node = &self.root;
        loop {
            match &node.children {
                Children::Items(items) => {
                    for item in items {
                        if bbox.intersects(&self.geom.bbox(item)) {
                            return true;
                        }
                    }
                }
                Children::Nodes(nodes) => {
                    for child in nodes {
                        if bbox.intersects(&child.bbox) {
                            if bbox.contains(&child.bbox) {
                                return true;
                            }
                            stack.push(child);
                        }
                    }
                }
            }
            match stack.pop() {
                Some(next) => node = next,
                None => return false,
            }
        }
    }

    /// Every item in the tree, in traversal order.
    pub fn all(&self) -> Vec<&T> {
        let mut result = Vec::new();
        collect_into(&self.root, &mut result);
        result
    }

    /// Remove the first item equal to `item`. Returns whether one was found.
    ///
    /// The descent only enters an internal subtree whose box fully contains
    /// the item's derived box. That pruning assumes stored boxes are exact
    /// (which the tree maintains); on an imported tree with drifted boxes a
    /// present item may be missed, in which case the traversal completes
    /// without modifying anything.
    pub fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        let target = self.geom.bbox(item);
        let mut stack: Vec<Vec<usize>> = alloc::vec![Vec::new()];
        while let Some(path) = stack.pop() {
            let step = {
                let node = node_at(&self.root, &path);
                match &node.children {
                    Children::Items(items) => match items.iter().position(|c| c == item) {
                        Some(index) => Step::Found(index),
                        None => Step::Skip,
                    },
                    Children::Nodes(nodes) => {
                        if node.bbox.contains(&target) {
                            Step::Descend(nodes.len())
                        } else {
                            Step::Skip
                        }
                    }
                }
            };
            match step {
                Step::Found(index) => {
                    let leaf = node_at_mut(&mut self.root, &path);
                    if let Children::Items(items) = &mut leaf.children {
                        items.remove(index);
                    }
                    self.condense(&path);
                    self.len -= 1;
                    return true;
                }
                Step::Descend(count) => {
                    for i in 0..count {
                        let mut child_path = path.clone();
                        child_path.push(i);
                        stack.push(child_path);
                    }
                }
                Step::Skip => {}
            }
        }
        false
    }

    /// Deep copy of the raw node tree.
    pub fn export(&self) -> Node<T>
    where
        T: Clone,
    {
        self.root.clone()
    }

    /// Adopt `root` as the whole tree, without structural validation.
    ///
    /// The caller must supply a well-formed tree (for example one produced
    /// by [`export`](Self::export)); behavior of later queries and mutations
    /// against a malformed one is unspecified.
    pub fn import(&mut self, root: Node<T>) {
        self.len = count_items(&root);
        self.root = root;
    }

    /// Walking leaf-to-root, drop nodes emptied by a removal and recompute
    /// the exact boxes of the rest.
    fn condense(&mut self, path: &[usize]) {
        let Self {
            root, geom, limits, ..
        } = self;
        for depth in (0..=path.len()).rev() {
            let prefix = &path[..depth];
            if node_at(root, prefix).child_count() == 0 {
                if depth == 0 {
                    trace!("last item removed; resetting to an empty leaf");
                    *root = Node::new_leaf(limits.dimension);
                } else {
                    let parent = node_at_mut(root, &path[..depth - 1]);
                    if let Children::Nodes(nodes) = &mut parent.children {
                        nodes.remove(path[depth - 1]);
                    }
                    trace!("pruned an emptied node at depth {depth}");
                }
            } else {
                let node = node_at_mut(root, prefix);
                calc_bbox(geom, node, limits.dimension);
            }
        }
    }
}

impl<T, G: Geometry<T>> core::fmt::Debug for RTree<T, G> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RTree")
            .field("len", &self.len)
            .field("height", &self.root.height)
            .field("dimension", &self.limits.dimension)
            .field("max_entries", &self.limits.max_entries)
            .field("min_entries", &self.limits.min_entries)
            .finish_non_exhaustive()
    }
}

impl Default for RTree<BBox, crate::geometry::RectGeometry> {
    /// A two-dimensional tree over plain rectangles with default
    /// configuration.
    fn default() -> Self {
        Self {
            root: Node::new_leaf(2),
            geom: crate::geometry::RectGeometry::new(2),
            limits: Limits {
                max_entries: 9,
                min_entries: 4,
                dimension: 2,
            },
            len: 0,
        }
    }
}

/// Outcome of visiting one node during the removal walk.
enum Step {
    Found(usize),
    Descend(usize),
    Skip,
}

/// Descend to the attach level for `entry`, choosing at each step the child
/// needing least area enlargement (ties broken by smaller area), then split
/// back up while nodes are overfull. Returns the root's new sibling if the
/// split propagated all the way.
///
/// Every node on the descent has its box extended by the entry's box;
/// nodes that split recompute both halves from scratch instead.
fn insert_entry<T, G: Geometry<T>>(
    geom: &G,
    limits: Limits,
    node: &mut Node<T>,
    entry: Entry<T>,
    bbox: &BBox,
) -> Option<Node<T>> {
    node.bbox.extend(bbox);
    let target = entry.target_height();
    let overflowed = match &mut node.children {
        Children::Items(items) => {
            match entry {
                Entry::Item(item) => items.push(item),
                Entry::Subtree(_) => debug_assert!(false, "subtree attach level is above the leaves"),
            }
            items.len() > limits.max_entries
        }
        Children::Nodes(nodes) => {
            if node.height == target {
                match entry {
                    Entry::Subtree(subtree) => nodes.push(subtree),
                    Entry::Item(_) => debug_assert!(false, "items attach at the leaf level"),
                }
                nodes.len() > limits.max_entries
            } else {
                let chosen = choose_subtree(nodes, bbox);
                match insert_entry(geom, limits, &mut nodes[chosen], entry, bbox) {
                    Some(sibling) => {
                        nodes.push(sibling);
                        nodes.len() > limits.max_entries
                    }
                    None => false,
                }
            }
        }
    };
    overflowed.then(|| split_node(geom, limits, node))
}

/// Index of the child whose box needs least enlargement to cover `bbox`.
fn choose_subtree<T>(nodes: &[Node<T>], bbox: &BBox) -> usize {
    let mut best = 0;
    let mut min_enlargement = f64::INFINITY;
    let mut min_area = f64::INFINITY;
    for (i, child) in nodes.iter().enumerate() {
        let area = child.bbox.area();
        let enlargement = child.bbox.enlargement(bbox);
        if enlargement < min_enlargement {
            min_enlargement = enlargement;
            min_area = if area < min_area { area } else { min_area };
            best = i;
        } else if enlargement == min_enlargement && area < min_area {
            min_area = area;
            best = i;
        }
    }
    best
}

/// Replace the root with a new one holding the old root and its sibling.
fn grow_root<T>(root: &mut Node<T>, sibling: Node<T>, dimension: usize) {
    let old = mem::replace(root, Node::new_leaf(dimension));
    let height = old.height + 1;
    let mut bbox = old.bbox.clone();
    bbox.extend(&sibling.bbox);
    *root = Node {
        children: Children::Nodes(alloc::vec![old, sibling]),
        height,
        bbox,
    };
    trace!("root split; tree height is now {height}");
}

/// Emit every item under `node` with no box tests, over an explicit stack.
fn collect_into<'a, T>(node: &'a Node<T>, out: &mut Vec<&'a T>) {
    let mut stack: Vec<&Node<T>> = Vec::new();
    let mut node = node;
    loop {
        match &node.children {
            Children::Items(items) => out.extend(items.iter()),
            Children::Nodes(nodes) => stack.extend(nodes.iter()),
        }
        match stack.pop() {
            Some(next) => node = next,
            None => break,
        }
    }
}

fn count_items<T>(node: &Node<T>) -> usize {
    let mut count = 0;
    let mut stack = alloc::vec![node];
    while let Some(node) = stack.pop() {
        match &node.children {
            Children::Items(items) => count += items.len(),
            Children::Nodes(nodes) => stack.extend(nodes.iter()),
        }
    }
    count
}

fn node_at<'a, T>(root: &'a Node<T>, path: &[usize]) -> &'a Node<T> {
    let mut node = root;
    for &i in path {
        match &node.children {
            Children::Nodes(nodes) => node = &nodes[i],
            Children::Items(_) => {
                debug_assert!(false, "path descends past a leaf");
                break;
            }
        }
    }
    node
}

fn node_at_mut<'a, T>(root: &'a mut Node<T>, path: &[usize]) -> &'a mut Node<T> {
    let mut node = root;
    for &i in path {
        if matches!(node.children, Children::Items(_)) {
            debug_assert!(false, "path descends past a leaf");
            break;
        }
        match &mut node.children {
            Children::Nodes(nodes) => node = &mut nodes[i],
            Children::Items(_) => unreachable!("leaf case handled above"),
        }
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::RectGeometry;
    use crate::testutil::{Rng, check_structure, random_rect};
    use alloc::string::String;
    use alloc::vec;

    fn rect(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> BBox {
        BBox::from_corners(&[min_x, min_y], &[max_x, max_y])
    }

    fn rect_tree() -> RTree<BBox, RectGeometry> {
        RTree::default()
    }

    fn multiset(items: Vec<&BBox>) -> Vec<String> {
        let mut keys: Vec<String> = items
            .into_iter()
            .map(|b| alloc::format!("{:?}", b.coords()))
            .collect();
        keys.sort();
        keys
    }

    #[test]
    fn config_is_clamped_and_min_entries_derived() {
        let tree = RTree::with_config(
            Config {
                max_entries: 0,
                dimension: 0,
            },
            RectGeometry::new(2),
        )
        .unwrap();
        assert_eq!(tree.limits.max_entries, 4);
        assert_eq!(tree.limits.min_entries, 2);
        assert_eq!(tree.dimension(), 2);

        let tree = RTree::new(RectGeometry::new(2)).unwrap();
        assert_eq!(tree.limits.max_entries, 9);
        assert_eq!(tree.limits.min_entries, 4);

        let tree = RTree::with_config(
            Config {
                max_entries: 16,
                dimension: 3,
            },
            RectGeometry::new(3),
        )
        .unwrap();
        assert_eq!(tree.limits.min_entries, 7);
    }

    #[test]
    fn misconfigured_accessor_is_a_hard_failure() {
        let too_flat = RTree::<BBox, _>::new(RectGeometry::new(1));
        assert_eq!(too_flat.err(), Some(Error::InvalidDimension(1)));

        let mismatched = RTree::<BBox, _>::with_config(
            Config {
                max_entries: 9,
                dimension: 2,
            },
            RectGeometry::new(3),
        );
        assert_eq!(
            mismatched.err(),
            Some(Error::DimensionMismatch {
                config: 2,
                accessor: 3
            })
        );
    }

    #[test]
    fn insert_then_search_finds_the_item() {
        let mut tree = rect_tree();
        let item = rect(10.0, 10.0, 12.0, 12.0);
        tree.insert(item.clone());
        let hits = tree.search(&item);
        assert_eq!(hits, vec![&item]);
        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());
    }

    #[test]
    fn incremental_inserts_keep_the_structure_valid() {
        let mut tree = rect_tree();
        let mut rng = Rng::new(5);
        for _ in 0..200 {
            tree.insert(random_rect(&mut rng, 400.0, 8.0));
        }
        assert_eq!(tree.len(), 200);
        assert!(tree.height() > 1);
        let exported = tree.export();
        check_structure(&tree.geom, &exported, tree.limits, true);
    }

    #[test]
    fn search_respects_the_query_box() {
        let mut tree = rect_tree();
        for x in 0..10 {
            for y in 0..10 {
                let (x, y) = (f64::from(x) * 10.0, f64::from(y) * 10.0);
                tree.insert(rect(x, y, x + 5.0, y + 5.0));
            }
        }
        // A window over the lower-left 2x2 block of cells.
        let hits = tree.search(&rect(0.0, 0.0, 15.0, 15.0));
        assert_eq!(hits.len(), 4);
        assert!(tree.search(&rect(200.0, 200.0, 300.0, 300.0)).is_empty());
        assert_eq!(tree.search(&rect(-10.0, -10.0, 1000.0, 1000.0)).len(), 100);
    }

    #[test]
    fn collides_short_circuits() {
        let mut tree = rect_tree();
        for i in 0..50 {
            let base = f64::from(i) * 4.0;
            tree.insert(rect(base, 0.0, base + 2.0, 2.0));
        }
        assert!(tree.collides(&rect(1.0, 1.0, 3.0, 3.0)));
        assert!(!tree.collides(&rect(0.0, 50.0, 500.0, 60.0)));
        assert!(!rect_tree().collides(&rect(0.0, 0.0, 1.0, 1.0)));
    }

    #[test]
    fn load_empty_batch_is_a_no_op() {
        let mut tree = rect_tree();
        tree.load(Vec::new());
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 1);
    }

    #[test]
    fn tiny_batch_falls_back_to_insertion() {
        let mut tree = rect_tree();
        tree.load(vec![rect(0.0, 0.0, 1.0, 1.0), rect(5.0, 5.0, 6.0, 6.0)]);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.height(), 1, "two items stay in the root leaf");
    }

    #[test]
    fn bulk_load_is_complete() {
        let mut tree = rect_tree();
        let mut rng = Rng::new(77);
        let items: Vec<BBox> = (0..1000).map(|_| random_rect(&mut rng, 1000.0, 10.0)).collect();
        tree.load(items);
        assert_eq!(tree.len(), 1000);
        let everything = tree.search(&rect(-20.0, -20.0, 1100.0, 1100.0));
        assert_eq!(everything.len(), 1000);
        assert_eq!(tree.all().len(), 1000);
    }

    #[test]
    fn loading_into_a_populated_tree_merges() {
        let mut rng = Rng::new(3);
        // Taller existing tree receives a shorter bulk batch.
        let mut tree = rect_tree();
        let first: Vec<BBox> = (0..500).map(|_| random_rect(&mut rng, 300.0, 6.0)).collect();
        tree.load(first);
        let tall = tree.height();
        let second: Vec<BBox> = (0..20).map(|_| random_rect(&mut rng, 300.0, 6.0)).collect();
        tree.load(second);
        assert_eq!(tree.len(), 520);
        assert!(tree.height() >= tall);
        assert_eq!(tree.all().len(), 520);
        let exported = tree.export();
        check_structure(&tree.geom, &exported, tree.limits, false);

        // Equal heights join under a fresh root.
        let mut a = rect_tree();
        let batch: Vec<BBox> = (0..40).map(|_| random_rect(&mut rng, 100.0, 4.0)).collect();
        a.load(batch.clone());
        let h = a.height();
        a.load(batch);
        assert_eq!(a.len(), 80);
        assert_eq!(a.height(), h + 1, "equal-height merge grows a new root");
        let exported = a.export();
        check_structure(&a.geom, &exported, a.limits, false);

        // A bulk batch taller than the existing tree swaps roles.
        let mut b = rect_tree();
        b.insert(rect(0.0, 0.0, 1.0, 1.0));
        let big: Vec<BBox> = (0..300).map(|_| random_rect(&mut rng, 200.0, 5.0)).collect();
        b.load(big);
        assert_eq!(b.len(), 301);
        assert_eq!(b.all().len(), 301);
        let exported = b.export();
        check_structure(&b.geom, &exported, b.limits, false);
    }

    #[test]
    fn remove_deletes_exactly_one_item() {
        let mut tree = rect_tree();
        let mut rng = Rng::new(11);
        let items: Vec<BBox> = (0..120).map(|_| random_rect(&mut rng, 200.0, 4.0)).collect();
        tree.load(items.clone());

        let victim = items[60].clone();
        assert!(tree.remove(&victim));
        assert_eq!(tree.len(), 119);
        assert!(
            !tree.search(&victim).contains(&&victim),
            "removed item no longer matches its own box"
        );
        let exported = tree.export();
        check_structure(&tree.geom, &exported, tree.limits, false);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut tree = rect_tree();
        let item = rect(1.0, 1.0, 2.0, 2.0);
        tree.insert(item.clone());
        tree.insert(rect(5.0, 5.0, 6.0, 6.0));
        assert!(tree.remove(&item));
        let snapshot = tree.export();
        assert!(!tree.remove(&item), "second removal finds nothing");
        assert_eq!(tree.export(), snapshot, "second removal changes nothing");
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn removing_an_absent_item_leaves_the_tree_untouched() {
        let mut tree = rect_tree();
        for i in 0..30 {
            let base = f64::from(i) * 2.0;
            tree.insert(rect(base, base, base + 1.0, base + 1.0));
        }
        let before = tree.export();
        assert!(!tree.remove(&rect(500.0, 500.0, 501.0, 501.0)));
        assert_eq!(tree.export(), before);
        assert_eq!(tree.len(), 30);
    }

    #[test]
    fn removing_everything_resets_the_root() {
        let mut tree = rect_tree();
        let items: Vec<BBox> = (0..40)
            .map(|i| {
                let base = f64::from(i) * 3.0;
                rect(base, 0.0, base + 2.0, 2.0)
            })
            .collect();
        tree.load(items.clone());
        for item in &items {
            assert!(tree.remove(item));
        }
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 1);
        assert_eq!(*tree.envelope(), BBox::empty(2));

        // The emptied tree keeps working.
        tree.insert(rect(0.0, 0.0, 1.0, 1.0));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.all().len(), 1);
    }

    #[test]
    fn clear_resets_everything() {
        let mut tree = rect_tree();
        tree.insert(rect(0.0, 0.0, 1.0, 1.0));
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 1);
        assert!(tree.all().is_empty());
    }

    #[test]
    fn export_import_round_trips_the_item_multiset() {
        let mut tree = rect_tree();
        let mut rng = Rng::new(21);
        let items: Vec<BBox> = (0..250).map(|_| random_rect(&mut rng, 600.0, 9.0)).collect();
        tree.load(items);
        let before = multiset(tree.all());

        let raw = tree.export();
        let mut restored = rect_tree();
        restored.import(raw);
        assert_eq!(restored.len(), 250, "import recounts the items");
        assert_eq!(multiset(restored.all()), before);

        // The imported tree stays queryable and mutable.
        let hits = restored.search(&rect(-20.0, -20.0, 700.0, 700.0));
        assert_eq!(hits.len(), 250);
        restored.insert(rect(0.0, 0.0, 1.0, 1.0));
        assert_eq!(restored.len(), 251);
    }
}
