//! Building forests from flat parent-pointer records.
//!
//! [ForestBuilder::build] indexes the records by parent id once, selects roots, and then
//! descends from every root with an explicit stack. Nodes borrow the caller's records; a
//! [Forest] lives only as long as the slice it was built from.
//!
//! Root selection:
//! - With an explicit root parent id, the roots are the records whose parent id equals it.
//! - Without one, the roots are the records whose parent id is not the id of any record in
//!   the slice. Roots sharing the same missing parent are emitted together, in input order,
//!   at the position where that parent id is first seen.
//! - If that finds no root at all (every record points at another record), every record
//!   becomes an independent leaf root.
//!
//! Ids must be unique within the slice; a repeated id fails the build with
//! [AdminError::InvalidRecord]. The builder never re-sorts; sibling order is the input order.

use crate::{
    config::{TreeConfig, DEFAULT_MAX_DEPTH},
    error::AdminError,
    projection::Projection,
    record::TreeRecord,
};
use petgraph::{algo::tarjan_scc, graphmap::DiGraphMap};
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// A record placed in a forest, with its direct children in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<'a, R> {
    pub record: &'a R,
    pub children: Vec<Node<'a, R>>,
}

impl<'a, R> Node<'a, R> {
    pub fn leaf(record: &'a R) -> Self {
        Node {
            record,
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, this one included.
    pub fn subtree_len(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter());
        }
        count
    }

    pub fn project<P: Projection<R>>(&self, projection: &P) -> P::Output {
        let children = project_nodes(&self.children, projection);
        projection.project(self.record, children)
    }
}

/// Render a sibling sequence through `projection`, keeping order.
pub fn project_nodes<R, P: Projection<R>>(
    nodes: &[Node<'_, R>],
    projection: &P,
) -> Vec<P::Output> {
    nodes.iter().map(|node| node.project(projection)).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Forest<'a, R> {
    roots: Vec<Node<'a, R>>,
}

impl<'a, R> Default for Forest<'a, R> {
    fn default() -> Self {
        Forest { roots: Vec::new() }
    }
}

impl<'a, R> Forest<'a, R> {
    pub fn roots(&self) -> &[Node<'a, R>] {
        &self.roots
    }

    pub fn into_roots(self) -> Vec<Node<'a, R>> {
        self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.roots.iter().map(Node::subtree_len).sum()
    }

    pub fn project<P: Projection<R>>(&self, projection: &P) -> Vec<P::Output> {
        project_nodes(&self.roots, projection)
    }
}

/// Build a forest with the default depth cap. See [ForestBuilder::build].
pub fn build_forest<'a, R: TreeRecord>(
    records: &'a [R],
    root_parent: Option<&R::Id>,
) -> Result<Forest<'a, R>, AdminError> {
    ForestBuilder::default().build(records, root_parent)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForestBuilder {
    max_depth: usize,
}

impl Default for ForestBuilder {
    fn default() -> Self {
        ForestBuilder {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

type ChildIndex<'a, I> = BTreeMap<&'a I, Vec<usize>>;

impl ForestBuilder {
    pub fn new(max_depth: usize) -> Self {
        ForestBuilder { max_depth }
    }

    pub fn from_config(config: &TreeConfig) -> Self {
        ForestBuilder::new(config.max_depth)
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn build<'a, R: TreeRecord>(
        &self,
        records: &'a [R],
        root_parent: Option<&R::Id>,
    ) -> Result<Forest<'a, R>, AdminError> {
        let mut ids: BTreeSet<&R::Id> = BTreeSet::new();
        for record in records {
            if !ids.insert(record.id()) {
                return Err(AdminError::InvalidRecord(format!(
                    "duplicate record id {}",
                    record.id()
                )));
            }
        }
        let mut children: ChildIndex<'a, R::Id> = BTreeMap::new();
        for (idx, record) in records.iter().enumerate() {
            children.entry(record.parent_id()).or_default().push(idx);
        }

        let root_indices: Vec<usize> = match root_parent {
            Some(root) => children_of(&children, root).to_vec(),
            None => {
                let mut seen_parents: BTreeSet<&R::Id> = BTreeSet::new();
                let mut roots = Vec::new();
                for record in records {
                    let parent = record.parent_id();
                    if !ids.contains(parent) && seen_parents.insert(parent) {
                        roots.extend_from_slice(children_of(&children, parent));
                    }
                }
                roots
            }
        };

        if root_indices.is_empty() {
            if root_parent.is_none() && !records.is_empty() {
                tracing::warn!(
                    "No root among {} records, every record becomes an independent root",
                    records.len()
                );
                return Ok(Forest {
                    roots: records.iter().map(Node::leaf).collect(),
                });
            }
            tracing::debug!("No records under root parent {:?}", root_parent);
            return Ok(Forest::default());
        }

        let mut visited = vec![false; records.len()];
        let mut roots = Vec::with_capacity(root_indices.len());
        for root in root_indices {
            roots.push(self.grow(records, &children, root, &mut visited)?);
        }

        if root_parent.is_none() && visited.iter().any(|placed| !placed) {
            return Err(AdminError::Cycle(cycle_members(records, &visited)));
        }

        let forest = Forest { roots };
        tracing::debug!(
            "Built forest of {} roots, {} nodes from {} records",
            forest.roots.len(),
            forest.node_count(),
            records.len()
        );
        Ok(forest)
    }

    /// Depth-first descent from `root` without recursion. Ids on the current path are kept in
    /// `on_path`; meeting one of them again means the parent chain loops.
    fn grow<'a, R: TreeRecord>(
        &self,
        records: &'a [R],
        children: &ChildIndex<'a, R::Id>,
        root: usize,
        visited: &mut [bool],
    ) -> Result<Node<'a, R>, AdminError> {
        let mut on_path: BTreeSet<&R::Id> = BTreeSet::new();
        on_path.insert(records[root].id());
        visited[root] = true;
        let mut stack = vec![(
            Node::leaf(&records[root]),
            children_of(children, records[root].id()).iter(),
        )];

        loop {
            let next = stack
                .last_mut()
                .and_then(|(_, pending)| pending.next().copied());
            match next {
                Some(child) => {
                    let record = &records[child];
                    if !on_path.insert(record.id()) {
                        return Err(AdminError::Cycle(vec![record.id().to_string()]));
                    }
                    if stack.len() >= self.max_depth {
                        return Err(AdminError::DepthExceeded {
                            id: record.id().to_string(),
                            limit: self.max_depth,
                        });
                    }
                    visited[child] = true;
                    stack.push((
                        Node::leaf(record),
                        children_of(children, record.id()).iter(),
                    ));
                }
                None => {
                    let Some((node, _)) = stack.pop() else {
                        return Err(AdminError::Custom(
                            "forest descent stack underflow".to_string(),
                        ));
                    };
                    on_path.remove(node.record.id());
                    match stack.last_mut() {
                        Some((parent, _)) => parent.children.push(node),
                        None => return Ok(node),
                    }
                }
            }
        }
    }
}

/// `ids` followed by every record below them, each id once. Requested ids are kept even when
/// no record carries them; descendants are listed breadth-first in input order.
pub fn with_descendants<R: TreeRecord>(records: &[R], ids: &[R::Id]) -> Vec<R::Id> {
    let mut children: ChildIndex<'_, R::Id> = BTreeMap::new();
    for (idx, record) in records.iter().enumerate() {
        children.entry(record.parent_id()).or_default().push(idx);
    }

    let mut seen: BTreeSet<&R::Id> = BTreeSet::new();
    let mut out: Vec<R::Id> = Vec::new();
    let mut queue: VecDeque<&R::Id> = VecDeque::new();
    for id in ids {
        if seen.insert(id) {
            out.push(id.clone());
            queue.push_back(id);
        }
    }
    while let Some(parent) = queue.pop_front() {
        for &child in children_of(&children, parent) {
            let id = records[child].id();
            if seen.insert(id) {
                out.push(id.clone());
                queue.push_back(id);
            }
        }
    }
    out
}

fn children_of<'i, I: Ord>(index: &'i ChildIndex<'_, I>, parent: &I) -> &'i [usize] {
    index.get(parent).map(Vec::as_slice).unwrap_or(&[])
}

/// Ids of the unplaced records that sit on a parent cycle. Unplaced records hanging below a
/// cycle are left out; if no cycle is found the unplaced ids are returned as they are.
fn cycle_members<R: TreeRecord>(records: &[R], visited: &[bool]) -> Vec<String> {
    let mut by_id: BTreeMap<&R::Id, Vec<usize>> = BTreeMap::new();
    for (idx, record) in records.iter().enumerate() {
        if !visited[idx] {
            by_id.entry(record.id()).or_default().push(idx);
        }
    }

    // child -> parent edges between unplaced records
    let mut graph: DiGraphMap<usize, ()> = DiGraphMap::new();
    for (idx, record) in records.iter().enumerate() {
        if visited[idx] {
            continue;
        }
        graph.add_node(idx);
        for &parent in by_id.get(record.parent_id()).into_iter().flatten() {
            graph.add_edge(idx, parent, ());
        }
    }

    let mut members: Vec<usize> = tarjan_scc(&graph)
        .into_iter()
        .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
        .flatten()
        .collect();
    if members.is_empty() {
        members = (0..records.len()).filter(|idx| !visited[*idx]).collect();
    }
    members.sort_unstable();
    members
        .into_iter()
        .map(|idx| records[idx].id().to_string())
        .collect()
}
