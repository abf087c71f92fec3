//! Parent-linked trace storage.
//!
//! Every state admitted to the frontier gets a node in a [`TraceArena`].
//! Nodes point back at the node they were expanded from, so a solution path
//! is recovered by walking parents up to the root. The arena lives for one
//! search and is dropped with it.

/// Handle to a node inside a [`TraceArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct TraceNode<S> {
    state: S,
    parent: Option<NodeId>,
}

/// Owns all trace nodes created during one search.
#[derive(Debug, Clone)]
pub struct TraceArena<S> {
    nodes: Vec<TraceNode<S>>,
}

impl<S> Default for TraceArena<S> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<S> TraceArena<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a state. `parent` must be a node of this arena, which always
    /// exists before its children.
    pub fn insert(&mut self, state: S, parent: Option<NodeId>) -> NodeId {
        debug_assert!(parent.map_or(true, |p| p.0 < self.nodes.len()));
        let id = NodeId(self.nodes.len());
        self.nodes.push(TraceNode { state, parent });
        id
    }

    pub fn state(&self, id: NodeId) -> &S {
        &self.nodes[id.0].state
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Number of transitions between the root and `id`.
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            depth += 1;
            current = parent;
        }
        depth
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<S: Clone> TraceArena<S> {
    /// Rebuild the path from the root to `id`, root first.
    pub fn trace(&self, id: NodeId) -> Vec<S> {
        let mut path = Vec::with_capacity(self.depth(id) + 1);
        let mut current = Some(id);
        while let Some(node) = current {
            path.push(self.state(node).clone());
            current = self.parent(node);
        }
        path.reverse();
        path
    }
}
