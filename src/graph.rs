//! Graph model: nodes, mutable color state, and derived partition metrics.
//!
//! The graph is built once, before the first round, and its topology never
//! changes afterwards. The only mutation the rest of the crate performs is
//! [`Graph::swap_colors`], a pairwise color exchange, so the multiset of
//! colors across all nodes is invariant for the lifetime of a run.

use std::collections::HashMap;

/// Node identifier.
pub type NodeId = u32;

/// Partition label assigned to a node.
pub type Color = u32;

/// A single graph node: immutable adjacency, mutable color.
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    color: Color,
    init_color: Color,
    neighbors: Vec<NodeId>,
}

impl Node {
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Current partition label.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The label assigned at construction. Used only for migration counting.
    pub fn init_color(&self) -> Color {
        self.init_color
    }

    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }
}

/// The shared in-memory graph all components read and (via swaps) write.
///
/// Keeps an id list in construction order so that round iteration and
/// uniform sampling are deterministic regardless of hash-map layout.
///
/// # Examples
///
/// ```
/// use jabeja::graph::Graph;
///
/// // 0 - 1 - 2 path, two partitions
/// let graph = Graph::from_nodes([
///     (0, 0, vec![1]),
///     (1, 0, vec![0, 2]),
///     (2, 1, vec![1]),
/// ])
/// .unwrap();
///
/// assert_eq!(graph.len(), 3);
/// assert_eq!(graph.edge_cut(), 1);
/// assert_eq!(graph.migrations(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: HashMap<NodeId, Node>,
    ids: Vec<NodeId>,
}

impl Graph {
    /// Builds a graph from `(id, initial color, neighbor ids)` entries.
    ///
    /// Fails on duplicate ids and on neighbor ids with no corresponding
    /// node. A neighbor inconsistency is fatal here rather than mid-run.
    pub fn from_nodes(
        entries: impl IntoIterator<Item = (NodeId, Color, Vec<NodeId>)>,
    ) -> Result<Self, String> {
        let mut nodes = HashMap::new();
        let mut ids = Vec::new();

        for (id, color, neighbors) in entries {
            let node = Node {
                id,
                color,
                init_color: color,
                neighbors,
            };
            if nodes.insert(id, node).is_some() {
                return Err(format!("duplicate node id {id}"));
            }
            ids.push(id);
        }

        for node in nodes.values() {
            for &neighbor in &node.neighbors {
                if !nodes.contains_key(&neighbor) {
                    return Err(format!(
                        "node {} lists unknown neighbor {neighbor}",
                        node.id
                    ));
                }
            }
        }

        Ok(Self { nodes, ids })
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// All node ids in construction order. Drives round iteration and
    /// uniform sampling.
    pub fn node_ids(&self) -> &[NodeId] {
        &self.ids
    }

    pub fn node(&self, id: NodeId) -> &Node {
        // Ids handed out by this graph are validated at construction.
        &self.nodes[&id]
    }

    pub fn color(&self, id: NodeId) -> Color {
        self.node(id).color
    }

    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.node(id).neighbors()
    }

    /// Number of `id`'s neighbors currently holding `color`.
    pub fn degree(&self, id: NodeId, color: Color) -> usize {
        self.node(id)
            .neighbors
            .iter()
            .filter(|&&n| self.color(n) == color)
            .count()
    }

    /// Exchanges the colors of two distinct nodes.
    ///
    /// This is the only color mutation in the crate; both updates happen
    /// within this call, so no intermediate single-sided state is ever
    /// observable.
    pub fn swap_colors(&mut self, p: NodeId, q: NodeId) {
        debug_assert_ne!(p, q, "swap requires two distinct nodes");
        let color_p = self.color(p);
        let color_q = self.color(q);
        if let Some(node) = self.nodes.get_mut(&p) {
            node.color = color_q;
        }
        if let Some(node) = self.nodes.get_mut(&q) {
            node.color = color_p;
        }
    }

    /// Number of undirected edges (adjacency entries / 2).
    pub fn total_edges(&self) -> usize {
        self.ids.iter().map(|&id| self.neighbors(id).len()).sum::<usize>() / 2
    }

    /// Number of edges whose endpoints hold different colors.
    ///
    /// Recomputed from scratch by a full scan; each undirected edge appears
    /// in both endpoints' adjacency lists, hence the division by two.
    pub fn edge_cut(&self) -> usize {
        let cross: usize = self
            .ids
            .iter()
            .map(|&id| {
                let color = self.color(id);
                self.neighbors(id)
                    .iter()
                    .filter(|&&n| self.color(n) != color)
                    .count()
            })
            .sum();
        cross / 2
    }

    /// Number of nodes whose current color differs from their initial one.
    ///
    /// Always a current-vs-initial comparison, never a cumulative log.
    pub fn migrations(&self) -> usize {
        self.ids
            .iter()
            .filter(|&&id| {
                let node = self.node(id);
                node.color != node.init_color
            })
            .count()
    }
}
