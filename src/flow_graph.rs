//! Flow graph built from allocation breakdown trees
//!
//! Flattens a rooted weighted tree (root → intermediaries → leaf
//! recipients) into the parallel `nodes`/`links` collections a
//! Sankey-style renderer consumes. Node indices are assigned in
//! pre-order (root first, then each child subtree, left to right);
//! `nodes()` and `links()` agree on that assignment for the same tree,
//! so links reference nodes purely by position.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Default metadata payload: a plain JSON object
pub type Meta = Map<String, Value>;

/// A node of the allocation breakdown tree
///
/// `value` is the quantity flowing through this node. For a non-leaf
/// node it is expected to equal (or bound) the sum of the children's
/// values; the flattening trusts upstream aggregation and never
/// recomputes or checks it.
///
/// Extra fields on the wire land in `meta` and are copied verbatim
/// onto the corresponding output node, never inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowTree<M = Meta> {
    pub name: String,
    pub value: f64,
    /// Ordered children; empty for leaves
    #[serde(default)]
    pub leafs: Vec<FlowTree<M>>,
    #[serde(flatten)]
    pub meta: M,
}

/// Output node: label plus pass-through metadata, `value`/`leafs` stripped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode<M = Meta> {
    pub name: String,
    #[serde(flatten)]
    pub meta: M,
}

/// Directed weighted edge between node positions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowLink {
    pub source: usize,
    pub target: usize,
    pub value: f64,
}

/// Render-ready graph: parallel node and link collections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowGraph<M = Meta> {
    pub nodes: Vec<FlowNode<M>>,
    pub links: Vec<FlowLink>,
}

impl<M: Clone> FlowGraph<M> {
    /// Flatten a tree into its node and link collections
    pub fn from_tree(tree: &FlowTree<M>) -> Self {
        let graph = Self {
            nodes: tree.nodes(),
            links: tree.links(),
        };
        debug!(
            nodes = graph.nodes.len(),
            links = graph.links.len(),
            "flattened allocation tree"
        );
        graph
    }
}

impl<M> FlowTree<M> {
    /// Number of nodes in this subtree, self included
    pub fn node_count(&self) -> usize {
        1 + self.leafs.iter().map(FlowTree::node_count).sum::<usize>()
    }

    /// One link per non-root node, weighted by the child node's `value`
    ///
    /// A single counter threaded through the traversal hands each node
    /// its pre-order index the instant it is visited, so link endpoints
    /// match `nodes()` positions without an intermediate index map.
    /// The root consumes index 0 and emits no self-link; a childless
    /// root therefore yields no links at all. Zero-valued children are
    /// still emitted as zero-weight links (no pruning).
    pub fn links(&self) -> Vec<FlowLink> {
        let mut links = Vec::with_capacity(self.node_count() - 1);
        let mut next_index = 0usize;
        self.collect_links(&mut next_index, &mut links);
        links
    }

    fn collect_links(&self, next_index: &mut usize, links: &mut Vec<FlowLink>) {
        let own_index = *next_index;
        *next_index += 1;

        for leaf in &self.leafs {
            // The child consumes the counter's current position next,
            // so its target is known before descending into it.
            links.push(FlowLink {
                source: own_index,
                target: *next_index,
                value: leaf.value,
            });
            leaf.collect_links(next_index, links);
        }
    }
}

impl<M: Clone> FlowTree<M> {
    /// Pre-order node list: root first, then each child subtree in
    /// child order
    pub fn nodes(&self) -> Vec<FlowNode<M>> {
        let mut nodes = Vec::with_capacity(self.node_count());
        self.collect_nodes(&mut nodes);
        nodes
    }

    fn collect_nodes(&self, nodes: &mut Vec<FlowNode<M>>) {
        nodes.push(FlowNode {
            name: self.name.clone(),
            meta: self.meta.clone(),
        });
        for leaf in &self.leafs {
            leaf.collect_nodes(nodes);
        }
    }
}
