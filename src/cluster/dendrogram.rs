//! The merge tree, stored as an arena of nodes addressed by index.
use serde::{Deserialize, Serialize};

/// Index of a node in a [`Dendrogram`].
pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// Wraps the input item with this index.
    Leaf { item: usize },
    /// Joins two disjoint subtrees at `distance`.
    Merge {
        left: NodeId,
        right: NodeId,
        distance: f64,
        /// Number of leaves below this node.
        size: usize,
    },
}

/// Nodes `0..num_leaves` are the leaves, in item order. Merges are appended
/// after them, so a child always has a smaller id than its parent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dendrogram {
    nodes: Vec<Node>,
    num_leaves: usize,
}

impl Dendrogram {
    pub fn with_leaves(n: usize) -> Self {
        Self {
            nodes: (0..n).map(|item| Node::Leaf { item }).collect(),
            num_leaves: n,
        }
    }

    /// Append a node joining `left` and `right`.
    pub fn merge(&mut self, left: NodeId, right: NodeId, distance: f64) -> NodeId {
        assert!(left != right && left < self.nodes.len() && right < self.nodes.len());
        let size = self.size(left) + self.size(right);
        self.nodes.push(Node::Merge {
            left,
            right,
            distance,
            size,
        });
        self.nodes.len() - 1
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn num_leaves(&self) -> usize {
        self.num_leaves
    }

    pub fn size(&self, id: NodeId) -> usize {
        match self.nodes[id] {
            Node::Leaf { .. } => 1,
            Node::Merge { size, .. } => size,
        }
    }

    /// Merge distance of the node, 0 for a leaf.
    pub fn height(&self, id: NodeId) -> f64 {
        match self.nodes[id] {
            Node::Leaf { .. } => 0.,
            Node::Merge { distance, .. } => distance,
        }
    }

    /// The items below `id`, sorted.
    pub fn items(&self, id: NodeId) -> Vec<usize> {
        let mut items = Vec::with_capacity(self.size(id));
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            match self.nodes[id] {
                Node::Leaf { item } => items.push(item),
                Node::Merge { left, right, .. } => stack.extend([left, right]),
            }
        }
        items.sort_unstable();
        items
    }

    /// Split the subtree at `id` into the maximal subtrees whose height is at
    /// most `height`.
    pub fn cut(&self, id: NodeId, height: f64) -> Vec<NodeId> {
        let mut parts = vec![];
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            match self.nodes[id] {
                Node::Merge {
                    left,
                    right,
                    distance,
                    ..
                } if distance > height => stack.extend([right, left]),
                _ => parts.push(id),
            }
        }
        parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Dendrogram {
        // ((0 1) 2) 3, at heights 1, 2, 5.
        let mut d = Dendrogram::with_leaves(4);
        let a = d.merge(0, 1, 1.);
        let b = d.merge(a, 2, 2.);
        d.merge(b, 3, 5.);
        d
    }

    #[test]
    fn shape() {
        let d = tree();
        assert_eq!(d.len(), 7);
        assert_eq!(d.num_leaves(), 4);
        assert_eq!(d.size(6), 4);
        assert_eq!(d.size(2), 1);
        assert_eq!(d.height(5), 2.);
        assert_eq!(d.height(3), 0.);
        assert_eq!(d.items(5), vec![0, 1, 2]);
        assert_eq!(
            *d.node(4),
            Node::Merge {
                left: 0,
                right: 1,
                distance: 1.,
                size: 2
            }
        );
    }

    #[test]
    fn cut() {
        let d = tree();
        assert_eq!(d.cut(6, 10.), vec![6]);
        assert_eq!(d.cut(6, 5.), vec![6]);
        assert_eq!(d.cut(6, 3.), vec![5, 3]);
        assert_eq!(d.cut(6, 1.5), vec![4, 2, 3]);
        assert_eq!(d.cut(6, 0.), vec![0, 1, 2, 3]);
    }
}
