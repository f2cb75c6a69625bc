//! Serializable flame graph tree.

use serde::{Deserialize, Serialize};

/// One frame of a finished flame graph
///
/// Serialized as `{ "name", "value", "total", "children" }`; inlined frames
/// additionally carry `"inline": true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlameNode {
    /// Function name, `[inline] `-prefixed for inlined frames
    pub name: String,

    /// Self value: weight of samples whose stack ended at this frame
    pub value: u64,

    /// Self value plus the totals of all children
    pub total: u64,

    #[serde(default, skip_serializing_if = "is_false")]
    pub inline: bool,

    /// Inlined frames first, then real frames, each group in first-seen order
    #[serde(default)]
    pub children: Vec<FlameNode>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl FlameNode {
    /// Find a direct child by name
    pub fn child(&self, name: &str) -> Option<&FlameNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Follow a path of child names from this node
    pub fn find_path<S: AsRef<str>>(&self, path: &[S]) -> Option<&FlameNode> {
        path.iter()
            .try_fold(self, |node, name| node.child(name.as_ref()))
    }

    /// Number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(FlameNode::node_count).sum::<usize>()
    }

    /// Longest root-to-leaf chain below this node
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn leaf(name: &str, value: u64) -> FlameNode {
        FlameNode {
            name: name.to_string(),
            value,
            total: value,
            inline: false,
            children: vec![],
        }
    }

    #[test]
    fn test_serialized_shape() {
        let mut inlined = leaf("[inline] a", 2);
        inlined.inline = true;
        let node = FlameNode {
            name: "main".to_string(),
            value: 0,
            total: 2,
            inline: false,
            children: vec![inlined],
        };

        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({
                "name": "main",
                "value": 0,
                "total": 2,
                "children": [
                    { "name": "[inline] a", "value": 2, "total": 2, "inline": true, "children": [] }
                ]
            })
        );
    }

    #[test]
    fn test_find_path_and_depth() {
        let mut main = leaf("main", 0);
        main.children.push(leaf("rand", 3));
        let mut root = leaf("root", 0);
        root.children.push(main);

        assert_eq!(root.find_path(&["main", "rand"]).unwrap().value, 3);
        assert!(root.find_path(&["rand"]).is_none());
        assert_eq!(root.depth(), 2);
        assert_eq!(root.node_count(), 3);
    }
}
