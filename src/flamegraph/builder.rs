//! Folding samples into a shared call tree.
//!
//! The working tree lives in an arena: every node is an index into `nodes`,
//! and each node maps child names to indices so lookup-or-create is a single
//! map probe. Inlined frames hang off a separate `inline_children` map keyed
//! `[inline] <name>`, so an inlined function never merges with a real callee
//! of the same name. [`FlameTreeBuilder::finish`] freezes the arena into an
//! ordered [`FlameNode`] tree.

use super::tree::FlameNode;
use crate::parser::Sample;
use crate::symbolize::{decode_inline_chain, SymbolTable};
use crate::utils::config::{INLINE_PREFIX, ROOT_NAME};
use indexmap::IndexMap;
use log::debug;

type NodeId = usize;

const ROOT: NodeId = 0;

/// Internal node structure for building the tree
#[derive(Debug)]
struct Node {
    name: String,
    self_value: u64,
    inline: bool,
    children: IndexMap<String, NodeId>,
    inline_children: IndexMap<String, NodeId>,
}

impl Node {
    fn new(name: String, inline: bool) -> Self {
        Self {
            name,
            self_value: 0,
            inline,
            children: IndexMap::new(),
            inline_children: IndexMap::new(),
        }
    }
}

/// Accumulates samples into a call tree
#[derive(Debug)]
pub struct FlameTreeBuilder<'s> {
    symbols: &'s SymbolTable,
    nodes: Vec<Node>,
    sample_count: usize,
    ingested_value: u64,
}

impl<'s> FlameTreeBuilder<'s> {
    /// Start an empty tree whose frames are named through `symbols`
    pub fn new(symbols: &'s SymbolTable) -> Self {
        Self {
            symbols,
            nodes: vec![Node::new(ROOT_NAME.to_string(), false)],
            sample_count: 0,
            ingested_value: 0,
        }
    }

    /// Fold one sample into the tree
    ///
    /// Only the frame the stack ends at receives the sample's value.
    pub fn add_sample(&mut self, sample: &Sample) {
        let symbols = self.symbols;
        let mut current = ROOT;

        for address in sample.stack() {
            let chain = decode_inline_chain(symbols.resolve(address));

            current = self.child(current, chain.frame());
            for inlined in chain.inlined() {
                current = self.inline_child(current, inlined);
            }
        }

        self.nodes[current].self_value += sample.value();
        self.sample_count += 1;
        self.ingested_value += sample.value();
    }

    pub fn add_samples<'a>(&mut self, samples: impl IntoIterator<Item = &'a Sample>) {
        for sample in samples {
            self.add_sample(sample);
        }
    }

    /// Sum of the values of every sample added so far
    pub fn ingested_value(&self) -> u64 {
        self.ingested_value
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Number of nodes in the working tree, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Freeze the working tree into an ordered tree with totals attached
    pub fn finish(&self) -> FlameNode {
        debug!(
            "Normalizing flame tree: {} nodes from {} samples",
            self.nodes.len(),
            self.sample_count
        );
        self.normalize(ROOT)
    }

    fn child(&mut self, parent: NodeId, name: &str) -> NodeId {
        if let Some(&id) = self.nodes[parent].children.get(name) {
            return id;
        }
        let id = self.push(Node::new(name.to_string(), false));
        self.nodes[parent].children.insert(name.to_string(), id);
        id
    }

    fn inline_child(&mut self, parent: NodeId, name: &str) -> NodeId {
        let key = format!("{}{}", INLINE_PREFIX, name);
        if let Some(&id) = self.nodes[parent].inline_children.get(&key) {
            return id;
        }
        let id = self.push(Node::new(key.clone(), true));
        self.nodes[parent].inline_children.insert(key, id);
        id
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Post-order conversion: inlined children first, then real children
    fn normalize(&self, id: NodeId) -> FlameNode {
        let node = &self.nodes[id];
        let children: Vec<FlameNode> = node
            .inline_children
            .values()
            .chain(node.children.values())
            .map(|&child| self.normalize(child))
            .collect();

        let total = node.self_value + children.iter().map(|c| c.total).sum::<u64>();

        FlameNode {
            name: node.name.clone(),
            value: node.self_value,
            total,
            inline: node.inline,
            children,
        }
    }
}

/// Build a normalized flame graph from samples in one call
pub fn build_flame_graph<'a>(
    samples: impl IntoIterator<Item = &'a Sample>,
    symbols: &SymbolTable,
) -> FlameNode {
    let mut builder = FlameTreeBuilder::new(symbols);
    builder.add_samples(samples);
    builder.finish()
}
