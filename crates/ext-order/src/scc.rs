//! Strongly connected components and graph condensation.
//!
//! Components are found with Tarjan's algorithm, driven by an explicit work
//! stack instead of recursion so long dependency chains cannot overflow the
//! call stack. Roots are visited in node order and successors in insertion
//! order, which makes the output deterministic for a fixed graph.

use std::collections::HashSet;

use crate::graph::{Adjacency, NodeIndex};

const UNVISITED: usize = usize::MAX;

/// Strongly connected components of a graph.
///
/// Components are listed in completion order, which is a reverse
/// topological order of the condensation: a component appears after every
/// component it depends on. Members are listed in the order they were
/// popped off the Tarjan stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Components {
    components: Vec<Vec<NodeIndex>>,
    component_of: Vec<usize>,
}

impl Components {
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[NodeIndex]> {
        self.components.iter().map(Vec::as_slice)
    }

    /// Members of component `component`.
    pub fn members(&self, component: usize) -> &[NodeIndex] {
        &self.components[component]
    }

    /// Component containing `node`.
    pub fn component_of(&self, node: NodeIndex) -> usize {
        self.component_of[node]
    }

    /// The first component (in completion order) that forms a cycle.
    ///
    /// A component is cyclic when it has more than one member, or when its
    /// single member depends on itself.
    pub fn first_cycle<G: Adjacency>(&self, graph: &G) -> Option<&[NodeIndex]> {
        self.iter().find(|members| match members {
            [single] => graph.successors(*single).contains(single),
            _ => true,
        })
    }
}

struct Tarjan<'g, G> {
    graph: &'g G,
    counter: usize,
    index: Vec<usize>,
    lowlink: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<NodeIndex>,
    components: Vec<Vec<NodeIndex>>,
}

impl<'g, G: Adjacency> Tarjan<'g, G> {
    fn new(graph: &'g G) -> Self {
        let n = graph.node_count();
        Self {
            graph,
            counter: 0,
            index: vec![UNVISITED; n],
            lowlink: vec![0; n],
            on_stack: vec![false; n],
            stack: Vec::new(),
            components: Vec::new(),
        }
    }

    fn enter(&mut self, node: NodeIndex) {
        self.index[node] = self.counter;
        self.lowlink[node] = self.counter;
        self.counter += 1;
        self.stack.push(node);
        self.on_stack[node] = true;
    }

    /// Run from `root`. Each work frame is a node plus the position of the
    /// next successor to examine.
    fn connect(&mut self, root: NodeIndex) {
        let graph = self.graph;
        let mut work: Vec<(NodeIndex, usize)> = vec![(root, 0)];
        self.enter(root);

        while let Some(&(node, next)) = work.last() {
            let successors = graph.successors(node);
            if let Some(&successor) = successors.get(next) {
                if let Some(frame) = work.last_mut() {
                    frame.1 += 1;
                }
                if self.index[successor] == UNVISITED {
                    self.enter(successor);
                    work.push((successor, 0));
                } else if self.on_stack[successor] {
                    self.lowlink[node] = self.lowlink[node].min(self.index[successor]);
                }
                continue;
            }

            work.pop();
            if let Some(&(parent, _)) = work.last() {
                self.lowlink[parent] = self.lowlink[parent].min(self.lowlink[node]);
            }

            if self.lowlink[node] == self.index[node] {
                let mut component = Vec::new();
                while let Some(member) = self.stack.pop() {
                    self.on_stack[member] = false;
                    component.push(member);
                    if member == node {
                        break;
                    }
                }
                self.components.push(component);
            }
        }
    }
}

/// Partition `graph` into strongly connected components in `O(V + E)`.
pub fn strongly_connected<G: Adjacency>(graph: &G) -> Components {
    let mut tarjan = Tarjan::new(graph);
    for node in 0..graph.node_count() {
        if tarjan.index[node] == UNVISITED {
            tarjan.connect(node);
        }
    }

    let mut component_of = vec![0; graph.node_count()];
    for (component, members) in tarjan.components.iter().enumerate() {
        for &member in members {
            component_of[member] = component;
        }
    }

    Components {
        components: tarjan.components,
        component_of,
    }
}

/// A graph with every strongly connected component collapsed to one node.
///
/// Condensed nodes are numbered by the smallest original node they contain,
/// so registration order carries over to the condensation. Edges inside a
/// component are dropped.
#[derive(Debug, Clone)]
pub struct Condensation {
    members: Vec<Vec<NodeIndex>>,
    edges: Vec<Vec<usize>>,
}

impl Condensation {
    pub fn new<G: Adjacency>(graph: &G, components: &Components) -> Self {
        let mut order: Vec<usize> = (0..components.len()).collect();
        order.sort_by_key(|&c| components.members(c).iter().min().copied());

        let mut renumber = vec![0; components.len()];
        for (condensed, &component) in order.iter().enumerate() {
            renumber[component] = condensed;
        }

        let mut members: Vec<Vec<NodeIndex>> = order
            .iter()
            .map(|&c| components.members(c).to_vec())
            .collect();
        for group in &mut members {
            group.sort_unstable();
        }

        let mut edges: Vec<Vec<usize>> = vec![Vec::new(); order.len()];
        let mut seen = HashSet::new();
        for node in 0..graph.node_count() {
            let from = renumber[components.component_of(node)];
            for &successor in graph.successors(node) {
                let to = renumber[components.component_of(successor)];
                if from != to && seen.insert((from, to)) {
                    edges[from].push(to);
                }
            }
        }

        Self { members, edges }
    }

    /// Original nodes collapsed into condensed node `node`, ascending.
    pub fn members(&self, node: usize) -> &[NodeIndex] {
        &self.members[node]
    }
}

impl Adjacency for Condensation {
    fn node_count(&self) -> usize {
        self.members.len()
    }

    fn successors(&self, node: usize) -> &[usize] {
        &self.edges[node]
    }
}
