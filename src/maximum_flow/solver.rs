use crate::adjacency::AdjacencyMatrix;
use crate::maximum_flow::dinic::Dinic;
use crate::maximum_flow::network::Network;
use crate::maximum_flow::status::Status;
use std::collections::VecDeque;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("vertex {vertex} is out of range for a graph of order {order}")]
    VertexOutOfRange { vertex: usize, order: usize },
    #[error("source and sink are both vertex {0}")]
    SourceIsSink(usize),
    #[error("solver terminated with status {0:?} without proving optimality")]
    NotOptimal(Status),
}

/// Binary per-arc flow matrix of one optimal solution: `carries(i, j)` iff
/// arc (i, j) moves one unit of flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowAssignment {
    order: usize,
    entries: Vec<u8>,
}

impl FlowAssignment {
    fn new(order: usize) -> Self {
        FlowAssignment { order, entries: vec![0; order * order] }
    }

    fn set(&mut self, from: usize, to: usize) {
        self.entries[from * self.order + to] = 1;
    }

    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    #[inline]
    pub fn carries(&self, from: usize, to: usize) -> bool {
        self.entries[from * self.order + to] == 1
    }
}

/// Optimal value and flow assignment of one source/sink probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxFlow {
    pub value: usize,
    pub assignment: FlowAssignment,
}

impl MaxFlow {
    /// Arcs of `g` leaving the set of vertices reachable from `source` in
    /// the residual network of this assignment. Every such arc is saturated,
    /// so the cut has exactly `value` arcs and removing them disconnects
    /// `source` from the probed sink.
    pub fn minimum_cut(&self, g: &AdjacencyMatrix, source: usize) -> Vec<(usize, usize)> {
        let order = g.order();
        let mut visited = vec![false; order];
        let mut que = VecDeque::from([source]);
        visited[source] = true;

        while let Some(u) = que.pop_front() {
            for v in 0..order {
                if visited[v] {
                    continue;
                }
                // forward residual on an unsaturated arc, backward residual
                // on a flow-carrying one
                if (g.has_arc(u, v) && !self.assignment.carries(u, v))
                    || self.assignment.carries(v, u)
                {
                    visited[v] = true;
                    que.push_back(v);
                }
            }
        }

        g.arcs().filter(|&(u, v)| visited[u] && !visited[v]).collect()
    }
}

/// Maximum number of arc-disjoint unit flows from `source` to `sink` over
/// the unit-capacity arcs of `g`, together with the optimal assignment.
///
/// Out-of-range or equal source/sink indices are programming errors and fail
/// immediately; a solver run that terminates without a proven optimum fails
/// as [`FlowError::NotOptimal`].
pub fn maxflow(g: &AdjacencyMatrix, source: usize, sink: usize) -> Result<MaxFlow, FlowError> {
    let order = g.order();
    for vertex in [source, sink] {
        if vertex >= order {
            return Err(FlowError::VertexOutOfRange { vertex, order });
        }
    }
    if source == sink {
        return Err(FlowError::SourceIsSink(source));
    }

    let mut network = Network::<usize>::from_adjacency(g);
    let status = Dinic::default().solve(source, sink, &mut network);
    if status != Status::Optimal {
        return Err(FlowError::NotOptimal(status));
    }

    let mut assignment = FlowAssignment::new(order);
    for edge in network.edges() {
        if edge.flow > 0 {
            assignment.set(edge.from, edge.to);
        }
    }
    // no flow enters the source, so its outflow is the optimal value
    let value = g.successors(source).filter(|&v| assignment.carries(source, v)).count();

    Ok(MaxFlow { value, assignment })
}
