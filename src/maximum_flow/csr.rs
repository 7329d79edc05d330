use crate::maximum_flow::network::Network;
use num_traits::NumAssign;
use std::collections::VecDeque;
use std::ops::Sub;

#[derive(Default, PartialEq, Debug)]
pub struct ResidualEdge<Flow> {
    pub to: usize,
    pub flow: Flow,
    pub upper: Flow,
    pub opposite: usize,
}

impl<Flow> ResidualEdge<Flow>
where
    Flow: Sub<Output = Flow> + Copy,
{
    pub fn residual_capacity(&self) -> Flow {
        self.upper - self.flow
    }
}

/// Residual network in CSR form: for every network edge a forward copy and a
/// reverse copy, each pointing at its opposite.
#[derive(Default)]
pub struct Residual<Flow> {
    pub num_nodes: usize,
    pub start: Vec<usize>,
    pub edges: Vec<ResidualEdge<Flow>>,
    pub distances: Vec<usize>, // distance from u to sink in the residual network
    edge_to_forward: Vec<usize>,
    que: VecDeque<usize>,
}

impl<Flow> Residual<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn build(&mut self, network: &Network<Flow>) {
        self.num_nodes = network.num_nodes();
        let num_edges = network.num_edges();

        self.edge_to_forward.resize(num_edges, usize::MAX);
        self.start = vec![0; self.num_nodes + 1];
        self.edges = (0..2 * num_edges)
            .map(|_| ResidualEdge { to: 0, flow: Flow::zero(), upper: Flow::zero(), opposite: 0 })
            .collect();
        self.distances.resize(self.num_nodes, self.num_nodes);

        for edge in network.edges() {
            self.start[edge.from + 1] += 1;
            self.start[edge.to + 1] += 1;
        }
        for u in 0..self.num_nodes {
            self.start[u + 1] += self.start[u];
        }

        let mut offset = vec![0; self.num_nodes];
        for (edge_index, e) in network.edges().enumerate() {
            let forward = self.start[e.from] + offset[e.from];
            offset[e.from] += 1;
            let backward = self.start[e.to] + offset[e.to];
            offset[e.to] += 1;

            self.edge_to_forward[edge_index] = forward;
            self.edges[forward] =
                ResidualEdge { to: e.to, flow: Flow::zero(), upper: e.upper, opposite: backward };
            self.edges[backward] =
                ResidualEdge { to: e.from, flow: e.upper, upper: e.upper, opposite: forward };
        }
    }

    /// Writes the solved flow back onto the network's edges.
    pub fn set_flow(&self, network: &mut Network<Flow>) {
        for (edge_index, forward) in self.edge_to_forward.iter().enumerate() {
            network.edges[edge_index].flow = self.edges[*forward].flow;
        }
    }

    #[inline]
    pub fn neighbors(&self, u: usize) -> std::slice::Iter<ResidualEdge<Flow>> {
        self.edges[self.start[u]..self.start[u + 1]].iter()
    }

    #[inline]
    pub fn push_flow(&mut self, edge_index: usize, flow: Flow) {
        let opposite = self.edges[edge_index].opposite;
        self.edges[edge_index].flow += flow;
        self.edges[opposite].flow -= flow;
    }

    // O(n + m)
    // distance from u to sink in the residual network; unreachable vertices
    // get self.num_nodes
    pub fn update_distances(&mut self, source: usize, sink: usize) {
        self.que.clear();
        self.que.push_back(sink);
        self.distances.fill(self.num_nodes);
        self.distances[sink] = 0;

        while let Some(v) = self.que.pop_front() {
            for e in self.edges[self.start[v]..self.start[v + 1]].iter() {
                // the opposite of (v, e.to) is a residual arc e.to -> v
                if e.flow > Flow::zero() && self.distances[e.to] == self.num_nodes {
                    self.distances[e.to] = self.distances[v] + 1;
                    if e.to != source {
                        self.que.push_back(e.to);
                    }
                }
            }
        }
    }

    #[inline]
    pub fn is_admissible_edge(&self, from: usize, edge_index: usize) -> bool {
        self.edges[edge_index].residual_capacity() > Flow::zero()
            && self.distances[from] == self.distances[self.edges[edge_index].to] + 1
    }
}
