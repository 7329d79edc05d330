use crate::adjacency::AdjacencyMatrix;
use num_traits::NumAssign;

#[derive(PartialEq, Debug, Clone)]
pub struct Edge<Flow> {
    pub from: usize,
    pub to: usize,
    pub flow: Flow,
    pub upper: Flow,
}

/// Flow network over the vertices of an adjacency matrix, one unit-capacity
/// directed edge per nonzero entry. Edge flows are written back by the
/// solver after it terminates.
#[derive(Default)]
pub struct Network<Flow> {
    num_nodes: usize,
    pub(crate) edges: Vec<Edge<Flow>>,
}

impl<Flow> Network<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn from_adjacency(g: &AdjacencyMatrix) -> Self {
        Network {
            num_nodes: g.order(),
            edges: g
                .arcs()
                .map(|(from, to)| Edge { from, to, flow: Flow::zero(), upper: Flow::one() })
                .collect(),
        }
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn edges(&self) -> std::slice::Iter<Edge<Flow>> {
        self.edges.iter()
    }
}
