//! Strong edge connectivity of directed graphs.
//!
//! The strong edge connectivity of a digraph is the minimum number of arcs
//! whose removal destroys strong connectivity. It equals the minimum s-t
//! maximum flow over the cyclic vertex pairing (0,1), (1,2), ..., (n-1,0),
//! so [`strong_connectivity::sec`] runs n unit-capacity flow computations
//! and keeps the smallest value together with one minimum cut achieving it.

pub mod adjacency;
pub mod maximum_flow;
pub mod strong_connectivity;

pub use adjacency::{AdjacencyMatrix, MatrixError};
pub use maximum_flow::solver::{maxflow, FlowAssignment, FlowError, MaxFlow};
pub use strong_connectivity::{sec, SecError, SecResult};
