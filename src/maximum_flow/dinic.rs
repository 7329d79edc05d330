use crate::maximum_flow::csr::Residual;
use crate::maximum_flow::network::Network;
use crate::maximum_flow::status::Status;
use num_traits::NumAssign;

#[derive(Default)]
pub struct Dinic<Flow> {
    residual: Residual<Flow>,
    current_edge: Vec<usize>,
}

impl<Flow> Dinic<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn solve(&mut self, source: usize, sink: usize, network: &mut Network<Flow>) -> Status {
        if source >= network.num_nodes() || sink >= network.num_nodes() || source == sink {
            return Status::BadInput;
        }

        self.residual.build(network);
        self.current_edge.resize(network.num_nodes(), 0);

        let upper = self.residual.neighbors(source).fold(Flow::zero(), |sum, e| sum + e.upper);
        let mut flow = Flow::zero();
        while flow < upper {
            self.residual.update_distances(source, sink);

            // no s-t path left
            if self.residual.distances[source] >= self.residual.num_nodes {
                break;
            }

            self.current_edge.iter_mut().enumerate().for_each(|(u, e)| *e = self.residual.start[u]);
            match self.dfs(source, sink, upper) {
                Some(delta) => flow += delta,
                None => break,
            }
        }

        self.residual.set_flow(network);
        Status::Optimal
    }

    fn dfs(&mut self, u: usize, sink: usize, upper: Flow) -> Option<Flow> {
        if u == sink {
            return Some(upper);
        }

        let mut res = Flow::zero();
        for i in self.current_edge[u]..self.residual.start[u + 1] {
            self.current_edge[u] = i;
            let v = self.residual.edges[i].to;
            let residual_capacity = self.residual.edges[i].residual_capacity();

            if !self.residual.is_admissible_edge(u, i) {
                continue;
            }

            if let Some(d) = self.dfs(v, sink, residual_capacity.min(upper - res)) {
                self.residual.push_flow(i, d);
                res += d;
                if res == upper {
                    return Some(res);
                }
            }
        }
        self.current_edge[u] = self.residual.start[u + 1];
        self.residual.distances[u] = self.residual.num_nodes;

        Some(res)
    }
}
