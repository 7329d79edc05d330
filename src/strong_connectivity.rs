use crate::adjacency::AdjacencyMatrix;
use crate::maximum_flow::solver::{maxflow, FlowError};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SecError {
    #[error("probe {source} -> {sink} failed: {inner}")]
    Probe {
        source: usize,
        sink: usize,
        #[source]
        inner: FlowError,
    },
}

/// Strong edge connectivity value and one minimal arc cut achieving it.
/// A value of 0 means the graph is not strongly connected and pairs with an
/// empty cut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecResult {
    pub value: usize,
    pub cut: Vec<(usize, usize)>,
}

/// Strong edge connectivity of `g`: the minimum number of arcs whose removal
/// destroys strong connectivity, with one minimum cut achieving it.
///
/// Probes the n cyclic pairs (0,1), (1,2), ..., (n-1,0). The strong edge
/// connectivity equals the minimum s-t max-flow over all ordered pairs, and
/// the cyclic pairing already attains that minimum, so n flow computations
/// suffice instead of n(n-1). A zero-valued probe disproves strong
/// connectivity outright and stops the sequence.
///
/// Any probe whose flow computation fails aborts the whole run; a partial
/// result cannot be compared against the running minimum.
pub fn sec(g: &AdjacencyMatrix) -> Result<SecResult, SecError> {
    sec_probed(g).map(|(result, _)| result)
}

/// Same as [`sec`], also reporting how many probes were evaluated.
pub(crate) fn sec_probed(g: &AdjacencyMatrix) -> Result<(SecResult, usize), SecError> {
    let n = g.order();
    if n < 2 {
        return Ok((SecResult { value: 0, cut: Vec::new() }, 0));
    }

    let probe = |source: usize, sink: usize| {
        maxflow(g, source, sink).map_err(|inner| SecError::Probe { source, sink, inner })
    };

    let first = probe(0, 1)?;
    if first.value == 0 {
        return Ok((SecResult { value: 0, cut: Vec::new() }, 1));
    }

    let mut minimum = first.value;
    let mut cut = first.minimum_cut(g, 0);
    let mut probes = 1;

    for source in 1..n {
        let sink = (source + 1) % n;
        let flow = probe(source, sink)?;
        probes += 1;

        // strict improvement only, so ties keep the earliest probe's cut
        if flow.value < minimum {
            minimum = flow.value;
            if minimum == 0 {
                cut.clear();
                break;
            }
            cut = flow.minimum_cut(g, source);
        }
    }

    Ok((SecResult { value: minimum, cut }, probes))
}
