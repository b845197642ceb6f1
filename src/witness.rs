use log::debug;

use crate::element::ElementSet;
use crate::forward::ForwardTables;
use crate::table::{extends_optimum, keeps_optimum};

/// Reconstructs one minimum-size subset reaching the target by walking the
/// minimum-size table from `(n, target)` back to row 0.
///
/// At each row the element is taken whenever taking it stays on an optimal
/// path, so ties resolve toward higher internal indices. Internal order is the
/// reverse of input order, which makes the walk visit elements in input order
/// and prefer the earliest-read element of any tie. The returned names are in
/// visit order.
///
/// Must only be called for a feasible target.
pub fn canonical_witness(elements: &ElementSet, forward: &ForwardTables) -> Vec<String> {
    let n = forward.elements();
    let min_size = &forward.min_size;
    debug_assert!(forward.solvable());

    let mut witness = Vec::new();
    let mut s = forward.target();

    for i in (1..=n).rev() {
        let elem = elements.get(i - 1);
        let cur = min_size.get(i, s);

        // Greedily take the element if possible
        if let Some(rest) = elem
            .remainder(s)
            .filter(|&rest| extends_optimum(min_size.get(i - 1, rest), cur))
        {
            witness.push(elem.name.clone());
            s = rest;
            continue;
        }

        assert!(
            keeps_optimum(min_size.get(i - 1, s), cur),
            "witness walk left the optimal path at row {}, sum {}",
            i,
            s
        );
    }

    assert_eq!(s, 0, "witness walk ended with a nonzero remaining sum");
    debug!("Canonical witness: {:?}", witness);

    witness
}
