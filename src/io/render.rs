//! plain text rendering of a vertex selection on a multigraph

use std::fmt::Write;

use indexmap::IndexSet;

use crate::multigraph::Multigraph;

/// Returns the list of vertices and the adjacency matrix, selected vertices and entries
/// between two distinct selected vertices are put between brackets.
pub fn render_selection(graph: &Multigraph, selection: &[usize]) -> String {
    let selected: IndexSet<usize> = selection.iter().copied().collect();
    let n = graph.nb_vertices();
    let mut out = String::new();
    //
    let _ = writeln!(out, "Vertices:");
    let vertices: Vec<String> = (0..n)
        .map(|i| if selected.contains(&i) { format!("[{}]", i) } else { i.to_string() })
        .collect();
    let _ = writeln!(out, "{}", vertices.join(" "));
    //
    let _ = writeln!(out, "Adjacency matrix:");
    for i in 0..n {
        let row: Vec<String> = (0..n)
            .map(|j| {
                let m = graph.multiplicity(i, j);
                if i != j && selected.contains(&i) && selected.contains(&j) {
                    format!("[{}]", m)
                } else {
                    m.to_string()
                }
            })
            .collect();
        let _ = writeln!(out, "{}", row.join(" "));
    }
    out
} // end of render_selection

//========================================================================================

// end of mod tests
