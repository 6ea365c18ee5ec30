//! Writers for Graphviz DOT and CSV component listings.
//!
//! DOT output lists every vertex as a labelled node and every edge once,
//! from its lower to its higher endpoint. Neighbor ids are written as the
//! generators produce them, without checking that they name a vertex.
use std::fmt::Display;
use std::io::Write;

use crate::algorithm::Component;
use crate::error::GraphResult;
use crate::graph::UndirectedGraph;

fn escape_label(label: &str) -> String {
    label.replace('"', "\\\"")
}

pub fn write_dot<T, W>(
    graph: &UndirectedGraph<T>,
    writer: &mut W,
) -> GraphResult<()>
where
    T: Display,
    W: Write,
{
    writeln!(writer, "graph G {{")?;
    writeln!(
        writer,
        "    node [shape=circle, style=filled, fillcolor=lightblue, fontname=\"Arial\"];"
    )?;
    writeln!(writer, "    edge [color=gray40];")?;

    for vertex in graph.vertices() {
        let label = escape_label(&format!("{}: {}", vertex.id, vertex.data));
        writeln!(writer, "    {} [label=\"{}\"];", vertex.id, label)?;
    }

    for u in graph.vertex_ids() {
        for v in graph.neighbors(u)? {
            if u < v {
                writeln!(writer, "    {} -- {};", u, v)?;
            }
        }
    }

    writeln!(writer, "}}")?;
    Ok(())
}

pub fn to_dot<T: Display>(graph: &UndirectedGraph<T>) -> GraphResult<String> {
    let mut buf = Vec::new();
    write_dot(graph, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Writes one `vertex_id;vertex_label;component_id` row per vertex, with
/// components numbered in the order given.
pub fn write_components_csv<T, W>(
    graph: &UndirectedGraph<T>,
    components: &[Component],
    writer: &mut W,
) -> GraphResult<()>
where
    T: Display,
    W: Write,
{
    writeln!(writer, "vertex_id;vertex_label;component_id")?;

    for (comp_id, component) in components.iter().enumerate() {
        for &v in component {
            writeln!(writer, "{};{};{}", v, graph.vertex_data(v)?, comp_id)?;
        }
    }
    Ok(())
}
