use std::fs::File;
use std::io::{prelude::*, BufReader};
use std::path::Path;

use bstr::io::BufReadExt;
use bstr::ByteSlice;
use fxhash::FxHashMap;
use gfa::gfa::Line;
use gfa::parser::GFAParser;
use tracing::{debug, warn};

use crate::error::GraphResult;
use crate::graph::{AdjacencyList, UndirectedGraph};
use crate::vertex::VertexId;

/// Constructs an undirected graph from the given GFA input stream,
/// parsing the GFA line-by-line. Every segment becomes a vertex whose
/// payload is the segment name, and every link is added to the
/// adjacency lists of both of its endpoints. Segments that are only
/// mentioned by links get a vertex the first time they are seen.
pub fn from_gfa_reader<R: BufRead>(
    reader: &mut R,
) -> GraphResult<UndirectedGraph<String>> {
    let parser: GFAParser<Vec<u8>, ()> = GFAParser::new();

    let mut graph = UndirectedGraph::new();
    let mut name_map: FxHashMap<Vec<u8>, VertexId> = FxHashMap::default();

    let mut get_ix = |name: Vec<u8>, graph: &mut UndirectedGraph<String>| {
        if let Some(ix) = name_map.get(&name) {
            *ix
        } else {
            let ix = graph.add_vertex(name.to_str_lossy().into_owned());
            name_map.insert(name, ix);
            ix
        }
    };

    let mut links = Vec::new();
    let mut skipped = 0usize;

    for (line_no, line) in reader.byte_lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }

        match parser.parse_gfa_line(&line) {
            Ok(Line::Segment(segment)) => {
                get_ix(segment.name, &mut graph);
            }
            Ok(Line::Link(link)) => {
                let from_ix = get_ix(link.from_segment, &mut graph);
                let to_ix = get_ix(link.to_segment, &mut graph);
                links.push((from_ix, to_ix));
            }
            Ok(_) => {}
            Err(err) => {
                skipped += 1;
                warn!(
                    line = line_no + 1,
                    "skipping unparseable GFA line: {:?}",
                    err
                );
            }
        }
    }

    let mut adjacency: Vec<AdjacencyList> =
        vec![AdjacencyList::new(); graph.vertex_count()];
    for &(from_ix, to_ix) in links.iter() {
        adjacency[from_ix.index()].push(to_ix);
        adjacency[to_ix.index()].push(from_ix);
    }

    for (ix, neighbors) in adjacency.into_iter().enumerate() {
        graph.set_edge_generator(VertexId::new(ix), neighbors)?;
    }

    debug!(
        vertices = graph.vertex_count(),
        links = links.len(),
        skipped,
        "loaded GFA graph"
    );

    Ok(graph)
}

pub fn from_gfa_path<P: AsRef<Path>>(
    path: P,
) -> GraphResult<UndirectedGraph<String>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    from_gfa_reader(&mut reader)
}
