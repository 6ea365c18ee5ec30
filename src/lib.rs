pub mod algorithm;
pub mod error;
pub mod export;
pub mod generate;
pub mod graph;
pub mod import;
mod state;
pub mod vertex;

pub use algorithm::{find_components, Component};
pub use error::{GraphError, GraphResult};
pub use graph::{AdjacencyList, EdgeGenerator, UndirectedGraph};
pub use vertex::{Vertex, VertexId};
