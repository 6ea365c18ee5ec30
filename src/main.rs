use std::fs::File;
use std::io::{self, prelude::*, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lazy_components::{export, import, AdjacencyList, UndirectedGraph, VertexId};

#[derive(StructOpt, Debug)]
#[structopt(
    name = "lazy-components",
    about = "Build an undirected graph interactively and find its connected components"
)]
struct Opt {
    /// Preload the graph from a GFA file
    #[structopt(long, parse(from_os_str))]
    gfa: Option<PathBuf>,

    /// Destination of the Graphviz export
    #[structopt(long, default_value = "graph.dot", parse(from_os_str))]
    dot: PathBuf,

    /// Destination of the components CSV export
    #[structopt(long, default_value = "components.csv", parse(from_os_str))]
    csv: PathBuf,

    /// Log debug output to stderr (overridden by RUST_LOG)
    #[structopt(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "lazy_components=debug"
    } else {
        "lazy_components=info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

const MENU: &str = "
Menu:
  1. Add vertex
  2. Set edges for vertex (manual)
  3. Find connected components
  4. Export graph to Graphviz (.dot)
  5. Export results to CSV
  0. Exit
Choice: ";

struct Session<R, W> {
    input: R,
    output: W,
    graph: UndirectedGraph<String>,
    dot_path: PathBuf,
    csv_path: PathBuf,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Reads one line without its terminator, or `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn run(&mut self) -> Result<()> {
        writeln!(self.output, "========================================")?;
        writeln!(self.output, "  Undirected Graph")?;
        writeln!(self.output, "========================================")?;

        loop {
            write!(self.output, "{}", MENU)?;
            self.output.flush()?;

            let line = match self.read_line()? {
                Some(line) => line,
                None => break,
            };
            let choice = match line.parse::<i32>() {
                Ok(choice) => choice,
                Err(_) => {
                    writeln!(self.output, "Invalid input. Try again.")?;
                    continue;
                }
            };

            let result = match choice {
                0 => break,
                1 => self.add_vertex(),
                2 => self.set_edges(),
                3 => self.find_components(),
                4 => self.export_dot(),
                5 => self.export_csv(),
                _ => {
                    writeln!(self.output, "Invalid choice. Try 0-5.")?;
                    Ok(())
                }
            };

            if let Err(err) = result {
                writeln!(self.output, "Error: {:#}", err)?;
            }
        }
        Ok(())
    }

    fn ensure_not_empty(&mut self) -> Result<bool> {
        if self.graph.is_empty() {
            writeln!(self.output, "Graph is empty.")?;
            return Ok(false);
        }
        Ok(true)
    }

    fn add_vertex(&mut self) -> Result<()> {
        write!(self.output, "Enter vertex label: ")?;
        self.output.flush()?;

        let mut label = self.read_line()?.unwrap_or_default();
        if label.is_empty() {
            label = format!("V{}", self.graph.vertex_count());
        }
        let id = self.graph.add_vertex(label.clone());
        writeln!(self.output, "Vertex {} added with label \"{}\"", id, label)?;
        Ok(())
    }

    /// Parses a vertex id typed by the user, `None` if it doesn't name
    /// a vertex of the graph
    fn parse_vertex(&self, input: &str) -> Option<VertexId> {
        let id = VertexId::new(input.parse::<usize>().ok()?);
        if self.graph.contains(id) {
            Some(id)
        } else {
            None
        }
    }

    fn set_edges(&mut self) -> Result<()> {
        if !self.ensure_not_empty()? {
            return Ok(());
        }

        writeln!(self.output, "Available vertices:")?;
        for vertex in self.graph.vertices() {
            writeln!(self.output, "  {}: {}", vertex.id, vertex.data)?;
        }

        write!(self.output, "Enter vertex ID to set edges for: ")?;
        self.output.flush()?;
        let input = self.read_line()?.unwrap_or_default();
        let vertex = match self.parse_vertex(&input) {
            Some(vertex) => vertex,
            None => {
                writeln!(self.output, "Invalid vertex ID.")?;
                return Ok(());
            }
        };

        let mut neighbors = AdjacencyList::new();
        writeln!(
            self.output,
            "Enter neighbor IDs (one per line, -1 to finish):"
        )?;
        loop {
            write!(self.output, "  Neighbor ID: ")?;
            self.output.flush()?;

            let input = match self.read_line()? {
                Some(input) => input,
                None => break,
            };
            if input.is_empty() {
                continue;
            }
            if input.parse::<i64>() == Ok(-1) {
                break;
            }

            match self.parse_vertex(&input) {
                None => {
                    writeln!(self.output, "Invalid neighbor ID. Try again.")?
                }
                Some(u) if u == vertex => writeln!(
                    self.output,
                    "Skipping self-loop (not allowed in undirected graph)."
                )?,
                Some(u) => {
                    neighbors.push(u);
                    let label = self.graph.vertex_data(u)?;
                    writeln!(self.output, "Added neighbor {} ({})", u, label)?;
                }
            }
        }

        self.graph
            .set_edge_generator(vertex, move || neighbors.clone())?;
        writeln!(self.output, "Edges set for vertex {}", vertex)?;
        Ok(())
    }

    fn find_components(&mut self) -> Result<()> {
        if !self.ensure_not_empty()? {
            return Ok(());
        }

        let start = Instant::now();
        let components = self.graph.find_connected_components()?;
        let elapsed = start.elapsed();

        writeln!(
            self.output,
            "\nFound {} component(s) in {} ms",
            components.len(),
            elapsed.as_millis()
        )?;

        for (ix, comp) in components.iter().enumerate() {
            write!(
                self.output,
                "  Component {} ({} vertices): ",
                ix,
                comp.len()
            )?;
            for &v in comp {
                write!(self.output, "{} (\"{}\") ", v, self.graph.vertex_data(v)?)?;
            }
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn export_dot(&mut self) -> Result<()> {
        if !self.ensure_not_empty()? {
            return Ok(());
        }

        let file = File::create(&self.dot_path).with_context(|| {
            format!("Cannot open file {}", self.dot_path.display())
        })?;
        let mut writer = BufWriter::new(file);
        export::write_dot(&self.graph, &mut writer)?;
        writer.flush()?;

        info!(path = %self.dot_path.display(), "exported graph");
        writeln!(
            self.output,
            "Graph exported to {}",
            self.dot_path.display()
        )?;
        Ok(())
    }

    fn export_csv(&mut self) -> Result<()> {
        if !self.ensure_not_empty()? {
            return Ok(());
        }

        let components = self.graph.find_connected_components()?;
        let file = File::create(&self.csv_path).with_context(|| {
            format!("Cannot open file {}", self.csv_path.display())
        })?;
        let mut writer = BufWriter::new(file);
        export::write_components_csv(&self.graph, &components, &mut writer)?;
        writer.flush()?;

        info!(path = %self.csv_path.display(), "exported components");
        writeln!(
            self.output,
            "Results exported to {}",
            self.csv_path.display()
        )?;
        Ok(())
    }
}

fn main() -> Result<()> {
    let opt = Opt::from_args();
    init_tracing(opt.verbose);

    let graph = match &opt.gfa {
        Some(path) => {
            let graph = import::from_gfa_path(path).with_context(|| {
                format!("failed to load GFA from {}", path.display())
            })?;
            info!(
                path = %path.display(),
                vertices = graph.vertex_count(),
                "loaded graph"
            );
            graph
        }
        None => UndirectedGraph::new(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session {
        input: stdin.lock(),
        output: stdout.lock(),
        graph,
        dot_path: opt.dot,
        csv_path: opt.csv,
    };
    session.run()
}
