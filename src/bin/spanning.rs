use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use itertools::Itertools;
use serde_json::json;
use spanning_paths::{
    graphs::{labels::VertexLabels, Graph},
    load_graph, mst_prim, sssp_dijkstra, FileType, MinimumSpanningTree, ShortestPathTree,
};
use tracing_subscriber::EnvFilter;

/// Computes a minimum spanning tree and shortest paths from one source vertex.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input graph
    #[arg(short, long)]
    graph: PathBuf,
    /// Format of the input graph
    #[arg(short = 't', long, value_enum, default_value = "edge-list")]
    file_type: FileType,
    /// Vertex both algorithms start from
    #[arg(short, long, default_value_t = 1)]
    source: u32,
    #[arg(short, long, value_enum, default_value = "both")]
    algorithm: Algorithm,
    /// How vertices are printed
    #[arg(short, long, value_enum, default_value = "letters")]
    labels: VertexLabels,
    /// Print the adjacency lists before running the algorithms
    #[arg(long)]
    show_graph: bool,
    /// Print the results as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
enum Algorithm {
    Prim,
    Dijkstra,
    Both,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("spanning_paths=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let graph = load_graph(&args.graph, args.file_type)?;

    if args.show_graph && !args.json {
        println!("{}", graph.display(args.labels));
    }

    let mst = match args.algorithm {
        Algorithm::Prim | Algorithm::Both => Some(mst_prim(&graph, args.source)?),
        Algorithm::Dijkstra => None,
    };
    let spt = match args.algorithm {
        Algorithm::Dijkstra | Algorithm::Both => Some(sssp_dijkstra(&graph, args.source)?),
        Algorithm::Prim => None,
    };

    if args.json {
        let output = json!({
            "vertices": graph.number_of_vertices(),
            "edges": graph.number_of_edges(),
            "source": args.source,
            "mst": mst,
            "shortest_paths": spt,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if let Some(mst) = &mst {
        print_mst(mst, args.labels);
    }
    if let Some(spt) = &spt {
        print_spt(spt, args.labels);
    }

    Ok(())
}

fn print_mst(mst: &MinimumSpanningTree, labels: VertexLabels) {
    println!("---- PRIM ALGORITHM ----");
    for edge in mst.edges() {
        println!(
            "{} - {} ({})",
            labels.label(edge.tail),
            labels.label(edge.head),
            edge.weight
        );
    }
    println!("Total weight of MST: {}", mst.total_weight);

    println!("Minimum spanning tree parent array:");
    for vertex in 1..=mst.tree.number_of_vertices() {
        match mst.tree.predecessor(vertex) {
            Some(parent) => println!("{} -> {}", labels.label(vertex), labels.label(parent)),
            None if vertex == mst.tree.source => println!("{} -> (root)", labels.label(vertex)),
            None => println!("{} -> (unreached)", labels.label(vertex)),
        }
    }
    println!();
}

fn print_spt(spt: &ShortestPathTree, labels: VertexLabels) {
    println!("---- DIJKSTRA ALGORITHM ----");
    for vertex in 1..=spt.tree.number_of_vertices() {
        match spt.path(vertex) {
            Some(path) => println!(
                "{}: distance {} via {}",
                labels.label(vertex),
                path.distance,
                path.vertices
                    .iter()
                    .map(|&vertex| labels.label(vertex))
                    .join(" -> ")
            ),
            None => println!("{}: unreachable", labels.label(vertex)),
        }
    }
    println!();
}
