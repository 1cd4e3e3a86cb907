use std::{path::PathBuf, time::Instant};

use anyhow::bail;
use clap::Parser;
use rand::{rngs::StdRng, thread_rng, Rng, SeedableRng};
use spanning_paths::{
    load_graph, search::dijkstra::par_sssp_all_sources, utility::random_connected_edge_list,
    FileType, Graph, UndirectedGraph,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Runs dijkstra from every vertex in parallel and reports the average time
/// per search.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input graph. A random connected graph is generated if omitted.
    #[arg(short, long)]
    graph: Option<PathBuf>,
    /// Format of the input graph
    #[arg(short = 't', long, value_enum, default_value = "edge-list")]
    file_type: FileType,
    /// Number of vertices of the random graph
    #[arg(short = 'n', long, default_value_t = 1_000)]
    number_of_vertices: u32,
    /// Edges added on top of the random spanning tree
    #[arg(short = 'm', long, default_value_t = 4_000)]
    extra_edges: u32,
    #[arg(short = 'w', long, default_value_t = 100)]
    max_weight: u32,
    /// Seed for the random graph
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("spanning_paths=info,dijkstra_benchmark=info")),
        )
        .init();

    let args = Args::parse();

    let graph = match &args.graph {
        Some(path) => load_graph(path, args.file_type)?,
        None => {
            let seed = args.seed.unwrap_or_else(|| thread_rng().gen());
            info!(seed, "generating random graph");
            let mut rng = StdRng::seed_from_u64(seed);
            let edge_list = random_connected_edge_list(
                &mut rng,
                args.number_of_vertices,
                args.extra_edges,
                args.max_weight,
            );
            UndirectedGraph::from_edge_list(&edge_list)?
        }
    };
    if graph.number_of_vertices() == 0 {
        bail!("graph has no vertices");
    }

    let start = Instant::now();
    let trees = par_sssp_all_sources(&graph);
    let duration = start.elapsed();

    let unreachable_pairs: usize = trees.iter().map(|spt| spt.unreachable.len()).sum();
    let average = duration / graph.number_of_vertices();
    info!(
        searches = trees.len(),
        unreachable_pairs, "all sources dijkstra took {:?}", duration
    );
    println!(
        "Average dijkstra duration is {:?} over {} searches",
        average,
        trees.len()
    );

    Ok(())
}
