use std::{fs::File, io::BufWriter, path::PathBuf, time::Instant};

use clap::Parser;
use spanning_paths::{load_graph, FileType};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Reading a .bincode file is way faster than parsing an edge list
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Infile in edge-list format
    #[arg(short = 'e', long)]
    edge_list: PathBuf,
    /// Outfile for the bincode graph
    #[arg(short = 'b', long)]
    graph_bincode: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new("spanning_paths=info,edge_list_to_bincode=info")
            }),
        )
        .init();

    let args = Args::parse();

    let start = Instant::now();
    let graph = load_graph(&args.edge_list, FileType::EdgeList)?;
    info!("reading edge list took {:?}", start.elapsed());

    let start = Instant::now();
    let writer = BufWriter::new(File::create(&args.graph_bincode)?);
    bincode::serialize_into(writer, &graph)?;
    info!("writing bincode took {:?}", start.elapsed());

    Ok(())
}
