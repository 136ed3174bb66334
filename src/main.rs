use anyhow::{Context, Result};
use clap::Parser;
use cluster_router_network::{data, storage, Config, Network};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "cluster-router-network",
    about = "Cluster hosts behind gateway routers and answer shortest-path queries"
)]
struct Cli {
    /// Path to the network description (stdin when omitted)
    #[clap(long)]
    input: Option<PathBuf>,

    /// JSON configuration file
    #[clap(long)]
    config: Option<PathBuf>,

    /// Number of clusters, overriding the input
    #[clap(long)]
    clusters: Option<usize>,

    /// Directory for the topology report
    #[clap(long)]
    output_dir: Option<PathBuf>,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long)]
    threads: Option<usize>,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    let mut config = match &args.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };
    if let Some(threads) = args.threads {
        config.threads = threads;
    }
    if args.clusters.is_some() {
        config.cluster_count = args.clusters;
    }

    let num_threads = config.effective_threads();
    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    // 1. Load the description
    let input = data::load_network_input(args.input.as_deref())?;
    let cluster_count = config.cluster_count.unwrap_or(input.cluster_count);

    // 2. Build the network
    let mut network = Network::new(&config);
    network.build_host_graph(input.host_links)?;
    network
        .partition_and_register_routers(cluster_count)
        .with_context(|| format!("clustering into {cluster_count} groups"))?;
    network.build_router_graph(input.router_links)?;

    // 3. Answer queries
    let answers = network.query_batch(&input.queries)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for answer in &answers {
        writeln!(out, "{answer}")?;
    }
    out.flush()?;

    // 4. Save the report if requested
    if let Some(dir) = &args.output_dir {
        storage::save_topology(&network, dir)?;
    }

    log::info!("Answered {} queries", answers.len());

    Ok(())
}
