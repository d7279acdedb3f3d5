use {
    std::{
        fs::File,
        io::{self, BufRead, BufReader, Write},
        path::PathBuf,
    },
    anyhow::{bail, Context, Result},
    clap::{Parser, ValueEnum},
    log::{info, Level},
    kruskal_forest::{Config, Graph, Kruskal, Linking, LogObserver},
};

/// Minimum spanning forest of a weighted edge list
///
/// Reads one `source target weight` edge per line. Blank lines and everything after a `#`
/// are ignored. Prints the accepted edges, the total weight and the amount of trees.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Edge list file (stdin if not specified)
    #[clap(value_name = "FILE")]
    input: Option<PathBuf>,

    /// How the union-find links two trees
    #[clap(long, value_enum, default_value = "by-rank")]
    linking: LinkingArg,

    /// Disable path compression in the union-find
    #[clap(long)]
    no_compression: bool,

    /// Process every edge instead of stopping once a spanning tree is complete
    #[clap(long)]
    all_edges: bool,

    /// Additional vertex without edges, may be repeated
    #[clap(long = "vertex", value_name = "ID")]
    vertices: Vec<String>,

    /// Log more, repeat for every step and the parent map (-vvv)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LinkingArg {
    Simple,
    ByRank,
}

impl From<LinkingArg> for Linking {
    fn from(arg: LinkingArg) -> Self {
        match arg {
            LinkingArg::Simple => Linking::Simple,
            LinkingArg::ByRank => Linking::ByRank,
        }
    }
}

fn parse_edges<R: BufRead>(reader: R, graph: &mut Graph<String, f64>) -> Result<()> {
    for (number, line) in reader.lines().enumerate() {
        let number = number + 1;
        let line = line.with_context(|| format!("Failed to read line {number}"))?;
        let line = match line.split('#').next() {
            Some(content) => content.trim(),
            None => continue,
        };

        if line.is_empty() {
            continue;
        }

        let mut fields = line.split_whitespace();
        match (fields.next(), fields.next(), fields.next(), fields.next()) {
            (Some(source), Some(target), Some(weight), None) => {
                let weight: f64 = weight
                    .parse()
                    .with_context(|| format!("Line {number}: invalid weight {weight:?}"))?;
                graph.add_edge(source.to_string(), target.to_string(), weight);
            }
            _ => bail!("Line {number}: expected `source target weight`, got {line:?}"),
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut graph = Graph::new();
    match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            parse_edges(BufReader::new(file), &mut graph)?;
        }
        None => parse_edges(io::stdin().lock(), &mut graph)?,
    }
    for vertex in args.vertices {
        graph.add_vertex(vertex);
    }

    info!(
        "Read {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let config = Config {
        linking: args.linking.into(),
        path_compression: !args.no_compression,
    };
    let forest = Kruskal::new()
        .config(config)
        .stop_when_spanning(!args.all_edges)
        .run_with_observer(&graph, &mut LogObserver::new(Level::Debug))
        .context("Invalid graph")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for edge in forest.edges() {
        writeln!(out, "{}\t{}\t{}", edge.source, edge.target, edge.weight)?;
    }
    writeln!(out, "total\t{}", forest.total_weight())?;
    writeln!(out, "trees\t{}", forest.tree_count())?;

    Ok(())
}
