//! CLI command implementations

use dsep_core::{Graph, NodeId, Path, example_graph, node_set};
use dsep_engine::{
    DSeparation, EngineConfig, classify, enumerate_paths_with, find_colliders, find_forks,
    is_collider,
};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

/// Engine with settings from `config`, or the defaults.
pub fn load_engine(config: Option<&std::path::Path>) -> anyhow::Result<DSeparation> {
    let config = match config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    Ok(DSeparation::new(config))
}

/// Graph from `--edge` flags, or the example graph when none were given.
pub fn build_graph(edges: &[(String, String)]) -> Graph {
    if edges.is_empty() {
        tracing::debug!("No edges given, using the example graph");
        return example_graph();
    }
    let graph = Graph::from_edges(edges.iter().map(|(a, b)| (a.as_str(), b.as_str())));
    tracing::info!("Built graph: {} nodes, {} edges", graph.node_count(), graph.edge_count());
    graph
}

fn join(nodes: &BTreeSet<NodeId>) -> String {
    nodes.iter().map(NodeId::as_str).collect::<Vec<_>>().join(", ")
}

fn show_path(path: &[NodeId]) -> String {
    let names: Vec<&str> = path.iter().map(NodeId::as_str).collect();
    format!("[{}]", names.join(", "))
}

/// Path with the role of every interior node, e.g. `B - A (collider) - E`.
fn describe_path(graph: &Graph, path: &[NodeId]) -> anyhow::Result<String> {
    let mut out = String::new();
    for (i, node) in path.iter().enumerate() {
        if i > 0 {
            out.push_str(" - ");
        }
        out.push_str(node.as_str());
        if i > 0 && i + 1 < path.len() {
            let role = classify(
                graph,
                path[i - 1].as_str(),
                node.as_str(),
                path[i + 1].as_str(),
            )?;
            out.push_str(&format!(" ({role:?})").to_lowercase());
        }
    }
    Ok(out)
}

/// Every query on the burglary example graph, whatever `--edge` says.
pub fn example(engine: &DSeparation) -> anyhow::Result<()> {
    let graph = &example_graph();
    let forks = find_forks(graph)?;
    println!("The graph contains the following forks: {{{}}}", join(&forks));
    let colliders = find_colliders(graph)?;
    println!("The graph contains the following colliders: {{{}}}", join(&colliders));

    let paths = enumerate_paths_with(graph, "B", "R", engine.config())?;
    let shown: Vec<String> = paths.iter().map(|p| show_path(p)).collect();
    println!("Undirected paths from B to R in the graph: [{}]", shown.join(", "));

    let path: Path = ["B", "A", "E"].into_iter().map(NodeId::from).collect();
    println!(
        "Is A a collider for the path {}? {}",
        show_path(&path),
        is_collider(graph, "A", &path)?
    );
    let nothing = HashSet::new();
    println!(
        "Is path {} open? {}",
        show_path(&path),
        engine.is_path_open(graph, &path, &nothing)?
    );

    let given = node_set(["A", "E"]);
    println!(
        "Is there a path from B to R not blocked by {{A, E}}? {}",
        engine.unblocked_path_exists(graph, "B", "R", &given)?
    );
    println!(
        "Are nodes B and R independent given nodes {{A, E}}? {}",
        engine.check_independence(graph, &["B"], &["R"], &given)?
    );
    Ok(())
}

pub fn motifs(graph: &Graph) -> anyhow::Result<()> {
    println!("forks: {{{}}}", join(&find_forks(graph)?));
    println!("colliders: {{{}}}", join(&find_colliders(graph)?));
    Ok(())
}

pub fn paths(graph: &Graph, engine: &DSeparation, from: &str, to: &str) -> anyhow::Result<()> {
    let paths = enumerate_paths_with(graph, from, to, engine.config())?;
    tracing::info!("{} paths between {} and {}", paths.len(), from, to);
    for path in &paths {
        println!("{}", describe_path(graph, path)?);
    }
    Ok(())
}

/// Result of `dsep check --json`.
#[derive(Debug, Serialize)]
struct IndependenceReport<'a> {
    x: &'a [String],
    y: &'a [String],
    given: &'a [String],
    independent: bool,
    /// An open path proving dependence.
    witness: Option<Path>,
}

pub fn check(
    graph: &Graph,
    engine: &DSeparation,
    xs: &[String],
    ys: &[String],
    given: &[String],
    json: bool,
) -> anyhow::Result<()> {
    let conditioning = node_set(given.iter().map(String::as_str));
    let witness = engine.find_witness(graph, xs, ys, &conditioning)?;

    if json {
        let report = IndependenceReport {
            x: xs,
            y: ys,
            given,
            independent: witness.is_none(),
            witness,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match witness {
        None => println!(
            "{{{}}} and {{{}}} are independent given {{{}}}",
            xs.join(", "),
            ys.join(", "),
            given.join(", ")
        ),
        Some(path) => println!(
            "{{{}}} and {{{}}} are dependent given {{{}}}: {}",
            xs.join(", "),
            ys.join(", "),
            given.join(", "),
            describe_path(graph, &path)?
        ),
    }
    Ok(())
}
