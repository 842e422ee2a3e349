//! Conditional independence queries via d-separation

use crate::config::EngineConfig;
use crate::error::Result;
use crate::openness::is_path_open_with;
use crate::paths::SimplePaths;
use dsep_core::{Graph, NodeId, Path};
use std::collections::HashSet;

/// d-separation engine carrying the settings for every query.
#[derive(Debug, Clone, Default)]
pub struct DSeparation {
    config: EngineConfig,
}

impl DSeparation {
    pub fn new(config: EngineConfig) -> Self {
        DSeparation { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Check whether `path` is open given `conditioning`.
    pub fn is_path_open(
        &self,
        graph: &Graph,
        path: &[NodeId],
        conditioning: &HashSet<NodeId>,
    ) -> Result<bool> {
        is_path_open_with(graph, path, conditioning, &self.config)
    }

    /// The first open path between `x` and `y`, if any.
    pub fn open_path(
        &self,
        graph: &Graph,
        x: &str,
        y: &str,
        conditioning: &HashSet<NodeId>,
    ) -> Result<Option<Path>> {
        let paths = SimplePaths::new(graph, x, y)?.with_limit(self.config.max_paths);
        for path in paths {
            let path = path?;
            if self.is_path_open(graph, &path, conditioning)? {
                return Ok(Some(path));
            }
        }
        Ok(None)
    }

    /// Check whether some path between `x` and `y` is open given
    /// `conditioning`. No path at all means no open path.
    pub fn unblocked_path_exists(
        &self,
        graph: &Graph,
        x: &str,
        y: &str,
        conditioning: &HashSet<NodeId>,
    ) -> Result<bool> {
        ensure_known(graph, conditioning.iter())?;
        Ok(self.open_path(graph, x, y, conditioning)?.is_some())
    }

    /// An open path joining some `x` in `xs` to some `y` in `ys`, or `None`
    /// when the two sets are d-separated by `conditioning`.
    ///
    /// Pairs are tried in order and the search stops at the first witness.
    pub fn find_witness<S: AsRef<str>>(
        &self,
        graph: &Graph,
        xs: &[S],
        ys: &[S],
        conditioning: &HashSet<NodeId>,
    ) -> Result<Option<Path>> {
        ensure_known(graph, xs.iter().chain(ys))?;
        ensure_known(graph, conditioning.iter())?;

        for x in xs {
            for y in ys {
                let (x, y) = (x.as_ref(), y.as_ref());
                if let Some(path) = self.open_path(graph, x, y, conditioning)? {
                    tracing::debug!("{} and {} are connected via {:?}", x, y, path);
                    return Ok(Some(path));
                }
            }
        }
        Ok(None)
    }

    /// Check whether every node of `xs` is independent of every node of `ys`
    /// given `conditioning`.
    pub fn check_independence<S: AsRef<str>>(
        &self,
        graph: &Graph,
        xs: &[S],
        ys: &[S],
        conditioning: &HashSet<NodeId>,
    ) -> Result<bool> {
        let independent = self.find_witness(graph, xs, ys, conditioning)?.is_none();
        tracing::debug!(
            "Independence of {} x {} nodes given {} nodes: {}",
            xs.len(),
            ys.len(),
            conditioning.len(),
            independent
        );
        Ok(independent)
    }
}

fn ensure_known<I, S>(graph: &Graph, names: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for name in names {
        graph.node(name.as_ref())?;
    }
    Ok(())
}

/// Check whether an open path joins `x` and `y` given `conditioning`, with
/// the default engine settings.
pub fn unblocked_path_exists(
    graph: &Graph,
    x: &str,
    y: &str,
    conditioning: &HashSet<NodeId>,
) -> Result<bool> {
    DSeparation::default().unblocked_path_exists(graph, x, y, conditioning)
}

/// Check whether `xs` and `ys` are independent given `conditioning`, with
/// the default engine settings.
pub fn check_independence<S: AsRef<str>>(
    graph: &Graph,
    xs: &[S],
    ys: &[S],
    conditioning: &HashSet<NodeId>,
) -> Result<bool> {
    DSeparation::default().check_independence(graph, xs, ys, conditioning)
}
