//! dsep Engine — d-separation over directed graphs
//!
//! This crate classifies structural motifs, enumerates undirected simple
//! paths, decides whether a path is open given a conditioning set, and
//! answers conditional independence queries between node sets.

pub mod config;
pub mod error;
pub mod independence;
pub mod motifs;
pub mod openness;
pub mod paths;


pub use config::{ColliderRule, EngineConfig};
pub use error::EngineError;
pub use independence::{DSeparation, check_independence, unblocked_path_exists};
pub use motifs::{
    PathRole, classify, find_colliders, find_forks, is_collider, is_collider_node, is_fork,
};
pub use openness::{is_path_open, is_path_open_with};
pub use paths::{SimplePaths, enumerate_paths, enumerate_paths_with};
