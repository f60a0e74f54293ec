//! Parameters of a storyboard run.

use std::path::PathBuf;

use crate::{render::Format, storyboard::Accumulation};

pub const CREATOR_COUNT: usize = 10;
pub const PEER_COUNT: usize = 4;
/// The Graphviz executable performing layout and rasterization.
pub const ENGINE: &str = "dot";

#[derive(Clone, Debug, PartialEq)]
pub struct DiagramConfig {
    pub creator_count: usize,
    pub peer_count: usize,
    /// Where the DOT sources and the images are written.
    pub output_dir: PathBuf,
    pub engine: String,
    pub format: Format,
    pub accumulation: Accumulation,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            creator_count: CREATOR_COUNT,
            peer_count: PEER_COUNT,
            output_dir: PathBuf::from("."),
            engine: ENGINE.to_owned(),
            format: Format::Png,
            accumulation: Accumulation::Replay,
        }
    }
}
