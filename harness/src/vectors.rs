//! The JSON shape the harness reads: a starting chain state and the candidate blocks to apply
//! against it in order.

use std::path::Path;

use btc_consensus_core::{Block, ChainState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct VectorFile {
    pub genesis: ChainState,
    pub blocks: Vec<Block>,
}

impl VectorFile {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|err| anyhow::anyhow!("failed to read {}: {err}", path.display()))?;
        let vectors = serde_json::from_str(&contents)
            .map_err(|err| anyhow::anyhow!("failed to parse {}: {err}", path.display()))?;
        Ok(vectors)
    }
}
