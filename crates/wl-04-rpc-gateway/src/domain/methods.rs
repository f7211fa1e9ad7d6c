//! Request envelope and per-method parameter shapes.
//!
//! Missing parameter fields decode to their zero values (empty string, empty
//! list, index 0) and are then rejected by the pipeline's own validation.

use serde::{Deserialize, Serialize};

pub const GENERATE_MERKLE_TREE: &str = "generateMerkleTree";
pub const GET_MERKLE_ROOT: &str = "getMerkleRoot";
pub const GET_MERKLE_PROOF: &str = "getMerkleProof";

/// `{"method": ..., "params": ...}`
#[derive(Debug, Clone, Deserialize)]
pub struct RpcRequest {
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub params: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateMerkleTreeParams {
    pub network: String,
    pub entries: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetMerkleRootParams {
    pub request_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetMerkleProofParams {
    pub root: String,
    pub index: i64,
}
