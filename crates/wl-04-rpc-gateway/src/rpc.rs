//! Method dispatch.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;
use wl_03_job_pipeline::WhitelistApi;

use crate::domain::error::{ApiError, ApiResult};
use crate::domain::methods::{
    GenerateMerkleTreeParams, GetMerkleProofParams, GetMerkleRootParams, GENERATE_MERKLE_TREE,
    GET_MERKLE_PROOF, GET_MERKLE_ROOT,
};

/// Whitelist RPC handlers over a [`WhitelistApi`].
#[derive(Clone)]
pub struct WhitelistRpc {
    api: Arc<dyn WhitelistApi>,
}

impl WhitelistRpc {
    pub fn new(api: Arc<dyn WhitelistApi>) -> Self {
        Self { api }
    }

    /// Route a method name to its handler.
    pub async fn route_method(&self, method: &str, params: Option<Value>) -> ApiResult<Value> {
        debug!(method, "Dispatching RPC call");
        match method {
            GENERATE_MERKLE_TREE => self.generate_merkle_tree(parse_params(params)?).await,
            GET_MERKLE_ROOT => self.get_merkle_root(parse_params(params)?).await,
            GET_MERKLE_PROOF => self.get_merkle_proof(parse_params(params)?).await,
            _ => Err(ApiError::method_not_found(method)),
        }
    }

    /// `generateMerkleTree` -> job id
    pub async fn generate_merkle_tree(&self, params: GenerateMerkleTreeParams) -> ApiResult<Value> {
        let id = self.api.submit(&params.network, params.entries).await?;
        Ok(Value::String(id.to_string()))
    }

    /// `getMerkleRoot` -> hex root, or `null` while pending
    pub async fn get_merkle_root(&self, params: GetMerkleRootParams) -> ApiResult<Value> {
        let root = self.api.get_root(&params.request_id).await?;
        Ok(root.map_or(Value::Null, |r| Value::String(r.to_string())))
    }

    /// `getMerkleProof` -> hex siblings, leaf to root
    pub async fn get_merkle_proof(&self, params: GetMerkleProofParams) -> ApiResult<Value> {
        let proof = self.api.get_proof(&params.root, params.index).await?;
        Ok(Value::Array(
            proof.iter().map(|node| Value::String(node.to_string())).collect(),
        ))
    }
}

fn parse_params<T: DeserializeOwned>(params: Option<Value>) -> ApiResult<T> {
    let params = params.ok_or_else(|| ApiError::invalid_params("missing params"))?;
    serde_json::from_value(params).map_err(ApiError::invalid_params)
}
