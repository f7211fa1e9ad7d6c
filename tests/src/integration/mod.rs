//! Cross-crate integration flows.

pub mod pipeline_flows;
pub mod rpc_flows;

use std::time::Duration;

use shared_types::FieldValue;
use wl_03_job_pipeline::WhitelistApi;

/// `count` entries `0x<i>:<i>` for `i` in `1..=count`.
pub fn numbered_entries(count: u64) -> Vec<String> {
    (1..=count).map(|i| format!("0x{i:x}:{i}")).collect()
}

/// Poll `get_root` until the job commits, or `None` after ~2s.
pub async fn poll_root(api: &dyn WhitelistApi, request_id: &str) -> Option<FieldValue> {
    for _ in 0..200 {
        if let Ok(Some(root)) = api.get_root(request_id).await {
            return Some(root);
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    None
}
