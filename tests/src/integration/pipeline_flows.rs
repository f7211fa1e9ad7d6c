//! # Pipeline Flows
//!
//! Submissions through the wired node down to the store and back out as
//! proofs, checked against trees built directly with the engine and hashers.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use node_runtime::{NodeConfig, WhitelistNode};
    use primitive_types::U256;
    use shared_types::FieldValue;
    use wl_01_merkle_engine::{ChainHasher, MerkleTree};
    use wl_02_chain_hashers::{EvmHasher, EvmLeaf, StarknetHasher, StarknetLeaf};
    use wl_03_job_pipeline::{
        InMemoryWhitelistStore, PipelineError, WhitelistApi, WhitelistService, WhitelistStore,
    };

    use crate::integration::{numbered_entries, poll_root};

    const STARKNET_20_ROOT: &str =
        "0xbfddde52fc7d24a63693fb4dfa257571238e2d654aecbe6bc26f067e770bc5";

    fn node_api() -> Arc<dyn WhitelistApi> {
        WhitelistNode::build(NodeConfig::default()).unwrap().api()
    }

    async fn submit_and_wait(api: &dyn WhitelistApi, network: &str, entries: Vec<String>) -> FieldValue {
        let id = api.submit(network, entries).await.unwrap();
        poll_root(api, &id.to_string()).await.expect("job did not complete")
    }

    // =========================================================================
    // STARKNET
    // =========================================================================

    #[tokio::test]
    async fn test_starknet_twenty_entries_match_known_root() {
        let api = node_api();
        let root = submit_and_wait(api.as_ref(), "starknet", numbered_entries(20)).await;
        assert_eq!(root.to_string(), STARKNET_20_ROOT);

        let proof = api.get_proof(STARKNET_20_ROOT, 2).await.unwrap();
        assert_eq!(proof.len(), 5);
        assert!(proof[0].to_string().starts_with("0x3eca1772"));
        assert!(proof[1].to_string().starts_with("0x1919a163"));
        assert!(proof[4].to_string().starts_with("0x2f5a19d2"));
    }

    #[tokio::test]
    async fn test_starknet_pipeline_matches_direct_build() {
        let api = node_api();
        let raw = numbered_entries(7);
        let root = submit_and_wait(api.as_ref(), "starknet", raw.clone()).await;

        let leaves: Vec<StarknetLeaf> = (1..=7u64)
            .map(|i| StarknetLeaf::new(&format!("0x{i:x}"), U256::from(i)).unwrap())
            .collect();
        let direct = MerkleTree::build(&leaves, &StarknetHasher, false).unwrap();
        assert_eq!(root, direct.root());

        for ordinal in 0..raw.len() {
            assert_eq!(
                api.get_proof(&root.to_string(), ordinal as i64).await.unwrap(),
                direct.proof(ordinal).unwrap()
            );
        }
    }

    // =========================================================================
    // EVM
    // =========================================================================

    #[tokio::test]
    async fn test_evm_single_entry_root_is_leaf_hash() {
        let api = node_api();
        let root = submit_and_wait(
            api.as_ref(),
            "evm",
            vec!["0x556B14CbdA79A36dC33FcD461a04A5BCb5dC2A70:21".to_string()],
        )
        .await;

        assert_eq!(
            root.to_string(),
            "0xd8c29f38c935b4a569d48ffec67aa6247c90b6598fea89d7bd9415ac50ed7acc"
        );
        assert!(api.get_proof(&root.to_string(), 0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_evm_every_proof_folds_to_root() {
        let api = node_api();
        let addresses: Vec<String> = (1..=13u64).map(|i| format!("0x{:040x}", i * 7919)).collect();
        let raw: Vec<String> = addresses
            .iter()
            .enumerate()
            .map(|(i, a)| format!("{a}:{}", 1000 + i))
            .collect();
        let root = submit_and_wait(api.as_ref(), "evm", raw).await;

        for (ordinal, address) in addresses.iter().enumerate() {
            let leaf = EvmLeaf::new(address, U256::from(1000 + ordinal)).unwrap();
            let proof = api.get_proof(&root.to_string(), ordinal as i64).await.unwrap();
            let folded = proof
                .iter()
                .fold(EvmHasher.leaf_hash(&leaf), |acc, sibling| {
                    EvmHasher.node_hash(&acc, sibling)
                });
            assert_eq!(folded, root, "ordinal {ordinal}");
        }
    }

    #[tokio::test]
    async fn test_evm_root_ignores_submission_order() {
        let api = node_api();
        let mut raw: Vec<String> = (1..=6u64).map(|i| format!("0x{i:040x}:{i}")).collect();
        let first = submit_and_wait(api.as_ref(), "evm", raw.clone()).await;

        raw.reverse();
        let second = submit_and_wait(api.as_ref(), "evm", raw).await;
        assert_eq!(first, second);
    }

    // =========================================================================
    // STORAGE AND IDEMPOTENCE
    // =========================================================================

    #[tokio::test]
    async fn test_repeated_batches_store_one_tree() {
        let store = Arc::new(InMemoryWhitelistStore::new());
        let service = WhitelistService::new(store.clone());

        let a = submit_and_wait(&service, "starknet", numbered_entries(5)).await;
        let b = submit_and_wait(&service, "starknet", numbered_entries(5)).await;

        assert_eq!(a, b);
        assert_eq!(store.job_count(), 2);
        assert_eq!(store.tree_count(), 1);

        let bytes = store.find_tree(&a).await.unwrap().unwrap();
        let tree = MerkleTree::from_json(&bytes).unwrap();
        assert_eq!(tree.root(), a);
        assert_eq!(tree.leaf_count(), 5);
    }

    #[tokio::test]
    async fn test_rejected_batches_write_nothing() {
        let store = Arc::new(InMemoryWhitelistStore::new());
        let service = WhitelistService::new(store.clone());

        let err = service
            .submit("evm", vec!["0x1:1".to_string(), "0x2".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::MalformedEntry { index: 1, .. }));

        let err = service.submit("solana", numbered_entries(2)).await.unwrap_err();
        assert!(matches!(err, PipelineError::UnsupportedNetwork { .. }));

        let err = service.submit("evm", Vec::new()).await.unwrap_err();
        assert_eq!(err, PipelineError::EmptyEntries);

        assert_eq!(store.job_count(), 0);
        assert_eq!(store.tree_count(), 0);
    }

    #[tokio::test]
    async fn test_lookups_for_unknown_ids_and_roots() {
        let api = node_api();

        assert!(matches!(
            api.get_root("6f1c1c3e-4c1f-4a3a-9b1e-2f0a9bf1cf91").await,
            Err(PipelineError::JobNotFound { .. })
        ));
        assert!(matches!(
            api.get_proof("0x1234", 0).await,
            Err(PipelineError::TreeNotFound { .. })
        ));

        let root = submit_and_wait(api.as_ref(), "starknet", numbered_entries(3)).await;
        assert!(matches!(
            api.get_proof(&root.to_string(), 3).await,
            Err(PipelineError::NoSuchLeaf { index: 3 })
        ));
        assert!(matches!(
            api.get_proof(&root.to_string(), -1).await,
            Err(PipelineError::NoSuchLeaf { index: -1 })
        ));
    }
}
