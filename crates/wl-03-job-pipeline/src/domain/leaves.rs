//! # Leaf Sets
//!
//! A submission converted into chain-specific leaves. Parsing happens at
//! submission time so bad input is rejected before anything is stored; the
//! worker only builds and commits.

use shared_types::Network;
use wl_01_merkle_engine::{ChainHasher, MerkleError, MerkleTree};
use wl_02_chain_hashers::{EvmHasher, EvmLeaf, LeafError, StarknetHasher, StarknetLeaf};

use super::entries::{parse_entries, Entry};
use super::errors::PipelineError;

/// Parsed leaves for one network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeafSet {
    Evm(Vec<EvmLeaf>),
    Starknet(Vec<StarknetLeaf>),
}

impl LeafSet {
    /// Parse raw `address:votingPower` strings for `network`.
    pub fn parse<S: AsRef<str>>(network: Network, raw: &[S]) -> Result<Self, PipelineError> {
        if raw.is_empty() {
            return Err(PipelineError::EmptyEntries);
        }
        let entries = parse_entries(raw)?;

        match network {
            Network::Evm => to_leaves(&entries, |e| EvmLeaf::new(&e.address, e.voting_power))
                .map(LeafSet::Evm),
            Network::Starknet => {
                to_leaves(&entries, |e| StarknetLeaf::new(&e.address, e.voting_power))
                    .map(LeafSet::Starknet)
            }
        }
    }

    pub fn network(&self) -> Network {
        match self {
            LeafSet::Evm(_) => Network::Evm,
            LeafSet::Starknet(_) => Network::Starknet,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            LeafSet::Evm(leaves) => leaves.len(),
            LeafSet::Starknet(leaves) => leaves.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build the tree with the network's hasher and ordering.
    pub fn build_tree(&self) -> Result<MerkleTree, MerkleError> {
        let sort = self.network().sorts_leaves();
        match self {
            LeafSet::Evm(leaves) => build(leaves, &EvmHasher, sort),
            LeafSet::Starknet(leaves) => build(leaves, &StarknetHasher, sort),
        }
    }
}

fn build<H: ChainHasher>(
    leaves: &[H::Leaf],
    hasher: &H,
    sort: bool,
) -> Result<MerkleTree, MerkleError> {
    MerkleTree::build(leaves, hasher, sort)
}

fn to_leaves<L, F>(entries: &[Entry], make: F) -> Result<Vec<L>, PipelineError>
where
    F: Fn(&Entry) -> Result<L, LeafError>,
{
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| make(entry).map_err(|e| leaf_error(index, e)))
        .collect()
}

fn leaf_error(index: usize, error: LeafError) -> PipelineError {
    match error {
        LeafError::InvalidAddress { address, reason } => PipelineError::InvalidAddress {
            index,
            address,
            reason,
        },
        LeafError::InvalidVotingPower {
            voting_power,
            max_bits,
        } => PipelineError::InvalidVotingPower {
            index,
            value: voting_power,
            reason: format!("exceeds {max_bits} bits"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{FieldValue, U256};

    const ETH: &str = "0x556B14CbdA79A36dC33FcD461a04A5BCb5dC2A70";

    #[test]
    fn test_empty_rejected() {
        let raw: [&str; 0] = [];
        assert_eq!(
            LeafSet::parse(Network::Evm, &raw),
            Err(PipelineError::EmptyEntries)
        );
    }

    #[test]
    fn test_network_selects_leaf_type() {
        let raw = [format!("{ETH}:42")];

        let evm = LeafSet::parse(Network::Evm, &raw).unwrap();
        assert!(matches!(evm, LeafSet::Evm(_)));
        assert_eq!(evm.network(), Network::Evm);

        let stark = LeafSet::parse(Network::Starknet, &raw).unwrap();
        assert_eq!(stark.len(), 1);
        match stark {
            LeafSet::Starknet(leaves) => assert_eq!(
                leaves[0].address_type,
                wl_02_chain_hashers::AddressType::Ethereum
            ),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_single_evm_entry_root_is_leaf() {
        let set = LeafSet::parse(Network::Evm, &[format!("{ETH}:21")]).unwrap();
        let tree = set.build_tree().unwrap();
        let want: FieldValue = "0xd8c29f38c935b4a569d48ffec67aa6247c90b6598fea89d7bd9415ac50ed7acc"
            .parse()
            .unwrap();
        assert_eq!(tree.root(), want);
    }

    #[test]
    fn test_evm_voting_power_overflow_is_validation() {
        let too_big = U256::one() << 96;
        let err = LeafSet::parse(Network::Evm, &[format!("{ETH}:{too_big}")]).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidVotingPower { index: 0, .. }));

        // Starknet splits into limbs and takes the full range.
        assert!(LeafSet::parse(Network::Starknet, &[format!("{ETH}:{too_big}")]).is_ok());
    }

    #[test]
    fn test_invalid_address_reports_index() {
        let raw = ["0x1:1", "0xzz:1"];
        let err = LeafSet::parse(Network::Evm, &raw).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidAddress { index: 1, .. }));
    }

    #[test]
    fn test_evm_root_ignores_submission_order() {
        let a = ["0x1:1", "0x2:2", "0x3:3"];
        let b = ["0x3:3", "0x1:1", "0x2:2"];
        let root_a = LeafSet::parse(Network::Evm, &a).unwrap().build_tree().unwrap().root();
        let root_b = LeafSet::parse(Network::Evm, &b).unwrap().build_tree().unwrap().root();
        assert_eq!(root_a, root_b);
    }

    #[test]
    fn test_starknet_root_depends_on_order() {
        let a = ["0x1:1", "0x2:2", "0x3:3"];
        let b = ["0x3:3", "0x1:1", "0x2:2"];
        let root_a = LeafSet::parse(Network::Starknet, &a)
            .unwrap()
            .build_tree()
            .unwrap()
            .root();
        let root_b = LeafSet::parse(Network::Starknet, &b)
            .unwrap()
            .build_tree()
            .unwrap()
            .root();
        assert_ne!(root_a, root_b);
    }
}
