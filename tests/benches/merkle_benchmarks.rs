//! # Merkle Whitelist Benchmarks
//!
//! | Area | Operation | Expectation |
//! |------|-----------|-------------|
//! | wl-01 Engine | tree build | linear in leaf count |
//! | wl-01 Engine | proof | logarithmic in leaf count |
//! | wl-02 Hashers | leaf hash | keccak much cheaper than pedersen |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use primitive_types::U256;
use std::time::Duration;
use wl_01_merkle_engine::{ChainHasher, MerkleTree};
use wl_02_chain_hashers::{EvmHasher, EvmLeaf, StarknetHasher, StarknetLeaf};

fn evm_leaves(count: usize) -> Vec<EvmLeaf> {
    (1..=count)
        .map(|i| EvmLeaf::new(&format!("0x{i:040x}"), U256::from(i)))
        .collect::<Result<_, _>>()
        .unwrap()
}

fn starknet_leaves(count: usize) -> Vec<StarknetLeaf> {
    (1..=count)
        .map(|i| StarknetLeaf::new(&format!("0x{i:x}"), U256::from(i)))
        .collect::<Result<_, _>>()
        .unwrap()
}

// ============================================================================
// wl-01: Tree construction
// ============================================================================

fn bench_tree_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("wl-01-tree-build");
    group.measurement_time(Duration::from_secs(10));

    for size in [16usize, 256, 4096] {
        let leaves = evm_leaves(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("evm_sorted", size), &leaves, |b, leaves| {
            b.iter(|| black_box(MerkleTree::build(leaves, &EvmHasher, true).unwrap()))
        });
    }

    for size in [16usize, 256] {
        let leaves = starknet_leaves(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("starknet", size), &leaves, |b, leaves| {
            b.iter(|| black_box(MerkleTree::build(leaves, &StarknetHasher, false).unwrap()))
        });
    }

    group.finish();
}

// ============================================================================
// wl-01: Proofs and wire format
// ============================================================================

fn bench_proofs(c: &mut Criterion) {
    let mut group = c.benchmark_group("wl-01-proofs");
    let tree = MerkleTree::build(&evm_leaves(4096), &EvmHasher, true).unwrap();
    let encoded = tree.to_json().unwrap();

    group.bench_function("proof_4096", |b| {
        b.iter(|| black_box(tree.proof(black_box(2047)).unwrap()))
    });
    group.bench_function("decode_4096", |b| {
        b.iter(|| black_box(MerkleTree::from_json(&encoded).unwrap()))
    });

    group.finish();
}

// ============================================================================
// wl-02: Leaf hashing
// ============================================================================

fn bench_leaf_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("wl-02-leaf-hash");
    let evm = evm_leaves(1).remove(0);
    let starknet = starknet_leaves(1).remove(0);

    group.bench_function("keccak", |b| b.iter(|| black_box(EvmHasher.leaf_hash(&evm))));
    group.bench_function("pedersen", |b| {
        b.iter(|| black_box(StarknetHasher.leaf_hash(&starknet)))
    });

    group.finish();
}

criterion_group!(benches, bench_tree_build, bench_proofs, bench_leaf_hash);
criterion_main!(benches);
