// Copyright 2025 Irreducible Inc.

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::{thread_rng, RngCore};
use sha2_crypto::Digest;

const N: usize = 1 << 16;

fn bench_sha256(c: &mut Criterion) {
	let mut group = c.benchmark_group("SHA-256");

	let mut rng = thread_rng();
	let mut data = vec![0u8; N];
	rng.fill_bytes(&mut data);

	group.throughput(Throughput::Bytes(N as u64));
	group.bench_function("sha256", |bench| bench.iter(|| fips180_sha2::sha256(&data)));
	group.bench_function("sha256-RustCrypto", |bench| {
		bench.iter(|| sha2_crypto::Sha256::digest(&data))
	});

	group.finish()
}

fn bench_sha512(c: &mut Criterion) {
	let mut group = c.benchmark_group("SHA-512");

	let mut rng = thread_rng();
	let mut data = vec![0u8; N];
	rng.fill_bytes(&mut data);

	group.throughput(Throughput::Bytes(N as u64));
	group.bench_function("sha512", |bench| bench.iter(|| fips180_sha2::sha512(&data)));
	group.bench_function("sha512-RustCrypto", |bench| {
		bench.iter(|| sha2_crypto::Sha512::digest(&data))
	});

	group.finish()
}

criterion_group!(hash, bench_sha256, bench_sha512);
criterion_main!(hash);
