//! # Schnorr Benchmarks
//!
//! Conditions:
//! - Single sign and verify, compressed and uncompressed keys
//! - Batches of independent verifications, sequential and parallel
//! - Full blind sessions (commitment, request, response, finalize)
//! - Adversarial inputs that fail early vs late

use cash_schnorr::{BlindRequester, BlindSigner, SchnorrSignature, SchnorrSigner};
use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::Duration;

struct Signed {
    pubkey: Vec<u8>,
    msg: [u8; 32],
    sig: SchnorrSignature,
}

fn fixtures(count: usize) -> Vec<Signed> {
    let signer = SchnorrSigner::new().expect("secp256k1 backend");
    let mut rng = StdRng::seed_from_u64(0xBEEF);
    (0..count)
        .map(|_| {
            let mut privkey = [0u8; 32];
            rng.fill(&mut privkey[1..]);
            privkey[1] |= 0x01;
            let msg: [u8; 32] = rng.gen();
            Signed {
                pubkey: signer.public_key(&privkey, true).expect("valid key"),
                msg,
                sig: signer.sign(&privkey, &msg).expect("valid key"),
            }
        })
        .collect()
}

pub fn bench_sign(c: &mut Criterion) {
    let signer = SchnorrSigner::new().expect("secp256k1 backend");
    let mut group = c.benchmark_group("schnorr-sign");
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("sign", |b| {
        b.iter(|| black_box(signer.sign(&[0x01u8; 32], &[0x00u8; 32])))
    });
    group.bench_function("public_key_compressed", |b| {
        b.iter(|| black_box(signer.public_key(&[0x01u8; 32], true)))
    });

    group.finish();
}

pub fn bench_verify(c: &mut Criterion) {
    let signer = SchnorrSigner::new().expect("secp256k1 backend");
    let mut group = c.benchmark_group("schnorr-verify");
    group.measurement_time(Duration::from_secs(5));

    let signed = &fixtures(1)[0];
    let long = signer.public_key(&[0x01u8; 32], false).expect("valid key");
    let long_sig = signer.sign(&[0x01u8; 32], &signed.msg).expect("valid key");

    group.bench_function("verify_compressed", |b| {
        b.iter(|| black_box(signer.verify(&signed.pubkey, signed.sig.as_bytes(), &signed.msg)))
    });
    group.bench_function("verify_uncompressed", |b| {
        b.iter(|| black_box(signer.verify(&long, long_sig.as_bytes(), &signed.msg)))
    });

    // s >= n is rejected before any curve arithmetic
    let mut high_s = signed.sig.to_bytes();
    high_s[32..].fill(0xFF);
    group.bench_function("verify_reject_high_s", |b| {
        b.iter(|| black_box(signer.verify(&signed.pubkey, &high_s, &signed.msg)))
    });

    let mut bad_r = signed.sig.to_bytes();
    bad_r[0] ^= 0x01;
    group.bench_function("verify_reject_bad_r", |b| {
        b.iter(|| black_box(signer.verify(&signed.pubkey, &bad_r, &signed.msg)))
    });

    group.finish();
}

pub fn bench_batch_verify(c: &mut Criterion) {
    let signer = SchnorrSigner::new().expect("secp256k1 backend");
    let mut group = c.benchmark_group("schnorr-batch");
    group.measurement_time(Duration::from_secs(10));

    for size in [10usize, 100] {
        let batch = fixtures(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), &batch, |b, batch| {
            b.iter(|| {
                batch
                    .iter()
                    .filter(|s| signer.verify(&s.pubkey, s.sig.as_bytes(), &s.msg) == Ok(true))
                    .count()
            })
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &batch, |b, batch| {
            b.iter(|| {
                batch
                    .par_iter()
                    .filter(|s| signer.verify(&s.pubkey, s.sig.as_bytes(), &s.msg) == Ok(true))
                    .count()
            })
        });
    }

    group.finish();
}

pub fn bench_blind_session(c: &mut Criterion) {
    let privkey = [0x4Eu8; 32];
    let msg = [0x77u8; 32];
    let pubkey = cash_schnorr::public_key(&privkey, true).expect("valid key");
    let mut group = c.benchmark_group("schnorr-blind");
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("signer_open", |b| b.iter(|| black_box(BlindSigner::new())));

    let signer = BlindSigner::new().expect("secp256k1 backend");
    let commitment = signer.get_commitment();
    group.bench_function("requester_blind", |b| {
        b.iter(|| black_box(BlindRequester::new(&pubkey, &commitment, &msg)))
    });

    group.bench_function("full_session_checked", |b| {
        b.iter(|| {
            let signer = BlindSigner::new().expect("secp256k1 backend");
            let requester =
                BlindRequester::new(&pubkey, &signer.get_commitment(), &msg).expect("valid points");
            let partial = signer
                .sign(&privkey, &requester.get_request())
                .expect("fresh session");
            black_box(requester.finalize(&partial, true))
        })
    });

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_sign(c);
    bench_verify(c);
    bench_batch_verify(c);
    bench_blind_session(c);
}
