use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use crypto_toolkit::{
    algorithms::symmetric_ciphers, AsymmetricCipher, RSAWrapper,
};
use std::time::Duration;

fn bench_key_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("RSA Key Generation");
    group
        .sample_size(10)
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(10));

    let rsa = RSAWrapper::default();
    for bits in [1024usize, 2048] {
        group.bench_with_input(BenchmarkId::from_parameter(bits), &bits, |b, &bits| {
            b.iter(|| rsa.generate_key_pair(bits).unwrap())
        });
    }

    group.finish();
}

fn bench_symmetric(c: &mut Criterion) {
    let data_sizes = vec![16, 256, 4096];
    let mut encrypt_group = c.benchmark_group("Symmetric Encryption");

    for size in &data_sizes {
        let message = "a".repeat(*size);
        encrypt_group.throughput(Throughput::Bytes(*size as u64));
        for cipher in symmetric_ciphers() {
            encrypt_group.bench_with_input(
                BenchmarkId::new(cipher.name(), size),
                &message,
                |b, message| b.iter(|| cipher.encrypt(message, "12345678").unwrap()),
            );
        }
    }
    encrypt_group.finish();

    let mut decrypt_group = c.benchmark_group("Symmetric Decryption");
    for size in &data_sizes {
        let message = "a".repeat(*size);
        decrypt_group.throughput(Throughput::Bytes(*size as u64));
        for cipher in symmetric_ciphers() {
            let encrypted = cipher.encrypt(&message, "12345678").unwrap();
            decrypt_group.bench_with_input(
                BenchmarkId::new(cipher.name(), size),
                &encrypted,
                |b, encrypted| b.iter(|| cipher.decrypt(encrypted, "12345678").unwrap()),
            );
        }
    }
    decrypt_group.finish();
}

fn bench_rsa(c: &mut Criterion) {
    let rsa = RSAWrapper::default();
    let pair = rsa.generate_key_pair(2048).unwrap();
    let message = "benchmark message";
    let encrypted = rsa.encrypt(message, &pair.public_key).unwrap();

    let mut group = c.benchmark_group("RSA-2048");
    group.sample_size(20);
    group.bench_function("encrypt", |b| {
        b.iter(|| rsa.encrypt(message, &pair.public_key).unwrap())
    });
    group.bench_function("decrypt", |b| {
        b.iter(|| rsa.decrypt(&encrypted, &pair.private_key).unwrap())
    });
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default().without_plots();
    targets = bench_key_generation, bench_symmetric, bench_rsa
);

criterion_main!(benches);
