//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Benchmarks for negotiation decoding

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rawtel_telnetcodec::{NegotiationCodec, Refusing};
use std::hint::black_box;

fn bench_plain_data(c: &mut Criterion) {
    let mut group = c.benchmark_group("plain_data");

    for size in [64, 1024, 16384].iter() {
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let mut codec = NegotiationCodec::new();
            let data: Vec<u8> = (0..size).map(|i| (i % 255) as u8).collect();

            b.iter(|| codec.process_chunk(black_box(&data)).unwrap());
        });
    }

    group.finish();
}

fn bench_negotiation_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("negotiation_burst");

    for commands in [1, 16, 341].iter() {
        group.throughput(Throughput::Elements(*commands as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(commands),
            commands,
            |b, &commands| {
                let mut codec = NegotiationCodec::with_policy(Refusing);
                let chunk: Vec<u8> = (0..commands)
                    .flat_map(|i| [0xFF, 0xFB + (i % 4) as u8, i as u8])
                    .collect();

                b.iter(|| codec.process_chunk(black_box(&chunk)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_plain_data, bench_negotiation_burst);
criterion_main!(benches);
