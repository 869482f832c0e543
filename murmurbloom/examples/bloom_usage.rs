// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use murmurbloom::bloom::BloomFilter;
use murmurbloom::bloom::BloomFilterBuilder;

fn main() {
    // 1,000 expected items at a 1% false positive target
    let mut filter = BloomFilterBuilder::with_accuracy(1_000, 0.01).build();

    println!(
        "Created Bloom filter with {} buckets ({} bits) and k={}",
        filter.num_buckets(),
        filter.capacity(),
        filter.num_hashes()
    );

    println!("\nInserting 1,000 user ids...");
    for id in 0..1_000u64 {
        filter.insert(&id);
    }
    println!("Bits used: {}", filter.bits_used());
    println!("Load factor: {:.4}", filter.load_factor());

    let missing = (0..1_000u64).filter(|id| !filter.contains(id)).count();
    println!("False negatives: {}", missing);

    let probes = 10_000u64;
    let false_positives = (1_000_000..1_000_000 + probes)
        .filter(|id| filter.contains(id))
        .count();
    println!(
        "Measured false positive rate: {:.4}%",
        false_positives as f64 / probes as f64 * 100.0
    );
    println!(
        "Estimated from load: {:.4}%",
        filter.estimated_fpp() * 100.0
    );
    println!(
        "Classic estimate with m = buckets: {:.4}%",
        filter.expected_fpp(1_000) * 100.0
    );

    println!("\nSmall filter, 64 requested bits, k=3:");
    let mut small = BloomFilter::new(64, 3);
    small.insert("hello");
    println!("contains(\"hello\") = {}", small.contains("hello"));
    println!("contains(\"world\") = {}", small.contains("world"));
}
