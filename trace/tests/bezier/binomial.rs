/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_trace::bezier::*;

use std::sync::Arc;
use std::thread;

#[test]
fn small_coefficients() {
    let binomials = BinomialCache::new();

    assert!(binomials.binomial(0, 0) == 1.0);
    assert!(binomials.binomial(4, 2) == 6.0);
    assert!(binomials.binomial(5, 2) == 10.0);
    assert!(binomials.binomial(10, 3) == 120.0);
    assert!(binomials.binomial(52, 5) == 2_598_960.0);
}

#[test]
fn k_larger_than_n_is_zero() {
    let binomials = BinomialCache::new();

    assert!(binomials.binomial(3, 4) == 0.0);
    assert!(binomials.binomial(100, 101) == 0.0);
}

#[test]
fn edges_of_each_row_are_one() {
    let binomials = BinomialCache::new();

    for n in 0..300 {
        assert!(binomials.binomial(n, 0) == 1.0, "C({}, 0)", n);
        assert!(binomials.binomial(n, n) == 1.0, "C({}, {})", n, n);
    }
}

#[test]
fn coefficients_are_symmetric() {
    let binomials = BinomialCache::new();

    for n in (0..200).chain(1000..1025) {
        for k in 0..=n {
            assert!(binomials.binomial(n, k) == binomials.binomial(n, n - k), "C({}, {})", n, k);
        }
    }
}

#[test]
fn rows_follow_pascals_rule() {
    let binomials = BinomialCache::new();

    // Every value here fits in 53 bits, so the floating point values are exact
    for n in 1..50 {
        for k in 1..n {
            let sum = binomials.binomial(n - 1, k - 1) + binomials.binomial(n - 1, k);
            assert!(binomials.binomial(n, k) == sum, "C({}, {})", n, k);
        }
    }
}

#[test]
fn rows_beyond_the_dense_table() {
    let binomials = BinomialCache::new();

    assert!(binomials.binomial(64, 1) == 64.0);
    assert!(binomials.binomial(64, 2) == 2016.0);
    assert!(binomials.binomial(70, 3) == 54_740.0);

    // C(80, 40) = 107507208733336176461620
    let expected = 1.075_072_087_333_361_8e23;
    let relative_error = (binomials.binomial(80, 40) - expected).abs() / expected;
    assert!(relative_error < 1e-12, "{}", relative_error);
}

#[test]
fn highest_degree_is_finite() {
    let binomials = BinomialCache::new();

    for k in 0..=1024 {
        let value = binomials.binomial(1024, k);
        assert!(value.is_finite() && value >= 1.0, "C(1024, {}) = {}", k, value);
    }
}

#[test]
fn values_are_memoized_once() {
    let binomials = BinomialCache::new();

    assert!(binomials.sparse_len() == 0);

    // Small rows come from the precomputed table
    binomials.binomial(20, 10);
    assert!(binomials.sparse_len() == 0);

    let first = binomials.binomial(500, 7);
    assert!(binomials.sparse_len() == 1);

    // Same value through the symmetry: no new entry
    let second = binomials.binomial(500, 493);
    assert!(binomials.sparse_len() == 1);
    assert!(first == second);
}

#[test]
fn shared_between_threads() {
    let binomials = Arc::new(BinomialCache::new());

    let workers = (0..4)
        .map(|_| {
            let binomials = Arc::clone(&binomials);
            thread::spawn(move || (64..200).map(|n| binomials.binomial(n, n / 3)).collect::<Vec<_>>())
        })
        .collect::<Vec<_>>();

    let results = workers.into_iter().map(|worker| worker.join().unwrap()).collect::<Vec<_>>();

    for result in results.iter() {
        assert!(result == &results[0]);
    }

    // One entry per row, however many threads raced to fill it
    assert!(binomials.sparse_len() == 200 - 64);
}
