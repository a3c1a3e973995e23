/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::consts::*;

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

///
/// Memoizes the binomial coefficients `C(n, k)` used as the weights of the Bernstein basis
///
/// The first `DENSE_BINOMIAL_ROWS` rows of Pascal's triangle are computed exactly when the cache is created and
/// can be read without taking a lock. Coefficients for larger `n` are computed on demand and stored in a map
/// behind a read/write lock, so one cache can be shared between threads (usually in an `Arc`) by every curve
/// that needs it.
///
/// Only the lower half of each row is stored: `C(n, k) == C(n, n - k)`.
///
#[derive(Debug)]
pub struct BinomialCache {
    /// Rows `0..DENSE_BINOMIAL_ROWS`, each holding `C(n, 0) ..= C(n, n/2)`
    dense: Vec<Vec<u64>>,

    /// Coefficients for rows too large for the dense table, indexed by `(n, k)` with `k <= n/2`
    sparse: RwLock<HashMap<(usize, usize), f64>>,
}

impl Default for BinomialCache {
    fn default() -> Self {
        BinomialCache::new()
    }
}

impl BinomialCache {
    ///
    /// Creates a new binomial cache, with the small rows of Pascal's triangle already filled in
    ///
    pub fn new() -> BinomialCache {
        let mut dense: Vec<Vec<u64>> = Vec::with_capacity(DENSE_BINOMIAL_ROWS);

        for n in 0..DENSE_BINOMIAL_ROWS {
            let row = (0..=n / 2)
                .map(|k| {
                    if k == 0 {
                        1
                    } else {
                        // C(n, k) = C(n-1, k-1) + C(n-1, k), reading the previous row through its symmetry
                        let previous = &dense[n - 1];
                        let left = previous[usize::min(k - 1, n - k)];
                        let right = previous[usize::min(k, n - 1 - k)];

                        left + right
                    }
                })
                .collect();

            dense.push(row);
        }

        BinomialCache {
            dense,
            sparse: RwLock::new(HashMap::new()),
        }
    }

    ///
    /// Returns the binomial coefficient `C(n, k)`, or 0 if `k > n`
    ///
    /// Values are exact while they fit in the 53 bits of an `f64` mantissa, and correctly rounded to within a
    /// few ulps beyond that. Every coefficient up to `n = 1024` is finite.
    ///
    pub fn binomial(&self, n: usize, k: usize) -> f64 {
        if k > n {
            return 0.0;
        }

        let k = usize::min(k, n - k);

        if n < DENSE_BINOMIAL_ROWS {
            return self.dense[n][k] as f64;
        }

        if let Some(value) = self.read_sparse().get(&(n, k)) {
            return *value;
        }

        // Computed without the lock held: another thread racing on the same coefficient computes the same value
        let value = compute_binomial(n, k);
        *self.write_sparse().entry((n, k)).or_insert(value)
    }

    ///
    /// The number of coefficients that have been memoized outside of the precomputed rows
    ///
    pub fn sparse_len(&self) -> usize {
        self.read_sparse().len()
    }

    #[inline]
    fn read_sparse(&self) -> RwLockReadGuard<'_, HashMap<(usize, usize), f64>> {
        // Entries are only ever inserted whole, so a poisoned map is still consistent
        self.sparse.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[inline]
    fn write_sparse(&self) -> RwLockWriteGuard<'_, HashMap<(usize, usize), f64>> {
        self.sparse.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

///
/// Computes `C(n, k)` using the multiplicative recurrence `C(n, i) = C(n, i-1) * (n-i+1) / i`
///
/// The recurrence is exact in integer arithmetic (the product is always divisible by `i`), so it runs in a
/// `u128` for as long as the product fits, then carries on in floating point. In floating point it multiplies
/// by the ratio `(n-i+1)/i`, which is at least 1 for `k <= n/2`, so the running value never overshoots the result.
///
fn compute_binomial(n: usize, k: usize) -> f64 {
    test_assert!(k <= n);

    let mut exact: Option<u128> = Some(1);
    let mut approx = 1.0;

    for i in 1..=k {
        let factor = (n - i + 1) as u128;

        match exact {
            Some(value) => match value.checked_mul(factor) {
                Some(product) => {
                    exact = Some(product / (i as u128));
                }
                None => {
                    approx = (value as f64) * ((factor as f64) / (i as f64));
                    exact = None;
                }
            },

            None => {
                approx *= (factor as f64) / (i as f64);
            }
        }
    }

    match exact {
        Some(value) => value as f64,
        None => approx,
    }
}
