//! Scratch storage for big-integer temporaries.
//!
//! Each point operation needs a dozen or more temporary integers. A
//! [`NumPool`] hands those out and takes them back so that their heap
//! storage is reused across operations instead of reallocated.
//!
//! A checked-out holder carries whatever value its previous user left in it;
//! callers overwrite it before reading.

use core::{
    fmt, mem,
    ops::{Deref, DerefMut},
};
use num_bigint::BigUint;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Source of reusable [`BigUint`] holders.
///
/// Implementations must be safe to share between threads performing
/// independent curve operations.
pub trait NumPool: Send + Sync {
    /// Takes a holder out of the pool, allocating a zero-valued one if none
    /// is parked.
    fn checkout(&self) -> BigUint;

    /// Returns a holder obtained from [`NumPool::checkout`].
    ///
    /// Releasing a value that was never checked out skews
    /// [`NumPool::outstanding`] but has no effect on arithmetic.
    fn release(&self, holder: BigUint);

    /// Number of checkouts not yet matched by a release.
    fn outstanding(&self) -> isize;
}

#[derive(Debug, Default)]
struct PoolState {
    idle: Vec<BigUint>,
    outstanding: isize,
}

/// Mutex-guarded LIFO pool.
///
/// Grows to the peak number of holders outstanding at once and never
/// shrinks.
#[derive(Debug, Default)]
pub struct ScratchPool {
    state: Mutex<PoolState>,
}

impl ScratchPool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of holders currently parked in the pool.
    pub fn idle(&self) -> usize {
        self.lock().idle.len()
    }

    fn lock(&self) -> MutexGuard<'_, PoolState> {
        // holder contents are never trusted, so a panic mid-operation
        // leaves nothing to repair
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl NumPool for ScratchPool {
    fn checkout(&self) -> BigUint {
        let mut state = self.lock();
        state.outstanding += 1;
        match state.idle.pop() {
            Some(holder) => holder,
            None => {
                tracing::trace!(outstanding = state.outstanding, "scratch pool grew");
                BigUint::default()
            }
        }
    }

    fn release(&self, holder: BigUint) {
        let mut state = self.lock();
        state.idle.push(holder);
        state.outstanding -= 1;
        if state.outstanding < 0 {
            tracing::debug!(
                outstanding = state.outstanding,
                "scratch pool released more holders than it handed out"
            );
        }
    }

    fn outstanding(&self) -> isize {
        self.lock().outstanding
    }
}

/// Pool that never pools: every checkout allocates and every release drops.
///
/// Useful where the allocator is already cheap enough, or to rule the pool
/// out when debugging.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllocatingPool;

impl NumPool for AllocatingPool {
    fn checkout(&self) -> BigUint {
        BigUint::default()
    }

    fn release(&self, _holder: BigUint) {}

    fn outstanding(&self) -> isize {
        0
    }
}

/// A holder checked out of a [`NumPool`], released when dropped.
pub struct Scratch<'a, P: NumPool + ?Sized> {
    pool: &'a P,
    value: BigUint,
}

impl<'a, P: NumPool + ?Sized> Scratch<'a, P> {
    /// Checks a holder out of `pool`.
    pub fn new(pool: &'a P) -> Self {
        Self {
            value: pool.checkout(),
            pool,
        }
    }
}

impl<P: NumPool + ?Sized> Deref for Scratch<'_, P> {
    type Target = BigUint;

    fn deref(&self) -> &BigUint {
        &self.value
    }
}

impl<P: NumPool + ?Sized> DerefMut for Scratch<'_, P> {
    fn deref_mut(&mut self) -> &mut BigUint {
        &mut self.value
    }
}

impl<P: NumPool + ?Sized> Drop for Scratch<'_, P> {
    fn drop(&mut self) {
        // a zero `BigUint` owns no heap storage
        self.pool.release(mem::take(&mut self.value));
    }
}

impl<P: NumPool + ?Sized> fmt::Debug for Scratch<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Scratch").field(&**self).finish()
    }
}
