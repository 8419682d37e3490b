use std::error::Error;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::collection::pool::internal::InternalPool;
use crate::collection::pool::{PoolItem, PoolState, ResourcePool};

/// Pool usable from many threads. Every operation runs under one mutex, so
/// the factory and cleanup hooks are serialised too. Nothing waits for a
/// resource to come back: a full pool answers `Ok(None)` right away.
pub struct SharedPool<T> {
    name : String,
    internal : Mutex<InternalPool<T>>
}

impl<T> SharedPool<T> {
    pub(super) fn new(name : String, internal : InternalPool<T>) -> Self {
        SharedPool {
            name,
            internal : Mutex::new(internal)
        }
    }

    // a panicking hook never leaves the pool half updated, so a poisoned lock is still usable
    fn lock(&self) -> MutexGuard<'_, InternalPool<T>> {
        self.internal.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> ResourcePool<T> for SharedPool<T> {
    fn acquire(&self) -> Result<Option<PoolItem<T>>, Box<dyn Error>> {
        self.lock().acquire()
    }

    fn release(&self, item : &PoolItem<T>) -> Result<(), Box<dyn Error>> {
        self.lock().release(item)
    }

    fn has_shortage(&self) -> bool {
        self.lock().has_shortage()
    }

    fn state(&self) -> PoolState {
        self.lock().state()
    }

    fn name(&self) -> &str {
        self.name.as_str()
    }
}
