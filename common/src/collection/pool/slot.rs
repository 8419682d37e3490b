use std::error::Error;

use crate::collection::pool::{PoolItem, ReleaseStrategy, ResourcePool};

/// A consumer's place for at most one pooled resource.
pub struct ResourceSlot<T> {
    item : Option<PoolItem<T>>
}

impl<T> ResourceSlot<T> {
    pub fn new() -> Self {
        ResourceSlot { item : None }
    }

    pub fn item(&self) -> Option<&PoolItem<T>> {
        self.item.as_ref()
    }

    pub fn is_attached(&self) -> bool {
        self.item.is_some()
    }

    /// Takes a resource from `pool` unless one is already held.
    /// Returns whether the slot holds a resource afterwards.
    pub fn attach<P : ResourcePool<T> + ?Sized>(&mut self, pool : &P) -> Result<bool, Box<dyn Error>> {
        if self.item.is_none() {
            self.item = pool.acquire()?;
        }
        Ok(self.item.is_some())
    }

    /// Gives the resource back if `strategy` says so. Returns whether a release happened.
    pub fn detach<P : ResourcePool<T> + ?Sized>(&mut self, pool : &P, strategy : ReleaseStrategy) -> Result<bool, Box<dyn Error>> {
        if self.item.is_none() || !strategy.should_release(pool) {
            return Ok(false);
        }
        self.force_detach(pool)
    }

    pub fn force_detach<P : ResourcePool<T> + ?Sized>(&mut self, pool : &P) -> Result<bool, Box<dyn Error>> {
        let item = match self.item.take() {
            Some(item) => item,
            None => return Ok(false)
        };

        if let Err(e) = pool.release(&item) {
            self.item = Some(item);
            return Err(e);
        }
        Ok(true)
    }
}

impl<T> Default for ResourceSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}
