use std::cell::RefCell;
use std::error::Error;

use crate::collection::pool::internal::InternalPool;
use crate::collection::pool::{PoolItem, PoolState, ResourcePool};

/// Pool for a single control thread. Not `Sync`; share it with `Rc` if needed.
pub struct LocalPool<T> {
    name : String,
    internal : RefCell<InternalPool<T>>
}

impl<T> LocalPool<T> {
    pub(super) fn new(name : String, internal : InternalPool<T>) -> Self {
        LocalPool {
            name,
            internal : RefCell::new(internal)
        }
    }
}

impl<T> ResourcePool<T> for LocalPool<T> {
    fn acquire(&self) -> Result<Option<PoolItem<T>>, Box<dyn Error>> {
        self.internal.borrow_mut().acquire()
    }

    fn release(&self, item : &PoolItem<T>) -> Result<(), Box<dyn Error>> {
        self.internal.borrow_mut().release(item)
    }

    fn has_shortage(&self) -> bool {
        self.internal.borrow().has_shortage()
    }

    fn state(&self) -> PoolState {
        self.internal.borrow().state()
    }

    fn name(&self) -> &str {
        self.name.as_str()
    }
}
