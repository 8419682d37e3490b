use std::collections::{HashMap, VecDeque};
use std::error::Error;
use std::sync::Arc;

use crate::collection::pool::{Cleanup, Factory, Observer, PoolItem, PoolState, ResourceId};
use crate::err::define::collection as define_err;
use crate::make_err_msg;

pub(super) struct InternalPool<T> {
    name : String,
    max_size : Option<usize>,
    // idle resources, least recently returned at the front
    available : VecDeque<(ResourceId, Arc<T>)>,
    // checked out resources with the lease of their current checkout
    in_use : HashMap<ResourceId, (u64, Arc<T>)>,
    next_lease : u64,
    gen : Factory<T>,
    cleanup : Option<Cleanup<T>>,
    observer : Option<Observer>
}

impl<T> InternalPool<T> {
    pub(super) fn new(name : String, max_size : Option<usize>, gen : Factory<T>, cleanup : Option<Cleanup<T>>, observer : Option<Observer>) -> Self {
        InternalPool {
            name,
            max_size,
            available : VecDeque::new(),
            in_use : HashMap::new(),
            next_lease : 0,
            gen,
            cleanup,
            observer
        }
    }

    #[inline]
    fn alloc_size(&self) -> usize {
        self.available.len() + self.in_use.len()
    }

    #[inline]
    fn can_alloc(&self) -> bool {
        match self.max_size {
            Some(max) => self.alloc_size() < max,
            None => true
        }
    }

    fn notify(&self) {
        if let Some(observer) = self.observer.as_ref() {
            observer(&self.state());
        }
    }

    fn check_out(&mut self, id : ResourceId, value : Arc<T>) -> PoolItem<T> {
        self.next_lease += 1;
        self.in_use.insert(id, (self.next_lease, Arc::clone(&value)));
        PoolItem::new(id, self.next_lease, value)
    }

    pub(super) fn acquire(&mut self) -> Result<Option<PoolItem<T>>, Box<dyn Error>> {
        let item = if let Some((id, value)) = self.available.pop_front() {
            Some(self.check_out(id, value))
        } else if self.can_alloc() {
            let value = Arc::new((self.gen)()?);
            Some(self.check_out(ResourceId::next(), value))
        } else {
            None
        };

        self.notify();
        Ok(item)
    }

    pub(super) fn release(&mut self, item : &PoolItem<T>) -> Result<(), Box<dyn Error>> {
        let tracked = match self.in_use.get(&item.id()) {
            Some((lease, tracked)) if *lease == item.lease && Arc::ptr_eq(tracked, &item.value) => tracked,
            _ => return Err(define_err::InvalidReleaseError::new(make_err_msg!(
                "pool_name:{}, resource:{}, lease:{}", self.name, item.id(), item.lease
            )))
        };

        if let Some(cleanup) = self.cleanup.as_mut() {
            cleanup(&**tracked)?;
        }

        if let Some((_, value)) = self.in_use.remove(&item.id()) {
            self.available.push_back((item.id(), value));
        }

        self.notify();
        Ok(())
    }

    pub(super) fn has_shortage(&self) -> bool {
        match self.max_size {
            Some(max) => self.alloc_size() >= max && self.available.is_empty(),
            None => false
        }
    }

    pub(super) fn state(&self) -> PoolState {
        PoolState {
            in_use : self.in_use.len(),
            available : self.available.len(),
            total : self.alloc_size(),
            capacity : self.max_size
        }
    }
}
