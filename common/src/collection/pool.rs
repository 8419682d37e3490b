mod internal;
mod local_pool;
mod shared_pool;
mod slot;
mod strategy;

use std::error::Error;
use std::fmt::{self, Display};
use std::ops::Deref;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::logger;

pub use local_pool::LocalPool;
pub use shared_pool::SharedPool;
pub use slot::ResourceSlot;
pub use strategy::ReleaseStrategy;

pub type Factory<T> = Box<dyn FnMut() -> Result<T, Box<dyn Error>> + Send>;
pub type Cleanup<T> = Box<dyn FnMut(&T) -> Result<(), Box<dyn Error>> + Send>;
pub type Observer = Box<dyn Fn(&PoolState) + Send>;

static NEXT_RESOURCE_ID : AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a pooled resource. Two resources never share an
/// id even when they compare equal by value or live in different pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(u64);

impl ResourceId {
    fn next() -> Self {
        ResourceId(NEXT_RESOURCE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle to one checkout of a resource. Clones share the same resource, id
/// and lease. A handle only releases the checkout it came from: once the
/// resource is handed out again the old handle is rejected.
pub struct PoolItem<T> {
    id : ResourceId,
    lease : u64,
    value : Arc<T>
}

impl<T> PoolItem<T> {
    pub(super) fn new(id : ResourceId, lease : u64, value : Arc<T>) -> Self {
        PoolItem { id, lease, value }
    }

    pub fn id(&self) -> ResourceId {
        self.id
    }

    pub fn get_value(&self) -> &T {
        &self.value
    }

    pub fn same_resource(&self, other : &PoolItem<T>) -> bool {
        self.id == other.id && Arc::ptr_eq(&self.value, &other.value)
    }
}

impl<T> Clone for PoolItem<T> {
    fn clone(&self) -> Self {
        PoolItem { id: self.id, lease: self.lease, value: Arc::clone(&self.value) }
    }
}

impl<T> Deref for PoolItem<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> fmt::Debug for PoolItem<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoolItem").field("id", &self.id).field("lease", &self.lease).finish()
    }
}

/// Counts taken right after a pool operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolState {
    pub in_use : usize,
    pub available : usize,
    pub total : usize,
    pub capacity : Option<usize>
}

impl Display for PoolState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "in use: {}, available: {}, total: {} ", self.in_use, self.available, self.total)?;
        match self.capacity {
            Some(max) => write!(f, "(limit: {})", max),
            None => write!(f, "(limit: unbounded)")
        }
    }
}

/// A bounded pool of reusable resources.
///
/// `acquire` hands out an idle resource (least recently returned first) or
/// builds a new one while the pool is below capacity. When the pool is full
/// and nothing is idle it returns `Ok(None)`, it never waits. `release` runs
/// the cleanup hook and makes the resource idle again; releasing something
/// this pool did not hand out fails with `InvalidReleaseError`.
///
/// Factory, cleanup and observer callbacks run while the pool is locked and
/// must not call back into the same pool (a `LocalPool` panics, a
/// `SharedPool` deadlocks).
pub trait ResourcePool<T> {
    fn acquire(&self) -> Result<Option<PoolItem<T>>, Box<dyn Error>>;
    fn release(&self, item : &PoolItem<T>) -> Result<(), Box<dyn Error>>;
    fn has_shortage(&self) -> bool;
    fn state(&self) -> PoolState;
    fn name(&self) -> &str;
}

impl<T, P : ResourcePool<T> + ?Sized> ResourcePool<T> for Arc<P> {
    fn acquire(&self) -> Result<Option<PoolItem<T>>, Box<dyn Error>> {
        (**self).acquire()
    }

    fn release(&self, item : &PoolItem<T>) -> Result<(), Box<dyn Error>> {
        (**self).release(item)
    }

    fn has_shortage(&self) -> bool {
        (**self).has_shortage()
    }

    fn state(&self) -> PoolState {
        (**self).state()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T, P : ResourcePool<T> + ?Sized> ResourcePool<T> for Rc<P> {
    fn acquire(&self) -> Result<Option<PoolItem<T>>, Box<dyn Error>> {
        (**self).acquire()
    }

    fn release(&self, item : &PoolItem<T>) -> Result<(), Box<dyn Error>> {
        (**self).release(item)
    }

    fn has_shortage(&self) -> bool {
        (**self).has_shortage()
    }

    fn state(&self) -> PoolState {
        (**self).state()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

pub struct PoolBuilder<T> {
    name : String,
    max_size : Option<usize>,
    factory : Factory<T>,
    cleanup : Option<Cleanup<T>>,
    observer : Option<Observer>
}

impl<T : 'static> PoolBuilder<T> {
    pub fn new<F>(name : impl Into<String>, factory : F) -> Self
    where F : FnMut() -> Result<T, Box<dyn Error>> + Send + 'static {
        PoolBuilder {
            name : name.into(),
            max_size : None,
            factory : Box::new(factory),
            cleanup : None,
            observer : None
        }
    }

    /// `None` leaves the pool unbounded.
    pub fn max_size(mut self, max_size : Option<usize>) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn cleanup<F>(mut self, cleanup : F) -> Self
    where F : FnMut(&T) -> Result<(), Box<dyn Error>> + Send + 'static {
        self.cleanup = Some(Box::new(cleanup));
        self
    }

    pub fn observer<F>(mut self, observer : F) -> Self
    where F : Fn(&PoolState) + Send + 'static {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn build_local(self) -> LocalPool<T> {
        let name = self.name.clone();
        LocalPool::new(name, self.into_internal())
    }

    pub fn build_shared(self) -> Arc<SharedPool<T>> {
        let name = self.name.clone();
        Arc::new(SharedPool::new(name, self.into_internal()))
    }

    fn into_internal(self) -> internal::InternalPool<T> {
        internal::InternalPool::new(self.name, self.max_size, self.factory, self.cleanup, self.observer)
    }
}

pub fn get_thread_safe_pool<T : Send + Sync + 'static>(name : String, gen : Factory<T>, max_size : Option<usize>) -> Arc<dyn ResourcePool<T> + Send + Sync> {
    PoolBuilder::new(name, gen).max_size(max_size).build_shared()
}

/// Observer that writes every state change to the log.
pub fn log_state_observer(name : String) -> impl Fn(&PoolState) + Send + 'static {
    move |state : &PoolState| {
        logger::info!("pool state [{}] | {}", name, state);
    }
}
