use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use common::collection::pool::{LocalPool, PoolBuilder, PoolItem, ResourcePool};
use common::err::define::collection::InvalidReleaseError;

/// Token resource; `name` repeats between pools on purpose.
#[derive(Debug, PartialEq)]
struct Token {
    name : char
}

struct Counters {
    factory : Arc<AtomicUsize>,
    cleanup : Arc<Mutex<Vec<char>>>
}

fn token_pool(max_size : Option<usize>, with_cleanup : bool) -> (LocalPool<Token>, Counters) {
    let factory = Arc::new(AtomicUsize::new(0));
    let cleanup = Arc::new(Mutex::new(Vec::new()));

    let f = Arc::clone(&factory);
    let mut builder = PoolBuilder::new("tokens", move || -> Result<Token, Box<dyn Error>> {
        let n = f.fetch_add(1, Ordering::SeqCst) as u8;
        Ok(Token { name : (b'A' + n) as char })
    }).max_size(max_size);

    if with_cleanup {
        let c = Arc::clone(&cleanup);
        builder = builder.cleanup(move |t : &Token| -> Result<(), Box<dyn Error>> {
            c.lock().map_err(|_| "cleanup log poisoned")?.push(t.name);
            Ok(())
        });
    }

    (builder.build_local(), Counters { factory, cleanup })
}

fn factory_calls(c : &Counters) -> usize {
    c.factory.load(Ordering::SeqCst)
}

fn cleaned(c : &Counters) -> Vec<char> {
    c.cleanup.lock().map(|g| g.clone()).unwrap_or_default()
}

#[test]
fn test_two_slot_scenario() -> Result<(), Box<dyn Error>> {
    let (pool, counters) = token_pool(Some(2), true);

    let a = pool.acquire()?.ok_or("expected A")?;
    assert_eq!(a.name, 'A');
    assert_eq!(factory_calls(&counters), 1);

    let b = pool.acquire()?.ok_or("expected B")?;
    assert_eq!(b.name, 'B');
    assert_eq!(factory_calls(&counters), 2);

    assert!(pool.acquire()?.is_none());
    assert!(pool.has_shortage());

    pool.release(&a)?;
    assert_eq!(cleaned(&counters), vec!['A']);
    assert!(!pool.has_shortage());

    let again = pool.acquire()?.ok_or("expected A again")?;
    assert!(again.same_resource(&a));
    assert_eq!(again.name, 'A');
    assert_eq!(factory_calls(&counters), 2);
    Ok(())
}

#[test]
fn test_first_acquire_builds_exactly_one() -> Result<(), Box<dyn Error>> {
    let (pool, counters) = token_pool(Some(1), false);

    let item = pool.acquire()?;
    assert!(item.is_some());
    assert_eq!(factory_calls(&counters), 1);

    let state = pool.state();
    assert_eq!(state.in_use, 1);
    assert_eq!(state.available, 0);
    Ok(())
}

#[test]
fn test_capacity_plus_one_is_empty() -> Result<(), Box<dyn Error>> {
    for cap in 1..6 {
        let (pool, counters) = token_pool(Some(cap), false);
        let mut held = Vec::new();

        for _ in 0..cap {
            held.push(pool.acquire()?.ok_or("acquire under capacity failed")?);
        }
        assert!(pool.has_shortage());
        assert!(pool.acquire()?.is_none());
        assert_eq!(factory_calls(&counters), cap);

        pool.release(&held[cap / 2])?;
        assert!(!pool.has_shortage());
    }
    Ok(())
}

#[test]
fn test_release_then_acquire_reuses_instance() -> Result<(), Box<dyn Error>> {
    let (pool, counters) = token_pool(None, false);

    let first = pool.acquire()?.ok_or("no resource")?;
    let addr = first.get_value() as *const Token;
    pool.release(&first)?;

    let second = pool.acquire()?.ok_or("no resource")?;
    assert_eq!(second.get_value() as *const Token, addr);
    assert_eq!(second.id(), first.id());
    assert_eq!(factory_calls(&counters), 1);
    Ok(())
}

#[test]
fn test_unbounded_pool_never_short() -> Result<(), Box<dyn Error>> {
    let (pool, counters) = token_pool(None, false);
    let mut held = Vec::new();

    for _ in 0..16 {
        held.push(pool.acquire()?.ok_or("unbounded pool refused")?);
        assert!(!pool.has_shortage());
    }
    assert_eq!(factory_calls(&counters), 16);
    assert_eq!(pool.state().capacity, None);
    Ok(())
}

#[test]
fn test_foreign_item_is_invalid_release() -> Result<(), Box<dyn Error>> {
    let (pool, counters) = token_pool(Some(2), true);
    let (other, _) = token_pool(Some(2), true);

    let mine = pool.acquire()?.ok_or("no resource")?;
    let foreign = other.acquire()?.ok_or("no resource")?;
    // equal by value, still a different resource
    assert_eq!(*mine, *foreign);

    let before = pool.state();
    let err = pool.release(&foreign).unwrap_err();
    assert!(err.downcast_ref::<InvalidReleaseError>().is_some());
    assert_eq!(pool.state(), before);
    assert!(cleaned(&counters).is_empty());
    Ok(())
}

#[test]
fn test_double_release_is_invalid() -> Result<(), Box<dyn Error>> {
    let (pool, counters) = token_pool(Some(2), true);

    let item : PoolItem<Token> = pool.acquire()?.ok_or("no resource")?;
    let copy = item.clone();
    pool.release(&item)?;

    let before = pool.state();
    let err = pool.release(&copy).unwrap_err();
    let typed = err.downcast_ref::<InvalidReleaseError>().ok_or("wrong error kind")?;
    assert!(typed.sub_message().contains("pool_name:tokens"));
    assert_eq!(pool.state(), before);
    assert_eq!(cleaned(&counters), vec!['A']);
    Ok(())
}

#[test]
fn test_cleanup_once_per_release() -> Result<(), Box<dyn Error>> {
    let (pool, counters) = token_pool(Some(3), true);

    let a = pool.acquire()?.ok_or("no resource")?;
    let b = pool.acquire()?.ok_or("no resource")?;
    let _c = pool.acquire()?.ok_or("no resource")?;

    pool.release(&b)?;
    pool.release(&a)?;
    let b2 = pool.acquire()?.ok_or("no resource")?;
    assert!(b2.same_resource(&b));
    pool.release(&b2)?;

    // C was never released
    assert_eq!(cleaned(&counters), vec!['B', 'A', 'B']);
    Ok(())
}

#[test]
fn test_bound_holds_over_mixed_sequence() -> Result<(), Box<dyn Error>> {
    let (pool, _) = token_pool(Some(3), false);
    let mut held : Vec<PoolItem<Token>> = Vec::new();
    let pattern = [true, true, false, true, true, true, false, false, true, false, true, true];

    for take in pattern.iter().cycle().take(60) {
        if *take {
            if let Some(item) = pool.acquire()? {
                held.push(item);
            }
        } else if !held.is_empty() {
            let item = held.remove(0);
            pool.release(&item)?;
        }

        let state = pool.state();
        assert!(state.total <= 3);
        assert_eq!(state.total, state.in_use + state.available);
        assert_eq!(state.in_use, held.len());
        assert_eq!(pool.has_shortage(), state.total == 3 && state.available == 0);
    }
    Ok(())
}

#[test]
fn test_factory_error_propagates_unchanged() -> Result<(), Box<dyn Error>> {
    let pool = PoolBuilder::new("broken", || -> Result<Token, Box<dyn Error>> {
        Err(InvalidReleaseError::new("sentinel".to_string()))
    }).max_size(Some(1)).build_local();

    let err = pool.acquire().unwrap_err();
    let typed = err.downcast_ref::<InvalidReleaseError>().ok_or("factory error was wrapped")?;
    assert_eq!(typed.sub_message(), "sentinel");
    assert_eq!(pool.state().total, 0);
    Ok(())
}

#[test]
fn test_stale_handle_cannot_release_next_checkout() -> Result<(), Box<dyn Error>> {
    let (pool, counters) = token_pool(Some(1), true);

    let first = pool.acquire()?.ok_or("no resource")?;
    pool.release(&first)?;
    let second = pool.acquire()?.ok_or("no resource")?;
    assert!(second.same_resource(&first));

    let before = pool.state();
    let err = pool.release(&first).unwrap_err();
    assert!(err.downcast_ref::<InvalidReleaseError>().is_some());
    assert_eq!(pool.state(), before);
    assert_eq!(cleaned(&counters), vec!['A']);

    // the resource is still held by `second`, so nothing is handed out twice
    assert!(pool.acquire()?.is_none());
    assert!(pool.has_shortage());

    pool.release(&second)?;
    assert_eq!(cleaned(&counters), vec!['A', 'A']);
    Ok(())
}
