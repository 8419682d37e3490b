use std::error::Error;

use common::collection::pool::{PoolItem, ReleaseStrategy, ResourcePool, ResourceSlot};
use common::err::define::navigation as define_err;
use common::logger;
use common::make_err_msg;

use crate::constant::{City, ALL_CITIES};
use crate::map_view::MapView;

/// One "related item" screen with a map preview on it. Items are numbered
/// from 1, item `n` shows `ALL_CITIES[n - 1]` (item #1 is Vologda).
pub struct PreviewScreen {
    index : usize,
    slot : ResourceSlot<MapView>
}

impl PreviewScreen {
    pub fn new(index : usize) -> Self {
        PreviewScreen { index, slot : ResourceSlot::new() }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn title(&self) -> String {
        format!("Item #{}", self.index)
    }

    pub fn city(&self) -> Option<&'static City> {
        self.index.checked_sub(1).and_then(|i| ALL_CITIES.get(i))
    }

    pub fn map_view(&self) -> Option<&PoolItem<MapView>> {
        self.slot.item()
    }

    /// Grabs a map view if the screen has none and points it at the item's city.
    /// Returns whether the screen shows a map.
    pub fn appear<P : ResourcePool<MapView> + ?Sized>(&mut self, pool : &P) -> Result<bool, Box<dyn Error>> {
        logger::debug!("{} will appear", self.title());

        if !self.slot.attach(pool)? {
            logger::warn!("{} has no map, pool '{}' is short", self.title(), pool.name());
            return Ok(false);
        }

        if let (Some(view), Some(city)) = (self.slot.item(), self.city()) {
            view.move_camera(city);
        }
        Ok(true)
    }

    pub fn disappear<P : ResourcePool<MapView> + ?Sized>(&mut self, pool : &P, strategy : ReleaseStrategy) -> Result<bool, Box<dyn Error>> {
        logger::debug!("{} did disappear", self.title());
        self.slot.detach(pool, strategy)
    }

    pub fn destroy<P : ResourcePool<MapView> + ?Sized>(mut self, pool : &P) -> Result<bool, Box<dyn Error>> {
        self.slot.force_detach(pool)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkReport {
    pub opened : usize,
    pub shown_with_map : usize,
    pub shown_without_map : usize
}

/// Stack of preview screens above the root screen.
///
/// Transitions follow the usual navigation controller order: the incoming
/// screen appears before the outgoing one disappears. So with
/// `ReleaseStrategy::OnShortage` a full pool is only drained after the new
/// screen already asked for a map.
pub struct NavigationStack<P> {
    pool : P,
    strategy : ReleaseStrategy,
    screens : Vec<PreviewScreen>
}

impl<P : ResourcePool<MapView>> NavigationStack<P> {
    pub fn new(pool : P, strategy : ReleaseStrategy) -> Self {
        NavigationStack { pool, strategy, screens : Vec::new() }
    }

    pub fn pool(&self) -> &P {
        &self.pool
    }

    pub fn depth(&self) -> usize {
        self.screens.len()
    }

    pub fn top(&self) -> Option<&PreviewScreen> {
        self.screens.last()
    }

    /// Opens the next related item. Returns whether it shows a map.
    pub fn push(&mut self) -> Result<bool, Box<dyn Error>> {
        let next = self.screens.len() + 1;
        if next > ALL_CITIES.len() {
            return Err(define_err::NoMoreItemsError::new(make_err_msg!(
                "index:{}, items:{}", next, ALL_CITIES.len()
            )));
        }

        let mut screen = PreviewScreen::new(next);
        let shown = screen.appear(&self.pool)?;

        if let Some(prev) = self.screens.last_mut() {
            prev.disappear(&self.pool, self.strategy)?;
        }

        self.screens.push(screen);
        Ok(shown)
    }

    /// Closes the top item. Returns whether the screen below (if any) shows a map.
    pub fn pop(&mut self) -> Result<bool, Box<dyn Error>> {
        let mut top = match self.screens.pop() {
            Some(top) => top,
            None => return Err(define_err::EmptyStackError::new(make_err_msg!("depth:0")))
        };

        let shown = match self.screens.last_mut() {
            Some(below) => below.appear(&self.pool)?,
            None => false
        };

        top.disappear(&self.pool, self.strategy)?;
        top.destroy(&self.pool)?;
        Ok(shown)
    }

    /// Opens up to `depth` items, then walks back to the root.
    pub fn walk(&mut self, depth : usize) -> Result<WalkReport, Box<dyn Error>> {
        let mut report = WalkReport::default();

        for _ in 0..depth {
            match self.push() {
                Ok(shown) => {
                    report.opened += 1;
                    if shown {
                        report.shown_with_map += 1;
                    } else {
                        report.shown_without_map += 1;
                    }
                }
                Err(e) if common::err::is_kind::<define_err::NoMoreItemsError>(e.as_ref()) => {
                    logger::warn!("Sorry, there are no more related items. ({})", e);
                    break;
                }
                Err(e) => return Err(e)
            }
        }

        while !self.screens.is_empty() {
            self.pop()?;
        }

        Ok(report)
    }
}
