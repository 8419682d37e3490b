use std::cell::Cell;
use std::error::Error;

use common::collection::pool::{log_state_observer, LocalPool, PoolBuilder};
use common::logger;

use crate::constant::{City, MAP_VIEW_POOL_NAME};

/// Stand-in for the heavyweight map widget: all the demo needs is to know
/// where its camera points.
pub struct MapView {
    serial : usize,
    target : Cell<Option<&'static City>>
}

impl MapView {
    pub fn new(serial : usize) -> Self {
        MapView { serial, target : Cell::new(None) }
    }

    pub fn serial(&self) -> usize {
        self.serial
    }

    pub fn move_camera(&self, city : &'static City) {
        logger::debug!("map view {} -> {} ({:.4}, {:.4})", self.serial, city.name, city.latitude, city.longitude);
        self.target.set(Some(city));
    }

    pub fn target(&self) -> Option<&'static City> {
        self.target.get()
    }

    pub fn clear(&self) {
        self.target.set(None);
    }
}

pub fn create_map_view_pool(max_size : Option<usize>) -> LocalPool<MapView> {
    let mut serial = 0usize;

    PoolBuilder::new(MAP_VIEW_POOL_NAME, move || -> Result<MapView, Box<dyn Error>> {
        serial += 1;
        logger::info!("creating map view {}", serial);
        Ok(MapView::new(serial))
    })
    .max_size(max_size)
    .cleanup(|view : &MapView| -> Result<(), Box<dyn Error>> {
        view.clear();
        Ok(())
    })
    .observer(log_state_observer(MAP_VIEW_POOL_NAME.to_string()))
    .build_local()
}
