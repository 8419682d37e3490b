pub struct City {
    pub name : &'static str,
    pub latitude : f64,
    pub longitude : f64
}

pub const ALL_CITIES : &'static [City] = &[
    City { name : "Vologda", latitude : 59.220532, longitude : 39.891287 },
    City { name : "Yekaterinburg", latitude : 56.837958, longitude : 60.597114 },
    City { name : "Kazan", latitude : 55.796116, longitude : 49.106308 },
    City { name : "Moscow", latitude : 55.755820, longitude : 37.617633 },
    City { name : "Nizhny Novgorod", latitude : 56.326793, longitude : 44.006437 },
    City { name : "Krasnaya Polyana", latitude : 43.672435, longitude : 40.296278 },
    City { name : "Pskov", latitude : 57.819140, longitude : 28.332373 },
    City { name : "Smolensk", latitude : 54.782751, longitude : 32.047926 },
    City { name : "Saint Petersburg", latitude : 59.938885, longitude : 30.313921 },
    City { name : "Tula", latitude : 54.193097, longitude : 37.617134 },
];

pub const MAP_VIEW_POOL_NAME : &'static str = "map views";
pub const DEFAULT_POOL_SIZE : usize = 2;
pub const DEFAULT_DEPTH : usize = 5;
