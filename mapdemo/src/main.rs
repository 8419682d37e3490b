use common::logger;

use mapdemo::init;
use mapdemo::map_view;
use mapdemo::navigation::NavigationStack;

fn main() {
    let settings = match init::init_process() {
        Ok(settings) => settings,
        Err(e) => {
            logger::error!("main - init process failed");
            logger::error!("main - init error : {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    logger::info!("main - settings : {:?}", settings);

    let pool = map_view::create_map_view_pool(settings.max_size);
    let mut stack = NavigationStack::new(pool, settings.strategy);

    match stack.walk(settings.depth) {
        Ok(report) => logger::info!(
            "main - opened {} items, {} with map, {} without",
            report.opened, report.shown_with_map, report.shown_without_map
        ),
        Err(e) => {
            logger::error!("main - walk failed : {}", e);
            std::process::exit(1);
        }
    }
}
