pub mod api;
pub mod fixtures;
pub mod view;

use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Trace)
            .try_init()
            .ok();
    });
}
