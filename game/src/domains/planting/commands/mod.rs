pub use harvest_crop::Harvest;

mod create_soil;
mod destroy_crop;
mod harvest_crop;
mod plant_crop;
