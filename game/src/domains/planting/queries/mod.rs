mod get_crop;
mod get_soil;
