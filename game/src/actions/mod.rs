mod browse_goods;
mod buy_good;
mod expand_land;
mod harvest_crop;
mod plant_seed;
mod sell_good;
mod shovel_crop;
