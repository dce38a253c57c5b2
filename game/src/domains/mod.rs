pub mod economy;
pub mod inventory;
pub mod planting;
