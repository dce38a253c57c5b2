mod add_good;
mod subtract_good;
