mod earn_gold;
mod expand_land;
mod gain_experience;
mod purchase;
