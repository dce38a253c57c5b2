use datamap::Storage;
use game::data::{DataError, KNOWLEDGE, SCHEMA, STARTER};
use game::inventory::{Collection, Good, GoodKey, GoodKind};
use game::planting::{Crop, CropId, Soil, SoilId};
use game::Game;

use crate::testing::new_game;

mod testing;

fn reload(game: Game) -> Game {
    let mut game = Game::new(game.into_storage());
    game.load_game_full(0).unwrap();
    game
}

fn soil(id: usize) -> Soil {
    Soil {
        id: SoilId(id),
        level: 1,
        crop: None,
    }
}

#[test]
fn test_fresh_save_uses_default_values() {
    let game = new_game();
    assert_eq!(game.economy.gold, 0);
    assert_eq!(game.economy.level, 1);
    assert_eq!(game.economy.experience, 0);
    assert_eq!(game.economy.next_soil, Some(SoilId(11)));
    assert!(game.planting.soils.is_empty());
    assert!(game.inventory.goods.is_empty());
    assert_eq!(game.inventory.shop.len(), 6);
    assert_eq!(game.inspect_economy().max_experience, 50);
}

#[test]
fn test_save_and_load_whole_session() {
    let mut game = new_game();
    game.economy.gold = 120;
    game.economy.level = 2;
    game.economy.experience = 30;
    game.economy.next_soil = Some(SoilId(9));
    game.planting.load_soils(vec![soil(9), soil(10), soil(11)]);
    let potato = game.known.crops.find("potato").unwrap();
    game.planting.load_crops(
        vec![Crop {
            id: CropId(1),
            kind: potato,
            soil: SoilId(11),
            planted_at: 700,
            harvest_count: 2,
            growth_rate: 0.0,
        }],
        1,
    );
    game.inventory.load_goods(vec![
        Good {
            key: GoodKey::new(GoodKind::Fruit, "3"),
            title: "potato".to_string(),
            quantity: 4,
            cost: 6,
        },
        Good {
            key: GoodKey::new(GoodKind::Seed, "1"),
            title: "turnip seeds".to_string(),
            quantity: 7,
            cost: 10,
        },
    ]);
    game.save_game().unwrap();

    let game = reload(game);
    assert_eq!(game.economy.gold, 120);
    assert_eq!(game.economy.level, 2);
    assert_eq!(game.economy.experience, 30);
    assert_eq!(game.economy.next_soil, Some(SoilId(9)));
    let soils: Vec<usize> = game.planting.soils.iter().map(|soil| soil.id.0).collect();
    assert_eq!(soils, vec![9, 10, 11]);
    assert!(game.get_crop_at(SoilId(10)).is_none());
    let crop = game.get_crop_at(SoilId(11)).unwrap();
    assert_eq!(crop.kind.name, "potato");
    assert_eq!(crop.planted_at, 700);
    assert_eq!(crop.harvest_count, 2);
    assert_eq!(game.get_soil(SoilId(11)).unwrap().crop, Some(crop.id));
    let goods: Vec<(String, u32)> = game
        .inventory
        .goods
        .iter()
        .map(|good| (good.title.clone(), good.quantity))
        .collect();
    assert_eq!(
        goods,
        vec![("potato".to_string(), 4), ("turnip seeds".to_string(), 7)]
    );
}

#[test]
fn test_save_replaces_previous_snapshot() {
    let mut game = new_game();
    game.inventory.load_goods(vec![Good {
        key: GoodKey::new(GoodKind::Fruit, "1"),
        title: "turnip".to_string(),
        quantity: 2,
        cost: 5,
    }]);
    game.save_game().unwrap();
    game.inventory.goods.clear();
    game.economy.next_soil = None;
    game.save_game().unwrap();

    let game = reload(game);
    assert!(game.inventory.collection(Collection::Warehouse).is_empty());
    assert_eq!(game.economy.next_soil, None);
}

#[test]
fn test_crop_of_unknown_kind_is_skipped() {
    let storage = Storage::open_in_memory().unwrap();
    storage.execute_batch(SCHEMA).unwrap();
    storage.execute_batch(KNOWLEDGE).unwrap();
    storage
        .execute_batch(
            "insert into Soil (id, level, crop, planted_at, harvest_count, growth_rate)
             values (3, 1, 99, 10, 1, 0.0), (4, 2, 1, 10, 1, 0.0);",
        )
        .unwrap();
    let mut game = Game::new(storage);
    game.load_game_full(0).unwrap();
    assert!(game.get_crop_at(SoilId(3)).is_none());
    assert_eq!(game.get_soil(SoilId(3)).unwrap().crop, None);
    assert_eq!(game.get_soil(SoilId(4)).unwrap().level, 2);
    assert_eq!(game.get_crop_at(SoilId(4)).unwrap().kind.name, "turnip");
}

#[test]
fn test_unknown_shop_entries_are_skipped() {
    let storage = Storage::open_in_memory().unwrap();
    storage.execute_batch(SCHEMA).unwrap();
    storage.execute_batch(KNOWLEDGE).unwrap();
    storage
        .execute_batch("update Value set value = '\"2, x, 77,5\"' where key = 'seed_shop_list';")
        .unwrap();
    let mut game = Game::new(storage);
    game.load_game_full(0).unwrap();
    let names: Vec<&str> = game
        .inventory
        .shop
        .iter()
        .map(|good| good.key.name.as_str())
        .collect();
    assert_eq!(names, vec!["2", "5"]);
}

#[test]
fn test_expansion_counter_outside_the_farm_is_rejected() {
    let storage = Storage::open_in_memory().unwrap();
    storage.execute_batch(SCHEMA).unwrap();
    storage.execute_batch(KNOWLEDGE).unwrap();
    storage
        .execute_batch("insert into Value (key, value) values ('nextExpandableSoilId', '12');")
        .unwrap();
    let mut game = Game::new(storage);
    assert!(matches!(
        game.load_game_full(0),
        Err(DataError::Malformed { .. })
    ));
}

#[test]
fn test_gap_in_expansion_table_is_rejected() {
    let storage = Storage::open_in_memory().unwrap();
    storage.execute_batch(SCHEMA).unwrap();
    storage.execute_batch(KNOWLEDGE).unwrap();
    storage
        .execute_batch("delete from ExpansionKind where id = 3;")
        .unwrap();
    let mut game = Game::new(storage);
    assert!(matches!(
        game.load_game_full(0),
        Err(DataError::Inconsistency(_))
    ));
}

#[test]
fn test_new_farm_starts_with_a_purse() {
    let storage = Storage::open_in_memory().unwrap();
    storage.execute_batch(SCHEMA).unwrap();
    storage.execute_batch(KNOWLEDGE).unwrap();
    storage.execute_batch(STARTER).unwrap();
    let mut game = Game::new(storage);
    game.load_game_full(0).unwrap();
    assert_eq!(game.economy.gold, 200);
    assert!(game.expansion_offer().unwrap().enough_gold);

    game.economy.gold = 35;
    game.save_game().unwrap();
    let storage = game.into_storage();
    storage.execute_batch(STARTER).unwrap();
    let mut game = Game::new(storage);
    game.load_game_full(0).unwrap();
    assert_eq!(game.economy.gold, 35);
}
