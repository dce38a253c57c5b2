use game::api::{Action, ActionError, Event, GameResponse, PlayerRequest};
use game::inventory::Collection::Shop;
use game::inventory::GoodKind::Seed;
use game::planting::Planting::CropRipened;
use game::planting::{CropId, GridLayout, SoilId};
use game::occur;

use crate::testing::GameTestScenario;

mod testing;

#[test]
fn test_update_reports_ripened_crops_once() {
    let mut scenario = GameTestScenario::new()
        .given_soils(&[0])
        .given_crop(0, "turnip", 1000);
    assert!(scenario.game.update(1359).is_empty());
    let expected: Vec<Event> = occur![vec![CropRipened {
        crop: CropId(1),
        soil: SoilId(0),
    }]];
    assert_eq!(
        format!("{:?}", scenario.game.update(1360)),
        format!("{:?}", expected)
    );
    assert!(scenario.game.update(5000).is_empty());
}

#[test]
fn test_inspect_crop_growth() {
    let scenario = GameTestScenario::new()
        .given_soils(&[0])
        .given_crop(0, "turnip", 1000);
    let view = scenario.game.inspect_crop(SoilId(0), 1060).unwrap();
    assert_eq!(view.name, "turnip");
    assert_eq!(view.stage, 1);
    assert!(!view.ripe);
    assert_eq!(view.time_to_next, Some(120));
    assert_eq!(view.ripe_at, 1360);
    assert_eq!(view.max_harvest, 1);
}

#[test]
fn test_soil_under_screen_point() {
    let scenario = GameTestScenario::new().given_soils(&[5]);
    let layout = GridLayout {
        origin: [0.0, 0.0],
        cell: [64.0, 32.0],
        columns: 4,
        soils: 12,
    };
    let soil = scenario.game.get_soil_at(&layout, [100.0, 40.0]).unwrap();
    assert_eq!(soil.id, SoilId(5));
    assert!(scenario.game.get_soil_at(&layout, [32.0, 16.0]).is_none());
}

#[test]
fn test_cheat_ripens_crops() {
    let mut scenario = GameTestScenario::new()
        .given_soils(&[0])
        .given_crop(0, "pumpkin", 100);
    scenario.game.update(100);
    let events = scenario.game.cheat_ripen_crops(10000);
    assert_eq!(events.len(), 1);
    assert!(scenario.game.inspect_crop(SoilId(0), 10000).unwrap().ripe);
}

#[test]
fn test_requests_survive_the_wire() {
    let mut scenario = GameTestScenario::new().given_gold(25);
    let key = scenario.seeds("turnip");
    let requests = vec![
        PlayerRequest::Ping,
        PlayerRequest::Perform {
            action_id: 1,
            action: Action::SelectGood {
                collection: Shop,
                key,
            },
        },
        PlayerRequest::Perform {
            action_id: 2,
            action: Action::BuyGood { count: 5 },
        },
        PlayerRequest::Perform {
            action_id: 3,
            action: Action::BuyGood { count: 2 },
        },
        PlayerRequest::Browse {
            collection: Shop,
            page: 0,
        },
    ];
    let mut responses = vec![];
    for request in requests {
        let data = request.as_bytes().unwrap();
        let request = PlayerRequest::from_bytes(&data).unwrap();
        let response = scenario.game.handle_request(request, 0);
        let data = response.as_bytes().unwrap();
        responses.push(GameResponse::from_bytes(&data).unwrap());
    }
    assert_eq!(responses[0], GameResponse::Pong);
    assert!(matches!(
        responses[1],
        GameResponse::Performed { action_id: 1, .. }
    ));
    assert!(matches!(
        &responses[2],
        GameResponse::Rejected {
            action_id: 2,
            error: ActionError::Economy(_)
        }
    ));
    match &responses[3] {
        GameResponse::Performed { action_id, report } => {
            assert_eq!(*action_id, 3);
            assert_eq!(report.economy.gold, 5);
        }
        response => panic!("unexpected response {:?}", response),
    }
    match &responses[4] {
        GameResponse::Goods { page } => assert_eq!(page.number, 2),
        response => panic!("unexpected response {:?}", response),
    }
    scenario.then_good_quantity_should_be(Seed, "turnip", Some(2));
}
