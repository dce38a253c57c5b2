use std::fmt;
use std::io::{BufRead, Write};

use datamap::Storage;
use game::api::Event;
use game::data::{DataError, KNOWLEDGE, SCHEMA, STARTER};
use game::math::unix_time;
use game::Game;
use log::{error, info};

use crate::commands::{parse_command, Command, HELP};
use crate::settings::configure;

mod commands;
mod settings;

#[derive(Debug)]
enum ConsoleError {
    Data(DataError),
    Sql(rusqlite::Error),
    Io(std::io::Error),
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Data(error) => write!(f, "save data error {:?}", error),
            Self::Sql(error) => write!(f, "database error {}", error),
            Self::Io(error) => write!(f, "terminal error {}", error),
        }
    }
}

impl From<DataError> for ConsoleError {
    fn from(error: DataError) -> Self {
        Self::Data(error)
    }
}

impl From<rusqlite::Error> for ConsoleError {
    fn from(error: rusqlite::Error) -> Self {
        Self::Sql(error)
    }
}

impl From<std::io::Error> for ConsoleError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

fn main() {
    env_logger::init();
    if let Err(error) = run() {
        error!("Console stopped: {}", error);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ConsoleError> {
    let config = configure();
    info!("Configuration: {:?}", config);
    let storage = Storage::open(&config.database)?;
    storage.execute_batch(SCHEMA)?;
    storage.execute_batch(KNOWLEDGE)?;
    storage.execute_batch(STARTER)?;
    let mut game = Game::with_config(storage, config);
    game.load_game_full(unix_time())?;
    print_status(&game);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut line = String::new();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let now = unix_time();
        print_events(&game.update(now));
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                println!("{:?}, try help", error);
                continue;
            }
        };
        match command {
            Command::Perform(action) => match game.perform_action(action, now) {
                Ok(report) => {
                    print_events(&report.events);
                    println!("{:?}", report.economy);
                }
                Err(error) => println!("rejected: {:?}", error),
            },
            Command::Status => print_status(&game),
            Command::Goods => {
                let page = game.current_page();
                println!("{:?} page {}/{}", page.collection, page.number, page.total);
                for good in page.goods {
                    println!(
                        "  {:?} {} {:?} x{} at {}",
                        good.key.kind, good.key.name, good.title, good.quantity, good.cost
                    );
                }
                if let Some(good) = game.selected_good() {
                    println!("selected: {}", good.title);
                }
            }
            Command::Crop(soil) => match game.inspect_crop(soil, now) {
                Ok(view) => println!("{:?}", view),
                Err(error) => println!("{:?}", error),
            },
            Command::PurchaseOffer => println!("{:?}", game.purchase_offer()),
            Command::ExpansionOffer => println!("{:?}", game.expansion_offer()),
            Command::CheatGold(amount) => print_events(&game.cheat_grant_gold(amount)),
            Command::CheatRipen => print_events(&game.cheat_ripen_crops(now)),
            Command::Save => {
                game.save_game()?;
                println!("saved");
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
        }
    }
    game.save_game()?;
    info!("Session closed");
    Ok(())
}

fn print_status(game: &Game) {
    println!("{:?}", game.inspect_economy());
    for soil in &game.planting.soils {
        match game.get_crop_at(soil.id) {
            Some(crop) => println!("  soil {} (level {}): {}", soil.id.0, soil.level, crop.kind.name),
            None => println!("  soil {} (level {}): empty", soil.id.0, soil.level),
        }
    }
}

fn print_events(events: &[Event]) {
    for event in events {
        println!("  {:?}", event);
    }
}
