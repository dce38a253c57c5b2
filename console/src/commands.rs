use game::api::Action;
use game::inventory::{Collection, GoodKey, GoodKind};
use game::planting::SoilId;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Perform(Action),
    Status,
    Goods,
    Crop(SoilId),
    PurchaseOffer,
    ExpansionOffer,
    CheatGold(u32),
    CheatRipen,
    Save,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandError {
    Unknown(String),
    MissingArgument(&'static str),
    InvalidArgument(String),
}

pub const HELP: &str = "\
buy <count> | sell <count> | plant <soil> | harvest <soil> | shovel <soil> | expand
select <shop|warehouse|seedbag> <seed|fruit|equipment> <name> | open <collection> | page <delta>
status | goods | crop <soil> | offer | land | cheat gold <amount> | cheat ripen | save | help | quit";

pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let name = match words.next() {
        Some(name) => name.to_lowercase(),
        None => return Ok(None),
    };
    let command = match name.as_str() {
        "buy" => Command::Perform(Action::BuyGood {
            count: number(words.next(), "count")?,
        }),
        "sell" => Command::Perform(Action::SellGood {
            count: number(words.next(), "count")?,
        }),
        "plant" => Command::Perform(Action::PlantSeed {
            soil: SoilId(number(words.next(), "soil")?),
        }),
        "harvest" => Command::Perform(Action::HarvestCrop {
            soil: SoilId(number(words.next(), "soil")?),
        }),
        "shovel" => Command::Perform(Action::ShovelCrop {
            soil: SoilId(number(words.next(), "soil")?),
        }),
        "expand" => Command::Perform(Action::ExpandLand),
        "select" => {
            let collection = collection(words.next())?;
            let kind = good_kind(words.next())?;
            let name = words.next().ok_or(CommandError::MissingArgument("name"))?;
            Command::Perform(Action::SelectGood {
                collection,
                key: GoodKey::new(kind, name),
            })
        }
        "open" => Command::Perform(Action::OpenCollection {
            collection: collection(words.next())?,
        }),
        "page" => Command::Perform(Action::TurnPage {
            delta: number(words.next(), "delta")?,
        }),
        "status" => Command::Status,
        "goods" => Command::Goods,
        "crop" => Command::Crop(SoilId(number(words.next(), "soil")?)),
        "offer" => Command::PurchaseOffer,
        "land" => Command::ExpansionOffer,
        "cheat" => match words.next() {
            Some("gold") => Command::CheatGold(number(words.next(), "amount")?),
            Some("ripen") => Command::CheatRipen,
            Some(other) => return Err(CommandError::InvalidArgument(other.to_string())),
            None => return Err(CommandError::MissingArgument("cheat")),
        },
        "save" => Command::Save,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(CommandError::Unknown(name)),
    };
    Ok(Some(command))
}

fn number<T: std::str::FromStr>(word: Option<&str>, name: &'static str) -> Result<T, CommandError> {
    let word = word.ok_or(CommandError::MissingArgument(name))?;
    word.parse()
        .map_err(|_| CommandError::InvalidArgument(word.to_string()))
}

fn collection(word: Option<&str>) -> Result<Collection, CommandError> {
    match word.map(str::to_lowercase).as_deref() {
        Some("shop") => Ok(Collection::Shop),
        Some("warehouse") => Ok(Collection::Warehouse),
        Some("seedbag") => Ok(Collection::SeedBag),
        Some(other) => Err(CommandError::InvalidArgument(other.to_string())),
        None => Err(CommandError::MissingArgument("collection")),
    }
}

fn good_kind(word: Option<&str>) -> Result<GoodKind, CommandError> {
    match word.map(str::to_lowercase).as_deref() {
        Some("seed") => Ok(GoodKind::Seed),
        Some("fruit") => Ok(GoodKind::Fruit),
        Some("equipment") => Ok(GoodKind::Equipment),
        Some(other) => Err(CommandError::InvalidArgument(other.to_string())),
        None => Err(CommandError::MissingArgument("kind")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_actions() {
        assert_eq!(
            parse_command("buy 3"),
            Ok(Some(Command::Perform(Action::BuyGood { count: 3 })))
        );
        assert_eq!(
            parse_command("  plant 5 "),
            Ok(Some(Command::Perform(Action::PlantSeed { soil: SoilId(5) })))
        );
        assert_eq!(
            parse_command("page -1"),
            Ok(Some(Command::Perform(Action::TurnPage { delta: -1 })))
        );
        assert_eq!(
            parse_command("select Shop seed 3"),
            Ok(Some(Command::Perform(Action::SelectGood {
                collection: Collection::Shop,
                key: GoodKey::new(GoodKind::Seed, "3"),
            })))
        );
    }

    #[test]
    fn test_parse_empty_line() {
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_command("buy"),
            Err(CommandError::MissingArgument("count"))
        );
        assert_eq!(
            parse_command("sell many"),
            Err(CommandError::InvalidArgument("many".to_string()))
        );
        assert_eq!(
            parse_command("dance"),
            Err(CommandError::Unknown("dance".to_string()))
        );
        assert_eq!(
            parse_command("open garden"),
            Err(CommandError::InvalidArgument("garden".to_string()))
        );
    }
}
