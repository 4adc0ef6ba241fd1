use std::path::Path;

use hearth_rules::{ChatCard, highlight_check_roll};

pub fn run(card: &Path) -> Result<(), String> {
    let mut card: ChatCard = super::read_json(card)?;
    match highlight_check_roll(&mut card) {
        Some(highlight) => println!("{highlight}"),
        None => println!("none"),
    }
    Ok(())
}
