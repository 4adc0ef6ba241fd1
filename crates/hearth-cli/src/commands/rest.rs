use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use hearth_core::CharacterSnapshot;
use hearth_rules::chat::plain_text;
use hearth_rules::{Catalog, MemoryHost, RestConfig, RestForTheNight, RestOptions};

pub struct RestArgs<'a> {
    pub party: &'a Path,
    pub yes: bool,
    pub stamina: bool,
    pub config: Option<&'a Path>,
    pub catalog: Option<&'a Path>,
    pub json: bool,
    pub output: Option<&'a Path>,
}

pub fn run(args: &RestArgs<'_>) -> Result<(), String> {
    let party: Vec<CharacterSnapshot> = super::read_json(args.party)?;

    let mut config = match args.config {
        Some(path) => RestConfig::load(path).map_err(|e| e.to_string())?,
        None => RestConfig::default(),
    };
    if args.stamina {
        config = config.with_stamina_variant(true);
    }

    let mut catalog = Catalog::english();
    if let Some(path) = args.catalog {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read '{}': {e}", path.display()))?;
        catalog.extend_from_json(&text).map_err(|e| e.to_string())?;
    }

    let mut host = MemoryHost::new(party.clone()).with_confirm(ask);
    let options = RestOptions {
        skip_dialog: args.yes,
    };
    let rest = RestForTheNight::new(config, catalog);
    let messages = rest
        .run(&mut host, &party, options)
        .map_err(|e| e.to_string())?;

    for notice in host.notifications() {
        eprintln!("  {}", notice.yellow());
    }

    if args.json {
        let out = serde_json::to_string_pretty(&messages).map_err(|e| e.to_string())?;
        println!("{out}");
    } else if messages.is_empty() {
        println!("  Nobody rested.");
    } else {
        for message in &messages {
            let text = plain_text(&message.data.content);
            let mut lines = text.lines();
            if let Some(headline) = lines.next() {
                println!("{}", headline.bold());
            }
            for line in lines {
                println!("{line}");
            }
            println!();
        }
        print_party(host.actors());
    }

    if let Some(path) = args.output {
        let rested = host.into_actors();
        let out = serde_json::to_string_pretty(&rested).map_err(|e| e.to_string())?;
        std::fs::write(path, out).map_err(|e| format!("cannot write '{}': {e}", path.display()))?;
    }

    Ok(())
}

/// Ask on stderr, read the answer from stdin. Anything but "y"/"yes" declines,
/// and so does an unusable terminal.
fn ask(title: &str, content: &str) -> bool {
    eprint!("{title}: {content} [y/N] ");
    if io::stderr().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn print_party(actors: &[CharacterSnapshot]) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "HP", "Conditions"]);

    for actor in actors {
        let hp = format!("{}/{}", actor.hit_points.value, actor.hit_points.max);
        let conditions = if actor.conditions.is_empty() {
            "—".to_string()
        } else {
            actor
                .conditions
                .iter()
                .map(|c| match c.value {
                    Some(v) => format!("{} {v}", c.slug),
                    None => c.slug.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", ")
        };
        table.add_row(vec![&actor.name, &hp, &conditions]);
    }

    println!("{table}");
}
