use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde_json::json;

use diffable_lists::config::Config;
use diffable_lists::countdown::{Countdown, CountdownEntry};
use diffable_lists::logging::init_tracing;
use diffable_lists::shopping::{Category, Item, ItemDraft, ItemId, ShoppingChanges, ShoppingList};

#[derive(Debug, Parser)]
#[command(name = "diffable-lists", version, about = "Countdown and shopping list demos")]
struct Cli {
    /// Config file (defaults to the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Count down and print every published list
    Countdown {
        /// Value to count down from
        #[arg(long)]
        from: Option<u32>,
        /// Tick period in milliseconds
        #[arg(long)]
        interval_ms: Option<u64>,
    },
    /// Build the shopping list, apply edits and print it
    Shopping {
        /// Add an item
        #[arg(long, num_args = 3, value_names = ["NAME", "PRICE", "CATEGORY"])]
        add: Vec<String>,
        /// Drag ITEM onto ONTO (by name)
        #[arg(long = "move", num_args = 2, value_names = ["ITEM", "ONTO"])]
        moves: Vec<String>,
        /// Remove an item by name
        #[arg(long)]
        remove: Vec<String>,
        /// Start from an empty list
        #[arg(long)]
        empty: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&path)
        .with_context(|| format!("Failed to load config from '{}'", path.display()))?;
    init_tracing(&config.logging.filter);

    match cli.command {
        Command::Countdown { from, interval_ms } => {
            let from = from.unwrap_or(config.countdown.start_from);
            let period = interval_ms.unwrap_or(config.countdown.tick_interval_ms);
            if period == 0 {
                bail!("--interval-ms must be greater than 0");
            }
            run_countdown(from, Duration::from_millis(period), cli.json).await
        }
        Command::Shopping {
            add,
            moves,
            remove,
            empty,
        } => {
            let seeded = config.shopping.seed_sample_items && !empty;
            run_shopping(seeded, &add, &moves, &remove, cli.json)
        }
    }
}

async fn run_countdown(from: u32, period: Duration, as_json: bool) -> anyhow::Result<()> {
    let countdown = Countdown::new(period);
    let mut published = countdown.subscribe();
    let _ticker = countdown.start(from);

    loop {
        let list = published
            .recv()
            .await
            .context("Countdown stopped publishing")?;
        let labels: Vec<String> = list.items().map(CountdownEntry::label).collect();
        if as_json {
            println!("{}", json!(labels));
        } else {
            println!("{}", labels.join(", "));
        }
        if list.contains_item(&CountdownEntry::Launched) {
            break;
        }
    }
    Ok(())
}

fn run_shopping(
    seeded: bool,
    add: &[String],
    moves: &[String],
    remove: &[String],
    as_json: bool,
) -> anyhow::Result<()> {
    let mut list = if seeded {
        ShoppingList::sample()
    } else {
        ShoppingList::new()
    };

    for fields in add.chunks(3) {
        let [name, price, category] = fields else {
            bail!("--add takes NAME PRICE CATEGORY");
        };
        let category = category.parse::<Category>()?;
        let changes = list.add_draft(ItemDraft::new(name.as_str(), price.as_str(), category))?;
        report(&list, &[], "add", &changes, as_json);
    }

    for pair in moves.chunks(2) {
        let [item, onto] = pair else {
            bail!("--move takes ITEM ONTO");
        };
        let item = list.find_by_name(item)?.id;
        let onto = list.find_by_name(onto)?.id;
        let changes = list.drop_item(&item, &onto)?;
        report(&list, &[], "move", &changes, as_json);
    }

    for name in remove {
        let item = list.find_by_name(name)?.clone();
        let changes = list.remove_items(&[item.id]);
        report(&list, &[item], "remove", &changes, as_json);
    }

    let sections = list.render();
    if as_json {
        let body: Vec<_> = sections
            .iter()
            .map(|(title, rows)| json!({ "section": title, "rows": rows }))
            .collect();
        println!("{}", json!(body));
    } else {
        for (title, rows) in sections {
            println!("{}", title);
            for row in rows {
                println!("  {}", row.replace('\n', " | "));
            }
        }
    }
    Ok(())
}

fn report(
    list: &ShoppingList,
    removed: &[Item],
    action: &str,
    changes: &ShoppingChanges,
    as_json: bool,
) {
    let name = |id: &ItemId| {
        list.item(id)
            .or_else(|| removed.iter().find(|item| &item.id == id))
            .map(|item| item.name.clone())
            .unwrap_or_else(|| id.to_string())
    };
    let inserted: Vec<String> = changes.items_inserted.iter().map(|c| name(&c.item)).collect();
    let deleted: Vec<String> = changes.items_deleted.iter().map(|c| name(&c.item)).collect();
    let moved: Vec<String> = changes
        .items_moved
        .iter()
        .map(|m| {
            format!(
                "{} {}[{}] -> {}[{}]",
                name(&m.item),
                m.from.section,
                m.from.index,
                m.to.section,
                m.to.index
            )
        })
        .collect();

    if as_json {
        println!(
            "{}",
            json!({ "action": action, "inserted": inserted, "deleted": deleted, "moved": moved })
        );
    } else {
        println!("{}: +{:?} -{:?} ~{:?}", action, inserted, deleted, moved);
    }
}
