//! Headless session driver: builds a player inventory and a crate from
//! config, runs one open/loot/close cycle and logs what happened.

use anyhow::{Context, Result, anyhow};
use std::{env, fs, path::PathBuf};
use tracing::info;

use satchel::inventory::layout;
use satchel::{
    CrateId, Interactable, Inventory, ItemRegistry, LootCrate, SatchelConfig, TransferCoordinator,
};

#[derive(Debug, Default)]
struct CliOptions {
    config: Option<PathBuf>,
    catalog: Option<PathBuf>,
}

impl CliOptions {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut options = CliOptions::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let path = args.next().ok_or_else(|| anyhow!("--config needs a path"))?;
                    options.config = Some(PathBuf::from(path));
                }
                "--catalog" => {
                    let path = args.next().ok_or_else(|| anyhow!("--catalog needs a path"))?;
                    options.catalog = Some(PathBuf::from(path));
                }
                other => return Err(anyhow!("unknown argument: {other}")),
            }
        }
        Ok(options)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting satchel v{}", env!("CARGO_PKG_VERSION"));

    let cli = CliOptions::parse(env::args().skip(1))?;
    let config = match &cli.config {
        Some(path) => SatchelConfig::load_from_path(path),
        None => SatchelConfig::load(),
    };

    let registry = match &cli.catalog {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading catalog {}", path.display()))?;
            ItemRegistry::from_json_str(&json)
                .with_context(|| format!("loading catalog {}", path.display()))?
        }
        None => ItemRegistry::create_default(),
    };

    let mut player = Inventory::new(layout::player_slots(&config.layout));
    if let Some(starter_id) = &config.starter.item {
        let item = registry
            .get(starter_id)
            .ok_or_else(|| anyhow!("starter item '{starter_id}' is not in the catalog"))?;
        let added = player.add_starter_items(item, config.starter.count);
        info!(item = %starter_id, added, "granted starter items");
    }

    let mut coordinator = TransferCoordinator::from_config(&config);
    let crate_id = coordinator.add_crate(LootCrate::from_config(CrateId(1), &config.loot));

    coordinator.focus(Interactable::Crate(crate_id));
    let view = coordinator.open_crate(crate_id, &registry)?;
    let occupied: Vec<usize> = view
        .slots()
        .iter()
        .enumerate()
        .filter(|(_, slot)| !slot.is_empty())
        .map(|(index, _)| index)
        .collect();

    for index in occupied {
        let moved = coordinator.take_from_crate(index, &mut player, &registry)?;
        info!(slot = index, moved, "looted");
    }
    coordinator.unfocus(Interactable::Crate(crate_id));

    for stack in player.iter_items() {
        info!(item = %stack.item_id, quantity = stack.quantity, "player holds");
    }
    if let Some(loot_crate) = coordinator.loot_crate(crate_id) {
        info!(left = loot_crate.items().len(), "crate keeps");
    }

    Ok(())
}
