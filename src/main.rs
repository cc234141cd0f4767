use color_eyre::eyre::{eyre, WrapErr};
use cricket_core::utils::{Logging, SeededRandom, TimeEstimation};
use cricket_core::{SeasonSimulator, SeasonSnapshot};
use database::{DatabaseGenerator, DatabaseLoader, SnapshotStore};
use env_logger::Env;
use log::info;
use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let seed = match env::var("SEED") {
        Ok(value) => value.parse::<u64>().wrap_err("SEED must be an unsigned integer")?,
        Err(_) => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default(),
    };

    let seasons = match env::var("SEASONS") {
        Ok(value) => value.parse::<u16>().wrap_err("SEASONS must be a positive integer")?,
        Err(_) => 1,
    };

    let snapshot_out = env::var("SNAPSHOT_OUT").ok().map(PathBuf::from);

    let (database, estimated) = TimeEstimation::estimate(DatabaseLoader::load);
    let database = database.wrap_err("static database is malformed")?;

    info!("database loaded: {} ms", estimated);

    let mut snapshot = DatabaseGenerator::generate(&database, seed).map_err(|e| eyre!(e))?;
    let mut rng = SeededRandom::new(seed);

    info!("🎲 seed {}, playing {} season(s)", seed, seasons);

    for played in 1..=seasons {
        let season = snapshot.season;

        snapshot = Logging::estimate_result(
            || SeasonSimulator::play_season(snapshot, &mut rng),
            &format!("season {}", season),
        )?;

        log_tables(&snapshot);

        if let Some(path) = &snapshot_out {
            SnapshotStore::save(&snapshot, path)
                .wrap_err_with(|| format!("cannot write snapshot to {}", path.display()))?;
            info!("💾 snapshot written to {}", path.display());
        }

        if played < seasons {
            snapshot = SeasonSimulator::rollover(snapshot);
        }
    }

    Ok(())
}

fn log_tables(snapshot: &SeasonSnapshot) {
    for state in &snapshot.competitions {
        info!("📊 {} (season {})", state.competition, snapshot.season);

        for (position, row) in state.table.rows.iter().enumerate() {
            let name = snapshot
                .team(row.team_id)
                .map(|team| team.name.as_str())
                .unwrap_or("?");

            info!(
                "{:>2}. {:<22} P{:>2} W{:>2} L{:>2} D{:>2} {:>3} pts  net {:+}",
                position + 1,
                name,
                row.played,
                row.won,
                row.lost,
                row.drawn,
                row.points,
                row.net_runs
            );
        }
    }
}
