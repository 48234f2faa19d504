//! Save-file persistence.
//!
//! One JSON document per slot, written atomically (temp file then rename).
//! Field names are fixed: older save files must keep loading, so unknown
//! species or move names degrade to fallbacks instead of failing the whole
//! record, and missing optional fields take serde defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::creature::{CreatureInst, MoveInstance};
use crate::errors::{SaveError, SaveResult};
use crate::move_data::{get_move_max_pp, FALLBACK_MOVE};
use crate::species::FALLBACK_SPECIES;
use crate::trainer::{Trainer, MAX_PARTY};
use schema::{Move, Species};

pub const SAVE_VERSION: &str = "1.0";
const SAVE_EXTENSION: &str = "json";
const DEFAULT_SAVE_DIR: &str = ".creature_adventure_saves";
/// Environment override for the save directory.
pub const SAVE_DIR_ENV: &str = "CREATURE_ADVENTURE_SAVE_DIR";

fn default_version() -> String {
    SAVE_VERSION.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SavedMove {
    name: String,
    current_pp: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SavedCreature {
    species_name: String,
    level: u8,
    current_hp: u16,
    #[serde(default)]
    exp: u32,
    #[serde(default)]
    moves: Vec<SavedMove>,
}

/// On-disk record. Derived stats are never written; they are recomputed on
/// load from species and level.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SaveRecord {
    player_name: String,
    #[serde(default)]
    player_x: i32,
    #[serde(default)]
    player_y: i32,
    #[serde(default)]
    pokeballs: u32,
    #[serde(default)]
    potions: u32,
    #[serde(default)]
    party: Vec<SavedCreature>,
    #[serde(default)]
    timestamp: String,
    #[serde(default = "default_version")]
    version: String,
}

impl SaveRecord {
    fn from_trainer(trainer: &Trainer) -> Self {
        SaveRecord {
            player_name: trainer.name.clone(),
            player_x: trainer.x,
            player_y: trainer.y,
            pokeballs: trainer.pokeballs,
            potions: trainer.potions,
            party: trainer
                .party
                .iter()
                .map(|creature| SavedCreature {
                    species_name: creature.species.to_string(),
                    level: creature.level,
                    current_hp: creature.current_hp,
                    exp: creature.exp,
                    moves: creature
                        .moves
                        .iter()
                        .map(|instance| SavedMove {
                            name: instance.move_.to_string(),
                            current_pp: instance.pp,
                        })
                        .collect(),
                })
                .collect(),
            timestamp: Utc::now().to_rfc3339(),
            version: SAVE_VERSION.to_string(),
        }
    }

    fn into_trainer(self) -> SaveResult<Trainer> {
        let mut trainer = Trainer::new(self.player_name);
        trainer.x = self.player_x;
        trainer.y = self.player_y;
        trainer.pokeballs = self.pokeballs;
        trainer.potions = self.potions;
        trainer.party = self
            .party
            .into_iter()
            .take(MAX_PARTY)
            .map(SavedCreature::into_creature)
            .collect::<SaveResult<Vec<_>>>()?;
        Ok(trainer)
    }
}

impl SavedCreature {
    fn into_creature(self) -> SaveResult<CreatureInst> {
        let species = Species::from_str(&self.species_name).unwrap_or_else(|_| {
            warn!(
                "unknown species {:?} in save record, substituting {}",
                self.species_name, FALLBACK_SPECIES
            );
            FALLBACK_SPECIES
        });
        let moves = self
            .moves
            .iter()
            .map(|saved| {
                let mv = Move::from_str(&saved.name).unwrap_or_else(|_| {
                    warn!(
                        "unknown move {:?} in save record, substituting {}",
                        saved.name, FALLBACK_MOVE
                    );
                    FALLBACK_MOVE
                });
                MoveInstance {
                    move_: mv,
                    pp: saved.current_pp.min(get_move_max_pp(mv)),
                }
            })
            .collect();
        CreatureInst::from_saved(species, self.level, self.current_hp, self.exp, moves)
            .map_err(|err| SaveError::Malformed(err.to_string()))
    }
}

/// One line per readable slot, enough for a load menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveSummary {
    /// Slot name (the file stem).
    pub name: String,
    pub trainer_name: String,
    /// RFC 3339, as written at save time.
    pub timestamp: String,
    pub party_size: usize,
    /// Highest level in the party.
    pub top_level: u8,
}

impl SaveSummary {
    fn saved_at(&self) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .map(|stamp| stamp.with_timezone(&Utc))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

/// Reads and writes save slots under a single directory.
#[derive(Debug, Clone)]
pub struct SaveManager {
    dir: PathBuf,
}

impl SaveManager {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        SaveManager { dir: dir.into() }
    }

    /// Uses `$CREATURE_ADVENTURE_SAVE_DIR` when set, otherwise a dot
    /// directory under the user's home.
    pub fn with_default_dir() -> Self {
        let dir = std::env::var_os(SAVE_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                std::env::var_os("HOME")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(DEFAULT_SAVE_DIR)
            });
        SaveManager::new(dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.{SAVE_EXTENSION}"))
    }

    /// Writes the trainer to `slot`. The record lands in a temp file first
    /// and is renamed into place, so a crash mid-write never leaves a
    /// half-written slot behind.
    pub fn save(&self, trainer: &Trainer, slot: &str) -> SaveResult<()> {
        fs::create_dir_all(&self.dir)?;
        let record = SaveRecord::from_trainer(trainer);
        let json = serde_json::to_vec_pretty(&record)
            .map_err(|err| SaveError::Serialize(err.to_string()))?;

        let path = self.slot_path(slot);
        let tmp = self.dir.join(format!("{slot}.{SAVE_EXTENSION}.tmp"));
        fs::write(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        info!("saved {} to slot {:?}", trainer.name, slot);
        Ok(())
    }

    /// Loads the trainer in `slot`. Either the whole roster loads or a typed
    /// error comes back; there is no partially-loaded state.
    pub fn load(&self, slot: &str) -> SaveResult<Trainer> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Err(SaveError::SlotNotFound(slot.to_string()));
        }
        let bytes = fs::read(&path)?;
        let record: SaveRecord =
            serde_json::from_slice(&bytes).map_err(|err| SaveError::Malformed(err.to_string()))?;
        record.into_trainer()
    }

    /// Summaries of every readable slot, newest first. Unreadable slots are
    /// skipped with a warning rather than failing the listing.
    pub fn list_saves(&self) -> Vec<SaveSummary> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };

        let mut summaries = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(SAVE_EXTENSION) {
                continue;
            }
            let Some(slot) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            match read_summary(slot, &path) {
                Ok(summary) => summaries.push(summary),
                Err(err) => warn!("skipping unreadable save {}: {}", path.display(), err),
            }
        }
        summaries.sort_by(|a, b| b.saved_at().cmp(&a.saved_at()));
        summaries
    }

    pub fn delete(&self, slot: &str) -> SaveResult<()> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Err(SaveError::SlotNotFound(slot.to_string()));
        }
        fs::remove_file(path)?;
        Ok(())
    }
}

fn read_summary(slot: &str, path: &Path) -> SaveResult<SaveSummary> {
    let bytes = fs::read(path)?;
    let record: SaveRecord =
        serde_json::from_slice(&bytes).map_err(|err| SaveError::Malformed(err.to_string()))?;
    Ok(SaveSummary {
        name: slot.to_string(),
        trainer_name: record.player_name,
        timestamp: record.timestamp,
        party_size: record.party.len(),
        top_level: record.party.iter().map(|saved| saved.level).max().unwrap_or(1),
    })
}

/// Conventional slot name for automatic saves.
pub fn auto_save_slot(trainer_name: &str) -> String {
    let cleaned: String = trainer_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{cleaned}_autosave")
}
