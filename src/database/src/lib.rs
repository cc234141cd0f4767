mod generators;
mod loaders;
mod store;

pub use generators::*;
pub use loaders::*;
pub use store::*;

pub struct DatabaseEntity {
    pub teams: Vec<TeamEntity>,
    pub venues: Vec<VenueEntity>,
    pub names: NamesEntity,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> Result<DatabaseEntity, serde_json::Error> {
        Ok(DatabaseEntity {
            teams: TeamLoader::load()?,
            venues: VenueLoader::load()?,
            names: NamesLoader::load()?,
        })
    }
}
