use std::sync::Arc;
use async_trait::async_trait;
use log::{error, info};
use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Build, Orbit, Rocket};
use crate::config::app_config::AppConfig;
use crate::handlers::{FolderHandler, NoteHandler};
use crate::routes::ApiRocketBuildExt;
use crate::store::{Database, SqliteFolderStore, SqliteNoteStore};

/// Loads the app config, opens the database, and installs the handlers
/// and routes into the rocket being ignited.
pub struct AppSetupFairing;

impl AppSetupFairing {
    pub fn new() -> Self {
        AppSetupFairing
    }
}

impl Default for AppSetupFairing {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! ok_or_bail {
    ($rocket:ident, $expr:expr, |$e:ident| $error_logger:expr) => ({
        match $expr {
            std::result::Result::Ok(ok) => ok,
            std::result::Result::Err(e) => {
                let $e = e;
                $error_logger;
                return std::result::Result::Err($rocket);
            },
        }
    });
}

#[async_trait]
impl Fairing for AppSetupFairing {
    fn info(&self) -> Info {
        Info {
            name: "app setup",
            kind: Kind::Ignite | Kind::Liftoff,
        }
    }

    async fn on_ignite(
        &self,
        rocket: Rocket<Build>,
    ) -> rocket::fairing::Result {
        let config: AppConfig = ok_or_bail!(
            rocket,
            rocket.figment().extract(),
            |e| {
                for e in e {
                    error!("{e}");
                }
                info!("finishing due to a config parse error");
            }
        );

        let db = ok_or_bail!(
            rocket,
            Database::open(&config).await,
            |e| error!(
                "failed to open database at {}: {e}",
                config.database_path.display(),
            )
        );

        let folder_handler = FolderHandler::new(
            Arc::new(SqliteFolderStore::new(db.clone()))
        );
        let note_handler = NoteHandler::new(
            Arc::new(SqliteNoteStore::new(db))
        );

        Ok(
            rocket
                .manage(folder_handler)
                .manage(note_handler)
                .install_noteful_api()
        )
    }

    async fn on_liftoff(
        &self,
        rocket: &Rocket<Orbit>,
    ) {
        let config = rocket.config();
        info!("serving folders and notes on {}:{}", config.address, config.port);
    }
}
