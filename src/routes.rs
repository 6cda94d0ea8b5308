mod body;
mod errors;
mod folders;
mod notes;

use rocket::{catchers, routes, Build, Rocket};

pub const API_PREFIX: &str = "/";

pub trait ApiRocketBuildExt {
    fn install_noteful_api(self) -> Self;
}

impl ApiRocketBuildExt for Rocket<Build> {
    fn install_noteful_api(self) -> Self {
        self
            .mount(
                API_PREFIX,
                routes![
                    folders::list_folders,
                    folders::create_folder,
                    folders::get_folder,
                    folders::delete_folder,
                    notes::list_notes,
                    notes::create_note,
                    notes::get_note,
                    notes::delete_note,
                ],
            )
            .register(
                API_PREFIX,
                catchers![
                    errors::bad_request,
                    errors::not_found,
                    errors::unprocessable_entity,
                    errors::internal_error,
                    errors::default_catcher,
                ],
            )
    }
}
