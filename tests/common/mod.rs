#![allow(dead_code)]

use std::path::Path;
use noteful::app_setup::AppSetupFairing;
use noteful::bin_constants::IN_MEMORY_DATABASE_PATH;
use noteful::config::figment::FigmentExt;
use noteful::handlers::{ErrorBody, SerializedFolder, SerializedNote};
use rocket::figment::Figment;
use rocket::http::Status;
use rocket::local::blocking::{Client, LocalResponse};
use serde_json::{json, Value};

pub fn figment(database_path: impl AsRef<Path>) -> Figment {
    Figment::from(rocket::Config::debug_default())
        .setup_app_config_defaults()
        .merge(("database_path", database_path.as_ref()))
        .merge(("log_level", "off"))
}

pub fn client_for(figment: Figment) -> Client {
    Client::tracked(
        rocket::custom(figment).attach(AppSetupFairing::new())
    ).expect("valid rocket instance")
}

pub fn client() -> Client {
    client_for(figment(IN_MEMORY_DATABASE_PATH))
}

pub fn post_json<'c>(client: &'c Client, uri: &'static str, body: Value) -> LocalResponse<'c> {
    client.post(uri).json(&body).dispatch()
}

pub fn create_folder(client: &Client, name: &str) -> SerializedFolder {
    let response = post_json(client, "/folders", json!({ "folder_name": name }));
    assert_eq!(response.status(), Status::Created);
    response.into_json().expect("folder body")
}

pub fn create_note(
    client: &Client,
    name: &str,
    content: &str,
    folder_id: i64,
) -> SerializedNote {
    let response = post_json(
        client,
        "/notes",
        json!({ "note_name": name, "content": content, "folder_id": folder_id }),
    );
    assert_eq!(response.status(), Status::Created);
    response.into_json().expect("note body")
}

pub fn assert_error(response: LocalResponse<'_>, status: Status, message: &str) {
    assert_eq!(response.status(), status);
    assert_eq!(
        response.into_json::<ErrorBody>().expect("error body"),
        ErrorBody::new(message),
    );
}
