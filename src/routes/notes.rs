use rocket::http::Status;
use rocket::response::status::Created;
use rocket::serde::json::Json;
use rocket::{delete, get, post, uri, State};
use crate::handlers::{ApiError, NewNoteRequest, NoteHandler, SerializedNote};
use super::body::JsonBody;

#[get("/notes")]
pub async fn list_notes(
    handler: &State<NoteHandler>,
) -> Result<Json<Vec<SerializedNote>>, ApiError> {
    handler.list().await.map(Json)
}

#[post("/notes", data = "<request>")]
pub async fn create_note(
    handler: &State<NoteHandler>,
    request: JsonBody<NewNoteRequest>,
) -> Result<Created<Json<SerializedNote>>, ApiError> {
    let note = handler.create(request.into_inner()).await?;
    let location = uri!(get_note(id = note.id));
    Ok(Created::new(location.to_string()).body(Json(note)))
}

#[get("/notes/<id>")]
pub async fn get_note(
    handler: &State<NoteHandler>,
    id: i64,
) -> Result<Json<SerializedNote>, ApiError> {
    let note = handler.fetch_by_id(id).await?;
    Ok(Json(handler.get(note)))
}

#[delete("/notes/<id>")]
pub async fn delete_note(
    handler: &State<NoteHandler>,
    id: i64,
) -> Result<Status, ApiError> {
    let note = handler.fetch_by_id(id).await?;
    handler.delete(note).await?;
    Ok(Status::NoContent)
}
