use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{delete, get, post, State};
use crate::handlers::{ApiError, FolderHandler, NewFolderRequest, SerializedFolder};
use super::body::JsonBody;

#[get("/folders")]
pub async fn list_folders(
    handler: &State<FolderHandler>,
) -> Result<Json<Vec<SerializedFolder>>, ApiError> {
    handler.list().await.map(Json)
}

#[post("/folders", data = "<request>")]
pub async fn create_folder(
    handler: &State<FolderHandler>,
    request: JsonBody<NewFolderRequest>,
) -> Result<(Status, Json<SerializedFolder>), ApiError> {
    let folder = handler.create(request.into_inner()).await?;
    Ok((Status::Created, Json(folder)))
}

#[get("/folders/<id>")]
pub async fn get_folder(
    handler: &State<FolderHandler>,
    id: i64,
) -> Result<Json<SerializedFolder>, ApiError> {
    let folder = handler.fetch_by_id(id).await?;
    Ok(Json(handler.get(folder)))
}

#[delete("/folders/<id>")]
pub async fn delete_folder(
    handler: &State<FolderHandler>,
    id: i64,
) -> Result<Status, ApiError> {
    let folder = handler.fetch_by_id(id).await?;
    handler.delete(folder).await?;
    Ok(Status::NoContent)
}
