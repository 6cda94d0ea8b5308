use async_trait::async_trait;
use rocket::data::{self, Data, FromData};
use rocket::serde::json::{self, Json};
use rocket::serde::Deserialize;
use rocket::Request;

/// A JSON request body where an empty body reads as `T::default()`, so a
/// bodyless POST reaches field validation instead of failing to parse.
/// Anything else non-empty goes through Rocket's `Json` guard unchanged.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T> JsonBody<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

#[async_trait]
impl<'r, T: Deserialize<'r> + Default> FromData<'r> for JsonBody<T> {
    type Error = json::Error<'r>;

    async fn from_data(
        request: &'r Request<'_>,
        mut data: Data<'r>,
    ) -> data::Outcome<'r, Self> {
        if data.peek(1).await.is_empty() {
            return data::Outcome::Success(JsonBody(T::default()));
        }
        Json::<T>::from_data(request, data).await
            .map(|json| JsonBody(json.into_inner()))
    }
}
