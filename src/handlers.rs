//! Request handling for the folder and note resources, independent of the
//! HTTP framework: validation, store delegation and output serialization.

mod errors;
mod folders;
mod model;
mod notes;
#[cfg(test)] mod mocks;

pub use errors::{ApiError, ErrorBody, ErrorMessage};
pub use errors::{FOLDER_NOT_FOUND, NOTE_NOT_FOUND, SERVER_ERROR};
pub use folders::FolderHandler;
pub use model::{NewFolderRequest, NewNoteRequest, SerializedFolder, SerializedNote};
pub use notes::NoteHandler;
