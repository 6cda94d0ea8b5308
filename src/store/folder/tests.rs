use super::*;

fn make_store() -> SqliteFolderStore {
    SqliteFolderStore::new(
        Database::open_in_memory().expect("in-memory database failed to open")
    )
}

fn new_folder(name: &str) -> NewFolder {
    NewFolder { folder_name: name.to_owned() }
}

#[tokio::test]
async fn list_empty() {
    let store = make_store();
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn insert_assigns_ids_and_lists_in_order() {
    let store = make_store();
    let first = store.insert(new_folder("Important")).await.unwrap();
    let second = store.insert(new_folder("Super")).await.unwrap();
    assert_eq!(first, Folder { id: 1, folder_name: "Important".into() });
    assert_eq!(second, Folder { id: 2, folder_name: "Super".into() });
    assert_eq!(store.list().await.unwrap(), vec![first, second]);
}

#[tokio::test]
async fn insert_keeps_markup_raw() {
    let store = make_store();
    let folder = store.insert(new_folder("<script>alert(1)</script>")).await.unwrap();
    assert_eq!(folder.folder_name, "<script>alert(1)</script>");
}

#[tokio::test]
async fn insert_empty_name_violates_schema() {
    let store = make_store();
    let err = store.insert(new_folder("")).await
        .expect_err("should fail");
    assert!(matches!(err, StoreError::Sqlite(_)), "wrong error type: {err:#?}");
}

#[tokio::test]
async fn get_by_id_found_and_absent() {
    let store = make_store();
    let folder = store.insert(new_folder("Spangley")).await.unwrap();
    assert_eq!(store.get_by_id(folder.id).await.unwrap(), Some(folder));
    assert_eq!(store.get_by_id(1234).await.unwrap(), None);
}

#[tokio::test]
async fn delete_by_id_removes_only_that_row() {
    let store = make_store();
    let kept = store.insert(new_folder("kept")).await.unwrap();
    let removed = store.insert(new_folder("removed")).await.unwrap();

    assert_eq!(store.delete_by_id(removed.id).await.unwrap(), 1);
    assert_eq!(store.list().await.unwrap(), vec![kept]);
}

#[tokio::test]
async fn delete_by_id_absent_is_not_an_error() {
    let store = make_store();
    assert_eq!(store.delete_by_id(42).await.unwrap(), 0);
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let store = make_store();
    let folder = store.insert(new_folder("first")).await.unwrap();
    store.delete_by_id(folder.id).await.unwrap();
    let next = store.insert(new_folder("second")).await.unwrap();
    assert!(next.id > folder.id);
}

#[tokio::test]
async fn update_by_id_renames() {
    let store = make_store();
    let folder = store.insert(new_folder("old")).await.unwrap();
    let updated = store
        .update_by_id(
            folder.id,
            FolderUpdate { folder_name: Some("new".into()) },
        )
        .await
        .unwrap();
    assert_eq!(updated, 1);
    assert_eq!(
        store.get_by_id(folder.id).await.unwrap().unwrap().folder_name,
        "new",
    );
}

#[tokio::test]
async fn update_by_id_absent_touches_nothing() {
    let store = make_store();
    let updated = store
        .update_by_id(7, FolderUpdate { folder_name: Some("x".into()) })
        .await
        .unwrap();
    assert_eq!(updated, 0);
}

#[tokio::test]
async fn update_by_id_empty_update() {
    let store = make_store();
    let folder = store.insert(new_folder("name")).await.unwrap();
    let err = store.update_by_id(folder.id, FolderUpdate::default()).await
        .expect_err("should fail");
    assert!(matches!(err, StoreError::EmptyUpdate), "wrong error type: {err:#?}");
}
