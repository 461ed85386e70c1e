use async_trait::async_trait;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity, returning the stored row
    async fn create(&self, entity: &Entity) -> LibraryResult<Entity>;

    // overwrites an entity, returning the stored row
    async fn update(&self, entity: &Entity) -> LibraryResult<Entity>;

    // get an entity
    async fn get(&self, id: &str) -> LibraryResult<Entity>;

    // delete an entity
    async fn delete(&self, id: &str) -> LibraryResult<usize>;

    // all entities
    async fn list(&self) -> LibraryResult<Vec<Entity>>;
}
