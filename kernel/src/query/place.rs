use crate::entity::{Place, PlaceId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait PlaceQuery: Sync + Send + 'static {
    async fn find_by_id(&self, id: &PlaceId) -> error_stack::Result<Option<Place>, KernelError>;
}

pub trait DependOnPlaceQuery: Sync + Send + 'static {
    type PlaceQuery: PlaceQuery;
    fn place_query(&self) -> &Self::PlaceQuery;
}
