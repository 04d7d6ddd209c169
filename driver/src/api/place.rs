use serde::Deserialize;

use kernel::interface::query::PlaceQuery;
use kernel::prelude::entity::{
    Place, PlaceId, PlaceMaxGuests, PlacePhoto, PlacePrice, PlaceTitle,
};
use kernel::KernelError;

use crate::api::{read_json, HttpBackend};
use crate::error::{ConvertError, DriverError};

#[async_trait::async_trait]
impl PlaceQuery for HttpBackend {
    async fn find_by_id(&self, id: &PlaceId) -> error_stack::Result<Option<Place>, KernelError> {
        HttpPlaceInternal::find_by_id(self, id).await.convert_error()
    }
}

#[derive(Debug, Deserialize)]
struct PlaceRow {
    #[serde(rename = "_id", alias = "id")]
    id: String,
    price: f64,
    #[serde(rename = "maxGuests", default)]
    max_guests: Option<u32>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    photos: Vec<String>,
}

impl From<PlaceRow> for Place {
    fn from(value: PlaceRow) -> Self {
        Place::new(
            PlaceId::new(value.id),
            PlacePrice::new(value.price),
            PlaceMaxGuests::bounded(value.max_guests),
        )
        .with_listing(
            PlaceTitle::new(value.title),
            value.photos.into_iter().map(PlacePhoto::new).collect(),
        )
    }
}

pub(in crate::api) struct HttpPlaceInternal;

impl HttpPlaceInternal {
    async fn find_by_id(backend: &HttpBackend, id: &PlaceId) -> Result<Option<Place>, DriverError> {
        let response = backend
            .get(&format!("/places/{}", id.as_ref()))
            .send()
            .await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let row: Option<PlaceRow> = read_json(response).await?;
        Ok(row.map(Place::from))
    }
}
