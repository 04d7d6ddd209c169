use std::fmt::{Display, Formatter};

use kernel::prelude::entity::{DestructPlace, Place};

use crate::presenter::Exhaust;
use crate::view::ImageResolver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingView {
    pub title: String,
    pub photos: Vec<String>,
}

pub struct ListingPresenter<'a> {
    images: &'a ImageResolver,
}

impl<'a> ListingPresenter<'a> {
    pub fn new(images: &'a ImageResolver) -> Self {
        Self { images }
    }
}

impl Exhaust<Place> for ListingPresenter<'_> {
    type To = ListingView;
    fn emit(&self, input: Place) -> Self::To {
        let DestructPlace { title, photos, .. } = input.into_destruct();
        ListingView {
            title: String::from(title),
            photos: photos
                .iter()
                .map(|photo| self.images.resolve_photo(photo))
                .collect(),
        }
    }
}

impl Display for ListingView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if !self.title.is_empty() {
            writeln!(f, "== {} ==", self.title)?;
        }
        for photo in &self.photos {
            writeln!(f, "  {photo}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::{Place, PlaceId, PlacePhoto, PlacePrice, PlaceTitle};

    use crate::presenter::Exhaust;
    use crate::view::{ImageResolver, ListingPresenter};

    #[test]
    fn resolves_every_photo() {
        let place = Place::new(PlaceId::new("p1"), PlacePrice::new(100), None).with_listing(
            PlaceTitle::new("Cabin"),
            vec![
                PlacePhoto::new("cabin.jpg"),
                PlacePhoto::new("https://cdn.example.com/porch.jpg"),
            ],
        );
        let images = ImageResolver::new("https://uploads.example.com/uploads");
        let view = ListingPresenter::new(&images).emit(place);
        assert_eq!(
            view.photos,
            vec![
                "https://uploads.example.com/uploads/cabin.jpg".to_string(),
                "https://cdn.example.com/porch.jpg".to_string(),
            ]
        );
        assert_eq!(
            view.to_string(),
            "== Cabin ==\n  https://uploads.example.com/uploads/cabin.jpg\n  https://cdn.example.com/porch.jpg\n"
        );
    }

    #[test]
    fn untitled_listing_prints_photos_only() {
        let place = Place::new(PlaceId::new("p1"), PlacePrice::new(100), None);
        let images = ImageResolver::new("https://uploads.example.com/uploads");
        assert_eq!(ListingPresenter::new(&images).emit(place).to_string(), "");
    }
}
