use kernel::prelude::entity::PlacePhoto;

static ABSOLUTE_URL_MARKER: &str = "https://";

/// Turns a stored photo reference into a URL a browser can load.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    base: String,
}

impl ImageResolver {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Absolute references pass through; anything else, including a missing
    /// reference, is joined onto the uploads base. The result is not
    /// guaranteed to exist.
    pub fn resolve(&self, reference: Option<&str>) -> String {
        match reference {
            Some(reference) if reference.contains(ABSOLUTE_URL_MARKER) => reference.to_string(),
            reference => format!("{}/{}", self.base, reference.unwrap_or_default()),
        }
    }

    pub fn resolve_photo(&self, photo: &PlacePhoto) -> String {
        let reference: &String = photo.as_ref();
        self.resolve(Some(reference))
    }
}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::PlacePhoto;

    use super::ImageResolver;

    fn resolver() -> ImageResolver {
        ImageResolver::new("https://uploads.example.com/uploads/")
    }

    #[test]
    fn relative_reference_gets_base() {
        assert_eq!(
            resolver().resolve(Some("abc.jpg")),
            "https://uploads.example.com/uploads/abc.jpg"
        );
    }

    #[test]
    fn absolute_reference_passes_through() {
        assert_eq!(
            resolver().resolve(Some("https://cdn.example.com/x.jpg")),
            "https://cdn.example.com/x.jpg"
        );
        assert_eq!(
            resolver().resolve_photo(&PlacePhoto::new("https://cdn.example.com/y.jpg")),
            "https://cdn.example.com/y.jpg"
        );
    }

    #[test]
    fn missing_reference_still_gets_base() {
        assert_eq!(resolver().resolve(None), "https://uploads.example.com/uploads/");
        assert_eq!(resolver().resolve(Some("")), "https://uploads.example.com/uploads/");
    }

    #[test]
    fn plain_http_is_treated_as_relative() {
        assert_eq!(
            resolver().resolve(Some("http://cdn.example.com/x.jpg")),
            "https://uploads.example.com/uploads/http://cdn.example.com/x.jpg"
        );
    }
}
