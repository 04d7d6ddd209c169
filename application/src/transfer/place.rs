pub struct GetPlaceDto {
    pub id: String,
}
