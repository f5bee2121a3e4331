mod error;
mod http_mapping;
mod operations;
mod requests;
mod types;

pub use error::ServiceError;
pub use http_mapping::service_error_to_status_code;
pub use operations::{
    apply_artist_update, apply_band_update, apply_person_update, build_artist, build_band,
    build_person, natural_key, require_sort_key, validate_create_artist, validate_create_band,
    validate_create_person,
};
pub use requests::{CreateArtistRequest, CreateBandRequest, CreatePersonRequest};
pub use types::{Artist, Band, Person, PersonFields};
