pub mod user_id;
pub mod film_id;
pub mod genre_id;
pub mod email;
pub mod login;
pub mod display_name;
pub mod birthday;
pub mod film_name;
pub mod description;
pub mod release_date;
pub mod film_duration;
pub mod mpa_rating;
pub mod friendship_status;

pub use user_id::UserId;
pub use film_id::FilmId;
pub use genre_id::GenreId;
pub use email::Email;
pub use login::Login;
pub use display_name::DisplayName;
pub use birthday::Birthday;
pub use film_name::FilmName;
pub use description::Description;
pub use release_date::ReleaseDate;
pub use film_duration::FilmDuration;
pub use mpa_rating::MpaRating;
pub use friendship_status::FriendshipStatus;
