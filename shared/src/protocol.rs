use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body of `POST /films` and `PUT /films`.
///
/// Every field is optional so the same shape serves creation (where the
/// server insists on the required ones) and partial updates (where absent
/// fields keep their stored value).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmPayload {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub genres: Option<Vec<GenreView>>,
    #[serde(default)]
    pub mpa: Option<String>,
}

/// Film as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmView {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: u32,
    pub likes: Vec<u64>,
    pub genres: Vec<GenreView>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub mpa: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreView {
    pub id: u64,
    pub name: String,
}

/// Body of `POST /users` and `PUT /users`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
}

/// User as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: u64,
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: NaiveDate,
    pub friendship: Vec<FriendshipView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendshipView {
    pub user_id: u64,
    pub status: FriendshipStatusView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FriendshipStatusView {
    Unconfirmed,
    Confirmed,
}

/// Query string of `GET /films/popular`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PopularQuery {
    #[serde(default)]
    pub count: Option<i64>,
}

/// Body returned with every 4xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn film_payload_reads_camel_case_and_tolerates_missing_fields() {
        let payload: FilmPayload = serde_json::from_str(
            r#"{"name":"Alien","releaseDate":"1979-05-25","duration":117,"mpa":"R"}"#,
        )
        .unwrap();

        assert_eq!(payload.id, None);
        assert_eq!(payload.name.as_deref(), Some("Alien"));
        assert_eq!(payload.release_date, NaiveDate::from_ymd_opt(1979, 5, 25));
        assert_eq!(payload.duration, Some(117));
        assert!(payload.description.is_none());
        assert!(payload.genres.is_none());
    }

    #[test]
    fn film_view_omits_missing_rating() {
        let view = FilmView {
            id: 1,
            name: "Alien".into(),
            description: String::new(),
            release_date: NaiveDate::from_ymd_opt(1979, 5, 25).unwrap(),
            duration: 117,
            likes: vec![],
            genres: vec![],
            mpa: None,
        };

        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("mpa").is_none());
        assert_eq!(json["releaseDate"], "1979-05-25");
    }

    #[test]
    fn friendship_status_uses_upper_case_names() {
        let json = serde_json::to_string(&FriendshipStatusView::Unconfirmed).unwrap();
        assert_eq!(json, r#""UNCONFIRMED""#);
    }
}
