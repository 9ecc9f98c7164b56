/*!
Request and response types for the photo search API.
*/
use typed_builder::TypedBuilder;
use uuid::Uuid;

/// A request to look up photos for a set of search terms.
#[derive(Debug, Clone, TypedBuilder)]
pub struct SearchRequest {
    #[builder(setter(skip), default = Uuid::new_v4())]
    uuid: Uuid,
    terms: Vec<String>,
}

impl SearchRequest {
    pub fn uuid(&self) -> &Uuid {
        &self.uuid
    }

    /// The query string for the lookup: the terms joined by spaces.
    pub fn query(&self) -> String {
        self.terms.join(" ")
    }
}

/// The photos found for a request.
#[derive(Debug, Clone)]
pub struct SearchResponse {
    uuid: Uuid,
    photos: Vec<Photo>,
}

impl SearchResponse {
    pub fn new(uuid: Uuid, photos: Vec<Photo>) -> Self {
        Self { uuid, photos }
    }

    pub fn uuid(&self) -> &Uuid {
        &self.uuid
    }

    pub fn into_photos(self) -> Vec<Photo> {
        self.photos
    }
}

/// One photo search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    id: String,
    description: Option<String>,
    author: String,
    thumbnail_url: String,
}

impl Photo {
    pub fn new(
        id: String,
        description: Option<String>,
        author: String,
        thumbnail_url: String,
    ) -> Self {
        Self {
            id,
            description,
            author,
            thumbnail_url,
        }
    }

    /// The display title: the description if the photo has one, otherwise the identifier.
    pub fn title(&self) -> &str {
        match &self.description {
            Some(description) => description,
            None => &self.id,
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn thumbnail_url(&self) -> &str {
        &self.thumbnail_url
    }
}

/// Parse the JSON body of the search endpoint into photos.
pub fn parse_search_body(body: &str) -> Result<Vec<Photo>, serde_json::Error> {
    let body: wire::SearchBody = serde_json::from_str(body)?;
    Ok(body.results.into_iter().map(Photo::from).collect())
}

impl From<wire::Hit> for Photo {
    fn from(hit: wire::Hit) -> Self {
        Photo {
            id: hit.id,
            description: hit.description,
            author: hit.user.name,
            thumbnail_url: hit.urls.small,
        }
    }
}

mod wire {
    //! The JSON shape of the search endpoint.
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct SearchBody {
        pub results: Vec<Hit>,
    }

    #[derive(Deserialize)]
    pub struct Hit {
        pub id: String,
        pub description: Option<String>,
        pub urls: Urls,
        pub user: User,
    }

    #[derive(Deserialize)]
    pub struct Urls {
        pub small: String,
    }

    #[derive(Deserialize)]
    pub struct User {
        pub name: String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_body() {
        let body = r#"
            {
                "total": 2,
                "results": [
                    {
                        "id": "a1b2",
                        "description": "A cat on a roof",
                        "urls": {"small": "https://example.com/a1b2-small.jpg"},
                        "user": {"name": "Ada"}
                    },
                    {
                        "id": "c3d4",
                        "description": null,
                        "urls": {"small": "https://example.com/c3d4-small.jpg"},
                        "user": {"name": "Brin"}
                    }
                ]
            }
        "#;

        let photos: Vec<Photo> = parse_search_body(body).unwrap();

        assert_eq!(photos.len(), 2);
        assert_eq!(photos[0].title(), "A cat on a roof");
        assert_eq!(photos[0].author(), "Ada");
        assert_eq!(photos[0].thumbnail_url(), "https://example.com/a1b2-small.jpg");
        // A photo without a description falls back to its identifier.
        assert_eq!(photos[1].title(), "c3d4");
    }

    #[test]
    fn test_parse_search_body_rejects_garbage() {
        assert!(parse_search_body("not json").is_err());
    }

    #[test]
    fn test_request_query_joins_terms() {
        let request = SearchRequest::builder()
            .terms(vec!["cats".to_string(), "roof".to_string()])
            .build();

        assert_eq!(request.query(), "cats roof");
    }
}
