/*!
The background thread which performs photo lookups.

Requests arrive over a channel and responses are sent back over another, so the
lookup never blocks the event loop. A failed lookup is logged and swallowed; no
response is sent, which leaves the previous results on screen.
*/
use crate::api::{parse_search_body, Photo, SearchRequest, SearchResponse};

use std::fmt::{Display, Formatter, Result as FormatResult};
use std::io::Error as IOError;

use crossbeam::channel::{Receiver, Sender};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct PhotoRequester {
    base_url: String,
    access_key: String,
    #[builder(setter(skip), default = ureq::agent())]
    agent: ureq::Agent,
}

impl PhotoRequester {
    pub fn run(
        &mut self,
        request_rx: Receiver<SearchRequest>,
        response_tx: Sender<SearchResponse>,
    ) {
        #[cfg(feature = "logging")]
        log::info!("Requester running.");

        loop {
            let request: SearchRequest = match request_rx.recv() {
                Ok(request) => request,
                Err(_) => {
                    // The request channel closes when the application is shutting down.
                    break;
                }
            };
            #[cfg(feature = "logging")]
            log::debug!(
                "Received request {} for \"{}\".",
                request.uuid(),
                request.query()
            );

            let photos: Vec<Photo> = match self.search(&request) {
                Ok(photos) => photos,
                #[allow(unused_variables)]
                Err(error) => {
                    #[cfg(feature = "logging")]
                    log::error!("Lookup for \"{}\" failed: {}", request.query(), error);
                    continue;
                }
            };
            #[cfg(feature = "logging")]
            log::debug!(
                "Lookup for request {} found {} photos.",
                request.uuid(),
                photos.len()
            );

            let response = SearchResponse::new(*request.uuid(), photos);
            if response_tx.send(response).is_err() {
                break;
            }
        }

        #[cfg(feature = "logging")]
        log::info!("Requester stopping...");
    }

    fn search(&self, request: &SearchRequest) -> Result<Vec<Photo>, SearchError> {
        let url: String = format!("{}/search/photos", self.base_url);
        let body: String = self
            .agent
            .get(&url)
            .query("client_id", &self.access_key)
            .query("query", &request.query())
            .call()?
            .into_string()?;
        Ok(parse_search_body(&body)?)
    }
}

pub enum SearchError {
    Http(Box<ureq::Error>),
    Read(IOError),
    Parse(serde_json::Error),
}

impl From<ureq::Error> for SearchError {
    fn from(error: ureq::Error) -> Self {
        Self::Http(Box::new(error))
    }
}

impl From<IOError> for SearchError {
    fn from(error: IOError) -> Self {
        Self::Read(error)
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse(error)
    }
}

impl Display for SearchError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        match self {
            Self::Http(error) => write!(formatter, "{}", error),
            Self::Read(error) => write!(formatter, "failed to read the response body: {}", error),
            Self::Parse(error) => write!(formatter, "failed to parse the response body: {}", error),
        }
    }
}
