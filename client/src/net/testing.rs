//! Test doubles shared by the `net` test modules.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::api::ApiClient;
use super::transport::{HttpRequest, HttpResponse, Transport, TransportError};
use super::types::LoginResponse;
use crate::state::session::SessionStore;
use crate::util::storage::MemoryStorage;

/// Transport replaying canned responses and recording every request.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    sent: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn new(responses: Vec<(u16, &str)>) -> Self {
        Self {
            responses: Mutex::new(
                responses
                    .into_iter()
                    .map(|(status, body)| Ok(HttpResponse { status, body: body.to_owned() }))
                    .collect(),
            ),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub(crate) fn last(&self) -> HttpRequest {
        self.requests().pop().unwrap()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.sent.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("script exhausted".to_owned())))
    }
}

/// Client against `http://api.test` with a stored token pair.
pub(crate) fn signed_in_client(transport: Arc<ScriptedTransport>) -> (ApiClient, SessionStore) {
    let session = SessionStore::new(Arc::new(MemoryStorage::new()));
    session.begin(&LoginResponse {
        access_token: "old-access".to_owned(),
        refresh_token: "refresh-1".to_owned(),
        user: None,
        provider: None,
    });
    let client = ApiClient::new("http://api.test/", transport, session.clone());
    (client, session)
}

/// Client whose transport answers every call with `(status, body)` once.
pub(crate) fn client_answering(status: u16, body: &str) -> (ApiClient, Arc<ScriptedTransport>) {
    let transport = Arc::new(ScriptedTransport::new(vec![(status, body)]));
    let (client, _) = signed_in_client(transport.clone());
    (client, transport)
}
