//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! A [`MockClient`] stands in for a real actor: queue up expectations with
//! [`MockClient::expect_get`], [`MockClient::expect_create`] and friends,
//! hand out [`MockClient::client`] to the code under test, then call
//! [`MockClient::verify`]. The lower-level [`create_mock_client`] /
//! [`expect_get`] helpers give direct access to the request channel when a
//! test needs to inspect payloads.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A queued expectation and the canned response to return for it.
enum Expectation<T: ActorEntity> {
    Get {
        #[allow(dead_code)]
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Update {
        #[allow(dead_code)]
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        #[allow(dead_code)]
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        #[allow(dead_code)]
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

/// A mock actor client with expectation tracking.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Product>::new();
/// mock.expect_get("product_1".to_string()).return_ok(Some(product));
///
/// let client = mock.client();
/// // Drive the code under test...
/// mock.verify(); // All expectations consumed?
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Background task answers each request with the next queued response.
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Get { respond_to, .. },
                        Some(Expectation::Get { response, .. }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::List { respond_to },
                        Some(Expectation::List { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { respond_to, .. },
                        Some(Expectation::Update { response, .. }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { respond_to, .. },
                        Some(Expectation::Delete { response, .. }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { respond_to, .. },
                        Some(Expectation::Action { response, .. }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self, id: T::Id) -> UpdateExpectationBuilder<T> {
        UpdateExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self, id: T::Id) -> DeleteExpectationBuilder<T> {
        DeleteExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response: Ok(value),
        });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: ActorEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> CreateExpectationBuilder<T> {
    pub fn return_ok(self, id: T::Id) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create { response: Ok(id) });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create { response: Err(error) });
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: ActorEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> ListExpectationBuilder<T> {
    pub fn return_ok(self, items: Vec<T>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::List { response: Ok(items) });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::List { response: Err(error) });
    }
}

/// Builder for `update` expectations.
pub struct UpdateExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> UpdateExpectationBuilder<T> {
    pub fn return_ok(self, value: T) {
        self.expectations.lock().unwrap().push_back(Expectation::Update {
            id: self.id,
            response: Ok(value),
        });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations.lock().unwrap().push_back(Expectation::Update {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `delete` expectations.
pub struct DeleteExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> DeleteExpectationBuilder<T> {
    pub fn return_ok(self) {
        self.expectations.lock().unwrap().push_back(Expectation::Delete {
            id: self.id,
            response: Ok(()),
        });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations.lock().unwrap().push_back(Expectation::Delete {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    pub fn return_ok(self, result: T::ActionResult) {
        self.expectations.lock().unwrap().push_back(Expectation::Action {
            id: self.id,
            response: Ok(result),
        });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations.lock().unwrap().push_back(Expectation::Action {
            id: self.id,
            response: Err(error),
        });
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a mock client and the receiver its requests arrive on.
///
/// Use this instead of [`MockClient`] when a test needs to assert on the
/// request payload itself (e.g. which quantity a `SetItemQuantity` carried)
/// rather than just scripting responses.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Receives the next request and asserts it is a `Create`.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::CreateParams,
    tokio::sync::oneshot::Sender<Result<T::Id, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Receives the next request and asserts it is a `Get`.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    tokio::sync::oneshot::Sender<Result<Option<T>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Receives the next request and asserts it is an `Action`.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    tokio::sync::oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}
