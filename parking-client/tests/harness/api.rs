use std::sync::{Arc, Mutex};

use parking_client::SpotApi;
use parking_core::{
    format::error::RequestError,
    messages::{
        entry::EntryRequest, reply::ApiReply, reserve_spot::ReserveSpotRequest,
        spots::SpotsSnapshot, validate_license_plate::ValidateLicensePlateRequest,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    FetchSpots,
    ValidateLicensePlate(ValidateLicensePlateRequest),
    ReserveSpot(ReserveSpotRequest),
    Entry(EntryRequest),
}

#[derive(Debug)]
struct Inner {
    calls: Mutex<Vec<ApiCall>>,
    spots: Mutex<Result<SpotsSnapshot, RequestError>>,
    validate_reply: Mutex<Result<ApiReply, RequestError>>,
    reserve_reply: Mutex<Result<ApiReply, RequestError>>,
    entry_reply: Mutex<Result<ApiReply, RequestError>>,
}

/// Answers every call immediately with whatever the handle last configured.
pub struct MockApi {
    inner: Arc<Inner>,
}

#[derive(Debug, Clone)]
pub struct MockApiHandle {
    inner: Arc<Inner>,
}

impl MockApi {
    pub fn new(spots: SpotsSnapshot) -> (Self, MockApiHandle) {
        let inner = Arc::new(Inner {
            calls: Default::default(),
            spots: Mutex::new(Ok(spots)),
            validate_reply: Mutex::new(Ok(ApiReply::accepted())),
            reserve_reply: Mutex::new(Ok(ApiReply::accepted())),
            entry_reply: Mutex::new(Ok(ApiReply::accepted())),
        });
        (
            Self {
                inner: inner.clone(),
            },
            MockApiHandle { inner },
        )
    }

    fn record(&self, call: ApiCall) {
        log::debug!("mock api call: {:?}", call);
        self.inner.calls.lock().unwrap().push(call);
    }
}

impl SpotApi for MockApi {
    async fn fetch_spots(&self) -> Result<SpotsSnapshot, RequestError> {
        self.record(ApiCall::FetchSpots);
        self.inner.spots.lock().unwrap().clone()
    }

    async fn validate_license_plate(
        &self,
        request: &ValidateLicensePlateRequest,
    ) -> Result<ApiReply, RequestError> {
        self.record(ApiCall::ValidateLicensePlate(request.clone()));
        self.inner.validate_reply.lock().unwrap().clone()
    }

    async fn reserve_spot(&self, request: &ReserveSpotRequest) -> Result<ApiReply, RequestError> {
        self.record(ApiCall::ReserveSpot(request.clone()));
        self.inner.reserve_reply.lock().unwrap().clone()
    }

    async fn enter_vehicle(&self, request: &EntryRequest) -> Result<ApiReply, RequestError> {
        self.record(ApiCall::Entry(request.clone()));
        self.inner.entry_reply.lock().unwrap().clone()
    }
}

impl MockApiHandle {
    pub fn calls(&self) -> Vec<ApiCall> {
        self.inner.calls.lock().unwrap().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, ApiCall::FetchSpots))
            .count()
    }

    pub fn set_spots(&self, spots: Result<SpotsSnapshot, RequestError>) {
        *self.inner.spots.lock().unwrap() = spots;
    }

    pub fn set_validate_reply(&self, reply: Result<ApiReply, RequestError>) {
        *self.inner.validate_reply.lock().unwrap() = reply;
    }

    pub fn set_reserve_reply(&self, reply: Result<ApiReply, RequestError>) {
        *self.inner.reserve_reply.lock().unwrap() = reply;
    }

    pub fn set_entry_reply(&self, reply: Result<ApiReply, RequestError>) {
        *self.inner.entry_reply.lock().unwrap() = reply;
    }
}
