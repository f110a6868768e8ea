use std::cell::RefCell;
use std::mem::take;
use log::trace;
use rustc_hash::FxHashMap;
use screeps::{RoomName, StructureType};
use serde::Serialize;
use crate::creeps::creep_role::CreepRole;
use crate::utils::priority::Priority;

thread_local! {
    static PUBLISHED_REQUESTS: RefCell<FxHashMap<RoomName, BaseRequests>> = RefCell::new(FxHashMap::default());
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Request<T> {
    pub priority: Priority,
    pub payload: T,
}

/// Requests ordered from the highest priority. Requests with the same priority keep the order
/// in which they were added.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RequestLedger<T> {
    requests: Vec<Request<T>>,
}

impl<T> Default for RequestLedger<T> {
    fn default() -> Self {
        RequestLedger { requests: Vec::new() }
    }
}

impl<T> RequestLedger<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the request after all requests with the same or higher priority.
    /// The priority is clamped to `[0, 1]`.
    pub fn add(&mut self, priority: Priority, payload: T) {
        let priority = priority.clamped();
        let index = self.requests.partition_point(|request| request.priority >= priority);
        self.requests.insert(index, Request { priority, payload });
    }

    /// Removes and returns the request with the highest priority.
    pub fn pop(&mut self) -> Option<Request<T>> {
        (!self.requests.is_empty()).then(|| self.requests.remove(0))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Request<T>> {
        self.requests.iter()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

/// A request to spawn a creep, possibly to work on a specific target such as a source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreepRequest {
    pub role: CreepRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl CreepRequest {
    pub fn new(role: CreepRole, target: Option<String>) -> Self {
        CreepRequest { role, target }
    }
}

/// Everything a base needs this tick, to be fulfilled by spawning and construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseRequests {
    pub creep_requests: RequestLedger<CreepRequest>,
    pub structure_requests: RequestLedger<StructureType>,
}

/// Makes the requests of the current tick available to be taken by the host.
/// Replaces requests published in earlier ticks.
pub fn publish_requests(requests: FxHashMap<RoomName, BaseRequests>) {
    trace!("Publishing requests of {} bases.", requests.len());
    PUBLISHED_REQUESTS.with(|published| {
        *published.borrow_mut() = requests;
    });
}

/// Takes the last published requests, leaving none.
pub fn take_published_requests() -> FxHashMap<RoomName, BaseRequests> {
    PUBLISHED_REQUESTS.with(|published| take(&mut *published.borrow_mut()))
}
