//! Mock port implementations.
//!
//! - [`MockVenue`] records every posted order and answers from a script.
//! - [`MockAllowanceReader`] returns a fixed allowance or a read error.
//! - [`MockChainConnector`] and [`MockVenueConnector`] hand those mocks to
//!   bootstrap, or fail construction on demand.
//!
//! Every mock counts its calls so tests can prove that simulated paths make
//! no external contact.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use alloy_primitives::{Address, U256};
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::json;

use crate::domain::order::{OrderRequest, OrderResponse};
use crate::error::{ExecutionError, Result};
use crate::port::outbound::approval::{AllowanceReader, ChainConnector};
use crate::port::outbound::exchange::{OrderVenue, VenueConnector, VenueCredentials};

// ---------------------------------------------------------------------------
// MockVenue
// ---------------------------------------------------------------------------

#[derive(Clone)]
enum VenueReply {
    /// Accept with a fresh sequential order ID.
    Accept,
    /// Return this payload as-is.
    Raw(serde_json::Value),
    /// Fail with this message.
    Fail(String),
}

/// Scripted trading venue.
///
/// Replies are used in order; once the script runs out the last reply
/// repeats.
pub struct MockVenue {
    script: Vec<VenueReply>,
    submitted: Mutex<Vec<OrderRequest>>,
    next_id: AtomicU32,
}

impl MockVenue {
    fn scripted(script: Vec<VenueReply>) -> Self {
        Self {
            script,
            submitted: Mutex::new(Vec::new()),
            next_id: AtomicU32::new(1),
        }
    }

    /// Accept every order with IDs `order-1`, `order-2`, ...
    pub fn accepting() -> Self {
        Self::scripted(vec![VenueReply::Accept])
    }

    /// Answer every order with the given payload.
    pub fn responding(raw: serde_json::Value) -> Self {
        Self::scripted(vec![VenueReply::Raw(raw)])
    }

    /// Fail every order with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::scripted(vec![VenueReply::Fail(message.into())])
    }

    /// Accept the first order, then fail every later one.
    pub fn accept_then_fail(message: impl Into<String>) -> Self {
        Self::scripted(vec![VenueReply::Accept, VenueReply::Fail(message.into())])
    }

    /// Number of orders posted so far.
    pub fn submission_count(&self) -> usize {
        self.submitted.lock().len()
    }

    /// Orders posted so far, oldest first.
    pub fn submitted(&self) -> Vec<OrderRequest> {
        self.submitted.lock().clone()
    }
}

#[async_trait]
impl OrderVenue for MockVenue {
    async fn post_limit_order(&self, order: &OrderRequest) -> Result<OrderResponse> {
        let attempt = {
            let mut submitted = self.submitted.lock();
            submitted.push(order.clone());
            submitted.len() - 1
        };
        let reply = self
            .script
            .get(attempt)
            .or_else(|| self.script.last())
            .cloned()
            .unwrap_or(VenueReply::Accept);

        match reply {
            VenueReply::Accept => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                Ok(OrderResponse::from_raw(json!({ "orderID": format!("order-{id}") })))
            }
            VenueReply::Raw(raw) => Ok(OrderResponse::from_raw(raw)),
            VenueReply::Fail(message) => Err(ExecutionError::SubmissionFailed(message).into()),
        }
    }

    fn venue_name(&self) -> &'static str {
        "Mock"
    }
}

// ---------------------------------------------------------------------------
// MockAllowanceReader
// ---------------------------------------------------------------------------

/// Allowance reader with a fixed answer.
pub struct MockAllowanceReader {
    result: std::result::Result<U256, String>,
    calls: AtomicU32,
    last_query: Mutex<Option<(Address, Address, Address)>>,
}

impl MockAllowanceReader {
    /// Always report `allowance`.
    pub fn returning(allowance: U256) -> Self {
        Self {
            result: Ok(allowance),
            calls: AtomicU32::new(0),
            last_query: Mutex::new(None),
        }
    }

    /// Always fail the read.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            result: Err(message.into()),
            calls: AtomicU32::new(0),
            last_query: Mutex::new(None),
        }
    }

    /// Number of reads so far.
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    /// `(token, owner, spender)` of the latest read.
    pub fn last_query(&self) -> Option<(Address, Address, Address)> {
        *self.last_query.lock()
    }
}

#[async_trait]
impl AllowanceReader for MockAllowanceReader {
    async fn allowance(&self, token: Address, owner: Address, spender: Address) -> Result<U256> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock() = Some((token, owner, spender));
        self.result
            .clone()
            .map_err(|message| ExecutionError::AllowanceReadFailed(message).into())
    }
}

// ---------------------------------------------------------------------------
// Connectors
// ---------------------------------------------------------------------------

/// Chain connector that hands out a shared [`MockAllowanceReader`].
pub struct MockChainConnector {
    reader: Option<Arc<MockAllowanceReader>>,
    calls: AtomicU32,
}

impl MockChainConnector {
    /// Connect to a reader that always reports `allowance`.
    pub fn with_allowance(allowance: U256) -> Self {
        Self::with_reader(Arc::new(MockAllowanceReader::returning(allowance)))
    }

    /// Connect to the given reader.
    pub fn with_reader(reader: Arc<MockAllowanceReader>) -> Self {
        Self {
            reader: Some(reader),
            calls: AtomicU32::new(0),
        }
    }

    /// Fail every connection attempt.
    pub fn unreachable() -> Self {
        Self {
            reader: None,
            calls: AtomicU32::new(0),
        }
    }

    /// Number of connection attempts so far.
    pub fn connect_calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ChainConnector for MockChainConnector {
    fn connect(&self, rpc_url: &str) -> Result<Arc<dyn AllowanceReader>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reader {
            Some(reader) => Ok(Arc::clone(reader) as Arc<dyn AllowanceReader>),
            None => Err(ExecutionError::RpcUnavailable(rpc_url.to_string()).into()),
        }
    }
}

/// Venue connector that hands out a shared [`MockVenue`].
pub struct MockVenueConnector {
    venue: std::result::Result<Arc<MockVenue>, String>,
    calls: AtomicU32,
    last_credentials: Mutex<Option<VenueCredentials>>,
}

impl MockVenueConnector {
    /// Connect to a venue that accepts every order.
    pub fn accepting() -> Self {
        Self::with_venue(Arc::new(MockVenue::accepting()))
    }

    /// Connect to the given venue.
    pub fn with_venue(venue: Arc<MockVenue>) -> Self {
        Self {
            venue: Ok(venue),
            calls: AtomicU32::new(0),
            last_credentials: Mutex::new(None),
        }
    }

    /// Fail authentication with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            venue: Err(message.into()),
            calls: AtomicU32::new(0),
            last_credentials: Mutex::new(None),
        }
    }

    /// Number of connection attempts so far.
    pub fn connect_calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    /// Credentials passed to the latest connection attempt.
    pub fn last_credentials(&self) -> Option<VenueCredentials> {
        self.last_credentials.lock().clone()
    }
}

#[async_trait]
impl VenueConnector for MockVenueConnector {
    async fn connect(
        &self,
        _signer: &PrivateKeySigner,
        credentials: &VenueCredentials,
    ) -> Result<Arc<dyn OrderVenue>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_credentials.lock() = Some(credentials.clone());
        match &self.venue {
            Ok(venue) => Ok(Arc::clone(venue) as Arc<dyn OrderVenue>),
            Err(message) => Err(ExecutionError::AuthFailed(message.clone()).into()),
        }
    }
}
