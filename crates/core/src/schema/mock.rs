//! In-memory registry transport for tests.
//!
//! Every body handed out is counted while alive, so callers can assert that
//! nothing keeps a response open after an operation returns.

use crate::schema::error::SchemaError;
use crate::schema::error::SchemaResult;
use crate::schema::transport::RegistryTransport;
use crate::schema::transport::ResponseBody;
use async_trait::async_trait;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
enum MockReply {
    Body(Vec<u8>),
    ReadError(String),
}

#[derive(Clone)]
pub struct MockTransport {
    reply: MockReply,
    open: Arc<AtomicUsize>,
    issued: Arc<AtomicUsize>,
    paths: Arc<Mutex<Vec<String>>>,
}

impl MockTransport {
    fn new(reply: MockReply) -> Self {
        Self {
            reply,
            open: Arc::new(AtomicUsize::new(0)),
            issued: Arc::new(AtomicUsize::new(0)),
            paths: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answers every request with `body`.
    pub fn with_body(body: impl Into<Vec<u8>>) -> Self {
        Self::new(MockReply::Body(body.into()))
    }

    /// Hands out bodies whose read fails with `message`.
    pub fn failing_read(message: &str) -> Self {
        Self::new(MockReply::ReadError(message.to_string()))
    }

    /// Bodies handed out and not yet dropped.
    pub fn open_bodies(&self) -> usize {
        self.open.load(Ordering::SeqCst)
    }

    /// Bodies handed out so far.
    pub fn bodies_issued(&self) -> usize {
        self.issued.load(Ordering::SeqCst)
    }

    /// Paths requested so far, in order.
    pub async fn requested_paths(&self) -> Vec<String> {
        self.paths.lock().await.clone()
    }
}

#[async_trait]
impl RegistryTransport for MockTransport {
    async fn get(&self, path: &str) -> SchemaResult<Box<dyn ResponseBody>> {
        self.paths.lock().await.push(path.to_string());
        self.issued.fetch_add(1, Ordering::SeqCst);
        self.open.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockBody {
            reply: self.reply.clone(),
            open: Arc::clone(&self.open),
        }))
    }
}

struct MockBody {
    reply: MockReply,
    open: Arc<AtomicUsize>,
}

#[async_trait]
impl ResponseBody for MockBody {
    async fn read_all(&mut self) -> SchemaResult<Vec<u8>> {
        match &self.reply {
            MockReply::Body(body) => Ok(body.clone()),
            MockReply::ReadError(message) => Err(SchemaError::BodyRead(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                message.clone(),
            ))),
        }
    }
}

impl Drop for MockBody {
    fn drop(&mut self) {
        self.open.fetch_sub(1, Ordering::SeqCst);
    }
}
