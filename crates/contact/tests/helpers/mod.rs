#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use folio_contact::{Field, FormFields, SubmissionController, SubmissionTransport, TransportError};
use tokio::sync::Notify;

#[derive(Clone, Copy)]
pub enum Reply {
    Accept,
    Reject(u16),
    Hang,
    Panic,
}

/// Records every payload it is handed and answers with a fixed reply.
pub struct StubTransport {
    reply: Reply,
    calls: AtomicUsize,
    sent: Mutex<Vec<FormFields>>,
    release: Notify,
    gated: bool,
}

impl StubTransport {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            sent: Mutex::default(),
            release: Notify::new(),
            gated: false,
        })
    }

    /// Holds every send until [`StubTransport::release`] is called.
    pub fn gated(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            sent: Mutex::default(),
            release: Notify::new(),
            gated: true,
        })
    }

    pub fn release(&self) {
        self.release.notify_one();
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<FormFields> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmissionTransport for StubTransport {
    async fn send(&self, fields: &FormFields) -> Result<(), TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push(fields.clone());

        if self.gated {
            self.release.notified().await;
        }

        match self.reply {
            Reply::Accept => Ok(()),
            Reply::Reject(status) => Err(TransportError::Rejected(status)),
            Reply::Hang => std::future::pending().await,
            Reply::Panic => panic!("transport blew up"),
        }
    }
}

pub fn ada() -> FormFields {
    FormFields {
        name: "Ada".to_owned(),
        email: "ada@x.com".to_owned(),
        subject: "Hi".to_owned(),
        message: "Hello".to_owned(),
    }
}

pub fn fill<T: SubmissionTransport>(controller: &SubmissionController<T>, fields: &FormFields) {
    controller.update_field(Field::Name, fields.name.as_str());
    controller.update_field(Field::Email, fields.email.as_str());
    controller.update_field(Field::Subject, fields.subject.as_str());
    controller.update_field(Field::Message, fields.message.as_str());
}
