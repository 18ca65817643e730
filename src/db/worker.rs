//! Thread-confined front for [`StudentStore`].
//!
//! The store moves into a dedicated thread; callers submit requests over a
//! channel and get a [`Pending`] handle back immediately. Requests run one
//! at a time, in submission order. Dropping the worker closes the channel,
//! lets already queued requests finish and joins the thread.

use crate::db::store::StudentStore;
use crate::errors::{AppError, AppResult};
use crate::models::student::StudentRecord;
use crossbeam::channel::{self, Receiver, Sender, TryRecvError};
use std::thread;

type Reply<T> = Sender<AppResult<T>>;

enum Request {
    ListAll(Reply<Vec<StudentRecord>>),
    Insert(StudentRecord, Reply<i64>),
    Update(StudentRecord, Reply<bool>),
    Delete(StudentRecord, Reply<bool>),
}

/// Completion handle for a submitted request.
pub struct Pending<T> {
    rx: Receiver<AppResult<T>>,
}

impl<T> Pending<T> {
    /// Block until the worker answers.
    pub fn wait(self) -> AppResult<T> {
        self.rx.recv().map_err(|_| AppError::WorkerGone)?
    }

    /// Non-blocking poll. `None` while the request is still queued or running.
    pub fn try_get(&self) -> Option<AppResult<T>> {
        match self.rx.try_recv() {
            Ok(res) => Some(res),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(AppError::WorkerGone)),
        }
    }
}

pub struct StoreWorker {
    tx: Option<Sender<Request>>,
    handle: Option<thread::JoinHandle<StudentStore>>,
}

impl StoreWorker {
    pub fn spawn(store: StudentStore) -> AppResult<Self> {
        let (tx, rx) = channel::unbounded::<Request>();

        let handle = thread::Builder::new()
            .name("student-store".into())
            .spawn(move || {
                for req in rx {
                    // A dropped Pending just means nobody waits for the answer.
                    match req {
                        Request::ListAll(reply) => {
                            let _ = reply.send(store.list_all());
                        }
                        Request::Insert(rec, reply) => {
                            let _ = reply.send(store.insert(&rec));
                        }
                        Request::Update(rec, reply) => {
                            let _ = reply.send(store.update(&rec));
                        }
                        Request::Delete(rec, reply) => {
                            let _ = reply.send(store.delete(&rec));
                        }
                    }
                }
                store
            })?;

        Ok(Self {
            tx: Some(tx),
            handle: Some(handle),
        })
    }

    fn submit<T>(&self, make: impl FnOnce(Reply<T>) -> Request) -> Pending<T> {
        let (reply_tx, reply_rx) = channel::bounded(1);

        // If the worker is gone the request (and its reply sender) is dropped,
        // so the handle resolves to WorkerGone.
        if let Some(tx) = &self.tx {
            let _ = tx.send(make(reply_tx));
        }

        Pending { rx: reply_rx }
    }

    pub fn list_all(&self) -> Pending<Vec<StudentRecord>> {
        self.submit(Request::ListAll)
    }

    pub fn insert(&self, record: StudentRecord) -> Pending<i64> {
        self.submit(|reply| Request::Insert(record, reply))
    }

    pub fn update(&self, record: StudentRecord) -> Pending<bool> {
        self.submit(|reply| Request::Update(record, reply))
    }

    pub fn delete(&self, record: StudentRecord) -> Pending<bool> {
        self.submit(|reply| Request::Delete(record, reply))
    }

    /// Stop accepting requests, drain the queue and hand the store back.
    pub fn shutdown(mut self) -> AppResult<StudentStore> {
        self.tx.take();
        let handle = self.handle.take().ok_or(AppError::WorkerGone)?;
        handle
            .join()
            .map_err(|_| AppError::Other("student store worker panicked".into()))
    }
}

impl Drop for StoreWorker {
    fn drop(&mut self) {
        self.tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
