use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;

use crate::config::CoreConfig;
use crate::indexer::IndexerClient;
use crate::store::AppDataStore;
use crate::worker::{DataChange, GalleryCommand, GalleryWorker};

#[derive(Clone)]
pub struct CoreHandle {
    command_tx: Sender<GalleryCommand>,
}

impl CoreHandle {
    pub(crate) fn new(command_tx: Sender<GalleryCommand>) -> Self {
        Self { command_tx }
    }

    pub fn send(&self, command: GalleryCommand) -> Result<(), mpsc::SendError<GalleryCommand>> {
        self.command_tx.send(command)
    }
}

/// Wires the fetch worker to the UI thread: a command channel in, a
/// data-change channel out, and the single-threaded data store.
pub struct CoreRuntime {
    data_store: Rc<RefCell<AppDataStore>>,
    data_rx: Option<Receiver<DataChange>>,
    handle: CoreHandle,
    worker_handle: Option<JoinHandle<()>>,
}

impl CoreRuntime {
    pub fn new(config: CoreConfig) -> Self {
        let (command_tx, command_rx) = mpsc::channel::<GalleryCommand>();
        let (data_tx, data_rx) = mpsc::channel::<DataChange>();

        let client = IndexerClient::new(&config);
        let worker = GalleryWorker::new(client, data_tx, command_rx);
        let worker_handle = std::thread::spawn(move || {
            worker.run();
        });

        Self {
            data_store: Rc::new(RefCell::new(AppDataStore::new())),
            data_rx: Some(data_rx),
            handle: CoreHandle::new(command_tx),
            worker_handle: Some(worker_handle),
        }
    }

    pub fn handle(&self) -> CoreHandle {
        self.handle.clone()
    }

    pub fn data_store(&self) -> Rc<RefCell<AppDataStore>> {
        self.data_store.clone()
    }

    pub fn take_data_rx(&mut self) -> Option<Receiver<DataChange>> {
        self.data_rx.take()
    }

    pub fn shutdown(&mut self) {
        let _ = self.handle.send(GalleryCommand::Shutdown);
        if let Some(worker_handle) = self.worker_handle.take() {
            let _ = worker_handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_lifecycle() {
        let mut runtime = CoreRuntime::new(CoreConfig::default());
        assert!(runtime.take_data_rx().is_some());
        // Second take yields nothing - the receiver moved out.
        assert!(runtime.take_data_rx().is_none());
        runtime.shutdown();
    }
}
