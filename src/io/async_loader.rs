//! Asynchronous pinout loading.
//!
//! The document parse runs on one background thread. Once the documents
//! are in, every connector image decodes on its own thread, so
//! connectors become interactive independently and in no particular
//! order. Results arrive through a channel polled once per frame.
//!
//! Starting a new load replaces the channel; events from threads of a
//! superseded load have nowhere to deliver and are discarded.

use eframe::egui;
use pinscope::{Connector, PinoutReader};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;

use crate::io::image_loader::{self, DecodedImage, LoadingState};

/// A completed unit of background work.
pub enum LoadEvent {
    /// The document parse finished.
    Documents {
        result: Result<Vec<Connector>, String>,
        /// Path of the pinout file the documents came from.
        path: PathBuf,
    },
    /// One connector's image decode finished.
    Image {
        /// Index of the connector in the loaded document set.
        connector: usize,
        result: Result<DecodedImage, String>,
    },
}

/// Manages background loading of pinout documents and connector images.
pub struct AsyncLoader {
    /// Shared document-parse progress flag
    loading_state: Arc<Mutex<LoadingState>>,

    /// Channel for results from all background threads of the current load
    events: Option<Receiver<LoadEvent>>,

    /// Sender handed to image decode threads spawned after the parse
    sender: Option<Sender<LoadEvent>>,
}

impl AsyncLoader {
    /// Creates a new async loader with no active loading operation.
    pub fn new() -> Self {
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState::new())),
            events: None,
            sender: None,
        }
    }

    /// Checks if the document parse is currently in progress.
    pub fn is_loading(&self) -> bool {
        let state = self.loading_state.lock().unwrap();
        state.in_progress
    }

    /// Starts parsing a pinout file asynchronously.
    ///
    /// The GUI remains responsive during loading. Call `poll()` once per
    /// frame to collect results; image decodes are started separately
    /// once the documents are known.
    pub fn start_file_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.events = Some(receiver);
        self.sender = Some(sender.clone());

        {
            let mut state = self.loading_state.lock().unwrap();
            state.in_progress = true;
        }

        let loading_state = Arc::clone(&self.loading_state);
        let ctx_handle = ctx.clone();

        thread::spawn(move || {
            let reader = PinoutReader::new();
            let result = reader.read(&path).map_err(|e| format!("{:#}", e));

            let _ = sender.send(LoadEvent::Documents { result, path });

            {
                let mut state = loading_state.lock().unwrap();
                state.in_progress = false;
            }

            ctx_handle.request_repaint();
        });
    }

    /// Spawns one decode thread per connector image.
    ///
    /// `jobs` pairs each connector index with the resolved image path.
    /// Decodes complete independently; there is no ordering guarantee
    /// between connectors.
    pub fn start_image_loads(&mut self, jobs: Vec<(usize, PathBuf)>, ctx: &egui::Context) {
        let Some(sender) = self.sender.clone() else {
            return;
        };

        for (connector, path) in jobs {
            let sender = sender.clone();
            let ctx_handle = ctx.clone();
            thread::spawn(move || {
                let result = image_loader::decode_image(&path).map_err(|e| format!("{:#}", e));
                let _ = sender.send(LoadEvent::Image { connector, result });
                ctx_handle.request_repaint();
            });
        }
    }

    /// Collects all background results that arrived since the last call.
    ///
    /// Called once per frame in the update loop.
    pub fn poll(&mut self) -> Vec<LoadEvent> {
        let mut events = Vec::new();
        if let Some(receiver) = &self.events {
            while let Ok(event) = receiver.try_recv() {
                events.push(event);
            }
        }
        events
    }
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}
