// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{io, sync::mpsc, thread};

use log::error;

/// Append-only list that many threads can write to at once.
///
/// Every append is forwarded to a dedicated writer thread that owns the
/// items, so concurrent appends are linearized without locking and none is
/// lost. There is no way to read while writers may still be running: the
/// items are only handed out by [`into_inner`](Self::into_inner), which
/// consumes the container and therefore waits for every borrow used to
/// append.
pub struct SyncAppendContainer<T> {
    sender: mpsc::Sender<T>,
    writer: thread::JoinHandle<Vec<T>>,
}

impl<T: Send + 'static> SyncAppendContainer<T> {
    pub fn new() -> io::Result<Self> {
        Self::with_name("sync-append-writer")
    }

    /// Creates a container whose writer thread carries `name`.
    pub fn with_name(name: impl Into<String>) -> io::Result<Self> {
        let (sender, receiver) = mpsc::channel::<T>();
        let writer = thread::Builder::new().name(name.into()).spawn(move || {
            let mut items = Vec::new();
            // Ends once the container, the only sender, is gone.
            while let Ok(item) = receiver.recv() {
                items.push(item);
            }
            items
        })?;
        Ok(Self { sender, writer })
    }

    pub fn append(&self, item: T) {
        if self.sender.send(item).is_err() {
            error!("Append container writer has stopped, item dropped");
        }
    }

    /// Waits for the writer to store every appended item and returns them in
    /// the order they were appended.
    pub fn into_inner(self) -> Vec<T> {
        let Self { sender, writer } = self;
        drop(sender);
        match writer.join() {
            Ok(items) => items,
            Err(_) => {
                error!("Append container writer panicked, appended items are lost");
                Vec::new()
            }
        }
    }
}
