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

use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use log::trace;
use tokio::sync::oneshot::{self, error::TryRecvError};

use crate::{
    errors::{ParseError, ParseTaskError},
    phonenumber::PhoneNumber,
    PhoneNumberUtil,
};

type ParseOutcome = Result<PhoneNumber, ParseError>;

/// A single parse packaged for an external scheduler.
///
/// The scheduler calls [`start`](Self::start) whenever it sees fit; the
/// outcome reaches the paired [`ParseTaskHandle`]. A task that is dropped
/// without being started counts as cancelled. Once started, it runs to
/// completion.
pub struct ParseTask {
    util: Arc<PhoneNumberUtil>,
    raw_number: String,
    region: String,
    reply: oneshot::Sender<ParseOutcome>,
}

/// Receiving side of a [`ParseTask`]. Resolves exactly once, either by
/// awaiting it or through [`wait`](Self::wait) /
/// [`try_result`](Self::try_result).
#[derive(Debug)]
pub struct ParseTaskHandle {
    receiver: oneshot::Receiver<ParseOutcome>,
    resolved: bool,
}

impl PhoneNumberUtil {
    /// Packages `parse(raw_number, region)` as a task and the handle its
    /// outcome is delivered to.
    pub fn make_parse_task(
        self: &Arc<Self>,
        raw_number: impl Into<String>,
        region: impl Into<String>,
    ) -> (ParseTask, ParseTaskHandle) {
        let (reply, receiver) = oneshot::channel();
        let task = ParseTask {
            util: Arc::clone(self),
            raw_number: raw_number.into(),
            region: region.into(),
            reply,
        };
        (task, ParseTaskHandle { receiver, resolved: false })
    }
}

impl ParseTask {
    pub fn raw_number(&self) -> &str {
        &self.raw_number
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Runs the parse and reports its outcome to the handle. Taking `self`
    /// makes a second report impossible; no retry happens on failure.
    pub fn start(self) {
        let Self { util, raw_number, region, reply } = self;
        let outcome = util.parse(&raw_number, &region);
        if reply.send(outcome).is_err() {
            trace!("Handle for parse task '{}' was dropped, outcome discarded", raw_number);
        }
    }

    /// Gives up on the task without running it. The handle resolves to
    /// [`ParseTaskError::Cancelled`].
    pub fn cancel(self) {
        trace!("Parse task '{}' cancelled before start", self.raw_number);
    }
}

impl ParseTaskHandle {
    /// Blocks the current thread until the task finished or was cancelled.
    ///
    /// # Panics
    ///
    /// When called from within an asynchronous execution context; `.await`
    /// the handle there instead.
    ///
    /// Fails with [`ParseTaskError::AlreadyTaken`] if
    /// [`try_result`](Self::try_result) already returned the outcome.
    pub fn wait(self) -> Result<PhoneNumber, ParseTaskError> {
        if self.resolved {
            return Err(ParseTaskError::AlreadyTaken);
        }
        into_task_result(self.receiver.blocking_recv())
    }

    /// Returns the outcome if the task is over, without blocking.
    ///
    /// Returns `None` while the task has not run yet, and after the outcome
    /// has already been returned once.
    pub fn try_result(&mut self) -> Option<Result<PhoneNumber, ParseTaskError>> {
        if self.resolved {
            return None;
        }
        let outcome = match self.receiver.try_recv() {
            Ok(outcome) => outcome.map_err(ParseTaskError::from),
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Closed) => Err(ParseTaskError::Cancelled),
        };
        self.resolved = true;
        Some(outcome)
    }
}

impl Future for ParseTaskHandle {
    type Output = Result<PhoneNumber, ParseTaskError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        // The receiver must not be polled again once it gave out a value.
        if this.resolved {
            return Poll::Ready(Err(ParseTaskError::AlreadyTaken));
        }
        let outcome = Pin::new(&mut this.receiver).poll(cx);
        if outcome.is_ready() {
            this.resolved = true;
        }
        outcome.map(into_task_result)
    }
}

fn into_task_result(
    received: Result<ParseOutcome, oneshot::error::RecvError>,
) -> Result<PhoneNumber, ParseTaskError> {
    match received {
        Ok(outcome) => outcome.map_err(ParseTaskError::from),
        // The sender only goes away unused when the task was dropped.
        Err(_) => Err(ParseTaskError::Cancelled),
    }
}
