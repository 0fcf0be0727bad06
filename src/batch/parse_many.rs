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
    sync::{mpsc, Mutex},
    thread,
};

use log::{trace, warn};

use super::SyncAppendContainer;
use crate::{phonenumber::PhoneNumber, PhoneNumberUtil};

impl PhoneNumberUtil {
    /// Parses every number of `raw_numbers` against `region` and returns the
    /// ones that parsed. Numbers that fail are skipped; the order of the
    /// result is unspecified.
    ///
    /// Blocks until every input has been tried. Work is spread over at most
    /// [`batch_parallelism`](Self::batch_parallelism) threads.
    pub fn parse_many<S>(&self, raw_numbers: &[S], region: &str) -> Vec<PhoneNumber>
    where
        S: AsRef<str> + Sync,
    {
        self.parse_many_with_progress(raw_numbers, region, || {})
    }

    /// Same as [`parse_many`](Self::parse_many), calling `on_midpoint` once
    /// on the calling thread when the input at index `len / 2` is handed to
    /// the workers. An empty batch never calls it.
    pub fn parse_many_with_progress<S, F>(
        &self,
        raw_numbers: &[S],
        region: &str,
        on_midpoint: F,
    ) -> Vec<PhoneNumber>
    where
        S: AsRef<str> + Sync,
        F: FnOnce(),
    {
        let midpoint = raw_numbers.len() / 2;
        let mut on_midpoint = Some(on_midpoint);
        let mut report_progress = |index: usize| {
            if index == midpoint {
                if let Some(on_midpoint) = on_midpoint.take() {
                    on_midpoint();
                }
            }
        };

        let results = match SyncAppendContainer::with_name("parse-many-results") {
            Ok(results) => results,
            Err(err) => {
                warn!(
                    "Could not start result writer ({}), parsing {} numbers serially",
                    err,
                    raw_numbers.len()
                );
                return raw_numbers
                    .iter()
                    .enumerate()
                    .filter_map(|(index, raw_number)| {
                        report_progress(index);
                        self.parse_or_skip(raw_number.as_ref(), region)
                    })
                    .collect();
            }
        };

        let workers = self.batch_parallelism().get().min(raw_numbers.len());
        let (job_sender, job_receiver) = mpsc::channel::<&S>();
        let job_receiver = Mutex::new(job_receiver);

        thread::scope(|scope| {
            for _ in 0..workers {
                scope.spawn(|| loop {
                    // The lock is released before parsing starts.
                    let job = job_receiver.lock().map(|jobs| jobs.recv());
                    let Ok(Ok(raw_number)) = job else {
                        break;
                    };
                    if let Some(phone_number) = self.parse_or_skip(raw_number.as_ref(), region) {
                        results.append(phone_number);
                    }
                });
            }

            for (index, raw_number) in raw_numbers.iter().enumerate() {
                report_progress(index);
                if job_sender.send(raw_number).is_err() {
                    break;
                }
            }
            // Workers stop once the queue is drained and closed.
            drop(job_sender);
        });

        results.into_inner()
    }

    fn parse_or_skip(&self, raw_number: &str, region: &str) -> Option<PhoneNumber> {
        match self.parse(raw_number, region) {
            Ok(phone_number) => Some(phone_number),
            Err(err) => {
                trace!("Skipping '{}' in batch: {}", raw_number, err);
                None
            }
        }
    }
}
