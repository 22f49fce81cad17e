/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;
use std::rc::Rc;
use std::sync::Mutex;

#[derive(Default)]
struct BufSinkState {
    attempts: usize,
    fail_at: Vec<usize>,
    writes: Vec<Vec<u8>>,
    closed: bool,
}

/// Shared view of what a buffer sink has received
#[derive(Clone, Default)]
pub(crate) struct BufSinkRecorder {
    state: Rc<Mutex<BufSinkState>>,
}

impl BufSinkRecorder {
    /// Make the write attempts with these indexes (starting from 0) fail
    pub(crate) fn failing_at(fail_at: &[usize]) -> Self {
        let recorder = BufSinkRecorder::default();
        recorder.state.lock().unwrap().fail_at = fail_at.to_vec();
        recorder
    }

    pub(crate) fn writes(&self) -> Vec<Vec<u8>> {
        self.state.lock().unwrap().writes.clone()
    }

    pub(crate) fn attempts(&self) -> usize {
        self.state.lock().unwrap().attempts
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.state.lock().unwrap().closed
    }
}

pub(super) struct BufLineProtocolSink {
    recorder: BufSinkRecorder,
}

impl BufLineProtocolSink {
    pub(super) fn new(recorder: BufSinkRecorder) -> Self {
        BufLineProtocolSink { recorder }
    }

    pub(super) fn write(&mut self, msg: &[u8]) -> io::Result<()> {
        let mut state = self.recorder.state.lock().unwrap();
        if state.closed {
            return Err(io::Error::new(io::ErrorKind::NotConnected, "closed"));
        }
        let attempt = state.attempts;
        state.attempts += 1;
        if state.fail_at.contains(&attempt) {
            return Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                format!("injected failure on write {attempt}"),
            ));
        }
        state.writes.push(msg.to_vec());
        Ok(())
    }

    pub(super) fn close(&mut self) -> io::Result<()> {
        self.recorder.state.lock().unwrap().closed = true;
        Ok(())
    }
}
