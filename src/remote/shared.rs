// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A remote shared between threads.

use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::remote::Remote;

/// A cloneable, lockable handle to one [`Remote`].
///
/// The message id counter is mutated by every transmission, so concurrent
/// use goes through the lock. Each lock is held for one whole operation,
/// including any stepping sequence or pairing delay.
///
/// # Examples
///
/// ```no_run
/// use std::thread;
/// use limitless_rf::{Remote, SharedRemote};
/// # fn example(remote: Remote<impl limitless_rf::transceiver::Transceiver + Send + 'static>) {
/// let shared = SharedRemote::new(remote);
/// let worker = shared.clone();
/// thread::spawn(move || worker.lock().on(Some(1), false));
/// shared.lock().off(Some(2), true, false).ok();
/// # }
/// ```
pub struct SharedRemote<T> {
    inner: Arc<Mutex<Remote<T>>>,
}

impl<T> SharedRemote<T> {
    /// Wraps a remote for shared use.
    #[must_use]
    pub fn new(remote: Remote<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(remote)),
        }
    }

    /// Locks the remote for one or more operations.
    pub fn lock(&self) -> MutexGuard<'_, Remote<T>> {
        self.inner.lock()
    }

    /// Returns the message id without blocking, if the remote is idle.
    #[must_use]
    pub fn try_message_id(&self) -> Option<u8> {
        self.inner.try_lock().map(|remote| remote.message_id())
    }
}

impl<T> Clone for SharedRemote<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for SharedRemote<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedRemote")
            .field("handles", &Arc::strong_count(&self.inner))
            .finish_non_exhaustive()
    }
}

impl<T> From<Remote<T>> for SharedRemote<T> {
    fn from(remote: Remote<T>) -> Self {
        Self::new(remote)
    }
}
