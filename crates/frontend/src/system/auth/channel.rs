//! Process-wide role channel.
//!
//! One authentication service owns the current role; every consuming screen
//! registers a listener on activation and releases it on teardown. A new
//! listener is delivered the current value immediately, so a screen opened
//! after the role arrived still sees it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Weak};

use contracts::system::auth::UserRole;

type Listener = Arc<dyn Fn(Option<UserRole>) + Send + Sync>;

#[derive(Default)]
struct ChannelInner {
    current: Option<UserRole>,
    next_id: u64,
    listeners: HashMap<u64, Listener>,
}

#[derive(Clone, Default)]
pub struct RoleChannel {
    inner: Arc<Mutex<ChannelInner>>,
}

impl RoleChannel {
    pub fn new(initial: Option<UserRole>) -> Self {
        let channel = Self::default();
        channel.lock().current = initial;
        channel
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ChannelInner> {
        self.inner.lock().expect("role channel poisoned")
    }

    pub fn current(&self) -> Option<UserRole> {
        self.lock().current
    }

    /// Publish a new role to every registered listener.
    pub fn publish(&self, role: Option<UserRole>) {
        let listeners: Vec<Listener> = {
            let mut inner = self.lock();
            inner.current = role;
            inner.listeners.values().cloned().collect()
        };
        // The lock is released before callbacks run; a listener may
        // subscribe or release from inside its callback.
        for listener in listeners {
            listener(role);
        }
    }

    /// Register a listener. It fires once with the current value before
    /// this returns, then on every `publish`.
    pub fn subscribe(
        &self,
        listener: impl Fn(Option<UserRole>) + Send + Sync + 'static,
    ) -> RoleSubscription {
        let listener: Listener = Arc::new(listener);
        let (id, current) = {
            let mut inner = self.lock();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.insert(id, listener.clone());
            (id, inner.current)
        };
        listener(current);
        RoleSubscription {
            id,
            channel: Arc::downgrade(&self.inner),
        }
    }
}

/// Handle returned by [`RoleChannel::subscribe`].
///
/// `release` deregisters the listener and is idempotent; an unreleased
/// handle releases itself on drop, so teardown cannot leak a listener.
pub struct RoleSubscription {
    id: u64,
    channel: Weak<Mutex<ChannelInner>>,
}

impl RoleSubscription {
    pub fn release(&mut self) {
        if let Some(inner) = self.channel.upgrade() {
            inner
                .lock()
                .expect("role channel poisoned")
                .listeners
                .remove(&self.id);
        }
        self.channel = Weak::new();
    }
}

impl Drop for RoleSubscription {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn recording_listener() -> (Arc<Mutex<Vec<Option<UserRole>>>>, Listener) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let listener: Listener = Arc::new(move |role| sink.lock().unwrap().push(role));
        (seen, listener)
    }

    #[test]
    fn subscribe_delivers_the_current_value_immediately() {
        let channel = RoleChannel::new(Some(UserRole::Admin));
        let (seen, listener) = recording_listener();
        let _sub = channel.subscribe(move |role| listener(role));
        assert_eq!(*seen.lock().unwrap(), vec![Some(UserRole::Admin)]);
    }

    #[test]
    fn publish_reaches_every_listener() {
        let channel = RoleChannel::default();
        let (seen, listener) = recording_listener();
        let _sub = channel.subscribe(move |role| listener(role));
        channel.publish(Some(UserRole::User));
        channel.publish(None);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![None, Some(UserRole::User), None]
        );
    }

    #[test]
    fn released_listener_hears_nothing_further() {
        let channel = RoleChannel::default();
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let mut sub = channel.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        sub.release();
        channel.publish(Some(UserRole::Admin));
        // Only the immediate delivery at subscription time.
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn release_is_idempotent() {
        let channel = RoleChannel::default();
        let mut sub = channel.subscribe(|_| {});
        sub.release();
        sub.release();
        channel.publish(Some(UserRole::User));
    }

    #[test]
    fn dropping_the_handle_releases_the_listener() {
        let channel = RoleChannel::default();
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        {
            let _sub = channel.subscribe(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }
        channel.publish(Some(UserRole::Admin));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn listener_may_release_from_inside_its_callback() {
        let channel = RoleChannel::default();
        let slot: Arc<Mutex<Option<RoleSubscription>>> = Arc::new(Mutex::new(None));
        let slot_in_listener = slot.clone();
        let sub = channel.subscribe(move |role| {
            if role.is_some() {
                if let Some(mut sub) = slot_in_listener.lock().unwrap().take() {
                    sub.release();
                }
            }
        });
        *slot.lock().unwrap() = Some(sub);
        channel.publish(Some(UserRole::Admin));
        channel.publish(Some(UserRole::User));
    }
}
