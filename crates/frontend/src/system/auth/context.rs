use contracts::system::auth::UserRole;
use leptos::prelude::*;

use super::channel::RoleChannel;
use super::storage;

/// Authentication service as the UI sees it: the owner of the role channel.
/// How the role was originally obtained is outside this application.
#[derive(Clone, Default)]
pub struct AuthService {
    channel: RoleChannel,
}

impl AuthService {
    pub fn channel(&self) -> &RoleChannel {
        &self.channel
    }

    pub fn current_role(&self) -> Option<UserRole> {
        self.channel.current()
    }

    /// Stand-in for the out-of-scope login flow: fix the role and persist
    /// it for the next reload.
    pub fn sign_in(&self, role: UserRole) {
        storage::save_role(role.as_str());
        self.channel.publish(Some(role));
    }

    pub fn sign_out(&self) {
        storage::clear_role();
        self.channel.publish(None);
    }
}

/// Install the service on the root context, restoring a persisted session.
pub fn provide_auth() {
    let restored = storage::get_role().as_deref().and_then(UserRole::parse);
    provide_context(AuthService {
        channel: RoleChannel::new(restored),
    });
}

pub fn use_auth() -> AuthService {
    use_context::<AuthService>().expect("AuthService not found in component tree")
}

/// The role as a reactive signal scoped to the calling component: subscribes
/// on activation, releases the subscription on teardown.
pub fn use_role() -> ReadSignal<Option<UserRole>> {
    let auth = use_auth();
    let (role, set_role) = signal(auth.current_role());
    let subscription = auth.channel().subscribe(move |value| {
        // A publish may land after the screen is gone; discard it then.
        let _ = set_role.try_set(value);
    });
    on_cleanup(move || drop(subscription));
    role
}
