use leptos::prelude::*;

use crate::models::User;

/// Slot holding the signed-in user, shared through Leptos context.
#[derive(Clone, Copy)]
pub struct ConnectedUser(RwSignal<Option<User>>);

impl ConnectedUser {
    pub fn get(&self) -> Option<User> {
        self.0.get()
    }

    pub fn set(&self, user: Option<User>) {
        self.0.set(user);
    }
}

pub fn provide_connected_user() -> ConnectedUser {
    let connected_user = ConnectedUser(RwSignal::new(None));
    provide_context(connected_user);
    connected_user
}

pub fn use_connected_user() -> ConnectedUser {
    expect_context::<ConnectedUser>()
}

/// Write side of the connected user slot, as seen by the signup flow
pub trait ConnectedUserSlot {
    fn set_connected_user(&self, user: User);
}

impl ConnectedUserSlot for ConnectedUser {
    fn set_connected_user(&self, user: User) {
        self.set(Some(user));
    }
}
