//! Identity boundary: who is signed in, if anyone.

use crate::artwork::UserId;
use std::cell::RefCell;
use std::rc::Rc;

pub trait Identity {
    /// The authenticated user, or `None` when signed out.
    fn current_user(&self) -> Option<UserId>;
}

/// A client-side session handle. Clones share the same state, so the page
/// can sign in or out while the gallery holds a copy.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Rc<RefCell<Option<UserId>>>,
}

impl Session {
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(user: UserId) -> Self {
        let session = Self::default();
        session.sign_in(user);
        session
    }

    pub fn sign_in(&self, user: UserId) {
        log::info!("signed in as {user}");
        *self.user.borrow_mut() = Some(user);
    }

    pub fn sign_out(&self) {
        if self.user.borrow_mut().take().is_some() {
            log::info!("signed out");
        }
    }
}

impl Identity for Session {
    fn current_user(&self) -> Option<UserId> {
        self.user.borrow().clone()
    }
}
