//! Submission flow of the signup form.
//!
//! The form view owns a [`SignupFormState`]; [`SignupController`] runs one
//! submit against it with its collaborators injected at construction, so the
//! flow can be driven without a browser.

use std::future::Future;

use leptos::prelude::*;

use crate::context::ConnectedUserSlot;
use crate::models::{SignupFormState, User};

pub const FEED_PATH: &str = "/feed";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct CreateUserError {
    pub message: String,
}

impl CreateUserError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<ServerFnError> for CreateUserError {
    fn from(e: ServerFnError) -> Self {
        match e {
            // Keep the server's own wording so it reaches the banner unchanged
            ServerFnError::ServerError(message) => Self { message },
            other => Self::new(other.to_string()),
        }
    }
}

/// Remote account creation
pub trait AccountApi {
    fn create_user(
        &self,
        email: String,
        display_name: String,
        password: String,
    ) -> impl Future<Output = Result<User, CreateUserError>>;
}

/// Calls the `create_user` server function
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerAccountApi;

impl AccountApi for ServerAccountApi {
    async fn create_user(
        &self,
        email: String,
        display_name: String,
        password: String,
    ) -> Result<User, CreateUserError> {
        crate::server_fns::create_user(email, display_name, password)
            .await
            .map_err(CreateUserError::from)
    }
}

/// Mutable access to the form state held by the view.
///
/// Returns `None` once the store is gone, e.g. the form was unmounted while
/// a request was in flight.
pub trait FormStore {
    fn with_form<R>(&self, f: impl FnOnce(&mut SignupFormState) -> R) -> Option<R>;
}

impl FormStore for RwSignal<SignupFormState> {
    fn with_form<R>(&self, f: impl FnOnce(&mut SignupFormState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

pub struct SignupController<A, C, N> {
    api: A,
    connected_user: C,
    navigate: N,
}

impl<A, C, N> SignupController<A, C, N>
where
    A: AccountApi,
    C: ConnectedUserSlot,
    N: Fn(&str),
{
    pub fn new(api: A, connected_user: C, navigate: N) -> Self {
        Self {
            api,
            connected_user,
            navigate,
        }
    }

    /// Validates, sends and settles one submission.
    ///
    /// Nothing is sent while a field is invalid or another request is in
    /// flight. Failures end up in the form's error message, never in the
    /// caller.
    pub async fn submit(&self, form: &impl FormStore) {
        let Some(fields) = form.with_form(SignupFormState::begin_submit).flatten() else {
            tracing::debug!("signup submit skipped");
            return;
        };

        let result = self
            .api
            .create_user(fields.email, fields.display_name, fields.password)
            .await;

        match result {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "account created");
                self.connected_user.set_connected_user(user);
                if form.with_form(SignupFormState::finish_success).is_none() {
                    tracing::debug!("signup form gone before the response arrived");
                }
                (self.navigate)(FEED_PATH);
            }
            Err(e) => {
                tracing::warn!(error = %e, "account creation failed");
                form.with_form(|state| state.finish_failure(e.message));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::models::{Field, SubmissionState};

    impl FormStore for RefCell<SignupFormState> {
        fn with_form<R>(&self, f: impl FnOnce(&mut SignupFormState) -> R) -> Option<R> {
            Some(f(&mut self.borrow_mut()))
        }
    }

    type Log = Rc<RefCell<Vec<String>>>;

    struct FakeApi {
        result: Result<User, CreateUserError>,
        calls: Cell<usize>,
        sent: RefCell<Option<(String, String, String)>>,
        log: Log,
    }

    impl FakeApi {
        fn new(result: Result<User, CreateUserError>, log: &Log) -> Self {
            Self {
                result,
                calls: Cell::new(0),
                sent: RefCell::new(None),
                log: log.clone(),
            }
        }
    }

    impl AccountApi for FakeApi {
        async fn create_user(
            &self,
            email: String,
            display_name: String,
            password: String,
        ) -> Result<User, CreateUserError> {
            self.calls.set(self.calls.get() + 1);
            self.log.borrow_mut().push("create_user".into());
            *self.sent.borrow_mut() = Some((email, display_name, password));
            self.result.clone()
        }
    }

    struct FakeSlot {
        user: RefCell<Option<User>>,
        log: Log,
    }

    impl ConnectedUserSlot for FakeSlot {
        fn set_connected_user(&self, user: User) {
            self.log.borrow_mut().push(format!("set_user:{}", user.id));
            *self.user.borrow_mut() = Some(user);
        }
    }

    fn user() -> User {
        User {
            id: "u-1".into(),
            display_name: "johndoe".into(),
            email: "johndoe@mail.com".into(),
        }
    }

    fn filled_form() -> RefCell<SignupFormState> {
        let mut state = SignupFormState::default();
        state.set_field(Field::DisplayName, "johndoe".into());
        state.set_field(Field::Email, "johndoe@mail.com".into());
        state.set_field(Field::Password, "Aa1111111112".into());
        RefCell::new(state)
    }

    fn controller(
        result: Result<User, CreateUserError>,
        log: &Log,
    ) -> SignupController<FakeApi, FakeSlot, impl Fn(&str)> {
        let nav_log = log.clone();
        SignupController::new(
            FakeApi::new(result, log),
            FakeSlot {
                user: RefCell::new(None),
                log: log.clone(),
            },
            move |path: &str| nav_log.borrow_mut().push(format!("navigate:{path}")),
        )
    }

    #[tokio::test]
    async fn test_success_sets_user_before_navigating() {
        let log = Log::default();
        let controller = controller(Ok(user()), &log);
        let form = filled_form();

        controller.submit(&form).await;

        assert_eq!(
            *log.borrow(),
            vec!["create_user", "set_user:u-1", "navigate:/feed"]
        );
        assert_eq!(*controller.connected_user.user.borrow(), Some(user()));
        assert_eq!(
            *controller.api.sent.borrow(),
            Some((
                "johndoe@mail.com".to_string(),
                "johndoe".to_string(),
                "Aa1111111112".to_string()
            ))
        );
        let state = form.borrow();
        assert_eq!(state.submission, SubmissionState::Idle);
        assert_eq!(state.error_message, None);
    }

    #[tokio::test]
    async fn test_failure_shows_message_and_keeps_fields() {
        let log = Log::default();
        let controller = controller(Err(CreateUserError::new("Email already used")), &log);
        let form = filled_form();
        let before = form.borrow().fields.clone();

        controller.submit(&form).await;

        let state = form.borrow();
        assert_eq!(state.error_message.as_deref(), Some("Email already used"));
        assert_eq!(state.submission, SubmissionState::Idle);
        assert_eq!(state.fields, before);
        assert_eq!(*log.borrow(), vec!["create_user"]);
        assert_eq!(*controller.connected_user.user.borrow(), None);
    }

    #[tokio::test]
    async fn test_empty_field_never_calls_api() {
        for field in Field::all() {
            let log = Log::default();
            let controller = controller(Ok(user()), &log);
            let form = filled_form();
            form.borrow_mut().set_field(field, String::new());

            controller.submit(&form).await;

            assert_eq!(controller.api.calls.get(), 0, "field {field:?}");
            assert!(log.borrow().is_empty());
        }
    }

    #[tokio::test]
    async fn test_retry_after_failure_clears_message() {
        let log = Log::default();
        let form = filled_form();

        controller(Err(CreateUserError::new("Email already used")), &log)
            .submit(&form)
            .await;
        assert!(form.borrow().error_message.is_some());

        controller(Ok(user()), &log).submit(&form).await;
        assert_eq!(form.borrow().error_message, None);
    }

    #[tokio::test]
    async fn test_in_flight_submit_is_ignored() {
        let log = Log::default();
        let controller = controller(Ok(user()), &log);
        let form = filled_form();
        form.borrow_mut().submission = SubmissionState::Sending;

        controller.submit(&form).await;

        assert_eq!(controller.api.calls.get(), 0);
    }

    #[test]
    fn test_server_error_message_is_unwrapped() {
        let e = CreateUserError::from(ServerFnError::new("Email already used"));
        assert_eq!(e.message, "Email already used");
    }
}
