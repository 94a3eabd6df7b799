//! Application Context
//!
//! Shares the controller and a reactive mirror of its state via the Leptos
//! Context API.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpTodoApi;
use crate::config::ClientConfig;
use crate::controller::TodoController;
use crate::store::AppState;

pub type Controller = TodoController<HttpTodoApi>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The controller is `!Send`, so it lives in local storage
    controller: StoredValue<Rc<Controller>, LocalStorage>,
    /// Latest controller state, updated on every change
    pub state: ReadSignal<AppState>,
    pub config: StoredValue<ClientConfig>,
}

impl AppContext {
    /// Wrap a controller and bind its change listener to a signal
    pub fn new(controller: Rc<Controller>, config: ClientConfig) -> Self {
        let (state, set_state) = signal(controller.snapshot());
        controller.subscribe(move |snapshot| set_state.set(snapshot.clone()));
        Self {
            controller: StoredValue::new_local(controller),
            state,
            config: StoredValue::new(config),
        }
    }

    pub fn controller(&self) -> Rc<Controller> {
        self.controller.get_value()
    }

    /// Run an async controller action in the background
    pub fn spawn<F, Fut>(&self, action: F)
    where
        F: FnOnce(Rc<Controller>) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let controller = self.controller();
        spawn_local(async move { action(controller).await });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
