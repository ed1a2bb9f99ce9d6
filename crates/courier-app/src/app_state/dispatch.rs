//! The transport boundary: requests from the UI shell, dispatched against
//! the registry and the view pool on the control thread.
//!
//! Registry failures (duplicate account, store I/O) come back as structured
//! `{success: false, error}` responses for the shell to display — they are
//! never allowed to cross the boundary as panics. Reference errors inside
//! the pool stay silent by design.

use std::fmt::Display;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use serde_json::json;

use courier_common::{AccountId, Event, EventBus};
use courier_providers::{catalog, AccountRegistry};
use courier_webview::{SurfaceFactory, ViewPool};

use super::core::CourierApp;

fn default_visible() -> bool {
    true
}

/// Operations the UI shell may request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", content = "data", rename_all = "snake_case")]
pub enum Request {
    EnsureView {
        account_id: AccountId,
        #[serde(default = "default_visible")]
        visible: bool,
    },
    ShowView {
        account_id: AccountId,
    },
    HideView {
        account_id: AccountId,
    },
    ListAccounts,
    ListProviderTypes,
    AddAccount {
        provider_type_id: String,
        label: String,
    },
    DeleteAccount {
        account_id: AccountId,
    },
}

/// Structured result for every request.
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl Response {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn failure(error: impl Display) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
            data: None,
        }
    }
}

/// Handle one request against the registry and pool.
pub fn handle_request<F: SurfaceFactory>(
    request: Request,
    registry: &Arc<Mutex<AccountRegistry>>,
    pool: &mut ViewPool<F>,
    bus: &EventBus,
) -> Response {
    match request {
        Request::EnsureView {
            account_id,
            visible,
        } => {
            pool.ensure(&account_id, visible);
            Response::ok()
        }

        Request::ShowView { account_id } => {
            // Single visible view: the previous foreground account is hidden
            // before the new one is shown. The hide only happens when the
            // requested view exists, so a show for a missing view is a true
            // no-op instead of blanking the content area.
            if pool.contains(&account_id) {
                if let Some(current) = pool.visible_account().cloned() {
                    if current != account_id {
                        pool.hide(&current);
                    }
                }
            }
            pool.show(&account_id);
            Response::ok()
        }

        Request::HideView { account_id } => {
            pool.hide(&account_id);
            Response::ok()
        }

        Request::ListAccounts => {
            let accounts = registry.lock().unwrap().list().to_vec();
            Response::with_data(json!(accounts))
        }

        Request::ListProviderTypes => Response::with_data(json!(catalog::all())),

        Request::AddAccount {
            provider_type_id,
            label,
        } => {
            let created = registry.lock().unwrap().create(&provider_type_id, &label);
            match created {
                Ok(account) => {
                    // Warm the new account's view in the background.
                    pool.ensure(&account.id, false);
                    bus.publish(Event::AccountsChanged);
                    Response::with_data(json!(account))
                }
                Err(e) => Response::failure(e),
            }
        }

        Request::DeleteAccount { account_id } => {
            // Hide the view but keep it alive for faster future access.
            pool.hide(&account_id);
            match registry.lock().unwrap().delete(&account_id) {
                Ok(()) => {
                    bus.publish(Event::AccountsChanged);
                    Response::ok()
                }
                Err(e) => Response::failure(e),
            }
        }
    }
}

impl CourierApp {
    /// Entry point for requests arriving over the transport.
    pub fn handle_request(&mut self, request: Request) -> Response {
        match &mut self.pool {
            Some(pool) => handle_request(request, &self.registry, pool, &self.bus),
            None => Response::failure("view pool not initialized"),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
