//! Production surface backend wrapping `wry`.
//!
//! Each account gets its own `wry::WebContext` rooted at a deterministic
//! directory under the partitions root, which is what isolates cookies and
//! storage between accounts (even two accounts of the same provider). The
//! webview is built as a child of the host window; page loads and probe
//! completions are pushed into the shared event sink.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;
use wry::raw_window_handle::HasWindowHandle;
use wry::{WebContext, WebView, WebViewBuilder};

use courier_common::{AccountId, Rect};

use crate::events::{SurfaceEvent, SurfaceEventSink};
use crate::surface::{Surface, SurfaceConfig, SurfaceError, SurfaceFactory};

impl From<wry::Error> for SurfaceError {
    fn from(e: wry::Error) -> Self {
        SurfaceError::Backend(e.to_string())
    }
}

/// Convert a logical `Rect` to a wry `Rect`.
pub fn rect_to_wry(rect: Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(rect.width, rect.height)),
    }
}

/// Wrap a probe expression so script exceptions surface as `null` instead of
/// aborting evaluation. The callback maps `"true"`/`"false"` to a result and
/// anything else to a probe failure.
fn probe_wrapper(probe: &str) -> String {
    format!("(function() {{ try {{ return !!({probe}); }} catch (e) {{ return null; }} }})()")
}

/// Creates `wry` child webviews attached to the host window.
pub struct WrySurfaceFactory<W: HasWindowHandle> {
    window: W,
    events: SurfaceEventSink,
    partitions_root: PathBuf,
    /// One web context per partition, kept alive for the process lifetime so
    /// every surface keeps its backing storage.
    contexts: HashMap<String, WebContext>,
}

impl<W: HasWindowHandle> WrySurfaceFactory<W> {
    pub fn new(window: W, events: SurfaceEventSink, partitions_root: PathBuf) -> Self {
        Self {
            window,
            events,
            partitions_root,
            contexts: HashMap::new(),
        }
    }
}

impl<W: HasWindowHandle> SurfaceFactory for WrySurfaceFactory<W> {
    type Surface = WrySurface;

    fn create(
        &mut self,
        account_id: &AccountId,
        config: &SurfaceConfig,
    ) -> Result<WrySurface, SurfaceError> {
        let data_dir = self.partitions_root.join(&config.partition);
        let context = self
            .contexts
            .entry(config.partition.clone())
            .or_insert_with(|| WebContext::new(Some(data_dir)));

        let mut builder = WebViewBuilder::new_with_web_context(context)
            .with_focused(false)
            .with_url(&config.url);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        let events = Arc::clone(&self.events);
        let id = account_id.clone();
        builder = builder.with_on_page_load_handler(move |event, url| {
            let state = event.into();
            debug!(account_id = %id, ?state, url = %url, "page load");
            if let Ok(mut evts) = events.lock() {
                evts.push(SurfaceEvent::PageLoad {
                    account_id: id.clone(),
                    state,
                    url,
                });
            }
        });

        let webview = builder.build_as_child(&self.window)?;

        debug!(
            account_id = %account_id,
            partition = %config.partition,
            url = %config.url,
            "surface created"
        );

        Ok(WrySurface {
            webview,
            account_id: account_id.clone(),
            events: Arc::clone(&self.events),
        })
    }
}

/// A managed `wry` webview for one account.
pub struct WrySurface {
    webview: WebView,
    account_id: AccountId,
    events: SurfaceEventSink,
}

impl Surface for WrySurface {
    fn set_bounds(&self, bounds: Rect) -> Result<(), SurfaceError> {
        self.webview.set_bounds(rect_to_wry(bounds))?;
        Ok(())
    }

    fn set_visible(&self, visible: bool) -> Result<(), SurfaceError> {
        self.webview.set_visible(visible)?;
        Ok(())
    }

    fn evaluate_script(&self, js: &str) -> Result<(), SurfaceError> {
        self.webview
            .evaluate_script(js)
            .map_err(|e| SurfaceError::Script(e.to_string()))
    }

    fn request_probe(&self, probe: &str) -> Result<(), SurfaceError> {
        let js = probe_wrapper(probe);
        let events = Arc::clone(&self.events);
        let id = self.account_id.clone();

        self.webview
            .evaluate_script_with_callback(&js, move |result| {
                let event = match result.as_str() {
                    "true" => SurfaceEvent::ProbeCompleted {
                        account_id: id.clone(),
                        unread: true,
                    },
                    "false" => SurfaceEvent::ProbeCompleted {
                        account_id: id.clone(),
                        unread: false,
                    },
                    other => SurfaceEvent::ProbeFailed {
                        account_id: id.clone(),
                        reason: format!("probe returned {other:?}"),
                    },
                };
                if let Ok(mut evts) = events.lock() {
                    evts.push(event);
                }
            })
            .map_err(|e| SurfaceError::Script(e.to_string()))
    }

    fn zoom(&self, scale: f64) -> Result<(), SurfaceError> {
        self.webview.zoom(scale)?;
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
