//! Host-side runtime helpers for executing reducer effects against the media API and the
//! browser shell.
//!
//! Reducer semantics stay pure; everything that talks to the network, the clipboard, or
//! `localStorage` runs here behind injectable service traits.

mod boot;
mod media_effects;
mod shell_effects;

use std::rc::Rc;
use std::time::Duration;

use leptos::{set_timeout, Callback};
use media_client::{ApiRoutes, HttpMediaService, MediaService};

use crate::{
    model::LibraryConfig,
    prefs::{PrefsStore, WebPrefsStore},
    reducer::{LibraryAction, LibraryEffect},
    runtime_context::LibraryRuntimeContext,
    shell_gateway::{ShellGateway, WebShellGateway},
};

const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Clone)]
/// Host service bundle for media library side effects.
pub struct LibraryHostContext {
    media: Rc<dyn MediaService>,
    shell: Rc<dyn ShellGateway>,
    prefs: Rc<dyn PrefsStore>,
}

impl Default for LibraryHostContext {
    fn default() -> Self {
        Self {
            media: Rc::new(HttpMediaService::default()),
            shell: Rc::new(WebShellGateway),
            prefs: Rc::new(WebPrefsStore),
        }
    }
}

impl LibraryHostContext {
    /// Builds a host bundle from explicit service implementations.
    pub fn new(
        media: Rc<dyn MediaService>,
        shell: Rc<dyn ShellGateway>,
        prefs: Rc<dyn PrefsStore>,
    ) -> Self {
        Self {
            media,
            shell,
            prefs,
        }
    }

    /// Builds the browser host bundle with the media service pointed at the configured API.
    pub fn for_config(config: &LibraryConfig) -> Self {
        Self {
            media: Rc::new(HttpMediaService::new(ApiRoutes::new(&config.api_base_url))),
            ..Self::default()
        }
    }

    /// Returns the configured media API service.
    pub fn media_service(&self) -> Rc<dyn MediaService> {
        self.media.clone()
    }

    /// Returns the configured browser shell gateway.
    pub fn shell_gateway(&self) -> Rc<dyn ShellGateway> {
        self.shell.clone()
    }

    /// Returns the configured preference store.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.prefs.clone()
    }

    /// Installs boot side effects for the library provider.
    ///
    /// Boot restores persisted view preferences first, then requests the initial listing.
    pub fn install_boot(&self, dispatch: Callback<LibraryAction>) {
        boot::install_boot(self.clone(), dispatch);
    }

    /// Executes a single [`LibraryEffect`] emitted by the reducer.
    pub fn run_library_effect(&self, runtime: LibraryRuntimeContext, effect: LibraryEffect) {
        match effect {
            LibraryEffect::FetchMedia { seq } => {
                media_effects::fetch_media(self.clone(), runtime, seq)
            }
            LibraryEffect::UploadMedia { draft } => {
                media_effects::upload_media(self.clone(), runtime, draft)
            }
            LibraryEffect::DeleteMedia { targets } => {
                media_effects::delete_media(self.clone(), runtime, targets)
            }
            LibraryEffect::UpdateMedia { update } => {
                media_effects::update_media(self.clone(), runtime, update)
            }
            LibraryEffect::CopyLink { url } => shell_effects::copy_link(self.clone(), runtime, url),
            LibraryEffect::OpenUrl { url } => shell_effects::open_url(self.clone(), runtime, url),
            LibraryEffect::ExpireToast { id } => schedule_toast_expiry(runtime, id),
            LibraryEffect::PersistPreferences { prefs } => {
                shell_effects::persist_preferences(self.clone(), prefs)
            }
        }
    }
}

fn schedule_toast_expiry(runtime: LibraryRuntimeContext, id: u64) {
    set_timeout(
        move || runtime.dispatch_action(LibraryAction::ToastDismissed { id }),
        TOAST_LIFETIME,
    );
}
