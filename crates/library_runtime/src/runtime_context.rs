//! Runtime provider and context wiring for the media library.
//!
//! This module owns the long-lived reducer container, the effect queue, and host bootstrap
//! wiring. UI composition stays in [`crate::components`].

use leptos::*;

use crate::{
    effect_executor,
    host::LibraryHostContext,
    model::{LibraryConfig, LibraryState, OverlayState},
    reducer::{reduce_library, LibraryAction, LibraryEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading library state and dispatching [`LibraryAction`] values.
pub struct LibraryRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<LibraryHostContext>,
    /// Reactive library state signal.
    pub state: RwSignal<LibraryState>,
    /// Reactive overlay state signal (details panel, confirm gate, upload dialog, toasts).
    pub overlay: RwSignal<OverlayState>,
    /// Queue of effects emitted by the reducer and processed by the host layer.
    pub effects: RwSignal<Vec<LibraryEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<LibraryAction>,
}

impl LibraryRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: LibraryAction) {
        self.dispatch.call(action);
    }
}

fn install_runtime_orchestration(runtime: LibraryRuntimeContext) {
    runtime.host.get_value().install_boot(runtime.dispatch);
    effect_executor::install(runtime);
}

#[component]
/// Provides [`LibraryRuntimeContext`] to descendant components and boots persisted preferences.
pub fn LibraryProvider(
    /// Injected browser host bundle assembled by the entry layer.
    host_services: LibraryHostContext,
    /// Library configuration; defaults cover the API base URL, uploader name, page size, and
    /// delete confirmation phrase.
    #[prop(optional)]
    config: Option<LibraryConfig>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let host = store_value(host_services);
    let state = create_rw_signal(LibraryState::with_config(config));
    let overlay = create_rw_signal(OverlayState::default());
    let effects = create_rw_signal(Vec::<LibraryEffect>::new());

    let dispatch = Callback::new(move |action: LibraryAction| {
        let mut library = state.get_untracked();
        let mut panes = overlay.get_untracked();
        let previous_library = library.clone();
        let previous_panes = panes.clone();

        match reduce_library(&mut library, &mut panes, action) {
            Ok(new_effects) => {
                if library != previous_library {
                    state.set(library);
                }
                if panes != previous_panes {
                    overlay.set(panes);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("library reducer error: {err}"),
        }
    });

    let runtime = LibraryRuntimeContext {
        host,
        state,
        overlay,
        effects,
        dispatch,
    };

    provide_context(runtime);

    install_runtime_orchestration(runtime);

    children().into_view()
}

/// Returns the current [`LibraryRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`LibraryProvider`].
pub fn use_library_runtime() -> LibraryRuntimeContext {
    use_context::<LibraryRuntimeContext>().expect("LibraryRuntimeContext not provided")
}
