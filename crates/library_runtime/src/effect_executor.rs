//! Explicit effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::runtime_context::LibraryRuntimeContext;

/// Installs the effect executor that drains reducer-emitted effects in order.
pub fn install(runtime: LibraryRuntimeContext) {
    // Reset the queue before draining so dispatches made by effect handlers enqueue a fresh
    // batch rather than being clobbered when the in-flight drain finishes.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            runtime.host.get_value().run_library_effect(runtime, effect);
        }
    });
}
