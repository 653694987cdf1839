pub mod components;
pub mod effect_executor;
pub mod host;
pub mod model;
pub mod prefs;
pub mod reducer;
mod runtime_context;
pub mod shell_gateway;

pub use components::{
    use_library_runtime, AssetPicker, LibraryProvider, LibraryRuntimeContext, MediaLibraryView,
    PickerSelectionMode,
};
pub use host::LibraryHostContext;
pub use model::*;
pub use reducer::{reduce_library, LibraryAction, LibraryEffect, ReducerError};
