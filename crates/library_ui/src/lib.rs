//! Shared UI primitive library for the media library surfaces.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the
//! stable `data-ui-*` DOM contract consumed by the library CSS layers. Runtime
//! components compose these primitives instead of emitting ad hoc control
//! markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Badge, Button, ButtonShape, ButtonSize, ButtonVariant, CheckboxField, Cluster, Elevation,
    EmptyState, FieldGroup, FieldVariant, Grid, Heading, IconButton, LayoutAlign, LayoutGap,
    LayoutJustify, LayoutPadding, Modal, Pager, Panel, PreviewFrame, SegmentedControl,
    SegmentedControlOption, SelectField, Spinner, Stack, Surface, SurfaceVariant, Tab, TabList,
    Text, TextArea, TextField, TextRole, TextTone, ToastCard, ToastShelf, ToolBar,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Badge, Button, ButtonShape, ButtonSize, ButtonVariant, CheckboxField, Cluster, Elevation,
        EmptyState, FieldGroup, FieldVariant, Grid, Heading, Icon, IconButton, IconName, IconSize,
        LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, Modal, Pager, Panel, PreviewFrame,
        SegmentedControl, SegmentedControlOption, SelectField, Spinner, Stack, Surface,
        SurfaceVariant, Tab, TabList, Text, TextArea, TextField, TextRole, TextTone, ToastCard,
        ToastShelf, ToolBar,
    };
}
