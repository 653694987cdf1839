use std::collections::BTreeSet;

use media_client::DEFAULT_API_BASE_URL;
use media_domain::{clamp_page, page_slice, total_pages, MediaFilter, MediaId, MediaItem};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 5;
pub const DEFAULT_UPLOADER_NAME: &str = "media-library";
pub const DEFAULT_CONFIRM_PHRASE: &str = "DELETE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    List,
    Grid,
}

impl Default for ViewMode {
    fn default() -> Self {
        Self::List
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryConfig {
    pub api_base_url: String,
    pub uploader_name: String,
    pub page_size: usize,
    pub confirm_phrase: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            uploader_name: DEFAULT_UPLOADER_NAME.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            confirm_phrase: DEFAULT_CONFIRM_PHRASE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current: usize,
    pub size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LibraryState {
    pub items: Vec<MediaItem>,
    pub filter: MediaFilter,
    pub selection: Vec<MediaId>,
    pub view_mode: ViewMode,
    pub page: PageState,
    pub pending_fetches: u32,
    pub pending_mutations: u32,
    pub load_error: Option<String>,
    pub last_issued_fetch: u64,
    pub last_applied_fetch: u64,
    pub config: LibraryConfig,
}

impl Default for LibraryState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            filter: MediaFilter::default(),
            selection: Vec::new(),
            view_mode: ViewMode::default(),
            page: PageState::default(),
            pending_fetches: 0,
            pending_mutations: 0,
            load_error: None,
            last_issued_fetch: 0,
            last_applied_fetch: 0,
            config: LibraryConfig::default(),
        }
    }
}

impl LibraryState {
    pub fn with_config(config: LibraryConfig) -> Self {
        Self {
            page: PageState {
                current: 1,
                size: config.page_size,
            },
            config,
            ..Self::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending_fetches > 0
    }

    pub fn is_mutating(&self) -> bool {
        self.pending_mutations > 0
    }

    pub fn filtered_items(&self) -> Vec<MediaItem> {
        self.filter.apply(&self.items)
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_items().len(), self.page.size)
    }

    pub fn clamped_page(&self) -> usize {
        clamp_page(self.page.current, self.total_pages())
    }

    pub fn page_items(&self) -> Vec<MediaItem> {
        page_slice(&self.filtered_items(), self.page.current, self.page.size).to_vec()
    }

    pub fn item(&self, id: MediaId) -> Option<&MediaItem> {
        self.items.iter().find(|item| item.id == Some(id))
    }

    pub fn is_selected(&self, id: MediaId) -> bool {
        self.selection.contains(&id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmGate {
    Closed,
    Open { targets: Vec<MediaId>, typed: String },
}

impl Default for ConfirmGate {
    fn default() -> Self {
        Self::Closed
    }
}

impl ConfirmGate {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn is_armed(&self, phrase: &str) -> bool {
        match self {
            Self::Open { typed, .. } => typed == phrase,
            Self::Closed => false,
        }
    }

    pub fn targets(&self) -> &[MediaId] {
        match self {
            Self::Open { targets, .. } => targets,
            Self::Closed => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastTone {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastNote {
    pub id: u64,
    pub tone: ToastTone,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverlayState {
    pub details: Option<MediaId>,
    pub confirm: ConfirmGate,
    pub upload_open: bool,
    pub toasts: Vec<ToastNote>,
    pub next_toast_id: u64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UploadDraft {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime_type: Option<String>,
    pub size: u64,
    pub name: String,
    pub title: String,
    pub description: String,
    pub alt_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiPreferences {
    pub view_mode: ViewMode,
    pub page_size: usize,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::default(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

pub fn same_id_set(left: &[MediaId], right: &[MediaId]) -> bool {
    left.iter().collect::<BTreeSet<_>>() == right.iter().collect::<BTreeSet<_>>()
}
