//! Каталожное ядро: хранилище, фильтр, движок выдачи, трекер выбора,
//! редьюсер и рендер в модель представления.

pub mod content_store;
pub mod detail;
pub mod engine;
pub mod filter_state;
pub mod page;
pub mod reducer;
pub mod render;
pub mod tracker;
pub mod view_model;

pub use content_store::ContentStore;
pub use detail::{DetailContent, DetailSource, FrameSpec};
pub use engine::{matches, view};
pub use filter_state::{Facet, FilterState};
pub use page::{CatalogPage, Labels};
pub use reducer::{reduce, CatalogAction, PageState};
pub use render::{render, RecordingBinding, ViewBinding};
pub use view_model::*;
pub use tracker::{ExpansionState, SelectionState, Tracker, TrackerPolicy};
