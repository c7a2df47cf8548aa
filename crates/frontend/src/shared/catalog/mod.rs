//! Общая обвязка каталожных страниц: сигналы, контроллер и компоненты.

pub mod binding;
pub mod card_list;
pub mod choice_list;
pub mod controller;
pub mod controls;
pub mod detail_pane;
pub mod header;

pub use binding::SignalBinding;
pub use controller::CatalogController;
