pub mod accordion;
pub mod alert;
pub mod detail_panel;
pub mod gallery;
pub mod lookup_page;
pub mod search_bar;
pub mod style;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use accordion::{AccordionHeader, AccordionHeaderProps};
pub use alert::{AlertDialog, AlertProps};
pub use detail_panel::{DetailPanel, DetailPanelProps};
pub use gallery::{Gallery, GalleryProps};
pub use lookup_page::{LookupPage, LookupPageProps};
pub use search_bar::{SearchBar, SearchBarProps};
