//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod footer;
mod gallery_grid;
mod gift_card;
mod hero_banner;
mod image_picker;
mod info_card;
mod lightbox;
mod navbar;
mod rsvp_form;
mod rsvp_reminder;
mod sortable_list;
mod timeline;

pub use delete_confirm_button::DeleteConfirmButton;
pub use footer::Footer;
pub use gallery_grid::GalleryGrid;
pub use gift_card::GiftCard;
pub use hero_banner::HeroBanner;
pub use image_picker::ImagePicker;
pub use info_card::{InfoCard, InfoModal};
pub use lightbox::Lightbox;
pub use navbar::Navbar;
pub use rsvp_form::RsvpForm;
pub use rsvp_reminder::RsvpReminder;
pub use sortable_list::SortableList;
pub use timeline::Timeline;
