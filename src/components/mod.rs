pub mod booking_wizard;
pub mod chat_widget;
pub mod confirmation_card;
pub mod countdown_timer;
pub mod details_step;
pub mod exit_capture_modal;
pub mod location_step;
pub mod provider_card;
pub mod selection_step;
pub mod site_layout;
pub mod status_badge;
pub mod time_slot_grid;
