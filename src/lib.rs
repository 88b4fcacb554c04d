//! Action sheets for terminal user interfaces
//!
//! An action sheet is a modal list of action buttons with an optional
//! cancel action. [`ActionSheetPresenter`] owns the sheet's behavior; the
//! host supplies navigation, gesture blocking and settings through the traits
//! in [`controller`] and drives the view through [`lifecycle`].

pub mod button;
pub mod config;
pub mod controller;
pub mod error;
pub mod gesture;
pub mod ids;
pub mod input;
pub mod lifecycle;
pub mod nav;
pub mod presenter;
pub mod render;
pub mod sheet;

pub use button::{ActionSheetButton, ButtonInput, HandlerOutcome, Role};
pub use config::AppConfig;
pub use controller::Dismissal;
pub use error::Error;
pub use presenter::{ActionSheetPresenter, ButtonRef, Injected};
pub use sheet::ActionSheetConfig;
