//! Barang Details UI Module
//!
//! MVVM pattern implementation:
//! - state.rs: FormState value and pure transitions
//! - model.rs: API functions (create, response decoding)
//! - view_model.rs: ViewModel with commands, owns the state signal
//! - view.rs: Leptos component (pure UI)

mod error;
mod model;
mod state;
mod view;
mod view_model;

pub use error::{SubmissionError, FALLBACK_ERROR_MESSAGE};
pub use state::{BarangFormState, BarangPayload, FieldChange, SubmissionStatus};
pub use view::BarangDetails;
pub use view_model::BarangDetailsViewModel;
