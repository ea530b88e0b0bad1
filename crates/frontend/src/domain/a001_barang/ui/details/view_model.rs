use super::model;
use super::state::{BarangFormState, FieldChange};
use crate::shared::api_utils::{api_url, resolve_asset_url};
use crate::shared::config::AppConfig;
use contracts::domain::a001_barang::aggregate::RESOURCE_PATH;
use leptos::prelude::*;
use web_sys::File;

/// ViewModel for Barang details form
///
/// `web_sys::File` is not `Send`, so the state lives in local storage.
#[derive(Clone, Copy)]
pub struct BarangDetailsViewModel {
    pub state: RwSignal<BarangFormState<File>, LocalStorage>,
    config: StoredValue<AppConfig>,
}

impl BarangDetailsViewModel {
    pub fn new(config: AppConfig) -> Self {
        Self {
            state: RwSignal::new_local(BarangFormState::new()),
            config: StoredValue::new(config),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.state.with(|s| s.submitting)
    }

    /// Update a single field
    pub fn set_field(&self, change: FieldChange<File>) {
        self.state
            .update(|s| *s = std::mem::take(s).apply(change));
    }

    /// URL for the image of the last saved record, if the server returned one
    pub fn result_image_url(&self) -> Option<String> {
        let path = self
            .state
            .with(|s| s.result().and_then(|r| r.gambar_url.clone()))?;
        Some(self.config.with_value(|c| resolve_asset_url(c, &path)))
    }

    /// Send the form to the server
    ///
    /// A call while a request is in flight is ignored.
    pub fn submit_command(&self) {
        if self.state.with_untracked(|s| s.submitting) {
            log::warn!("barang: submit ignored, request already in flight");
            return;
        }

        self.state
            .update(|s| *s = std::mem::take(s).submit_started());
        let payload = self.state.with_untracked(|s| s.payload());
        let config = self.config.get_value();
        let state = self.state;

        log::info!(
            "barang: submitting '{}' to {}",
            payload.nama,
            api_url(&config, RESOURCE_PATH)
        );

        wasm_bindgen_futures::spawn_local(async move {
            let outcome = model::create_barang(&config, payload).await;
            match &outcome {
                Ok(record) => log::info!("barang: saved '{}'", record.nama),
                Err(e) => log::warn!("barang: submit failed: {:?}", e),
            }
            // Компонент мог быть размонтирован, пока шёл запрос
            state.try_update(|s| *s = std::mem::take(s).settle(outcome));
        });
    }
}
