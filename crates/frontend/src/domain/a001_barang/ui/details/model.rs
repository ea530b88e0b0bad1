//! Barang Details - Model (API functions)

use super::error::{SubmissionError, FALLBACK_ERROR_MESSAGE};
use super::state::BarangPayload;
use crate::shared::api_utils::api_url;
use crate::shared::config::AppConfig;
use contracts::domain::a001_barang::aggregate::{
    fields, BarangRecord, CreateBarangResponse, ErrorResponse, RESOURCE_PATH,
};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use std::cell::Cell;
use std::rc::Rc;
use web_sys::{AbortController, File, FormData};

/// Создать товар: POST multipart на `{base}/barang`
///
/// Запрос прерывается через `config.request_timeout_ms`.
pub async fn create_barang(
    config: &AppConfig,
    payload: BarangPayload<File>,
) -> Result<BarangRecord, SubmissionError> {
    let form_data = build_form_data(&payload)?;

    let controller =
        AbortController::new().map_err(|e| SubmissionError::Request(format!("{e:?}")))?;
    let signal = controller.signal();
    let timeout_ms = config.request_timeout_ms;
    let timed_out = Rc::new(Cell::new(false));
    // Таймер отменяется при drop, то есть при выходе из функции
    let _timeout = {
        let timed_out = timed_out.clone();
        Timeout::new(timeout_ms, move || {
            timed_out.set(true);
            controller.abort();
        })
    };

    let url = api_url(config, RESOURCE_PATH);
    let response = Request::post(&url)
        .abort_signal(Some(&signal))
        .body(form_data)
        .map_err(|e| SubmissionError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| {
            aborted_or(
                timed_out.get(),
                timeout_ms,
                SubmissionError::Transport(e.to_string()),
            )
        })?;

    let status = response.status();
    let body = response.text().await.map_err(|e| {
        aborted_or(
            timed_out.get(),
            timeout_ms,
            SubmissionError::InvalidResponse(e.to_string()),
        )
    })?;

    interpret_response(status, &body)
}

/// Ошибка fetch после срабатывания таймера означает таймаут, а не сбой сети
fn aborted_or(timed_out: bool, timeout_ms: u32, err: SubmissionError) -> SubmissionError {
    if timed_out {
        SubmissionError::TimedOut(timeout_ms)
    } else {
        err
    }
}

fn build_form_data(payload: &BarangPayload<File>) -> Result<FormData, SubmissionError> {
    let to_err = |e: wasm_bindgen::JsValue| SubmissionError::Request(format!("{e:?}"));

    let form_data = FormData::new().map_err(to_err)?;
    for (name, value) in payload.text_parts() {
        form_data.append_with_str(name, value).map_err(to_err)?;
    }
    if let Some(file) = &payload.gambar {
        form_data
            .append_with_blob(fields::GAMBAR, file)
            .map_err(to_err)?;
    }
    Ok(form_data)
}

/// Разобрать ответ сервера
///
/// Тело читается как JSON при любом статусе. Для статуса вне 2xx
/// возвращается `Rejected` с `detail` или общим сообщением.
pub fn interpret_response(status: u16, body: &str) -> Result<BarangRecord, SubmissionError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| SubmissionError::InvalidResponse(e.to_string()))?;

    if !(200..300).contains(&status) {
        let message = serde_json::from_value::<ErrorResponse>(value)
            .ok()
            .and_then(|body| body.message())
            .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());
        return Err(SubmissionError::Rejected { status, message });
    }

    serde_json::from_value::<CreateBarangResponse>(value)
        .map(|response| response.data)
        .map_err(|e| SubmissionError::InvalidResponse(e.to_string()))
}
