use thiserror::Error;

/// Сообщение, если сервер отклонил запрос без `detail`
pub const FALLBACK_ERROR_MESSAGE: &str = "Gagal mengirim data";

/// Ошибка отправки формы. `Display` выводит текст для пользователя.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// Не удалось собрать запрос (FormData, AbortController)
    #[error("Gagal menyiapkan permintaan: {0}")]
    Request(String),

    /// Сетевая ошибка
    #[error("Gagal terhubung ke server: {0}")]
    Transport(String),

    /// Запрос прерван по таймауту
    #[error("Server tidak merespons dalam {0} ms")]
    TimedOut(u32),

    /// Сервер ответил статусом вне 2xx
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// Тело ответа не разобрано
    #[error("Respons server tidak valid: {0}")]
    InvalidResponse(String),
}
