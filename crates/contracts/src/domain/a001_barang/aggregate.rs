use serde::{Deserialize, Serialize};

use crate::enums::{Kategori, Kondisi};

// ============================================================================
// Wire constants
// ============================================================================

/// Путь ресурса на бэкенде (относительно базового URL)
pub const RESOURCE_PATH: &str = "/barang";

/// Имена частей multipart-формы
pub mod fields {
    pub const NAMA: &str = "nama";
    pub const HARGA: &str = "harga";
    pub const DESKRIPSI: &str = "deskripsi";
    pub const KONDISI: &str = "kondisi";
    pub const KATEGORI: &str = "kategori";
    pub const GAMBAR: &str = "gambar";
}

// ============================================================================
// Record
// ============================================================================

/// Цена в ответе сервера: число или числовая строка
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Harga {
    Number(serde_json::Number),
    Text(String),
}

impl Harga {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Harga::Number(n) => n.as_f64(),
            Harga::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }
}

impl std::fmt::Display for Harga {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Harga::Number(n) => write!(f, "{}", n),
            Harga::Text(s) => f.write_str(s),
        }
    }
}

/// Сохранённый товар, как его вернул сервер (поле `data`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarangRecord {
    pub nama: String,
    pub harga: Harga,
    pub kondisi: Kondisi,
    pub kategori: Kategori,
    pub deskripsi: String,
    /// Путь к изображению относительно базового URL бэкенда
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gambar_url: Option<String>,
}

// ============================================================================
// Response envelopes
// ============================================================================

/// Успешный ответ на POST /barang
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBarangResponse {
    pub data: BarangRecord,
}

/// Тело ответа с ошибкой
///
/// `detail` бывает строкой либо списком ошибок валидации вида `[{"msg": "..."}]`.
/// Прочие значения (число, объект) показываются как есть.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Сообщение для пользователя, если сервер его прислал
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            serde_json::Value::Array(items) => {
                let msgs: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                    .filter(|m| !m.trim().is_empty())
                    .collect();
                if msgs.is_empty() {
                    None
                } else {
                    Some(msgs.join("; "))
                }
            }
            serde_json::Value::Number(n) => Some(n.to_string()),
            serde_json::Value::Bool(b) => Some(b.to_string()),
            v @ serde_json::Value::Object(_) => Some(v.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_server_payload() {
        let json = r#"{"nama": "Laptop Pro 14", "harga": 15000000, "kondisi": "baru", "kategori": "elektronik", "deskripsi": "test"}"#;
        let record: BarangRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.nama, "Laptop Pro 14");
        assert_eq!(record.harga.as_f64(), Some(15_000_000.0));
        assert_eq!(record.kondisi, Kondisi::Baru);
        assert_eq!(record.kategori, Kategori::Elektronik);
        assert_eq!(record.gambar_url, None);
    }

    #[test]
    fn test_harga_as_text() {
        let json = r#"{"nama": "Kaos", "harga": "75000", "kondisi": "bekas", "kategori": "fashion", "deskripsi": "d", "gambar_url": "/uploads/x.jpg"}"#;
        let record: BarangRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.harga, Harga::Text("75000".to_string()));
        assert_eq!(record.harga.as_f64(), Some(75_000.0));
        assert_eq!(record.gambar_url.as_deref(), Some("/uploads/x.jpg"));

        assert_eq!(Harga::Text("murah".to_string()).as_f64(), None);
    }

    #[test]
    fn test_unknown_kategori_rejected() {
        let json = r#"{"nama": "X", "harga": 1, "kondisi": "baru", "kategori": "otomotif", "deskripsi": "d"}"#;
        assert!(serde_json::from_str::<BarangRecord>(json).is_err());
    }

    #[test]
    fn test_error_message_string() {
        let body: ErrorResponse =
            serde_json::from_str(r#"{"detail": "kategori wajib diisi"}"#).unwrap();
        assert_eq!(body.message().as_deref(), Some("kategori wajib diisi"));
    }

    #[test]
    fn test_error_message_missing_or_blank() {
        let body: ErrorResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(body.message(), None);
        let body: ErrorResponse = serde_json::from_str(r#"{"detail": "  "}"#).unwrap();
        assert_eq!(body.message(), None);
        let body: ErrorResponse = serde_json::from_str(r#"{"detail": null}"#).unwrap();
        assert_eq!(body.message(), None);
        let body: ErrorResponse = serde_json::from_str(r#"{"detail": []}"#).unwrap();
        assert_eq!(body.message(), None);
    }

    #[test]
    fn test_error_message_scalar_kept() {
        let body: ErrorResponse = serde_json::from_str(r#"{"detail": 42}"#).unwrap();
        assert_eq!(body.message().as_deref(), Some("42"));
        let body: ErrorResponse = serde_json::from_str(r#"{"detail": false}"#).unwrap();
        assert_eq!(body.message().as_deref(), Some("false"));
        let body: ErrorResponse =
            serde_json::from_str(r#"{"detail": {"code": "E1"}}"#).unwrap();
        assert_eq!(body.message().as_deref(), Some(r#"{"code":"E1"}"#));
    }

    #[test]
    fn test_error_message_validation_list() {
        let body: ErrorResponse = serde_json::from_str(
            r#"{"detail": [{"loc": ["body", "nama"], "msg": "field required"}, {"msg": "harga invalid"}]}"#,
        )
        .unwrap();
        assert_eq!(
            body.message().as_deref(),
            Some("field required; harga invalid")
        );
    }
}
