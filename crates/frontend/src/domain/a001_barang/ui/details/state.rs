//! Состояние формы товара и чистые переходы между состояниями
//!
//! Каждый переход принимает состояние по значению и возвращает новое.
//! Тип файла параметризован, чтобы переходы проверялись без браузера.

use super::error::SubmissionError;
use contracts::domain::a001_barang::aggregate::{fields, BarangRecord};
use contracts::enums::{Kategori, Kondisi};

/// Итог последней отправки. Результат и ошибка взаимоисключающие.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Succeeded(BarangRecord),
    Failed(String),
}

/// Изменение одного поля формы
#[derive(Debug, Clone, PartialEq)]
pub enum FieldChange<F> {
    Nama(String),
    Harga(String),
    Deskripsi(String),
    Kondisi(Kondisi),
    Kategori(Option<Kategori>),
    /// `None`, если пользователь очистил выбор файла
    Gambar(Option<F>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarangFormState<F = web_sys::File> {
    pub nama: String,
    /// Цена в том виде, в каком её ввёл пользователь
    pub harga: String,
    pub deskripsi: String,
    pub kondisi: Kondisi,
    pub kategori: Option<Kategori>,
    pub gambar: Option<F>,
    pub submitting: bool,
    pub status: SubmissionStatus,
}

impl<F> Default for BarangFormState<F> {
    fn default() -> Self {
        Self {
            nama: String::new(),
            harga: String::new(),
            deskripsi: String::new(),
            kondisi: Kondisi::default(),
            kategori: None,
            gambar: None,
            submitting: false,
            status: SubmissionStatus::Idle,
        }
    }
}

impl<F> BarangFormState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Заменить ровно одно поле
    pub fn apply(mut self, change: FieldChange<F>) -> Self {
        match change {
            FieldChange::Nama(v) => self.nama = v,
            FieldChange::Harga(v) => self.harga = v,
            FieldChange::Deskripsi(v) => self.deskripsi = v,
            FieldChange::Kondisi(v) => self.kondisi = v,
            FieldChange::Kategori(v) => self.kategori = v,
            FieldChange::Gambar(v) => self.gambar = v,
        }
        self
    }

    pub fn submit_started(mut self) -> Self {
        self.submitting = true;
        self.status = SubmissionStatus::Idle;
        self
    }

    pub fn submit_succeeded(mut self, record: BarangRecord) -> Self {
        self.status = SubmissionStatus::Succeeded(record);
        self.submitting = false;
        self
    }

    pub fn submit_failed(mut self, message: impl Into<String>) -> Self {
        self.status = SubmissionStatus::Failed(message.into());
        self.submitting = false;
        self
    }

    /// Применить итог запроса
    pub fn settle(self, outcome: Result<BarangRecord, SubmissionError>) -> Self {
        match outcome {
            Ok(record) => self.submit_succeeded(record),
            Err(e) => self.submit_failed(e.to_string()),
        }
    }

    pub fn result(&self) -> Option<&BarangRecord> {
        match &self.status {
            SubmissionStatus::Succeeded(record) => Some(record),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            SubmissionStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<F: Clone> BarangFormState<F> {
    /// Снимок полей для отправки
    pub fn payload(&self) -> BarangPayload<F> {
        BarangPayload {
            nama: self.nama.clone(),
            harga: self.harga.clone(),
            deskripsi: self.deskripsi.clone(),
            kondisi: self.kondisi,
            kategori: self.kategori,
            gambar: self.gambar.clone(),
        }
    }
}

/// Данные одной отправки
#[derive(Debug, Clone, PartialEq)]
pub struct BarangPayload<F> {
    pub nama: String,
    pub harga: String,
    pub deskripsi: String,
    pub kondisi: Kondisi,
    pub kategori: Option<Kategori>,
    pub gambar: Option<F>,
}

impl<F> BarangPayload<F> {
    /// Текстовые части multipart-формы в порядке отправки.
    /// Невыбранная категория уходит пустой строкой.
    pub fn text_parts(&self) -> [(&'static str, &str); 5] {
        [
            (fields::NAMA, self.nama.as_str()),
            (fields::HARGA, self.harga.as_str()),
            (fields::DESKRIPSI, self.deskripsi.as_str()),
            (fields::KONDISI, self.kondisi.code()),
            (
                fields::KATEGORI,
                self.kategori.map(|k| k.code()).unwrap_or_default(),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_barang::aggregate::Harga;

    /// Заглушка файла для тестов вне браузера
    #[derive(Debug, Clone, PartialEq)]
    struct FakeFile(&'static str);

    type State = BarangFormState<FakeFile>;

    fn filled() -> State {
        State::new()
            .apply(FieldChange::Nama("Laptop Pro 14".into()))
            .apply(FieldChange::Harga("15000000".into()))
            .apply(FieldChange::Deskripsi("test".into()))
            .apply(FieldChange::Kategori(Some(Kategori::Elektronik)))
            .apply(FieldChange::Gambar(Some(FakeFile("a.jpg"))))
    }

    fn record() -> BarangRecord {
        serde_json::from_str(
            r#"{"nama": "Laptop Pro 14", "harga": 15000000, "kondisi": "baru", "kategori": "elektronik", "deskripsi": "test"}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_defaults() {
        let s = State::new();
        assert_eq!(s.kondisi, Kondisi::Baru);
        assert_eq!(s.kategori, None);
        assert_eq!(s.gambar, None);
        assert!(!s.submitting);
        assert_eq!(s.result(), None);
        assert_eq!(s.error(), None);
    }

    #[test]
    fn test_apply_changes_only_target_field() {
        let changes = vec![
            FieldChange::Nama("Kaos".into()),
            FieldChange::Harga("75000".into()),
            FieldChange::Deskripsi("katun".into()),
            FieldChange::Kondisi(Kondisi::Bekas),
            FieldChange::Kategori(Some(Kategori::Fashion)),
            FieldChange::Gambar(Some(FakeFile("b.png"))),
        ];

        for change in changes {
            let before = filled().submit_failed("lama");
            let after = before.clone().apply(change.clone());

            let mut expected = before.clone();
            match change {
                FieldChange::Nama(v) => expected.nama = v,
                FieldChange::Harga(v) => expected.harga = v,
                FieldChange::Deskripsi(v) => expected.deskripsi = v,
                FieldChange::Kondisi(v) => expected.kondisi = v,
                FieldChange::Kategori(v) => expected.kategori = v,
                FieldChange::Gambar(v) => expected.gambar = v,
            }
            assert_eq!(after, expected);
            assert_eq!(after.status, before.status);
            assert_eq!(after.submitting, before.submitting);
        }
    }

    #[test]
    fn test_new_image_replaces_previous() {
        let s = filled().apply(FieldChange::Gambar(Some(FakeFile("c.webp"))));
        assert_eq!(s.gambar, Some(FakeFile("c.webp")));

        let s = s.apply(FieldChange::Gambar(None));
        assert_eq!(s.gambar, None);
    }

    #[test]
    fn test_submit_started_clears_previous_outcome() {
        let after_error = filled().submit_failed("kategori wajib diisi").submit_started();
        assert!(after_error.submitting);
        assert_eq!(after_error.error(), None);
        assert_eq!(after_error.result(), None);

        let after_success = filled().submit_succeeded(record()).submit_started();
        assert!(after_success.submitting);
        assert_eq!(after_success.result(), None);
        assert_eq!(after_success.error(), None);
    }

    #[test]
    fn test_settle_success() {
        let s = filled().submit_started().settle(Ok(record()));
        assert!(!s.submitting);
        assert_eq!(s.result(), Some(&record()));
        assert_eq!(s.result().map(|r| &r.harga), Some(&Harga::Number(15_000_000.into())));
        assert_eq!(s.error(), None);
        // поля формы не сбрасываются
        assert_eq!(s.nama, "Laptop Pro 14");
    }

    #[test]
    fn test_settle_failure() {
        let s = filled().submit_started().settle(Err(SubmissionError::Rejected {
            status: 400,
            message: "kategori wajib diisi".into(),
        }));
        assert!(!s.submitting);
        assert_eq!(s.error(), Some("kategori wajib diisi"));
        assert_eq!(s.result(), None);

        let s = s
            .submit_started()
            .settle(Err(SubmissionError::Transport("offline".into())));
        assert!(!s.submitting);
        assert_eq!(s.error(), Some("Gagal terhubung ke server: offline"));
    }

    #[test]
    fn test_payload_text_parts() {
        let p = filled().apply(FieldChange::Kondisi(Kondisi::Bekas)).payload();
        assert_eq!(
            p.text_parts(),
            [
                ("nama", "Laptop Pro 14"),
                ("harga", "15000000"),
                ("deskripsi", "test"),
                ("kondisi", "bekas"),
                ("kategori", "elektronik"),
            ]
        );
        assert_eq!(p.gambar, Some(FakeFile("a.jpg")));
    }

    #[test]
    fn test_payload_without_kategori_or_image() {
        let p = State::new().payload();
        assert_eq!(p.text_parts()[4], ("kategori", ""));
        assert_eq!(p.text_parts()[3], ("kondisi", "baru"));
        assert_eq!(p.gambar, None);
    }
}
