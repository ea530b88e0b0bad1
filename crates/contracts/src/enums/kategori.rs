use serde::{Deserialize, Serialize};

/// Категория товара (kategori). Значения по умолчанию нет: пользователь выбирает явно.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kategori {
    Elektronik,
    Fashion,
    Makanan,
    Lainnya,
}

impl Kategori {
    /// Значение для передачи по сети
    pub fn code(&self) -> &'static str {
        match self {
            Kategori::Elektronik => "elektronik",
            Kategori::Fashion => "fashion",
            Kategori::Makanan => "makanan",
            Kategori::Lainnya => "lainnya",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            Kategori::Elektronik => "Elektronik",
            Kategori::Fashion => "Fashion",
            Kategori::Makanan => "Makanan",
            Kategori::Lainnya => "Lainnya",
        }
    }

    /// Получить все категории в порядке отображения
    pub fn all() -> Vec<Kategori> {
        vec![
            Kategori::Elektronik,
            Kategori::Fashion,
            Kategori::Makanan,
            Kategori::Lainnya,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "elektronik" => Some(Kategori::Elektronik),
            "fashion" => Some(Kategori::Fashion),
            "makanan" => Some(Kategori::Makanan),
            "lainnya" => Some(Kategori::Lainnya),
            _ => None,
        }
    }
}

impl std::fmt::Display for Kategori {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_matches_serde() {
        for k in Kategori::all() {
            let json = serde_json::to_string(&k).unwrap();
            assert_eq!(json, format!("\"{}\"", k.code()));
            assert_eq!(Kategori::from_code(k.code()), Some(k));
        }
    }

    #[test]
    fn test_unknown_or_empty_code() {
        assert_eq!(Kategori::from_code(""), None);
        assert_eq!(Kategori::from_code("otomotif"), None);
    }

    #[test]
    fn test_display_order() {
        let codes: Vec<_> = Kategori::all().iter().map(|k| k.code()).collect();
        assert_eq!(codes, vec!["elektronik", "fashion", "makanan", "lainnya"]);
    }
}
