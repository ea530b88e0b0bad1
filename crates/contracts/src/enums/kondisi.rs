use serde::{Deserialize, Serialize};

/// Состояние товара (kondisi)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kondisi {
    #[default]
    Baru,
    Bekas,
}

impl Kondisi {
    /// Значение для передачи по сети
    pub fn code(&self) -> &'static str {
        match self {
            Kondisi::Baru => "baru",
            Kondisi::Bekas => "bekas",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            Kondisi::Baru => "Baru",
            Kondisi::Bekas => "Bekas",
        }
    }

    pub fn all() -> Vec<Kondisi> {
        vec![Kondisi::Baru, Kondisi::Bekas]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "baru" => Some(Kondisi::Baru),
            "bekas" => Some(Kondisi::Bekas),
            _ => None,
        }
    }
}

impl std::fmt::Display for Kondisi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
