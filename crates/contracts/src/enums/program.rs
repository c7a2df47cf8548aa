/// Учебные программы с встроенными названиями.
///
/// В данных программа хранится строкой; перечисление нужно только для подписей
/// и списка фильтров.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Program {
    Mpra,
    Media,
    Comm,
    Da,
    General,
    Other,
}

impl Program {
    /// Получить код программы (значение в JSON и в фильтре)
    pub fn code(&self) -> &'static str {
        match self {
            Program::Mpra => "mpra",
            Program::Media => "media",
            Program::Comm => "comm",
            Program::Da => "da",
            Program::General => "general",
            Program::Other => "other",
        }
    }

    /// Полное название, используется на странице how-to
    pub fn display_name(&self) -> &'static str {
        match self {
            Program::Mpra => "Music Production & Recording Arts",
            Program::Media => "Media Studies",
            Program::Comm => "Communication & the Arts",
            Program::Da => "Digital Arts",
            Program::General => "General",
            Program::Other => "Other",
        }
    }

    /// Короткое название для плашек на странице ресурсов
    pub fn short_name(&self) -> &'static str {
        match self {
            Program::Mpra => "MPRA",
            Program::Media => "Media Studies",
            Program::Comm => "Comm Arts",
            Program::Da => "Digital Arts",
            Program::General => "General",
            Program::Other => "Other",
        }
    }

    /// Программы, которые предлагаются в фильтрах (без "other")
    pub fn listed() -> Vec<Program> {
        vec![
            Program::Mpra,
            Program::Media,
            Program::Comm,
            Program::Da,
            Program::General,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "mpra" => Some(Program::Mpra),
            "media" => Some(Program::Media),
            "comm" => Some(Program::Comm),
            "da" => Some(Program::Da),
            "general" => Some(Program::General),
            "other" => Some(Program::Other),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for p in Program::listed() {
            assert_eq!(Program::from_code(p.code()), Some(p));
        }
        assert_eq!(Program::from_code("other"), Some(Program::Other));
        assert_eq!(Program::from_code("podcasting"), None);
    }
}
