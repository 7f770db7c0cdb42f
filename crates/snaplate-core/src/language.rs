/// Immutable catalog entry for a selectable target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageOption {
    pub code: &'static str,
    pub name: &'static str,
}

/// Fixed at build time, never mutated at runtime.
pub const SUPPORTED_LANGUAGES: [LanguageOption; 16] = [
    LanguageOption { code: "en", name: "English" },
    LanguageOption { code: "es", name: "Spanish (Español)" },
    LanguageOption { code: "fr", name: "French (Français)" },
    LanguageOption { code: "de", name: "German (Deutsch)" },
    LanguageOption { code: "it", name: "Italian (Italiano)" },
    LanguageOption { code: "pt", name: "Portuguese (Português)" },
    LanguageOption { code: "zh", name: "Chinese (Simplified) (简体中文)" },
    LanguageOption { code: "ja", name: "Japanese (日本語)" },
    LanguageOption { code: "ko", name: "Korean (한국어)" },
    LanguageOption { code: "ru", name: "Russian (Русский)" },
    LanguageOption { code: "ar", name: "Arabic (العربية)" },
    LanguageOption { code: "hi", name: "Hindi (हिन्दी)" },
    LanguageOption { code: "tr", name: "Turkish (Türkçe)" },
    LanguageOption { code: "vi", name: "Vietnamese (Tiếng Việt)" },
    LanguageOption { code: "th", name: "Thai (ไทย)" },
    LanguageOption { code: "id", name: "Indonesian (Bahasa Indonesia)" },
];

pub fn is_supported(code: &str) -> bool {
    SUPPORTED_LANGUAGES.iter().any(|l| l.code == code)
}

/// Human-readable name for a code, if the catalog knows it.
pub fn display_name(code: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|l| l.code == code)
        .map(|l| l.name)
}

/// The name handed to the translation prompt. Unknown codes pass through
/// unchanged, the model copes better with a name but accepts a code.
pub fn prompt_name(code: &str) -> String {
    display_name(code).unwrap_or(code).to_string()
}
