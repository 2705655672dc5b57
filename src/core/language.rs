//! Languages supported by the translation and dictionary services

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::errors::YandexError;

macro_rules! languages {
    ($($variant:ident => $code:literal),+ $(,)?) => {
        /// Language code accepted by both endpoints
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum Language {
            $(
                #[allow(missing_docs)]
                $variant,
            )+
        }

        impl Language {
            /// Every supported language
            pub const ALL: &'static [Language] = &[$(Language::$variant),+];

            /// Short code used in the `lang` query pair
            pub fn code(self) -> &'static str {
                match self {
                    $(Language::$variant => $code,)+
                }
            }
        }
    };
}

languages! {
    Sq => "sq", En => "en", Ar => "ar", Hy => "hy", Az => "az", Af => "af",
    Eu => "eu", Be => "be", Bg => "bg", Bs => "bs", Cy => "cy", Vi => "vi",
    Hu => "hu", Ht => "ht", Gl => "gl", Nl => "nl", El => "el", Ka => "ka",
    Da => "da", He => "he", Id => "id", Ga => "ga", It => "it", Es => "es",
    Kk => "kk", Ca => "ca", Ky => "ky", Zh => "zh", Ko => "ko", La => "la",
    Lv => "lv", Lt => "lt", Mg => "mg", Ms => "ms", Mt => "mt", Mk => "mk",
    Mn => "mn", De => "de", No => "no", Fa => "fa", Pl => "pl", Pt => "pt",
    Ro => "ro", Ru => "ru", Sr => "sr", Sk => "sk", Sl => "sl", Sw => "sw",
    Tg => "tg", Th => "th", Tl => "tl", Tt => "tt", Tr => "tr", Uz => "uz",
    Uk => "uk", Fi => "fi", Fr => "fr", Hr => "hr", Cs => "cs", Sv => "sv",
    Et => "et", Ja => "ja",
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = YandexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Language::ALL
            .iter()
            .copied()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| YandexError::ConfigError {
                message: format!("Unsupported language code: {}", s),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::ALL.len(), 62);
        assert_eq!(Language::En.code(), "en");
        assert_eq!(Language::Ja.to_string(), "ja");
    }

    #[test]
    fn test_parse_language() {
        assert_eq!("ru".parse::<Language>().unwrap(), Language::Ru);
        assert_eq!(" DE ".parse::<Language>().unwrap(), Language::De);
        assert!("xx".parse::<Language>().is_err());
        assert!("".parse::<Language>().is_err());
    }

    #[test]
    fn test_every_code_parses_back() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>().unwrap(), *lang);
        }
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&Language::Zh).unwrap();
        assert_eq!(json, "\"zh\"");
        let lang: Language = serde_json::from_str("\"uk\"").unwrap();
        assert_eq!(lang, Language::Uk);
    }
}
