//! CLI command definitions and handlers

use clap::Subcommand;
use tracing::info;

use yandex_translate::{ClientConfig, DictionaryClient, Language, TranslateClient};

/// Commands for the Yandex client
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate text
    Translate {
        /// Source language code
        #[arg(short, long)]
        from: Language,

        /// Target language code
        #[arg(short, long)]
        to: Language,

        /// Text to translate
        text: String,
    },

    /// Look up a word in the dictionary
    Lookup {
        /// Source language code
        #[arg(short, long)]
        from: Language,

        /// Target language code
        #[arg(short, long)]
        to: Language,

        /// Word or phrase to look up
        text: String,
    },

    /// List supported language codes
    Languages,
}

/// Handle text translation command
pub async fn handle_translate(
    config: ClientConfig,
    from: Language,
    to: Language,
    text: String,
) -> anyhow::Result<()> {
    info!("Translating {}-{}", from, to);
    let client = TranslateClient::from_config(config)?;
    let translation = client.translate_async(from, to, &text).await?;
    println!("{}", translation);
    Ok(())
}

/// Handle dictionary lookup command
pub async fn handle_lookup(
    config: ClientConfig,
    from: Language,
    to: Language,
    text: String,
) -> anyhow::Result<()> {
    info!("Looking up {}-{}", from, to);
    let client = DictionaryClient::from_config(config)?;
    let response = client.translate_async(from, to, &text).await?;

    if response.is_empty() {
        println!("No entries for \"{}\"", text);
        return Ok(());
    }

    for translation in response.translations() {
        let word = translation.value();
        println!("{}", describe(word));

        let synonyms: Vec<String> = translation.synonyms().iter().map(describe).collect();
        if !synonyms.is_empty() {
            println!("    {}", synonyms.join(", "));
        }
    }

    Ok(())
}

/// Handle language listing command
pub fn handle_languages() {
    let codes: Vec<&str> = Language::ALL.iter().map(|lang| lang.code()).collect();
    println!("{}", codes.join(" "));
}

/// Render a word with its metadata, e.g. `casa (noun, f)`
fn describe(word: &yandex_translate::Word) -> String {
    let tags: Vec<&str> = [word.part_of_speech.as_str(), word.gender.as_str()]
        .into_iter()
        .filter(|tag| !tag.is_empty())
        .collect();

    if tags.is_empty() {
        word.text.clone()
    } else {
        format!("{} ({})", word.text, tags.join(", "))
    }
}
