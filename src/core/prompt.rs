use crate::domain::completion::ChatMessage;
use crate::domain::model::NordicLetters;

const TASK: &str = "You are a translation assistant. You are translating the accounting system \
Tripletex from Norwegian Bokmål to Norwegian Nynorsk while keeping the meaning identical. \
The input text may contain special Norwegian characters (æ, ø, å), HTML markup and entities, \
links and sometimes JavaScript. Preserve all of them exactly as they are: do not change any \
formatting, HTML syntax, HTML entities or escape sequences present in the original text.";

const ORTHOGRAPHY: &str = "Use contemporary conservative Nynorsk with a-endings \
(adressa instead of adressen, fila instead of filen). Verify that the result is spelled \
correctly in Nynorsk for use in an accounting system.";

const ESCAPED_LETTERS: &str = "Write æ, ø and å as the Unicode escape sequences \\u00e6, \\u00f8 \
and \\u00e5. Keep existing Unicode escape sequences and never replace them with HTML entities. \
Do not produce any other \\uXXXX escapes, they lead to malformed encoding errors.";

const LITERAL_LETTERS: &str = "Keep æ, ø and å as literal characters. Do not introduce Unicode \
escape sequences or HTML entities for them, but keep any escape sequences already present in \
the original text.";

const OUTPUT_RULES: &str = "Return only the translated text with no explanations. The result \
must be on a single line with no newlines and without ``` code fences. The text is stored in a \
Java .properties file, so it must be a valid property value.";

/// Builds the system/user message pair for one value.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    system: String,
}

impl PromptBuilder {
    pub fn new(letters: NordicLetters) -> Self {
        let letters_rule = match letters {
            NordicLetters::Escaped => ESCAPED_LETTERS,
            NordicLetters::Literal => LITERAL_LETTERS,
        };
        Self {
            system: [TASK, ORTHOGRAPHY, letters_rule, OUTPUT_RULES].join(" "),
        }
    }

    pub fn with_system_prompt(system: impl Into<String>) -> Self {
        Self {
            system: system.into(),
        }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system
    }

    pub fn messages(&self, text: &str) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(self.system.clone()),
            ChatMessage::user(format!("Bokmål: {}\nNynorsk:", text)),
        ]
    }
}
