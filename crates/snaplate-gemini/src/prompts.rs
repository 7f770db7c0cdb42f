use snaplate_types::NO_TEXT_SENTINEL;

/// The OCR instruction. The sentinel clause is load-bearing: the workflow
/// string-matches the reply against `NO_TEXT_SENTINEL` exactly.
pub fn ocr_instruction() -> String {
    format!(
        "Extract all visible text from this image exactly as it appears. \
         Do not add any conversational filler, just return the raw extracted text. \
         If no text is found, return '{NO_TEXT_SENTINEL}'."
    )
}

/// The translation prompt. The output is displayed verbatim, so the prompt
/// has to forbid explanations and notes.
pub fn translation_prompt(text: &str, target_language: &str) -> String {
    format!(
        "Translate the following text into {target_language}. \
         Ensure the translation is accurate and natural. \
         Do not add explanations or notes.\n\n\
         Text to translate:\n\"\"\"\n{text}\n\"\"\""
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ocr_instruction_spells_out_the_sentinel() {
        let instruction = ocr_instruction();
        assert!(instruction.contains("'NO_TEXT_FOUND'"));
        assert!(instruction.contains("exactly as it appears"));
    }

    #[test]
    fn translation_prompt_embeds_language_and_text() {
        let prompt = translation_prompt("Hello", "Spanish (Español)");
        assert!(prompt.contains("into Spanish (Español)."));
        assert!(prompt.contains("\"\"\"\nHello\n\"\"\""));
        assert!(prompt.contains("Do not add explanations or notes."));
    }
}
