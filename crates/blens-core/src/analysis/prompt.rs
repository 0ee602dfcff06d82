//! Instructional prompt for the analysis request.

/// Build the fixed analysis prompt with the description embedded verbatim.
///
/// The template is the single parameterization point of the whole request:
/// it names the rating buckets, the value criteria, the NIV translation,
/// and the exact four-field JSON shape the model must answer with.
pub fn build_prompt(description: &str) -> String {
    format!(
        r#"You are a Biblical scholar analyzing video content. Analyze the following video description and provide:

1. A rating: "green" (aligns with Biblical values), "yellow" (neutral/needs discernment), or "red" (conflicts with Biblical principles)
2. A one-sentence explanation of why it received this rating
3. A relevant Bible verse from the NIV translation with its reference

Consider Biblical principles like: love, honesty, purity, kindness, generosity, humility vs. greed, violence, deception, immorality, pride.

Video Description:
"{description}"

Respond in this exact JSON format:
{{
  "rating": "green|yellow|red",
  "explanation": "One sentence explanation here",
  "verseReference": "Book Chapter:Verse",
  "verseText": "The actual verse text from NIV"
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_description() {
        let prompt = build_prompt("A documentary about forgiving a debt.");
        assert!(prompt.contains("\"A documentary about forgiving a debt.\""));
    }

    #[test]
    fn test_prompt_names_the_answer_fields() {
        let prompt = build_prompt("anything");
        for field in ["rating", "explanation", "verseReference", "verseText"] {
            assert!(prompt.contains(field), "missing field {field}");
        }
        assert!(prompt.contains("green|yellow|red"));
        assert!(prompt.contains("NIV"));
    }
}
