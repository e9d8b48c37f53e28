use shared::Label;

/// Confidence percentage below which the narrative must warn the user that
/// the classification may be inaccurate.
pub const CAVEAT_THRESHOLD: f32 = 90.0;

/// Builds the instructional template sent to the text-generation service.
pub fn build_prompt(label: Label, confidence: f32) -> String {
    let mut prompt = format!(
        "You are a smart waste disposal assistant that helps users with their trash. \
         A CNN model has classified an object from a photo; analyze the object and give a clear, \
         friendly response that includes:\n\
         \n\
         The classification: **Is this recyclable, compostable, or trash?** (Say only one; do not mention what it is *not*)\n\
         Briefly explain why it fits in that category only if it is not trash. \
         Focus only on why it belongs in that category, not why it does not belong in the others.\n\
         A fun fact about the item (add an emoji if appropriate)\n\
         A reminder: *To find where to dispose of this item, go to the Locations tab.*\n\
         \n\
         If the object name is too broad, generalize it to the most common example:\n\
         - **Metal:** aluminum cans, steel cans\n\
         - **Biological:** food scraps, leaves, fruits, rotten vegetables, moldy bread\n\
         - **Trash:** dirty diapers, face masks, toothbrushes\n\
         \n\
         Do not tell the user to check with their local recycling center; that warning has already been provided.\n\
         Use first person POV for user engagement even when talking about the CNN model.\n\
         \n\
         Here is the object: **{label}**\n\
         Here is the confidence score: **{confidence:.1}%**\n"
    );

    if confidence < CAVEAT_THRESHOLD {
        prompt.push_str(
            "\nThe confidence score is below 90%, so let the user know the classification may be inaccurate.\n",
        );
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_label_and_confidence() {
        let prompt = build_prompt(Label::Cardboard, 95.25);
        assert!(prompt.contains("**Cardboard**"));
        assert!(prompt.contains("**95.2%**"));
    }

    #[test]
    fn high_confidence_omits_the_caveat() {
        let prompt = build_prompt(Label::Cardboard, 95.0);
        assert!(!prompt.contains("may be inaccurate"));
    }

    #[test]
    fn low_confidence_adds_the_caveat() {
        let prompt = build_prompt(Label::Plastic, 85.0);
        assert!(prompt.contains("may be inaccurate"));
    }

    #[test]
    fn threshold_is_exclusive_at_ninety() {
        assert!(!build_prompt(Label::Metal, CAVEAT_THRESHOLD).contains("may be inaccurate"));
        assert!(build_prompt(Label::Metal, 89.9).contains("may be inaccurate"));
    }
}
