/// Deterministic banded summaries used whenever no narrative generator is
/// available or the one configured fails. Same five bands as the risk engine.
pub fn fallback_narrative(score_percentage: f64) -> &'static str {
    if score_percentage >= 80.0 {
        "Your results indicate that your mental wellbeing is in very good shape \
         overall. You appear to hold a positive outlook and to cope effectively \
         with everyday challenges. Keep up the healthy routines that serve you \
         well, and continue making time for yourself."
    } else if score_percentage >= 60.0 {
        "Your results paint a generally positive picture. Your wellbeing is at a \
         reasonable level, though a few areas could benefit from attention. \
         Strengthening healthy habits such as regular exercise, quality sleep and \
         social activity can help you feel even better."
    } else if score_percentage >= 40.0 {
        "Your results point to some areas of your wellbeing that deserve \
         attention. This is common and very manageable. Being patient with \
         yourself, learning stress management techniques and spending time with \
         people you trust will help. Do not hesitate to seek professional support \
         if you need it."
    } else if score_percentage >= 20.0 {
        "Your results suggest that your wellbeing is under noticeable strain at \
         the moment. These difficulties are often temporary, and support is \
         available. We recommend speaking with a mental health professional and \
         leaning on the people around you while things improve."
    } else {
        "Your results indicate significant distress, and your wellbeing deserves \
         careful attention right now. These feelings can stem from passing \
         hardship, and they can improve. Please consider reaching out to a mental \
         health professional soon. Asking for help takes courage, and recovery is \
         possible."
    }
}

/// Classifier-path fallback shown when a diagnosis exists but the narrative
/// generator does not.
pub fn diagnosis_fallback(diagnosis: &str) -> String {
    format!("Model assessment: {diagnosis}. The detailed analysis is currently unavailable.")
}
