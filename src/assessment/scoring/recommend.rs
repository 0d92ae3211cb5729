use std::collections::BTreeMap;

use crate::assessment::domain::{Category, CategoryAnalysis};

/// General wellness advice included in every response, in fixed order.
const BASE_RECOMMENDATIONS: [&str; 4] = [
    "Exercise regularly, at least 30 minutes three days a week",
    "Keep a consistent sleep schedule of 7-9 hours per night",
    "Eat a balanced diet and stay hydrated",
    "Practice meditation or deep-breathing exercises",
];

const LOW_BAND_RECOMMENDATIONS: [&str; 4] = [
    "Consider speaking with a mental health professional",
    "Learn stress management techniques",
    "Spend time with people close to you",
    "Set aside time for hobbies and personal interests",
];

const MID_BAND_RECOMMENDATIONS: [&str; 4] = [
    "Increase your participation in social activities",
    "Start a daily journaling habit",
    "Spend time outdoors in nature",
    "Pick up a new skill or hobby",
];

const HIGH_BAND_RECOMMENDATIONS: [&str; 3] = [
    "Keep up the positive habits that are working for you",
    "Strengthen social bonds by helping others",
    "Read books on personal development",
];

/// Category percentage below which the category-specific advice kicks in.
const DEFICIENCY_THRESHOLD: f64 = 50.0;

/// Build the ordered, deduplicated recommendation list: base advice, then the
/// score band set, then one entry per deficient category that has a lookup
/// entry. Categories without an entry contribute nothing.
pub fn recommendations(
    score_percentage: f64,
    categories: &BTreeMap<Category, CategoryAnalysis>,
) -> Vec<String> {
    let mut list: Vec<String> = Vec::new();

    for text in BASE_RECOMMENDATIONS {
        push_unique(&mut list, text);
    }

    let band: &[&str] = if score_percentage < 40.0 {
        &LOW_BAND_RECOMMENDATIONS
    } else if score_percentage < 60.0 {
        &MID_BAND_RECOMMENDATIONS
    } else {
        &HIGH_BAND_RECOMMENDATIONS
    };
    for text in band {
        push_unique(&mut list, text);
    }

    for (category, analysis) in categories {
        if analysis.percentage < DEFICIENCY_THRESHOLD {
            if let Some(text) = category_recommendation(category) {
                push_unique(&mut list, text);
            }
        }
    }

    list
}

fn category_recommendation(category: &Category) -> Option<&'static str> {
    match category {
        Category::Sleep => Some("Apply good sleep hygiene practices"),
        Category::Anxiety => Some("Learn relaxation techniques such as progressive muscle relaxation"),
        Category::Social => Some("Increase your participation in social activities"),
        Category::Stress => Some("Seek support for stress management"),
        _ => None,
    }
}

pub(crate) fn push_unique(list: &mut Vec<String>, text: &str) {
    if !list.iter().any(|existing| existing == text) {
        list.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::Interpretation;

    fn bucket(percentage: f64) -> CategoryAnalysis {
        CategoryAnalysis {
            total_score: 2,
            question_count: 1,
            average_score: percentage / 20.0,
            percentage,
            interpretation: Interpretation::Low,
            answers: Vec::new(),
        }
    }

    #[test]
    fn base_items_are_always_the_prefix() {
        for percentage in [0.0, 35.0, 55.0, 75.0, 100.0] {
            let list = recommendations(percentage, &BTreeMap::new());
            assert!(list.len() >= 4, "at least base advice at {percentage}");
            for (index, text) in BASE_RECOMMENDATIONS.iter().enumerate() {
                assert_eq!(list[index], *text, "base prefix stable at {percentage}");
            }
        }
    }

    #[test]
    fn band_sets_follow_the_overall_score() {
        let low = recommendations(30.0, &BTreeMap::new());
        assert!(low.contains(&LOW_BAND_RECOMMENDATIONS[0].to_string()));
        assert_eq!(low.len(), 8);

        let mid = recommendations(50.0, &BTreeMap::new());
        assert!(mid.contains(&MID_BAND_RECOMMENDATIONS[1].to_string()));
        assert_eq!(mid.len(), 8);

        let high = recommendations(85.0, &BTreeMap::new());
        assert!(high.contains(&HIGH_BAND_RECOMMENDATIONS[0].to_string()));
        assert_eq!(high.len(), 7);
    }

    #[test]
    fn deficient_categories_append_their_advice() {
        let mut categories = BTreeMap::new();
        categories.insert(Category::Sleep, bucket(40.0));
        categories.insert(Category::Anxiety, bucket(45.0));
        categories.insert(Category::Mood, bucket(30.0));

        let list = recommendations(85.0, &categories);
        assert!(list.contains(&"Apply good sleep hygiene practices".to_string()));
        assert!(list
            .iter()
            .any(|text| text.contains("relaxation techniques")));
        // Mood has no category entry, so only the two advice lines are added.
        assert_eq!(list.len(), 9);
    }

    #[test]
    fn healthy_categories_contribute_nothing() {
        let mut categories = BTreeMap::new();
        categories.insert(Category::Sleep, bucket(50.0));
        categories.insert(Category::Stress, bucket(90.0));

        let list = recommendations(85.0, &categories);
        assert_eq!(list.len(), 7);
    }

    #[test]
    fn duplicate_advice_is_collapsed_keeping_first_position() {
        // The mid band already suggests more social activity; a deficient
        // Social bucket must not repeat it.
        let mut categories = BTreeMap::new();
        categories.insert(Category::Social, bucket(20.0));

        let list = recommendations(50.0, &categories);
        let socials = list
            .iter()
            .filter(|text| text.as_str() == "Increase your participation in social activities")
            .count();
        assert_eq!(socials, 1);
        assert_eq!(list[4], "Increase your participation in social activities");
    }
}
