use std::collections::BTreeMap;

use crate::assessment::domain::{Answer, Category, CategoryAnalysis, Interpretation};

/// Group answers by category and derive per-category aggregates.
///
/// Pure function of the answer sequence; buckets exist only for categories
/// with at least one member, so the averages can never divide by zero.
pub fn aggregate(answers: &[Answer], scale_max: u8) -> BTreeMap<Category, CategoryAnalysis> {
    let mut buckets: BTreeMap<Category, (u32, Vec<Answer>)> = BTreeMap::new();

    for answer in answers {
        let entry = buckets
            .entry(answer.category.clone())
            .or_insert_with(|| (0, Vec::new()));
        entry.0 += answer.value as u32;
        entry.1.push(answer.clone());
    }

    buckets
        .into_iter()
        .map(|(category, (total_score, members))| {
            let question_count = members.len() as u32;
            let average_score = total_score as f64 / question_count as f64;
            let percentage = average_score / scale_max as f64 * 100.0;
            (
                category,
                CategoryAnalysis {
                    total_score,
                    question_count,
                    average_score,
                    percentage,
                    interpretation: interpret(percentage),
                    answers: members,
                },
            )
        })
        .collect()
}

fn interpret(percentage: f64) -> Interpretation {
    if percentage >= 80.0 {
        Interpretation::Excellent
    } else if percentage >= 60.0 {
        Interpretation::Good
    } else if percentage >= 40.0 {
        Interpretation::Moderate
    } else if percentage >= 20.0 {
        Interpretation::Low
    } else {
        Interpretation::VeryLow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(question_id: u32, category: Category, value: u8) -> Answer {
        Answer {
            question_id,
            category,
            question_text: format!("Question {question_id}"),
            answer_label: "Sample".to_string(),
            value,
        }
    }

    #[test]
    fn buckets_accumulate_totals_counts_and_members() {
        let answers = vec![
            answer(1, Category::Mood, 4),
            answer(2, Category::Mood, 4),
            answer(3, Category::Sleep, 2),
        ];

        let buckets = aggregate(&answers, 5);
        assert_eq!(buckets.len(), 2);

        let mood = buckets.get(&Category::Mood).expect("mood bucket present");
        assert_eq!(mood.total_score, 8);
        assert_eq!(mood.question_count, 2);
        assert_eq!(mood.average_score, 4.0);
        assert_eq!(mood.percentage, 80.0);
        assert_eq!(mood.interpretation, Interpretation::Excellent);
        assert_eq!(mood.answers.len(), 2);

        let sleep = buckets.get(&Category::Sleep).expect("sleep bucket present");
        assert_eq!(sleep.percentage, 40.0);
        assert_eq!(sleep.interpretation, Interpretation::Moderate);
    }

    #[test]
    fn interpretation_boundaries_belong_to_the_upper_band() {
        assert_eq!(interpret(80.0), Interpretation::Excellent);
        assert_eq!(interpret(60.0), Interpretation::Good);
        assert_eq!(interpret(40.0), Interpretation::Moderate);
        assert_eq!(interpret(20.0), Interpretation::Low);
        assert_eq!(interpret(19.9), Interpretation::VeryLow);
    }

    #[test]
    fn percentage_follows_the_category_average() {
        let answers = vec![
            answer(1, Category::Energy, 1),
            answer(2, Category::Energy, 2),
            answer(3, Category::Energy, 3),
        ];

        let buckets = aggregate(&answers, 5);
        let energy = buckets.get(&Category::Energy).expect("energy bucket present");
        assert_eq!(energy.average_score, 2.0);
        assert_eq!(energy.percentage, energy.total_score as f64 / 3.0 / 5.0 * 100.0);
    }
}
