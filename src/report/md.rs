use crate::types::report::{QuestionList, ResultReport, StatsReport, SurveySummary};
use crate::types::survey::Category;

fn push_summary(output: &mut String, summary: &SurveySummary) {
    output.push_str(&format!("Total responses: {}\n", summary.total_responses));
    if let Some(updated) = summary.last_updated {
        output.push_str(&format!("Last updated: {}\n", updated.to_rfc3339()));
    }
    output.push('\n');
    output.push_str("## Category Scores\n\n");
    for category in Category::ALL {
        let tally = summary.category_scores.get(category);
        output.push_str(&format!(
            "- {}: yes {} ({:.1}%), no {} ({:.1}%), total {}\n",
            category,
            tally.yes,
            tally.yes_percentage(),
            tally.no,
            tally.no_percentage(),
            tally.total
        ));
    }
    output.push('\n');
}

pub fn stats_markdown(report: &StatsReport) -> String {
    let mut output = String::new();
    output.push_str("# Survey Statistics\n\n");
    push_summary(&mut output, &report.summary);

    output.push_str("## Questions\n\n");
    if report.questions.is_empty() {
        output.push_str("- none\n");
    }
    for question in &report.questions {
        output.push_str(&format!(
            "- [{}{}] {}. {}: yes {} ({:.1}%), no {} ({:.1}%)\n",
            question.category,
            if question.reverse_scored { ", reversed" } else { "" },
            question.id,
            question.text,
            question.yes,
            question.yes_percentage,
            question.no,
            question.no_percentage
        ));
    }
    output
}

pub fn result_markdown(report: &ResultReport) -> String {
    let dominant = &report.dominant_category;
    let mut output = String::new();
    output.push_str(&format!("# Your Result (submission {})\n\n", report.submission_id));
    output.push_str(&format!("## {}\n\n", report.message.title));
    output.push_str(&format!("Style: {}\n\n", report.message.style));
    output.push_str(&format!("{}\n\n", report.message.message));
    output.push_str(&format!(
        "Scores: A {} / B {} / C {} (max {})\n\n",
        dominant.scores.a, dominant.scores.b, dominant.scores.c, dominant.max_score
    ));

    let total = dominant.scores.total();
    if total > 0 {
        output.push_str("## Breakdown\n\n");
        for category in Category::ALL {
            let score = dominant.scores.get(category);
            output.push_str(&format!(
                "- {}: {} ({:.1}%)\n",
                category,
                score,
                f64::from(score) / f64::from(total) * 100.0
            ));
        }
        output.push('\n');
    }

    output.push_str("## Categories\n\n");
    for (category, description) in &report.category_descriptions {
        let marker = if dominant.dominant.contains(category) { " *" } else { "" };
        output.push_str(&format!("- {category}{marker}: {description}\n"));
    }
    output.push('\n');

    output.push_str("# Overall\n\n");
    push_summary(&mut output, &report.summary);
    output
}

pub fn questions_markdown(list: &QuestionList) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {}\n\n", list.survey));
    for question in &list.questions {
        output.push_str(&format!(
            "{}. [{}{}] {}\n",
            question.id,
            question.category,
            if question.reverse_scored { ", reversed" } else { "" },
            question.text
        ));
    }
    output
}
