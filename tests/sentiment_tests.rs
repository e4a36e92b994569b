use yt_assist::sentiment::{SentimentOutcome, SentimentTally, analyze, format_outcome};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn test_basic_tally() {
    let outcome = analyze(&strings(&["great!", "terrible", "meh"]));
    assert_eq!(
        outcome,
        SentimentOutcome::Tally(SentimentTally {
            positive: 1,
            negative: 1,
            neutral: 1,
            total: 3,
        })
    );
}

#[test]
fn test_empty_input_is_no_data_not_zero_tally() {
    assert_eq!(analyze(&[]), SentimentOutcome::NoData);
}

#[test]
fn test_positive_check_short_circuits_on_mixed_comment() {
    let outcome = analyze(&strings(&["good but terrible"]));
    assert_eq!(
        outcome,
        SentimentOutcome::Tally(SentimentTally {
            positive: 1,
            negative: 0,
            neutral: 0,
            total: 1,
        })
    );
}

#[test]
fn test_matching_is_case_insensitive() {
    let outcome = analyze(&strings(&["GREAT video", "AwFuL"]));
    assert_eq!(
        outcome,
        SentimentOutcome::Tally(SentimentTally {
            positive: 1,
            negative: 1,
            neutral: 0,
            total: 2,
        })
    );
}

#[test]
fn test_no_negation_handling_by_design() {
    // "not good" still matches the positive keyword; the heuristic does
    // substring matching only.
    let outcome = analyze(&strings(&["not good"]));
    assert_eq!(
        outcome,
        SentimentOutcome::Tally(SentimentTally {
            positive: 1,
            negative: 0,
            neutral: 0,
            total: 1,
        })
    );
}

#[test]
fn test_format_outcome() {
    assert_eq!(
        format_outcome(&SentimentOutcome::NoData),
        "No comments available for sentiment analysis."
    );

    let rendered = format_outcome(&SentimentOutcome::Tally(SentimentTally {
        positive: 2,
        negative: 1,
        neutral: 3,
        total: 6,
    }));
    assert!(rendered.contains("Positive: 2"));
    assert!(rendered.contains("Negative: 1"));
    assert!(rendered.contains("Neutral: 3"));
    assert!(rendered.contains("(Analyzed 6 comments)"));
}
