use balance_engine::{find_last_dip, longest_balanced_span};

pub fn describe_dip(values: &[i32]) -> String {
    match find_last_dip(values) {
        Some(index) => format!("dip at index {index}\n"),
        None => "no dip\n".to_string(),
    }
}

pub fn describe_span(values: &[i32]) -> String {
    match longest_balanced_span(values) {
        Some(span) => format!(
            "balanced span [{}, {}) = {:?}\n",
            span.begin(),
            span.end(),
            span.as_slice()
        ),
        None => "no balanced span\n".to_string(),
    }
}
