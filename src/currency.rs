/// Format whole rupees the way `en-IN` does: `₹1,23,456`.
///
/// The last three digits form one group, everything above is grouped in
/// pairs. No decimals.
pub fn format_inr(amount: u64) -> String {
    format!("₹{}", group_indian(&amount.to_string()))
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
