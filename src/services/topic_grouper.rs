//! Keyword clustering of search results into story groups.

use crate::models::domain::{section::keyword_groups_for, GroupedResult, RawResult, ResultGroup};

/// Most groups handed on for synthesis.
pub const MAX_GROUPS: usize = 6;

/// Partitions `results` by the section's keyword table. A result joins the
/// first keyword group it matches; unmatched results become singletons in
/// their original order.
pub fn group_results<'a>(results: &'a [RawResult], section: &str) -> Vec<ResultGroup<'a>> {
    let mut groups = partition(results, keyword_groups_for(section));
    groups.truncate(MAX_GROUPS);
    groups
}

/// Full partition before truncation.
pub fn partition<'a>(results: &'a [RawResult], keyword_groups: &[&[&str]]) -> Vec<ResultGroup<'a>> {
    let haystacks: Vec<(String, String)> = results
        .iter()
        .map(|r| {
            (
                r.title.to_lowercase(),
                r.content.as_deref().unwrap_or_default().to_lowercase(),
            )
        })
        .collect();
    let mut used = vec![false; results.len()];
    let mut groups = Vec::new();

    for keywords in keyword_groups {
        let mut members = Vec::new();
        for (index, result) in results.iter().enumerate() {
            if used[index] {
                continue;
            }
            let (title, content) = &haystacks[index];
            let matches = keywords.iter().any(|keyword| {
                let keyword = keyword.to_lowercase();
                title.contains(&keyword) || content.contains(&keyword)
            });
            if matches {
                used[index] = true;
                members.push(GroupedResult { index, result });
            }
        }
        if let Some(group) = ResultGroup::themed(members) {
            groups.push(group);
        }
    }

    groups.extend(
        results
            .iter()
            .enumerate()
            .filter(|(index, _)| !used[*index])
            .map(|(index, result)| ResultGroup::single(index, result)),
    );

    groups
}
