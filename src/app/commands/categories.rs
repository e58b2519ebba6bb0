use crate::domain::SkillCategory;

/// Summary of a skill category for listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub slug: &'static str,
    pub label: &'static str,
    pub definition: &'static str,
}

/// List every supported skill category.
pub fn list() -> Vec<CategorySummary> {
    SkillCategory::ALL
        .into_iter()
        .map(|category| CategorySummary {
            slug: category.slug(),
            label: category.label(),
            definition: category.definition(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_all_categories_in_menu_order() {
        let summaries = list();
        assert_eq!(summaries.len(), 7);
        assert_eq!(summaries[0].label, "Long vowel sound");
        assert_eq!(summaries[6].slug, "consonant-le");
    }
}
