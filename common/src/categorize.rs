//! Category split of aggregated groups
//!
//! Rules are tried in order and the first match wins. Nano comes first, so a
//! MENS or BOYS style ending in "N" never shows up under Men or Kids. Groups
//! matching no rule are left out of every report.

use crate::types::AggregatedGroup;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Men,
    Women,
    Kids,
    Nano,
    Work,
}

impl Category {
    /// Output sheet order
    pub const ALL: [Category; 5] = [
        Category::Men,
        Category::Women,
        Category::Kids,
        Category::Nano,
        Category::Work,
    ];

    pub fn sheet_name(&self) -> &'static str {
        match self {
            Category::Men => "Men",
            Category::Women => "Women",
            Category::Kids => "Kids",
            Category::Nano => "Nano",
            Category::Work => "Work",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.sheet_name())
    }
}

type Rule = fn(&AggregatedGroup) -> bool;

fn is_nano(group: &AggregatedGroup) -> bool {
    group.is_nano()
}

fn is_men(group: &AggregatedGroup) -> bool {
    group.gender == "MENS"
}

fn is_women(group: &AggregatedGroup) -> bool {
    group.gender == "WOMENS"
}

fn is_kids(group: &AggregatedGroup) -> bool {
    matches!(group.gender.as_str(), "BOYS" | "GIRLS") && !group.is_nano()
}

fn is_work(group: &AggregatedGroup) -> bool {
    group.gender == "INDUSTRIAL"
}

/// Classification rules in priority order
pub const CATEGORY_RULES: &[(Category, Rule)] = &[
    (Category::Nano, is_nano),
    (Category::Men, is_men),
    (Category::Women, is_women),
    (Category::Kids, is_kids),
    (Category::Work, is_work),
];

/// First matching category, if any
pub fn classify(group: &AggregatedGroup) -> Option<Category> {
    CATEGORY_RULES
        .iter()
        .find(|(_, rule)| rule(group))
        .map(|(category, _)| *category)
}

/// Row count and quantity of one category table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category: Category,
    pub rows: usize,
    pub total: f64,
}

/// The five category reports
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTables {
    pub men: Vec<AggregatedGroup>,
    pub women: Vec<AggregatedGroup>,
    pub kids: Vec<AggregatedGroup>,
    pub nano: Vec<AggregatedGroup>,
    pub work: Vec<AggregatedGroup>,
}

impl CategoryTables {
    /// Split groups into categories, keeping their order.
    pub fn partition(groups: Vec<AggregatedGroup>) -> Self {
        let mut tables = Self::default();
        for group in groups {
            if let Some(category) = classify(&group) {
                tables.table_mut(category).push(group);
            }
        }
        tables
    }

    pub fn table(&self, category: Category) -> &[AggregatedGroup] {
        match category {
            Category::Men => &self.men,
            Category::Women => &self.women,
            Category::Kids => &self.kids,
            Category::Nano => &self.nano,
            Category::Work => &self.work,
        }
    }

    fn table_mut(&mut self, category: Category) -> &mut Vec<AggregatedGroup> {
        match category {
            Category::Men => &mut self.men,
            Category::Women => &mut self.women,
            Category::Kids => &mut self.kids,
            Category::Nano => &mut self.nano,
            Category::Work => &mut self.work,
        }
    }

    /// Tables in output sheet order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[AggregatedGroup])> {
        Category::ALL.into_iter().map(move |c| (c, self.table(c)))
    }

    pub fn summary(&self, category: Category) -> CategorySummary {
        let table = self.table(category);
        CategorySummary {
            category,
            rows: table.len(),
            total: table.iter().fold(0.0, |acc, g| acc + g.total),
        }
    }

    pub fn summaries(&self) -> Vec<CategorySummary> {
        Category::ALL.into_iter().map(|c| self.summary(c)).collect()
    }

    /// Sum of Total over all five tables
    pub fn categorized_total(&self) -> f64 {
        self.summaries().iter().fold(0.0, |acc, s| acc + s.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(gender: &str, style: &str, total: f64) -> AggregatedGroup {
        AggregatedGroup {
            gender: gender.into(),
            style: style.into(),
            color: "BLACK".into(),
            total,
        }
    }

    #[test]
    fn test_classify_by_gender() {
        assert_eq!(classify(&group("MENS", "AIR", 1.0)), Some(Category::Men));
        assert_eq!(classify(&group("WOMENS", "AIR", 1.0)), Some(Category::Women));
        assert_eq!(classify(&group("BOYS", "AIR", 1.0)), Some(Category::Kids));
        assert_eq!(classify(&group("GIRLS", "AIR", 1.0)), Some(Category::Kids));
        assert_eq!(classify(&group("INDUSTRIAL", "AIR", 1.0)), Some(Category::Work));
    }

    #[test]
    fn test_nano_takes_precedence() {
        assert_eq!(classify(&group("MENS", "AIRN", 1.0)), Some(Category::Nano));
        assert_eq!(classify(&group("BOYS", "AIRN", 1.0)), Some(Category::Nano));
        assert_eq!(classify(&group("INDUSTRIAL", "BOOTN", 1.0)), Some(Category::Nano));
        // Unknown gender still lands in Nano
        assert_eq!(classify(&group("UNISEX", "AIRN", 1.0)), Some(Category::Nano));
    }

    #[test]
    fn test_womens_nano_style_goes_to_nano() {
        assert_eq!(classify(&group("WOMENS", "AIRN", 1.0)), Some(Category::Nano));

        let tables = CategoryTables::partition(vec![
            group("WOMENS", "AIRN", 3.0),
            group("WOMENS", "AIR", 2.0),
        ]);
        assert_eq!(tables.nano.len(), 1);
        assert_eq!(tables.nano[0].total, 3.0);
        assert_eq!(tables.women.len(), 1);
        assert_eq!(tables.women[0].style, "AIR");
    }

    #[test]
    fn test_unmatched_is_none() {
        assert_eq!(classify(&group("UNISEX", "AIR", 1.0)), None);
        assert_eq!(classify(&group("mens", "AIR", 1.0)), None);
    }

    #[test]
    fn test_kids_rule_excludes_nano_on_its_own() {
        assert!(!is_kids(&group("GIRLS", "AIRN", 1.0)));
        assert!(is_kids(&group("GIRLS", "AIR", 1.0)));
    }

    #[test]
    fn test_nano_rule_is_first() {
        assert_eq!(CATEGORY_RULES[0].0, Category::Nano);
    }

    #[test]
    fn test_partition_is_exclusive() {
        let tables = CategoryTables::partition(vec![
            group("MENS", "AIR", 2.0),
            group("MENS", "AIRN", 3.0),
            group("BOYS", "JUMPN", 4.0),
            group("BOYS", "JUMP", 5.0),
            group("UNISEX", "FLAT", 6.0),
        ]);

        assert_eq!(tables.men.len(), 1);
        assert_eq!(tables.men[0].style, "AIR");
        assert_eq!(tables.nano.len(), 2);
        assert_eq!(tables.kids.len(), 1);
        assert_eq!(tables.kids[0].style, "JUMP");
        assert!(tables.women.is_empty());
        assert!(tables.work.is_empty());
        assert_eq!(tables.categorized_total(), 14.0);
    }

    #[test]
    fn test_summaries_in_sheet_order() {
        let tables = CategoryTables::partition(vec![
            group("WOMENS", "A", 2.0),
            group("WOMENS", "B", 3.0),
            group("INDUSTRIAL", "C", 1.0),
        ]);
        let summaries = tables.summaries();
        let order: Vec<_> = summaries.iter().map(|s| s.category).collect();
        assert_eq!(order, Category::ALL.to_vec());

        let women = tables.summary(Category::Women);
        assert_eq!(women.rows, 2);
        assert_eq!(women.total, 5.0);
        assert_eq!(tables.summary(Category::Men).rows, 0);
        assert_eq!(tables.summary(Category::Men).total, 0.0);
    }

    #[test]
    fn test_sheet_names() {
        let names: Vec<_> = Category::ALL.iter().map(|c| c.sheet_name()).collect();
        assert_eq!(names, vec!["Men", "Women", "Kids", "Nano", "Work"]);
        assert_eq!(Category::Nano.to_string(), "Nano");
        assert_eq!(format!("{:<6}|", Category::Men), "Men   |");
    }
}
