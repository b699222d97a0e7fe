use serde::{Deserialize, Serialize};

use crate::errors::CategorizeResult;

/// One category and its match keywords. Keyword order is match priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub category_id: String,
    pub category_name: String,
    pub keywords: Vec<String>,
}

/// One company and its categories, in declared priority order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRule {
    pub company_id: String,
    pub company_name: String,
    pub categories: Vec<CategoryRule>,
}

/// The full hierarchical keyword configuration. Declared order at every
/// level (companies, categories, keywords) is semantically significant and
/// survives deserialization bit-for-bit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    pub companies: Vec<CompanyRule>,
}

impl RuleSet {
    /// Decodes a rule document; any shape mismatch (missing required field,
    /// wrong type) is a rule-set format error.
    pub fn from_json(content: &str) -> CategorizeResult<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CategorizeError;
    use rstest::rstest;

    const SAMPLE_RULES: &str = r#"{
        "companies": [
            {
                "company_id": "C1",
                "company_name": "Acme Coffee",
                "categories": [
                    {
                        "category_id": "CAT1",
                        "category_name": "Beverages",
                        "keywords": ["Coffee", "Tea"]
                    },
                    {
                        "category_id": "CAT2",
                        "category_name": "Pastry",
                        "keywords": ["Croissant"]
                    }
                ]
            },
            {
                "company_id": "C2",
                "company_name": "Metro Transit",
                "categories": [
                    {
                        "category_id": "CAT3",
                        "category_name": "Transport",
                        "keywords": ["Metro", "Bus"]
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_from_json_preserves_declared_order() {
        let rule_set = RuleSet::from_json(SAMPLE_RULES).unwrap();

        assert_eq!(rule_set.companies.len(), 2);
        assert_eq!(rule_set.companies[0].company_id, "C1");
        assert_eq!(rule_set.companies[1].company_id, "C2");

        let acme = &rule_set.companies[0];
        assert_eq!(acme.company_name, "Acme Coffee");
        assert_eq!(acme.categories[0].category_id, "CAT1");
        assert_eq!(acme.categories[1].category_id, "CAT2");
        assert_eq!(acme.categories[0].keywords, vec!["Coffee", "Tea"]);
    }

    #[rstest]
    #[case(r#"{"companies": [{"company_name": "X", "categories": []}]}"#)] // company_id ausente
    #[case(r#"{"companies": [{"company_id": "C1", "company_name": "X", "categories": [{"category_id": "A", "category_name": "B"}]}]}"#)] // keywords ausente
    #[case(r#"{"companies": "not-a-list"}"#)]
    #[case(r#"{}"#)]
    #[case("not json at all")]
    fn test_from_json_rejects_malformed_documents(#[case] content: &str) {
        let result = RuleSet::from_json(content);
        assert!(matches!(result, Err(CategorizeError::RuleSetFormat(_))));
    }

    #[test]
    fn test_empty_lists_are_legal() {
        let rule_set = RuleSet::from_json(r#"{"companies": []}"#).unwrap();
        assert!(rule_set.companies.is_empty());

        let rule_set = RuleSet::from_json(
            r#"{"companies": [{"company_id": "C1", "company_name": "X", "categories": [
                {"category_id": "A", "category_name": "B", "keywords": []}
            ]}]}"#,
        )
        .unwrap();
        assert!(rule_set.companies[0].categories[0].keywords.is_empty());
    }
}
