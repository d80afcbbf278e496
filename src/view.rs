use crate::analysis::{DrugResult, NewsCategory};

#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub title: &'static str,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBlock {
    pub category: NewsCategory,
    pub content: String,
}

impl CategoryBlock {
    pub fn title(&self) -> String {
        format!("{} {}", self.category.label(), self.category.icon())
    }
}

/// Everything one result panel displays.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub title: String,
    pub sections: Vec<TextBlock>,
    pub categories: Vec<CategoryBlock>,
}

impl From<&DrugResult> for PanelView {
    fn from(r: &DrugResult) -> Self {
        Self {
            title: r.molecule.clone(),
            sections: vec![
                TextBlock {
                    title: "Latest Summary",
                    content: r.latest_summary.clone(),
                },
                TextBlock {
                    title: "Mechanism of Action",
                    content: r.moa.clone(),
                },
            ],
            categories: NewsCategory::ALL
                .iter()
                .map(|c| CategoryBlock {
                    category: *c,
                    content: r.news(*c).to_string(),
                })
                .collect(),
        }
    }
}

/// One panel per result, in response order.
pub fn panels(results: &[DrugResult]) -> Vec<PanelView> {
    results.iter().map(PanelView::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(molecule: &str) -> DrugResult {
        DrugResult {
            molecule: molecule.into(),
            latest_summary: format!("{molecule} summary\n- point"),
            moa: format!("{molecule} moa"),
            regulatory_news: "FDA approval".into(),
            clinical_news: "Phase 3 readout".into(),
            commercial_news: "Q2 sales".into(),
        }
    }

    #[test]
    fn one_panel_per_result_in_order() {
        let results = vec![result("Ozempic"), result("Jardiance"), result("Ozempic")];
        let titles: Vec<String> = panels(&results).into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["Ozempic", "Jardiance", "Ozempic"]);
    }

    #[test]
    fn empty_results_render_nothing() {
        assert!(panels(&[]).is_empty());
    }

    #[test]
    fn panel_layout() {
        let p = PanelView::from(&result("Keytruda"));
        let sections: Vec<(&str, &str)> = p
            .sections
            .iter()
            .map(|s| (s.title, s.content.as_str()))
            .collect();
        assert_eq!(
            sections,
            vec![
                ("Latest Summary", "Keytruda summary\n- point"),
                ("Mechanism of Action", "Keytruda moa"),
            ]
        );
        let cats: Vec<(String, &str)> = p
            .categories
            .iter()
            .map(|c| (c.title(), c.content.as_str()))
            .collect();
        assert_eq!(
            cats,
            vec![
                ("Regulatory News 📜".to_string(), "FDA approval"),
                ("Clinical News 🏥".to_string(), "Phase 3 readout"),
                ("Commercial News 💼".to_string(), "Q2 sales"),
            ]
        );
    }
}
