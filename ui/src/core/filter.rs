//! Project categories and the gallery filter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::content::Project;
use super::error::SiteError;

/// Category tag used to partition the project gallery. `All` is the wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    All,
    Web,
    Dashboard,
    Integration,
}

impl Category {
    /// Filter chip order.
    pub const ALL: [Category; 4] = [
        Category::All,
        Category::Web,
        Category::Dashboard,
        Category::Integration,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Web => "web",
            Category::Dashboard => "dashboard",
            Category::Integration => "integration",
        }
    }

    pub fn is_wildcard(self) -> bool {
        self == Category::All
    }

    /// Whether a project tagged `project` shows up under this filter.
    pub fn admits(self, project: Category) -> bool {
        self.is_wildcard() || self == project
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Category {
    type Err = SiteError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.tag().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| SiteError::UnknownCategory(raw.to_string()))
    }
}

/// Projects visible under `active`, in their original order.
///
/// The wildcard returns every project; a category without projects returns an
/// empty list.
pub fn filter_projects(projects: &[Project], active: Category) -> Vec<&Project> {
    projects
        .iter()
        .filter(|project| active.admits(project.category))
        .collect()
}

/// Number of projects a filter chip would show.
pub fn count_for(projects: &[Project], active: Category) -> usize {
    projects
        .iter()
        .filter(|project| active.admits(project.category))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::{Swatch, PROJECTS};
    use crate::core::lang::Localized;

    fn ids(projects: &[&Project]) -> Vec<&'static str> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn wildcard_returns_everything_in_order() {
        let all = filter_projects(&PROJECTS, Category::All);
        assert_eq!(ids(&all), vec!["01", "02", "03", "04", "05", "06"]);
    }

    #[test]
    fn dashboard_returns_03_and_05() {
        let dashboards = filter_projects(&PROJECTS, Category::Dashboard);
        assert_eq!(ids(&dashboards), vec!["03", "05"]);
    }

    #[test]
    fn each_category_only_returns_its_own_projects() {
        for category in Category::ALL.into_iter().filter(|c| !c.is_wildcard()) {
            let visible = filter_projects(&PROJECTS, category);
            assert_eq!(visible.len(), 2, "{category}");
            assert!(visible.iter().all(|p| p.category == category));
            assert!(visible.len() <= PROJECTS.len());
            assert_eq!(count_for(&PROJECTS, category), visible.len());
        }
    }

    #[test]
    fn no_match_is_an_empty_list() {
        let only_web = [Project {
            id: "99",
            title: "LONE",
            category: Category::Web,
            label: Localized::same("Solo"),
            year: 2020,
            swatch: Swatch::Zinc800,
        }];
        assert!(filter_projects(&only_web, Category::Dashboard).is_empty());
        assert!(filter_projects(&[], Category::All).is_empty());
        assert_eq!(count_for(&only_web, Category::Integration), 0);
    }

    #[test]
    fn parses_tags() {
        assert_eq!("dashboard".parse::<Category>(), Ok(Category::Dashboard));
        assert_eq!(" Web ".parse::<Category>(), Ok(Category::Web));
        assert_eq!(
            "mobile".parse::<Category>(),
            Err(SiteError::UnknownCategory("mobile".into()))
        );
        for category in Category::ALL {
            assert_eq!(category.tag().parse::<Category>(), Ok(category));
        }
    }
}
