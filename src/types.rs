// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for linpeas-web

use std::fmt;

/// One titled segment of a LinPEAS report.
///
/// `body` keeps the original lines verbatim, terminal escapes included, so
/// the markup translator can turn them into styled spans later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub body: String,
}

impl Section {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// True when the body holds at least one non-whitespace character
    pub fn has_content(&self) -> bool {
        !self.body.trim().is_empty()
    }

    pub fn category(&self) -> Category {
        crate::classify::classify(&self.title)
    }
}

/// Topical bucket assigned to a section from its title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Authentication,
    Networking,
    Permissions,
    UsersAndGroups,
    ProcessesAndServices,
    Containers,
    Filesystem,
    Miscellaneous,
}

impl Category {
    pub fn all() -> [Category; 8] {
        [
            Category::Authentication,
            Category::Networking,
            Category::Permissions,
            Category::UsersAndGroups,
            Category::ProcessesAndServices,
            Category::Containers,
            Category::Filesystem,
            Category::Miscellaneous,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Authentication => "Authentication",
            Category::Networking => "Networking",
            Category::Permissions => "Permissions",
            Category::UsersAndGroups => "Users & Groups",
            Category::ProcessesAndServices => "Processes & Services",
            Category::Containers => "Containers",
            Category::Filesystem => "Filesystem",
            Category::Miscellaneous => "Miscellaneous",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sections grouped by category.
///
/// Categories appear in the order they were first seen; sections keep their
/// report order inside each group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorizedReport {
    groups: Vec<(Category, Vec<Section>)>,
}

impl CategorizedReport {
    pub fn from_sections(sections: impl IntoIterator<Item = Section>) -> Self {
        let mut report = Self::default();
        for section in sections {
            report.push(section);
        }
        report
    }

    pub fn push(&mut self, section: Section) {
        let category = section.category();
        match self.groups.iter_mut().find(|(c, _)| *c == category) {
            Some((_, items)) => items.push(section),
            None => self.groups.push((category, vec![section])),
        }
    }

    pub fn groups(&self) -> &[(Category, Vec<Section>)] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn section_count(&self) -> usize {
        self.groups.iter().map(|(_, items)| items.len()).sum()
    }
}
